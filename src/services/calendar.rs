use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::models::booking::visitor_noun;
use crate::models::slot::SLOT_DURATION_MINUTES;
use crate::models::BookingRequest;

pub fn generate_ics(
    reference: &str,
    request: &BookingRequest,
    center_name: &str,
    stamp: DateTime<Utc>,
) -> String {
    let start = request.visit.date.and_time(
        NaiveTime::from_hms_opt(request.visit.time.hour(), 0, 0).unwrap_or_default(),
    );
    let end = start + Duration::minutes(SLOT_DURATION_MINUTES);

    let dtstart = start.format("%Y%m%dT%H%M%S");
    let dtend = end.format("%Y%m%dT%H%M%S");
    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ");
    let uid = format!("{reference}@citizexperience");
    let visitors = request.visit.visitors;

    let summary = escape_text(&format!("CitizExperience visit at {center_name}"));
    let description = escape_text(&format!(
        "Booking {reference} for {visitors} {} under {}",
        visitor_noun(visitors),
        request.contact.name
    ));
    let location = escape_text(center_name);

    format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//CitizExperience//Visit Booking//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         LOCATION:{location}\r\n\
         DESCRIPTION:{description}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    )
}

// RFC 5545 TEXT escaping. Line breaks of any kind become a literal `\n`;
// other control characters are dropped so no value can start a new property.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}
