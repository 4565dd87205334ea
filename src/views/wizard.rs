use chrono::NaiveDate;

use super::{escape, field_error, hidden_fields, layout, notice};
use crate::errors::ValidationErrors;
use crate::models::booking::{visitor_noun, MAX_VISITORS, MIN_VISITORS};
use crate::models::{BookingDraft, BookingRequest, ConfirmedBooking, SlotAvailability, Step};
use crate::services::wizard::{format_date_long, format_rupees, total_amount};

pub fn progress(current: Step) -> String {
    let items: String = Step::ALL
        .iter()
        .map(|step| {
            let class = if *step == current {
                "current"
            } else if *step < current {
                "done"
            } else {
                "todo"
            };
            format!(
                r#"<li class="{class}"><span class="dot">{}</span>{}</li>"#,
                step.number(),
                step.label()
            )
        })
        .collect();
    format!(r#"<ol class="progress">{items}</ol>"#)
}

fn step_page(step: Step, description: &str, content: &str, back: Option<&str>) -> String {
    let back_link = back
        .map(|href| {
            format!(
                r#"<a class="button back" href="{}">&larr; Go back</a>"#,
                escape(href)
            )
        })
        .unwrap_or_default();
    let body = format!(
        r#"<a class="button back" href="/home">&larr; Back to Home</a>
{progress}
<div class="card">
  <h2>{title}</h2>
  <p class="muted">{description}</p>
  {content}
  {back_link}
</div>"#,
        progress = progress(step),
        title = step.title(),
    );
    layout(&step.title(), &body)
}

pub fn date_page(
    today: NaiveDate,
    selected: Option<&str>,
    errors: Option<&ValidationErrors>,
    missing_info: bool,
) -> String {
    let min = today.format("%Y-%m-%d").to_string();
    let value = selected.map(escape).unwrap_or_else(|| min.clone());
    let alert = if missing_info {
        notice("Missing booking information. Please start again.")
    } else {
        String::new()
    };
    let date_error = field_error(errors, "date");

    let content = format!(
        r#"{alert}
  <form method="post" action="/book/date">
    <input type="date" name="date" min="{min}" value="{value}" required>
    {date_error}
    <button type="submit" class="primary">Next &rarr;</button>
  </form>"#
    );
    step_page(Step::Date, "Choose the date for your visit.", &content, None)
}

pub fn time_page(
    draft: &BookingDraft,
    date: NaiveDate,
    slots: &[SlotAvailability],
    error: Option<&str>,
) -> String {
    let buttons: String = slots
        .iter()
        .map(|slot| {
            let disabled = if slot.sold_out { " disabled" } else { "" };
            format!(
                r#"<button type="submit" name="time" value="{time}" class="slot"{disabled}><strong>{time}</strong><span>{status}</span></button>"#,
                time = slot.time,
                status = slot.status_label(),
            )
        })
        .collect();
    let alert = error.map(notice).unwrap_or_default();

    let content = format!(
        r#"{alert}
  <form method="post" action="/book/time" class="slot-grid">
    {hidden}
    {buttons}
  </form>"#,
        hidden = hidden_fields(&draft.truncated_before(Step::Time)),
    );
    let description = format!(
        "Choose a time for your visit on <strong>{}</strong>.",
        format_date_long(date)
    );
    step_page(
        Step::Time,
        &description,
        &content,
        Some(&draft.back_link(Step::Time)),
    )
}

pub fn details_page(
    draft: &BookingDraft,
    date: NaiveDate,
    visitors: &str,
    ticket_price: u32,
    errors: Option<&ValidationErrors>,
) -> String {
    let shown_total = visitors
        .trim()
        .parse::<u32>()
        .map(|n| total_amount(n, ticket_price))
        .unwrap_or(0);
    let visitors_error = field_error(errors, "numberOfVisitors");
    let time = escape(draft.time.as_deref().unwrap_or_default());

    let content = format!(
        r#"<form method="post" action="/book/details">
    {hidden}
    <label for="visitors">Number of Visitors</label>
    <input id="visitors" type="number" name="visitors" min="{MIN_VISITORS}" max="{MAX_VISITORS}" value="{value}"
      oninput="document.getElementById('total').textContent = '₹' + ((this.valueAsNumber || 0) * {ticket_price}).toLocaleString()">
    {visitors_error}
    <div class="total"><span>Total Amount:</span> <span id="total">{total}</span></div>
    <button type="submit" class="primary">Next &rarr;</button>
  </form>"#,
        hidden = hidden_fields(&draft.truncated_before(Step::Details)),
        value = escape(visitors),
        total = format_rupees(shown_total),
    );
    let description = format!(
        "Enter details for your visit on <strong>{}</strong> at <strong>{time}</strong>.",
        format_date_long(date)
    );
    step_page(
        Step::Details,
        &description,
        &content,
        Some(&draft.back_link(Step::Details)),
    )
}

pub fn contact_page(draft: &BookingDraft, errors: Option<&ValidationErrors>) -> String {
    let value = |v: &Option<String>| escape(v.as_deref().unwrap_or_default());

    let content = format!(
        r#"<form method="post" action="/book/contact" novalidate>
    {hidden}
    <label for="name">Full Name</label>
    <input id="name" name="name" placeholder="e.g. John Doe" value="{name}">
    {name_error}
    <label for="email">Email Address</label>
    <input id="email" type="email" name="email" placeholder="e.g. john.doe@example.com" value="{email}">
    {email_error}
    <label for="whatsapp">WhatsApp Number</label>
    <input id="whatsapp" type="tel" name="whatsapp" placeholder="e.g. +919876543210" value="{whatsapp}">
    {whatsapp_error}
    <button type="submit" class="primary">Continue to Payment</button>
  </form>"#,
        hidden = hidden_fields(&draft.truncated_before(Step::Contact)),
        name = value(&draft.name),
        email = value(&draft.email),
        whatsapp = value(&draft.whatsapp),
        name_error = field_error(errors, "name"),
        email_error = field_error(errors, "email"),
        whatsapp_error = field_error(errors, "whatsapp"),
    );
    step_page(
        Step::Contact,
        "Please provide your contact information to finalize the booking.",
        &content,
        Some(&draft.back_link(Step::Contact)),
    )
}

fn summary_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="row"><span class="muted">{label}</span><span>{}</span></div>"#,
        escape(value)
    )
}

pub fn payment_page(request: &BookingRequest, ticket_price: u32, error: Option<&str>) -> String {
    let draft = BookingDraft::from(request);
    let visit = &request.visit;
    let contact = &request.contact;
    let total = total_amount(visit.visitors, ticket_price);
    let alert = error.map(notice).unwrap_or_default();

    let content = format!(
        r#"{alert}
  <div class="summary">
    {name}{email}{whatsapp}
    <hr>
    {date}{time}{visitors}
    <hr>
    <div class="total"><span>Total Amount:</span> <span>{total}</span></div>
  </div>
  <form method="post" action="/book/payment">
    {hidden}
    <button type="submit" class="primary">Pay Now</button>
  </form>"#,
        name = summary_row("Name", &contact.name),
        email = summary_row("Email", &contact.email),
        whatsapp = summary_row("WhatsApp", &contact.whatsapp),
        date = summary_row("Visit Date", &format_date_long(visit.date)),
        time = summary_row("Visit Time", &visit.time.label()),
        visitors = summary_row("Visitors", &visit.visitors.to_string()),
        total = format_rupees(total),
        hidden = hidden_fields(&draft),
    );
    step_page(
        Step::Payment,
        "Review your booking details and proceed to payment.",
        &content,
        Some(&draft.back_link(Step::Payment)),
    )
}

pub fn confirmation_message(confirmed: &ConfirmedBooking) -> String {
    let visit = &confirmed.request.visit;
    format!(
        "Your visit for {} {} on {} at {} is booked.",
        visit.visitors,
        visitor_noun(visit.visitors),
        format_date_long(visit.date),
        visit.time
    )
}

pub fn confirmation_page(confirmed: &ConfirmedBooking) -> String {
    let draft = BookingDraft::from(&confirmed.request);
    let ics_url = format!(
        "/book/confirmation.ics?{}&reference={}",
        draft.query(),
        confirmed.reference
    );

    let body = format!(
        r#"<dialog open class="confirmation">
  <div class="check">&#10003;</div>
  <h2>Booking Confirmed!</h2>
  <p>{message}</p>
  <p>Total amount paid: <strong>{total}</strong></p>
  <p>A confirmation has been sent to {email}.</p>
  <p class="muted small">Booking reference: {reference}</p>
  <a class="button" href="{ics}">Add to Calendar</a>
  <a class="button primary" href="/home">Back to Home</a>
</dialog>"#,
        message = escape(&confirmation_message(confirmed)),
        total = format_rupees(confirmed.total_amount),
        email = escape(&confirmed.request.contact.email),
        reference = confirmed.reference,
        ics = escape(&ics_url),
    );
    layout("Booking Confirmed", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotTime;

    fn draft() -> BookingDraft {
        BookingDraft {
            date: Some("2026-10-20".to_string()),
            time: Some("10:00".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_progress_marks_steps() {
        let html = progress(Step::Details);
        assert!(html.contains(r#"<li class="done"><span class="dot">2</span>Select Time</li>"#));
        assert!(html.contains(r#"<li class="current"><span class="dot">3</span>Visitor Details</li>"#));
        assert!(html.contains(r#"<li class="todo"><span class="dot">5</span>Payment</li>"#));
    }

    #[test]
    fn test_time_page_disables_sold_out_slots() {
        let slots = vec![
            SlotAvailability::new(SlotTime::from_hour(9).unwrap(), 0),
            SlotAvailability::new(SlotTime::from_hour(10).unwrap(), 4),
        ];
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let html = time_page(&draft(), date, &slots, None);
        assert!(html.contains(r#"value="09:00" class="slot" disabled"#));
        assert!(html.contains("Sold Out"));
        assert!(html.contains("4 available"));
        assert!(html.contains("October 20th, 2026"));
        // the chosen time is not carried back into the slot form
        assert!(!html.contains(r#"type="hidden" name="time""#));
    }

    #[test]
    fn test_details_page_shows_total() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let html = details_page(&draft(), date, "3", 500, None);
        assert!(html.contains(r#"<span id="total">₹1,500</span>"#));
        assert!(html.contains("/book/time?date=2026-10-20"));
    }
}
