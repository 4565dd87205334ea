use chrono::{Datelike, NaiveDate};

use crate::errors::AppError;
use crate::models::{BookingDraft, BookingRequest, SlotTime, Step, Visit};
use crate::services::validation;

impl BookingDraft {
    pub fn visit_date(&self, today: NaiveDate) -> Result<NaiveDate, AppError> {
        validation::validate_date(self.date.as_deref(), today)
            .map_err(|_| AppError::MissingBookingInfo)
    }

    pub fn slot(&self, today: NaiveDate) -> Result<(NaiveDate, SlotTime), AppError> {
        let date = self.visit_date(today)?;
        let time = validation::validate_time(self.time.as_deref())
            .map_err(|_| AppError::MissingBookingInfo)?;
        Ok((date, time))
    }

    pub fn visit(&self, today: NaiveDate) -> Result<Visit, AppError> {
        let (date, time) = self.slot(today)?;
        let visitors = validation::validate_visitors(self.visitors.as_deref())
            .map_err(|_| AppError::MissingBookingInfo)?;
        Ok(Visit {
            date,
            time,
            visitors,
        })
    }

    pub fn booking(&self, today: NaiveDate) -> Result<BookingRequest, AppError> {
        let visit = self.visit(today)?;
        let contact =
            validation::validate_contact(self).map_err(|_| AppError::MissingBookingInfo)?;
        Ok(BookingRequest { visit, contact })
    }

    /// Checks that every earlier step has left its value behind.
    pub fn require(&self, step: Step, today: NaiveDate) -> Result<(), AppError> {
        match step {
            Step::Date => Ok(()),
            Step::Time => self.visit_date(today).map(|_| ()),
            Step::Details => self.slot(today).map(|_| ()),
            Step::Contact => self.visit(today).map(|_| ()),
            Step::Payment => self.booking(today).map(|_| ()),
        }
    }

    /// Present fields in wizard order, form-encoded.
    pub fn query(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        let fields = [
            ("date", &self.date),
            ("time", &self.time),
            ("visitors", &self.visitors),
            ("name", &self.name),
            ("email", &self.email),
            ("whatsapp", &self.whatsapp),
        ];
        for (key, value) in fields {
            if let Some(v) = value {
                serializer.append_pair(key, v);
            }
        }
        serializer.finish()
    }

    pub fn url_for(&self, step: Step) -> String {
        let query = self.query();
        if query.is_empty() {
            step.path().to_string()
        } else {
            format!("{}?{query}", step.path())
        }
    }

    /// Only the fields collected before `step`.
    pub fn truncated_before(&self, step: Step) -> BookingDraft {
        let keep = |at: Step, v: &Option<String>| if at < step { v.clone() } else { None };
        BookingDraft {
            date: keep(Step::Date, &self.date),
            time: keep(Step::Time, &self.time),
            visitors: keep(Step::Details, &self.visitors),
            name: keep(Step::Contact, &self.name),
            email: keep(Step::Contact, &self.email),
            whatsapp: keep(Step::Contact, &self.whatsapp),
        }
    }

    /// Where the "Go back" link of `step` points.
    pub fn back_link(&self, step: Step) -> String {
        match step {
            Step::Date | Step::Time => "/home".to_string(),
            Step::Details => self.truncated_before(Step::Time).url_for(Step::Time),
            Step::Contact => self.truncated_before(Step::Details).url_for(Step::Details),
            Step::Payment => self.truncated_before(Step::Contact).url_for(Step::Contact),
        }
    }
}

impl From<&BookingRequest> for BookingDraft {
    fn from(req: &BookingRequest) -> Self {
        BookingDraft {
            date: Some(req.visit.date.format("%Y-%m-%d").to_string()),
            time: Some(req.visit.time.label()),
            visitors: Some(req.visit.visitors.to_string()),
            name: Some(req.contact.name.clone()),
            email: Some(req.contact.email.clone()),
            whatsapp: Some(req.contact.whatsapp.clone()),
        }
    }
}

pub fn total_amount(visitors: u32, ticket_price: u32) -> u32 {
    visitors.saturating_mul(ticket_price)
}

/// "October 18th, 2026"
pub fn format_date_long(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {day}{suffix}, {}", date.format("%B"), date.year())
}

/// "₹1,500"
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn full_draft() -> BookingDraft {
        BookingDraft {
            date: Some("2026-10-20".to_string()),
            time: Some("11:00".to_string()),
            visitors: Some("3".to_string()),
            name: Some("Asha Patil".to_string()),
            email: Some("asha@example.com".to_string()),
            whatsapp: Some("+919876543210".to_string()),
        }
    }

    #[test]
    fn test_require_checks_earlier_steps_only() {
        let draft = BookingDraft {
            date: Some("2026-10-20".to_string()),
            ..Default::default()
        };
        assert!(draft.require(Step::Date, today()).is_ok());
        assert!(draft.require(Step::Time, today()).is_ok());
        assert!(matches!(
            draft.require(Step::Details, today()),
            Err(AppError::MissingBookingInfo)
        ));
        assert!(BookingDraft::default().require(Step::Time, today()).is_err());
    }

    #[test]
    fn test_require_rejects_past_or_garbled_state() {
        let mut draft = full_draft();
        draft.date = Some("2026-10-01".to_string());
        assert!(draft.require(Step::Time, today()).is_err());

        let mut draft = full_draft();
        draft.visitors = Some("40".to_string());
        assert!(draft.require(Step::Contact, today()).is_err());

        let mut draft = full_draft();
        draft.email = Some("nope".to_string());
        assert!(draft.require(Step::Payment, today()).is_err());
        assert!(full_draft().require(Step::Payment, today()).is_ok());
    }

    #[test]
    fn test_booking_parses_every_field() {
        let req = full_draft().booking(today()).unwrap();
        assert_eq!(req.visit.time.label(), "11:00");
        assert_eq!(req.visit.visitors, 3);
        assert_eq!(req.contact.email, "asha@example.com");
        assert_eq!(BookingDraft::from(&req), full_draft());
    }

    #[test]
    fn test_query_in_wizard_order_and_encoded() {
        let q = full_draft().query();
        assert_eq!(
            q,
            "date=2026-10-20&time=11%3A00&visitors=3&name=Asha+Patil&email=asha%40example.com&whatsapp=%2B919876543210"
        );
        assert_eq!(BookingDraft::default().url_for(Step::Date), "/book/date");
    }

    #[test]
    fn test_back_links() {
        let draft = full_draft();
        assert_eq!(draft.back_link(Step::Time), "/home");
        assert_eq!(draft.back_link(Step::Details), "/book/time?date=2026-10-20");
        assert_eq!(
            draft.back_link(Step::Contact),
            "/book/details?date=2026-10-20&time=11%3A00"
        );
        assert_eq!(
            draft.back_link(Step::Payment),
            "/book/contact?date=2026-10-20&time=11%3A00&visitors=3"
        );
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(total_amount(3, 500), 1500);
        assert_eq!(total_amount(1, 500), 500);
    }

    #[test]
    fn test_format_date_long() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(format_date_long(d(2026, 10, 18)), "October 18th, 2026");
        assert_eq!(format_date_long(d(2026, 10, 1)), "October 1st, 2026");
        assert_eq!(format_date_long(d(2026, 10, 22)), "October 22nd, 2026");
        assert_eq!(format_date_long(d(2026, 10, 23)), "October 23rd, 2026");
        assert_eq!(format_date_long(d(2026, 10, 11)), "October 11th, 2026");
        assert_eq!(format_date_long(d(2026, 10, 13)), "October 13th, 2026");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(500), "₹500");
        assert_eq!(format_rupees(1500), "₹1,500");
        assert_eq!(format_rupees(5000), "₹5,000");
        assert_eq!(format_rupees(1234567), "₹1,234,567");
    }
}
