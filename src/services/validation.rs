use chrono::NaiveDate;

use crate::errors::ValidationErrors;
use crate::models::booking::{MAX_VISITORS, MIN_VISITORS};
use crate::models::{BookingDraft, ContactDetails, LoginForm, SlotTime};

pub fn validate_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let parsed = raw
        .map(str::trim)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());

    match parsed {
        None => errors.push("date", "Please choose a date for your visit."),
        Some(date) if date < today => {
            errors.push("date", "Please choose a date that is today or later.")
        }
        Some(_) => {}
    }
    errors.into_result(parsed.unwrap_or(today))
}

pub fn validate_time(raw: Option<&str>) -> Result<SlotTime, ValidationErrors> {
    raw.and_then(SlotTime::parse).ok_or_else(|| {
        let mut errors = ValidationErrors::default();
        errors.push("time", "Please choose a valid time slot.");
        errors
    })
}

/// Coerces the visitor count the way a number input does: blank counts as
/// zero, anything non-numeric is rejected outright.
pub fn validate_visitors(raw: Option<&str>) -> Result<u32, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let raw = raw.map(str::trim).unwrap_or("");
    let value: i64 = if raw.is_empty() {
        0
    } else {
        match raw.parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                errors.push("numberOfVisitors", "Expected a number.");
                return Err(errors);
            }
        }
    };

    if value < MIN_VISITORS as i64 {
        errors.push("numberOfVisitors", "You must have at least one visitor.");
    } else if value > MAX_VISITORS as i64 {
        errors.push("numberOfVisitors", "You can book for a maximum of 10 visitors.");
    }
    errors.into_result(value.clamp(0, MAX_VISITORS as i64) as u32)
}

pub fn validate_contact(draft: &BookingDraft) -> Result<ContactDetails, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let name = draft.name.as_deref().unwrap_or("").trim();
    let email = draft.email.as_deref().unwrap_or("").trim();
    let whatsapp = draft.whatsapp.as_deref().unwrap_or("").trim();

    if name.is_empty() {
        errors.push("name", "Name is required.");
    }
    if !is_valid_email(email) {
        errors.push("email", "Invalid email address.");
    }
    let digits = whatsapp.chars().count();
    if digits < 10 {
        errors.push("whatsapp", "WhatsApp number must be at least 10 digits.");
    } else if digits > 15 {
        errors.push("whatsapp", "WhatsApp number cannot exceed 15 digits.");
    }

    errors.into_result(ContactDetails {
        name: name.to_string(),
        email: email.to_string(),
        whatsapp: whatsapp.to_string(),
    })
}

pub fn validate_login(form: &LoginForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if !is_valid_email(form.email.trim()) {
        errors.push("email", "Please enter a valid email address.");
    }
    if form.password.is_empty() {
        errors.push("password", "Password is required.");
    }
    errors.into_result(())
}

pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let tld = labels[labels.len() - 1];
    labels
        .iter()
        .all(|l| !l.is_empty() && !l.starts_with('-') && !l.ends_with('-'))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn contact(name: &str, email: &str, whatsapp: &str) -> BookingDraft {
        BookingDraft {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            whatsapp: Some(whatsapp.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_date_today_and_future_accepted() {
        assert_eq!(validate_date(Some("2026-10-18"), today()), Ok(today()));
        assert!(validate_date(Some("2026-12-01"), today()).is_ok());
    }

    #[test]
    fn test_date_past_rejected() {
        let err = validate_date(Some("2026-10-17"), today()).unwrap_err();
        assert_eq!(
            err.message_for("date"),
            Some("Please choose a date that is today or later.")
        );
    }

    #[test]
    fn test_date_missing_or_malformed() {
        assert!(validate_date(None, today()).is_err());
        assert!(validate_date(Some("18/10/2026"), today()).is_err());
        assert!(validate_date(Some("2026-02-30"), today()).is_err());
    }

    #[test]
    fn test_time_must_be_a_slot() {
        assert_eq!(validate_time(Some("13:00")).unwrap().hour(), 13);
        assert!(validate_time(Some("07:00")).is_err());
        assert!(validate_time(None).is_err());
    }

    #[test]
    fn test_visitors_bounds() {
        assert_eq!(validate_visitors(Some("1")), Ok(1));
        assert_eq!(validate_visitors(Some(" 10 ")), Ok(10));
        assert_eq!(
            validate_visitors(Some("0")).unwrap_err().message_for("numberOfVisitors"),
            Some("You must have at least one visitor.")
        );
        assert_eq!(
            validate_visitors(Some("11")).unwrap_err().message_for("numberOfVisitors"),
            Some("You can book for a maximum of 10 visitors.")
        );
        assert_eq!(
            validate_visitors(Some("")).unwrap_err().message_for("numberOfVisitors"),
            Some("You must have at least one visitor.")
        );
        assert_eq!(
            validate_visitors(Some("two")).unwrap_err().message_for("numberOfVisitors"),
            Some("Expected a number.")
        );
    }

    #[test]
    fn test_contact_valid() {
        let details =
            validate_contact(&contact(" Asha Patil ", "asha@example.com", "+919876543210")).unwrap();
        assert_eq!(details.name, "Asha Patil");
        assert_eq!(details.whatsapp, "+919876543210");
    }

    #[test]
    fn test_contact_collects_every_error() {
        let err = validate_contact(&contact("", "not-an-email", "12345")).unwrap_err();
        assert_eq!(err.0.len(), 3);
        assert_eq!(err.message_for("name"), Some("Name is required."));
        assert_eq!(err.message_for("email"), Some("Invalid email address."));
        assert_eq!(
            err.message_for("whatsapp"),
            Some("WhatsApp number must be at least 10 digits.")
        );
    }

    #[test]
    fn test_contact_whatsapp_too_long() {
        let err = validate_contact(&contact("A", "a@b.co", "1234567890123456")).unwrap_err();
        assert_eq!(
            err.message_for("whatsapp"),
            Some("WhatsApp number cannot exceed 15 digits.")
        );
    }

    #[test]
    fn test_login() {
        let ok = LoginForm {
            email: "citizen@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(validate_login(&ok).is_ok());

        let err = validate_login(&LoginForm::default()).unwrap_err();
        assert_eq!(err.message_for("email"), Some("Please enter a valid email address."));
        assert_eq!(err.message_for("password"), Some("Password is required."));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("john.doe@example.com"));
        assert!(is_valid_email("a+tag@sub.example.in"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john doe@example.com"));
        assert!(!is_valid_email("john@@example.com"));
        assert!(!is_valid_email("john..doe@example.com"));
        assert!(!is_valid_email("john@example.c"));
    }
}
