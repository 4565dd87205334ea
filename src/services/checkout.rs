use uuid::Uuid;

use crate::errors::ReservationError;
use crate::models::{BookingRequest, ConfirmedBooking};
use crate::services::availability::SlotLedger;
use crate::services::wizard::total_amount;

/// Dummy payment: no money moves. Takes the tickets out of the ledger and
/// hands back a confirmation with a fresh reference.
pub fn confirm_booking(
    ledger: &SlotLedger,
    request: BookingRequest,
    ticket_price: u32,
) -> Result<ConfirmedBooking, ReservationError> {
    let visit = &request.visit;
    let remaining = ledger.reserve(visit.date, visit.time, visit.visitors)?;

    let confirmed = ConfirmedBooking {
        reference: Uuid::new_v4(),
        total_amount: total_amount(visit.visitors, ticket_price),
        request,
    };

    tracing::info!(
        reference = %confirmed.reference,
        date = %confirmed.request.visit.date,
        time = %confirmed.request.visit.time,
        visitors = confirmed.request.visit.visitors,
        email = %confirmed.request.contact.email,
        total = confirmed.total_amount,
        remaining,
        "booking confirmed (dummy payment)"
    );

    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContactDetails, SlotTime, Visit};
    use chrono::NaiveDate;

    fn request(visitors: u32) -> BookingRequest {
        BookingRequest {
            visit: Visit {
                // 09:00 on the 5th has 5 tickets
                date: NaiveDate::from_ymd_opt(2026, 11, 5).unwrap(),
                time: SlotTime::from_hour(9).unwrap(),
                visitors,
            },
            contact: ContactDetails {
                name: "Asha".to_string(),
                email: "asha@example.com".to_string(),
                whatsapp: "9876543210".to_string(),
            },
        }
    }

    #[test]
    fn test_confirm_charges_per_visitor() {
        let ledger = SlotLedger::new(20, 200);
        let confirmed = confirm_booking(&ledger, request(3), 500).unwrap();
        assert_eq!(confirmed.total_amount, 1500);
        assert_eq!(confirmed.visitor_noun(), "people");
        assert_eq!(
            ledger.available(confirmed.request.visit.date, confirmed.request.visit.time),
            2
        );
    }

    #[test]
    fn test_confirm_assigns_distinct_references() {
        let ledger = SlotLedger::new(20, 200);
        let a = confirm_booking(&ledger, request(1), 500).unwrap();
        let b = confirm_booking(&ledger, request(1), 500).unwrap();
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn test_confirm_refuses_when_short() {
        let ledger = SlotLedger::new(20, 200);
        let err = confirm_booking(&ledger, request(6), 500).unwrap_err();
        assert_eq!(err, ReservationError::InsufficientTickets { available: 5 });
    }
}
