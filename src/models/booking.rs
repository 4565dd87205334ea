use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slot::SlotTime;

pub const MIN_VISITORS: u32 = 1;
pub const MAX_VISITORS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Date,
    Time,
    Details,
    Contact,
    Payment,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Date,
        Step::Time,
        Step::Details,
        Step::Contact,
        Step::Payment,
    ];

    pub fn number(&self) -> usize {
        match self {
            Step::Date => 1,
            Step::Time => 2,
            Step::Details => 3,
            Step::Contact => 4,
            Step::Payment => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Step::Date => "Select Date",
            Step::Time => "Select Time",
            Step::Details => "Visitor Details",
            Step::Contact => "Contact Details",
            Step::Payment => "Payment",
        }
    }

    pub fn title(&self) -> String {
        let heading = match self {
            Step::Date => "Select a Date",
            Step::Time => "Select a Time",
            Step::Details => "Visitor Details",
            Step::Contact => "Contact Details",
            Step::Payment => "Payment",
        };
        format!("Step {}: {heading}", self.number())
    }

    pub fn path(&self) -> &'static str {
        match self {
            Step::Date => "/book/date",
            Step::Time => "/book/time",
            Step::Details => "/book/details",
            Step::Contact => "/book/contact",
            Step::Payment => "/book/payment",
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Date => Some(Step::Time),
            Step::Time => Some(Step::Details),
            Step::Details => Some(Step::Contact),
            Step::Contact => Some(Step::Payment),
            Step::Payment => None,
        }
    }
}

/// Raw wizard state as it travels between steps in the query string and in
/// hidden form fields. Nothing here is trusted until a step parses it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingDraft {
    pub date: Option<String>,
    pub time: Option<String>,
    pub visitors: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub date: NaiveDate,
    pub time: SlotTime,
    pub visitors: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub visit: Visit,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone)]
pub struct ConfirmedBooking {
    pub reference: Uuid,
    pub request: BookingRequest,
    pub total_amount: u32,
}

impl ConfirmedBooking {
    pub fn visitor_noun(&self) -> &'static str {
        visitor_noun(self.request.visit.visitors)
    }
}

pub fn visitor_noun(visitors: u32) -> &'static str {
    if visitors > 1 {
        "people"
    } else {
        "person"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
