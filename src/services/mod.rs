pub mod ai;
pub mod availability;
pub mod calendar;
pub mod checkout;
pub mod validation;
pub mod wizard;
