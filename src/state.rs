use chrono::{Local, NaiveDate};

use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::services::availability::SlotLedger;

pub struct AppState {
    pub config: AppConfig,
    pub llm: Box<dyn LlmProvider>,
    pub ledger: SlotLedger,
}

impl AppState {
    pub fn new(config: AppConfig, llm: Box<dyn LlmProvider>) -> Self {
        let ledger = SlotLedger::new(config.slot_capacity, config.daily_ticket_limit);
        Self {
            config,
            llm,
            ledger,
        }
    }

    /// Visit dates are calendar dates at the center, so "today" is local.
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
