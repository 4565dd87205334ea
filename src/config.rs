use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub llm_provider: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub center_name: String,
    pub center_location: String,
    pub ticket_price: u32,
    pub slot_capacity: u32,
    pub daily_ticket_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or("PORT", defaults.port),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or(defaults.llm_provider),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            ollama_url: env::var("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            center_name: env::var("CENTER_NAME").unwrap_or(defaults.center_name),
            center_location: env::var("CENTER_LOCATION").unwrap_or(defaults.center_location),
            ticket_price: parse_or("TICKET_PRICE", defaults.ticket_price),
            slot_capacity: parse_or("SLOT_CAPACITY", defaults.slot_capacity),
            daily_ticket_limit: parse_or("DAILY_TICKET_LIMIT", defaults.daily_ticket_limit),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            llm_provider: "gemini".to_string(),
            gemini_api_key: String::new(),
            gemini_model: "gemini-2.0-flash".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            center_name: "Mahakavi Kalidas Kalamandir, Nashik".to_string(),
            center_location: "19.9999477,73.7845846".to_string(),
            ticket_price: 500,
            slot_capacity: 20,
            daily_ticket_limit: 120,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
