use log::Level;

pub const SITE_NAME: &str = "FinanceActuarial AI";
pub const CONTACT_EMAIL: &str = "contact@finance-actuarial.ai";
pub const CONTACT_PHONE: &str = "+33 1 23 45 67 89";
pub const CONTACT_CITY: &str = "Paris, France";

// Reveal staggering, in milliseconds per item.
pub const STAT_STAGGER_MS: u32 = 200;
pub const SERVICE_STAGGER_MS: u32 = 100;
pub const DOCUMENT_STAGGER_MS: u32 = 150;

pub const CHATBOT_REPLY_DELAY_MS: u32 = 700;
pub const HEADER_SCROLL_THRESHOLD: f64 = 80.0;
pub const PASSWORD_MIN_LENGTH: &str = "8";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
