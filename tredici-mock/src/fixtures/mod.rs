pub mod history;
pub mod holdings;
