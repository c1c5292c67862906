pub mod history;
pub mod ownership;
