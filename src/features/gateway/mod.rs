pub mod handlers;
pub mod prompt;
pub mod types;
