pub mod ai;
pub mod app;
pub mod gateway;
