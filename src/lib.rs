pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod notify;
pub mod ui;
