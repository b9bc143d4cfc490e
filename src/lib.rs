// Core modules
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
