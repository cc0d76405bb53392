//! Application module
//!
//! This module contains application-level functionality:
//! - Configuration handling
//! - Logging setup
//! - Fatal error reporting

pub mod config;
pub mod error_handling;
pub mod logging;

pub use config::{AppConfig, CliOverrides, ConfigFile};
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
