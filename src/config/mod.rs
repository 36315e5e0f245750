//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (provider URLs, timeouts, sentinel values)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, Endpoints, GeoIpProviderKind, LogFormat, LogLevel};
