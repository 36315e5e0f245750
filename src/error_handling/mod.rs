//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, input validation, range
//!   loading and per-address lookups
//! - Processing statistics tracking (errors and info metrics)
//! - Error categorization for statistics
//!
//! Only initialization and input validation errors end a run. Lookup errors are
//! logged, counted and replaced by sentinel values.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_lookup_error, update_error_stats, LookupSource};
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, InfoType, InitializationError, InputValidationError, InvalidLine, LoadError,
    LookupError,
};
