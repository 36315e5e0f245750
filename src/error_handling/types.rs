//! Error type definitions.
//!
//! This module defines all error and info types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A line of the source file that is not an IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLine {
    /// 1-based line number
    pub line_number: usize,
    /// The trimmed line content
    pub content: String,
}

/// Pre-flight validation failures. Any of these aborts the run before lookups begin.
#[derive(Error, Debug)]
pub enum InputValidationError {
    /// The source file could not be read.
    #[error("Failed to read source file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// One or more lines are not valid IPv4 addresses.
    #[error("The input file contained {} invalid IP address(es)", .0.len())]
    InvalidAddresses(Vec<InvalidLine>),
}

/// Failure to obtain a range table from either the cache file or the remote URL.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The remote request failed or timed out.
    #[error("Failed to download {provider} ranges: {source}")]
    Fetch {
        provider: &'static str,
        #[source]
        source: ReqwestError,
    },

    /// The remote answered with a non-success status.
    #[error("Failed to download {provider} ranges: HTTP {status}")]
    Status { provider: &'static str, status: u16 },

    /// The downloaded body is not JSON of the expected shape.
    #[error("Failed to parse {provider} ranges: {source}")]
    Parse {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-address lookup failures. None of these are fatal to the run.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Network failure or timeout.
    #[error("request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The service answered with a non-success status.
    #[error("request failed: HTTP {0}")]
    Status(u16),

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Malformed(String),

    /// The provider answered but reported a failure status.
    #[error("provider declined the lookup")]
    Declined,
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Malformed(e.to_string())
    }
}

/// Types of errors that can occur while processing an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    WhoisTransportError,
    WhoisStatusError,
    WhoisMalformedResponse,
    GeoIpTransportError,
    GeoIpStatusError,
    GeoIpMalformedResponse,
    GeoIpDeclined,
    AzureLookupError,
}

/// Types of informational metrics recorded while processing an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    AddressSkipped,
    AwsClassified,
    MicrosoftClassified,
    MicrosoftFallback,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::WhoisTransportError => "WHOIS request error",
            ErrorType::WhoisStatusError => "WHOIS HTTP status error",
            ErrorType::WhoisMalformedResponse => "WHOIS malformed response",
            ErrorType::GeoIpTransportError => "GeoIP request error",
            ErrorType::GeoIpStatusError => "GeoIP HTTP status error",
            ErrorType::GeoIpMalformedResponse => "GeoIP malformed response",
            ErrorType::GeoIpDeclined => "GeoIP provider declined",
            ErrorType::AzureLookupError => "Azure service tag lookup error",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::AddressSkipped => "Skipped (not a global address)",
            InfoType::AwsClassified => "AWS address",
            InfoType::MicrosoftClassified => "Microsoft address",
            InfoType::MicrosoftFallback => "Microsoft address without 365 match",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str_unique() {
        let labels: HashSet<&str> = ErrorType::iter().map(|e| e.as_str()).collect();
        assert_eq!(labels.len(), ErrorType::iter().count());
    }

    #[test]
    fn test_error_type_display_matches_as_str() {
        for e in ErrorType::iter() {
            assert_eq!(e.to_string(), e.as_str());
        }
    }

    #[test]
    fn test_invalid_addresses_message_counts_lines() {
        let err = InputValidationError::InvalidAddresses(vec![
            InvalidLine {
                line_number: 1,
                content: "999.1.1.1".to_string(),
            },
            InvalidLine {
                line_number: 4,
                content: "not-an-ip".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "The input file contained 2 invalid IP address(es)"
        );
    }

    #[test]
    fn test_serde_error_is_malformed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LookupError = parse_err.into();
        assert!(matches!(err, LookupError::Malformed(_)));
    }
}
