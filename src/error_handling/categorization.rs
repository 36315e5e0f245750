//! Error categorization.

use super::stats::ProcessingStats;
use super::types::{ErrorType, LookupError};

/// Which collaborator a lookup error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    Whois,
    GeoIp,
    Azure,
}

/// Categorizes a `LookupError` into an `ErrorType`.
pub fn categorize_lookup_error(source: LookupSource, error: &LookupError) -> ErrorType {
    match source {
        LookupSource::Whois => match error {
            LookupError::Transport(_) => ErrorType::WhoisTransportError,
            LookupError::Status(_) => ErrorType::WhoisStatusError,
            LookupError::Malformed(_) | LookupError::Declined => ErrorType::WhoisMalformedResponse,
        },
        LookupSource::GeoIp => match error {
            LookupError::Transport(_) => ErrorType::GeoIpTransportError,
            LookupError::Status(_) => ErrorType::GeoIpStatusError,
            LookupError::Malformed(_) => ErrorType::GeoIpMalformedResponse,
            LookupError::Declined => ErrorType::GeoIpDeclined,
        },
        LookupSource::Azure => ErrorType::AzureLookupError,
    }
}

/// Records a lookup error in the processing statistics.
pub fn update_error_stats(stats: &ProcessingStats, source: LookupSource, error: &LookupError) {
    stats.increment_error(categorize_lookup_error(source, error));
}
