//! Shared state for processing addresses.

use std::sync::Arc;

use crate::cloud::CloudTables;
use crate::config::Config;
use crate::error_handling::ProcessingStats;
use crate::geoip::GeoIpProvider;
use crate::ranges::{AwsRanges, MsftRanges};

/// Everything a single address lookup needs.
///
/// Built once before the loop. The range tables are read-only afterwards.
pub struct LookupContext {
    /// Shared HTTP client for every collaborator
    pub client: reqwest::Client,
    /// ARIN WHOIS base URL
    pub whois_url: String,
    /// Azure service tag lookup URL
    pub azure_url: String,
    /// GeoIP provider for this run
    pub geoip: GeoIpProvider,
    /// AWS range table, if it could be loaded
    pub aws_ranges: Option<AwsRanges>,
    /// Microsoft 365 endpoint table, if it could be loaded
    pub msft_ranges: Option<MsftRanges>,
    /// Error and info counters
    pub stats: Arc<ProcessingStats>,
}

impl LookupContext {
    pub fn new(
        client: reqwest::Client,
        config: &Config,
        aws_ranges: Option<AwsRanges>,
        msft_ranges: Option<MsftRanges>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            client,
            whois_url: config.endpoints.whois.clone(),
            azure_url: config.endpoints.azure.clone(),
            geoip: GeoIpProvider::from_config(config),
            aws_ranges,
            msft_ranges,
            stats,
        }
    }

    pub(crate) fn tables(&self) -> CloudTables<'_> {
        CloudTables {
            aws: self.aws_ranges.as_ref(),
            msft: self.msft_ranges.as_ref(),
        }
    }
}
