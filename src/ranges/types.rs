//! Range table data structures.
//!
//! Field names follow the published JSON documents.

use ipnetwork::{IpNetwork, Ipv4Network};
use serde::Deserialize;

/// AWS `ip-ranges.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsRanges {
    /// Publication time as Unix seconds, reported when the table is loaded
    #[serde(default)]
    pub sync_token: String,
    /// IPv4 prefixes in published order. `ipv6_prefixes` is not read.
    pub prefixes: Vec<AwsPrefix>,
}

/// One AWS prefix record.
///
/// AWS publishes a prefix once per service using it, so the same block
/// usually appears under the aggregate `AMAZON` service and again under the
/// specific one (`EC2`, `S3`, `CLOUDFRONT`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AwsPrefix {
    pub ip_prefix: Ipv4Network,
    pub region: String,
    pub service: String,
}

/// Microsoft 365 `worldwide` endpoints document: a sequence of endpoint sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct MsftRanges {
    pub endpoint_sets: Vec<MsftEndpointSet>,
}

/// One Microsoft 365 endpoint set. Sets that only list URLs have no `ips`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsftEndpointSet {
    #[serde(default)]
    pub service_area: String,
    #[serde(default)]
    pub service_area_display_name: String,
    /// Mixed IPv4 and IPv6 blocks
    #[serde(default)]
    pub ips: Vec<IpNetwork>,
}

/// Tables that can be loaded by [`super::load_table`].
pub trait RangeTable: serde::de::DeserializeOwned {
    /// Number of prefix records, for logging
    fn entry_count(&self) -> usize;

    /// Publisher's version marker, if the document carries one
    fn version(&self) -> Option<&str> {
        None
    }
}

impl RangeTable for AwsRanges {
    fn entry_count(&self) -> usize {
        self.prefixes.len()
    }

    fn version(&self) -> Option<&str> {
        Some(self.sync_token.as_str()).filter(|token| !token.is_empty())
    }
}

impl RangeTable for MsftRanges {
    fn entry_count(&self) -> usize {
        self.endpoint_sets.len()
    }
}
