//! Prefix matching against provider range tables.
//!
//! The address is treated as a /32 network and an entry matches when that
//! network is a subnet of the entry's block. Entries are visited in table
//! order, so a given table and address always produce the same result.

use std::future::Future;
use std::net::Ipv4Addr;

use ipnetwork::{IpNetwork, Ipv4Network};

use crate::config::MSFT_GENERIC_LABEL;
use crate::ranges::{AwsPrefix, AwsRanges, MsftEndpointSet, MsftRanges};

/// Returns true if `host` lies entirely within `block`.
fn is_subnet_of(host: Ipv4Network, block: Ipv4Network) -> bool {
    block.prefix() <= host.prefix() && block.contains(host.network())
}

fn block_contains(block: &IpNetwork, host: Ipv4Network) -> bool {
    match block {
        IpNetwork::V4(v4) => is_subnet_of(host, *v4),
        IpNetwork::V6(_) => false,
    }
}

/// Finds the descriptive AWS record for an address.
///
/// AWS lists each allocation twice: once under the aggregate `AMAZON`
/// service and once under the specific service, in that order. The second
/// matching entry is returned. With fewer than two matches there is no
/// descriptive record and `None` is returned.
pub fn match_aws(addr: Ipv4Addr, table: &AwsRanges) -> Option<&AwsPrefix> {
    let host = Ipv4Network::from(addr);
    table
        .prefixes
        .iter()
        .filter(|entry| is_subnet_of(host, entry.ip_prefix))
        .nth(1)
}

/// Finds the first Microsoft 365 endpoint set listing a block that contains the address.
pub fn match_msft(addr: Ipv4Addr, table: &MsftRanges) -> Option<&MsftEndpointSet> {
    let host = Ipv4Network::from(addr);
    table
        .endpoint_sets
        .iter()
        .find(|set| set.ips.iter().any(|block| block_contains(block, host)))
}

/// Label for an address found in the Microsoft 365 table.
///
/// Uses the display name, then the service area. A set with neither gets the
/// generic Microsoft label.
pub fn msft_label(set: &MsftEndpointSet) -> String {
    [&set.service_area_display_name, &set.service_area]
        .into_iter()
        .map(|name| name.trim())
        .find(|name| !name.is_empty())
        .map(|name| format!("MSFT-{name}"))
        .unwrap_or_else(|| MSFT_GENERIC_LABEL.to_string())
}

/// Label for a Microsoft address that isn't in the Microsoft 365 table.
pub fn msft_fallback_label(service_tag: Option<&str>) -> String {
    match service_tag.map(str::trim) {
        Some(tag) if !tag.is_empty() => format!("MSFT-{tag}"),
        _ => MSFT_GENERIC_LABEL.to_string(),
    }
}

/// Classifies a Microsoft address.
///
/// Uses the Microsoft 365 table when it has a matching entry. Otherwise
/// `fallback` is awaited for a service tag (it is not called when the table
/// matches). A missing table behaves like a table without a match.
pub async fn classify_msft<F, Fut>(addr: Ipv4Addr, table: Option<&MsftRanges>, fallback: F) -> String
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Option<String>>,
{
    if let Some(set) = table.and_then(|t| match_msft(addr, t)) {
        return msft_label(set);
    }
    let tag = fallback().await;
    msft_fallback_label(tag.as_deref())
}
