//! ARIN WHOIS lookup.
//!
//! Queries the ARIN REST service (`/rest/ip/<addr>`) for the network record
//! covering an address.

mod parse;
mod types;

use std::net::Ipv4Addr;

use crate::config::WHOIS_TIMEOUT;
use crate::error_handling::LookupError;

pub use types::WhoisRecord;

/// Looks up the ARIN network record for an address.
///
/// # Errors
///
/// - `LookupError::Transport` on network failure or timeout
/// - `LookupError::Status` when ARIN answers with a non-success status
/// - `LookupError::Malformed` when the body isn't an ARIN net record
pub async fn lookup_whois(
    client: &reqwest::Client,
    base_url: &str,
    addr: Ipv4Addr,
) -> Result<WhoisRecord, LookupError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), addr);
    log::debug!("WHOIS lookup: {}", url);

    let response = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .timeout(WHOIS_TIMEOUT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(LookupError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    parse::parse_arin_response(&body, addr)
}
