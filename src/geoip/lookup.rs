//! GeoIP provider requests.

use std::net::Ipv4Addr;
use std::time::Duration;

use crate::config::{
    Config, GeoIpProviderKind, FREEGEOIP_TIMEOUT, IPWHOIS_TIMEOUT, IP_API_TIMEOUT,
};
use crate::error_handling::LookupError;

use super::extract::extract_geo_record;
use super::types::GeoRecord;

/// The provider queried for every address in a run.
#[derive(Debug, Clone)]
pub struct GeoIpProvider {
    pub kind: GeoIpProviderKind,
    pub base_url: String,
    pub api_key: Option<String>,
}

impl GeoIpProvider {
    /// Selects the provider for a run from the configuration.
    pub fn from_config(config: &Config) -> Self {
        let kind = config.geoip_provider_kind();
        let base_url = match kind {
            GeoIpProviderKind::IpWhois => config.endpoints.ipwhois.clone(),
            GeoIpProviderKind::IpApi => config.endpoints.ip_api.clone(),
            GeoIpProviderKind::FreeGeoIp => config.endpoints.freegeoip.clone(),
        };
        Self {
            kind,
            base_url,
            api_key: config.ip_api_key.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            GeoIpProviderKind::IpWhois => "ipwhois.app",
            GeoIpProviderKind::IpApi => "ip-api.com",
            GeoIpProviderKind::FreeGeoIp => "freegeoip.app",
        }
    }

    fn timeout(&self) -> Duration {
        match self.kind {
            GeoIpProviderKind::IpWhois => IPWHOIS_TIMEOUT,
            GeoIpProviderKind::IpApi => IP_API_TIMEOUT,
            GeoIpProviderKind::FreeGeoIp => FREEGEOIP_TIMEOUT,
        }
    }
}

/// Queries the provider for one address.
///
/// # Errors
///
/// - `LookupError::Transport` on network failure or timeout
/// - `LookupError::Status` on a non-success HTTP status
/// - `LookupError::Malformed` when the body isn't the provider's JSON shape
/// - `LookupError::Declined` when the provider reports failure
pub async fn lookup_geoip(
    client: &reqwest::Client,
    provider: &GeoIpProvider,
    addr: Ipv4Addr,
) -> Result<GeoRecord, LookupError> {
    let url = format!("{}/{}", provider.base_url.trim_end_matches('/'), addr);
    let mut request = client.get(&url).timeout(provider.timeout());
    if provider.kind == GeoIpProviderKind::IpApi {
        if let Some(key) = provider.api_key.as_deref() {
            request = request.query(&[("key", key)]);
        }
    }

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        if status.as_u16() == 403 && provider.kind == GeoIpProviderKind::IpApi {
            log::warn!("{} returned 403, most likely a bad API key", provider.name());
        }
        return Err(LookupError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    extract_geo_record(provider.kind, &body)
}
