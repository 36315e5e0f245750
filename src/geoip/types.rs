//! GeoIP data structures.
//!
//! This module defines the lookup result and the response shapes of each provider.

use serde::Deserialize;

use crate::config::GeoIpProviderKind;
use crate::config::{GEO_DECLINED, NO_CITY, NO_COUNTRY, NO_COUNTRY_CODE, NO_ISP, NO_ORG, NO_REGION};

/// GeoIP lookup result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoRecord {
    pub isp: String,
    pub org: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub city: String,
}

impl GeoRecord {
    /// Record used when the provider could not be reached or answered nonsense.
    pub fn unresolved() -> Self {
        Self {
            isp: NO_ISP.to_string(),
            org: NO_ORG.to_string(),
            country: NO_COUNTRY.to_string(),
            country_code: NO_COUNTRY_CODE.to_string(),
            region: NO_REGION.to_string(),
            city: NO_CITY.to_string(),
        }
    }

    /// Record used when the provider answered with a failure status.
    ///
    /// Every field the provider supplies is marked; freegeoip has no ISP or
    /// organization, so those keep their sentinels.
    pub fn declined(kind: GeoIpProviderKind) -> Self {
        let (isp, org) = match kind {
            GeoIpProviderKind::FreeGeoIp => (NO_ISP, NO_ORG),
            GeoIpProviderKind::IpWhois | GeoIpProviderKind::IpApi => (GEO_DECLINED, GEO_DECLINED),
        };
        Self {
            isp: isp.to_string(),
            org: org.to_string(),
            country: GEO_DECLINED.to_string(),
            country_code: GEO_DECLINED.to_string(),
            region: GEO_DECLINED.to_string(),
            city: GEO_DECLINED.to_string(),
        }
    }
}

/// ipwhois.app response
#[derive(Debug, Deserialize)]
pub(crate) struct IpWhoisResponse {
    pub(crate) success: Option<bool>,
    pub(crate) country: Option<String>,
    pub(crate) country_code: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) isp: Option<String>,
    pub(crate) org: Option<String>,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IpApiResponse {
    pub(crate) status: String,
    pub(crate) country: Option<String>,
    pub(crate) country_code: Option<String>,
    pub(crate) region_name: Option<String>,
    pub(crate) city: Option<String>,
    pub(crate) isp: Option<String>,
    pub(crate) org: Option<String>,
}

/// freegeoip.app response
#[derive(Debug, Deserialize)]
pub(crate) struct FreeGeoIpResponse {
    pub(crate) country_name: Option<String>,
    pub(crate) country_code: Option<String>,
    pub(crate) region_name: Option<String>,
    pub(crate) city: Option<String>,
}
