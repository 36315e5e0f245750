//! Provider response extraction.
//!
//! Converts each provider's JSON body into a [`GeoRecord`]. A body that
//! reports failure yields `LookupError::Declined`.

use crate::config::{NO_CITY, NO_COUNTRY, NO_COUNTRY_CODE, NO_ISP, NO_ORG, NO_REGION};
use crate::config::GeoIpProviderKind;
use crate::error_handling::LookupError;

use super::types::{FreeGeoIpResponse, GeoRecord, IpApiResponse, IpWhoisResponse};

/// Provider value, or the sentinel when it is absent or blank.
fn field(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => sentinel.to_string(),
    }
}

fn extract_ipwhois(body: &str) -> Result<GeoRecord, LookupError> {
    let r: IpWhoisResponse = serde_json::from_str(body)?;
    if r.success == Some(false) {
        return Err(LookupError::Declined);
    }
    Ok(GeoRecord {
        isp: field(r.isp, NO_ISP),
        org: field(r.org, NO_ORG),
        country: field(r.country, NO_COUNTRY),
        country_code: field(r.country_code, NO_COUNTRY_CODE),
        region: field(r.region, NO_REGION),
        city: field(r.city, NO_CITY),
    })
}

fn extract_ip_api(body: &str) -> Result<GeoRecord, LookupError> {
    let r: IpApiResponse = serde_json::from_str(body)?;
    if r.status == "fail" {
        return Err(LookupError::Declined);
    }
    Ok(GeoRecord {
        isp: field(r.isp, NO_ISP),
        org: field(r.org, NO_ORG),
        country: field(r.country, NO_COUNTRY),
        country_code: field(r.country_code, NO_COUNTRY_CODE),
        region: field(r.region_name, NO_REGION),
        city: field(r.city, NO_CITY),
    })
}

/// freegeoip has no explicit status; an empty country code means no result.
fn extract_freegeoip(body: &str) -> Result<GeoRecord, LookupError> {
    let r: FreeGeoIpResponse = serde_json::from_str(body)?;
    if r.country_code.as_deref().map_or(true, |c| c.trim().is_empty()) {
        return Err(LookupError::Declined);
    }
    Ok(GeoRecord {
        isp: NO_ISP.to_string(),
        org: NO_ORG.to_string(),
        country: field(r.country_name, NO_COUNTRY),
        country_code: field(r.country_code, NO_COUNTRY_CODE),
        region: field(r.region_name, NO_REGION),
        city: field(r.city, NO_CITY),
    })
}

/// Extracts a record from a provider response body.
pub(crate) fn extract_geo_record(
    kind: GeoIpProviderKind,
    body: &str,
) -> Result<GeoRecord, LookupError> {
    match kind {
        GeoIpProviderKind::IpWhois => extract_ipwhois(body),
        GeoIpProviderKind::IpApi => extract_ip_api(body),
        GeoIpProviderKind::FreeGeoIp => extract_freegeoip(body),
    }
}
