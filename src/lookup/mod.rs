//! Per-address lookup pipeline.
//!
//! Each address goes through validation, WHOIS, GeoIP and cloud
//! classification in that order. A failed lookup is logged, counted and
//! replaced by sentinel values; only validation can stop an address from
//! producing a row.

mod context;

use std::net::Ipv4Addr;

use log::warn;

use crate::cloud::{self, lookup_azure_service_tag, Classification};
use crate::error_handling::{update_error_stats, InfoType, LookupError, LookupSource};
use crate::geoip::{lookup_geoip, GeoRecord};
use crate::input::validate_address;
use crate::report::OutputRecord;
use crate::whois::{lookup_whois, WhoisRecord};

pub use context::LookupContext;

/// Result of processing one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressOutcome {
    /// Not a global IPv4 address; no row is written
    Skipped,
    Complete(OutputRecord),
}

async fn resolve_whois(ctx: &LookupContext, addr: Ipv4Addr) -> WhoisRecord {
    match lookup_whois(&ctx.client, &ctx.whois_url, addr).await {
        Ok(record) => record,
        Err(e) => {
            warn!("WHOIS lookup failed for {}: {}", addr, e);
            update_error_stats(&ctx.stats, LookupSource::Whois, &e);
            WhoisRecord::unresolved()
        }
    }
}

async fn resolve_geo(ctx: &LookupContext, addr: Ipv4Addr) -> GeoRecord {
    match lookup_geoip(&ctx.client, &ctx.geoip, addr).await {
        Ok(record) => record,
        Err(e) => {
            update_error_stats(&ctx.stats, LookupSource::GeoIp, &e);
            if matches!(e, LookupError::Declined) {
                warn!("{} returned a failure status for {}", ctx.geoip.name(), addr);
                GeoRecord::declined(ctx.geoip.kind)
            } else {
                warn!("GeoIP lookup failed for {}: {}", addr, e);
                GeoRecord::unresolved()
            }
        }
    }
}

async fn resolve_azure(ctx: &LookupContext, addr: Ipv4Addr) -> Option<String> {
    match lookup_azure_service_tag(&ctx.client, &ctx.azure_url, addr).await {
        Ok(tag) => tag,
        Err(e) => {
            warn!("Azure service tag lookup failed for {}: {}", addr, e);
            update_error_stats(&ctx.stats, LookupSource::Azure, &e);
            None
        }
    }
}

/// Processes one line of the source file.
pub async fn process_address(ctx: &LookupContext, line: &str) -> AddressOutcome {
    let Some(addr) = validate_address(line) else {
        ctx.stats.increment_info(InfoType::AddressSkipped);
        return AddressOutcome::Skipped;
    };

    let whois = resolve_whois(ctx, addr).await;
    let geo = resolve_geo(ctx, addr).await;

    let classification =
        cloud::classify(&whois.name, addr, ctx.tables(), || resolve_azure(ctx, addr)).await;
    match classification {
        Classification::Aws(_) => ctx.stats.increment_info(InfoType::AwsClassified),
        Classification::Microsoft(_) => ctx.stats.increment_info(InfoType::MicrosoftClassified),
        Classification::MicrosoftFallback(_) => {
            ctx.stats.increment_info(InfoType::MicrosoftFallback)
        }
        Classification::Unclassified => {}
    }

    AddressOutcome::Complete(OutputRecord {
        ip_address: addr.to_string(),
        netblock: whois.netblock(),
        whois_name: whois.name,
        isp: geo.isp,
        org: geo.org,
        country: geo.country,
        country_code: geo.country_code,
        region: geo.region,
        city: geo.city,
        extended: classification.label().to_string(),
    })
}
