//! GeoIP lookup through external REST providers.
//!
//! One provider is used for the whole run: ipwhois.app by default, the ip-api.com
//! pro endpoint when an API key is configured, or freegeoip.app on request.
//! Provider answers are taken as given.

mod extract;
mod lookup;
mod types;

// Re-export public API
pub use lookup::{lookup_geoip, GeoIpProvider};
pub use types::GeoRecord;
