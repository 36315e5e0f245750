//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including provider endpoints, per-provider timeouts and the sentinel values
//! written for unresolved report fields.

use std::time::Duration;

/// Default output file when none is given on the command line
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("whodat/", env!("CARGO_PKG_VERSION"));

/// Default timeout applied by the shared HTTP client when a request doesn't set its own
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// Provider endpoints
/// ARIN WHOIS REST endpoint (the address is appended as a path segment)
pub const ARIN_WHOIS_URL: &str = "https://whois.arin.net/rest/ip";
/// Free GeoIP provider, no key required
pub const IPWHOIS_URL: &str = "https://ipwhois.app/json";
/// Keyed GeoIP provider (ip-api.com "pro" endpoint)
pub const IP_API_PRO_URL: &str = "https://pro.ip-api.com/json";
/// Alternate free GeoIP provider. Responses carry no ISP or organization.
pub const FREEGEOIP_URL: &str = "https://freegeoip.app/json";
/// Azure service tag lookup used when an address is not in the Microsoft 365 table
pub const AZURE_IPINFO_URL: &str = "https://www.azurespeed.com/api/ipinfo";
/// Published AWS IP ranges
pub const AWS_IP_RANGES_URL: &str = "https://ip-ranges.amazonaws.com/ip-ranges.json";
/// Published Microsoft 365 worldwide endpoints (requires a `clientrequestid` query parameter)
pub const MSFT_ENDPOINTS_URL: &str = "https://endpoints.office.com/endpoints/worldwide";
/// Client request id sent to the Microsoft endpoints service.
/// Microsoft may block a shared id; a fresh GUID can be supplied with `--msft-client-request-id`.
pub const DEFAULT_MSFT_CLIENT_REQUEST_ID: &str = "5a42f33d-f9c8-4bb5-86a4-279fc89ae979";

// Cache files, read from the ranges directory when present
pub const AWS_CACHE_FILE: &str = "ip-ranges.json";
pub const MSFT_CACHE_FILE: &str = "worldwide.json";

// Network operation timeouts
pub const WHOIS_TIMEOUT: Duration = Duration::from_secs(5);
pub const IPWHOIS_TIMEOUT: Duration = Duration::from_secs(4);
pub const IP_API_TIMEOUT: Duration = Duration::from_secs(5);
/// freegeoip is slow; shorter timeouts fail most lookups
pub const FREEGEOIP_TIMEOUT: Duration = Duration::from_secs(7);
pub const AZURE_TIMEOUT: Duration = Duration::from_secs(5);
/// Range tables are several megabytes
pub const RANGE_TABLE_TIMEOUT: Duration = Duration::from_secs(30);

// Sentinel values for fields that could not be resolved
pub const NO_WHOIS_RESULT: &str = "NO-whoisResult";
pub const NO_ISP: &str = "NO-isp";
pub const NO_ORG: &str = "NO-org";
pub const NO_COUNTRY: &str = "NO-country";
pub const NO_COUNTRY_CODE: &str = "NO-countryCode";
pub const NO_REGION: &str = "NO-region";
pub const NO_CITY: &str = "NO-city";
pub const NO_WHOIS_NETBLOCK: &str = "NO-whoisNetblock";
pub const NO_EXTENDED: &str = "NO-extended";

/// Written to every geo field when the provider answered but reported failure
pub const GEO_DECLINED: &str = "error";

// Cloud classification
/// WHOIS names belonging to AWS
pub const AWS_SIGNATURE: &str = r"\b(?:AMAZO|AT-88|Amazon|AWS)\b";
/// WHOIS names belonging to Microsoft
pub const MSFT_SIGNATURE: &str = r"\b(?:MSFT|Microsoft|MICROSOFT)\b";
/// ARIN net name of Microsoft's global backbone allocation
pub const MSFT_GLOBAL_NET_NAME: &str = "MICROSOFT-GLOBAL-NET";
pub const MSFT_GLOBAL_NET_LABEL: &str = "Microsoft-Global-NET";
/// Label used when an address is Microsoft's but no finer detail is known
pub const MSFT_GENERIC_LABEL: &str = "Microsoft";

// Console output
pub const REPORT_HEADER: &str = "IP_Address, ARIN Whois, Service Provider, Organization, Country, Country Code, Region, City, ARIN Netblock, Cloud Specific Details";
pub const REPORT_RULE_WIDTH: usize = 130;
