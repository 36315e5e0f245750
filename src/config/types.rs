//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    AWS_IP_RANGES_URL, ARIN_WHOIS_URL, AZURE_IPINFO_URL, DEFAULT_MSFT_CLIENT_REQUEST_ID,
    DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, FREEGEOIP_URL, IPWHOIS_URL, IP_API_PRO_URL,
    MSFT_ENDPOINTS_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// GeoIP provider selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GeoIpProviderKind {
    /// ipwhois.app (free, no key)
    #[value(name = "ipwhois")]
    IpWhois,
    /// ip-api.com pro endpoint (requires --ip-api-key)
    #[value(name = "ip-api")]
    IpApi,
    /// freegeoip.app (free, location only)
    #[value(name = "freegeoip")]
    FreeGeoIp,
}

/// Remote endpoints used during a run.
///
/// Not exposed on the command line; overridden programmatically (tests point
/// them at a mock server).
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub whois: String,
    pub ipwhois: String,
    pub ip_api: String,
    pub freegeoip: String,
    pub azure: String,
    pub aws_ranges: String,
    pub msft_ranges: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            whois: ARIN_WHOIS_URL.to_string(),
            ipwhois: IPWHOIS_URL.to_string(),
            ip_api: IP_API_PRO_URL.to_string(),
            freegeoip: FREEGEOIP_URL.to_string(),
            azure: AZURE_IPINFO_URL.to_string(),
            aws_ranges: AWS_IP_RANGES_URL.to_string(),
            msft_ranges: MSFT_ENDPOINTS_URL.to_string(),
        }
    }
}

/// Run configuration.
///
/// Parsed from the command line by the binary, or constructed directly when the
/// crate is used as a library.
///
/// # Examples
///
/// ```no_run
/// use whodat::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     source_file: PathBuf::from("ips.txt"),
///     output_file: PathBuf::from("report.csv"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "whodat",
    version,
    about = "Looks up WHOIS, GeoIP and cloud provider details for a list of IPv4 addresses",
    after_help = "Examples:\n    whodat sourceiplist.txt\n    whodat sourceiplist.txt output.csv\n\n\
If ip-ranges.json (AWS) and worldwide.json (Microsoft 365) are not present in the\n\
ranges directory they are downloaded from:\n\
    https://ip-ranges.amazonaws.com/ip-ranges.json\n\
    https://endpoints.office.com/endpoints/worldwide"
)]
pub struct Config {
    /// Text file containing one IPv4 address per line
    #[arg(value_name = "sourceIPfile")]
    pub source_file: PathBuf,

    /// CSV file rows are appended to
    #[arg(value_name = "outputFile", default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// GeoIP provider (defaults to ip-api when a key is set, ipwhois otherwise)
    #[arg(long, value_enum)]
    pub geoip_provider: Option<GeoIpProviderKind>,

    /// API key for the ip-api.com pro endpoint
    #[arg(long, env = "IP_API_KEY", hide_env_values = true)]
    pub ip_api_key: Option<String>,

    /// Client request GUID for the Microsoft endpoints service
    #[arg(long, env = "MSFT_CLIENT_REQUEST_ID", default_value = DEFAULT_MSFT_CLIENT_REQUEST_ID)]
    pub msft_client_request_id: String,

    /// Directory searched for ip-ranges.json and worldwide.json
    #[arg(long, default_value = ".")]
    pub ranges_dir: PathBuf,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(skip)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Returns the GeoIP provider for this run.
    ///
    /// An explicit `--geoip-provider` wins. Otherwise a configured ip-api key
    /// selects the keyed provider and the free provider is used without one.
    pub fn geoip_provider_kind(&self) -> GeoIpProviderKind {
        if let Some(kind) = self.geoip_provider {
            return kind;
        }
        match self.ip_api_key.as_deref() {
            Some(key) if !key.is_empty() => GeoIpProviderKind::IpApi,
            _ => GeoIpProviderKind::IpWhois,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from("ips.txt"),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            geoip_provider: None,
            ip_api_key: None,
            msft_client_request_id: DEFAULT_MSFT_CLIENT_REQUEST_ID.to_string(),
            ranges_dir: PathBuf::from("."),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_file, PathBuf::from("output.csv"));
        assert_eq!(config.ranges_dir, PathBuf::from("."));
        assert!(config.ip_api_key.is_none());
        assert_eq!(config.endpoints.whois, ARIN_WHOIS_URL);
    }

    #[test]
    fn test_geoip_provider_defaults_to_free() {
        let config = Config::default();
        assert_eq!(config.geoip_provider_kind(), GeoIpProviderKind::IpWhois);
    }

    #[test]
    fn test_geoip_provider_key_selects_ip_api() {
        let config = Config {
            ip_api_key: Some("PEgSoDWfY9k08fH".to_string()),
            ..Default::default()
        };
        assert_eq!(config.geoip_provider_kind(), GeoIpProviderKind::IpApi);
    }

    #[test]
    fn test_geoip_provider_empty_key_is_ignored() {
        let config = Config {
            ip_api_key: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(config.geoip_provider_kind(), GeoIpProviderKind::IpWhois);
    }

    #[test]
    fn test_geoip_provider_explicit_choice_wins() {
        let config = Config {
            ip_api_key: Some("key".to_string()),
            geoip_provider: Some(GeoIpProviderKind::FreeGeoIp),
            ..Default::default()
        };
        assert_eq!(config.geoip_provider_kind(), GeoIpProviderKind::FreeGeoIp);
    }

    #[test]
    fn test_parse_positional_arguments() {
        let config = Config::try_parse_from(["whodat", "ips.txt", "report.csv"])
            .expect("arguments should parse");
        assert_eq!(config.source_file, PathBuf::from("ips.txt"));
        assert_eq!(config.output_file, PathBuf::from("report.csv"));
    }

    #[test]
    fn test_parse_output_defaults() {
        let config = Config::try_parse_from(["whodat", "ips.txt"]).expect("arguments should parse");
        assert_eq!(config.output_file, PathBuf::from("output.csv"));
    }

    #[test]
    fn test_parse_requires_source_file() {
        assert!(Config::try_parse_from(["whodat"]).is_err());
    }

    #[test]
    fn test_help_is_displayed_not_failed() {
        let err = Config::try_parse_from(["whodat", "--help"]).expect_err("help short-circuits");
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
