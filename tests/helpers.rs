// Shared test helpers for mock collaborators and temporary files.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use whodat::{Config, GeoIpProviderKind};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Two AWS entries for the same block: the aggregate record, then the S3 one.
#[allow(dead_code)]
pub const AWS_RANGES_JSON: &str = r#"{
  "syncToken": "1700000000",
  "createDate": "2023-11-14-22-13-20",
  "prefixes": [
    {"ip_prefix": "3.5.140.0/22", "region": "ap-northeast-2", "service": "AMAZON", "network_border_group": "ap-northeast-2"},
    {"ip_prefix": "3.5.140.0/22", "region": "ap-northeast-2", "service": "S3", "network_border_group": "ap-northeast-2"}
  ]
}"#;

#[allow(dead_code)]
pub const MSFT_RANGES_JSON: &str = r#"[
  {"id": 1, "serviceArea": "Exchange", "serviceAreaDisplayName": "Exchange Online",
   "urls": ["outlook.office.com"], "ips": ["13.107.6.152/31", "2603:1006::/40"],
   "tcpPorts": "80,443", "expressRoute": true, "category": "Optimize", "required": true},
  {"id": 2, "serviceArea": "Exchange", "serviceAreaDisplayName": "Exchange Online",
   "urls": ["*.outlook.com"], "tcpPorts": "80,443", "category": "Default", "required": false}
]"#;

/// Writes source lines to a temporary file (sync I/O).
#[allow(dead_code)]
pub fn write_source_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Config pointing every collaborator at the mock server.
#[allow(dead_code)]
pub fn test_config(server: &MockServer, source: &Path, ranges_dir: &Path, output: &Path) -> Config {
    let mut config = Config {
        source_file: source.to_path_buf(),
        output_file: output.to_path_buf(),
        ranges_dir: ranges_dir.to_path_buf(),
        geoip_provider: Some(GeoIpProviderKind::IpWhois),
        ..Default::default()
    };
    config.endpoints.whois = format!("{}/rest/ip", server.uri());
    config.endpoints.ipwhois = format!("{}/json", server.uri());
    config.endpoints.ip_api = format!("{}/pro", server.uri());
    config.endpoints.freegeoip = format!("{}/freegeoip", server.uri());
    config.endpoints.azure = format!("{}/api/ipinfo", server.uri());
    config.endpoints.aws_ranges = format!("{}/ip-ranges.json", server.uri());
    config.endpoints.msft_ranges = format!("{}/endpoints/worldwide", server.uri());
    config
}

/// Mounts an ARIN record with a single netblock for `ip`.
#[allow(dead_code)]
pub async fn mount_whois(server: &MockServer, ip: &str, name: &str, start: &str, cidr_length: u8) {
    let body = format!(
        r#"{{"net": {{"handle": {{"$": "NET-{start}-1"}}, "name": {{"$": "{name}"}},
            "netBlocks": {{"netBlock": {{"cidrLength": {{"$": "{cidr_length}"}},
            "startAddress": {{"$": "{start}"}}, "type": {{"$": "DA"}}}}}}}}}}"#
    );
    Mock::given(method("GET"))
        .and(path(format!("/rest/ip/{ip}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mounts a successful ipwhois.app answer for `ip`.
#[allow(dead_code)]
pub async fn mount_ipwhois(server: &MockServer, ip: &str, country_code: &str, city: &str, isp: &str) {
    let body = serde_json::json!({
        "ip": ip,
        "success": true,
        "country": "Somewhere",
        "country_code": country_code,
        "region": "Some Region",
        "city": city,
        "isp": isp,
        "org": isp,
    });
    Mock::given(method("GET"))
        .and(path(format!("/json/{ip}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Reads every row of a headerless CSV file.
#[allow(dead_code)]
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("Failed to open output file");
    reader
        .records()
        .map(|r| {
            r.expect("Failed to read row")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
