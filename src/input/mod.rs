//! Source file reading and address validation.
//!
//! The source file is validated in full before any lookup is made: every line
//! up to the last address must parse as an IPv4 address. During processing,
//! addresses that parse but are not globally routable are skipped.

use std::net::Ipv4Addr;
use std::path::Path;

use log::warn;

use crate::error_handling::{InputValidationError, InvalidLine};

/// Parses a line as an IPv4 address, ignoring surrounding whitespace.
pub fn parse_address(line: &str) -> Option<Ipv4Addr> {
    line.trim().parse::<Ipv4Addr>().ok()
}

/// Returns true if the address is globally routable.
///
/// Excludes "this network", private, shared (CGNAT), loopback, link-local,
/// IETF protocol assignments (other than the two globally reachable anycast
/// addresses), documentation, benchmarking, reserved and broadcast ranges.
pub fn is_global(addr: Ipv4Addr) -> bool {
    let [a, b, c, d] = addr.octets();
    !(a == 0
        || addr.is_private()
        || (a == 100 && (b & 0b1100_0000) == 0b0100_0000)
        || addr.is_loopback()
        || addr.is_link_local()
        || (a == 192 && b == 0 && c == 0 && d != 9 && d != 10)
        || addr.is_documentation()
        || (a == 198 && (b & 0xfe) == 18)
        || (a & 0xf0) == 240)
}

/// Validates one address for processing.
///
/// Logs a warning and returns `None` if the line is not a global IPv4 address.
pub fn validate_address(line: &str) -> Option<Ipv4Addr> {
    match parse_address(line) {
        Some(addr) if is_global(addr) => Some(addr),
        Some(addr) => {
            warn!("Skipping {}: not a globally routable address", addr);
            None
        }
        None => {
            warn!("Skipping invalid IP address: {}", line.trim());
            None
        }
    }
}

/// Checks every line and returns the ones that are not IPv4 addresses.
///
/// Blank lines after the last address are ignored. A blank line before it is
/// reported as invalid.
pub fn find_invalid_lines(content: &str) -> Vec<InvalidLine> {
    let lines: Vec<&str> = content.lines().collect();
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |last| last + 1);

    lines[..end]
        .iter()
        .enumerate()
        .filter(|(_, line)| parse_address(line).is_none())
        .map(|(idx, line)| InvalidLine {
            line_number: idx + 1,
            content: line.trim().to_string(),
        })
        .collect()
}

/// Reads the source file and runs the pre-flight validation pass.
///
/// Returns the trimmed, non-blank lines in file order.
///
/// # Errors
///
/// - `InputValidationError::Unreadable` if the file can't be read
/// - `InputValidationError::InvalidAddresses` if any line is not an IPv4 address
pub async fn read_source_file(path: &Path) -> Result<Vec<String>, InputValidationError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| InputValidationError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

    let invalid = find_invalid_lines(&content);
    if !invalid.is_empty() {
        for line in &invalid {
            if line.content.is_empty() {
                log::error!("Line {}: blank line before the last address", line.line_number);
            } else {
                log::error!(
                    "Line {}: {} is not a valid IP address",
                    line.line_number,
                    line.content
                );
            }
        }
        return Err(InputValidationError::InvalidAddresses(invalid));
    }

    // Only trailing blank lines remain at this point
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_address_accepts_valid() {
        for ip in ["1.1.1.1", "8.8.8.8", "255.255.255.255", "0.0.0.0", " 52.95.110.1 "] {
            assert!(parse_address(ip).is_some(), "{ip} should parse");
        }
    }

    #[test]
    fn test_parse_address_rejects_malformed() {
        for ip in ["999.1.1.1", "not-an-ip", "", "1.2.3", "1.2.3.4.5", "1.1.1.1/32", "::1"] {
            assert!(parse_address(ip).is_none(), "{ip:?} should be rejected");
        }
    }

    #[test]
    fn test_is_global_public_addresses() {
        for ip in ["1.1.1.1", "8.8.8.8", "52.95.110.1", "13.107.6.152", "192.0.0.9"] {
            assert!(is_global(ip.parse().unwrap()), "{ip} should be global");
        }
    }

    #[test]
    fn test_is_global_rejects_special_ranges() {
        for ip in [
            "0.1.2.3",
            "10.0.0.1",
            "172.16.5.4",
            "192.168.1.1",
            "100.64.0.1",
            "127.0.0.1",
            "169.254.1.1",
            "192.0.0.1",
            "192.0.2.1",
            "198.51.100.7",
            "203.0.113.9",
            "198.18.0.1",
            "240.0.0.1",
            "255.255.255.255",
        ] {
            assert!(!is_global(ip.parse().unwrap()), "{ip} should not be global");
        }
    }

    #[test]
    fn test_validate_address() {
        assert_eq!(validate_address("8.8.8.8"), Some(Ipv4Addr::new(8, 8, 8, 8)));
        assert_eq!(validate_address("10.1.1.1"), None);
        assert_eq!(validate_address("nope"), None);
    }

    #[test]
    fn test_find_invalid_lines_reports_line_numbers() {
        let invalid = find_invalid_lines("1.1.1.1\n999.1.1.1\n8.8.8.8\nnot-an-ip\n");
        assert_eq!(
            invalid,
            vec![
                InvalidLine {
                    line_number: 2,
                    content: "999.1.1.1".to_string()
                },
                InvalidLine {
                    line_number: 4,
                    content: "not-an-ip".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_find_invalid_lines_rejects_inner_blank_line() {
        let invalid = find_invalid_lines("1.1.1.1\n   \n8.8.8.8\n");
        assert_eq!(
            invalid,
            vec![InvalidLine {
                line_number: 2,
                content: String::new()
            }]
        );
    }

    #[test]
    fn test_find_invalid_lines_allows_trailing_blank_lines() {
        assert!(find_invalid_lines("1.1.1.1\n8.8.8.8\n\n  \n").is_empty());
        assert!(find_invalid_lines("").is_empty());
        assert!(find_invalid_lines("\n\n").is_empty());
    }

    #[tokio::test]
    async fn test_read_source_file_returns_lines_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1.1.1.1\r\n 8.8.8.8\n\n").unwrap();
        let lines = read_source_file(file.path()).await.unwrap();
        assert_eq!(lines, vec!["1.1.1.1", "8.8.8.8"]);
    }

    #[tokio::test]
    async fn test_read_source_file_aborts_on_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "1.1.1.1\n999.1.1.1\n").unwrap();
        let err = read_source_file(file.path()).await.unwrap_err();
        match err {
            InputValidationError::InvalidAddresses(lines) => assert_eq!(lines.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_read_source_file_missing() {
        let err = read_source_file(Path::new("/nonexistent/whodat/ips.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, InputValidationError::Unreadable { .. }));
    }
}
