//! Tests for the pre-flight validation of the source file.

mod helpers;

use helpers::{test_config, write_source_file};
use tempfile::TempDir;
use whodat::error_handling::InputValidationError;
use whodat::input::read_source_file;
use whodat::run_report;
use wiremock::MockServer;

#[tokio::test]
async fn test_invalid_line_aborts_before_lookups() {
    let server = MockServer::start().await;
    let source = write_source_file(&["1.1.1.1", "999.1.1.1", "8.8.8.8", "not-an-ip"]);
    let ranges_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("output.csv");
    let config = test_config(&server, source.path(), ranges_dir.path(), &output);

    let err = run_report(config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("2 invalid IP address(es)"));
    assert!(!output.exists());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_missing_source_file_fails() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.csv");
    let config = test_config(&server, &dir.path().join("missing.txt"), dir.path(), &output);

    let err = run_report(config).await.unwrap_err();
    let source = err
        .downcast_ref::<InputValidationError>()
        .expect("error should be an InputValidationError");
    assert!(matches!(source, InputValidationError::Unreadable { .. }));
}

#[tokio::test]
async fn test_invalid_lines_are_reported_with_line_numbers() {
    let source = write_source_file(&["8.8.8.8", "", "1.2.3", " 4.4.4.4 "]);
    let err = read_source_file(source.path()).await.unwrap_err();
    let InputValidationError::InvalidAddresses(lines) = err else {
        panic!("expected InvalidAddresses");
    };
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].line_number, 2);
    assert_eq!(lines[0].content, "");
    assert_eq!(lines[1].line_number, 3);
    assert_eq!(lines[1].content, "1.2.3");
}

#[tokio::test]
async fn test_blank_line_between_addresses_aborts_run() {
    let server = MockServer::start().await;
    let source = write_source_file(&["1.1.1.1", "", "8.8.8.8"]);
    let ranges_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("output.csv");
    let config = test_config(&server, source.path(), ranges_dir.path(), &output);

    let err = run_report(config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("1 invalid IP address(es)"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_trailing_blank_lines_and_whitespace_are_ignored() {
    let source = write_source_file(&["  8.8.8.8  ", "1.1.1.1", "", "   "]);
    let lines = read_source_file(source.path()).await.unwrap();
    assert_eq!(lines, vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()]);
}
