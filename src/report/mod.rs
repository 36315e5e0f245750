//! Report output.
//!
//! Rows are echoed to stdout and appended to the output CSV file. The file has
//! no header row; the header is printed to the console only.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{REPORT_HEADER, REPORT_RULE_WIDTH};

/// One row of the report, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub ip_address: String,
    pub whois_name: String,
    pub isp: String,
    pub org: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub city: String,
    pub netblock: String,
    pub extended: String,
}

impl OutputRecord {
    /// Fields in report column order.
    pub fn fields(&self) -> [&str; 10] {
        [
            self.ip_address.as_str(),
            self.whois_name.as_str(),
            self.isp.as_str(),
            self.org.as_str(),
            self.country.as_str(),
            self.country_code.as_str(),
            self.region.as_str(),
            self.city.as_str(),
            self.netblock.as_str(),
            self.extended.as_str(),
        ]
    }

    /// Console form of the row: the fields joined by commas without quoting.
    pub fn console_line(&self) -> String {
        self.fields().join(",")
    }
}

/// Prints the column header and the rule beneath it.
pub fn print_header() {
    println!();
    println!("{REPORT_HEADER}");
    println!("{}", "=".repeat(REPORT_RULE_WIDTH));
}

/// Appends rows to the output file.
///
/// The file is reopened in append mode for every row, so rows written before
/// an interruption stay on disk.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row to the file and echoes it to stdout.
    pub fn write(&self, record: &OutputRecord) -> Result<()> {
        self.append(record)?;
        println!("{}", record.console_line());
        Ok(())
    }

    /// Appends one row to the file.
    pub fn append(&self, record: &OutputRecord) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open output file {}", self.path.display()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(record.fields())
            .with_context(|| format!("Failed to write row to {}", self.path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        Ok(())
    }
}
