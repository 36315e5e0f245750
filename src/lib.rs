//! whodat library: IPv4 address enrichment
//!
//! This library reads a file of IPv4 addresses and produces one report row per
//! address with ARIN WHOIS ownership, GeoIP location and, for AWS and Microsoft
//! addresses, the cloud service the address belongs to.
//!
//! # Example
//!
//! ```no_run
//! use whodat::{run_report, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     source_file: std::path::PathBuf::from("ips.txt"),
//!     output_file: std::path::PathBuf::from("report.csv"),
//!     ..Default::default()
//! };
//!
//! let report = run_report(config).await?;
//! println!("Wrote {} of {} addresses", report.written, report.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod cloud;
pub mod config;
pub mod error_handling;
mod geoip;
pub mod initialization;
pub mod input;
mod lookup;
pub mod matcher;
pub mod ranges;
pub mod report;
mod whois;

// Re-export public API
pub use config::{Config, GeoIpProviderKind, LogFormat, LogLevel};
pub use lookup::{process_address, AddressOutcome, LookupContext};
pub use report::OutputRecord;
pub use run::{run_report, RunReport};

// Internal run module (contains the main processing loop)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::config::Config;
    use crate::error_handling::ProcessingStats;
    use crate::initialization::init_client;
    use crate::input::read_source_file;
    use crate::lookup::{process_address, AddressOutcome, LookupContext};
    use crate::ranges::{load_table, AwsRanges, MsftRanges, Provider, RangeSource, RangeTable};
    use crate::report::{print_header, ReportWriter};

    /// Results of a run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Number of non-blank lines in the source file
        pub total: usize,
        /// Number of rows appended to the output file
        pub written: usize,
        /// Number of addresses skipped as not globally routable
        pub skipped: usize,
        /// Path of the output CSV file
        pub output_file: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    async fn load_optional<T: RangeTable>(
        client: &reqwest::Client,
        provider: Provider,
        config: &Config,
    ) -> Option<T> {
        let source = RangeSource::for_provider(provider, config);
        match load_table::<T>(client, &source).await {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("{e}; {} addresses won't be classified", provider.name());
                None
            }
        }
    }

    /// Runs a report with the provided configuration.
    ///
    /// The whole source file is validated before any lookup is made. Range
    /// tables are loaded once, then every address is processed in file order
    /// and its row appended to the output file.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The source file cannot be read or contains a line that isn't an IPv4 address
    /// - The HTTP client cannot be built
    /// - A row cannot be written to the output file
    pub async fn run_report(config: Config) -> Result<RunReport> {
        let start_time = std::time::Instant::now();

        let lines = read_source_file(&config.source_file)
            .await
            .context("Source file failed validation")?;
        info!("Total addresses in file: {}", lines.len());

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let aws_ranges = load_optional::<AwsRanges>(&client, Provider::Aws, &config).await;
        let msft_ranges = load_optional::<MsftRanges>(&client, Provider::Microsoft, &config).await;

        let stats = Arc::new(ProcessingStats::new());
        let ctx = LookupContext::new(client, &config, aws_ranges, msft_ranges, Arc::clone(&stats));
        info!("Using GeoIP provider {}", ctx.geoip.name());

        let writer = ReportWriter::new(&config.output_file);
        print_header();

        let mut written = 0usize;
        let mut skipped = 0usize;
        for line in &lines {
            match process_address(&ctx, line).await {
                AddressOutcome::Complete(record) => {
                    writer.write(&record)?;
                    written += 1;
                }
                AddressOutcome::Skipped => skipped += 1,
            }
        }

        stats.log_summary();

        Ok(RunReport {
            total: lines.len(),
            written,
            skipped,
            output_file: writer.path().to_path_buf(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
