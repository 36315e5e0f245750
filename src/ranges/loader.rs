//! Cache-or-download loading of range tables.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::{Config, AWS_CACHE_FILE, MSFT_CACHE_FILE, RANGE_TABLE_TIMEOUT};
use crate::error_handling::LoadError;

use super::types::RangeTable;

/// Providers that publish range tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Microsoft,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::Aws => "AWS",
            Provider::Microsoft => "Microsoft",
        }
    }

    pub fn cache_file(&self) -> &'static str {
        match self {
            Provider::Aws => AWS_CACHE_FILE,
            Provider::Microsoft => MSFT_CACHE_FILE,
        }
    }
}

/// Where a provider's table is read from.
#[derive(Debug, Clone)]
pub struct RangeSource {
    pub provider: Provider,
    pub cache_path: PathBuf,
    pub url: String,
}

impl RangeSource {
    /// Builds the source for `provider` from the run configuration.
    pub fn for_provider(provider: Provider, config: &Config) -> Self {
        let url = match provider {
            Provider::Aws => config.endpoints.aws_ranges.clone(),
            Provider::Microsoft => format!(
                "{}?clientrequestid={}",
                config.endpoints.msft_ranges, config.msft_client_request_id
            ),
        };
        Self {
            provider,
            cache_path: config.ranges_dir.join(provider.cache_file()),
            url,
        }
    }
}

/// Reads and parses a cache file.
///
/// Returns `None` if the file doesn't exist, can't be read, or doesn't parse.
async fn load_from_cache<T: RangeTable>(path: &Path, provider: Provider) -> Option<T> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(
                "Local {} does not exist, downloading {} ranges",
                path.display(),
                provider.name()
            );
            return None;
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(table) => Some(table),
        Err(e) => {
            warn!(
                "Ignoring {}: not a valid {} range table ({})",
                path.display(),
                provider.name(),
                e
            );
            None
        }
    }
}

/// Downloads and parses a table from its published URL.
async fn fetch_from_url<T: RangeTable>(
    client: &reqwest::Client,
    url: &str,
    provider: Provider,
) -> Result<T, LoadError> {
    debug!("Fetching {} ranges from {}", provider.name(), url);
    let fetch_err = |source: reqwest::Error| LoadError::Fetch {
        provider: provider.name(),
        source,
    };

    let response = client
        .get(url)
        .timeout(RANGE_TABLE_TIMEOUT)
        .send()
        .await
        .map_err(fetch_err)?;
    if !response.status().is_success() {
        return Err(LoadError::Status {
            provider: provider.name(),
            status: response.status().as_u16(),
        });
    }

    let body = response.text().await.map_err(fetch_err)?;
    serde_json::from_str(&body).map_err(|source| LoadError::Parse {
        provider: provider.name(),
        source,
    })
}

fn version_suffix<T: RangeTable>(table: &T) -> String {
    table
        .version()
        .map(|version| format!(" (sync token {version})"))
        .unwrap_or_default()
}

/// Loads a provider's range table.
///
/// A cache file that exists and parses is used as is. Otherwise the table is
/// downloaded. Nothing is written back to the cache.
///
/// # Errors
///
/// Returns a `LoadError` if the cache is unusable and the download fails or
/// doesn't parse.
pub async fn load_table<T: RangeTable>(
    client: &reqwest::Client,
    source: &RangeSource,
) -> Result<T, LoadError> {
    if let Some(table) = load_from_cache::<T>(&source.cache_path, source.provider).await {
        info!(
            "Loaded {} {} range entries{} from {}",
            table.entry_count(),
            source.provider.name(),
            version_suffix(&table),
            source.cache_path.display()
        );
        return Ok(table);
    }

    let table = fetch_from_url::<T>(client, &source.url, source.provider).await?;
    info!(
        "Downloaded {} {} range entries{}",
        table.entry_count(),
        source.provider.name(),
        version_suffix(&table)
    );
    Ok(table)
}
