//! Cloud provider classification.
//!
//! Decides the "Cloud Specific Details" column from the WHOIS net name. AWS
//! names are resolved against the AWS range table, Microsoft names against the
//! Microsoft 365 table with an Azure service tag lookup as fallback.

use std::future::Future;
use std::net::Ipv4Addr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::config::{
    AWS_SIGNATURE, AZURE_TIMEOUT, MSFT_GLOBAL_NET_LABEL, MSFT_GLOBAL_NET_NAME, MSFT_SIGNATURE,
    NO_EXTENDED,
};
use crate::error_handling::LookupError;
use crate::matcher::{classify_msft, match_aws};
use crate::ranges::{AwsPrefix, AwsRanges, MsftRanges};

static AWS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile_signature(AWS_SIGNATURE));
static MSFT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| compile_signature(MSFT_SIGNATURE));

/// Compiles a provider signature. A pattern that fails to compile is logged
/// and disables that provider's classification.
fn compile_signature(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Invalid cloud signature pattern {pattern:?}: {e}");
            None
        }
    }
}

/// Returns true if the WHOIS name looks like an AWS allocation.
pub fn is_aws_name(name: &str) -> bool {
    AWS_PATTERN.as_ref().is_some_and(|re| re.is_match(name))
}

/// Returns true if the WHOIS name looks like a Microsoft allocation.
pub fn is_msft_name(name: &str) -> bool {
    MSFT_PATTERN.as_ref().is_some_and(|re| re.is_match(name))
}

pub fn aws_label(prefix: &AwsPrefix) -> String {
    format!("Amazon-{}-{}", prefix.service, prefix.region)
}

/// Range tables available to the classifier. Either may be missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudTables<'a> {
    pub aws: Option<&'a AwsRanges>,
    pub msft: Option<&'a MsftRanges>,
}

/// Which provider, if any, produced the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Unclassified,
    Aws(String),
    Microsoft(String),
    /// Microsoft address labelled from the fallback path
    MicrosoftFallback(String),
}

impl Classification {
    /// The report column value.
    pub fn label(&self) -> &str {
        match self {
            Classification::Unclassified => NO_EXTENDED,
            Classification::Aws(label)
            | Classification::Microsoft(label)
            | Classification::MicrosoftFallback(label) => label,
        }
    }
}

/// Classifies an address from its WHOIS name.
///
/// The AWS check runs first; a Microsoft match overwrites it. `azure_fallback`
/// is awaited only for Microsoft names that have no Microsoft 365 table entry.
pub async fn classify<F, Fut>(
    whois_name: &str,
    addr: Ipv4Addr,
    tables: CloudTables<'_>,
    azure_fallback: F,
) -> Classification
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Option<String>>,
{
    let mut result = Classification::Unclassified;

    if is_aws_name(whois_name) {
        match tables.aws.and_then(|table| match_aws(addr, table)) {
            Some(prefix) => result = Classification::Aws(aws_label(prefix)),
            None => log::debug!("{addr}: AWS name {whois_name} has no descriptive range entry"),
        }
    }

    if is_msft_name(whois_name) {
        if whois_name == MSFT_GLOBAL_NET_NAME {
            result = Classification::Microsoft(MSFT_GLOBAL_NET_LABEL.to_string());
        } else {
            let mut fell_back = false;
            let label = classify_msft(addr, tables.msft, || {
                fell_back = true;
                azure_fallback()
            })
            .await;
            result = if fell_back {
                Classification::MicrosoftFallback(label)
            } else {
                Classification::Microsoft(label)
            };
        }
    }

    result
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AzureIpInfo {
    service_tag_id: Option<String>,
}

/// Looks up the Azure service tag for an address.
///
/// Returns `Ok(None)` when the service answers without a tag.
pub async fn lookup_azure_service_tag(
    client: &reqwest::Client,
    base_url: &str,
    addr: Ipv4Addr,
) -> Result<Option<String>, LookupError> {
    let response = client
        .get(base_url)
        .query(&[("ipAddressOrUrl", addr.to_string())])
        .timeout(AZURE_TIMEOUT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let info: AzureIpInfo = serde_json::from_str(&body)?;
    Ok(info.service_tag_id.filter(|tag| !tag.trim().is_empty()))
}
