//! WHOIS data structures.

use ipnetwork::Ipv4Network;
use serde::Deserialize;

use crate::config::{NO_WHOIS_NETBLOCK, NO_WHOIS_RESULT};

/// WHOIS lookup result for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisRecord {
    /// ARIN net name (e.g. `APNIC-LABS`, `AMAZON-2011L`, `MSFT`)
    pub name: String,
    /// The net block containing the address
    pub cidr: Option<Ipv4Network>,
}

impl WhoisRecord {
    /// Record used when the lookup failed.
    pub fn unresolved() -> Self {
        Self {
            name: NO_WHOIS_RESULT.to_string(),
            cidr: None,
        }
    }

    /// Value for the netblock report column.
    pub fn netblock(&self) -> String {
        self.cidr
            .map(|cidr| cidr.to_string())
            .unwrap_or_else(|| NO_WHOIS_NETBLOCK.to_string())
    }
}

// ARIN RWS JSON wraps every scalar as {"$": "value"}.

#[derive(Debug, Deserialize)]
pub(crate) struct ArinValue {
    #[serde(rename = "$")]
    pub(crate) value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArinResponse {
    pub(crate) net: ArinNet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArinNet {
    pub(crate) name: ArinValue,
    pub(crate) net_blocks: Option<ArinNetBlocks>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArinNetBlocks {
    pub(crate) net_block: OneOrMany<ArinNetBlock>,
}

/// ARIN emits a lone object when there is one block and an array otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArinNetBlock {
    pub(crate) start_address: ArinValue,
    pub(crate) cidr_length: ArinValue,
}
