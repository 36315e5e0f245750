//! Conversion of ARIN responses into [`WhoisRecord`]s.

use std::net::Ipv4Addr;

use ipnetwork::Ipv4Network;

use super::types::{ArinNetBlock, ArinResponse, WhoisRecord};
use crate::error_handling::LookupError;

fn block_network(block: &ArinNetBlock) -> Option<Ipv4Network> {
    let start: Ipv4Addr = block.start_address.value.trim().parse().ok()?;
    let length: u8 = block.cidr_length.value.trim().parse().ok()?;
    Ipv4Network::new(start, length).ok()
}

/// Picks the block containing `addr`.
///
/// A single listed block is returned without a containment check.
fn containing_block(blocks: &[ArinNetBlock], addr: Ipv4Addr) -> Option<Ipv4Network> {
    if let [only] = blocks {
        return block_network(only);
    }
    blocks
        .iter()
        .filter_map(block_network)
        .find(|network| network.contains(addr))
}

/// Parses an ARIN `/rest/ip/<addr>` JSON body.
pub(crate) fn parse_arin_response(body: &str, addr: Ipv4Addr) -> Result<WhoisRecord, LookupError> {
    let response: ArinResponse = serde_json::from_str(body)?;
    let net = response.net;

    let name = net.name.value.trim().to_string();
    if name.is_empty() {
        return Err(LookupError::Malformed("empty net name".to_string()));
    }

    let cidr = net
        .net_blocks
        .as_ref()
        .and_then(|blocks| containing_block(blocks.net_block.as_slice(), addr));

    Ok(WhoisRecord {
        name,
        cidr,
    })
}
