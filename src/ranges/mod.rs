//! Provider-published IP range tables.
//!
//! AWS and Microsoft publish the address blocks their services use as JSON
//! documents. A table is read from a local copy when one is present and
//! downloaded otherwise. Tables are loaded once per run and never modified.

mod loader;
mod types;

pub use loader::{load_table, Provider, RangeSource};
pub use types::{AwsPrefix, AwsRanges, MsftEndpointSet, MsftRanges, RangeTable};
