//! State definitions for the mold factory contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:mold-factory";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Code id the wrapper contract is instantiated from
    pub wrapper_code_id: u64,
    /// Delay-lock window passed to every wrapper deployed by this factory
    pub transfer_delay_blocks: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Registry of deployed wrappers. Grows monotonically; entries are never
/// removed.
/// Key: underlying asset, Value: wrapper address
pub const WRAPPERS: Map<&Addr, Addr> = Map::new("wrappers");

/// Reverse registry used to refuse wrapping a wrapper.
/// Key: wrapper address, Value: underlying asset
pub const UNDERLYING_OF: Map<&Addr, Addr> = Map::new("underlying_of");
