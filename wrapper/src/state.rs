//! State definitions for the mold wrapper contract.
//!
//! One wrapper instance holds the full accounting state for a single
//! underlying CW20 asset: balances, allowances, permit nonces and the
//! per-account delay-lock heights.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:mold-wrapper";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Blocks that must elapse after a credit before the credited account may
/// send mold tokens again.
pub const DEFAULT_TRANSFER_DELAY: u64 = 2;

/// Allowance value treated as infinite; spends never decrement it.
pub const UNLIMITED_ALLOWANCE: Uint128 = Uint128::MAX;

/// Token metadata and supply.
#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Always equals the sum of all balances, and never exceeds the
    /// underlying-asset balance held by this contract.
    pub total_supply: Uint128,
}

/// Token metadata and total supply
pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// The wrapped CW20 asset
pub const UNDERLYING: Item<Addr> = Item::new("underlying");

/// Delay-lock window in blocks
pub const TRANSFER_DELAY: Item<u64> = Item::new("transfer_delay");

/// Mold token balances
/// Key: account, Value: balance
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// Absolute allowances
/// Key: (owner, spender), Value: remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

/// Height at which an account last received a balance-increasing credit.
/// Absent means the account never received anything.
pub const LAST_RECEIVED: Map<&Addr, u64> = Map::new("last_received");

/// Permit replay counters
/// Key: owner, Value: next expected nonce
pub const NONCES: Map<&Addr, u64> = Map::new("nonces");
