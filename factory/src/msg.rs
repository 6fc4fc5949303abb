//! Message types for the mold factory contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the stored mold wrapper contract
    pub wrapper_code_id: u64,
    /// Delay-lock window for every deployed wrapper. Defaults to 2 blocks.
    pub transfer_delay_blocks: Option<u64>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deploy the wrapper for `underlying`, or return the existing wrapper
    /// address when one was already deployed (idempotent). Fails when
    /// `underlying` is itself a wrapper deployed by this factory.
    DeployWrapper { underlying: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// The wrapper address for `underlying`: the registered address once
    /// deployed, otherwise the address a deployment would derive. Preview and
    /// commit agree by construction.
    #[returns(WrapperAddressResponse)]
    WrapperAddress { underlying: String },

    /// Paginated registry enumeration
    #[returns(WrappersResponse)]
    Wrappers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub wrapper_code_id: u64,
    pub transfer_delay_blocks: u64,
}

#[cw_serde]
pub struct WrapperAddressResponse {
    pub underlying: Addr,
    pub wrapper: Addr,
    /// Whether the wrapper is already deployed and registered
    pub deployed: bool,
}

#[cw_serde]
pub struct WrapperEntry {
    pub underlying: Addr,
    pub wrapper: Addr,
}

#[cw_serde]
pub struct WrappersResponse {
    pub wrappers: Vec<WrapperEntry>,
}
