//! CW20 message builders for the wrapped underlying asset.
//!
//! All calls into the underlying contract are dispatched as submessages with
//! `reply_on_error`, so a failed pull or push surfaces as
//! `ContractError::UnderlyingAssetCallFailed` and reverts the whole
//! invocation.

use cosmwasm_std::{to_json_binary, Addr, StdResult, SubMsg, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

/// Reply id shared by all calls into the underlying asset contract.
pub const REPLY_UNDERLYING_CALL: u64 = 1;

/// Pulls `amount` of the underlying from `owner` into the wrapper.
/// Requires a prior CW20 allowance from `owner` to the wrapper.
pub fn pull(underlying: &Addr, owner: &Addr, wrapper: &Addr, amount: Uint128) -> StdResult<SubMsg> {
    let msg = WasmMsg::Execute {
        contract_addr: underlying.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: wrapper.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    Ok(SubMsg::reply_on_error(msg, REPLY_UNDERLYING_CALL))
}

/// Pushes `amount` of the underlying out of the wrapper to `recipient`.
pub fn push(underlying: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<SubMsg> {
    let msg = WasmMsg::Execute {
        contract_addr: underlying.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    Ok(SubMsg::reply_on_error(msg, REPLY_UNDERLYING_CALL))
}
