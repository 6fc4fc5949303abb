//! Receiver interface for transfer and approval notifications.
//!
//! Modeled on `cw20::Cw20ReceiveMsg`: the wrapper contract serializes one of
//! these payloads into the receiver's own `ExecuteMsg` envelope and executes
//! it in the same transaction. A contract that wants to accept `*AndCall`
//! operations embeds [`ReceiverExecuteMsg`]'s variants in its `ExecuteMsg`.
//! The callback target sees the wrapper contract as `info.sender`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};

/// Payload delivered to a contract that just received mold tokens.
#[cw_serde]
pub struct TransferReceivedMsg {
    /// Account the tokens came from.
    pub sender: String,
    /// Amount credited to the receiving contract.
    pub amount: Uint128,
    /// Opaque data chosen by the sender.
    pub msg: Binary,
}

impl TransferReceivedMsg {
    /// Serializes the payload into the receiver's envelope and wraps it in a
    /// `WasmMsg::Execute` addressed to `contract`.
    pub fn into_cosmos_msg(self, contract: impl Into<String>) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&ReceiverExecuteMsg::OnTokenTransfer(self))?;
        Ok(WasmMsg::Execute {
            contract_addr: contract.into(),
            msg,
            funds: vec![],
        }
        .into())
    }
}

/// Payload delivered to a contract that was just granted an allowance.
#[cw_serde]
pub struct ApprovalReceivedMsg {
    /// Account that granted the allowance.
    pub owner: String,
    /// Allowance amount set for the receiving contract.
    pub amount: Uint128,
    /// Opaque data chosen by the owner.
    pub msg: Binary,
}

impl ApprovalReceivedMsg {
    pub fn into_cosmos_msg(self, contract: impl Into<String>) -> StdResult<CosmosMsg> {
        let msg = to_json_binary(&ReceiverExecuteMsg::OnTokenApproval(self))?;
        Ok(WasmMsg::Execute {
            contract_addr: contract.into(),
            msg,
            funds: vec![],
        }
        .into())
    }
}

/// Message shapes a receiving contract must handle to accept notifications.
/// Declining (returning an error) aborts the operation that triggered the
/// notification.
#[cw_serde]
pub enum ReceiverExecuteMsg {
    OnTokenTransfer(TransferReceivedMsg),
    OnTokenApproval(ApprovalReceivedMsg),
}
