//! Notification dispatch for the `*AndCall` operations.
//!
//! Callbacks are regular contract executions wrapped in `reply_on_error`
//! submessages: a target that is not a contract, does not implement the
//! receiver interface, or returns an error fails the enclosing operation
//! with `ContractError::NotificationDeclined`.

use common::receiver::{ApprovalReceivedMsg, TransferReceivedMsg};
use cosmwasm_std::{Addr, Binary, StdResult, SubMsg, Uint128};

/// Reply id for `TransferReceived` callbacks.
pub const REPLY_TRANSFER_CALLBACK: u64 = 2;

/// Reply id for `ApprovalReceived` callbacks.
pub const REPLY_APPROVAL_CALLBACK: u64 = 3;

/// Builds the `TransferReceived` callback submessage for `contract`.
pub fn transfer_callback(
    contract: &Addr,
    sender: &Addr,
    amount: Uint128,
    msg: Binary,
) -> StdResult<SubMsg> {
    let callback = TransferReceivedMsg {
        sender: sender.to_string(),
        amount,
        msg,
    }
    .into_cosmos_msg(contract.to_string())?;
    Ok(SubMsg::reply_on_error(callback, REPLY_TRANSFER_CALLBACK))
}

/// Builds the `ApprovalReceived` callback submessage for `contract`.
pub fn approval_callback(
    contract: &Addr,
    owner: &Addr,
    amount: Uint128,
    msg: Binary,
) -> StdResult<SubMsg> {
    let callback = ApprovalReceivedMsg {
        owner: owner.to_string(),
        amount,
        msg,
    }
    .into_cosmos_msg(contract.to_string())?;
    Ok(SubMsg::reply_on_error(callback, REPLY_APPROVAL_CALLBACK))
}
