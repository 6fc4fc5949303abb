//! Withdraw handlers: mold tokens in, underlying asset out.
//!
//! Withdrawal exits the wrapped domain, so it is deliberately not gated by
//! the delay lock and never stamps a lock height.

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::{assert_nonzero, debit, shrink_supply, spend_allowance};
use crate::state::UNDERLYING;
use crate::underlying;

/// Burns the caller's mold tokens and releases the underlying to `recipient`
/// (the caller when `None`).
pub fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    recipient: Option<String>,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let recipient = match recipient {
        Some(raw) => deps.api.addr_validate(&raw)?,
        None => info.sender.clone(),
    };
    let underlying = UNDERLYING.load(deps.storage)?;

    debit(deps.storage, &info.sender, amount)?;
    shrink_supply(deps.storage, amount)?;

    let push = underlying::push(&underlying, &recipient, amount)?;

    Ok(Response::new()
        .add_submessage(push)
        .add_attribute("action", "withdraw")
        .add_attribute("owner", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

/// Burns `owner`'s mold tokens, spending the caller's allowance unless the
/// caller is the owner, and releases the underlying to `recipient`.
pub fn execute_withdraw_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let underlying = UNDERLYING.load(deps.storage)?;

    spend_allowance(deps.storage, &owner, &info.sender, amount)?;
    debit(deps.storage, &owner, amount)?;
    shrink_supply(deps.storage, amount)?;

    let push = underlying::push(&underlying, &recipient, amount)?;

    Ok(Response::new()
        .add_submessage(push)
        .add_attribute("action", "withdraw_from")
        .add_attribute("owner", owner)
        .add_attribute("spender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}
