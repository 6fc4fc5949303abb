//! Transfer and burn handlers, all gated by the delay lock on the source
//! account. Burn is the wrapped-domain equivalent of a transfer to the null
//! address: it destroys tokens without releasing the underlying and without
//! crediting anyone.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::{
    assert_nonzero, assert_unlocked, credit, debit, shrink_supply, spend_allowance,
};
use crate::notify;

pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    assert_unlocked(deps.storage, &env, &info.sender)?;
    debit(deps.storage, &info.sender, amount)?;
    credit(deps.storage, &recipient, amount, env.block.height)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    assert_unlocked(deps.storage, &env, &owner)?;
    spend_allowance(deps.storage, &owner, &info.sender, amount)?;
    debit(deps.storage, &owner, amount)?;
    credit(deps.storage, &recipient, amount, env.block.height)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner)
        .add_attribute("to", recipient)
        .add_attribute("spender", info.sender)
        .add_attribute("amount", amount))
}

/// Transfer to a contract that must acknowledge the credit via the receiver
/// interface; a declined or impossible callback reverts the transfer.
pub fn execute_transfer_and_call(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let contract = deps.api.addr_validate(&contract)?;

    assert_unlocked(deps.storage, &env, &info.sender)?;
    debit(deps.storage, &info.sender, amount)?;
    credit(deps.storage, &contract, amount, env.block.height)?;

    let callback = notify::transfer_callback(&contract, &info.sender, amount, msg)?;

    Ok(Response::new()
        .add_submessage(callback)
        .add_attribute("action", "transfer_and_call")
        .add_attribute("from", info.sender)
        .add_attribute("to", contract)
        .add_attribute("amount", amount))
}

pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;

    assert_unlocked(deps.storage, &env, &info.sender)?;
    debit(deps.storage, &info.sender, amount)?;
    shrink_supply(deps.storage, amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount))
}

pub fn execute_burn_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let owner = deps.api.addr_validate(&owner)?;

    assert_unlocked(deps.storage, &env, &owner)?;
    spend_allowance(deps.storage, &owner, &info.sender, amount)?;
    debit(deps.storage, &owner, amount)?;
    shrink_supply(deps.storage, amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn_from")
        .add_attribute("from", owner)
        .add_attribute("spender", info.sender)
        .add_attribute("amount", amount))
}
