//! Deposit handlers: underlying asset in, mold tokens out.
//!
//! Pull mode (`Deposit`/`DepositTo`) uses CW20 `TransferFrom` and requires a
//! prior allowance from the depositor to this contract. Push mode is the CW20
//! `Send` hook (`Receive`), where the underlying has already moved when the
//! hook runs.

use cosmwasm_std::{from_json, Binary, DepsMut, Env, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::execute::{assert_nonzero, credit, grow_supply};
use crate::msg::ReceiveMsg;
use crate::notify;
use crate::state::UNDERLYING;
use crate::underlying;

/// Pull-mode deposit crediting `beneficiary` (the caller when `None`).
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: Option<String>,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let beneficiary = match beneficiary {
        Some(raw) => deps.api.addr_validate(&raw)?,
        None => info.sender.clone(),
    };
    let underlying = UNDERLYING.load(deps.storage)?;

    credit(deps.storage, &beneficiary, amount, env.block.height)?;
    grow_supply(deps.storage, amount)?;

    let pull = underlying::pull(&underlying, &info.sender, &env.contract.address, amount)?;

    Ok(Response::new()
        .add_submessage(pull)
        .add_attribute("action", "deposit")
        .add_attribute("from", info.sender)
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("amount", amount))
}

/// Pull-mode deposit to a contract that must acknowledge the credit.
pub fn execute_deposit_to_and_call(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    assert_nonzero(amount)?;
    let contract = deps.api.addr_validate(&contract)?;
    let underlying = UNDERLYING.load(deps.storage)?;

    credit(deps.storage, &contract, amount, env.block.height)?;
    grow_supply(deps.storage, amount)?;

    let pull = underlying::pull(&underlying, &info.sender, &env.contract.address, amount)?;
    let callback = notify::transfer_callback(&contract, &info.sender, amount, msg)?;

    Ok(Response::new()
        .add_submessage(pull)
        .add_submessage(callback)
        .add_attribute("action", "deposit_and_call")
        .add_attribute("from", info.sender)
        .add_attribute("beneficiary", contract)
        .add_attribute("amount", amount))
}

/// Push-mode deposit through the underlying CW20 `Send` hook.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let underlying = UNDERLYING.load(deps.storage)?;
    if info.sender != underlying {
        return Err(ContractError::UnauthorizedReceive);
    }
    assert_nonzero(cw20_msg.amount)?;
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;

    match from_json(&cw20_msg.msg)? {
        ReceiveMsg::Deposit { beneficiary } => {
            let beneficiary = match beneficiary {
                Some(raw) => deps.api.addr_validate(&raw)?,
                None => sender.clone(),
            };

            credit(deps.storage, &beneficiary, cw20_msg.amount, env.block.height)?;
            grow_supply(deps.storage, cw20_msg.amount)?;

            Ok(Response::new()
                .add_attribute("action", "deposit_receive")
                .add_attribute("from", sender)
                .add_attribute("beneficiary", beneficiary)
                .add_attribute("amount", cw20_msg.amount))
        }
    }
}
