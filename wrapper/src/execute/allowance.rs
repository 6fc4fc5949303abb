//! Allowance handlers: direct approval, approval with notification, and
//! offline-signed approval (permit).

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::notify;
use crate::permit;
use crate::state::{ALLOWANCES, NONCES};

/// Sets the caller's allowance for `spender` to exactly `amount`.
pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;

    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &amount)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount))
}

/// Approves a contract spender, which must acknowledge via the receiver
/// interface; a declined or impossible callback reverts the approval.
pub fn execute_approve_and_call(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
    amount: Uint128,
    msg: Binary,
) -> Result<Response, ContractError> {
    let contract = deps.api.addr_validate(&contract)?;

    ALLOWANCES.save(deps.storage, (&info.sender, &contract), &amount)?;

    let callback = notify::approval_callback(&contract, &info.sender, amount, msg)?;

    Ok(Response::new()
        .add_submessage(callback)
        .add_attribute("action", "approve_and_call")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", contract)
        .add_attribute("amount", amount))
}

/// Applies an offline-signed approval. Anyone may submit the permit; the
/// expiry check runs before any signature work, and the owner's nonce is
/// consumed on success.
pub fn execute_permit(
    deps: DepsMut,
    env: Env,
    owner: String,
    spender: String,
    amount: Uint128,
    deadline: u64,
    signature: Binary,
    public_key: Binary,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;

    if env.block.time.seconds() > deadline {
        return Err(ContractError::ExpiredPermit { deadline });
    }

    let nonce = NONCES.may_load(deps.storage, &owner)?.unwrap_or_default();
    permit::verify(
        deps.as_ref(),
        &env,
        &owner,
        &spender,
        amount,
        nonce,
        deadline,
        &signature,
        &public_key,
    )?;

    NONCES.save(deps.storage, &owner, &(nonce + 1))?;
    ALLOWANCES.save(deps.storage, (&owner, &spender), &amount)?;

    Ok(Response::new()
        .add_attribute("action", "permit")
        .add_attribute("owner", owner)
        .add_attribute("spender", spender)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}
