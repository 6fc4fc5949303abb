//! Mold Wrapper Contract - Entry Points
//!
//! A 1:1-backed wrapper over a CW20 asset with a per-account transfer delay:
//! any account that receives mold tokens must wait a configured number of
//! blocks before sending them on, which blunts same-block arbitrage between
//! deposit and transfer. The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `permit` - Offline-signed approval verification
//! - `notify` - Receiver-callback dispatch
//! - `underlying` - CW20 calls into the wrapped asset

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, SubMsgResult, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_approve_and_call, execute_burn, execute_burn_from, execute_deposit,
    execute_deposit_to_and_call, execute_permit, execute_receive, execute_transfer,
    execute_transfer_and_call, execute_transfer_from, execute_withdraw, execute_withdraw_from,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::notify::{REPLY_APPROVAL_CALLBACK, REPLY_TRANSFER_CALLBACK};
use crate::query::{
    query_allowance, query_balance, query_lock_status, query_nonce, query_token_info,
    query_transfer_delay, query_underlying,
};
use crate::state::{
    TokenInfo, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_TRANSFER_DELAY, TOKEN_INFO,
    TRANSFER_DELAY, UNDERLYING,
};
use crate::underlying::REPLY_UNDERLYING_CALL;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let underlying = deps.api.addr_validate(&msg.underlying)?;
    UNDERLYING.save(deps.storage, &underlying)?;

    let token_info = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: msg.decimals,
        total_supply: Uint128::zero(),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;

    let delay = msg.transfer_delay_blocks.unwrap_or(DEFAULT_TRANSFER_DELAY);
    TRANSFER_DELAY.save(deps.storage, &delay)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("underlying", underlying)
        .add_attribute("name", token_info.name)
        .add_attribute("symbol", token_info.symbol)
        .add_attribute("transfer_delay", delay.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Deposits
        ExecuteMsg::Deposit { amount } => execute_deposit(deps, env, info, None, amount),
        ExecuteMsg::DepositTo {
            beneficiary,
            amount,
        } => execute_deposit(deps, env, info, Some(beneficiary), amount),
        ExecuteMsg::DepositToAndCall {
            contract,
            amount,
            msg,
        } => execute_deposit_to_and_call(deps, env, info, contract, amount, msg),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        // Withdrawals
        ExecuteMsg::Withdraw { amount } => execute_withdraw(deps, info, None, amount),
        ExecuteMsg::WithdrawTo { recipient, amount } => {
            execute_withdraw(deps, info, Some(recipient), amount)
        }
        ExecuteMsg::WithdrawFrom {
            owner,
            recipient,
            amount,
        } => execute_withdraw_from(deps, info, owner, recipient, amount),

        // Transfers
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::TransferAndCall {
            contract,
            amount,
            msg,
        } => execute_transfer_and_call(deps, env, info, contract, amount, msg),
        ExecuteMsg::Burn { amount } => execute_burn(deps, env, info, amount),
        ExecuteMsg::BurnFrom { owner, amount } => execute_burn_from(deps, env, info, owner, amount),

        // Allowances
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount),
        ExecuteMsg::ApproveAndCall {
            contract,
            amount,
            msg,
        } => execute_approve_and_call(deps, info, contract, amount, msg),
        ExecuteMsg::Permit {
            owner,
            spender,
            amount,
            deadline,
            signature,
            public_key,
        } => execute_permit(
            deps, env, owner, spender, amount, deadline, signature, public_key,
        ),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// All submessages are `reply_on_error`; a reply therefore always carries a
/// failure, which is mapped to the matching error and reverts the whole
/// invocation.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let reason = match msg.result {
        SubMsgResult::Err(reason) => reason,
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };
    match msg.id {
        REPLY_UNDERLYING_CALL => Err(ContractError::UnderlyingAssetCallFailed { reason }),
        REPLY_TRANSFER_CALLBACK | REPLY_APPROVAL_CALLBACK => {
            Err(ContractError::NotificationDeclined { reason })
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::Nonce { address } => to_json_binary(&query_nonce(deps, address)?),
        QueryMsg::Underlying {} => to_json_binary(&query_underlying(deps)?),
        QueryMsg::TransferDelay {} => to_json_binary(&query_transfer_delay(deps)?),
        QueryMsg::LockStatus { address } => to_json_binary(&query_lock_status(deps, address)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
