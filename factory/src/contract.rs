//! Mold Factory Contract - Entry Points
//!
//! Deploys exactly one mold wrapper per underlying CW20 asset, at a
//! deterministic address derived from the underlying (instantiate2 with the
//! underlying's canonical address as salt). Repeat deployments for the same
//! asset are idempotent no-ops returning the canonical address; wrapping a
//! wrapper is refused.

use cosmwasm_std::{
    entry_point, instantiate2_address, to_json_binary, Addr, Binary, Deps, DepsMut, Env,
    MessageInfo, Response, StdError, StdResult, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_wrapper_address, query_wrappers};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, UNDERLYING_OF, WRAPPERS};

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

    let config = Config {
        wrapper_code_id: msg.wrapper_code_id,
        transfer_delay_blocks: msg
            .transfer_delay_blocks
            .unwrap_or(mold_wrapper::state::DEFAULT_TRANSFER_DELAY),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("wrapper_code_id", config.wrapper_code_id.to_string())
        .add_attribute(
            "transfer_delay_blocks",
            config.transfer_delay_blocks.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DeployWrapper { underlying } => execute_deploy_wrapper(deps, env, underlying),
    }
}

fn execute_deploy_wrapper(
    deps: DepsMut,
    env: Env,
    underlying: String,
) -> Result<Response, ContractError> {
    let underlying = deps.api.addr_validate(&underlying)?;

    // Repeat deployment is a safe no-op returning the canonical address.
    if let Some(existing) = WRAPPERS.may_load(deps.storage, &underlying)? {
        return Ok(Response::new()
            .add_attribute("action", "deploy_wrapper")
            .add_attribute("underlying", underlying)
            .add_attribute("wrapper", existing)
            .add_attribute("created", "false"));
    }

    if UNDERLYING_OF.has(deps.storage, &underlying) {
        return Err(ContractError::AlreadyWrapped {
            token: underlying.to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let token: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(underlying.clone(), &Cw20QueryMsg::TokenInfo {})?;

    let wrapper = predict_wrapper_address(deps.as_ref(), &env, config.wrapper_code_id, &underlying)?;
    WRAPPERS.save(deps.storage, &underlying, &wrapper)?;
    UNDERLYING_OF.save(deps.storage, &wrapper, &underlying)?;

    let salt = deps.api.addr_canonicalize(underlying.as_str())?;
    let init = WasmMsg::Instantiate2 {
        admin: None,
        code_id: config.wrapper_code_id,
        label: format!("mold-{}", token.symbol),
        msg: to_json_binary(&mold_wrapper::msg::InstantiateMsg {
            underlying: underlying.to_string(),
            name: format!("Mold Security {}", token.name),
            symbol: format!("mld{}", token.symbol),
            decimals: token.decimals,
            transfer_delay_blocks: Some(config.transfer_delay_blocks),
        })?,
        funds: vec![],
        salt: Binary::from(salt.as_slice()),
    };

    Ok(Response::new()
        .add_message(init)
        .add_attribute("action", "deploy_wrapper")
        .add_attribute("underlying", underlying)
        .add_attribute("wrapper", wrapper)
        .add_attribute("created", "true"))
}

/// Derives the wrapper address a deployment for `underlying` will use. The
/// committing path and the preview query both go through here, so they agree
/// by construction.
pub fn predict_wrapper_address(
    deps: Deps,
    env: &Env,
    code_id: u64,
    underlying: &Addr,
) -> StdResult<Addr> {
    let code_info = deps.querier.query_wasm_code_info(code_id)?;
    let creator = deps.api.addr_canonicalize(env.contract.address.as_str())?;
    let salt = deps.api.addr_canonicalize(underlying.as_str())?;
    let canonical = instantiate2_address(code_info.checksum.as_slice(), &creator, salt.as_slice())
        .map_err(|err| StdError::generic_err(format!("instantiate2 address: {err}")))?;
    deps.api.addr_humanize(&canonical)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::WrapperAddress { underlying } => {
            to_json_binary(&query_wrapper_address(deps, env, underlying)?)
        }
        QueryMsg::Wrappers { start_after, limit } => {
            to_json_binary(&query_wrappers(deps, start_after, limit)?)
        }
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
