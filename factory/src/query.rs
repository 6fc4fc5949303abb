//! Query handlers for the mold factory contract.

use cosmwasm_std::{Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::contract::predict_wrapper_address;
use crate::msg::{ConfigResponse, WrapperAddressResponse, WrapperEntry, WrappersResponse};
use crate::state::{CONFIG, WRAPPERS};

/// Default number of registry entries returned per page
const DEFAULT_LIMIT: u32 = 30;
/// Maximum number of registry entries returned per page
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        wrapper_code_id: config.wrapper_code_id,
        transfer_delay_blocks: config.transfer_delay_blocks,
    })
}

pub fn query_wrapper_address(
    deps: Deps,
    env: Env,
    underlying: String,
) -> StdResult<WrapperAddressResponse> {
    let underlying = deps.api.addr_validate(&underlying)?;

    if let Some(wrapper) = WRAPPERS.may_load(deps.storage, &underlying)? {
        return Ok(WrapperAddressResponse {
            underlying,
            wrapper,
            deployed: true,
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let wrapper = predict_wrapper_address(deps, &env, config.wrapper_code_id, &underlying)?;
    Ok(WrapperAddressResponse {
        underlying,
        wrapper,
        deployed: false,
    })
}

pub fn query_wrappers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<WrappersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let wrappers = WRAPPERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (underlying, wrapper) = item?;
            Ok(WrapperEntry {
                underlying,
                wrapper,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(WrappersResponse { wrappers })
}
