//! Query handlers for the mold wrapper contract.

use cosmwasm_std::{Deps, StdResult};
use cw20::{BalanceResponse, TokenInfoResponse};

use crate::msg::{
    AllowanceResponse, LockStatusResponse, NonceResponse, TransferDelayResponse,
    UnderlyingResponse,
};
use crate::state::{ALLOWANCES, BALANCES, LAST_RECEIVED, NONCES, TOKEN_INFO, TRANSFER_DELAY, UNDERLYING};

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &address)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}

pub fn query_nonce(deps: Deps, address: String) -> StdResult<NonceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let nonce = NONCES.may_load(deps.storage, &address)?.unwrap_or_default();
    Ok(NonceResponse { nonce })
}

pub fn query_underlying(deps: Deps) -> StdResult<UnderlyingResponse> {
    Ok(UnderlyingResponse {
        underlying: UNDERLYING.load(deps.storage)?,
    })
}

pub fn query_transfer_delay(deps: Deps) -> StdResult<TransferDelayResponse> {
    Ok(TransferDelayResponse {
        delay_blocks: TRANSFER_DELAY.load(deps.storage)?,
    })
}

pub fn query_lock_status(deps: Deps, address: String) -> StdResult<LockStatusResponse> {
    let address = deps.api.addr_validate(&address)?;
    let last = LAST_RECEIVED.may_load(deps.storage, &address)?;
    let delay = TRANSFER_DELAY.load(deps.storage)?;
    Ok(LockStatusResponse {
        last_received_height: last,
        unlocked_at: last.map(|height| height + delay + 1),
    })
}
