//! Execute handlers and shared ledger primitives.

mod allowance;
mod deposit;
mod transfer;
mod withdraw;

pub use allowance::{execute_approve, execute_approve_and_call, execute_permit};
pub use deposit::{execute_deposit, execute_deposit_to_and_call, execute_receive};
pub use transfer::{
    execute_burn, execute_burn_from, execute_transfer, execute_transfer_and_call,
    execute_transfer_from,
};
pub use withdraw::{execute_withdraw, execute_withdraw_from};

use cosmwasm_std::{Addr, Env, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{ALLOWANCES, BALANCES, LAST_RECEIVED, TOKEN_INFO, TRANSFER_DELAY, UNLIMITED_ALLOWANCE};

/// Credits `account` and stamps its delay lock at the current height.
pub(crate) fn credit(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
    height: u64,
) -> Result<(), ContractError> {
    BALANCES.update(storage, account, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default() + amount)
    })?;
    LAST_RECEIVED.save(storage, account, &height)?;
    Ok(())
}

/// Debits `account`, failing when the balance does not cover `amount`.
pub(crate) fn debit(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, account)?.unwrap_or_default();
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }
    BALANCES.save(storage, account, &(balance - amount))?;
    Ok(())
}

/// Delay-lock gate for outgoing transfers from `account`. The lock releases
/// once strictly more than the configured number of blocks have passed since
/// the account last received mold tokens.
pub(crate) fn assert_unlocked(
    storage: &dyn Storage,
    env: &Env,
    account: &Addr,
) -> Result<(), ContractError> {
    if let Some(last) = LAST_RECEIVED.may_load(storage, account)? {
        let delay = TRANSFER_DELAY.load(storage)?;
        if env.block.height - last <= delay {
            return Err(ContractError::TransferLocked {
                unlock_height: last + delay + 1,
            });
        }
    }
    Ok(())
}

/// Spends `spender`'s allowance from `owner`. The owner moves its own funds
/// without any allowance, and the unlimited sentinel is never decremented.
pub(crate) fn spend_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    if spender == owner {
        return Ok(());
    }
    let allowance = ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default();
    if allowance == UNLIMITED_ALLOWANCE {
        return Ok(());
    }
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            allowance,
            required: amount,
        });
    }
    ALLOWANCES.save(storage, (owner, spender), &(allowance - amount))?;
    Ok(())
}

/// Mints `amount` into the total supply.
pub(crate) fn grow_supply(storage: &mut dyn Storage, amount: Uint128) -> Result<(), ContractError> {
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply += amount;
    TOKEN_INFO.save(storage, &info)?;
    Ok(())
}

/// Burns `amount` out of the total supply. Callers debit a balance first, so
/// the supply always covers the amount.
pub(crate) fn shrink_supply(
    storage: &mut dyn Storage,
    amount: Uint128,
) -> Result<(), ContractError> {
    let mut info = TOKEN_INFO.load(storage)?;
    info.total_supply = info.total_supply.checked_sub(amount).map_err(|_| {
        ContractError::InsufficientBalance {
            balance: info.total_supply,
            required: amount,
        }
    })?;
    TOKEN_INFO.save(storage, &info)?;
    Ok(())
}

/// Rejects zero-amount operations, matching cw20 conventions.
pub(crate) fn assert_nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidZeroAmount);
    }
    Ok(())
}
