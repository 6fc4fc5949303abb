//! Error types for the mold wrapper contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Transfer amount exceeds balance: have {balance}, need {required}")]
    InsufficientBalance {
        balance: Uint128,
        required: Uint128,
    },

    #[error("Request exceeds allowance: have {allowance}, need {required}")]
    InsufficientAllowance {
        allowance: Uint128,
        required: Uint128,
    },

    #[error("Not enough blocks passed from previous transfer: unlocked at height {unlock_height}")]
    TransferLocked { unlock_height: u64 },

    #[error("Invalid permit")]
    InvalidSignature,

    #[error("Expired permit: deadline {deadline}")]
    ExpiredPermit { deadline: u64 },

    #[error("Notification declined: {reason}")]
    NotificationDeclined { reason: String },

    #[error("Underlying asset call failed: {reason}")]
    UnderlyingAssetCallFailed { reason: String },

    #[error("Invalid zero amount")]
    InvalidZeroAmount,

    #[error("Only the underlying asset may call Receive")]
    UnauthorizedReceive,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
