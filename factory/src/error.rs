//! Error types for the mold factory contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Attempt to mold an already mold token: {token}")]
    AlreadyWrapped { token: String },
}
