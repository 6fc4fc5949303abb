//! Message types for the mold wrapper contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::Cw20ReceiveMsg;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 contract wrapped 1:1 by this instance
    pub underlying: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Outgoing transfers are refused until more than this many blocks have
    /// passed since the sender last received mold tokens. Defaults to 2.
    pub transfer_delay_blocks: Option<u64>,
}

#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Deposit (underlying in, mold tokens out)
    // ========================================================================
    /// Pull `amount` of the underlying from the caller and credit the caller.
    /// Requires a prior CW20 allowance from the caller to this contract.
    Deposit { amount: Uint128 },

    /// As `Deposit`, crediting `beneficiary` instead of the caller.
    DepositTo { beneficiary: String, amount: Uint128 },

    /// As `DepositTo` targeting a contract, which must accept a
    /// `TransferReceived` notification for the whole call to succeed.
    DepositToAndCall {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    /// Push-mode deposit: the underlying CW20 sends tokens here via its
    /// `Send` message with a [`ReceiveMsg`] hook.
    Receive(Cw20ReceiveMsg),

    // ========================================================================
    // Withdraw (mold tokens in, underlying out)
    // ========================================================================
    /// Burn `amount` of the caller's mold tokens and release the underlying
    /// to the caller. Not subject to the delay lock.
    Withdraw { amount: Uint128 },

    /// As `Withdraw`, releasing the underlying to `recipient`.
    WithdrawTo { recipient: String, amount: Uint128 },

    /// Burn from `owner` (spending the caller's allowance unless the caller
    /// is the owner) and release the underlying to `recipient`.
    WithdrawFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    // ========================================================================
    // Transfers
    // ========================================================================
    Transfer { recipient: String, amount: Uint128 },

    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Transfer to a contract, which must accept a `TransferReceived`
    /// notification for the whole call to succeed.
    TransferAndCall {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    /// Destroy `amount` of the caller's mold tokens without releasing the
    /// underlying. Subject to the delay lock like any outgoing transfer.
    Burn { amount: Uint128 },

    BurnFrom { owner: String, amount: Uint128 },

    // ========================================================================
    // Allowances
    // ========================================================================
    /// Set the caller's allowance for `spender` to exactly `amount`.
    /// `Uint128::MAX` is the unlimited sentinel and is never decremented.
    Approve { spender: String, amount: Uint128 },

    /// As `Approve` targeting a contract, which must accept an
    /// `ApprovalReceived` notification for the whole call to succeed.
    ApproveAndCall {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },

    /// Offline-signed approval. Verifies `signature` over the permit digest
    /// for `(owner, spender, amount, nonce, deadline)`, bound to this
    /// contract instance, and sets the allowance as `Approve` would.
    Permit {
        owner: String,
        spender: String,
        amount: Uint128,
        /// Unix timestamp (seconds) after which the permit is rejected
        deadline: u64,
        /// 64-byte compact secp256k1 signature
        signature: Binary,
        /// Compressed secp256k1 public key of `owner`
        public_key: Binary,
    },
}

/// Hook messages accepted through the underlying CW20 `Send` path.
#[cw_serde]
pub enum ReceiveMsg {
    /// Credit the sent amount to `beneficiary` (the CW20 sender by default).
    Deposit { beneficiary: Option<String> },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Next expected permit nonce for `address`
    #[returns(NonceResponse)]
    Nonce { address: String },

    #[returns(UnderlyingResponse)]
    Underlying {},

    #[returns(TransferDelayResponse)]
    TransferDelay {},

    /// Delay-lock state of an account
    #[returns(LockStatusResponse)]
    LockStatus { address: String },
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct UnderlyingResponse {
    pub underlying: Addr,
}

#[cw_serde]
pub struct TransferDelayResponse {
    pub delay_blocks: u64,
}

#[cw_serde]
pub struct LockStatusResponse {
    /// Height of the last balance-increasing credit, if any
    pub last_received_height: Option<u64>,
    /// First height at which an outgoing transfer is accepted again
    pub unlocked_at: Option<u64>,
}
