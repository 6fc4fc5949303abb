//! Common - Shared Types for Mold Wrapper Contracts
//!
//! This package provides the transfer-notification receiver interface shared
//! between the wrapper contract and contracts that want to react to incoming
//! mold-token transfers or approvals.

pub mod receiver;

pub use receiver::{ApprovalReceivedMsg, ReceiverExecuteMsg, TransferReceivedMsg};
