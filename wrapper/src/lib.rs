pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod notify;
pub mod permit;
pub mod query;
pub mod state;
pub mod underlying;
