//! Typed data model of the Starknet JSON-RPC interface: status enumerations,
//! the versioned transaction envelope, replies and request parameters.
pub mod error;
mod macros;
pub mod reply;
pub mod request;
pub mod status;
pub mod transaction;

pub use error::{SyncStateError, TransactionError, UnrecognisedToken};
pub use transaction::{Transaction, TransactionType, TransactionVersion};
