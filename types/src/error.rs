//! Parse errors for the value types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid block hash {0:?}: expected 64 hex characters")]
    InvalidBlockHash(String),

    #[error("invalid public key {0:?}: expected 64 hex characters")]
    InvalidPublicKey(String),

    #[error("unknown network {0:?}")]
    UnknownNetwork(String),

    #[error("invalid amount {0:?}: expected a non-negative decimal no finer than 1 raw")]
    InvalidAmount(String),

    #[error("amount {0:?} exceeds the 128-bit raw range")]
    AmountOverflow(String),

    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
}
