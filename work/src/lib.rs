//! Proof-of-work for Nano blocks.
//!
//! Not mining: a block carries a 64-bit nonce whose Blake2b work value
//! against the block's root hash must clear a network threshold. This crate
//! converts thresholds to and from multipliers, validates nonces, and
//! searches for them on a rayon pool with an optional time budget.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod generator;
pub mod hasher;
pub mod nonce;
pub mod text;
pub mod thresholds;
pub mod validator;

pub use config::WorkConfig;
pub use difficulty::{parse_multiplier, Difficulty, DEFAULT_BASE_DIFFICULTY, DEFAULT_DIFFICULTY};
pub use error::WorkError;
pub use generator::WorkGenerator;
pub use hasher::{Blake2bWorkHasher, WorkHasher};
pub use nonce::WorkNonce;
pub use text::{
    derive_work_difficulty, derive_work_multiplier, get_work_value, get_work_value_hex,
    parse_difficulty, parse_work, solve_work, validate_difficulty, validate_work,
};
pub use thresholds::{WorkBlockKind, WorkThresholds};
pub use validator::{meets_difficulty, work_value};
