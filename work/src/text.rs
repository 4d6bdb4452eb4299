//! Hex-string entry points.
//!
//! These take and return the canonical text forms used over RPC: 16-char hex
//! for work and difficulty, 64-char hex for block hashes. Where a difficulty
//! is optional, `None` selects [`DEFAULT_DIFFICULTY`] or
//! [`DEFAULT_BASE_DIFFICULTY`]; pass an explicit value (or use
//! [`WorkConfig`](crate::WorkConfig)) for other networks.

use std::time::Duration;

use nano_types::BlockHash;

use crate::validator::work_value;
use crate::{
    Difficulty, WorkError, WorkGenerator, WorkNonce, DEFAULT_BASE_DIFFICULTY, DEFAULT_DIFFICULTY,
};

fn difficulty_or(text: Option<&str>, default: Difficulty) -> Result<Difficulty, WorkError> {
    text.map_or(Ok(default), Difficulty::from_hex)
}

/// Validate a work string, returning its canonical lowercase form.
pub fn parse_work(work: &str) -> Result<String, WorkError> {
    WorkNonce::from_hex(work).map(WorkNonce::to_hex)
}

/// Validate a difficulty string, returning its canonical lowercase form.
pub fn validate_difficulty(difficulty: &str) -> Result<String, WorkError> {
    Difficulty::from_hex(difficulty).map(Difficulty::to_hex)
}

/// Validate a difficulty string, returning its numeric value.
pub fn parse_difficulty(difficulty: &str) -> Result<u64, WorkError> {
    Difficulty::from_hex(difficulty).map(Difficulty::value)
}

/// Work value of `work` against `block_hash`.
pub fn get_work_value(block_hash: &str, work: &str) -> Result<u64, WorkError> {
    let block_hash = BlockHash::from_hex(block_hash)?;
    let nonce = WorkNonce::from_hex(work)?;
    Ok(work_value(&block_hash, nonce))
}

/// Work value as 16-character lowercase hex.
pub fn get_work_value_hex(block_hash: &str, work: &str) -> Result<String, WorkError> {
    get_work_value(block_hash, work).map(|value| nano_types::dec_to_hex(value, 8))
}

/// Whether `work` meets `difficulty` (default: [`DEFAULT_DIFFICULTY`]).
pub fn validate_work(
    block_hash: &str,
    work: &str,
    difficulty: Option<&str>,
) -> Result<bool, WorkError> {
    let value = get_work_value(block_hash, work)?;
    let difficulty = difficulty_or(difficulty, DEFAULT_DIFFICULTY)?;
    Ok(difficulty.is_met_by(value))
}

/// Multiplier of `difficulty` relative to `base_difficulty`
/// (default: [`DEFAULT_BASE_DIFFICULTY`]).
pub fn derive_work_multiplier(
    difficulty: &str,
    base_difficulty: Option<&str>,
) -> Result<f64, WorkError> {
    let difficulty = Difficulty::from_hex(difficulty)?;
    let base = difficulty_or(base_difficulty, DEFAULT_BASE_DIFFICULTY)?;
    Ok(difficulty.to_multiplier(base))
}

/// Difficulty that is `multiplier` times `base_difficulty`
/// (default: [`DEFAULT_BASE_DIFFICULTY`]), as canonical hex.
pub fn derive_work_difficulty(
    multiplier: f64,
    base_difficulty: Option<&str>,
) -> Result<String, WorkError> {
    let base = difficulty_or(base_difficulty, DEFAULT_BASE_DIFFICULTY)?;
    Difficulty::from_multiplier(multiplier, base).map(Difficulty::to_hex)
}

/// Search for work meeting `difficulty` (default: [`DEFAULT_DIFFICULTY`]).
///
/// `Ok(None)` means `timeout` elapsed without a solution; input errors are
/// reported before any search starts.
pub fn solve_work(
    block_hash: &str,
    difficulty: Option<&str>,
    timeout: Option<Duration>,
) -> Result<Option<String>, WorkError> {
    let block_hash = BlockHash::from_hex(block_hash)?;
    let difficulty = difficulty_or(difficulty, DEFAULT_DIFFICULTY)?;
    let nonce = WorkGenerator::new().generate(&block_hash, difficulty, timeout)?;
    Ok(nonce.map(WorkNonce::to_hex))
}
