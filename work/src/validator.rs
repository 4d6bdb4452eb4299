//! PoW validation.

use nano_types::BlockHash;

use crate::hasher::{Blake2bWorkHasher, WorkHasher};
use crate::{Difficulty, WorkNonce};

/// Work value of `nonce` against `block_hash` using the reference backend.
pub fn work_value(block_hash: &BlockHash, nonce: WorkNonce) -> u64 {
    Blake2bWorkHasher.work_value(block_hash, nonce)
}

/// Whether `nonce` meets `difficulty` for `block_hash`.
pub fn meets_difficulty(block_hash: &BlockHash, nonce: WorkNonce, difficulty: Difficulty) -> bool {
    difficulty.is_met_by(work_value(block_hash, nonce))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_pair() -> (BlockHash, WorkNonce) {
        let hash = BlockHash::from_hex(
            "B585D9363B8265CFD5993F30A3D6DE6B5CA5CC7879E0AFA94D13F08B713B9FFD",
        )
        .unwrap();
        (hash, WorkNonce::from_hex("5b064dcc70b9db0a").unwrap())
    }

    #[test]
    fn live_work_meets_live_thresholds() {
        let (hash, nonce) = valid_pair();
        assert_eq!(work_value(&hash, nonce), 0xfffffffeb1249486);
        assert!(meets_difficulty(&hash, nonce, crate::DEFAULT_DIFFICULTY));
        assert!(meets_difficulty(&hash, nonce, Difficulty(0xffffffc000000000)));
    }

    #[test]
    fn threshold_is_inclusive() {
        let (hash, nonce) = valid_pair();
        let value = work_value(&hash, nonce);
        assert!(meets_difficulty(&hash, nonce, Difficulty(value)));
        assert!(meets_difficulty(&hash, nonce, Difficulty(value - 1)));
        assert!(!meets_difficulty(&hash, nonce, Difficulty(value + 1)));
    }

    #[test]
    fn wrong_nonce_fails_live_threshold() {
        let (hash, _) = valid_pair();
        let nonce = WorkNonce::from_hex(&"e".repeat(16)).unwrap();
        assert_eq!(work_value(&hash, nonce), 0xbba4b4e18e544e70);
        assert!(!meets_difficulty(&hash, nonce, crate::DEFAULT_DIFFICULTY));
    }

    #[test]
    fn zero_difficulty_always_met() {
        let hash = BlockHash::new([0u8; 32]);
        assert!(meets_difficulty(&hash, WorkNonce(0), Difficulty(0)));
    }
}
