//! Work value computation.
//!
//! The work value of a (nonce, block hash) pair is the 8-byte Blake2b digest
//! of `nonce_le_bytes ‖ block_hash`, read as a little-endian `u64`.
//! [`WorkHasher`] is the seam for swapping in an accelerated backend; every
//! implementation must agree with [`Blake2bWorkHasher`] bit for bit.

use nano_crypto::blake2b_64;
use nano_types::BlockHash;

use crate::WorkNonce;

/// Computes work values. Shared by all search lanes, hence `Sync`.
pub trait WorkHasher: Send + Sync {
    fn work_value(&self, block_hash: &BlockHash, nonce: WorkNonce) -> u64;
}

/// Portable reference backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake2bWorkHasher;

impl WorkHasher for Blake2bWorkHasher {
    fn work_value(&self, block_hash: &BlockHash, nonce: WorkNonce) -> u64 {
        let nonce_bytes = nonce.to_wire_bytes();
        let digest = blake2b_64(&[&nonce_bytes[..], &block_hash.as_bytes()[..]]);
        u64::from_le_bytes(digest)
    }
}
