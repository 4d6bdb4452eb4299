//! Blake2b digests at the output sizes Nano uses.
//!
//! - 8 bytes: proof-of-work value
//! - 5 bytes: account id checksum
//! - 32 bytes: block hashes

use blake2::digest::consts::{U32, U5, U8};
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;
type Blake2b64 = Blake2b<U8>;
type Blake2b40 = Blake2b<U5>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Compute a 64-bit Blake2b digest over the concatenation of `parts`.
///
/// This is a native 8-byte digest (the output length is part of the Blake2b
/// parameter block), not a truncated 256-bit hash.
pub fn blake2b_64(parts: &[&[u8]]) -> [u8; 8] {
    let mut hasher = Blake2b64::new();
    for part in parts {
        hasher.update(part);
    }
    let mut output = [0u8; 8];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Compute a 40-bit Blake2b digest, used for account id checksums.
pub fn blake2b_40(data: &[u8]) -> [u8; 5] {
    let mut hasher = Blake2b40::new();
    hasher.update(data);
    let mut output = [0u8; 5];
    output.copy_from_slice(&hasher.finalize());
    output
}
