//! Hashing and text encodings for Nano.
//!
//! - **Blake2b** at 8, 5 and 32 byte digest sizes (work values, checksums, block hashes)
//! - **Nano base-32**, the 5-bit alphabet behind account ids
//! - Account id encoding with `nano_` / `xrb_` prefixes

pub mod address;
pub mod base32;
pub mod error;
pub mod hash;

pub use address::{decode_account, encode_account, encode_account_with_prefix, validate_account};
pub use base32::{bytes_to_nbase32, nbase32_to_bytes};
pub use error::{AddressError, Base32Error};
pub use hash::{blake2b_256, blake2b_40, blake2b_64};
