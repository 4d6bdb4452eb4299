//! Fundamental value types for the Nano work and account core.
//!
//! Everything here is an immutable value parsed from, and rendered back to,
//! its canonical textual form: block hashes, public keys, network ids and
//! raw amounts in their named denominations.

pub mod block;
pub mod error;
pub mod hex;
pub mod keys;
pub mod network;
pub mod units;

pub use block::BlockHash;
pub use error::TypesError;
pub use crate::hex::{dec_to_hex, is_hex, is_hex_of_len};
pub use keys::PublicKey;
pub use network::NetworkId;
pub use units::{convert, NanoUnit, RawAmount};
