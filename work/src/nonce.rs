//! The 64-bit work nonce.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use nano_types::{dec_to_hex, is_hex_of_len};

use crate::WorkError;

/// A proof-of-work nonce.
///
/// Text form is the 16-character big-endian hex rendering of the integer.
/// Hashing uses the little-endian wire bytes, see [`WorkNonce::to_wire_bytes`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkNonce(pub u64);

impl WorkNonce {
    /// Parse exactly 16 hex characters, case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self, WorkError> {
        if !is_hex_of_len(s, 16) {
            return Err(WorkError::InvalidWork(s.to_string()));
        }
        u64::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| WorkError::InvalidWork(s.to_string()))
    }

    /// Canonical lowercase 16-character hex.
    pub fn to_hex(self) -> String {
        dec_to_hex(self.0, 8)
    }

    /// The bytes fed to the hash, in on-wire (little-endian) order.
    pub fn to_wire_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl FromStr for WorkNonce {
    type Err = WorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for WorkNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl Serialize for WorkNonce {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkNonce {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uppercase_to_canonical() {
        let nonce = WorkNonce::from_hex(&"A".repeat(16)).unwrap();
        assert_eq!(nonce.to_hex(), "a".repeat(16));
        assert_eq!(nonce.to_string(), "a".repeat(16));
    }

    #[test]
    fn rejects_short_and_non_hex() {
        assert!(matches!(
            WorkNonce::from_hex(&"A".repeat(15)),
            Err(WorkError::InvalidWork(_))
        ));
        assert!(matches!(
            WorkNonce::from_hex(&"x".repeat(16)),
            Err(WorkError::InvalidWork(_))
        ));
        assert!(WorkNonce::from_hex("+00000000000000f").is_err());
    }

    #[test]
    fn wire_bytes_are_little_endian() {
        let nonce = WorkNonce::from_hex("0102030405060708").unwrap();
        assert_eq!(nonce.0, 0x0102030405060708);
        assert_eq!(nonce.to_wire_bytes(), [8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn display_zero_pads() {
        assert_eq!(WorkNonce(0x404).to_string(), "0000000000000404");
    }
}
