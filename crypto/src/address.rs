//! Account id encoding for public keys.
//!
//! Format: prefix + base32(4 zero bits ‖ public_key, 52 chars)
//!                + base32(checksum, 8 chars)
//!
//! Checksum: Blake2b-40(public_key), byte order reversed.
//! Prefix: `nano_` when encoding; `nano_` and the legacy `xrb_` when decoding.

use nano_types::PublicKey;

use crate::base32::{bytes_to_nbase32, nbase32_to_bytes, symbol_value};
use crate::hash::blake2b_40;
use crate::{AddressError, Base32Error};

/// Prefix emitted for new account ids.
pub const NANO_PREFIX: &str = "nano_";
/// Legacy prefix, still accepted on input.
pub const XRB_PREFIX: &str = "xrb_";

/// Base32 characters for the padded public key (260 bits / 5).
const KEY_CHARS: usize = 52;
/// Base32 characters for the checksum (40 bits / 5).
const CHECKSUM_CHARS: usize = 8;
const BODY_CHARS: usize = KEY_CHARS + CHECKSUM_CHARS;

/// Three zero bytes ahead of the key put 280 bits on a 5-bit boundary; the
/// first four characters then carry only zeros and are dropped, leaving the
/// key left-padded by 4 bits.
const KEY_LEAD: [u8; 3] = [0u8; 3];
const KEY_LEAD_CHARS: &str = "1111";

fn checksum(public_key: &PublicKey) -> [u8; 5] {
    let mut digest = blake2b_40(public_key.as_bytes());
    digest.reverse();
    digest
}

/// Encode a public key as an account id with the given prefix.
pub fn encode_account_with_prefix(public_key: &PublicKey, prefix: &str) -> String {
    let mut padded = [0u8; 35];
    padded[..3].copy_from_slice(&KEY_LEAD);
    padded[3..].copy_from_slice(public_key.as_bytes());

    let mut account = String::with_capacity(prefix.len() + BODY_CHARS);
    account.push_str(prefix);
    // Both inputs are non-empty fixed-size arrays, so encoding cannot fail.
    if let Ok(key_chars) = bytes_to_nbase32(&padded) {
        account.push_str(&key_chars[KEY_LEAD_CHARS.len()..]);
    }
    if let Ok(checksum_chars) = bytes_to_nbase32(&checksum(public_key)) {
        account.push_str(&checksum_chars);
    }
    account
}

/// Encode a public key as a `nano_` account id.
pub fn encode_account(public_key: &PublicKey) -> String {
    encode_account_with_prefix(public_key, NANO_PREFIX)
}

/// Parse an account id back into its public key, verifying the checksum.
pub fn decode_account(account: &str) -> Result<PublicKey, AddressError> {
    let body = account
        .strip_prefix(NANO_PREFIX)
        .or_else(|| account.strip_prefix(XRB_PREFIX))
        .ok_or(AddressError::InvalidPrefix)?;
    let body_len = body.chars().count();
    if body_len != BODY_CHARS {
        return Err(AddressError::InvalidLength(body_len));
    }
    // Every symbol is checked up front, which also keeps the split below on
    // an ASCII boundary.
    if let Some((position, character)) = body
        .chars()
        .enumerate()
        .find(|&(_, c)| symbol_value(c).is_none())
    {
        return Err(Base32Error::InvalidCharacter { character, position }.into());
    }

    let (key_chars, checksum_chars) = body.split_at(KEY_CHARS);

    let padded = nbase32_to_bytes(&format!("{KEY_LEAD_CHARS}{key_chars}"))?;
    if padded[..3] != KEY_LEAD {
        return Err(AddressError::InvalidPadding);
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&padded[3..]);
    let public_key = PublicKey::new(key);

    let checksum_bytes = nbase32_to_bytes(checksum_chars)?;
    if checksum_bytes[..] != checksum(&public_key)[..] {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(public_key)
}

/// Whether an account id is well-formed and its checksum is correct.
pub fn validate_account(account: &str) -> bool {
    decode_account(account).is_ok()
}
