//! Nano base-32: a 5-bit-per-symbol encoding used for account ids.
//!
//! The input is read as one big-endian bit string and cut into 5-bit groups
//! from the left. A trailing partial group is padded with zero bits on the
//! right. Decoding emits `floor(len * 5 / 8)` bytes and drops the leftover
//! padding bits, so `nbase32_to_bytes(bytes_to_nbase32(b)) == b` for every
//! non-empty `b`.
//!
//! Alphabet: `13456789abcdefghijkmnopqrstuwxyz` (no `0`, `2`, `l`, `v`).

use crate::Base32Error;

/// Base32 alphabet. The order is part of the account id format.
pub const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup table: ASCII byte → 5-bit value (0xFF = invalid).
const DECODE: [u8; 128] = {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < 32 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Number of characters needed for `byte_len` bytes.
pub const fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(5)
}

/// Number of bytes recovered from `char_len` characters.
pub const fn decoded_len(char_len: usize) -> usize {
    char_len * 5 / 8
}

/// Encode bytes as a Nano base-32 string.
pub fn bytes_to_nbase32(bytes: &[u8]) -> Result<String, Base32Error> {
    if bytes.is_empty() {
        return Err(Base32Error::EmptyBytes);
    }

    let mut result = String::with_capacity(encoded_len(bytes.len()));
    let mut buffer: u16 = 0;
    let mut bits_in_buffer = 0;

    for &byte in bytes {
        buffer = (buffer << 8) | byte as u16;
        bits_in_buffer += 8;
        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let idx = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(ALPHABET[idx] as char);
        }
    }
    // Remaining bits, padded with zeros on the right.
    if bits_in_buffer > 0 {
        let idx = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(ALPHABET[idx] as char);
    }

    Ok(result)
}

/// Value of a single base-32 symbol, if it is in the alphabet.
pub fn symbol_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE[c as usize] {
        0xFF => None,
        v => Some(v),
    }
}

/// Decode a Nano base-32 string into bytes.
pub fn nbase32_to_bytes(s: &str) -> Result<Vec<u8>, Base32Error> {
    if s.is_empty() {
        return Err(Base32Error::EmptyString);
    }

    let mut result = Vec::with_capacity(decoded_len(s.len()));
    let mut buffer: u16 = 0;
    let mut bits_in_buffer = 0;

    for (position, character) in s.chars().enumerate() {
        let val = symbol_value(character)
            .ok_or(Base32Error::InvalidCharacter { character, position })?;
        buffer = (buffer << 5) | val as u16;
        bits_in_buffer += 5;
        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((buffer >> bits_in_buffer) as u8);
        }
    }

    Ok(result)
}
