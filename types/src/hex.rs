//! Hex helpers for the canonical textual forms (hashes, work, difficulty).

/// Whether `s` is a non-empty string of ASCII hex digits (either case).
///
/// A `0x` prefix is not accepted.
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Whether `s` is exactly `len` hex characters.
pub fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && is_hex(s)
}

/// Render `value` as zero-padded lowercase hex occupying `byte_len` bytes.
pub fn dec_to_hex(value: u64, byte_len: usize) -> String {
    format!("{:0width$x}", value, width = byte_len * 2)
}
