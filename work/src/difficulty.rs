//! Difficulty thresholds and their multiplier view.
//!
//! A difficulty is the minimum acceptable work value. Its distance from the
//! top of the 64-bit space, the *complement* `2^64 - difficulty`, is
//! proportional to the expected number of attempts needed to beat it. A
//! multiplier compares two complements:
//!
//! ```text
//! multiplier = (2^64 - base) / (2^64 - difficulty)
//! ```
//!
//! so a multiplier of 2 means twice the expected work of `base`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use nano_types::{dec_to_hex, is_hex_of_len};

use crate::WorkError;

/// `2^64`, one past the largest difficulty.
const TWO_POW_64: u128 = 1 << 64;
const TWO_POW_64_F64: f64 = 18_446_744_073_709_551_616.0;

/// A 64-bit work threshold. Larger is harder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(pub u64);

/// Live network send/change threshold, used when no difficulty is given.
pub const DEFAULT_DIFFICULTY: Difficulty = Difficulty(0xffff_fff8_0000_0000);

/// Reference difficulty that a multiplier of 1.0 maps to.
pub const DEFAULT_BASE_DIFFICULTY: Difficulty = Difficulty(0xffff_fff8_0000_0000);

impl Difficulty {
    pub const MAX: Self = Self(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Parse exactly 16 hex characters, case-insensitive.
    pub fn from_hex(s: &str) -> Result<Self, WorkError> {
        if !is_hex_of_len(s, 16) {
            return Err(WorkError::InvalidDifficulty(s.to_string()));
        }
        u64::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| WorkError::InvalidDifficulty(s.to_string()))
    }

    /// Canonical lowercase 16-character hex.
    pub fn to_hex(self) -> String {
        dec_to_hex(self.0, 8)
    }

    /// `2^64 - self`; never zero.
    pub fn complement(self) -> u128 {
        TWO_POW_64 - self.0 as u128
    }

    /// Whether a work value clears this threshold.
    pub fn is_met_by(self, work_value: u64) -> bool {
        work_value >= self.0
    }

    /// Express this difficulty relative to `base`.
    ///
    /// `u64::MAX` has complement 1 and yields the largest multiplier.
    pub fn to_multiplier(self, base: Difficulty) -> f64 {
        base.complement() as f64 / self.complement() as f64
    }

    /// Scale `base` by `multiplier`.
    ///
    /// Computed in double precision as `2^64 - (2^64 - base) / multiplier`.
    /// Fails with [`WorkError::InvalidMultiplier`] unless the multiplier is
    /// positive and finite, and with [`WorkError::DifficultyOutOfRange`] when
    /// the result does not fit in `[0, 2^64 - 1]`, including results that
    /// round up to `2^64`.
    pub fn from_multiplier(multiplier: f64, base: Difficulty) -> Result<Self, WorkError> {
        check_multiplier(multiplier)?;
        let scaled = base.complement() as f64 / multiplier;
        let difficulty = TWO_POW_64_F64 - scaled;
        if !(0.0..TWO_POW_64_F64).contains(&difficulty) {
            return Err(WorkError::DifficultyOutOfRange(difficulty));
        }
        Ok(Self(difficulty as u64))
    }
}

fn check_multiplier(multiplier: f64) -> Result<f64, WorkError> {
    if multiplier.is_finite() && multiplier > 0.0 {
        Ok(multiplier)
    } else {
        Err(WorkError::InvalidMultiplier(multiplier.to_string()))
    }
}

/// Parse a multiplier from text. Non-numeric, zero, negative, NaN and
/// infinite values are rejected.
pub fn parse_multiplier(s: &str) -> Result<f64, WorkError> {
    let multiplier: f64 = s
        .trim()
        .parse()
        .map_err(|_| WorkError::InvalidMultiplier(s.to_string()))?;
    check_multiplier(multiplier).map_err(|_| WorkError::InvalidMultiplier(s.to_string()))
}

impl FromStr for Difficulty {
    type Err = WorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH_1: Difficulty = Difficulty(0xffff_ffc0_0000_0000);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn parses_canonical_lowercase() {
        let d = Difficulty::from_hex("FFFFFFC000000000").unwrap();
        assert_eq!(d, EPOCH_1);
        assert_eq!(d.to_hex(), "ffffffc000000000");
        assert_eq!(d.value(), 18446743798831644672);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["GGFFFFFFFFFFFFFF", "AAAAAAAAAAAAAAAAA", "invalid", ""] {
            assert!(matches!(
                Difficulty::from_hex(bad),
                Err(WorkError::InvalidDifficulty(_))
            ));
        }
    }

    #[test]
    fn multiplier_vectors() {
        let d = Difficulty::from_hex("fffffe0000000000").unwrap();
        assert!(approx(d.to_multiplier(EPOCH_1), 0.125));
        let d = Difficulty::from_hex("ffffffe000000000").unwrap();
        assert!(approx(d.to_multiplier(EPOCH_1), 2.0));
    }

    #[test]
    fn base_has_unit_multiplier() {
        assert_eq!(
            DEFAULT_BASE_DIFFICULTY.to_multiplier(DEFAULT_BASE_DIFFICULTY),
            1.0
        );
    }

    #[test]
    fn max_difficulty_has_complement_one() {
        assert_eq!(Difficulty::MAX.complement(), 1);
        let m = Difficulty::MAX.to_multiplier(EPOCH_1);
        assert!(m.is_finite());
        assert_eq!(m, (1u64 << 38) as f64);
    }

    #[test]
    fn zero_difficulty_complement_is_two_pow_64() {
        assert_eq!(Difficulty(0).complement(), 1u128 << 64);
    }

    #[test]
    fn from_multiplier_vectors() {
        assert_eq!(
            Difficulty::from_multiplier(0.125, EPOCH_1).unwrap().to_hex(),
            "fffffe0000000000"
        );
        assert_eq!(
            Difficulty::from_multiplier(2.0, EPOCH_1).unwrap().to_hex(),
            "ffffffe000000000"
        );
        assert_eq!(
            Difficulty::from_multiplier(1.0, EPOCH_1).unwrap(),
            EPOCH_1
        );
    }

    #[test]
    fn from_multiplier_rejects_non_positive() {
        for m in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Difficulty::from_multiplier(m, EPOCH_1),
                Err(WorkError::InvalidMultiplier(_))
            ));
        }
    }

    #[test]
    fn from_multiplier_too_large_is_out_of_range() {
        // (2^64 - base) / 2^28 = 1024, and 2^64 - 1024 rounds to 2^64.
        assert!(matches!(
            Difficulty::from_multiplier(268_435_456.0, EPOCH_1),
            Err(WorkError::DifficultyOutOfRange(_))
        ));
    }

    #[test]
    fn from_multiplier_too_small_is_out_of_range() {
        // Pushes the complement beyond 2^64, i.e. a negative difficulty.
        assert!(matches!(
            Difficulty::from_multiplier(1e-12, EPOCH_1),
            Err(WorkError::DifficultyOutOfRange(_))
        ));
    }

    #[test]
    fn parse_multiplier_text() {
        assert_eq!(parse_multiplier("2").unwrap(), 2.0);
        assert_eq!(parse_multiplier(" 0.125 ").unwrap(), 0.125);
        for bad in ["invalid", "0", "-3", "NaN", "inf", ""] {
            assert!(matches!(
                parse_multiplier(bad),
                Err(WorkError::InvalidMultiplier(_))
            ));
        }
    }

    #[test]
    fn is_met_by_is_unsigned_inclusive() {
        let d = Difficulty(0x8000_0000_0000_0000);
        assert!(d.is_met_by(u64::MAX));
        assert!(d.is_met_by(0x8000_0000_0000_0000));
        assert!(!d.is_met_by(0x7fff_ffff_ffff_ffff));
        assert!(Difficulty(0).is_met_by(0));
    }

    #[test]
    fn display_and_serde_use_hex() {
        assert_eq!(Difficulty(1028).to_string(), "0000000000000404");
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            difficulty: Difficulty,
        }
        let text = toml::to_string(&Wrapper { difficulty: EPOCH_1 }).unwrap();
        assert_eq!(text.trim(), "difficulty = \"ffffffc000000000\"");
        let back: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(back.difficulty, EPOCH_1);
    }
}
