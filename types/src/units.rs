//! Nano denominations.
//!
//! Amounts are fixed-point integers counted in raw, the smallest unit, and
//! stored as `u128`. Every named denomination is a power of ten of raw, so
//! conversion between text and raw is exact decimal arithmetic with no
//! floating point anywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::TypesError;

/// A named denomination.
///
/// `Mxrb` is the unit wallets show as one NANO.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NanoUnit {
    /// 10^33 raw.
    Gxrb,
    /// 10^30 raw.
    Mxrb,
    /// 10^27 raw.
    Kxrb,
    /// 10^24 raw.
    Xrb,
    /// 10^21 raw.
    MilliXrb,
    /// 10^18 raw.
    MicroXrb,
    Raw,
}

impl NanoUnit {
    pub const ALL: [NanoUnit; 7] = [
        Self::Gxrb,
        Self::Mxrb,
        Self::Kxrb,
        Self::Xrb,
        Self::MilliXrb,
        Self::MicroXrb,
        Self::Raw,
    ];

    /// Decimal places between this unit and raw.
    pub const fn decimals(self) -> u32 {
        match self {
            Self::Gxrb => 33,
            Self::Mxrb => 30,
            Self::Kxrb => 27,
            Self::Xrb => 24,
            Self::MilliXrb => 21,
            Self::MicroXrb => 18,
            Self::Raw => 0,
        }
    }

    pub const fn raw_per_unit(self) -> u128 {
        10u128.pow(self.decimals())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gxrb => "Gxrb",
            Self::Mxrb => "Mxrb",
            Self::Kxrb => "kxrb",
            Self::Xrb => "xrb",
            Self::MilliXrb => "mxrb",
            Self::MicroXrb => "uxrb",
            Self::Raw => "raw",
        }
    }
}

/// Unit names are case-sensitive (`Mxrb` and `mxrb` differ by 10^9).
/// `NANO` and `nano` name `Mxrb`.
impl FromStr for NanoUnit {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Gxrb" | "GXRB" => Ok(Self::Gxrb),
            "Mxrb" | "MXRB" | "NANO" | "nano" => Ok(Self::Mxrb),
            "kxrb" | "kXRB" => Ok(Self::Kxrb),
            "xrb" | "XRB" => Ok(Self::Xrb),
            "mxrb" | "mXRB" => Ok(Self::MilliXrb),
            "uxrb" | "uXRB" => Ok(Self::MicroXrb),
            "raw" => Ok(Self::Raw),
            _ => Err(TypesError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for NanoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount in raw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RawAmount(pub u128);

impl RawAmount {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u128::MAX);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a non-negative decimal such as `"1"`, `"0.5"` or `".25"` given
    /// in `unit`.
    ///
    /// Fails with [`TypesError::InvalidAmount`] on malformed text or a value
    /// finer than one raw, and with [`TypesError::AmountOverflow`] when the
    /// result exceeds `u128::MAX` raw. Trailing fractional zeros are ignored.
    pub fn from_unit_str(text: &str, unit: NanoUnit) -> Result<Self, TypesError> {
        let invalid = || TypesError::InvalidAmount(text.to_string());
        let overflow = || TypesError::AmountOverflow(text.to_string());

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let decimals = unit.decimals() as usize;
        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > decimals {
            return Err(invalid());
        }

        // Digits only from here on, so a parse failure is an overflow.
        let whole_units = if whole.is_empty() {
            0
        } else {
            whole.parse::<u128>().map_err(|_| overflow())?
        };
        let fraction_raw = if fraction.is_empty() {
            0
        } else {
            format!("{fraction:0<decimals$}")
                .parse::<u128>()
                .map_err(|_| overflow())?
        };

        whole_units
            .checked_mul(unit.raw_per_unit())
            .and_then(|raw| raw.checked_add(fraction_raw))
            .map(Self)
            .ok_or_else(overflow)
    }

    /// Render in `unit` as a plain decimal without trailing zeros.
    pub fn to_unit_string(self, unit: NanoUnit) -> String {
        let per_unit = unit.raw_per_unit();
        let whole = self.0 / per_unit;
        let fraction = self.0 % per_unit;
        if fraction == 0 {
            return whole.to_string();
        }
        let digits = format!("{fraction:0>width$}", width = unit.decimals() as usize);
        format!("{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl Add for RawAmount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for RawAmount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}

/// Convert a decimal amount between denominations, exactly.
pub fn convert(amount: &str, source: NanoUnit, target: NanoUnit) -> Result<String, TypesError> {
    RawAmount::from_unit_str(amount, source).map(|raw| raw.to_unit_string(target))
}
