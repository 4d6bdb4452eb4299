//! Network identifier.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::TypesError;

/// Identifies which Nano network work is produced for.
///
/// Networks differ in their minimum work thresholds; see
/// `nano_work::WorkThresholds::for_network`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// The production network.
    #[default]
    Live,
    /// The public test network.
    Test,
    /// Local development network.
    Dev,
}

impl NetworkId {
    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Test => "test",
            Self::Dev => "dev",
        }
    }
}

impl FromStr for NetworkId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "test" => Ok(Self::Test),
            "dev" => Ok(Self::Dev),
            _ => Err(TypesError::UnknownNetwork(s.to_string())),
        }
    }
}
