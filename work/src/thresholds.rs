//! Block-kind-aware PoW thresholds.
//!
//! Different block kinds require different proof-of-work levels:
//! - Send/change blocks need the BASE threshold
//! - Receive/open blocks need 1/64 of the base work (cheap to accept funds)
//! - Epoch blocks use the legacy epoch 1 threshold

use nano_types::NetworkId;

use crate::{Difficulty, WorkError};

/// Simplified block kind for PoW threshold selection.
///
/// Call sites in the block layer map their block types to this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkBlockKind {
    /// Send or change.
    Base,
    /// Receive or open.
    ReceiveOrOpen,
    /// Epoch upgrade.
    Epoch,
}

const LIVE_EPOCH_1: Difficulty = Difficulty(0xffff_ffc0_0000_0000);
const LIVE_BASE: Difficulty = Difficulty(0xffff_fff8_0000_0000);
const LIVE_RECEIVE: Difficulty = Difficulty(0xffff_fe00_0000_0000);

const DEV_EPOCH_1: Difficulty = Difficulty(0xfe00_0000_0000_0000);
const DEV_BASE: Difficulty = Difficulty(0xffc0_0000_0000_0000);
const DEV_RECEIVE: Difficulty = Difficulty(0xf000_0000_0000_0000);

/// Receive/open blocks need this fraction of the base work.
const RECEIVE_MULTIPLIER: f64 = 1.0 / 64.0;
/// Epoch blocks need this fraction of the base work.
const EPOCH_MULTIPLIER: f64 = 1.0 / 8.0;

/// Per-block-kind PoW thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkThresholds {
    pub epoch: Difficulty,
    pub base: Difficulty,
    pub receive: Difficulty,
}

impl WorkThresholds {
    /// Thresholds published for a network.
    pub fn for_network(network: NetworkId) -> Self {
        match network {
            NetworkId::Live | NetworkId::Test => Self {
                epoch: LIVE_EPOCH_1,
                base: LIVE_BASE,
                receive: LIVE_RECEIVE,
            },
            NetworkId::Dev => Self {
                epoch: DEV_EPOCH_1,
                base: DEV_BASE,
                receive: DEV_RECEIVE,
            },
        }
    }

    /// Derive receive and epoch thresholds from a custom base (useful in tests
    /// or low-difficulty devnets).
    pub fn with_base(base: Difficulty) -> Result<Self, WorkError> {
        Ok(Self {
            epoch: Difficulty::from_multiplier(EPOCH_MULTIPLIER, base)?,
            base,
            receive: Difficulty::from_multiplier(RECEIVE_MULTIPLIER, base)?,
        })
    }

    /// Get the required work difficulty for a specific block kind.
    pub fn threshold_for(&self, kind: WorkBlockKind) -> Difficulty {
        match kind {
            WorkBlockKind::Base => self.base,
            WorkBlockKind::ReceiveOrOpen => self.receive,
            WorkBlockKind::Epoch => self.epoch,
        }
    }

    /// The lowest threshold any block kind accepts.
    pub fn entry(&self) -> Difficulty {
        self.base.min(self.receive).min(self.epoch)
    }
}

impl Default for WorkThresholds {
    fn default() -> Self {
        Self::for_network(NetworkId::Live)
    }
}
