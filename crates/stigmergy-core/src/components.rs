//! ECS components for hecs entities.
//!
//! Components are plain data structs. Allocation logic lives in the
//! sim crate's systems, not here. `Position` (from `types`) is also
//! attached to every platform and target entity.

use serde::{Deserialize, Serialize};

use crate::enums::{PlatformStatus, TargetPhase};
use crate::types::{PlatformId, TargetId};

/// A friendly platform: sensor and weapon carrier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: PlatformId,
    /// Position in the feed's platform list. Defines roster order.
    pub roster_slot: u32,
    pub status: PlatformStatus,
}

/// Remaining fuel and per-tick consumption.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fuel {
    /// Pounds remaining. Never negative.
    pub pounds: f64,
    /// Pounds burned per tick while fuel depletion is enabled.
    pub burn_rate: f64,
}

/// One munition in a platform's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Load-order index within the owning bay; unique per platform.
    pub serial: u32,
    /// Maximum engagement distance.
    pub range: f64,
    pub kinematics: f64,
    pub expiring_factor: f64,
}

/// Ordered weapon inventory, owned exclusively by its platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponBay {
    pub weapons: Vec<Weapon>,
}

impl WeaponBay {
    /// Remove the weapon with `serial`. Returns it if it was still loaded.
    pub fn take(&mut self, serial: u32) -> Option<Weapon> {
        let idx = self.weapons.iter().position(|w| w.serial == serial)?;
        Some(self.weapons.remove(idx))
    }

    pub fn contains(&self, serial: u32) -> bool {
        self.weapons.iter().any(|w| w.serial == serial)
    }
}

/// A hostile target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    /// Position in the feed's target list. Defines roster order.
    pub roster_slot: u32,
    pub phase: TargetPhase,
}
