//! Engagement bookkeeping: the chosen weapon and the running score.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use stigmergy_core::state::ScoreView;
use stigmergy_core::types::WeaponRef;

/// Outcome of weapon selection for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponChoice {
    pub weapon: WeaponRef,
    pub weapon_range: f64,
    /// Probability of Guide at selection time. Always positive.
    pub pg: f64,
}

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub targets_total: u32,
    pub targets_destroyed: u32,
    pub weapons_fired: u32,
    pub platforms_grounded: u32,
    /// Engagements refused because the chosen weapon was already gone.
    pub failed_engagements: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            targets_total: self.targets_total,
            targets_destroyed: self.targets_destroyed,
            weapons_fired: self.weapons_fired,
            platforms_grounded: self.platforms_grounded,
            failed_engagements: self.failed_engagements,
        }
    }
}
