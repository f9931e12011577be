//! Allocation geometry: triangulation angles and Probability of Guide.
//!
//! Pure functions over positions and weapon parameters. No world access.

use stigmergy_core::components::Weapon;
use stigmergy_core::constants::*;
use stigmergy_core::types::{PlatformId, Position};

/// Angle (degrees) at `target` between the lines of sight from `a` and `b`.
///
/// Returns `None` when either line of sight has zero length, i.e. a
/// sensor sits on the target and the angle is undefined. The cosine is
/// clamped to [-1, 1] so rounding never pushes `acos` out of its domain.
pub fn angle_at_target(a: &Position, b: &Position, target: &Position) -> Option<f64> {
    let v1 = a.line_of_sight_to(target);
    let v2 = b.line_of_sight_to(target);
    let (len1_sq, len2_sq) = (v1.length_squared(), v2.length_squared());
    if len1_sq <= DEGENERATE_LOS_EPSILON_SQ || len2_sq <= DEGENERATE_LOS_EPSILON_SQ {
        return None;
    }
    let cos = (v1.dot(v2) / (len1_sq.sqrt() * len2_sq.sqrt())).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Triangulation quality of one unordered sensor pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    pub first: PlatformId,
    pub second: PlatformId,
    /// Angle at the target between both lines of sight (degrees).
    pub angle_deg: f64,
    /// A line of sight was zero-length; `angle_deg` was forced to 0.
    pub degenerate: bool,
}

impl PairScore {
    /// Distance from the ideal 90° crossing.
    pub fn deviation_deg(&self) -> f64 {
        (self.angle_deg - IDEAL_TRIANGULATION_DEG).abs()
    }
}

/// Score every unordered pair of `sensors`, in `(i, j)` enumeration order with `i < j`.
pub fn score_pairs(sensors: &[(PlatformId, Position)], target: &Position) -> Vec<PairScore> {
    let mut scores = Vec::with_capacity(sensors.len() * sensors.len().saturating_sub(1) / 2);
    for (i, (first, pos_a)) in sensors.iter().enumerate() {
        for (second, pos_b) in &sensors[i + 1..] {
            let angle = angle_at_target(pos_a, pos_b, target);
            scores.push(PairScore {
                first: *first,
                second: *second,
                angle_deg: angle.unwrap_or(0.0),
                degenerate: angle.is_none(),
            });
        }
    }
    scores
}

/// The pair closest to 90°. Ties go to the first pair enumerated.
pub fn best_pair(scores: &[PairScore]) -> Option<PairScore> {
    let mut best: Option<PairScore> = None;
    let mut best_deviation = f64::INFINITY;
    for score in scores {
        let deviation = score.deviation_deg();
        if deviation < best_deviation {
            best_deviation = deviation;
            best = Some(*score);
        }
    }
    best
}

/// Shorthand for `best_pair(&score_pairs(..))`.
pub fn select_best_pair(
    sensors: &[(PlatformId, Position)],
    target: &Position,
) -> Option<PairScore> {
    best_pair(&score_pairs(sensors, target))
}

/// Probability of Guide: a relative engagement score.
///
/// `0` beyond the weapon's range; otherwise inverse distance scaled by
/// kinematics, expiring factor, and the shooter's fuel fraction.
pub fn probability_of_guide(distance: f64, weapon: &Weapon, fuel: f64) -> f64 {
    if distance > weapon.range {
        return 0.0;
    }
    let distance = distance.max(PG_MIN_DISTANCE);
    (1.0 / distance) * weapon.kinematics * weapon.expiring_factor * (fuel / PG_FUEL_REFERENCE)
}
