//! Simulation constants and tuning parameters.

// --- Movement ---

/// Default half-width of the per-axis platform jitter cube.
pub const PLATFORM_JITTER: f64 = 20.0;

/// Default half-width of the per-axis target jitter cube.
pub const TARGET_JITTER: f64 = 25.0;

// --- Fuel ---

/// Default fuel burn per tick (pounds).
pub const FUEL_BURN_RATE: f64 = 2.0;

/// Fuel quantity that maps to a PG fuel factor of 1.0.
pub const PG_FUEL_REFERENCE: f64 = 100.0;

/// Distance floor for PG so a co-located shooter scores finite.
pub const PG_MIN_DISTANCE: f64 = 1e-6;

// --- Sensors ---

/// Line-of-sight separation giving the best two-sensor triangulation (degrees).
pub const IDEAL_TRIANGULATION_DEG: f64 = 90.0;

/// Reports per target tolerated before deconfliction kicks in.
pub const MAX_SENSORS_PER_TARGET: usize = 2;

/// Default number of round-robin sensors assigned to each target.
pub const DEFAULT_SENSORS_PER_TARGET: usize = 1;

/// Squared line-of-sight length below which geometry is treated as degenerate.
pub const DEGENERATE_LOS_EPSILON_SQ: f64 = 1e-18;

// --- Pacing ---

/// Default wall clock delay between ticks (milliseconds). Applied by the runner only.
pub const DEFAULT_PACING_MS: u64 = 1000;

// --- Scenario generation ---

/// Weapon ranges per platform for generated feeds, cycled by platform index.
pub const GENERATOR_LOADOUT: [[f64; 5]; 10] = [
    [100.0, 200.0, 300.0, 400.0, 500.0],
    [100.0, 200.0, 300.0, 100.0, 100.0],
    [200.0, 300.0, 500.0, 500.0, 100.0],
    [100.0, 100.0, 500.0, 500.0, 500.0],
    [200.0, 300.0, 200.0, 400.0, 100.0],
    [600.0, 600.0, 600.0, 600.0, 600.0],
    [400.0, 600.0, 100.0, 600.0, 200.0],
    [500.0, 500.0, 500.0, 500.0, 500.0],
    [300.0, 300.0, 400.0, 600.0, 500.0],
    [1000.0, 1000.0, 1000.0, 1000.0, 1000.0],
];

/// Fuel pinned on the last generated platform (pounds).
pub const GENERATOR_LAST_PLATFORM_FUEL: f64 = 30.0;
