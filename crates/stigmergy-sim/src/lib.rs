//! Simulation engine for stigmergy.
//!
//! Owns the hecs ECS world, runs the allocation pipeline one tick at a
//! time, and produces WorldSnapshots for whoever is driving it.

pub mod engagement;
pub mod engine;
pub mod geometry;
pub mod reports;
pub mod roster;
pub mod scenario;
pub mod sink;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use stigmergy_core as core;
