//! Core types and definitions for the stigmergy allocation simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, records, events, configuration, the entity feed, and
//! snapshots. It has no dependency on the ECS or any runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod feed;
pub mod records;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
