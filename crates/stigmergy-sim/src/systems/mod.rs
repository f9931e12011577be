//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only
//! phases). They do not own state; the engine threads the report set,
//! mutation log, and event sink through them in pipeline order.

pub mod assignment;
pub mod conflict;
pub mod engage;
pub mod grounding;
pub mod movement;
pub mod reallocation;
pub mod snapshot;
pub mod weapon_select;
