//! `EventSink` adapter that forwards narration into `tracing`.

use stigmergy_core::events::{EventKind, EventSink, SimEvent};

/// Renders every event as a `tracing` record under `stigmergy::events`.
///
/// PG calculations are chatty and go to `debug`. Degenerate geometry and
/// refused engagements go to `warn`, everything else to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: SimEvent) {
        let tick = event.tick;
        let phase = event.phase.as_str();
        match &event.kind {
            EventKind::PgComputed { .. } => {
                tracing::debug!(target: "stigmergy::events", tick, phase, "{}", event.kind);
            }
            EventKind::DegenerateGeometry { .. } | EventKind::WeaponAlreadyConsumed { .. } => {
                tracing::warn!(target: "stigmergy::events", tick, phase, "{}", event.kind);
            }
            _ => {
                tracing::info!(target: "stigmergy::events", tick, phase, "{}", event.kind);
            }
        }
    }
}
