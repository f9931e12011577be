//! The live track report set.
//!
//! Rebuilt wholesale by the track assigner every tick; conflict
//! resolution, engagement, grounding, and reallocation then patch it
//! with targeted insertions and removals. Every patch is appended to the
//! tick's mutation log in commit order.

use stigmergy_core::records::{Mutation, TrackReport};
use stigmergy_core::types::{PlatformId, TargetId};

#[derive(Debug, Clone, Default)]
pub struct ReportSet {
    reports: Vec<TrackReport>,
}

impl ReportSet {
    pub fn as_slice(&self) -> &[TrackReport] {
        &self.reports
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn contains(&self, report: &TrackReport) -> bool {
        self.reports.contains(report)
    }

    /// Platforms reporting `target`, in report order.
    pub fn reporters_of(&self, target: TargetId) -> Vec<PlatformId> {
        self.reports
            .iter()
            .filter(|r| r.target == target)
            .map(|r| r.platform)
            .collect()
    }

    /// Replace the whole set.
    pub fn rebuild(&mut self, reports: Vec<TrackReport>, log: &mut Vec<Mutation>) {
        log.push(Mutation::ReportsRebuilt {
            count: reports.len(),
        });
        self.reports = reports;
    }

    /// Append `report` unless already present. Returns true if it was added.
    pub fn insert(&mut self, report: TrackReport, log: &mut Vec<Mutation>) -> bool {
        if self.contains(&report) {
            return false;
        }
        self.reports.push(report);
        log.push(Mutation::ReportAdded { report });
        true
    }

    /// Guarantee `report` is recorded: confirms it if present, adds it otherwise.
    pub fn ensure(&mut self, report: TrackReport, log: &mut Vec<Mutation>) {
        if self.contains(&report) {
            log.push(Mutation::ReportConfirmed { report });
        } else {
            self.insert(report, log);
        }
    }

    /// Remove `report`. Returns true if it was present.
    pub fn remove(&mut self, report: &TrackReport, log: &mut Vec<Mutation>) -> bool {
        let before = self.reports.len();
        self.reports.retain(|r| r != report);
        let removed = self.reports.len() != before;
        if removed {
            log.push(Mutation::ReportRemoved { report: *report });
        }
        removed
    }

    /// Drop every report made by `platform`. Returns how many were dropped.
    pub fn drop_platform(&mut self, platform: PlatformId, log: &mut Vec<Mutation>) -> usize {
        self.drop_where(|r| r.platform == platform, log)
    }

    /// Drop every report on `target`. Returns how many were dropped.
    pub fn drop_target(&mut self, target: TargetId, log: &mut Vec<Mutation>) -> usize {
        self.drop_where(|r| r.target == target, log)
    }

    fn drop_where(
        &mut self,
        predicate: impl Fn(&TrackReport) -> bool,
        log: &mut Vec<Mutation>,
    ) -> usize {
        let mut dropped = 0;
        self.reports.retain(|report| {
            if predicate(report) {
                log.push(Mutation::ReportRemoved { report: *report });
                dropped += 1;
                false
            } else {
                true
            }
        });
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(platform: u32, target: u32) -> TrackReport {
        TrackReport::new(PlatformId(platform), TargetId(target))
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = ReportSet::default();
        let mut log = Vec::new();
        assert!(set.insert(report(1, 1), &mut log));
        assert!(!set.insert(report(1, 1), &mut log));
        assert_eq!(set.len(), 1);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_ensure_confirms_or_adds() {
        let mut set = ReportSet::default();
        let mut log = Vec::new();
        set.insert(report(1, 1), &mut log);
        set.ensure(report(1, 1), &mut log);
        set.ensure(report(2, 1), &mut log);
        assert_eq!(
            log,
            vec![
                Mutation::ReportAdded { report: report(1, 1) },
                Mutation::ReportConfirmed { report: report(1, 1) },
                Mutation::ReportAdded { report: report(2, 1) },
            ]
        );
        assert_eq!(set.reporters_of(TargetId(1)), vec![PlatformId(1), PlatformId(2)]);
    }

    #[test]
    fn test_drop_platform_logs_each_removal() {
        let mut set = ReportSet::default();
        let mut log = Vec::new();
        set.rebuild(vec![report(1, 1), report(2, 2), report(1, 3)], &mut log);
        log.clear();

        assert_eq!(set.drop_platform(PlatformId(1), &mut log), 2);
        assert_eq!(set.as_slice(), &[report(2, 2)]);
        assert_eq!(log.len(), 2);
        assert!(!set.remove(&report(1, 1), &mut log));
    }
}
