//! Coarse progress cadence shared by both traversal modes.

use strata_core::ProgressSink;

/// Reports `i / total` roughly ten times over `total` visits.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProgressCadence {
    total: usize,
    every: usize,
}

impl ProgressCadence {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            every: (total / 10).max(1),
        }
    }

    /// Notify `sink` if visit `i` falls on the cadence.
    pub(crate) fn tick(&self, i: usize, sink: &mut dyn ProgressSink) {
        if i % self.every == 0 {
            sink.report(i as f32 / self.total as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fractions(total: usize) -> Vec<f32> {
        let mut seen = Vec::new();
        let mut sink = |f: f32| seen.push(f);
        let cadence = ProgressCadence::new(total);
        for i in 0..total {
            cadence.tick(i, &mut sink);
        }
        seen
    }

    #[test]
    fn hundred_visits_report_ten_times() {
        let seen = fractions(100);
        assert_eq!(seen.len(), 10);
        assert_eq!(seen[0], 0.0);
        assert_eq!(seen[9], 0.9);
    }

    #[test]
    fn small_totals_report_every_visit() {
        assert_eq!(fractions(4), vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn uneven_total_uses_floor_step() {
        // every = 2
        assert_eq!(fractions(25).len(), 13);
    }

    #[test]
    fn zero_total_never_reports() {
        assert!(fractions(0).is_empty());
    }
}
