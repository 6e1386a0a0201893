//! Seeded synthetic scripts.

use dk_core::{LaneRng, MediaTime};
use dk_lane::Candidate;

use crate::ScriptEntry;

/// Parameters for a random item stream.
///
/// Inter-arrival gaps are uniform in `[0, 2 * mean_gap_secs)`, durations and
/// widths uniform in their ranges.  The same seed always yields the same
/// script.
#[derive(Clone, Debug)]
pub struct RandomScript {
    pub count:         usize,
    pub mean_gap_secs: f64,
    pub duration_secs: (f64, f64),
    pub width:         (f64, f64),
}

impl Default for RandomScript {
    fn default() -> Self {
        Self {
            count:         50,
            mean_gap_secs: 0.5,
            duration_secs: (4.0, 10.0),
            width:         (40.0, 240.0),
        }
    }
}

impl RandomScript {
    /// Generate `count` entries starting at time zero.
    ///
    /// # Panics
    ///
    /// Panics if a range is empty or its lower bound is not positive.
    pub fn generate(&self, rng: &mut LaneRng) -> Vec<ScriptEntry> {
        assert!(self.duration_secs.0 > 0.0 && self.duration_secs.0 < self.duration_secs.1);
        assert!(self.width.0 > 0.0 && self.width.0 < self.width.1);

        let mut at = MediaTime::ZERO;
        (0..self.count)
            .map(|i| {
                if i > 0 && self.mean_gap_secs > 0.0 {
                    at = at + rng.gen_range(0.0..2.0 * self.mean_gap_secs);
                }
                let candidate = Candidate {
                    duration: rng.gen_range(self.duration_secs.0..self.duration_secs.1),
                    width:    rng.gen_range(self.width.0..self.width.1),
                };
                ScriptEntry::new(at, candidate, format!("item-{i}"))
            })
            .collect()
    }
}
