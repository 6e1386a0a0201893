//! Run configuration.

use dk_core::LaneConfig;

/// Top-level configuration for a [`LaneSim`][crate::LaneSim] run.
///
/// Typically loaded from a JSON file by the application crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Geometry of the simulated lane.
    pub lane: LaneConfig,

    /// Media seconds between steps.  Default: one 60 Hz frame.
    pub step_secs: f64,

    /// Stop after this much media time even if work remains.  `None` runs
    /// until the script, backlog, and lane are all empty.
    pub end_secs: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lane:      LaneConfig::default(),
            step_secs: 1.0 / 60.0,
            end_secs:  None,
        }
    }
}
