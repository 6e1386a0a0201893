//! Run-level observer hooks, on top of the lane's own notifications.

use dk_core::MediaTime;
use dk_lane::{LaneObserver, NoopObserver, RetiredLog};

/// Callbacks invoked by [`LaneSim`][crate::LaneSim] at step boundaries, in
/// addition to the [`LaneObserver`] launch/retire hooks.
///
/// All methods have default no-op implementations.
pub trait SimObserver: LaneObserver {
    /// Called after each step with the lane and backlog sizes at `now`.
    fn on_step_end(&mut self, _now: MediaTime, _in_flight: usize, _backlog: usize) {}

    /// Called once when [`LaneSim::run`][crate::LaneSim::run] returns.
    fn on_sim_end(&mut self, _now: MediaTime) {}
}

impl SimObserver for NoopObserver {}

impl SimObserver for RetiredLog {}
