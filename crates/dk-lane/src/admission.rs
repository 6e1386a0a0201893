//! Admission control: may a candidate be launched right now?
//!
//! # Pursuit model
//!
//! Only the most recently launched item can be overtaken by a new one; items
//! launched earlier are further ahead and already cleared by it.  With `prev`
//! that item and `v(·) = (viewport + width) / duration`:
//!
//! ```text
//! prev_right     = max(prev.right_edge(now), 0)
//! distance       = viewport - prev_right - safety_gap
//! catch_up       = distance / (v(candidate) - v(prev))
//! prev_remaining = min(prev_right / (viewport + prev.width) * prev.duration,
//!                      prev.duration)
//! ```
//!
//! The candidate is rejected if `distance < 0` (prev has barely entered) or if
//! it is faster and `catch_up < prev_remaining` (it would reach prev before
//! prev leaves).  A slower or equally fast candidate can never catch up.
//!
//! The candidate's left edge enters at the right boundary, so the gap it must
//! close runs from there to prev's trailing (right) edge.

use dk_core::{LaneConfig, MediaTime};

use crate::{Candidate, LaneState};

/// Outcome of [`evaluate`], with the numbers that decided it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Admission {
    /// Nothing on the lane to overtake.
    EmptyLane,

    /// The previous item's right edge is still within `safety_gap` of the
    /// entry edge.  `distance` is negative.
    TooClose { distance: f64 },

    /// The candidate is no faster than the previous item.
    NeverCatchesUp,

    /// Faster, but the previous item leaves first.
    ClearsInTime { catch_up: f64, prev_remaining: f64 },

    /// Faster, and would reach the previous item while it is still on screen.
    WouldOvertake { catch_up: f64, prev_remaining: f64 },
}

impl Admission {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            Admission::EmptyLane | Admission::NeverCatchesUp | Admission::ClearsInTime { .. }
        )
    }
}

/// Run the pursuit computation for `candidate` against the most recently
/// launched item on `lane` at time `now`.
///
/// # Panics
///
/// On a non-empty lane, panics if the candidate's duration or width is not
/// positive or the viewport width is negative.
pub fn evaluate(
    candidate: &Candidate,
    lane:      &LaneState,
    config:    &LaneConfig,
    now:       MediaTime,
) -> Admission {
    let Some(prev) = lane.last() else {
        return Admission::EmptyLane;
    };
    candidate.assert_valid();
    assert!(
        config.viewport_width >= 0.0,
        "viewport width must be non-negative, got {}",
        config.viewport_width
    );

    let viewport = config.viewport_width;

    // Right edge clamped at the left boundary: an item already off screen
    // counts as sitting at x = 0.
    let prev_right = prev.frame_at(now, config).max_x().max(0.0);

    let distance = viewport - prev_right - config.safety_gap;
    if distance < 0.0 {
        return Admission::TooClose { distance };
    }

    let prev_total = prev.total_travel(viewport);
    let prev_v     = prev.velocity(viewport);
    let cand_v     = candidate.velocity(viewport);

    let closing = cand_v - prev_v;
    if closing <= 0.0 {
        return Admission::NeverCatchesUp;
    }

    let catch_up       = distance / closing;
    let prev_remaining = (prev_right / prev_total * prev.duration).min(prev.duration);

    if catch_up < prev_remaining {
        Admission::WouldOvertake { catch_up, prev_remaining }
    } else {
        Admission::ClearsInTime { catch_up, prev_remaining }
    }
}

/// `true` if launching `candidate` onto `lane` at `now` cannot lead to it
/// overtaking the item ahead.  See [`evaluate`].
#[inline]
pub fn can_launch(
    candidate: &Candidate,
    lane:      &LaneState,
    config:    &LaneConfig,
    now:       MediaTime,
) -> bool {
    evaluate(candidate, lane, config, now).is_allowed()
}
