//! Candidates and in-flight items.

use dk_core::{DkError, DkResult, ItemId, LaneConfig, MediaTime, Rect};

// ── Candidate ─────────────────────────────────────────────────────────────────

/// A prospective item that has not been admitted to the lane.
///
/// Has no identity and no timestamp; it only exists for the admission check
/// until [`LaneController::launch`][crate::LaneController::launch] turns it
/// into an [`InFlightItem`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Seconds to cross from fully off-right to fully off-left.
    pub duration: f64,

    /// Rendered width in viewport units.
    pub width: f64,
}

impl Candidate {
    /// Validating constructor for values that arrive from outside the
    /// program (scripts, user input).
    ///
    /// # Errors
    ///
    /// `DkError::InvalidCandidate` unless both `duration` and `width` are
    /// finite and strictly positive.
    pub fn new(duration: f64, width: f64) -> DkResult<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(DkError::InvalidCandidate(format!(
                "duration must be positive, got {duration}"
            )));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(DkError::InvalidCandidate(format!(
                "width must be positive, got {width}"
            )));
        }
        Ok(Self { duration, width })
    }

    /// Leftward speed this candidate would travel at on a viewport of the
    /// given width.
    #[inline]
    pub fn velocity(&self, viewport_width: f64) -> f64 {
        (viewport_width + self.width) / self.duration
    }

    /// Fail fast on a precondition violation.  Positive durations and widths
    /// are the caller's responsibility.
    #[inline]
    pub(crate) fn assert_valid(&self) {
        assert!(
            self.duration > 0.0 && self.width > 0.0,
            "candidate needs positive duration and width, got {self:?}"
        );
    }
}

// ── ItemPhase ─────────────────────────────────────────────────────────────────

/// Lifecycle of an in-flight item.
///
/// ```text
/// Launched → Playing → (Paused ⇄ Playing) → Retired
/// ```
///
/// `Retired` is terminal.  A retired item has already been removed from the
/// lane; the phase is only observable on the copy handed to
/// [`LaneObserver::on_item_retired`][crate::LaneObserver::on_item_retired].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemPhase {
    Launched,
    Playing,
    Paused,
    Retired,
}

// ── Motion ────────────────────────────────────────────────────────────────────

/// Where the item's left edge is, as a function of time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Travelling left at the item's velocity from `origin_x`, starting at
    /// `since`.
    Moving { origin_x: f64, since: MediaTime },

    /// Held in place at `x`.
    Frozen { x: f64 },
}

// ── InFlightItem ──────────────────────────────────────────────────────────────

/// An admitted item currently on the lane.
///
/// `duration` and `width` are fixed at launch.  The on-screen frame is never
/// stored: it is derived from [`Motion`] on demand.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InFlightItem {
    pub id: ItemId,

    /// Total seconds to cross from fully off-right to fully off-left.
    pub duration: f64,

    /// Rendered width in viewport units.
    pub width: f64,

    /// Clock reading at launch.
    pub launched_at: MediaTime,

    pub phase: ItemPhase,

    pub motion: Motion,
}

impl InFlightItem {
    /// Build an item fully off the right edge of a viewport of width
    /// `viewport_width`, moving from `now`.
    pub fn launch(id: ItemId, candidate: Candidate, now: MediaTime, viewport_width: f64) -> Self {
        Self {
            id,
            duration:    candidate.duration,
            width:       candidate.width,
            launched_at: now,
            phase:       ItemPhase::Launched,
            motion:      Motion::Moving { origin_x: viewport_width, since: now },
        }
    }

    /// Distance from fully off-right to fully off-left.
    #[inline]
    pub fn total_travel(&self, viewport_width: f64) -> f64 {
        viewport_width + self.width
    }

    #[inline]
    pub fn velocity(&self, viewport_width: f64) -> f64 {
        self.total_travel(viewport_width) / self.duration
    }

    /// Left edge at `now`.  Never moves past the terminal off-left position.
    pub fn x_at(&self, now: MediaTime, viewport_width: f64) -> f64 {
        match self.motion {
            Motion::Frozen { x } => x,
            Motion::Moving { origin_x, since } => {
                let travelled = self.velocity(viewport_width) * now.since(since);
                (origin_x - travelled).max(-self.width)
            }
        }
    }

    /// Bounding box at `now` on a lane configured by `config`.
    pub fn frame_at(&self, now: MediaTime, config: &LaneConfig) -> Rect {
        let x = self.x_at(now, config.viewport_width);
        Rect::new(
            x,
            config.position_y - config.track_height * 0.5,
            self.width,
            config.track_height,
        )
    }

    /// Fraction of the full crossing still ahead of the item at `now`, in
    /// `[0.0, 1.0]`.  Exactly `1.0` at launch.
    pub fn remaining_fraction(&self, now: MediaTime, viewport_width: f64) -> f64 {
        let right = self.x_at(now, viewport_width) + self.width;
        (right / self.total_travel(viewport_width)).clamp(0.0, 1.0)
    }

    /// `true` once the right edge has reached the left viewport boundary.
    #[inline]
    pub fn is_off_screen(&self, now: MediaTime, viewport_width: f64) -> bool {
        self.x_at(now, viewport_width) + self.width <= 0.0
    }
}
