//! Per-lane geometry and admission configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to the lane controller at construction.

use crate::{DkError, DkResult};

/// Gap, in display units, kept between a new item's entry point and the
/// trailing edge of the item ahead of it.  Stops an exact tie from counting
/// as "no collision".
pub const DEFAULT_SAFETY_GAP: f64 = 10.0;

/// Geometry of one lane.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LaneConfig {
    /// Width of the viewport the lane spans.  Items enter at `x = viewport_width`
    /// and leave once their right edge passes `x = 0`.
    pub viewport_width: f64,

    /// See [`DEFAULT_SAFETY_GAP`].
    pub safety_gap: f64,

    /// Vertical centre of the lane in viewport coordinates.
    pub position_y: f64,

    /// Height of the bounding box reported for items on this lane.
    pub track_height: f64,
}

impl Default for LaneConfig {
    /// - `viewport_width = 375`
    /// - `safety_gap = 10`
    /// - `position_y = 0`
    /// - `track_height = 20`
    fn default() -> Self {
        Self {
            viewport_width: 375.0,
            safety_gap:     DEFAULT_SAFETY_GAP,
            position_y:     0.0,
            track_height:   20.0,
        }
    }
}

impl LaneConfig {
    /// Config for a viewport of the given width, other fields defaulted.
    pub fn with_viewport(viewport_width: f64) -> Self {
        Self { viewport_width, ..Self::default() }
    }

    /// Check the invariants the lane relies on.
    ///
    /// # Errors
    ///
    /// `DkError::Config` if the viewport width, gap, or track height is
    /// negative or not finite.
    pub fn validate(&self) -> DkResult<()> {
        if !self.viewport_width.is_finite() || self.viewport_width < 0.0 {
            return Err(DkError::Config(format!(
                "viewport_width must be finite and non-negative, got {}",
                self.viewport_width
            )));
        }
        if !self.safety_gap.is_finite() || self.safety_gap < 0.0 {
            return Err(DkError::Config(format!(
                "safety_gap must be finite and non-negative, got {}",
                self.safety_gap
            )));
        }
        if !self.track_height.is_finite() || self.track_height < 0.0 {
            return Err(DkError::Config(format!(
                "track_height must be finite and non-negative, got {}",
                self.track_height
            )));
        }
        Ok(())
    }
}
