//! Media time model.
//!
//! # Design
//!
//! Lane decisions are made against continuously elapsing time, not a
//! discrete simulation step: an item's position is reconstructed from the
//! wall-clock seconds elapsed since it started moving.  Time is therefore a
//! monotonic `f64` second count, `MediaTime`, measured from an arbitrary
//! origin (process start for [`SystemClock`], zero for [`ManualClock`]).
//!
//! Every lane operation takes `now: MediaTime` explicitly.  Where `now` comes
//! from is the caller's business; the [`MediaClock`] trait is the seam.

use std::fmt;
use std::time::Instant;

// ── MediaTime ─────────────────────────────────────────────────────────────────

/// A monotonic clock reading in seconds.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaTime(pub f64);

impl MediaTime {
    pub const ZERO: MediaTime = MediaTime(0.0);

    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }

    /// Seconds elapsed from `earlier` to `self`, floored at zero so a reading
    /// taken slightly before `earlier` never yields negative travel.
    #[inline]
    pub fn since(self, earlier: MediaTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

impl std::ops::Add<f64> for MediaTime {
    type Output = MediaTime;
    #[inline]
    fn add(self, rhs: f64) -> MediaTime {
        MediaTime(self.0 + rhs)
    }
}

impl std::ops::Sub for MediaTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: MediaTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for MediaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

// ── Clocks ────────────────────────────────────────────────────────────────────

/// Source of `now` for drivers that don't receive it from a render loop.
pub trait MediaClock {
    fn now(&self) -> MediaTime;
}

/// Monotonic clock backed by [`Instant`], zeroed at construction.
#[derive(Clone, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaClock for SystemClock {
    fn now(&self) -> MediaTime {
        MediaTime(self.origin.elapsed().as_secs_f64())
    }
}

/// Hand-advanced clock for deterministic simulation and tests.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    pub current: MediaTime,
}

impl ManualClock {
    pub fn new(start: MediaTime) -> Self {
        Self { current: start }
    }

    /// Advance by `secs` seconds.
    ///
    /// # Panics
    /// Panics if `secs` is negative.
    #[inline]
    pub fn advance(&mut self, secs: f64) {
        assert!(secs >= 0.0, "media time cannot run backwards (advance by {secs})");
        self.current = self.current + secs;
    }
}

impl MediaClock for ManualClock {
    fn now(&self) -> MediaTime {
        self.current
    }
}
