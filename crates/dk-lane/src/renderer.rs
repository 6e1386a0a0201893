//! The rendering collaborator seam.
//!
//! The lane never draws anything.  It tells a [`MotionRenderer`] when to
//! start, freeze, or cancel an item's motion timeline, and expects the
//! renderer's owner to report completions back through
//! [`LaneController::on_motion_finished`][crate::LaneController::on_motion_finished].

use dk_core::{ItemId, MediaTime, Rect};

/// A linear horizontal animation of one item's frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timeline {
    pub from:     Rect,
    pub to:       Rect,
    pub begin:    MediaTime,
    /// Seconds.  Zero for an item that is already at `to`.
    pub duration: f64,
}

impl Timeline {
    #[inline]
    pub fn end(&self) -> MediaTime {
        self.begin + self.duration
    }

    /// Interpolated frame at `now`, holding at `to` once finished.
    pub fn frame_at(&self, now: MediaTime) -> Rect {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (now.since(self.begin) / self.duration).min(1.0);
        self.from.with_x(self.from.x + (self.to.x - self.from.x) * t)
    }
}

/// A renderer's report that an item's timeline stopped.
///
/// `natural` is `true` when the timeline ran to its end, `false` when it was
/// interrupted (frozen or cancelled).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotionFinished {
    pub item:    ItemId,
    pub natural: bool,
}

/// Presentation layer driven by a [`LaneController`][crate::LaneController].
///
/// Calls arrive synchronously on the lane's thread.  Implementations must not
/// call back into the controller from inside these methods; completions are
/// queued and delivered by the owner afterwards.
pub trait MotionRenderer {
    /// Begin animating `item` along `timeline`, replacing any timeline it
    /// already has.
    fn start_timeline(&mut self, item: ItemId, timeline: Timeline);

    /// Hold `item` at `frame` (its currently interpolated position) and stop
    /// its timeline from progressing.
    fn freeze_at(&mut self, item: ItemId, frame: Rect);

    /// Stop `item`'s timeline and remove it from display.
    fn cancel_timeline(&mut self, item: ItemId);
}

/// A [`MotionRenderer`] that draws nothing.  Completions must then be
/// synthesized by the caller from [`Timeline::end`].
pub struct NoopRenderer;

impl MotionRenderer for NoopRenderer {
    fn start_timeline(&mut self, _item: ItemId, _timeline: Timeline) {}
    fn freeze_at(&mut self, _item: ItemId, _frame: Rect) {}
    fn cancel_timeline(&mut self, _item: ItemId) {}
}

impl<R: MotionRenderer + ?Sized> MotionRenderer for &mut R {
    fn start_timeline(&mut self, item: ItemId, timeline: Timeline) {
        (**self).start_timeline(item, timeline);
    }

    fn freeze_at(&mut self, item: ItemId, frame: Rect) {
        (**self).freeze_at(item, frame);
    }

    fn cancel_timeline(&mut self, item: ItemId) {
        (**self).cancel_timeline(item);
    }
}
