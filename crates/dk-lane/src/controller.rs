//! Lane lifecycle controller: launches, pauses, resumes, stops, and retires
//! items on one lane.

use dk_core::{DkResult, ItemId, LaneConfig, MediaTime, Rect};
use tracing::{debug, trace};

use crate::{
    Admission, Candidate, InFlightItem, ItemPhase, LaneObserver, LaneState, Motion,
    MotionFinished, MotionRenderer, Timeline, admission,
};

/// Owns a lane's [`LaneState`] and drives its items through a renderer.
///
/// # Type parameter
///
/// `R` is the presentation layer (see [`MotionRenderer`]).  Use
/// [`NoopRenderer`][crate::NoopRenderer] when nothing is drawn.
///
/// # Usage
///
/// ```rust,ignore
/// let mut lane = LaneController::new(LaneConfig::with_viewport(300.0), NoopRenderer)?;
/// if lane.can_launch(&candidate, now) {
///     let id = lane.launch(candidate, now);
/// }
/// // later, when the renderer reports the timeline finished:
/// lane.on_motion_finished(id, true, now, &mut observer);
/// ```
pub struct LaneController<R: MotionRenderer> {
    /// The presentation layer.
    pub renderer: R,

    config:  LaneConfig,
    lane:    LaneState,
    next_id: ItemId,
}

impl<R: MotionRenderer> LaneController<R> {
    /// Create an empty lane.
    ///
    /// # Errors
    ///
    /// Returns `DkError::Config` if `config` fails [`LaneConfig::validate`].
    pub fn new(config: LaneConfig, renderer: R) -> DkResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            lane:    LaneState::new(),
            next_id: ItemId(0),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &LaneConfig {
        &self.config
    }

    /// Read-only view of the items in flight, oldest first.
    #[inline]
    pub fn lane(&self) -> &LaneState {
        &self.lane
    }

    /// Move the lane vertically.  Affects frames computed from now on;
    /// running timelines keep the `y` they were started with.
    pub fn set_position_y(&mut self, position_y: f64) {
        self.config.position_y = position_y;
    }

    /// Current interpolated frame of `id`, or `None` if it is not on the lane.
    pub fn current_frame(&self, id: ItemId, now: MediaTime) -> Option<Rect> {
        self.lane.get(id).map(|item| item.frame_at(now, &self.config))
    }

    // ── Admission ─────────────────────────────────────────────────────────

    /// Detailed admission decision for `candidate` at `now`.
    pub fn evaluate(&self, candidate: &Candidate, now: MediaTime) -> Admission {
        let decision = admission::evaluate(candidate, &self.lane, &self.config, now);
        if decision.is_allowed() {
            trace!(
                duration = candidate.duration,
                width = candidate.width,
                in_flight = self.lane.len(),
                ?decision,
                "admission evaluated"
            );
        } else {
            debug!(
                duration = candidate.duration,
                width = candidate.width,
                at = %now,
                ?decision,
                "candidate held back"
            );
        }
        decision
    }

    /// `true` if `candidate` may be launched at `now`.
    #[inline]
    pub fn can_launch(&self, candidate: &Candidate, now: MediaTime) -> bool {
        self.evaluate(candidate, now).is_allowed()
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Put `candidate` on the lane at `now` and start it moving.
    ///
    /// Does not re-check admission: the caller is expected to have seen
    /// [`can_launch`][Self::can_launch] return `true` for this candidate.
    ///
    /// # Panics
    ///
    /// Panics if the candidate's duration or width is not positive.
    pub fn launch(&mut self, candidate: Candidate, now: MediaTime) -> ItemId {
        candidate.assert_valid();

        let id = self.next_id;
        self.next_id = id.next();

        let mut item = InFlightItem::launch(id, candidate, now, self.config.viewport_width);
        start_motion(&mut self.renderer, &self.config, &mut item, now);
        debug!(
            item = %id,
            duration = item.duration,
            width = item.width,
            at = %now,
            "item launched"
        );
        self.lane.push(item);
        id
    }

    /// Freeze every moving item where it is.  Items stay on the lane.
    pub fn pause_all(&mut self, now: MediaTime) {
        let mut paused = 0usize;
        for item in self.lane.iter_mut() {
            if item.phase == ItemPhase::Paused {
                continue;
            }
            let frame = item.frame_at(now, &self.config);
            item.motion = Motion::Frozen { x: frame.x };
            item.phase  = ItemPhase::Paused;
            self.renderer.freeze_at(item.id, frame);
            paused += 1;
        }
        debug!(paused, at = %now, "lane paused");
    }

    /// Restart every item from its current position toward the same off-left
    /// terminal position, at its original velocity.
    pub fn resume_all(&mut self, now: MediaTime) {
        // Split borrow: renderer and config alongside the lane's items.
        let renderer = &mut self.renderer;
        let config   = &self.config;
        for item in self.lane.iter_mut() {
            start_motion(renderer, config, item, now);
        }
        debug!(resumed = self.lane.len(), at = %now, "lane resumed");
    }

    /// Alias for [`resume_all`][Self::resume_all].
    #[inline]
    pub fn play(&mut self, now: MediaTime) {
        self.resume_all(now);
    }

    /// Cancel every timeline and empty the lane.  No retirement notifications
    /// are sent, and later completions for these items are ignored.
    pub fn stop_all(&mut self) {
        for item in self.lane.iter() {
            self.renderer.cancel_timeline(item.id);
        }
        debug!(dropped = self.lane.len(), "lane stopped");
        self.lane.clear();
    }

    /// Handle a renderer's report that `id`'s timeline stopped.
    ///
    /// The item retires if the timeline ran to completion (`natural`) or if
    /// it has already left the viewport anyway.  Retiring removes it from the
    /// lane and calls `observer.on_item_retired` once.  Returns whether the
    /// item retired.  Unknown ids are ignored.
    pub fn on_motion_finished<O: LaneObserver>(
        &mut self,
        id:       ItemId,
        natural:  bool,
        now:      MediaTime,
        observer: &mut O,
    ) -> bool {
        let Some(item) = self.lane.get(id) else {
            trace!(item = %id, natural, "completion for item not on lane ignored");
            return false;
        };
        if !natural && !item.is_off_screen(now, self.config.viewport_width) {
            return false;
        }

        let Some(mut item) = self.lane.remove(id) else {
            return false;
        };
        item.phase = ItemPhase::Retired;
        debug!(item = %id, natural, at = %now, "item retired");
        observer.on_item_retired(&item);
        true
    }

    /// [`on_motion_finished`][Self::on_motion_finished] for a queued message.
    #[inline]
    pub fn deliver<O: LaneObserver>(
        &mut self,
        message:  MotionFinished,
        now:      MediaTime,
        observer: &mut O,
    ) -> bool {
        self.on_motion_finished(message.item, message.natural, now, observer)
    }
}

/// Start (or restart) `item`'s timeline from where it is at `now` to fully
/// off-left.  The timeline's length is the item's duration scaled by the
/// fraction of the crossing still ahead, which keeps velocity constant.
fn start_motion<R: MotionRenderer>(
    renderer: &mut R,
    config:   &LaneConfig,
    item:     &mut InFlightItem,
    now:      MediaTime,
) {
    let from     = item.frame_at(now, config);
    let to       = from.with_x(-item.width);
    let duration = item.duration * item.remaining_fraction(now, config.viewport_width);

    item.motion = Motion::Moving { origin_x: from.x, since: now };
    item.phase  = ItemPhase::Playing;
    renderer.start_timeline(item.id, Timeline { from, to, begin: now, duration });
}
