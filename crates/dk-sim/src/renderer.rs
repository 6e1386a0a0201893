//! A renderer that animates nothing but keeps perfect time.

use std::collections::BTreeMap;

use dk_core::{ItemId, MediaTime, Rect};
use dk_lane::{MotionFinished, MotionRenderer, Timeline};

/// Tracks each item's timeline and reports completions when polled.
///
/// Interruptions (freeze, cancel) are reported as `natural: false`, the way
/// an animation system reports an animation removed before its end.
/// Completions are queued and handed out by [`advance`][Self::advance]; the
/// renderer never calls back into the lane.
#[derive(Default, Debug)]
pub struct SimRenderer {
    running: BTreeMap<ItemId, Timeline>,
    frozen:  BTreeMap<ItemId, Rect>,
    outbox:  Vec<MotionFinished>,
}

impl SimRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every completion up to `now`: queued interruptions first,
    /// then timelines whose end has passed, in end-time order.
    pub fn advance(&mut self, now: MediaTime) -> Vec<MotionFinished> {
        let mut finished = std::mem::take(&mut self.outbox);

        let mut ended: Vec<(ItemId, MediaTime)> = self.running
            .iter()
            .filter(|(_, tl)| tl.end() <= now)
            .map(|(&id, tl)| (id, tl.end()))
            .collect();
        ended.sort_by(|a, b| a.1.as_secs().total_cmp(&b.1.as_secs()).then(a.0.cmp(&b.0)));

        for (id, _) in ended {
            self.running.remove(&id);
            finished.push(MotionFinished { item: id, natural: true });
        }
        finished
    }

    /// What is on screen for `id` at `now`.
    pub fn frame_of(&self, id: ItemId, now: MediaTime) -> Option<Rect> {
        self.running
            .get(&id)
            .map(|tl| tl.frame_at(now))
            .or_else(|| self.frozen.get(&id).copied())
    }

    /// Drop `id` from display without reporting anything.
    pub fn forget(&mut self, id: ItemId) {
        self.running.remove(&id);
        self.frozen.remove(&id);
    }

    /// Number of items still displayed, running or frozen.
    pub fn displayed(&self) -> usize {
        self.running.len() + self.frozen.len()
    }
}

impl MotionRenderer for SimRenderer {
    fn start_timeline(&mut self, item: ItemId, timeline: Timeline) {
        self.frozen.remove(&item);
        self.running.insert(item, timeline);
    }

    fn freeze_at(&mut self, item: ItemId, frame: Rect) {
        if self.running.remove(&item).is_some() {
            self.outbox.push(MotionFinished { item, natural: false });
        }
        self.frozen.insert(item, frame);
    }

    fn cancel_timeline(&mut self, item: ItemId) {
        if self.running.remove(&item).is_some() {
            self.outbox.push(MotionFinished { item, natural: false });
        }
        self.frozen.remove(&item);
    }
}
