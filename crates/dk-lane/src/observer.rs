//! Upstream notifications from a lane.

use dk_core::ItemId;

use crate::InFlightItem;

/// Callbacks fired as items enter and leave the lane.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — retirement counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl LaneObserver for Counter {
///     fn on_item_retired(&mut self, _item: &InFlightItem) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait LaneObserver {
    /// Called by drivers right after a successful launch.
    fn on_item_launched(&mut self, _item: &InFlightItem) {}

    /// Called exactly once for every item that leaves the lane by completing
    /// its travel.  Never called for items dropped by `stop_all`.
    fn on_item_retired(&mut self, _item: &InFlightItem) {}
}

/// A [`LaneObserver`] that does nothing.
pub struct NoopObserver;

impl LaneObserver for NoopObserver {}

/// A [`LaneObserver`] that records ids in the order it saw them.
#[derive(Debug, Default, Clone)]
pub struct RetiredLog {
    pub launched: Vec<ItemId>,
    pub retired:  Vec<ItemId>,
}

impl RetiredLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LaneObserver for RetiredLog {
    fn on_item_launched(&mut self, item: &InFlightItem) {
        self.launched.push(item.id);
    }

    fn on_item_retired(&mut self, item: &InFlightItem) {
        self.retired.push(item.id);
    }
}
