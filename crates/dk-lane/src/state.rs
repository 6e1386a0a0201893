//! The `LaneState` — launch-ordered record of items in flight.

use dk_core::ItemId;

use crate::InFlightItem;

/// Items currently on one lane, oldest first.
///
/// Only ever appended to or shrunk by identity; never reordered.  Lanes hold
/// a handful of items at a time, so removal is a linear scan.
#[derive(Clone, Debug, Default)]
pub struct LaneState {
    items: Vec<InFlightItem>,
}

impl LaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` as the most recently launched.
    pub fn push(&mut self, item: InFlightItem) {
        self.items.push(item);
    }

    /// Remove the item with `id`, returning it.
    ///
    /// Returns `None` when no such item is present.  That is the expected
    /// outcome for a duplicate or late completion signal, not an error.
    pub fn remove(&mut self, id: ItemId) -> Option<InFlightItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// The most recently launched item.
    #[inline]
    pub fn last(&self) -> Option<&InFlightItem> {
        self.items.last()
    }

    pub fn get(&self, id: ItemId) -> Option<&InFlightItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items in launch order.  Restartable: call again for a fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, InFlightItem> {
        self.items.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, InFlightItem> {
        self.items.iter_mut()
    }

    /// Drop every item.  Used only by teardown.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a LaneState {
    type Item = &'a InFlightItem;
    type IntoIter = std::slice::Iter<'a, InFlightItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
