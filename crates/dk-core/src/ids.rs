//! Strongly typed, zero-cost identifier wrappers.
//!
//! Items on a lane are identified by an opaque id handed out at launch time
//! rather than by reference equality.  Completion signals from the renderer
//! carry this id back, so a late or duplicate signal for an item that is
//! already gone simply fails to match.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The id that follows `self`.  Used by id allocators.
            #[inline]
            pub fn next(self) -> $name {
                $name(self.0.wrapping_add(1))
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of one in-flight item, unique within its lane.
    pub struct ItemId(u32);
}
