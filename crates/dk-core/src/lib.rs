//! `dk-core` — foundational types for the `rust_danmaku` lane framework.
//!
//! This crate is a dependency of every other `dk-*` crate.  It has no `dk-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ItemId`                                              |
//! | [`geo`]         | `Rect` bounding boxes in viewport units               |
//! | [`time`]        | `MediaTime`, `MediaClock`, `ManualClock`, `SystemClock` |
//! | [`config`]      | `LaneConfig`, `DEFAULT_SAFETY_GAP`                    |
//! | [`rng`]         | `LaneRng` (seeded, deterministic)                     |
//! | [`error`]       | `DkError`, `DkResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_SAFETY_GAP, LaneConfig};
pub use error::{DkError, DkResult};
pub use geo::Rect;
pub use ids::ItemId;
pub use rng::LaneRng;
pub use time::{ManualClock, MediaClock, MediaTime, SystemClock};
