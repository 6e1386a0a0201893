//! `dk-lane` — one lane of right-to-left scrolling items.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`item`]       | `Candidate`, `InFlightItem`, `ItemPhase`, `Motion`              |
//! | [`state`]      | `LaneState` — launch-ordered `Vec<InFlightItem>`                |
//! | [`admission`]  | `evaluate` / `can_launch` — the pursuit computation             |
//! | [`renderer`]   | `MotionRenderer` trait, `Timeline`, `MotionFinished`            |
//! | [`observer`]   | `LaneObserver` trait, `NoopObserver`, `RetiredLog`              |
//! | [`controller`] | `LaneController<R>` — the only mutator of `LaneState`           |
//!
//! # Movement model
//!
//! Every item moves left at a constant velocity
//!
//! ```text
//! v = (viewport_width + width) / duration
//! ```
//!
//! starting fully off the right edge (`x = viewport_width`) and finishing
//! fully off the left edge (`x = -width`).  Positions are never stepped;
//! they are reconstructed from `now - since` whenever they are needed, so
//! decisions stay exact however irregularly the caller polls.
//!
//! # Threading
//!
//! Everything here is single-threaded and caller-serialized.  The renderer's
//! completion signal is delivered by the caller through
//! [`LaneController::on_motion_finished`] on the same logical thread.

pub mod admission;
pub mod controller;
pub mod item;
pub mod observer;
pub mod renderer;
pub mod state;


pub use admission::{Admission, can_launch, evaluate};
pub use controller::LaneController;
pub use item::{Candidate, InFlightItem, ItemPhase, Motion};
pub use observer::{LaneObserver, NoopObserver, RetiredLog};
pub use renderer::{MotionFinished, MotionRenderer, NoopRenderer, Timeline};
pub use state::LaneState;
