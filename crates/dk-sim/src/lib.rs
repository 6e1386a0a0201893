//! `dk-sim` — deterministic driver for a single lane.
//!
//! # Step loop
//!
//! ```text
//! every step_secs of media time:
//!   ① Completions — the simulated renderer reports timelines that ended
//!                   (or were interrupted); each is delivered to the lane,
//!                   which retires items and notifies the observer.
//!   ② Release     — script entries whose due time has passed move from the
//!                   ScriptQueue to the FIFO backlog.
//!   ③ Admission   — while the backlog head passes `can_launch`, launch it.
//!                   The head blocks everything behind it.
//! ```
//!
//! Everything runs on one thread against a [`ManualClock`][dk_core::ManualClock],
//! so a run is fully reproducible.
//!
//! # Cargo features
//!
//! | Feature | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on `SimConfig` and `LaneConfig`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dk_sim::{LaneSimBuilder, NoopObserver, SimConfig};
//!
//! let mut sim = LaneSimBuilder::new(SimConfig::default())
//!     .script(entries)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod renderer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::LaneSimBuilder;
pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use observer::SimObserver;
pub use renderer::SimRenderer;
pub use sim::{LaneSim, SimSummary};

pub use dk_lane::{NoopObserver, RetiredLog};
