//! `dk-script` — timed streams of candidates waiting to be launched.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`entry`]    | `ScriptEntry` — a candidate plus the time it becomes due     |
//! | [`queue`]    | `ScriptQueue` (`BTreeMap<millis, Vec<ScriptEntry>>`)         |
//! | [`loader`]   | `load_script_csv`, `load_script_reader`                     |
//! | [`random`]   | `RandomScript` — seeded synthetic streams                   |
//! | [`error`]    | `ScriptError`, `ScriptResult<T>`                            |
//!
//! A script says *when an item wants to appear*.  Whether it actually
//! appears then is up to the lane's admission check; a driver keeps due
//! entries in a backlog until the lane accepts them.

pub mod entry;
pub mod error;
pub mod loader;
pub mod queue;
pub mod random;


pub use entry::ScriptEntry;
pub use error::{ScriptError, ScriptResult};
pub use loader::{load_script_csv, load_script_reader};
pub use queue::ScriptQueue;
pub use random::RandomScript;
