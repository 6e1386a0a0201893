//! One scripted item.

use dk_core::MediaTime;
use dk_lane::Candidate;

/// A candidate that becomes due for launch at `at`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptEntry {
    /// Earliest time the item may be launched.
    pub at: MediaTime,

    pub candidate: Candidate,

    /// Free-form text carried for logging; never measured.
    pub label: String,
}

impl ScriptEntry {
    pub fn new(at: MediaTime, candidate: Candidate, label: impl Into<String>) -> Self {
        Self { at, candidate, label: label.into() }
    }
}
