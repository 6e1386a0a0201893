//! Fluent builder for constructing a [`LaneSim`].

use std::path::PathBuf;

use dk_core::{ManualClock, MediaTime};
use dk_lane::LaneController;
use dk_script::{ScriptEntry, ScriptQueue, load_script_csv};

use crate::{LaneSim, SimConfig, SimError, SimRenderer, SimResult};

/// Fluent builder for [`LaneSim`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                     |
/// |---------------------|-----------------------------|
/// | `.script(v)`        | No entries                  |
/// | `.script_file(p)`   | None (loaded at `build`)    |
/// | `.start(t)`         | `MediaTime::ZERO`           |
///
/// Entries from `.script` and `.script_file` are merged.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = LaneSimBuilder::new(config)
///     .script_file("comments.csv")
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct LaneSimBuilder {
    config:      SimConfig,
    entries:     Vec<ScriptEntry>,
    script_file: Option<PathBuf>,
    start:       MediaTime,
}

impl LaneSimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            entries:     Vec::new(),
            script_file: None,
            start:       MediaTime::ZERO,
        }
    }

    /// Add in-memory script entries.
    pub fn script(mut self, entries: impl IntoIterator<Item = ScriptEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Load additional entries from a CSV file when [`build`][Self::build]
    /// runs.  See [`dk_script::loader`] for the format.
    pub fn script_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_file = Some(path.into());
        self
    }

    /// Media time of the first step.  Script times are absolute, so entries
    /// before `start` are due immediately.
    pub fn start(mut self, start: MediaTime) -> Self {
        self.start = start;
        self
    }

    /// Validate inputs, load the script, and return a ready-to-run [`LaneSim`].
    pub fn build(self) -> SimResult<LaneSim> {
        if !(self.config.step_secs.is_finite() && self.config.step_secs > 0.0) {
            return Err(SimError::Config(format!(
                "step_secs must be positive, got {}",
                self.config.step_secs
            )));
        }

        let mut entries = self.entries;
        if let Some(path) = &self.script_file {
            entries.extend(load_script_csv(path)?);
        }

        let lane = LaneController::new(self.config.lane.clone(), SimRenderer::new())?;

        Ok(LaneSim::new(
            self.config,
            ManualClock::new(self.start),
            lane,
            ScriptQueue::from_entries(entries),
        ))
    }
}
