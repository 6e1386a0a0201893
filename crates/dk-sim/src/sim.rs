//! The `LaneSim` struct and its step loop.

use std::collections::VecDeque;

use dk_core::{ManualClock, MediaClock, MediaTime};
use dk_lane::LaneController;
use dk_script::{ScriptEntry, ScriptQueue};
use tracing::{debug, info};

use crate::{SimConfig, SimObserver, SimRenderer};

/// Totals for a run, as returned by [`LaneSim::run`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimSummary {
    pub launched: usize,
    pub retired:  usize,
    /// Items removed by [`LaneSim::stop`] without retiring.
    pub dropped:  usize,
    /// Script entries never launched (still queued or in the backlog).
    pub pending:  usize,
    /// Longest time an entry spent between becoming due and launching.
    pub max_wait_secs: f64,
    pub end: MediaTime,
}

/// The external scheduler around one lane.
///
/// Holds the lane, a simulated renderer, the script, and a FIFO backlog of
/// due entries.  Create via [`LaneSimBuilder`][crate::LaneSimBuilder].
pub struct LaneSim {
    pub config: SimConfig,

    /// Media clock, advanced by `config.step_secs` per step.
    pub clock: ManualClock,

    /// The lane under test, rendering into a [`SimRenderer`].
    pub lane: LaneController<SimRenderer>,

    /// Entries not yet due.
    pub script: ScriptQueue,

    /// Due entries waiting for admission, oldest first.
    pub backlog: VecDeque<ScriptEntry>,

    paused:  bool,
    summary: SimSummary,
}

impl LaneSim {
    pub(crate) fn new(
        config: SimConfig,
        clock:  ManualClock,
        lane:   LaneController<SimRenderer>,
        script: ScriptQueue,
    ) -> Self {
        Self {
            config,
            clock,
            lane,
            script,
            backlog: VecDeque::new(),
            paused:  false,
            summary: SimSummary::default(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> MediaTime {
        self.clock.now()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `true` once nothing is left to release, admit, or retire, or the
    /// configured end time has been reached.
    ///
    /// A paused lane with an empty script is also finished: frozen items
    /// never complete and the backlog cannot launch until [`resume`][Self::resume].
    pub fn is_finished(&self) -> bool {
        let out_of_time = self
            .config
            .end_secs
            .is_some_and(|end| self.now().as_secs() >= end);
        let drained = self.script.is_empty() && self.backlog.is_empty() && self.lane.lane().is_empty();
        let stalled = self.paused && self.script.is_empty();
        out_of_time || drained || stalled
    }

    /// Step until [`is_finished`][Self::is_finished].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimSummary {
        info!(
            scripted = self.script.len(),
            viewport = self.config.lane.viewport_width,
            "lane sim started"
        );
        while !self.is_finished() {
            self.step(observer);
        }
        let now = self.now();
        observer.on_sim_end(now);

        let summary = self.summary();
        info!(
            launched = summary.launched,
            retired = summary.retired,
            pending = summary.pending,
            max_wait_secs = summary.max_wait_secs,
            end = %now,
            "lane sim finished"
        );
        summary
    }

    /// Step until `until` is reached or the run finishes, whichever comes
    /// first.  Does not call [`SimObserver::on_sim_end`].
    pub fn run_until<O: SimObserver>(&mut self, until: MediaTime, observer: &mut O) {
        while self.now() < until && !self.is_finished() {
            self.step(observer);
        }
    }

    /// Process the current instant, then advance the clock one step.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now();

        // ── ① Completions ────────────────────────────────────────────────
        for message in self.lane.renderer.advance(now) {
            if self.lane.deliver(message, now, observer) {
                self.summary.retired += 1;
                // Drop whatever the renderer still shows for it.
                self.lane.renderer.forget(message.item);
            }
        }

        // ── ② Release due entries ────────────────────────────────────────
        self.backlog.extend(self.script.drain_due(now));

        // ── ③ Admission, head of line first ──────────────────────────────
        if !self.paused {
            self.launch_ready(now, observer);
        }

        observer.on_step_end(now, self.lane.lane().len(), self.backlog.len());
        self.clock.advance(self.config.step_secs);
    }

    /// Freeze the lane.  Due entries keep accumulating in the backlog.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.lane.pause_all(self.now());
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.lane.resume_all(self.now());
        }
    }

    /// Tear down: drop every item on the lane and the whole backlog and script.
    pub fn stop(&mut self) {
        self.summary.dropped += self.lane.lane().len();
        self.lane.stop_all();
        self.backlog.clear();
        self.script = ScriptQueue::new();
        self.paused = false;
    }

    /// Totals so far.
    pub fn summary(&self) -> SimSummary {
        SimSummary {
            pending: self.script.len() + self.backlog.len(),
            end:     self.now(),
            ..self.summary.clone()
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn launch_ready<O: SimObserver>(&mut self, now: MediaTime, observer: &mut O) {
        while let Some(head) = self.backlog.front() {
            if !self.lane.can_launch(&head.candidate, now) {
                break;
            }
            let Some(entry) = self.backlog.pop_front() else {
                break;
            };

            let id   = self.lane.launch(entry.candidate, now);
            let wait = now.since(entry.at);
            self.summary.launched += 1;
            self.summary.max_wait_secs = self.summary.max_wait_secs.max(wait);
            debug!(item = %id, label = %entry.label, wait_secs = wait, "script entry launched");

            if let Some(item) = self.lane.lane().get(id) {
                observer.on_item_launched(item);
            }
        }
    }
}
