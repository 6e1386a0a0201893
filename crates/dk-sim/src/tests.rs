//! Integration tests for dk-sim.

use dk_core::{ItemId, LaneConfig, LaneRng, MediaTime, Rect};
use dk_lane::{Candidate, InFlightItem, LaneObserver, MotionFinished, MotionRenderer, Timeline};
use dk_script::{RandomScript, ScriptEntry};

use crate::{LaneSimBuilder, NoopObserver, RetiredLog, SimConfig, SimError, SimObserver, SimRenderer};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 300-unit viewport, 10 ms steps, no end time.
fn test_config() -> SimConfig {
    SimConfig {
        lane:      LaneConfig::with_viewport(300.0),
        step_secs: 0.01,
        end_secs:  None,
    }
}

fn entry(at: f64, duration: f64, width: f64) -> ScriptEntry {
    ScriptEntry::new(MediaTime(at), Candidate { duration, width }, format!("{at}"))
}

fn timeline(begin: f64, duration: f64) -> Timeline {
    let from = Rect::new(300.0, 0.0, 50.0, 20.0);
    Timeline { from, to: from.with_x(-50.0), begin: MediaTime(begin), duration }
}

/// Records step-level activity alongside launches and retirements.
#[derive(Default)]
struct StepLog {
    log:       RetiredLog,
    durations: Vec<f64>,
    steps:     usize,
    max_lane:  usize,
    ended_at:  Option<MediaTime>,
}

impl LaneObserver for StepLog {
    fn on_item_launched(&mut self, item: &InFlightItem) {
        self.log.on_item_launched(item);
        self.durations.push(item.duration);
    }
    fn on_item_retired(&mut self, item: &InFlightItem) {
        self.log.on_item_retired(item);
    }
}

impl SimObserver for StepLog {
    fn on_step_end(&mut self, _now: MediaTime, in_flight: usize, _backlog: usize) {
        self.steps += 1;
        self.max_lane = self.max_lane.max(in_flight);
    }
    fn on_sim_end(&mut self, now: MediaTime) {
        self.ended_at = Some(now);
    }
}

// ── SimRenderer ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod renderer {
    use super::*;

    #[test]
    fn reports_natural_completion_at_end() {
        let mut r = SimRenderer::new();
        r.start_timeline(ItemId(0), timeline(0.0, 10.0));
        assert!(r.advance(MediaTime(9.99)).is_empty());
        assert_eq!(
            r.advance(MediaTime(10.0)),
            vec![MotionFinished { item: ItemId(0), natural: true }]
        );
        assert!(r.advance(MediaTime(20.0)).is_empty());
        assert_eq!(r.displayed(), 0);
    }

    #[test]
    fn completions_in_end_order() {
        let mut r = SimRenderer::new();
        r.start_timeline(ItemId(0), timeline(0.0, 10.0));
        r.start_timeline(ItemId(1), timeline(0.0, 4.0));
        let ids: Vec<ItemId> = r.advance(MediaTime(11.0)).iter().map(|m| m.item).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(0)]);
    }

    #[test]
    fn freeze_interrupts_and_holds_frame() {
        let mut r = SimRenderer::new();
        r.start_timeline(ItemId(0), timeline(0.0, 10.0));
        let held = Rect::new(125.0, 0.0, 50.0, 20.0);
        r.freeze_at(ItemId(0), held);

        assert_eq!(
            r.advance(MediaTime(5.0)),
            vec![MotionFinished { item: ItemId(0), natural: false }]
        );
        assert!(r.advance(MediaTime(50.0)).is_empty());
        assert_eq!(r.frame_of(ItemId(0), MediaTime(50.0)), Some(held));
    }

    #[test]
    fn cancel_interrupts_and_hides() {
        let mut r = SimRenderer::new();
        r.start_timeline(ItemId(0), timeline(0.0, 10.0));
        r.cancel_timeline(ItemId(0));
        assert_eq!(r.displayed(), 0);
        assert_eq!(
            r.advance(MediaTime(20.0)),
            vec![MotionFinished { item: ItemId(0), natural: false }]
        );
    }

    #[test]
    fn restart_replaces_silently() {
        let mut r = SimRenderer::new();
        r.start_timeline(ItemId(0), timeline(0.0, 10.0));
        r.start_timeline(ItemId(0), timeline(2.0, 10.0));
        assert!(r.advance(MediaTime(11.0)).is_empty());
        assert_eq!(r.advance(MediaTime(12.0)).len(), 1);
    }
}

// ── LaneSimBuilder ────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn zero_step_rejected() {
        let config = SimConfig { step_secs: 0.0, ..test_config() };
        assert!(matches!(LaneSimBuilder::new(config).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn invalid_lane_rejected() {
        let config = SimConfig { lane: LaneConfig::with_viewport(-5.0), ..test_config() };
        assert!(matches!(LaneSimBuilder::new(config).build(), Err(SimError::Lane(_))));
    }

    #[test]
    fn missing_script_file_rejected() {
        let result = LaneSimBuilder::new(test_config())
            .script_file("/definitely/not/here.csv")
            .build();
        assert!(matches!(result, Err(SimError::Script(_))));
    }

    #[test]
    fn empty_sim_is_finished() {
        let sim = LaneSimBuilder::new(test_config()).build().unwrap();
        assert!(sim.is_finished());
    }

    #[test]
    fn start_time_applied() {
        let sim = LaneSimBuilder::new(test_config())
            .start(MediaTime(5.0))
            .build()
            .unwrap();
        assert_eq!(sim.now(), MediaTime(5.0));
    }
}

// ── Runs ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use super::*;

    #[test]
    fn single_item_launches_and_retires() {
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 2.0, 50.0)])
            .build()
            .unwrap();
        let mut obs = StepLog::default();
        let summary = sim.run(&mut obs);

        assert_eq!(summary.launched, 1);
        assert_eq!(summary.retired, 1);
        assert_eq!(summary.pending, 0);
        assert_eq!(obs.log.launched, vec![ItemId(0)]);
        assert_eq!(obs.log.retired, vec![ItemId(0)]);
        assert!(summary.end.as_secs() >= 2.0);
        assert_eq!(obs.ended_at, Some(summary.end));
        assert_eq!(sim.lane.renderer.displayed(), 0);
    }

    #[test]
    fn follower_waits_for_safety_gap() {
        // Equal speeds: the second item only waits for the first to clear
        // the entry edge by the 10-unit gap, 60 units at 35/s.
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 10.0, 50.0), entry(0.0, 10.0, 50.0)])
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver);

        assert_eq!(summary.launched, 2);
        assert_eq!(summary.retired, 2);
        assert!(
            (1.70..1.75).contains(&summary.max_wait_secs),
            "waited {}",
            summary.max_wait_secs
        );
    }

    #[test]
    fn head_of_line_blocks_followers() {
        // A fast item behind a slow one must wait; the slow third item
        // behind it may not jump the queue.
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 10.0, 50.0), entry(0.0, 2.0, 50.0), entry(0.0, 30.0, 20.0)])
            .build()
            .unwrap();
        let mut obs = StepLog::default();
        sim.run(&mut obs);
        assert_eq!(obs.durations, vec![10.0, 2.0, 30.0]);
        assert!(obs.steps > 0);
    }

    #[test]
    fn items_never_overtake() {
        let random = RandomScript { count: 60, mean_gap_secs: 0.3, ..RandomScript::default() };
        let script = random.generate(&mut LaneRng::new(2024));
        let mut sim = LaneSimBuilder::new(test_config()).script(script).build().unwrap();
        let gap = sim.config.lane.safety_gap;

        let mut obs = StepLog::default();
        while !sim.is_finished() {
            sim.step(&mut obs);
            let now = sim.now();
            let items: Vec<&InFlightItem> = sim.lane.lane().iter().collect();
            for pair in items.windows(2) {
                let ahead  = pair[0].frame_at(now, sim.lane.config());
                let behind = pair[1].frame_at(now, sim.lane.config());
                if ahead.max_x() > 0.0 {
                    assert!(
                        behind.min_x() - ahead.max_x() >= gap - 1e-6,
                        "{:?} closed on {:?} at {now}",
                        pair[1].id,
                        pair[0].id
                    );
                }
            }
        }
        assert_eq!(obs.log.launched.len(), 60);
        assert_eq!(obs.log.retired.len(), 60);
        assert!(obs.max_lane > 1);
    }

    #[test]
    fn end_time_cuts_run_short() {
        let config = SimConfig { end_secs: Some(1.0), ..test_config() };
        let mut sim = LaneSimBuilder::new(config)
            .script([entry(0.0, 10.0, 50.0), entry(0.0, 10.0, 50.0)])
            .build()
            .unwrap();
        let summary = sim.run(&mut NoopObserver);
        assert_eq!(summary.launched, 1);
        assert_eq!(summary.retired, 0);
        assert_eq!(summary.pending, 1);
        assert!(summary.end.as_secs() >= 1.0 && summary.end.as_secs() < 1.02);
    }
}

// ── Pause / resume / stop ─────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    /// Step for `secs` of media time, whether or not the run has finished.
    fn step_for(sim: &mut crate::LaneSim, secs: f64, obs: &mut StepLog) {
        let until = sim.now() + (secs - 1e-9);
        while sim.now() < until {
            sim.step(obs);
        }
    }

    #[test]
    fn pause_holds_position_and_delays_exit() {
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 4.0, 50.0)])
            .build()
            .unwrap();
        let mut obs = StepLog::default();

        step_for(&mut sim, 1.0, &mut obs);
        sim.pause();
        assert!(sim.is_paused());
        let held = sim.lane.current_frame(ItemId(0), sim.now()).unwrap();

        step_for(&mut sim, 3.0, &mut obs);
        assert_eq!(sim.lane.current_frame(ItemId(0), sim.now()), Some(held));
        assert_eq!(sim.lane.renderer.frame_of(ItemId(0), sim.now()), Some(held));
        assert!(obs.log.retired.is_empty());

        sim.resume();
        let summary = sim.run(&mut obs);
        assert_eq!(obs.log.retired, vec![ItemId(0)]);
        // 4 s of travel plus 3 s paused.
        assert!(summary.end.as_secs() >= 7.0 - 1e-6, "ended at {}", summary.end);
        assert!(summary.end.as_secs() < 7.1, "ended at {}", summary.end);
    }

    #[test]
    fn backlog_waits_while_paused() {
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 4.0, 50.0), entry(0.5, 4.0, 50.0)])
            .build()
            .unwrap();
        let mut obs = StepLog::default();

        step_for(&mut sim, 0.2, &mut obs);
        sim.pause();
        step_for(&mut sim, 5.0, &mut obs);
        assert_eq!(obs.log.launched, vec![ItemId(0)]);
        assert_eq!(sim.backlog.len(), 1);

        sim.resume();
        let summary = sim.run(&mut obs);
        assert_eq!(summary.launched, 2);
        assert_eq!(summary.retired, 2);
    }

    #[test]
    fn run_while_paused_returns_once_script_drains() {
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 4.0, 50.0), entry(0.5, 4.0, 50.0)])
            .build()
            .unwrap();
        let mut obs = StepLog::default();

        step_for(&mut sim, 0.2, &mut obs);
        sim.pause();
        let summary = sim.run(&mut obs);

        // Stops once the second entry is released into the backlog.
        assert!(sim.is_finished());
        assert!(sim.is_paused());
        assert!(summary.end.as_secs() >= 0.5 && summary.end.as_secs() < 0.53, "ended at {}", summary.end);
        assert_eq!(summary.launched, 1);
        assert_eq!(summary.retired, 0);
        assert_eq!(summary.pending, 1);
        assert_eq!(sim.lane.lane().len(), 1);

        sim.resume();
        assert!(!sim.is_finished());
        let summary = sim.run(&mut obs);
        assert_eq!(summary.launched, 2);
        assert_eq!(summary.retired, 2);
        assert_eq!(summary.pending, 0);
    }

    #[test]
    fn run_until_stops_on_paused_empty_script() {
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 4.0, 50.0)])
            .build()
            .unwrap();
        let mut obs = StepLog::default();

        step_for(&mut sim, 1.0, &mut obs);
        sim.pause();
        let paused_at = sim.now();
        sim.run_until(MediaTime(100.0), &mut obs);
        assert_eq!(sim.now(), paused_at);
        assert_eq!(sim.lane.lane().len(), 1);
    }

    #[test]
    fn stop_drops_silently() {
        let mut sim = LaneSimBuilder::new(test_config())
            .script([entry(0.0, 4.0, 50.0), entry(0.0, 4.0, 50.0), entry(9.0, 4.0, 50.0)])
            .build()
            .unwrap();
        let mut obs = StepLog::default();

        step_for(&mut sim, 2.0, &mut obs);
        assert_eq!(sim.lane.lane().len(), 2);
        sim.stop();
        assert!(sim.lane.lane().is_empty());
        assert!(sim.is_finished());

        // Interruptions for the cancelled items arrive late and are ignored.
        for _ in 0..10 {
            sim.step(&mut obs);
        }
        let summary = sim.summary();
        assert!(obs.log.retired.is_empty());
        assert_eq!(summary.dropped, 2);
        assert_eq!(summary.retired, 0);
        assert_eq!(summary.pending, 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_config {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: SimConfig =
            serde_json::from_str(r#"{ "lane": { "viewport_width": 300.0 }, "end_secs": 60.0 }"#)
                .unwrap();
        assert_eq!(config.lane.viewport_width, 300.0);
        assert_eq!(config.lane.safety_gap, dk_core::DEFAULT_SAFETY_GAP);
        assert_eq!(config.end_secs, Some(60.0));
        assert_eq!(config.step_secs, SimConfig::default().step_secs);
    }
}
