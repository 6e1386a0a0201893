//! basic — smallest demo for the rust_danmaku lane framework.
//!
//! Feeds a short scripted burst of comments, followed by a seeded random
//! stream, through a single 375-unit lane.  The lane is paused for two
//! seconds part way through to show items holding position and resuming.
//!
//! Usage: `basic [config.json] [script.csv]`
//!
//! Set `RUST_LOG=debug` to see every launch and retirement.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dk_core::{ItemId, LaneRng, MediaClock, MediaTime, SystemClock};
use dk_lane::{InFlightItem, LaneObserver};
use dk_script::{RandomScript, ScriptEntry, load_script_reader};
use dk_sim::{LaneSimBuilder, SimConfig, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const RANDOM_COUNT:  usize = 24;
const RANDOM_OFFSET: f64 = 6.0; // random stream starts after the burst
const PAUSE_AT:      f64 = 3.0;
const PAUSE_SECS:    f64 = 2.0;

// ── Script CSV ────────────────────────────────────────────────────────────────

// Four comments due at once (they queue behind each other), then a fast
// one that has to wait for the slow item ahead to get far enough out.
const SCRIPT_CSV: &str = "\
at_secs,duration_secs,width,label\n\
0.0,8.0,120,first!\n\
0.0,8.0,60,hello\n\
0.0,6.0,200,this scene again\n\
0.0,8.0,90,lol\n\
1.5,3.0,80,fast one\n\
2.0,10.0,240,a very long and very slow comment\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ReportObserver {
    launched: Vec<(ItemId, MediaTime, f64, f64)>,
    retired:  usize,
    peak:     usize,
}

impl LaneObserver for ReportObserver {
    fn on_item_launched(&mut self, item: &InFlightItem) {
        self.launched.push((item.id, item.launched_at, item.duration, item.width));
    }

    fn on_item_retired(&mut self, item: &InFlightItem) {
        self.retired += 1;
        info!(item = %item.id, launched_at = %item.launched_at, "item left the lane");
    }
}

impl SimObserver for ReportObserver {
    fn on_step_end(&mut self, _now: MediaTime, in_flight: usize, _backlog: usize) {
        self.peak = self.peak.max(in_flight);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let script_path = args.next();

    println!("=== basic — rust_danmaku lane ===");

    // 1. Config: from JSON if given, defaults otherwise.
    let config = match &config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<SimConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => SimConfig::default(),
    };
    println!(
        "Lane: viewport {}  |  gap {}  |  step {:.4} s",
        config.lane.viewport_width, config.lane.safety_gap, config.step_secs
    );

    // 2. Script: scripted burst plus a seeded random tail.
    let mut entries = load_script_reader(Cursor::new(SCRIPT_CSV))?;
    let mut rng = LaneRng::new(SEED);
    let random = RandomScript { count: RANDOM_COUNT, ..RandomScript::default() };
    entries.extend(random.generate(&mut rng).into_iter().map(|e| {
        ScriptEntry::new(e.at + RANDOM_OFFSET, e.candidate, e.label)
    }));
    println!("Script: {} entries (seed {SEED})", entries.len());

    let mut builder = LaneSimBuilder::new(config).script(entries);
    if let Some(path) = &script_path {
        println!("Extra script: {path}");
        builder = builder.script_file(Path::new(path));
    }
    let mut sim = builder.build()?;
    println!();

    // 3. Run up to the pause point.
    let mut obs = ReportObserver::default();
    let wall = SystemClock::new();
    sim.run_until(MediaTime(PAUSE_AT), &mut obs);

    // 4. Pause, let media time pass, resume.
    sim.pause();
    info!(at = %sim.now(), on_lane = sim.lane.lane().len(), "paused");
    sim.run_until(sim.now() + PAUSE_SECS, &mut obs);
    sim.resume();
    info!(at = %sim.now(), backlog = sim.backlog.len(), "resumed");

    // 5. Run to completion.
    let summary = sim.run(&mut obs);
    let elapsed = wall.now();

    // 6. Summary.
    println!();
    println!("Simulated {} in {} wall time", summary.end, elapsed);
    println!("  launched : {}", summary.launched);
    println!("  retired  : {}", obs.retired);
    println!("  pending  : {}", summary.pending);
    println!("  peak     : {} items on the lane", obs.peak);
    println!("  max wait : {:.3} s", summary.max_wait_secs);
    println!();

    println!("{:<8} {:<10} {:<10} {:<8}", "Item", "Launched", "Duration", "Width");
    println!("{}", "-".repeat(38));
    for (id, at, duration, width) in &obs.launched {
        println!("{:<8} {:<10} {:<10.2} {:<8.1}", id.0, at.to_string(), duration, width);
    }

    Ok(())
}
