//! arena — a small scripted robo-arena match.
//!
//! A wandering player shares the arena with two bad and three good robots.
//! The player beams the nearest bad robot in range; bad robots hunt the
//! player or convert good robots depending on how the fight is going.
//!
//! Usage: `arena [config.json]`.  The optional JSON file overrides any
//! subset of `{ "sim": SimConfig, "tuning": Tuning }`.

mod scene;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use ra_actor::PlayerInput;
use ra_brain::Mandate;
use ra_core::{ActorId, Alignment, SimConfig, SimRng, Tick, Tuning, Vec2};
use ra_output::{CsvWriter, OutputWriter, SimOutputObserver};
use ra_sim::{ActorMind, ActorState, Sim, SimBuilder, SimObserver, TickSummary};
use serde::Deserialize;
use tracing::info;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:   &str = "output/arena";
/// Ticks between the player picking a new wander direction.
const WANDER_TICKS: u64  = 90;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
struct ArenaConfig {
    sim:    SimConfig,
    tuning: Tuning,
}

impl ArenaConfig {
    fn load(path: Option<PathBuf>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                sim: SimConfig {
                    total_ticks:                 60 * 60,
                    rules_update_interval_ticks: 6,
                    output_interval_ticks:       30,
                    ..SimConfig::default()
                },
                tuning: Tuning::default(),
            });
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Counts events and forwards everything the output writer records.
struct ArenaObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    hunts:         usize,
    hits:          usize,
    /// Indexed by `Alignment::is_good() as usize`.
    flips:         [usize; 2],
    snapshot_rows: usize,
}

impl<W: OutputWriter> ArenaObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, hunts: 0, hits: 0, flips: [0; 2], snapshot_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ArenaObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.hits += summary.hits;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_mandate_changed(&mut self, tick: Tick, actor: ActorId, from: Mandate, to: Mandate) {
        if let Mandate::HuntAgent(target) = to {
            self.hunts += 1;
            info!(tick = tick.0, actor = %actor, target = %target, "hunt started");
        }
        self.inner.on_mandate_changed(tick, actor, from, to);
    }

    fn on_state_changed(&mut self, tick: Tick, actor: ActorId, from: ActorState, to: ActorState) {
        info!(tick = tick.0, actor = %actor, from = %from, to = %to, "state changed");
    }

    fn on_alignment_flipped(&mut self, _tick: Tick, _actor: ActorId, to: Alignment) {
        self.flips[to.is_good() as usize] += 1;
    }

    fn on_snapshot(&mut self, tick: Tick, actors: &ra_actor::ActorStore, minds: &[ActorMind]) {
        self.snapshot_rows += actors.count;
        self.inner.on_snapshot(tick, actors, minds);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Scripted player ───────────────────────────────────────────────────────────

/// Wander, and beam the nearest bad robot in range.
fn player_input(sim: &Sim, player: ActorId, rng: &mut SimRng, heading: &mut Vec2) -> PlayerInput {
    let now = sim.clock.current_tick;
    let position = sim.actors.position[player.index()];
    if now.is_every(WANDER_TICKS) {
        // Drift back toward the middle when far out.
        *heading = (rng.unit_vector() - position / 1000.0).normalize_or_zero();
    }
    let beam_target = sim
        .actors
        .robots()
        .filter(|&r| sim.actors.is_bad_robot(r))
        .map(|r| (r, sim.actors.distance(player, r)))
        .filter(|&(_, d)| d <= sim.tuning.player.beam_range)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(r, _)| r);
    PlayerInput { movement: *heading, beam_target, ..PlayerInput::default() }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let ArenaConfig { sim: config, tuning } = ArenaConfig::load(config_path)?;
    println!("=== arena — robo-arena AI ===");
    println!(
        "Ticks: {}  |  Rules every {} ticks  |  Seed: {}",
        config.total_ticks, config.rules_update_interval_ticks, config.seed
    );

    let level = scene::build_level()?;
    let actors = scene::build_actors(&tuning);
    println!("Level: {} patrol paths, proximity factor {}", level.path_count(), level.proximity_factor());
    println!("Actors: {}", actors.count);
    println!();

    let mut rng = SimRng::new(config.seed).child(1);
    let mut sim = SimBuilder::new(config.clone(), tuning, level, actors).build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ArenaObserver::new(SimOutputObserver::new(writer, &config));

    let player = ActorId(0);
    let mut heading = Vec2::ZERO;
    let t0 = Instant::now();
    while sim.clock.current_tick < config.end_tick() {
        let input = player_input(&sim, player, &mut rng, &mut heading);
        sim.set_input(player, input)?;
        sim.step(&mut obs)?;
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  hunts started       : {}", obs.hunts);
    println!("  contact hits        : {}", obs.hits);
    println!("  flipped bad / good  : {} / {}", obs.flips[0], obs.flips[1]);
    println!("  actor_snapshots.csv : {} rows", obs.snapshot_rows);
    println!();

    println!("{:<12} {:<11} {:<10} {:<18} {:<26}", "Actor", "Kind", "Alignment", "State", "Mandate");
    println!("{}", "-".repeat(80));
    for actor in sim.actors.actor_ids() {
        let i = actor.index();
        println!(
            "{:<12} {:<11} {:<10} {:<18} {:<26}",
            actor.to_string(),
            sim.actors.kind[i].as_str(),
            sim.actors.alignment[i].map_or("-", |a| a.as_str()),
            sim.state(actor).map_or("-", |s| s.name()),
            sim.mandate(actor).map_or_else(|| "-".to_string(), |m| m.to_string()),
        );
    }
    println!();
    println!("Bad robots: {:.0}%", sim.actors.bad_bot_percentage() * 100.0);
    println!("Output written to {OUTPUT_DIR}/");

    Ok(())
}
