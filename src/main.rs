//! Star Battle headless driver
//!
//! Runs the simulation with a scripted pilot and a naive circle overlap
//! detector, streaming every event to stdout as one JSON object per line.
//!
//! Usage: `star-battle [TUNING.json|-] [SEED]`

use std::io::{self, BufWriter, Write};
use std::path::Path;

use star_battle::sim::{
    self, EntityId, EntityKind, GameEvent, GameState, OverlapSource, Registry, TickInput,
};
use star_battle::consts::TICKS_PER_SECOND;
use star_battle::{Tuning, normalize_degrees};

/// Stop after an hour of simulated play
const MAX_SECONDS: u64 = 60 * 60;

/// Bounding circles from the half extents; stands in for sprite overlap tests
struct CircleOverlap;

impl OverlapSource for CircleOverlap {
    fn overlapping_pairs(&mut self, registry: &Registry) -> Vec<(EntityId, EntityId)> {
        let entities = registry.entities();
        let mut pairs = Vec::new();
        for (i, a) in entities.iter().enumerate() {
            for b in &entities[i + 1..] {
                let reach = a.half_extent().x + b.half_extent().x;
                if a.pos.distance_squared(b.pos) < reach * reach {
                    pairs.push((a.id, b.id));
                }
            }
        }
        pairs
    }
}

/// Turns toward the nearest target, fires when lined up, creeps closer
/// when far away
struct Autopilot;

impl Autopilot {
    fn input(&self, state: &GameState) -> TickInput {
        let Some(ship) = state.registry.get(state.ship_id) else {
            return TickInput::default();
        };

        let target = state
            .registry
            .entities()
            .iter()
            .filter(|e| {
                matches!(
                    e.kind(),
                    EntityKind::Asteroid | EntityKind::AlienShip | EntityKind::GunBonus
                )
            })
            .min_by(|a, b| {
                a.pos
                    .distance_squared(ship.pos)
                    .total_cmp(&b.pos.distance_squared(ship.pos))
            });
        let Some(target) = target else {
            return TickInput::default();
        };

        let to_target = target.pos - ship.pos;
        let desired = to_target.x.atan2(-to_target.y).to_degrees();
        let mut diff = normalize_degrees(desired - ship.angle);
        if diff > 180.0 {
            diff -= 360.0;
        }

        TickInput {
            rotate_left: diff < -3.0,
            rotate_right: diff > 3.0,
            thrust: to_target.length() > 250.0 && diff.abs() < 20.0 && state.time_ticks % 4 == 0,
            fire: diff.abs() < 10.0,
        }
    }
}

fn emit<W: Write>(out: &mut W, events: Vec<GameEvent>) -> io::Result<()> {
    for event in events {
        match serde_json::to_string(&event) {
            Ok(line) => writeln!(out, "{line}")?,
            Err(e) => log::error!("Could not encode {:?}: {}", event, e),
        }
    }
    Ok(())
}

/// Drive the game until it ends or `max_ticks` pass, then keep the frame
/// loop going for the game-over linger period. Returns the frames run.
fn run<W: Write, S: OverlapSource>(
    state: &mut GameState,
    detector: &mut S,
    out: &mut W,
    max_ticks: u64,
) -> io::Result<u64> {
    let pilot = Autopilot;
    let mut frames = 0;
    let mut linger = None;

    loop {
        emit(out, state.drain_events())?;
        if state.time_ticks >= max_ticks {
            break;
        }
        if state.is_over() {
            let left = linger.get_or_insert(state.tuning.game_over_ticks);
            if *left == 0 {
                break;
            }
            *left -= 1;
        }
        let input = pilot.input(state);
        sim::tick(state, &input, detector);
        frames += 1;
    }

    out.flush()?;
    Ok(frames)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = args
        .next()
        .filter(|p| p != "-")
        .map(|p| Tuning::load_or_default(Path::new(&p)))
        .unwrap_or_default();
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    log::info!("Star Battle (headless) starting with seed {}", seed);

    let max_ticks = MAX_SECONDS * u64::from(TICKS_PER_SECOND);
    let mut state = GameState::with_tuning(seed, tuning);
    sim::advance(&mut state);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&mut state, &mut CircleOverlap, &mut out, max_ticks) {
        Ok(frames) => log::info!(
            "Finished after {} ticks ({} frames): level {}, score {}",
            state.time_ticks,
            frames,
            state.level,
            state.score
        ),
        Err(e) => log::warn!("Event stream closed: {}", e),
    }
}
