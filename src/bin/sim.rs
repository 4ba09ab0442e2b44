use std::collections::BTreeSet;

use anyhow::Context;
use battleship_ai::{
    init_logging, Coord, EngineConfig, Fleet, Orientation, TargetingEngine, DEFAULT_FLEET,
};
use clap::Parser;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Pit the targeting engine against randomly placed fleets and report
/// how many shots each game took.
#[derive(Parser)]
#[command(name = "sim")]
struct Args {
    /// Board side length.
    #[arg(long, default_value_t = 10)]
    size: usize,
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Seed for fleet placement.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

struct HiddenShip {
    name: &'static str,
    cells: Vec<Coord>,
    hits: usize,
}

fn place_fleet(rng: &mut SmallRng, size: usize) -> anyhow::Result<Vec<HiddenShip>> {
    let mut occupied: BTreeSet<Coord> = BTreeSet::new();
    let mut fleet = Vec::new();
    for ship in DEFAULT_FLEET {
        let mut placed = false;
        for _ in 0..100 {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (size - ship.length(), size - 1),
                Orientation::Vertical => (size - 1, size - ship.length()),
            };
            let origin = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            let cells: Vec<Coord> = (0..ship.length())
                .map(|k| origin.step(orientation, k))
                .collect();
            if cells.iter().any(|c| occupied.contains(c)) {
                continue;
            }
            occupied.extend(cells.iter().copied());
            fleet.push(HiddenShip {
                name: ship.name(),
                cells,
                hits: 0,
            });
            placed = true;
            break;
        }
        anyhow::ensure!(
            placed,
            "unable to place {} on a {}x{} board",
            ship.name(),
            size,
            size
        );
    }
    Ok(fleet)
}

fn play_game(rng: &mut SmallRng, size: usize) -> anyhow::Result<usize> {
    let mut fleet = place_fleet(rng, size)?;
    let mut engine = TargetingEngine::new(EngineConfig::new(size));
    let mut struck: BTreeSet<Coord> = BTreeSet::new();
    let cap = 4 * size * size;
    let mut shots = 0;
    while fleet.iter().any(|ship| ship.hits < ship.cells.len()) {
        anyhow::ensure!(shots < cap, "shot cap reached after {} shots", shots);
        let remaining: Fleet = fleet
            .iter()
            .filter(|ship| ship.hits < ship.cells.len())
            .map(|ship| (ship.name.to_string(), ship.cells.len() - ship.hits))
            .collect();
        let target = engine.next_move(&remaining);
        shots += 1;
        let mut was_hit = false;
        if struck.insert(target) {
            if let Some(ship) = fleet.iter_mut().find(|ship| ship.cells.contains(&target)) {
                ship.hits += 1;
                was_hit = true;
                if ship.hits == ship.cells.len() {
                    log::info!("sank {} after {} shots", ship.name, shots);
                }
            }
        }
        engine.register_shot(target, was_hit);
    }
    Ok(shots)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let longest = DEFAULT_FLEET
        .iter()
        .map(|ship| ship.length())
        .max()
        .unwrap_or(0);
    anyhow::ensure!(
        args.size >= longest,
        "board must fit the longest ship ({} cells)",
        longest
    );
    anyhow::ensure!(args.games > 0, "need at least one game");

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut totals = Vec::with_capacity(args.games);
    for game in 0..args.games {
        let shots =
            play_game(&mut rng, args.size).with_context(|| format!("game {} failed", game))?;
        totals.push(shots);
    }

    let min = totals.iter().copied().min().unwrap_or(0);
    let max = totals.iter().copied().max().unwrap_or(0);
    let mean = totals.iter().sum::<usize>() as f64 / totals.len() as f64;
    let summary = json!({
        "size": args.size,
        "games": args.games,
        "shots": { "min": min, "mean": mean, "max": max },
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
