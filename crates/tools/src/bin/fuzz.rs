use anyhow::{Result, ensure};
use clap::Parser;
use levelgen::mapgen::{derive_level_seed, verify_fallback};
use levelgen::{
    GenerationOutcome, GenerationParams, LayoutVariant, LevelGenerator, TileKind,
    compute_reachable, shortest_solution_length,
};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of session seeds to sweep
    #[arg(long, default_value_t = 200)]
    seeds: u64,
    /// Highest level index generated for each seed
    #[arg(long, default_value_t = 20)]
    max_level: u32,
}

#[derive(Default)]
struct Tally {
    accepted: u64,
    relaxed: u64,
    fallback: u64,
}

impl Tally {
    fn record(&mut self, outcome: GenerationOutcome) {
        match outcome {
            GenerationOutcome::Accepted { .. } => self.accepted += 1,
            GenerationOutcome::Relaxed { .. } => self.relaxed += 1,
            GenerationOutcome::Fallback => self.fallback += 1,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Sweeping {} seeds from {} across levels 0..={}...",
        args.seeds, args.seed, args.max_level
    );
    let generator = LevelGenerator::default();
    let mut tilt = Tally::default();
    let mut dungeon = Tally::default();

    for session_seed in args.seed..args.seed.saturating_add(args.seeds) {
        for level_index in 0..=args.max_level {
            let mut rng = ChaCha8Rng::seed_from_u64(derive_level_seed(
                session_seed,
                level_index,
                LayoutVariant::Tilt,
            ));
            let level = generator.generate(level_index, &mut rng, LayoutVariant::Tilt);
            let solution_length = shortest_solution_length(&level.grid, level.start);
            ensure!(
                solution_length.is_solvable(),
                "Invariant failed: unsolvable tilt level (seed {session_seed}, level {level_index})"
            );
            ensure!(level.grid.border_is_wall(), "Invariant failed: open tilt border");
            if let GenerationOutcome::Accepted { .. } = level.outcome {
                let required = GenerationParams::for_level(level_index).min_solution_length;
                ensure!(
                    solution_length.moves().unwrap_or_default() >= required,
                    "Invariant failed: accepted tilt level below {required} moves \
                     (seed {session_seed}, level {level_index})"
                );
            }
            if level.outcome == GenerationOutcome::Fallback {
                verify_fallback(&level)?;
            }
            tilt.record(level.outcome);

            let mut rng = ChaCha8Rng::seed_from_u64(derive_level_seed(
                session_seed,
                level_index,
                LayoutVariant::Dungeon,
            ));
            let level = generator.generate(level_index, &mut rng, LayoutVariant::Dungeon);
            ensure!(
                compute_reachable(&level.grid, level.start).contains(level.goal),
                "Invariant failed: unreachable dungeon goal \
                 (seed {session_seed}, level {level_index})"
            );
            ensure!(
                level.grid.count(TileKind::Goal) == 1,
                "Invariant failed: dungeon goal count (seed {session_seed}, level {level_index})"
            );
            dungeon.record(level.outcome);
        }
    }

    for (name, tally) in [("tilt", &tilt), ("dungeon", &dungeon)] {
        println!(
            "{name}: {} accepted, {} relaxed, {} fallback",
            tally.accepted, tally.relaxed, tally.fallback
        );
    }
    println!("Fuzzing completed successfully.");
    Ok(())
}
