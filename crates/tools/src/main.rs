mod config_file;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use levelgen::mapgen::{derive_level_seed, place_entities, solve};
use levelgen::{
    Direction, GeneratedLevel, GenerationOutcome, GenerationParams, GeneratorConfig,
    LayoutVariant, LevelGenerator, Pos, SolutionLength,
};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Dungeon,
    Tilt,
}

impl From<VariantArg> for LayoutVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Dungeon => Self::Dungeon,
            VariantArg::Tilt => Self::Tilt,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Session seed; each level derives its own stream from it
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Level (difficulty) index
    #[arg(short, long, default_value_t = 0)]
    level: u32,
    #[arg(short, long, value_enum, default_value_t = VariantArg::Tilt)]
    variant: VariantArg,
    /// TOML file with generator attempt budgets and room bounds
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Moves to replay from the start, e.g. "RDLU"
    #[arg(short, long)]
    moves: Option<String>,
    /// Print a JSON summary instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct LevelSummary {
    level: u32,
    variant: LayoutVariant,
    width: usize,
    height: usize,
    rows: Vec<String>,
    start: Pos,
    goal: Pos,
    outcome: GenerationOutcome,
    solution_length: SolutionLength,
    reachable_tiles: usize,
    hint: Option<String>,
    entities: Vec<Pos>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config_file::load_generator_config(path)?,
        None => GeneratorConfig::default(),
    };
    let generator = LevelGenerator::new(config)?;
    let variant = LayoutVariant::from(args.variant);

    let mut rng = ChaCha8Rng::seed_from_u64(derive_level_seed(args.seed, args.level, variant));
    let level = generator.generate(args.level, &mut rng, variant);
    let entities = match variant {
        LayoutVariant::Dungeon => {
            let count = GenerationParams::for_level(args.level).monster_count;
            place_entities(&level, count, &mut rng)
        }
        LayoutVariant::Tilt => Vec::new(),
    };
    let hint = solve(&level.grid, level.start, variant.movement_model())
        .map(|moves| moves.iter().map(|direction| direction.letter()).collect::<String>());

    if args.json {
        let summary = LevelSummary {
            level: args.level,
            variant,
            width: level.grid.width(),
            height: level.grid.height(),
            rows: level.grid.to_string().lines().map(str::to_owned).collect(),
            start: level.start,
            goal: level.goal,
            outcome: level.outcome,
            solution_length: level.solution_length,
            reachable_tiles: level.reachable.len(),
            hint,
            entities,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&level, &entities, hint.as_deref());
    }

    if let Some(moves) = &args.moves {
        replay_moves(&level, moves)?;
    }
    Ok(())
}

fn print_report(level: &GeneratedLevel, entities: &[Pos], hint: Option<&str>) {
    let mut rows: Vec<Vec<char>> =
        level.grid.to_string().lines().map(|line| line.chars().collect()).collect();
    mark(&mut rows, level.start, 'S');
    for &entity in entities {
        mark(&mut rows, entity, 'M');
    }
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }

    println!("Variant: {:?}", level.variant);
    println!("Outcome: {:?}", level.outcome);
    println!(
        "Start: ({}, {})  Goal: ({}, {})",
        level.start.x, level.start.y, level.goal.x, level.goal.y
    );
    println!("Solution: {}", level.solution_length);
    println!("Reachable tiles: {}", level.reachable.len());
    if let Some(hint) = hint {
        println!("Hint: {hint}");
    }
}

fn mark(rows: &mut [Vec<char>], pos: Pos, glyph: char) {
    if pos.x < 0 || pos.y < 0 {
        return;
    }
    if let Some(cell) = rows.get_mut(pos.y as usize).and_then(|row| row.get_mut(pos.x as usize)) {
        *cell = glyph;
    }
}

fn replay_moves(level: &GeneratedLevel, moves: &str) -> Result<()> {
    let mut position = level.start;
    for (index, letter) in moves.chars().enumerate() {
        let Some(direction) = Direction::from_letter(letter) else {
            bail!("move {index} ('{letter}') is not one of U, R, D, L");
        };
        let outcome = level.apply_move(position, direction);
        position = outcome.final_position;
        if outcome.reached_goal {
            println!("Goal reached after {} moves.", index + 1);
            return Ok(());
        }
    }
    println!("Goal not reached; ended at ({}, {}).", position.x, position.y);
    Ok(())
}
