mod autoplay;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tetracoin_core::codec::{decode, encode};
use tetracoin_core::levels::{level_by_id, level_by_name, LevelCatalogEntry, LEVEL_CATALOG};
use tetracoin_core::snapshot::GameSnapshot;
use tetracoin_core::solver::{solve, SolverLimits};
use tetracoin_core::{stars_for_moves, validate, LevelConfig};

#[derive(Parser)]
#[command(name = "tetracoin", version, about = "Level tools for the tetracoin puzzle core")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LevelArg {
    /// Catalog level, by id or by name.
    #[arg(long, env = "TETRACOIN_LEVEL")]
    level: String,
}

#[derive(Args)]
struct SolverArgs {
    #[arg(long, default_value_t = 100)]
    max_moves: u32,
    #[arg(long, default_value_t = 10_000)]
    max_states: usize,
}

impl SolverArgs {
    fn limits(&self) -> SolverLimits {
        SolverLimits {
            max_moves: self.max_moves,
            max_states: self.max_states,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in level catalog.
    Levels,
    /// Check a level's configuration and confirm it can be finished.
    Validate {
        #[command(flatten)]
        level: LevelArg,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Search for a shortest winning move sequence.
    Solve {
        #[command(flatten)]
        level: LevelArg,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Drive a full session to its outcome and report it.
    Autoplay {
        #[command(flatten)]
        level: LevelArg,
        #[command(flatten)]
        solver: SolverArgs,
        #[arg(long)]
        seed: Option<u64>,
        /// Seconds burned off the clock per move.
        #[arg(long, default_value_t = 1)]
        ticks_per_move: u32,
        #[arg(long)]
        snapshot_out: Option<PathBuf>,
    },
    /// Decode a saved snapshot and print its contents.
    Inspect {
        #[arg(long)]
        snapshot: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Levels => {
            for entry in LEVEL_CATALOG {
                let config = entry.config();
                println!(
                    "{:>3}  {:<20} {}x{}  blocks: {}  coins: {}  time: {}s",
                    entry.id,
                    entry.name,
                    config.grid_width,
                    config.grid_height,
                    config.blocks.len(),
                    config.coins.len() + queued_total(&config),
                    config.time_limit,
                );
            }
            Ok(())
        }
        Commands::Validate { level, solver } => {
            let config = resolve_level(&level.level)?;
            validate(&config)?;
            println!("config: ok");
            match solve(&config, solver.limits()) {
                Some(solution) => {
                    println!("solvable: yes ({} moves)", solution.len());
                    Ok(())
                }
                None => Err(format!("no solution within {} states", solver.max_states).into()),
            }
        }
        Commands::Solve { level, solver } => {
            let config = resolve_level(&level.level)?;
            validate(&config)?;
            let Some(solution) = solve(&config, solver.limits()) else {
                return Err(format!("no solution within {} states", solver.max_states).into());
            };
            for (index, step) in solution.moves.iter().enumerate() {
                println!("{:>3}. block {} {}", index + 1, step.block, step.direction.name());
            }
            let moves = solution.len() as u32;
            println!(
                "moves: {moves}, stars: {}",
                stars_for_moves(moves, config.max_moves_three_stars, config.max_moves_two_stars)
            );
            Ok(())
        }
        Commands::Autoplay {
            level,
            solver,
            seed,
            ticks_per_move,
            snapshot_out,
        } => {
            let config = resolve_level(&level.level)?;
            validate(&config)?;
            let session = autoplay::run(&config, solver.limits(), seed, ticks_per_move);
            if let Some(path) = snapshot_out {
                let snapshot = session.snapshot();
                let bytes = encode(&snapshot).ok_or("snapshot encoding failed")?;
                fs::write(&path, bytes)?;
                println!("snapshot: {}", path.display());
            }
            Ok(())
        }
        Commands::Inspect { snapshot } => {
            let bytes = fs::read(&snapshot)?;
            let decoded: GameSnapshot =
                decode(&bytes).ok_or("not a readable snapshot")?;
            print_snapshot(&decoded);
            Ok(())
        }
    }
}

fn queued_total(config: &LevelConfig) -> usize {
    config.queues.iter().map(|queue| queue.items.len()).sum()
}

fn resolve_level(value: &str) -> Result<LevelConfig, Box<dyn std::error::Error>> {
    let entry: Option<&LevelCatalogEntry> = match value.trim().parse::<u32>() {
        Ok(id) => level_by_id(id),
        Err(_) => level_by_name(value),
    };
    match entry {
        Some(entry) => Ok(entry.config()),
        None => {
            eprintln!("unknown level: {value}");
            eprintln!("available levels:");
            for entry in LEVEL_CATALOG {
                eprintln!("  {} ({})", entry.id, entry.name);
            }
            Err(format!("unknown level: {value}").into())
        }
    }
}

fn print_snapshot(snapshot: &GameSnapshot) {
    println!("version: {}", snapshot.version);
    println!("level: {}", snapshot.level_id);
    println!("grid: {}x{}", snapshot.grid_width, snapshot.grid_height);
    println!("moves: {}", snapshot.moves);
    println!(
        "time: {}s of {}s",
        snapshot.time_remaining, snapshot.time_limit
    );
    println!(
        "playing: {}, paused: {}, result: {:?}",
        snapshot.is_playing, snapshot.is_paused, snapshot.result
    );
    for block in &snapshot.blocks {
        println!(
            "block {}: {} {} at ({}, {}) needs {}",
            block.id,
            block.color.name(),
            block.shape.name(),
            block.anchor.x,
            block.anchor.y,
            block.counter,
        );
    }
    for coin in &snapshot.coins {
        println!(
            "coin {}: {} at ({}, {})",
            coin.id,
            coin.color.name(),
            coin.position.x,
            coin.position.y,
        );
    }
    for queue in &snapshot.queues {
        println!(
            "queue at ({}, {}): {} pending",
            queue.position.x,
            queue.position.y,
            queue.pending.len(),
        );
    }
}
