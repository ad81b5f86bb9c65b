//! Binary entrypoint: `dungeon [OPTIONS] [DATAFILE]`.
//!
//! Loads the world file, optionally prints the debug dump, then plays on
//! stdin/stdout. Logs go to stderr.
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;

use dungeon_engine::config::GameConfig;
use dungeon_engine::interpreter::{world_report, Interpreter};
use dungeon_world::World;

#[derive(Parser)]
#[command(name = "dungeon")]
#[command(about = "Explore a dungeon described by a text file")]
#[command(version)]
struct Cli {
    /// World file with ROOM, PATH, ITEM and INIT records
    #[arg(default_value = "dungeon.txt")]
    datafile: PathBuf,

    /// Print the loaded world before play
    #[arg(short, long)]
    debug: bool,

    /// Game configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose logging (-v, -vv, -vvv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut world = World::load_path(&cli.datafile)
        .with_context(|| format!("failed to load world {}", cli.datafile.display()))?;
    info!(
        "loaded {} rooms from {}",
        world.room_count(),
        cli.datafile.display()
    );

    if cli.debug {
        for line in world_report(&world) {
            println!("{}", line);
        }
    }

    let mut interpreter = Interpreter::new(&mut world, config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    interpreter
        .run(stdin.lock(), stdout.lock())
        .context("terminal I/O failed")?;
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}
