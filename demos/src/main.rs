//! Paint walls and watch the A* search, in a terminal or as a one-shot
//! solve of a scene file.
//!
//! Run: cargo run --bin gridfind -- --map board.txt
//!      cargo run --bin gridfind -- --interactive --width 16 --height 12

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use gridfind_demo::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use gridfind_demo::{Board, DemoError, Notice, Scene, render, term};
use gridfind_paths::{FinderConfig, OpenOrdering};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Ordering {
    LinearScan,
    Keyed,
}

impl From<Ordering> for OpenOrdering {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::LinearScan => OpenOrdering::LinearScan,
            Ordering::Keyed => OpenOrdering::Keyed,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "gridfind", version, about = "A* pathfinding on a painted grid")]
struct Cli {
    /// Scene file: `.` open, `#` wall, `S` start, `E` end.
    #[arg(long)]
    map: Option<PathBuf>,

    /// Board width when no scene is given.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Board height when no scene is given.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Open-set ordering.
    #[arg(long, value_enum, default_value_t = Ordering::LinearScan)]
    ordering: Ordering,

    /// Edit the board in the terminal. Implied when no scene is given.
    #[arg(short, long)]
    interactive: bool,
}

fn run(cli: Cli) -> Result<ExitCode, DemoError> {
    let config = FinderConfig::with_ordering(cli.ordering.into());

    let Some(path) = cli.map else {
        term::run(Board::new(cli.width, cli.height, config))?;
        return Ok(ExitCode::SUCCESS);
    };

    let scene = Scene::load(&path)?;
    let mut board = Board::from_scene(&scene, config);
    if cli.interactive {
        term::run(board)?;
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = board.find();
    print!("{}", render::to_text(&board));
    let stats = board.finder().stats();
    match outcome {
        Ok(steps) => {
            println!(
                "path: {steps} steps ({} expanded, {} discovered)",
                stats.expanded, stats.discovered
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(Notice::NoPath) => {
            println!("no path ({} expanded)", stats.expanded);
            Ok(ExitCode::from(2))
        }
        Err(Notice::MissingEndpoints) => Err(DemoError::MissingEndpoints),
        Err(notice @ Notice::InvalidSize { .. }) => {
            eprintln!("Error: {notice}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
