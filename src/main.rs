//! Gtp-Rust: drive a GTP Go engine from the command line.
//!
//! ## Usage
//!
//! - `gtp-rust info` - Print the engine's identity and command list
//! - `gtp-rust demo` - Let the engine play a short game against itself
//!
//! The engine defaults to `gnugo --mode gtp`; pass `--engine` and
//! `--engine-arg` to drive something else.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

use gtp_rust::session::Session;
use gtp_rust::vertex::{Color, Move};

/// Gtp-Rust: a Go Text Protocol engine controller
#[derive(Parser)]
#[command(name = "gtp-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine executable to spawn (resolved via PATH)
    #[arg(long, default_value = "gnugo")]
    engine: String,

    /// Argument passed to the engine; repeat for more
    #[arg(long = "engine-arg", allow_hyphen_values = true, default_values_t = ["--mode".to_string(), "gtp".to_string()])]
    engine_args: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the engine's name, version, and supported commands
    Info,
    /// Run a short self-play demo on a 9x9 board
    Demo {
        /// Number of moves to generate before scoring
        #[arg(long, default_value_t = 10)]
        moves: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let args: Vec<&str> = cli.engine_args.iter().map(String::as_str).collect();
    let session = Session::start(&cli.engine, &args)?;

    match cli.command {
        Some(Commands::Info) => run_info(session),
        Some(Commands::Demo { moves }) => run_demo(session, moves),
        None => run_info(session),
    }
}

fn run_info(mut engine: Session) -> Result<()> {
    println!("name:             {}", engine.name()?);
    println!("version:          {}", engine.version()?);
    println!("protocol_version: {}", engine.protocol_version()?);

    println!("commands:");
    for command in engine.list_commands()? {
        println!("  {command}");
    }

    engine.quit()?;
    Ok(())
}

fn run_demo(mut engine: Session, moves: u32) -> Result<()> {
    println!("engine: {} {}", engine.name()?, engine.version()?);

    engine.boardsize(9)?;
    engine.clear_board()?;
    engine.komi(6.5)?;

    let mut color = Color::Black;
    for n in 1..=moves {
        let mv = engine.genmove(color)?;
        println!("{n:3}. {color} {mv}");

        if mv == Move::Resign {
            println!("{color} resigns");
            return engine.quit().map_err(Into::into);
        }
        color = match color {
            Color::Black => Color::White,
            Color::White => Color::Black,
        };
    }

    println!("{}", engine.showboard()?);
    println!("score: {}", engine.final_score()?);

    engine.quit()?;
    Ok(())
}
