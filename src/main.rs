//! Headless blockfall runner (default binary).
//!
//! Plays one session without a terminal, either with the seeded autoplayer or by
//! replaying a command script, then prints the final board and a summary.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use blockfall::core::{board_to_text, GameSnapshot, GameState};
use blockfall::driver::{run_script, Autoplay, SessionSummary, DEFAULT_MAX_STEPS};
use blockfall::input::parse_script;
use blockfall::settings::load_config;

/// Falling-block rules engine driven from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Run a falling-block game session headlessly.",
    long_about = "Runs a falling-block game session without a terminal UI.\n\n\
        autoplay (default) lets a seeded random player act every 1/60 s until game over \
        or the step budget runs out. replay applies a command script, one command per \
        line: left, right, rotate, down, drop, restart, tick <seconds>.\n\n\
        Rules are read from --config, else $BLOCKFALL_CONFIG, else \
        <config dir>/blockfall/config.toml when present."
)]
struct Args {
    /// Piece randomizer seed (overrides the config file).
    #[arg(long, global = true, value_name = "N")]
    seed: Option<u64>,

    /// TOML config file with the rules to play by.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the summary and final snapshot as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Let a seeded random player run the session.
    Autoplay {
        /// Stop after this many 1/60 s steps.
        #[arg(long, default_value_t = DEFAULT_MAX_STEPS, value_name = "N")]
        max_steps: u64,
    },
    /// Apply the commands in a script file.
    Replay {
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct Report {
    summary: SessionSummary,
    snapshot: GameSnapshot,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args = Args::parse();

    let mut config = load_config(args.config.as_deref()).context("failed to load config")?;
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut game_state = GameState::from_config(&config).context("invalid rules")?;
    log::info!("starting session with seed {}", game_state.seed());

    let summary = match args.mode.unwrap_or(Mode::Autoplay {
        max_steps: DEFAULT_MAX_STEPS,
    }) {
        Mode::Autoplay { max_steps } => {
            Autoplay::new(game_state.seed(), max_steps).run(&mut game_state)
        }
        Mode::Replay { script } => {
            let text = fs::read_to_string(&script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            let commands = parse_script(&text)
                .with_context(|| format!("failed to parse script {}", script.display()))?;
            log::info!("replaying {} commands", commands.len());
            run_script(&mut game_state, &commands)
        }
    };

    if args.json {
        let report = Report {
            summary,
            snapshot: game_state.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", board_to_text(game_state.board()));
        println!(
            "score {}  level {}  lines {}  pieces {}  {}",
            summary.score,
            summary.level,
            summary.lines,
            summary.pieces_locked,
            if summary.game_over { "game over" } else { "running" }
        );
    }

    Ok(())
}
