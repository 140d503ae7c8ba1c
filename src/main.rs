//! Sprite Duel main entry point.
//!
//! A two-fighter 2D duel written in Rust using:
//! - **bevy_ecs** for the match world and its fixed per-frame schedule
//! - **raylib** for windowing and graphics (feature `window`)
//! - **configparser** and **serde_json** for settings and fighter rosters
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and the roster
//! 2. Build the match: scenery layers, both fighters, key bindings
//! 3. Every frame feed the wall-clock delta to the countdown, then tick
//!    input, movement, animation, combat and the knock-out check
//! 4. Stop ticking once a fighter is knocked out or time runs out
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features window
//! cargo run -- --headless --frames 4000
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "window"),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use spriteduel::error::FightError;
use spriteduel::events::hud::HudLog;
use spriteduel::events::input::QueuedInput;
use spriteduel::game::Match;
use spriteduel::resources::gameconfig::GameConfig;
use spriteduel::resources::matchstatus::Outcome;
use spriteduel::resources::roster::Roster;
use spriteduel::resources::sheetloader::FixedSizeLoader;
use spriteduel::surface::RecordingSurface;

/// Sprite Duel
#[derive(Parser)]
#[command(version, about = "Two fighters, one arena, sixty seconds.")]
struct Cli {
    /// INI settings file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Roster JSON; overrides `[assets] roster` from the config.
    #[arg(long, value_name = "PATH")]
    roster: Option<PathBuf>,

    /// Run without a window, feeding no input.
    #[arg(long)]
    headless: bool,

    /// Frame limit for headless runs.
    #[arg(long, value_name = "N", default_value_t = 4000)]
    frames: u64,

    /// Write the current settings to the config path and exit.
    #[arg(long)]
    write_config: bool,

    /// Write the built-in roster as JSON and exit.
    #[arg(long, value_name = "PATH")]
    write_roster: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), FightError> {
    let mut config = GameConfig::with_path(&cli.config);

    // Early-exit: dump settings or roster and quit
    if cli.write_config {
        config.save_to_file()?;
        println!("Config written to {}", cli.config.display());
        return Ok(());
    }
    if let Some(path) = cli.write_roster {
        std::fs::write(&path, Roster::default().to_json()?)?;
        println!("Roster written to {}", path.display());
        return Ok(());
    }

    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    let roster = match cli.roster.or_else(|| config.roster.clone()) {
        Some(path) => Roster::load(path)?,
        None => Roster::default(),
    };

    let outcome = if cli.headless {
        run_headless(&config, &roster, cli.frames)?
    } else {
        run_window(&config, &roster)?
    };
    match outcome {
        Some(outcome) => info!("Final result: {}", outcome),
        None => info!("Match left unfinished"),
    }
    Ok(())
}

/// Drive a match at a fixed step with no window and no input.
fn run_headless(
    config: &GameConfig,
    roster: &Roster,
    frames: u64,
) -> Result<Option<Outcome>, FightError> {
    let mut loader = FixedSizeLoader::unloaded();
    let mut duel = Match::new(config, roster, &mut loader)?;
    let (width, height) = config.window_size();
    let mut surface = RecordingSurface::new(width as f32, height as f32)?;
    let mut input = QueuedInput::new();
    let mut hud = HudLog::new();
    let dt = 1.0 / config.target_fps.max(1) as f32;

    for _ in 0..frames {
        duel.advance_clock(dt, &mut hud);
        let running = duel.tick(&mut input, &mut surface, &mut hud);
        surface.clear();
        if !running {
            break;
        }
    }
    info!(
        "Headless run stopped after {} frames, {}s left",
        duel.frame_count(),
        duel.remaining_seconds()
    );
    Ok(duel.outcome())
}

#[cfg(feature = "window")]
fn run_window(config: &GameConfig, roster: &Roster) -> Result<Option<Outcome>, FightError> {
    spriteduel::frontend::run(config, roster)
}

#[cfg(not(feature = "window"))]
fn run_window(config: &GameConfig, roster: &Roster) -> Result<Option<Outcome>, FightError> {
    warn!("Built without the `window` feature, running headless");
    run_headless(config, roster, u64::MAX)
}
