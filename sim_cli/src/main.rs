//! Headless Pong host
//!
//! Runs matches between the scripted player and the AI paddle, frame by
//! frame, and reports the results.

mod autopilot;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, HostSignal, Match, Side};

use autopilot::{Autopilot, InputProvider};

#[derive(Parser)]
#[command(name = "pong-sim")]
#[command(about = "Play Pong matches headlessly", long_about = None)]
struct Cli {
    /// JSON match configuration; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the serve direction
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of matches to play
    #[arg(long, default_value_t = 1)]
    matches: u32,

    /// Stop after this many frames even if matches are unfinished
    #[arg(long, default_value_t = 1_000_000)]
    max_frames: u64,

    /// Print the final snapshot as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => Config::default(),
    };
    config.validate().context("invalid match configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let mut game = Match::with_seed(config, cli.seed);

    let config = game.config();
    log::info!(
        "arena {}x{}, first to {}, seed {}",
        config.arena_width,
        config.arena_height,
        config.winning_score,
        cli.seed
    );

    let mut pilot = Autopilot::new(cli.matches);
    let mut wins = (0u32, 0u32);
    let mut frames = 0u64;

    // Host loop: input, then physics, then "render"
    while frames < cli.max_frames {
        let input = pilot.poll(&game.snapshot());
        if game.apply_input(&input) == HostSignal::Quit {
            break;
        }

        game.tick();
        frames += 1;

        let snapshot = game.snapshot();
        if snapshot.events.game_over {
            match snapshot.winner {
                Some(Side::Player) => wins.0 += 1,
                Some(Side::Ai) => wins.1 += 1,
                None => {}
            }
            log::info!(
                "match {} over after {} frames: {} - {}",
                pilot.finished() + 1,
                frames,
                snapshot.player_score,
                snapshot.ai_score
            );
        }
    }

    if frames >= cli.max_frames {
        log::warn!("frame limit {} reached", cli.max_frames);
    }

    log::info!(
        "{} matches finished, player {} - ai {}",
        pilot.finished(),
        wins.0,
        wins.1
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&game.snapshot())
            .context("serializing final snapshot")?;
        println!("{}", json);
    }

    Ok(())
}
