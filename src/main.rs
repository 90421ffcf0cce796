//! Fluffy Hop headless runner
//!
//! Drives a session from a simulated frame clock, optionally under autopilot, and logs
//! the presentation cues a real shell would act on.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fluffy_hop::autopilot::Autopilot;
use fluffy_hop::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use fluffy_hop::cues::{AdPolicy, Cue, Presenter};
use fluffy_hop::{GameSession, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "fluffy-hop")]
#[command(about = "Run the Fluffy Hop simulation headless and report what the shell would do")]
struct Cli {
    /// RNG seed for obstacle gaps (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of frames to simulate
    #[arg(long, default_value_t = 3_600)]
    frames: u32,
    /// Simulated frame duration in milliseconds (need not match the 60 Hz tick)
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    frame_ms: f32,
    /// JSON session config; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Let the demo controller play
    #[arg(long)]
    autopilot: bool,
    /// Final scores above this show an ad
    #[arg(long, default_value_t = AdPolicy::default().min_score)]
    ad_threshold: u32,
    /// Suppress sound cues
    #[arg(long)]
    mute: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    let seed = cli.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut session = GameSession::new(SCREEN_WIDTH, SCREEN_HEIGHT, config, seed)
        .context("invalid session config")?;
    let mut presenter = Presenter::new(AdPolicy {
        min_score: cli.ad_threshold,
    });
    presenter.set_muted(cli.mute);
    let pilot = Autopilot::default();

    log::info!("Fluffy Hop (headless) starting with seed {}", seed);

    let frame_dt = cli.frame_ms / 1000.0;
    let mut ads_shown = 0u32;
    for _ in 0..cli.frames {
        let mut events = Vec::new();
        if cli.autopilot && pilot.wants_activate(&session) {
            events.extend(session.on_activate());
        }
        events.extend(session.advance(frame_dt));

        for cue in presenter.present(&events) {
            match cue {
                Cue::ShowAd { final_score } => {
                    ads_shown += 1;
                    log::info!("Displaying ad (final score {})", final_score);
                }
                other => log::debug!("{:?}", other),
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    }
    println!(
        "seed {}: {} ticks, {} completed run(s), best score {}, current score {}, {} ad(s)",
        seed,
        session.time_ticks(),
        presenter.runs(),
        presenter.best_score(),
        session.score(),
        ads_shown
    );
    Ok(())
}
