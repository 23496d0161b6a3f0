use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hifitime::Duration;
use tracing::info;

use orrery::config::{ConfigLoader, OrreryConfig};
use orrery::constants::TITLE_REFRESH_SECONDS;
use orrery::frame_timer::fmt_dur;
use orrery::scene::Scene;

/// Headless driver for the orbit viewer core.
#[derive(Parser, Debug)]
#[command(author, version, about = "Keplerian orbit viewer core, headless run")]
struct CliOptions {
    /// Path to a TOML scene configuration. The built-in system is used when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Real seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Override the configured time scale (simulation seconds per real second).
    #[arg(long)]
    time_scale: Option<f64>,

    /// Display configuration summary without running the simulation.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = CliOptions::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => OrreryConfig::default(),
    };
    apply_time_scale(&mut config, cli.time_scale)?;

    println!("Configuration summary:");
    for line in config.summary_lines() {
        println!("  - {line}");
    }

    let mut scene = Scene::from_config(&config).context("failed to build the scene")?;

    if cli.dry_run {
        println!("Dry-run requested; exiting without running simulation.");
        return Ok(());
    }

    let frame = Duration::from_seconds(cli.dt);
    let mut since_title = 0.0;
    for _ in 0..cli.frames {
        let t = scene.advance(frame);

        since_title += cli.dt;
        if since_title >= TITLE_REFRESH_SECONDS {
            since_title = 0.0;
            info!(t_sim = t, "{}", scene.status_line());
        }
        if scene.should_close() {
            break;
        }
    }

    let t = scene.clock().time();
    println!(
        "Simulated {:.1} s in {} frames (avg frame {})",
        t,
        scene.frame_timer().frames(),
        fmt_dur(scene.frame_timer().avg())
    );
    for (index, body) in scene.bodies().iter().enumerate() {
        if let Some(p) = scene.body_position(index, t) {
            println!(
                "  {:<16} ({:>9.4}, {:>9.4}, {:>9.4})",
                body.name, p.x, p.y, p.z
            );
        }
    }

    Ok(())
}

/// Replace the configured time scale with the command-line one, if any, and re-validate.
fn apply_time_scale(config: &mut OrreryConfig, time_scale: Option<f64>) -> Result<()> {
    if let Some(scale) = time_scale {
        config.simulation.time_scale = scale;
        config.validate().context("invalid --time-scale")?;
    }
    Ok(())
}
