//! Galactica entry point
//!
//! Generates a galaxy from a JSON configuration, advances it a fixed number of
//! steps and prints a render snapshot as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;
use serde::Serialize;

use galactica::GalaxyConfig;
use galactica::consts::SIM_DT;
use galactica::gizmos;
use galactica::sim::{generate, run};

#[derive(Parser, Debug)]
#[command(about = "Procedural spiral galaxy with differential rotation")]
struct Args {
    /// JSON configuration; defaults are used for anything it leaves out
    config: Option<PathBuf>,

    /// Fixed steps to simulate before the snapshot
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,

    /// Override the configuration seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Time multiplier applied to every step
    #[arg(long, default_value_t = 1.0)]
    timescale: f32,

    /// Emit orbit and arm polylines instead of the body snapshot
    #[arg(long)]
    gizmos: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    dump_config: bool,
}

/// Debug polylines, all in galaxy-local coordinates except the bounds
#[derive(Serialize)]
struct GizmoExport {
    orbits: Vec<Vec<Vec2>>,
    arms: [Vec<Vec2>; 2],
    bounds: [Vec<Vec2>; 2],
}

fn load_config(args: &Args) -> Result<GalaxyConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            GalaxyConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GalaxyConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Galactica starting...");

    let config = load_config(&args)?;
    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    if args.gizmos {
        let out = GizmoExport {
            orbits: gizmos::orbit_paths(&config),
            arms: gizmos::arm_polylines(&config),
            bounds: gizmos::boundary_rings(&config),
        };
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    let mut galaxy = generate(config).context("generating galaxy")?;

    let dt = SIM_DT * args.timescale;
    if let Some(summary) = run(&mut galaxy, args.ticks, dt) {
        log::info!(
            "Ran {} ticks (dt {dt}), enclosed mass {}",
            galaxy.time_ticks,
            summary.enclosed_mass
        );
    }

    println!("{}", serde_json::to_string(&galaxy.snapshot())?);
    Ok(())
}
