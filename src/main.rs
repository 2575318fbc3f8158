//! Bounce Sim entry point
//!
//! Runs a simulation headlessly and prints the result as JSON.
//!
//! Usage: `bounce-sim [settings.json] [--line]`

use std::process::ExitCode;

use serde::Serialize;

use bounce_sim::renderer::HeadlessRenderer;
use bounce_sim::sim::{Body, LineSettings, LineSimulation, RunSummary, Simulation};
use bounce_sim::{Result, Settings};

/// Final state of a 2D run
#[derive(Serialize)]
struct PlaneOutput<'a> {
    summary: RunSummary,
    bodies: &'a [Body],
}

fn main() -> ExitCode {
    env_logger::init();

    let mut line = false;
    let mut settings_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--line" => line = true,
            _ => settings_path = Some(arg),
        }
    }

    let result = if line {
        run_line(settings_path.as_deref())
    } else {
        run_plane(settings_path.as_deref())
    };

    match result {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("bounce-sim: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_plane(path: Option<&str>) -> Result<String> {
    let settings = match path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    log::info!("Bounce Sim starting with seed {}", settings.seed);

    let mut sim = Simulation::from_settings(&settings)?;
    let mut renderer = HeadlessRenderer::new(settings.max_frames).realtime(settings.realtime);
    let summary = sim.run(&mut renderer)?;

    let output = PlaneOutput {
        summary,
        bodies: sim.bodies(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn run_line(path: Option<&str>) -> Result<String> {
    let settings: LineSettings = match path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => LineSettings::default(),
    };
    log::info!("Line simulation with {} bodies", settings.bodies.len());

    let mut sim = LineSimulation::new(settings.bodies.clone());
    let mut renderer = HeadlessRenderer::new(None);
    let trajectory = sim.run_for(
        settings.duration,
        settings.dt,
        settings.frames_per_second,
        &mut renderer,
    )?;
    trajectory.to_json()
}
