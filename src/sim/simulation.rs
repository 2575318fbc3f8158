//! Frame loop driving a [`SimulationState`] against a renderer

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Body, Bounds, SimulationState};
use super::step::{StepReport, step};
use super::vector::Position;
use crate::error::Result;
use crate::renderer::{BodyHandle, Renderer, random_fill};
use crate::settings::Settings;

/// Totals from a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: u64,
    pub wall_bounces: u64,
    pub ball_contacts: u64,
}

/// A self-contained 2D simulation instance
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimulationState,
    frame_unit: f32,
    frames_per_second: u32,
    rng: Pcg32,
}

impl Simulation {
    /// Wrap existing bodies
    pub fn new(bounds: Bounds, bodies: Vec<Body>, frame_unit: f32, frames_per_second: u32) -> Self {
        Self {
            state: SimulationState::new(bounds, bodies),
            frame_unit,
            frames_per_second,
            rng: Pcg32::seed_from_u64(0),
        }
    }

    /// Validate settings and place the initial bodies
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let bounds = settings.bounds()?;
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let bodies = settings.placement().generate(&bounds, &mut rng)?;
        Ok(Self {
            state: SimulationState::new(bounds, bodies),
            frame_unit: settings.frame_unit,
            frames_per_second: settings.frames_per_second,
            rng,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    /// Current centers in body order
    pub fn positions(&self) -> Vec<Position> {
        self.state.positions()
    }

    /// Advance one frame
    pub fn step(&mut self) -> Result<StepReport> {
        step(&mut self.state, self.frame_unit)
    }

    /// Run until the renderer reports its window closed
    ///
    /// The closed check happens once per frame, before stepping.
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> Result<RunSummary> {
        let handles: Vec<BodyHandle> = self
            .state
            .bodies
            .iter()
            .map(|body| {
                let handle = renderer.create_body(body.center, body.radius);
                renderer.set_fill(handle, random_fill(&mut self.rng));
                handle
            })
            .collect();

        log::info!(
            "Running {} bodies in {}x{} at {} fps",
            handles.len(),
            self.state.bounds.width,
            self.state.bounds.height,
            self.frames_per_second
        );

        let mut summary = RunSummary::default();
        while renderer.is_open() {
            let report = self.step()?;
            summary.frames += 1;
            summary.wall_bounces += report.wall_bounces() as u64;
            summary.ball_contacts += report.ball_contacts() as u64;

            for (handle, body) in handles.iter().zip(&self.state.bodies) {
                renderer.set_position(*handle, body.center);
            }
            renderer.pace(self.frames_per_second);
        }

        log::info!(
            "Window closed after {} frames ({} wall bounces, {} ball contacts)",
            summary.frames,
            summary.wall_bounces,
            summary.ball_contacts
        );
        Ok(summary)
    }
}
