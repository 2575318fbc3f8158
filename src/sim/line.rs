//! One-dimensional inelastic collisions with trajectory recording
//!
//! Bodies slide along a single axis. When two of them are closer than the sum
//! of their radii, both take the momentum-weighted common velocity
//! `(m_i v_i + m_j v_j) / (m_i + m_j)`. Unlike the 2D bounce this response
//! does depend on mass, and the two are deliberately kept separate.
//!
//! The run samples `(time, position)` every step so an external plotting
//! tool can draw distance over time.

use serde::{Deserialize, Serialize};

use super::vector::Position;
use crate::consts::{FRAME_RATE, LINE_DISPLAY_ROW};
use crate::error::{Result, SimError};
use crate::renderer::{BodyHandle, Renderer};

/// A body constrained to the x axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineBody {
    pub mass: f32,
    pub position: f32,
    pub velocity: f32,
    pub radius: f32,
}

impl LineBody {
    pub fn new(mass: f32, position: f32, velocity: f32, radius: f32) -> Self {
        Self {
            mass,
            position,
            velocity,
            radius,
        }
    }

    #[inline]
    pub fn momentum(&self) -> f32 {
        self.mass * self.velocity
    }
}

/// Strict contact test: touching exactly is not a collision
#[inline]
pub fn line_contact(a: &LineBody, b: &LineBody) -> bool {
    (a.position - b.position).abs() < a.radius + b.radius
}

/// Momentum-weighted common velocity of a perfectly inelastic collision
pub fn merged_velocity(a: &LineBody, b: &LineBody) -> Result<f32> {
    let total = a.mass + b.mass;
    if total == 0.0 {
        return Err(SimError::InvalidSettings("line bodies need non-zero total mass".into()));
    }
    Ok((a.momentum() + b.momentum()) / total)
}

/// Recorded sample stream, one column per body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub times: Vec<f32>,
    /// `positions[i][k]` is body `i` at `times[k]`
    pub positions: Vec<Vec<f32>>,
}

impl Trajectory {
    fn with_bodies(n: usize) -> Self {
        Self {
            times: Vec::new(),
            positions: vec![Vec::new(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Samples for one body as `(time, position)` pairs
    pub fn series(&self, body: usize) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.positions[body].iter().copied())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Scenario for the line simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSettings {
    pub bodies: Vec<LineBody>,
    /// Simulated time per step
    pub dt: f32,
    /// Stop once the clock reaches this
    pub duration: f32,
    pub frames_per_second: u32,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            bodies: vec![
                LineBody::new(3.0, 100.0, 100.0, 5.0),
                LineBody::new(4.0, 300.0, -60.0, 10.0),
            ],
            dt: 1.0 / 120.0,
            duration: 2.0,
            frames_per_second: FRAME_RATE,
        }
    }
}

/// Bodies on a line plus the simulated clock
#[derive(Debug, Clone)]
pub struct LineSimulation {
    pub bodies: Vec<LineBody>,
    pub clock: f32,
}

impl LineSimulation {
    pub fn new(bodies: Vec<LineBody>) -> Self {
        Self { bodies, clock: 0.0 }
    }

    /// Integrate positions by `dt`, then merge every touching pair
    pub fn step(&mut self, dt: f32) -> Result<()> {
        for body in &mut self.bodies {
            body.position += dt * body.velocity;
        }

        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.bodies[i], self.bodies[j]);
                if line_contact(&a, &b) {
                    let v = merged_velocity(&a, &b)?;
                    self.bodies[i].velocity = v;
                    self.bodies[j].velocity = v;
                }
            }
        }

        self.clock += dt;
        Ok(())
    }

    pub fn total_momentum(&self) -> f32 {
        self.bodies.iter().map(LineBody::momentum).sum()
    }

    /// Run until `duration` of simulated time has passed or the window closes
    ///
    /// Each iteration records the clock and every position before stepping.
    pub fn run_for<R: Renderer>(
        &mut self,
        duration: f32,
        dt: f32,
        frames_per_second: u32,
        renderer: &mut R,
    ) -> Result<Trajectory> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidSettings(format!("dt must be positive, got {}", dt)));
        }

        let handles: Vec<BodyHandle> = self
            .bodies
            .iter()
            .map(|b| renderer.create_body(Position::new(b.position, LINE_DISPLAY_ROW), b.radius))
            .collect();

        let mut trajectory = Trajectory::with_bodies(self.bodies.len());
        while renderer.is_open() && self.clock < duration {
            trajectory.times.push(self.clock);
            for (column, body) in trajectory.positions.iter_mut().zip(&self.bodies) {
                column.push(body.position);
            }

            self.step(dt)?;
            for (handle, body) in handles.iter().zip(&self.bodies) {
                renderer.set_position(*handle, Position::new(body.position, LINE_DISPLAY_ROW));
            }
            renderer.pace(frames_per_second);
        }

        log::info!(
            "Line run recorded {} samples over {:.3} time units",
            trajectory.len(),
            self.clock
        );
        Ok(trajectory)
    }
}
