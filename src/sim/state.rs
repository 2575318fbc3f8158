//! Simulation state and core body types
//!
//! Everything a frame mutates lives in [`SimulationState`], owned by a single
//! simulation instance.

use serde::{Deserialize, Serialize};

use super::ball::ContactMatrix;
use super::overlap::Circle;
use super::vector::{Position, Vector};
use crate::error::{Result, SimError};

/// The rectangle bodies are confined to, origin at (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    /// Whether a circle of `radius` can sit inside the bounds at all
    pub fn can_hold(&self, radius: f32) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }

    /// Whether `circle` lies fully inside the bounds (tangent allowed)
    pub fn contains(&self, circle: Circle) -> bool {
        let Circle { center, radius } = circle;
        center.x() - radius >= 0.0
            && center.x() + radius <= self.width
            && center.y() - radius >= 0.0
            && center.y() + radius <= self.height
    }
}

/// A simulated circular body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub id: usize,
    pub center: Position,
    /// Fixed for the body's lifetime
    pub radius: f32,
    /// Pixels per frame unit
    pub velocity: Vector,
}

impl Body {
    pub fn new(id: usize, center: Position, radius: f32, velocity: Vector) -> Self {
        Self {
            id,
            center,
            radius,
            velocity,
        }
    }

    #[inline]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center, self.radius)
    }

    /// Mass up to a constant factor (proportional to area)
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * self.radius
    }

    /// Advance the center by `velocity * frame_unit`
    #[inline]
    pub fn integrate(&mut self, frame_unit: f32) {
        self.center += self.velocity * frame_unit;
    }
}

/// Which axes a body bounced on during the last wall pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallContact {
    pub x: bool,
    pub y: bool,
}

impl WallContact {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub bounds: Bounds,
    /// Bodies in id order; `bodies[i].id == i`
    pub bodies: Vec<Body>,
    /// Per-body wall bounces from the most recent step. Observability only.
    pub wall_contacts: Vec<WallContact>,
    /// Per-pair "already resolved this contact episode" flags
    pub contacts: ContactMatrix,
    /// Steps taken so far
    pub frame: u64,
}

impl SimulationState {
    pub fn new(bounds: Bounds, bodies: Vec<Body>) -> Self {
        let n = bodies.len();
        Self {
            bounds,
            bodies,
            wall_contacts: vec![WallContact::default(); n],
            contacts: ContactMatrix::new(n),
            frame: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Current body centers in id order
    pub fn positions(&self) -> Vec<Position> {
        self.bodies.iter().map(|b| b.center).collect()
    }
}
