//! Simulation settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::{Bounds, Placement};

/// Settings for the 2D bouncing-body simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    /// Bounds width in pixels
    pub width: f32,
    /// Bounds height in pixels
    pub height: f32,

    // === Bodies ===
    /// Number of bodies to place
    pub count: usize,
    /// Radius shared by every body
    pub radius: f32,
    /// Initial momentum of every body (speed = momentum / radius²)
    pub momentum: f32,
    /// Candidate centers tried per body during placement
    pub max_attempts: u32,
    /// RNG seed for placement and colors
    pub seed: u64,

    // === Timing ===
    /// Display refresh rate requested from the renderer
    pub frames_per_second: u32,
    /// Time advanced per step; velocities are in pixels per frame unit
    pub frame_unit: f32,
    /// Stop after this many frames (headless runs)
    pub max_frames: Option<u64>,
    /// Sleep between frames instead of running flat out
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,

            count: DEFAULT_BODY_COUNT,
            radius: DEFAULT_RADIUS,
            momentum: DEFAULT_MOMENTUM,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: 0,

            frames_per_second: FRAME_RATE,
            frame_unit: FRAME_UNIT,
            max_frames: Some(DEFAULT_HEADLESS_FRAMES),
            realtime: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidSettings(format!("{} must be positive, got {}", name, value)))
            }
        };
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("radius", self.radius)?;
        positive("frame_unit", self.frame_unit)?;
        if !self.momentum.is_finite() {
            return Err(SimError::InvalidSettings("momentum must be finite".into()));
        }
        if self.frames_per_second == 0 {
            return Err(SimError::InvalidSettings("frames_per_second must be at least 1".into()));
        }
        if self.max_attempts == 0 {
            return Err(SimError::InvalidSettings("max_attempts must be at least 1".into()));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.width, self.height)
    }

    pub fn placement(&self) -> Placement {
        Placement::uniform(self.count, self.radius, self.momentum, self.max_attempts)
    }
}
