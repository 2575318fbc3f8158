//! Bounce Sim - circular bodies bouncing in a bounded 2D plane
//!
//! Core modules:
//! - `sim`: Deterministic simulation (placement, walls, pairwise collisions, frame loop)
//! - `renderer`: Rendering collaborator interface and an in-memory implementation
//! - `settings`: JSON-loadable configuration
//! - `error`: Crate error type

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::Settings;
pub use sim::{Simulation, SimulationState};

/// Simulation configuration constants
pub mod consts {
    /// Display refresh rate requested from the renderer
    pub const FRAME_RATE: u32 = 120;
    /// Velocities are pixels per frame, so one step advances one unit
    pub const FRAME_UNIT: f32 = 1.0;

    /// Bounds dimensions
    pub const DEFAULT_WIDTH: f32 = 600.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Body defaults
    pub const DEFAULT_BODY_COUNT: usize = 30;
    pub const DEFAULT_RADIUS: f32 = 20.0;
    /// Every body starts with this momentum (mass = radius²)
    pub const DEFAULT_MOMENTUM: f32 = 1600.0;
    /// Rejection-sampling attempts per body before placement fails
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

    /// Frame cap for headless runs (5 seconds at 120 fps)
    pub const DEFAULT_HEADLESS_FRAMES: u64 = 600;

    /// Screen row the line simulation is drawn on
    pub const LINE_DISPLAY_ROW: f32 = 100.0;
}
