//! Rendering collaborator interface
//!
//! The simulation never draws anything itself. It talks to a [`Renderer`]
//! that owns the window, the shapes and frame pacing. [`HeadlessRenderer`]
//! keeps everything in memory for the CLI and for tests.

pub mod color;
pub mod headless;

pub use color::random_fill;
pub use headless::HeadlessRenderer;

use crate::sim::Position;

/// Opaque handle to a shape owned by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// Window, shape and pacing primitives the simulation loop drives
pub trait Renderer {
    /// Create and show a circle
    fn create_body(&mut self, center: Position, radius: f32) -> BodyHandle;

    /// Move a circle so its center sits at `center`
    fn set_position(&mut self, handle: BodyHandle, center: Position);

    fn center(&self, handle: BodyHandle) -> Option<Position>;

    fn radius(&self, handle: BodyHandle) -> Option<f32>;

    /// Cosmetic fill color; no effect on the simulation
    fn set_fill(&mut self, _handle: BodyHandle, _rgb: [u8; 3]) {}

    fn is_open(&self) -> bool;

    fn is_closed(&self) -> bool {
        !self.is_open()
    }

    /// Refresh the display and block until the next frame boundary
    fn pace(&mut self, frames_per_second: u32);
}
