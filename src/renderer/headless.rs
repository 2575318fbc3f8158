//! In-memory renderer for the CLI and tests

use std::time::{Duration, Instant};

use super::{BodyHandle, Renderer};
use crate::sim::Position;

#[derive(Debug, Clone)]
struct Shape {
    center: Position,
    radius: f32,
    fill: [u8; 3],
}

/// Renderer that keeps shapes in memory and "closes" after a frame cap
#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    shapes: Vec<Shape>,
    frames: u64,
    max_frames: Option<u64>,
    realtime: bool,
    last_frame: Option<Instant>,
    closed: bool,
}

impl HeadlessRenderer {
    /// Runs until `max_frames` frames have been paced (forever if `None`)
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            shapes: Vec::new(),
            frames: 0,
            max_frames,
            realtime: false,
            last_frame: None,
            closed: max_frames == Some(0),
        }
    }

    /// Sleep out the remainder of each frame interval in `pace`
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Frames paced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fill(&self, handle: BodyHandle) -> Option<[u8; 3]> {
        self.shapes.get(handle.0).map(|s| s.fill)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Simulate the user closing the window
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl Renderer for HeadlessRenderer {
    fn create_body(&mut self, center: Position, radius: f32) -> BodyHandle {
        self.shapes.push(Shape {
            center,
            radius,
            fill: [255, 255, 255],
        });
        BodyHandle(self.shapes.len() - 1)
    }

    fn set_position(&mut self, handle: BodyHandle, center: Position) {
        if let Some(shape) = self.shapes.get_mut(handle.0) {
            shape.center = center;
        }
    }

    fn center(&self, handle: BodyHandle) -> Option<Position> {
        self.shapes.get(handle.0).map(|s| s.center)
    }

    fn radius(&self, handle: BodyHandle) -> Option<f32> {
        self.shapes.get(handle.0).map(|s| s.radius)
    }

    fn set_fill(&mut self, handle: BodyHandle, rgb: [u8; 3]) {
        if let Some(shape) = self.shapes.get_mut(handle.0) {
            shape.fill = rgb;
        }
    }

    fn is_open(&self) -> bool {
        !self.closed
    }

    fn pace(&mut self, frames_per_second: u32) {
        if self.realtime && frames_per_second > 0 {
            let interval = Duration::from_secs_f64(1.0 / frames_per_second as f64);
            if let Some(last) = self.last_frame {
                let elapsed = last.elapsed();
                if elapsed < interval {
                    std::thread::sleep(interval - elapsed);
                }
            }
            self.last_frame = Some(Instant::now());
        }

        self.frames += 1;
        if self.max_frames.is_some_and(|max| self.frames >= max) {
            self.closed = true;
        }
    }
}
