//! One simulation frame
//!
//! Order matters: every body is integrated, then every wall collision is
//! resolved, and only then are pairs checked. Ball collisions therefore see
//! post-wall positions and velocities.

use serde::{Deserialize, Serialize};

use super::ball::collide_all;
use super::state::{SimulationState, WallContact};
use super::wall::collide_walls;
use crate::error::Result;

/// Something that happened during a step, for observers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A body bounced off one or both wall axes
    WallBounce { body: usize, x: bool, y: bool },
    /// A pair started a new contact episode and had its velocities exchanged
    BallContact { first: usize, second: usize },
}

/// Events produced by one call to [`step`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Frame number after this step
    pub frame: u64,
    pub events: Vec<SimEvent>,
}

impl StepReport {
    pub fn wall_bounces(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::WallBounce { .. }))
            .count()
    }

    pub fn ball_contacts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SimEvent::BallContact { .. }))
            .count()
    }
}

/// Advance the state by one frame of `frame_unit` time
///
/// A pair with coincident centers aborts the step with
/// [`SimError::CoincidentCenters`](crate::SimError::CoincidentCenters); bodies
/// already processed keep their updates.
pub fn step(state: &mut SimulationState, frame_unit: f32) -> Result<StepReport> {
    let mut events = Vec::new();

    for body in &mut state.bodies {
        body.integrate(frame_unit);
    }

    for (body, contact) in state.bodies.iter_mut().zip(state.wall_contacts.iter_mut()) {
        *contact = collide_walls(body, &state.bounds);
        let WallContact { x, y } = *contact;
        if x || y {
            events.push(SimEvent::WallBounce { body: body.id, x, y });
        }
    }

    for (first, second) in collide_all(&mut state.bodies, &mut state.contacts)? {
        events.push(SimEvent::BallContact { first, second });
    }

    state.frame += 1;
    Ok(StepReport {
        frame: state.frame,
        events,
    })
}
