//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed frame unit only
//! - Seeded RNG only
//! - Stable iteration order (by body id)
//! - No rendering dependencies beyond the `Renderer` trait

pub mod ball;
pub mod line;
pub mod overlap;
pub mod placement;
pub mod simulation;
pub mod state;
pub mod step;
pub mod vector;
pub mod wall;

pub use ball::{ContactMatrix, PairOutcome, bounce, collide_all, collide_pair};
pub use line::{LineBody, LineSettings, LineSimulation, Trajectory};
pub use overlap::{Circle, is_clear_of, overlaps};
pub use placement::Placement;
pub use simulation::{RunSummary, Simulation};
pub use state::{Body, Bounds, SimulationState, WallContact};
pub use step::{SimEvent, StepReport, step};
pub use vector::{Position, Vector, add, distance, dot, project, scale, subtract};
pub use wall::collide_walls;
