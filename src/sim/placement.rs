//! Initial non-overlapping placement by rejection sampling
//!
//! Bodies are placed one at a time. Each candidate center is drawn uniformly
//! from the region that keeps the circle inside the bounds and is kept only if
//! it clears every body placed before it. Every body starts with the same
//! momentum, so its speed is `momentum / mass`, and its heading is uniform in
//! `[0, 2π)`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::overlap::{Circle, is_clear_of};
use super::state::{Body, Bounds};
use super::vector::{Position, Vector};
use crate::error::{Result, SimError};

/// Parameters for generating an initial body set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Radius of each body, in placement order
    pub radii: Vec<f32>,
    /// Momentum shared by every body (speed = momentum / radius²)
    pub momentum: f32,
    /// Candidate centers tried per body before giving up
    pub max_attempts: u32,
}

impl Placement {
    /// `count` bodies that all share `radius`
    pub fn uniform(count: usize, radius: f32, momentum: f32, max_attempts: u32) -> Self {
        Self {
            radii: vec![radius; count],
            momentum,
            max_attempts,
        }
    }

    pub fn count(&self) -> usize {
        self.radii.len()
    }

    /// Generate the bodies inside `bounds`
    pub fn generate<R: Rng + ?Sized>(&self, bounds: &Bounds, rng: &mut R) -> Result<Vec<Body>> {
        let requested = self.count();
        let mut placed: Vec<Circle> = Vec::with_capacity(requested);
        let mut bodies = Vec::with_capacity(requested);

        for (id, &radius) in self.radii.iter().enumerate() {
            if !bounds.can_hold(radius) {
                log::warn!("Body {} (radius {}) cannot fit in {}x{}", id, radius, bounds.width, bounds.height);
                return Err(SimError::PlacementInfeasible {
                    placed: id,
                    requested,
                    attempts: 0,
                });
            }

            let circle = place_one(radius, bounds, &placed, self.max_attempts, rng).ok_or_else(|| {
                log::warn!("Gave up placing body {} after {} attempts", id, self.max_attempts);
                SimError::PlacementInfeasible {
                    placed: id,
                    requested,
                    attempts: self.max_attempts,
                }
            })?;
            placed.push(circle);

            let mass = radius * radius;
            let speed = self.momentum / mass;
            let theta = rng.random_range(0.0..std::f32::consts::TAU);
            bodies.push(Body::new(id, circle.center, radius, Vector::from_polar(speed, theta)));
        }

        log::info!("Placed {} bodies in {}x{}", bodies.len(), bounds.width, bounds.height);
        Ok(bodies)
    }
}

/// Sample a clear center for one circle, or `None` once attempts run out
fn place_one<R: Rng + ?Sized>(
    radius: f32,
    bounds: &Bounds,
    placed: &[Circle],
    max_attempts: u32,
    rng: &mut R,
) -> Option<Circle> {
    for attempt in 1..=max_attempts {
        let x = rng.random_range(radius..=bounds.width - radius);
        let y = rng.random_range(radius..=bounds.height - radius);
        let candidate = Circle::new(Position::new(x, y), radius);
        if is_clear_of(candidate, placed) {
            log::debug!("Placed body {} after {} attempt(s)", placed.len(), attempt);
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::overlap::overlaps;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_sparse_placement_succeeds() {
        let bounds = Bounds::new(600.0, 600.0).unwrap();
        let placement = Placement::uniform(30, 20.0, 1600.0, 10_000);
        let mut rng = Pcg32::seed_from_u64(7);
        let bodies = placement.generate(&bounds, &mut rng).unwrap();

        assert_eq!(bodies.len(), 30);
        for (i, a) in bodies.iter().enumerate() {
            assert_eq!(a.id, i);
            assert!(bounds.contains(a.circle()));
            assert!((a.velocity.length() - 4.0).abs() < 1e-4);
            for b in &bodies[i + 1..] {
                assert!(!overlaps(a.circle(), b.circle()));
            }
        }
    }

    #[test]
    fn test_mixed_radii_speeds() {
        let bounds = Bounds::new(400.0, 300.0).unwrap();
        let placement = Placement {
            radii: vec![10.0, 20.0, 40.0],
            momentum: 1600.0,
            max_attempts: 1000,
        };
        let bodies = placement.generate(&bounds, &mut Pcg32::seed_from_u64(1)).unwrap();
        assert!((bodies[0].velocity.length() - 16.0).abs() < 1e-3);
        assert!((bodies[1].velocity.length() - 4.0).abs() < 1e-4);
        assert!((bodies[2].velocity.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let bounds = Bounds::new(600.0, 600.0).unwrap();
        let placement = Placement::uniform(10, 15.0, 1600.0, 1000);
        let a = placement.generate(&bounds, &mut Pcg32::seed_from_u64(99)).unwrap();
        let b = placement.generate(&bounds, &mut Pcg32::seed_from_u64(99)).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.center, y.center);
            assert_eq!(x.velocity, y.velocity);
        }
    }

    #[test]
    fn test_overcrowded_bounds_fail() {
        // A 100x100 box fits at most one radius-40 circle
        let bounds = Bounds::new(100.0, 100.0).unwrap();
        let placement = Placement::uniform(2, 40.0, 1600.0, 500);
        let err = placement.generate(&bounds, &mut Pcg32::seed_from_u64(3)).unwrap_err();
        assert!(matches!(
            err,
            SimError::PlacementInfeasible { placed: 1, requested: 2, attempts: 500 }
        ));
    }

    #[test]
    fn test_body_larger_than_bounds_fails_fast() {
        let bounds = Bounds::new(30.0, 100.0).unwrap();
        let placement = Placement::uniform(1, 20.0, 1600.0, 500);
        let err = placement.generate(&bounds, &mut Pcg32::seed_from_u64(3)).unwrap_err();
        assert!(matches!(err, SimError::PlacementInfeasible { placed: 0, attempts: 0, .. }));
    }
}
