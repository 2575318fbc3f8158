//! Ball/ball collision detection and response
//!
//! Each unordered pair is checked once per frame. The first frame of a new
//! overlap applies the bounce and arms a per-pair flag; while the pair stays
//! in contact nothing further happens, and the flag clears on the first frame
//! they are apart again. That keeps touching bodies from being re-bounced
//! every frame.
//!
//! The bounce assumes equal masses. Bodies of different radii still exchange
//! the full along-axis relative velocity, which is physically wrong but is
//! the intended response for this engine.

use super::overlap::overlaps;
use super::state::Body;
use super::vector::{Vector, project};
use crate::error::{Result, SimError};

/// Per-pair contact flags for `i < j`, stored as a packed upper triangle
#[derive(Debug, Clone, Default)]
pub struct ContactMatrix {
    n: usize,
    flags: Vec<bool>,
}

impl ContactMatrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            flags: vec![false; n * n.saturating_sub(1) / 2],
        }
    }

    /// Number of bodies the matrix covers
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    fn index(&self, i: usize, j: usize) -> usize {
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        debug_assert!(i != j && j < self.n);
        // Row i starts after rows 0..i, each holding n-1-k entries
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }

    /// Whether the pair is mid-episode (bounce already applied)
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.flags[self.index(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        let idx = self.index(i, j);
        self.flags[idx] = value;
    }

    /// Number of pairs currently flagged
    pub fn active(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }
}

/// Equal-mass elastic bounce along the line of centers
///
/// Returns the new `(v_i, v_j)`. Does not check that the bodies touch.
pub fn bounce(bi: &Body, bj: &Body) -> Result<(Vector, Vector)> {
    let dv = bi.velocity - bj.velocity;
    let dc = bi.center - bj.center;
    let delta = project(dv, dc).map_err(|e| match e {
        SimError::ZeroProjection => SimError::CoincidentCenters {
            first: bi.id,
            second: bj.id,
        },
        other => other,
    })?;
    Ok((bi.velocity - delta, bj.velocity + delta))
}

/// What happened to a pair this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Not touching; flag cleared
    Apart,
    /// New contact episode; velocities were recomputed
    Bounced,
    /// Still touching from an earlier frame; nothing changed
    Resting,
}

/// Check and resolve one pair `(i, j)`, `i < j`
pub fn collide_pair(
    bodies: &mut [Body],
    contacts: &mut ContactMatrix,
    i: usize,
    j: usize,
) -> Result<PairOutcome> {
    if !overlaps(bodies[i].circle(), bodies[j].circle()) {
        contacts.set(i, j, false);
        return Ok(PairOutcome::Apart);
    }
    if contacts.get(i, j) {
        return Ok(PairOutcome::Resting);
    }

    contacts.set(i, j, true);
    let (vi, vj) = bounce(&bodies[i], &bodies[j])?;
    bodies[i].velocity = vi;
    bodies[j].velocity = vj;
    log::trace!("bodies {} and {} collided", bodies[i].id, bodies[j].id);
    Ok(PairOutcome::Bounced)
}

/// Run the pair pass over every unordered pair, returning the pairs that bounced
pub fn collide_all(bodies: &mut [Body], contacts: &mut ContactMatrix) -> Result<Vec<(usize, usize)>> {
    let n = bodies.len();
    let mut bounced = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if collide_pair(bodies, contacts, i, j)? == PairOutcome::Bounced {
                bounced.push((i, j));
            }
        }
    }
    Ok(bounced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::vector::Position;

    fn head_on() -> Vec<Body> {
        vec![
            Body::new(0, Position::new(100.0, 100.0), 10.0, Vector::new(1.0, 0.0)),
            Body::new(1, Position::new(120.0, 100.0), 10.0, Vector::new(-1.0, 0.0)),
        ]
    }

    #[test]
    fn test_contact_matrix_indexing() {
        let mut m = ContactMatrix::new(4);
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        for (k, &(i, j)) in pairs.iter().enumerate() {
            assert_eq!(m.index(i, j), k);
            assert_eq!(m.index(j, i), k);
        }
        m.set(3, 1, true);
        assert!(m.get(1, 3));
        assert_eq!(m.active(), 1);
    }

    #[test]
    fn test_contact_matrix_small() {
        assert!(ContactMatrix::new(0).is_empty());
        assert_eq!(ContactMatrix::new(1).active(), 0);
    }

    #[test]
    fn test_head_on_exchange() {
        let bodies = head_on();
        let (vi, vj) = bounce(&bodies[0], &bodies[1]).unwrap();
        assert_eq!(vi, Vector::new(-1.0, 0.0));
        assert_eq!(vj, Vector::new(1.0, 0.0));
    }

    #[test]
    fn test_glancing_keeps_tangential_component() {
        let bodies = vec![
            Body::new(0, Position::new(0.0, 0.0), 10.0, Vector::new(2.0, 3.0)),
            Body::new(1, Position::new(20.0, 0.0), 10.0, Vector::ZERO),
        ];
        let (vi, vj) = bounce(&bodies[0], &bodies[1]).unwrap();
        assert_eq!(vi, Vector::new(0.0, 3.0));
        assert_eq!(vj, Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_bounce_conserves_momentum_for_equal_masses() {
        let bodies = vec![
            Body::new(0, Position::new(10.0, 10.0), 5.0, Vector::new(3.0, -1.0)),
            Body::new(1, Position::new(16.0, 18.0), 5.0, Vector::new(-2.0, 0.5)),
        ];
        let (vi, vj) = bounce(&bodies[0], &bodies[1]).unwrap();
        let before = bodies[0].velocity + bodies[1].velocity;
        let after = vi + vj;
        assert!((before.0 - after.0).length() < 1e-5);
    }

    #[test]
    fn test_coincident_centers_error() {
        let bodies = vec![
            Body::new(3, Position::new(50.0, 50.0), 5.0, Vector::new(1.0, 0.0)),
            Body::new(7, Position::new(50.0, 50.0), 5.0, Vector::ZERO),
        ];
        let err = bounce(&bodies[0], &bodies[1]).unwrap_err();
        assert!(matches!(err, SimError::CoincidentCenters { first: 3, second: 7 }));
    }

    #[test]
    fn test_single_bounce_per_episode() {
        let mut bodies = head_on();
        let mut contacts = ContactMatrix::new(2);

        // Keep the pair overlapping for five frames regardless of velocity
        let mut recomputed = 0;
        for _ in 0..5 {
            bodies[0].center = Position::new(100.0, 100.0);
            bodies[1].center = Position::new(116.0, 100.0);
            if collide_pair(&mut bodies, &mut contacts, 0, 1).unwrap() == PairOutcome::Bounced {
                recomputed += 1;
            }
            assert!(contacts.get(0, 1));
        }
        assert_eq!(recomputed, 1);
        assert_eq!(bodies[0].velocity, Vector::new(-1.0, 0.0));
        assert_eq!(bodies[1].velocity, Vector::new(1.0, 0.0));

        // Separation clears the flag on the first apart frame
        bodies[1].center = Position::new(200.0, 100.0);
        let outcome = collide_pair(&mut bodies, &mut contacts, 0, 1).unwrap();
        assert_eq!(outcome, PairOutcome::Apart);
        assert!(!contacts.get(0, 1));

        // A new episode bounces again
        bodies[1].center = Position::new(110.0, 100.0);
        let outcome = collide_pair(&mut bodies, &mut contacts, 0, 1).unwrap();
        assert_eq!(outcome, PairOutcome::Bounced);
    }

    #[test]
    fn test_collide_all_reports_bounced_pairs() {
        let mut bodies = head_on();
        bodies.push(Body::new(2, Position::new(400.0, 400.0), 10.0, Vector::ZERO));
        let mut contacts = ContactMatrix::new(3);
        let bounced = collide_all(&mut bodies, &mut contacts).unwrap();
        assert_eq!(bounced, vec![(0, 1)]);
        assert!(collide_all(&mut bodies, &mut contacts).unwrap().is_empty());
    }
}
