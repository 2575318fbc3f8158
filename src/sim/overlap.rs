//! Circle overlap tests shared by placement and ball collision detection

use serde::{Deserialize, Serialize};

use super::vector::{Position, distance};

/// A circle in the simulation plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Position,
    pub radius: f32,
}

impl Circle {
    #[inline]
    pub const fn new(center: Position, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// True if the boundaries of `a` and `b` touch or intersect
///
/// Touching counts: the test is `distance <= r_a + r_b`.
#[inline]
pub fn overlaps(a: Circle, b: Circle) -> bool {
    distance(a.center, b.center) <= a.radius + b.radius
}

/// True if `candidate` overlaps none of `placed`
pub fn is_clear_of(candidate: Circle, placed: &[Circle]) -> bool {
    placed.iter().all(|&other| !overlaps(candidate, other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn circle() -> impl Strategy<Value = Circle> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.1f32..100.0)
            .prop_map(|(x, y, r)| Circle::new(Position::new(x, y), r))
    }

    #[test]
    fn test_touching_counts_as_overlap() {
        let a = Circle::new(Position::new(0.0, 0.0), 10.0);
        let b = Circle::new(Position::new(20.0, 0.0), 10.0);
        assert!(overlaps(a, b));
    }

    #[test]
    fn test_separated_circles() {
        let a = Circle::new(Position::new(0.0, 0.0), 10.0);
        let b = Circle::new(Position::new(20.5, 0.0), 10.0);
        assert!(!overlaps(a, b));
    }

    #[test]
    fn test_is_clear_of() {
        let placed = [
            Circle::new(Position::new(0.0, 0.0), 5.0),
            Circle::new(Position::new(50.0, 0.0), 5.0),
        ];
        assert!(is_clear_of(Circle::new(Position::new(25.0, 0.0), 5.0), &placed));
        assert!(!is_clear_of(Circle::new(Position::new(45.0, 0.0), 5.0), &placed));
        assert!(is_clear_of(Circle::new(Position::new(45.0, 0.0), 5.0), &[]));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in circle(), b in circle()) {
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn circle_overlaps_itself(a in circle()) {
            prop_assert!(overlaps(a, a));
        }
    }
}
