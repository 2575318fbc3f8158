//! Ball/wall collision detection and response
//!
//! Runs after integration. A body that has crossed an edge is snapped back so
//! it is exactly tangent to that wall and the offending velocity component is
//! inverted. Axes are handled independently, so a body in a corner can bounce
//! on both in the same frame.

use super::state::{Body, Bounds, WallContact};

/// Resolve wall collisions for one body, returning which axes bounced
pub fn collide_walls(body: &mut Body, bounds: &Bounds) -> WallContact {
    let r = body.radius;
    let mut contact = WallContact::default();

    // Right/left wall
    let cx = body.center.x();
    if cx + r > bounds.width {
        body.velocity.0.x = -body.velocity.0.x;
        body.center.0.x = bounds.width - r;
        contact.x = true;
    } else if cx - r < 0.0 {
        body.velocity.0.x = -body.velocity.0.x;
        body.center.0.x = r;
        contact.x = true;
    }

    // Top/bottom wall
    let cy = body.center.y();
    if cy + r > bounds.height {
        body.velocity.0.y = -body.velocity.0.y;
        body.center.0.y = bounds.height - r;
        contact.y = true;
    } else if cy - r < 0.0 {
        body.velocity.0.y = -body.velocity.0.y;
        body.center.0.y = r;
        contact.y = true;
    }

    if contact.any() {
        log::trace!(
            "body {} hit wall (x: {}, y: {}) at ({:.1}, {:.1})",
            body.id,
            contact.x,
            contact.y,
            body.center.x(),
            body.center.y()
        );
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::vector::{Position, Vector};
    use proptest::prelude::*;

    fn bounds() -> Bounds {
        Bounds::new(600.0, 600.0).unwrap()
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut body = Body::new(0, Position::new(640.0, 300.0), 20.0, Vector::new(50.0, 0.0));
        let contact = collide_walls(&mut body, &bounds());
        assert!(contact.x);
        assert!(!contact.y);
        assert_eq!(body.center.x(), 580.0);
        assert_eq!(body.velocity, Vector::new(-50.0, 0.0));
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut body = Body::new(0, Position::new(5.0, 300.0), 20.0, Vector::new(-4.0, 1.0));
        let contact = collide_walls(&mut body, &bounds());
        assert!(contact.x);
        assert_eq!(body.center.x(), 20.0);
        assert_eq!(body.velocity, Vector::new(4.0, 1.0));
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let mut body = Body::new(0, Position::new(595.0, 2.0), 20.0, Vector::new(3.0, -3.0));
        let contact = collide_walls(&mut body, &bounds());
        assert_eq!(contact, WallContact { x: true, y: true });
        assert_eq!(body.center, Position::new(580.0, 20.0));
        assert_eq!(body.velocity, Vector::new(-3.0, 3.0));
    }

    #[test]
    fn test_tangent_is_not_a_bounce() {
        let mut body = Body::new(0, Position::new(580.0, 20.0), 20.0, Vector::new(3.0, -3.0));
        let contact = collide_walls(&mut body, &bounds());
        assert!(!contact.any());
        assert_eq!(body.velocity, Vector::new(3.0, -3.0));
    }

    proptest! {
        #[test]
        fn center_stays_in_bounds(
            x in -200.0f32..800.0,
            y in -200.0f32..800.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            r in 1.0f32..100.0,
        ) {
            let b = bounds();
            let mut body = Body::new(0, Position::new(x, y), r, Vector::new(vx, vy));
            collide_walls(&mut body, &b);
            prop_assert!(body.center.x() >= 0.0 && body.center.x() <= b.width);
            prop_assert!(body.center.y() >= 0.0 && body.center.y() <= b.height);
        }
    }
}
