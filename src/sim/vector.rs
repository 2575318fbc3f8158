//! Plane geometry primitives
//!
//! Positions and vectors are kept as separate types so a velocity can never be
//! used where a location is expected. The only bridge between them is
//! subtraction (`Position - Position = Vector`) and translation
//! (`Position + Vector = Position`).

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// A location in the simulation plane (pixels, origin at the bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub Vec2);

/// A displacement or velocity in the simulation plane
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(pub Vec2);

impl Position {
    pub const ORIGIN: Self = Self(Vec2::ZERO);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.0.y
    }
}

impl Vector {
    pub const ZERO: Self = Self(Vec2::ZERO);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Vector of the given length pointing at `theta` radians from +x
    #[inline]
    pub fn from_polar(length: f32, theta: f32) -> Self {
        Self(Vec2::new(length * theta.cos(), length * theta.sin()))
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.0.length()
    }
}

impl Sub for Position {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Position) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Add<Vector> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Vector) -> Position {
        Position(self.0 + rhs.0)
    }
}

impl AddAssign<Vector> for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Vector) {
        self.0 += rhs.0;
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector(self.0 + rhs.0)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector(self.0 - rhs.0)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f32) -> Vector {
        Vector(self.0 * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector(-self.0)
    }
}

/// Euclidean distance between two positions
#[inline]
pub fn distance(p1: Position, p2: Position) -> f32 {
    (p1 - p2).length()
}

/// Dot product of two vectors
#[inline]
pub fn dot(v1: Vector, v2: Vector) -> f32 {
    v1.0.dot(v2.0)
}

/// Project `v` onto `onto`
///
/// Fails with [`SimError::ZeroProjection`] when `onto` has zero length.
pub fn project(v: Vector, onto: Vector) -> Result<Vector> {
    let denom = dot(onto, onto);
    if denom == 0.0 {
        return Err(SimError::ZeroProjection);
    }
    Ok(onto * (dot(v, onto) / denom))
}

#[inline]
pub fn add(v1: Vector, v2: Vector) -> Vector {
    v1 + v2
}

/// Subtracts `v2` from `v1`
#[inline]
pub fn subtract(v1: Vector, v2: Vector) -> Vector {
    v1 - v2
}

#[inline]
pub fn scale(v: Vector, s: f32) -> Vector {
    v * s
}
