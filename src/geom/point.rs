//! 2D point value type.
//!
//! Equality is geometric (component-wise), never identity-based. Points can
//! key persistent sets: hashing goes through the raw bit patterns, which is
//! consistent with component equality for the finite coordinates the engine
//! works with.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An immutable 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point from its coordinates.
    ///
    /// Coordinates must be finite; NaN would break the equality/hash
    /// contract the map relies on.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        debug_assert!(x.is_finite() && y.is_finite(), "non-finite coordinate");
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn dist(self, other: Point) -> f32 {
        self.dist_sq(other).sqrt()
    }

    /// Squared Euclidean distance (cheaper for comparisons).
    #[must_use]
    pub fn dist_sq(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Angle of the direction from `self` toward `other`, in radians,
    /// measured counter-clockwise from the positive x-axis.
    #[must_use]
    pub fn angle_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    #[must_use]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    /// 2D cross product of `self - origin` and `other - origin`.
    ///
    /// Positive when `other` is counter-clockwise of `self` around `origin`.
    #[must_use]
    pub fn cross(origin: Point, a: Point, b: Point) -> f32 {
        (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
