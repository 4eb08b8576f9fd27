//! Geometric primitives for rasterization.
//!
//! World-space vertices are `f64` triples; screen-space points are signed
//! integer pixel coordinates (origin top-left, x right, y down).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A 3D vector with double-precision components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z, towards the viewer.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self * (1.0 / len))
        } else {
            None
        }
    }

    /// Rotate around the +Y axis by `angle` radians (right-handed).
    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            cos * self.x + sin * self.z,
            self.y,
            -sin * self.x + cos * self.z,
        )
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A pixel position in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ScreenPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new screen point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for ScreenPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for ScreenPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Inclusive axis-aligned pixel box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Top-left corner (inclusive).
    pub min: ScreenPoint,
    /// Bottom-right corner (inclusive).
    pub max: ScreenPoint,
}

impl BoundingBox {
    /// Smallest box containing all three points.
    #[must_use]
    pub fn of_triangle(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint) -> Self {
        Self {
            min: ScreenPoint::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            max: ScreenPoint::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        }
    }

    /// Whether a point lies inside the box (edges included).
    #[must_use]
    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Box width in pixels (0 when inverted).
    #[must_use]
    pub fn width(&self) -> u32 {
        (i64::from(self.max.x) - i64::from(self.min.x) + 1).max(0) as u32
    }

    /// Box height in pixels (0 when inverted).
    #[must_use]
    pub fn height(&self) -> u32 {
        (i64::from(self.max.y) - i64::from(self.min.y) + 1).max(0) as u32
    }
}
