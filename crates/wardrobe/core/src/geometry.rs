//! Minimal 2D geometry shared by items, zones and the region oracle.
use std::fmt;
use std::ops::{Add, Sub};

/// World-space point or displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Position and uniform scale of a garment sprite.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec2,
    pub scale: f32,
}

impl Transform {
    pub const fn new(position: Vec2, scale: f32) -> Self {
        Self { position, scale }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 1.0)
    }
}

/// Axis-aligned rectangle described by its center and half extents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Bounds {
    pub const fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Bounds of a sprite of `size` (full width/height) drawn with `transform`.
    pub fn from_size(transform: Transform, size: Vec2) -> Self {
        Self::new(transform.position, size.scaled(0.5 * transform.scale))
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Area of the intersection with `other`; zero when they do not touch.
    pub fn overlap_area(&self, other: &Bounds) -> f32 {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        let width = a_max.x.min(b_max.x) - a_min.x.max(b_min.x);
        let height = a_max.y.min(b_max.y) - a_min.y.max(b_min.y);
        if width <= 0.0 || height <= 0.0 {
            0.0
        } else {
            width * height
        }
    }
}
