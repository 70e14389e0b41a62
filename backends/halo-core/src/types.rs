// this_file: backends/halo-core/src/types.rs

//! Core types shared between hosts and the outline generator.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// 3D position or displacement
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color channels with a replaced alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(input: &str) -> crate::Result<Self> {
        crate::utils::parse_color(input)
    }
}

impl Default for Color32 {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Single mesh vertex as seen by the outline effect.
///
/// Only position and color are rewritten; `uv` is carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Color32,
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, color: Color32) -> Self {
        Self {
            position,
            color,
            uv: [0.0, 0.0],
        }
    }

    pub fn with_uv(mut self, uv: [f32; 2]) -> Self {
        self.uv = uv;
        self
    }
}

/// Identity of an ancestor opacity group in the host hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u64);

/// Current opacity of one ancestor group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AncestorOpacity {
    pub id: GroupId,
    /// Opacity multiplier in [0, 1]
    pub opacity: f32,
}

impl AncestorOpacity {
    pub fn new(id: u64, opacity: f32) -> Self {
        Self {
            id: GroupId(id),
            opacity,
        }
    }
}
