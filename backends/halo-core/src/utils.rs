// this_file: backends/halo-core/src/utils.rs

//! Utility functions for mesh inspection and color parsing.

use crate::types::{Color32, Vertex};
use crate::{HaloError, Result};

/// Axis-aligned 2D bounds of a vertex stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const EMPTY: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };
}

/// Calculate the XY bounds of a vertex stream
pub fn mesh_bounds(vertices: &[Vertex]) -> Bounds {
    if vertices.is_empty() {
        return Bounds::EMPTY;
    }

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;

    for vertex in vertices {
        min_x = min_x.min(vertex.position.x);
        min_y = min_y.min(vertex.position.y);
        max_x = max_x.max(vertex.position.x);
        max_y = max_y.max(vertex.position.y);
    }

    Bounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Parse hex color string to RGBA
pub fn parse_color(color: &str) -> Result<Color32> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| HaloError::invalid_color(color, "expected leading '#'"))?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HaloError::invalid_color(color, "expected only hex digits"));
    }

    let channel = |range: std::ops::Range<usize>| -> Result<u8> {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| HaloError::invalid_color(color, e.to_string()))
    };

    match hex.len() {
        6 => Ok(Color32::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Ok(Color32::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        len => Err(HaloError::invalid_color(
            color,
            format!("expected 6 or 8 hex digits, got {len}"),
        )),
    }
}
