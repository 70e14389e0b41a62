// this_file: backends/halo-core/src/config.rs

//! Outline configuration and its bounds.

use crate::types::Color32;
use crate::{HaloError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Supported number of outline copies
pub const OUTLINE_COUNT_RANGE: RangeInclusive<u32> = 3..=100;
/// Supported alpha exponent
pub const ALPHA_COUNT_RANGE: RangeInclusive<u32> = 2..=10;

/// User-facing outline settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Radius of the offset ring
    pub distance: f32,
    /// Number of shifted copies placed around the mesh
    pub outline_count: u32,
    /// Exponent applied to the composited alpha
    pub alpha_count: u32,
    /// Outline color; its alpha is composited with the graphic and ancestors
    pub color: Color32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            distance: 4.0,
            outline_count: 8,
            alpha_count: 2,
            color: Color32::WHITE,
        }
    }
}

impl OutlineConfig {
    /// Check every field against its documented bounds.
    pub fn validate(&self) -> Result<()> {
        validate_distance(self.distance)?;
        validate_outline_count(self.outline_count)?;
        validate_alpha_count(self.alpha_count)
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub fn validate_distance(value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HaloError::DistanceOutOfRange { value })
    }
}

pub fn validate_outline_count(value: u32) -> Result<()> {
    if OUTLINE_COUNT_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(HaloError::OutlineCountOutOfRange {
            value,
            min: *OUTLINE_COUNT_RANGE.start(),
            max: *OUTLINE_COUNT_RANGE.end(),
        })
    }
}

pub fn validate_alpha_count(value: u32) -> Result<()> {
    if ALPHA_COUNT_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(HaloError::AlphaCountOutOfRange {
            value,
            min: *ALPHA_COUNT_RANGE.start(),
            max: *ALPHA_COUNT_RANGE.end(),
        })
    }
}
