// this_file: backends/halo-core/src/error.rs

//! Error types for the halo outline effect.

use thiserror::Error;

/// Main error type for halo operations.
#[derive(Error, Debug)]
pub enum HaloError {
    /// Outline distance is negative or not a finite number
    #[error("Outline distance must be a finite value >= 0, got {value}")]
    DistanceOutOfRange { value: f32 },

    /// Outline copy count outside the supported range
    #[error("Outline count {value} not in [{min}, {max}]")]
    OutlineCountOutOfRange { value: u32, min: u32, max: u32 },

    /// Alpha exponent outside the supported range
    #[error("Alpha count {value} not in [{min}, {max}]")]
    AlphaCountOutOfRange { value: u32, min: u32, max: u32 },

    /// Color string could not be parsed
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl HaloError {
    pub fn invalid_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn thread_pool(reason: impl std::fmt::Display) -> Self {
        Self::ThreadPool(reason.to_string())
    }
}
