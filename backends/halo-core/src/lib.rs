// this_file: backends/halo-core/src/lib.rs

//! Core types, configuration and host traits for the halo outline effect.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod traits;
pub mod types;
pub mod utils;

pub use config::OutlineConfig;
pub use diagnostics::RebuildDiagnostics;
pub use error::HaloError;
pub use traits::OutlineHost;
pub use types::{AncestorOpacity, Color32, GroupId, Vec3, Vertex};

/// Result type for halo operations
pub type Result<T> = std::result::Result<T, HaloError>;
