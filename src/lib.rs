// this_file: src/lib.rs

//! Fading multi-layer outline effect for UI text and graphics meshes.
//!
//! The effect surrounds a mesh with shifted, recolored copies placed on a ring
//! of offsets and fades them with the opacity of the graphic and its ancestor
//! groups. A rendering host plugs in through [`OutlineHost`]; [`MemoryHost`]
//! runs the effect without any UI framework.
//!
//! ```
//! use halo::{Color32, MemoryHost, OutlineConfig, OutlineGenerator, Vec3, Vertex};
//!
//! let triangle = vec![
//!     Vertex::new(Vec3::new(0.0, 0.0, 0.0), Color32::WHITE),
//!     Vertex::new(Vec3::new(1.0, 0.0, 0.0), Color32::WHITE),
//!     Vertex::new(Vec3::new(0.0, 1.0, 0.0), Color32::WHITE),
//! ];
//! let mut host = MemoryHost::new(triangle);
//! let mut outline = OutlineGenerator::new(OutlineConfig::default()).unwrap();
//!
//! outline.update(&mut host);
//! outline.modify_mesh(&mut host);
//! assert_eq!(host.drawn().len(), 3 * (8 + 1));
//! ```

pub use halo_core::{
    config, utils, AncestorOpacity, Color32, GroupId, HaloError, OutlineConfig, OutlineHost,
    RebuildDiagnostics, Result, Vec3, Vertex,
};
pub use halo_memory::MemoryHost;
pub use halo_outline::{
    composite_alpha, expand_into, expanded_len, AlphaCompositor, AncestorOpacitySnapshot,
    BatchItem, BatchOutliner, BatchResult, OffsetRing, OutlineGenerator, RebuildOutcome,
    VertexPool,
};
