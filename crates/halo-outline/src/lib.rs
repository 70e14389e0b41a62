// this_file: crates/halo-outline/src/lib.rs

//! Outline geometry synthesis and alpha compositing for halo.

pub mod batch;
pub mod compositor;
pub mod expand;
pub mod generator;
pub mod pool;
pub mod ring;

pub use batch::{BatchItem, BatchOutliner, BatchResult};
pub use compositor::{composite_alpha, AlphaCompositor, AncestorOpacitySnapshot};
pub use expand::{expand_into, expanded_len};
pub use generator::{OutlineGenerator, RebuildOutcome};
pub use pool::{PooledVertices, VertexPool};
pub use ring::OffsetRing;
