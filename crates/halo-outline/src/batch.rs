// this_file: crates/halo-outline/src/batch.rs

//! Batch outline expansion for many independent meshes.

use crate::compositor::composite_alpha;
use crate::expand::expand_into;
use crate::pool::{PooledVertices, VertexPool};
use crate::ring::OffsetRing;
use halo_core::{AncestorOpacity, HaloError, OutlineConfig, Result, Vertex};
use rayon::iter::IndexedParallelIterator;
use rayon::prelude::*;

/// Mesh to be outlined in a batch.
#[derive(Debug, Clone)]
pub struct BatchItem {
    /// Outline settings
    pub config: OutlineConfig,
    /// Source triangle list
    pub vertices: Vec<Vertex>,
    /// Alpha of the graphic's base color
    pub base_alpha: f32,
    /// Ancestor opacity groups
    pub ancestors: Vec<AncestorOpacity>,
}

impl BatchItem {
    pub fn new(config: OutlineConfig, vertices: Vec<Vertex>) -> Self {
        Self {
            config,
            vertices,
            base_alpha: 1.0,
            ancestors: Vec::new(),
        }
    }
}

/// Result from batch expansion.
///
/// The expanded stream lives in a buffer borrowed from the outliner's pool and
/// goes back to it when the result is dropped.
#[derive(Debug)]
pub struct BatchResult<'a> {
    /// Index of the item in the batch
    pub index: usize,
    /// Expanded stream or configuration error
    pub result: Result<PooledVertices<'a>>,
}

/// Expands batches of meshes in parallel, sharing scratch buffers.
#[derive(Debug, Default)]
pub struct BatchOutliner {
    pool: VertexPool,
}

impl BatchOutliner {
    /// Create a batch outliner with a default-sized buffer pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a batch outliner drawing buffers from `pool`.
    pub fn with_pool(pool: VertexPool) -> Self {
        Self { pool }
    }

    /// Pool backing the expanded streams.
    pub fn pool(&self) -> &VertexPool {
        &self.pool
    }

    /// Expand a batch of items in parallel.
    pub fn outline_batch(&self, items: Vec<BatchItem>) -> Vec<BatchResult<'_>> {
        items
            .into_par_iter()
            .enumerate()
            .map_init(OffsetRing::new, |ring, (index, item)| BatchResult {
                index,
                result: self.outline_with_ring(ring, &item),
            })
            .collect()
    }

    /// Expand a batch on a dedicated pool with `num_threads` workers.
    pub fn outline_batch_with_threads(
        &self,
        items: Vec<BatchItem>,
        num_threads: usize,
    ) -> Result<Vec<BatchResult<'_>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(HaloError::thread_pool)?;

        Ok(pool.install(|| self.outline_batch(items)))
    }

    /// Expand items from an indexed parallel iterator.
    pub fn outline_streaming<'a, I>(
        &'a self,
        items: I,
    ) -> impl ParallelIterator<Item = BatchResult<'a>> + 'a
    where
        I: IndexedParallelIterator<Item = BatchItem> + 'a,
    {
        items
            .enumerate()
            .map_init(OffsetRing::new, move |ring, (index, item)| BatchResult {
                index,
                result: self.outline_with_ring(ring, &item),
            })
    }

    /// Expand one item into a pooled buffer.
    pub fn outline_single(&self, item: &BatchItem) -> Result<PooledVertices<'_>> {
        self.outline_with_ring(&mut OffsetRing::new(), item)
    }

    fn outline_with_ring(
        &self,
        ring: &mut OffsetRing,
        item: &BatchItem,
    ) -> Result<PooledVertices<'_>> {
        item.config.validate()?;

        ring.ensure(item.config.distance, item.config.outline_count as usize);

        let ancestor_alpha: f32 = item.ancestors.iter().map(|group| group.opacity).product();
        let alpha = composite_alpha(
            item.config.color.a,
            item.base_alpha,
            ancestor_alpha,
            item.config.alpha_count,
        );

        let mut scratch = self.pool.acquire();
        expand_into(
            &item.vertices,
            ring.offsets(),
            item.config.color.with_alpha(alpha),
            &mut scratch,
        );
        Ok(scratch)
    }
}
