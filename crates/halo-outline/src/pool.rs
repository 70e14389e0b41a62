// this_file: crates/halo-outline/src/pool.rs

//! Pool of reusable vertex buffers with scoped acquisition.

use halo_core::Vertex;
use parking_lot::Mutex;
use std::ops::{Deref, DerefMut};

/// Shared pool of vertex buffers.
///
/// Buffers are handed out through [`PooledVertices`] guards and go back to the
/// pool when the guard drops, keeping their capacity.
#[derive(Debug)]
pub struct VertexPool {
    idle: Mutex<Vec<Vec<Vertex>>>,
    max_idle: usize,
}

impl VertexPool {
    /// Create a pool that keeps at most `max_idle` buffers around.
    pub fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Take an empty buffer from the pool, allocating if none is idle.
    pub fn acquire(&self) -> PooledVertices<'_> {
        let mut buffer = self.idle.lock().pop().unwrap_or_default();
        buffer.clear();
        PooledVertices { pool: self, buffer }
    }

    /// Number of buffers waiting for reuse.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn release(&self, buffer: Vec<Vertex>) {
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(buffer);
        }
    }
}

impl Default for VertexPool {
    fn default() -> Self {
        Self::new(16)
    }
}

/// Buffer borrowed from a [`VertexPool`].
#[derive(Debug)]
pub struct PooledVertices<'a> {
    pool: &'a VertexPool,
    buffer: Vec<Vertex>,
}

impl Deref for PooledVertices<'_> {
    type Target = Vec<Vertex>;

    fn deref(&self) -> &Vec<Vertex> {
        &self.buffer
    }
}

impl DerefMut for PooledVertices<'_> {
    fn deref_mut(&mut self) -> &mut Vec<Vertex> {
        &mut self.buffer
    }
}

impl Drop for PooledVertices<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.buffer));
    }
}
