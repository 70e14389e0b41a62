// this_file: crates/halo-outline/src/ring.rs

//! Cached ring of displacement vectors used to place outline copies.

use halo_core::Vec3;
use log::trace;
use std::f32::consts::PI;

/// Evenly spaced offsets on a circle of radius `distance`.
///
/// The i-th offset sits at angle `π · (1 + 2i) / count`, half a sector away
/// from the positive x-axis.
#[derive(Debug, Clone, Default)]
pub struct OffsetRing {
    distance: Option<f32>,
    offsets: Vec<Vec3>,
}

impl OffsetRing {
    /// Create an empty ring; the first `ensure` computes the offsets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Angle of the `index`-th offset in a ring of `count`.
    pub fn angle(index: usize, count: usize) -> f32 {
        PI * (1 + index * 2) as f32 / count as f32
    }

    /// Make sure the ring matches `distance` and `count`.
    ///
    /// Returns `true` if the offsets were recomputed, `false` on a cache hit.
    pub fn ensure(&mut self, distance: f32, count: usize) -> bool {
        if self.distance == Some(distance) && self.offsets.len() == count {
            return false;
        }

        self.offsets.clear();
        self.offsets.extend((0..count).map(|i| {
            let angle = Self::angle(i, count);
            Vec3::new(angle.cos() * distance, angle.sin() * distance, 0.0)
        }));
        self.distance = Some(distance);

        trace!(target: "halo::outline", "offset ring recomputed: distance={distance} count={count}");
        true
    }

    /// Offsets from the last recomputation, empty before the first.
    pub fn offsets(&self) -> &[Vec3] {
        &self.offsets
    }

    /// Distance the ring was last computed for.
    pub fn distance(&self) -> Option<f32> {
        self.distance
    }

    /// Number of cached offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
