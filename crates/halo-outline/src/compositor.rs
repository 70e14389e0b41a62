// this_file: crates/halo-outline/src/compositor.rs

//! Ancestor opacity tracking and effective outline alpha.

use halo_core::{AncestorOpacity, Color32, GroupId};
use log::trace;

/// Last observed ancestor opacity groups and their product.
///
/// The groups are kept exactly as the host reported them, in order. A group
/// listed twice contributes twice to the product.
#[derive(Debug, Clone)]
pub struct AncestorOpacitySnapshot {
    groups: Vec<AncestorOpacity>,
    product: f32,
}

impl Default for AncestorOpacitySnapshot {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            product: 1.0,
        }
    }
}

impl AncestorOpacitySnapshot {
    /// Whether `groups` disagrees with the cached state.
    ///
    /// A different group count, identity or opacity at any position counts as
    /// a change.
    pub fn is_stale(&self, groups: &[AncestorOpacity]) -> bool {
        self.groups.as_slice() != groups
    }

    /// Replace the cached state with `groups` and recompute the product.
    pub fn rebuild(&mut self, groups: &[AncestorOpacity]) {
        self.groups.clear();
        self.groups.extend_from_slice(groups);
        self.product = groups.iter().fold(1.0, |product, group| product * group.opacity);
    }

    /// Product of all cached opacities, 1.0 with no ancestors.
    pub fn product(&self) -> f32 {
        self.product
    }

    /// Number of cached group entries.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Cached opacity of the first entry for `id`.
    pub fn opacity(&self, id: GroupId) -> Option<f32> {
        self.groups
            .iter()
            .find(|group| group.id == id)
            .map(|group| group.opacity)
    }
}

/// Derives the outline color from the configured color and the opacity chain.
#[derive(Debug, Clone, Default)]
pub struct AlphaCompositor {
    snapshot: AncestorOpacitySnapshot,
}

impl AlphaCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the snapshot if `groups` changed; returns whether it did.
    pub fn refresh_if_stale(&mut self, groups: &[AncestorOpacity]) -> bool {
        if !self.snapshot.is_stale(groups) {
            return false;
        }
        self.snapshot.rebuild(groups);
        trace!(
            target: "halo::outline",
            "ancestor opacity refreshed: groups={} product={:.4}",
            self.snapshot.len(),
            self.snapshot.product()
        );
        true
    }

    /// Cached product of ancestor opacities.
    pub fn ancestor_alpha(&self) -> f32 {
        self.snapshot.product()
    }

    pub fn snapshot(&self) -> &AncestorOpacitySnapshot {
        &self.snapshot
    }

    /// Outline color with its alpha composited; RGB pass through.
    pub fn outline_color(&self, color: Color32, base_alpha: f32, alpha_count: u32) -> Color32 {
        color.with_alpha(composite_alpha(
            color.a,
            base_alpha,
            self.ancestor_alpha(),
            alpha_count,
        ))
    }
}

/// Combine outline, graphic and ancestor alpha, raise to `alpha_count` and
/// convert to a byte, rounding up.
pub fn composite_alpha(
    outline_alpha: u8,
    base_alpha: f32,
    ancestor_alpha: f32,
    alpha_count: u32,
) -> u8 {
    let total = outline_alpha as f32 / 255.0 * base_alpha * ancestor_alpha;

    let mut result = 1.0f32;
    for _ in 0..alpha_count {
        result *= total;
    }

    let result = if result.is_nan() {
        0.0
    } else {
        result.clamp(0.0, 1.0)
    };
    (result * 255.0).ceil().clamp(0.0, 255.0) as u8
}
