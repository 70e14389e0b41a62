// this_file: backends/halo-core/src/traits.rs

//! Traits implemented by rendering hosts that drive the outline effect.

use crate::types::{AncestorOpacity, Vertex};

/// Rendering framework that owns the graphic being outlined.
///
/// The outline generator never stores a host; every operation borrows one for
/// the duration of the call.
pub trait OutlineHost {
    /// Current opacity of every ancestor group above the graphic.
    ///
    /// Entries are compared against the previous frame in order, so the host
    /// should report them in a stable order. Every entry multiplies into the
    /// ancestor alpha; a group listed twice counts twice.
    fn ancestor_opacity_groups(&self) -> Vec<AncestorOpacity>;

    /// Write the graphic's current triangle-list vertex stream into `out`.
    ///
    /// `out` is cleared by the caller beforehand.
    fn original_vertex_stream(&self, out: &mut Vec<Vertex>);

    /// Alpha of the graphic's base color, in [0, 1].
    fn base_graphic_alpha(&self) -> f32;

    /// Whether the effect is enabled and its graphic is live.
    fn is_component_active(&self) -> bool;

    /// Request a geometry rebuild before the next draw.
    fn mark_geometry_dirty(&mut self);

    /// Render `stream` instead of the graphic's original mesh.
    fn replace_vertex_stream(&mut self, stream: &[Vertex]);
}
