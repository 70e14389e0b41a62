// this_file: backends/halo-memory/src/lib.rs

//! In-memory host for running the outline effect without a UI framework.
//!
//! The host keeps the source mesh, the ancestor opacity groups and the last
//! replacement stream in plain fields, and counts every dirty request and sink
//! call so callers can observe what the generator asked for.

use halo_core::{AncestorOpacity, GroupId, OutlineHost, Vertex};
use log::trace;

#[derive(Debug, Clone)]
pub struct MemoryHost {
    /// Source triangle list
    pub vertices: Vec<Vertex>,
    /// Ancestor opacity groups, nearest first
    pub ancestors: Vec<AncestorOpacity>,
    /// Alpha of the graphic's base color
    pub base_alpha: f32,
    /// Whether the effect is enabled
    pub active: bool,
    /// Number of dirty requests since the last sink call
    pub dirty_marks: usize,
    /// Number of times the sink was invoked
    pub replace_calls: usize,
    /// Last stream handed to the sink, `None` until the first rebuild
    pub rendered: Option<Vec<Vertex>>,
}

impl MemoryHost {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            ancestors: Vec::new(),
            base_alpha: 1.0,
            active: true,
            dirty_marks: 0,
            replace_calls: 0,
            rendered: None,
        }
    }

    pub fn with_ancestors(mut self, ancestors: Vec<AncestorOpacity>) -> Self {
        self.ancestors = ancestors;
        self
    }

    pub fn with_base_alpha(mut self, base_alpha: f32) -> Self {
        self.base_alpha = base_alpha;
        self
    }

    /// Set the opacity of an existing ancestor group, or append a new one.
    pub fn set_ancestor_opacity(&mut self, id: GroupId, opacity: f32) {
        match self.ancestors.iter_mut().find(|group| group.id == id) {
            Some(group) => group.opacity = opacity,
            None => self.ancestors.push(AncestorOpacity { id, opacity }),
        }
    }

    /// Remove an ancestor group; returns whether it was present.
    pub fn remove_ancestor(&mut self, id: GroupId) -> bool {
        let before = self.ancestors.len();
        self.ancestors.retain(|group| group.id != id);
        self.ancestors.len() != before
    }

    /// Whether a rebuild was requested since the last sink call.
    pub fn is_dirty(&self) -> bool {
        self.dirty_marks > 0
    }

    /// Stream currently drawn: the replacement if any, otherwise the source mesh.
    pub fn drawn(&self) -> &[Vertex] {
        self.rendered.as_deref().unwrap_or(&self.vertices)
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl OutlineHost for MemoryHost {
    fn ancestor_opacity_groups(&self) -> Vec<AncestorOpacity> {
        self.ancestors.clone()
    }

    fn original_vertex_stream(&self, out: &mut Vec<Vertex>) {
        out.extend_from_slice(&self.vertices);
    }

    fn base_graphic_alpha(&self) -> f32 {
        self.base_alpha
    }

    fn is_component_active(&self) -> bool {
        self.active
    }

    fn mark_geometry_dirty(&mut self) {
        self.dirty_marks += 1;
    }

    fn replace_vertex_stream(&mut self, stream: &[Vertex]) {
        trace!(target: "halo::memory", "replacing stream with {} vertices", stream.len());
        self.replace_calls += 1;
        self.dirty_marks = 0;
        match &mut self.rendered {
            Some(rendered) => {
                rendered.clear();
                rendered.extend_from_slice(stream);
            }
            None => self.rendered = Some(stream.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::{Color32, Vec3};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_host_defaults() {
        let host = MemoryHost::default();
        assert!(host.active);
        assert_eq!(host.base_graphic_alpha(), 1.0);
        assert!(host.ancestor_opacity_groups().is_empty());
        assert!(!host.is_dirty());
        assert!(host.drawn().is_empty());
    }

    #[test]
    fn test_ancestor_updates() {
        let mut host = MemoryHost::default().with_ancestors(vec![AncestorOpacity::new(1, 0.5)]);
        host.set_ancestor_opacity(GroupId(1), 0.25);
        host.set_ancestor_opacity(GroupId(2), 0.8);
        assert_eq!(
            host.ancestor_opacity_groups(),
            vec![AncestorOpacity::new(1, 0.25), AncestorOpacity::new(2, 0.8)]
        );
        assert!(host.remove_ancestor(GroupId(1)));
        assert!(!host.remove_ancestor(GroupId(1)));
        assert_eq!(host.ancestors.len(), 1);
    }

    #[test]
    fn test_replace_clears_dirty_and_records_stream() {
        init();
        let vertex = Vertex::new(Vec3::new(1.0, 2.0, 0.0), Color32::WHITE);
        let mut host = MemoryHost::new(vec![vertex]);
        assert_eq!(host.drawn(), &[vertex]);

        host.mark_geometry_dirty();
        host.mark_geometry_dirty();
        assert!(host.is_dirty());
        assert_eq!(host.dirty_marks, 2);

        host.replace_vertex_stream(&[]);
        assert!(!host.is_dirty());
        assert_eq!(host.dirty_marks, 0);
        assert_eq!(host.replace_calls, 1);
        assert!(host.drawn().is_empty());

        host.replace_vertex_stream(&[vertex, vertex]);
        assert_eq!(host.replace_calls, 2);
        assert_eq!(host.drawn().len(), 2);
    }
}
