// this_file: crates/halo-outline/src/expand.rs

//! Mesh expansion: shifted outline copies underneath the original mesh.

use halo_core::{Color32, Vec3, Vertex};

/// Number of vertices produced for `source_len` vertices and `copies` offsets.
pub fn expanded_len(source_len: usize, copies: usize) -> usize {
    source_len * (copies + 1)
}

/// Expand `original` into `out`.
///
/// `out` receives one shifted, recolored copy of `original` per offset in ring
/// order, followed by `original` itself unchanged so it draws on top.
pub fn expand_into(
    original: &[Vertex],
    offsets: &[Vec3],
    outline_color: Color32,
    out: &mut Vec<Vertex>,
) {
    out.clear();
    if original.is_empty() {
        return;
    }
    out.reserve(expanded_len(original.len(), offsets.len()));

    for &offset in offsets {
        out.extend(original.iter().map(|vertex| Vertex {
            position: vertex.position + offset,
            color: outline_color,
            ..*vertex
        }));
    }

    out.extend_from_slice(original);
}
