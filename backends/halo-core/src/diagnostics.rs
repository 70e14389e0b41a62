// this_file: backends/halo-core/src/diagnostics.rs

//! Rebuild diagnostics helpers used for structured debug logging.

use crate::config::OutlineConfig;
use crate::types::{Color32, Vertex};
use crate::utils::{mesh_bounds, Bounds};
use log::{debug, log_enabled, Level};

/// Lightweight snapshot of one geometry rebuild.
#[derive(Debug)]
pub struct RebuildDiagnostics {
    source_vertices: usize,
    output_vertices: usize,
    outline_count: u32,
    alpha_count: u32,
    distance: f32,
    base_alpha: f32,
    ancestor_alpha: f32,
    outline_color: Color32,
    bounds: Bounds,
}

impl RebuildDiagnostics {
    /// Capture the diagnostic snapshot for a finished rebuild.
    pub fn new(
        config: &OutlineConfig,
        source_vertices: usize,
        output: &[Vertex],
        base_alpha: f32,
        ancestor_alpha: f32,
        outline_color: Color32,
    ) -> Self {
        Self {
            source_vertices,
            output_vertices: output.len(),
            outline_count: config.outline_count,
            alpha_count: config.alpha_count,
            distance: config.distance,
            base_alpha,
            ancestor_alpha,
            outline_color,
            bounds: mesh_bounds(output),
        }
    }

    pub fn output_vertices(&self) -> usize {
        self.output_vertices
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Emit the diagnostic snapshot at debug level when logging is enabled.
    pub fn log(&self) {
        if log_enabled!(target: "halo::outline", Level::Debug) {
            debug!(
                target: "halo::outline",
                "source={source} output={output} copies={copies} distance={distance:.2} alpha_count={alpha_count} base_alpha={base:.3} ancestor_alpha={ancestor:.3} color=#{r:02X}{g:02X}{b:02X}{a:02X} bounds=({x:.1},{y:.1} {w:.1}x{h:.1})",
                source = self.source_vertices,
                output = self.output_vertices,
                copies = self.outline_count,
                distance = self.distance,
                alpha_count = self.alpha_count,
                base = self.base_alpha,
                ancestor = self.ancestor_alpha,
                r = self.outline_color.r,
                g = self.outline_color.g,
                b = self.outline_color.b,
                a = self.outline_color.a,
                x = self.bounds.x,
                y = self.bounds.y,
                w = self.bounds.width,
                h = self.bounds.height,
            );
        }
    }
}
