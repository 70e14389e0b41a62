// this_file: crates/halo-outline/src/generator.rs

//! Outline effect driven by a rendering host.

use crate::compositor::AlphaCompositor;
use crate::expand::expand_into;
use crate::ring::OffsetRing;
use halo_core::config::{validate_alpha_count, validate_distance, validate_outline_count};
use halo_core::{Color32, OutlineConfig, OutlineHost, RebuildDiagnostics, Result, Vec3, Vertex};
use log::{log_enabled, warn, Level};

/// Result of a [`OutlineGenerator::modify_mesh`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildOutcome {
    /// The component was inactive; the host geometry was left alone.
    Skipped,
    /// The host received a new stream of this many vertices.
    Rebuilt { vertices: usize },
}

/// Fading outline effect for a single graphic.
///
/// Holds the configuration, the offset ring, the ancestor opacity snapshot and
/// its own scratch buffers. The host is borrowed per call.
#[derive(Debug, Clone, Default)]
pub struct OutlineGenerator {
    config: OutlineConfig,
    ring: OffsetRing,
    compositor: AlphaCompositor,
    source: Vec<Vertex>,
    expanded: Vec<Vertex>,
}

impl OutlineGenerator {
    /// Create a generator after validating `config`.
    pub fn new(config: OutlineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    pub fn distance(&self) -> f32 {
        self.config.distance
    }

    pub fn outline_count(&self) -> u32 {
        self.config.outline_count
    }

    pub fn alpha_count(&self) -> u32 {
        self.config.alpha_count
    }

    pub fn color(&self) -> Color32 {
        self.config.color
    }

    /// Cached product of ancestor opacities.
    pub fn ancestor_alpha(&self) -> f32 {
        self.compositor.ancestor_alpha()
    }

    /// Offsets used by the last rebuild.
    pub fn offsets(&self) -> &[Vec3] {
        self.ring.offsets()
    }

    /// Set the offset distance and mark the host geometry dirty.
    pub fn set_distance<H: OutlineHost + ?Sized>(
        &mut self,
        host: &mut H,
        distance: f32,
    ) -> Result<()> {
        validate_distance(distance).inspect_err(log_rejected)?;
        self.config.distance = distance;
        host.mark_geometry_dirty();
        Ok(())
    }

    /// Set the number of outline copies and mark the host geometry dirty.
    pub fn set_outline_count<H: OutlineHost + ?Sized>(
        &mut self,
        host: &mut H,
        count: u32,
    ) -> Result<()> {
        validate_outline_count(count).inspect_err(log_rejected)?;
        self.config.outline_count = count;
        host.mark_geometry_dirty();
        Ok(())
    }

    /// Set the alpha exponent and mark the host geometry dirty.
    pub fn set_alpha_count<H: OutlineHost + ?Sized>(
        &mut self,
        host: &mut H,
        count: u32,
    ) -> Result<()> {
        validate_alpha_count(count).inspect_err(log_rejected)?;
        self.config.alpha_count = count;
        host.mark_geometry_dirty();
        Ok(())
    }

    /// Set the outline color and mark the host geometry dirty.
    pub fn set_color<H: OutlineHost + ?Sized>(&mut self, host: &mut H, color: Color32) {
        self.config.color = color;
        host.mark_geometry_dirty();
    }

    /// Replace the whole configuration and mark the host geometry dirty.
    pub fn set_config<H: OutlineHost + ?Sized>(
        &mut self,
        host: &mut H,
        config: OutlineConfig,
    ) -> Result<()> {
        config.validate().inspect_err(log_rejected)?;
        self.config = config;
        host.mark_geometry_dirty();
        Ok(())
    }

    /// Capture the ancestor opacities right away and request a rebuild.
    pub fn on_enable<H: OutlineHost + ?Sized>(&mut self, host: &mut H) {
        self.compositor.refresh_if_stale(&host.ancestor_opacity_groups());
        host.mark_geometry_dirty();
    }

    /// Request a rebuild so the host falls back to its own mesh.
    pub fn on_disable<H: OutlineHost + ?Sized>(&mut self, host: &mut H) {
        host.mark_geometry_dirty();
    }

    /// Per-frame check of ancestor opacities.
    ///
    /// Marks geometry dirty and returns `true` when the snapshot changed.
    pub fn update<H: OutlineHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !host.is_component_active() {
            return false;
        }

        let groups = host.ancestor_opacity_groups();
        if !self.compositor.refresh_if_stale(&groups) {
            return false;
        }
        host.mark_geometry_dirty();
        true
    }

    /// Rebuild the host geometry with the outline copies underneath.
    pub fn modify_mesh<H: OutlineHost + ?Sized>(&mut self, host: &mut H) -> RebuildOutcome {
        if !host.is_component_active() {
            return RebuildOutcome::Skipped;
        }

        self.ring
            .ensure(self.config.distance, self.config.outline_count as usize);

        self.source.clear();
        host.original_vertex_stream(&mut self.source);

        let base_alpha = host.base_graphic_alpha();
        let outline_color =
            self.compositor
                .outline_color(self.config.color, base_alpha, self.config.alpha_count);

        expand_into(
            &self.source,
            self.ring.offsets(),
            outline_color,
            &mut self.expanded,
        );

        if log_enabled!(target: "halo::outline", Level::Debug) {
            RebuildDiagnostics::new(
                &self.config,
                self.source.len(),
                &self.expanded,
                base_alpha,
                self.compositor.ancestor_alpha(),
                outline_color,
            )
            .log();
        }

        host.replace_vertex_stream(&self.expanded);
        RebuildOutcome::Rebuilt {
            vertices: self.expanded.len(),
        }
    }
}

fn log_rejected(err: &halo_core::HaloError) {
    warn!(target: "halo::outline", "rejected outline setting: {err}");
}
