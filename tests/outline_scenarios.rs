// this_file: tests/outline_scenarios.rs

//! End-to-end scenarios driving the outline effect through an in-memory host.

use approx::assert_abs_diff_eq;
use halo::{
    AncestorOpacity, BatchItem, BatchOutliner, Color32, GroupId, MemoryHost, OutlineConfig,
    OutlineGenerator, RebuildOutcome, Vec3, Vertex,
};
use std::f32::consts::PI;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn white_triangle() -> Vec<Vertex> {
    vec![
        Vertex::new(Vec3::new(0.0, 0.0, 0.0), Color32::WHITE),
        Vertex::new(Vec3::new(1.0, 0.0, 0.0), Color32::WHITE),
        Vertex::new(Vec3::new(0.0, 1.0, 0.0), Color32::WHITE),
    ]
}

fn red_config() -> OutlineConfig {
    OutlineConfig {
        distance: 2.0,
        outline_count: 4,
        alpha_count: 2,
        color: Color32::new(255, 0, 0, 255),
    }
}

#[test]
fn test_triangle_with_four_copies() {
    init();
    let original = white_triangle();
    let mut host = MemoryHost::new(original.clone());
    let mut generator = OutlineGenerator::new(red_config()).unwrap();

    let outcome = generator.modify_mesh(&mut host);
    assert_eq!(outcome, RebuildOutcome::Rebuilt { vertices: 15 });
    assert_eq!(host.replace_calls, 1);

    let drawn = host.drawn();
    assert_eq!(drawn.len(), 15);

    let angles = [PI / 4.0, 3.0 * PI / 4.0, 5.0 * PI / 4.0, 7.0 * PI / 4.0];
    for (copy, angle) in drawn[..12].chunks(3).zip(angles) {
        let offset = Vec3::new(angle.cos() * 2.0, angle.sin() * 2.0, 0.0);
        for (vertex, source) in copy.iter().zip(&original) {
            assert_abs_diff_eq!(vertex.position.x, source.position.x + offset.x, epsilon = 1e-5);
            assert_abs_diff_eq!(vertex.position.y, source.position.y + offset.y, epsilon = 1e-5);
            assert_eq!(vertex.position.z, 0.0);
            assert_eq!(vertex.color, Color32::new(255, 0, 0, 255));
        }
    }

    assert_eq!(&drawn[12..], original.as_slice());
}

#[test]
fn test_inactive_component_never_replaces() {
    init();
    let mut host = MemoryHost::new(white_triangle());
    host.active = false;
    let mut generator = OutlineGenerator::new(red_config()).unwrap();

    assert_eq!(generator.modify_mesh(&mut host), RebuildOutcome::Skipped);
    assert_eq!(host.replace_calls, 0);
    assert!(host.rendered.is_none());
    assert_eq!(host.drawn(), white_triangle().as_slice());
}

#[test]
fn test_empty_mesh_yields_empty_stream() {
    init();
    let mut host = MemoryHost::default();
    let mut generator = OutlineGenerator::default();

    assert_eq!(
        generator.modify_mesh(&mut host),
        RebuildOutcome::Rebuilt { vertices: 0 }
    );
    assert_eq!(host.replace_calls, 1);
    assert_eq!(host.rendered.as_deref(), Some(&[][..]));
}

#[test]
fn test_ancestor_fade_follows_frames() {
    init();
    let mut host = MemoryHost::new(white_triangle()).with_ancestors(vec![
        AncestorOpacity::new(1, 0.5),
        AncestorOpacity::new(2, 0.8),
    ]);
    let mut generator = OutlineGenerator::new(red_config()).unwrap();

    assert!(generator.update(&mut host));
    assert!(host.is_dirty());
    assert_abs_diff_eq!(generator.ancestor_alpha(), 0.4, epsilon = 1e-6);
    generator.modify_mesh(&mut host);
    let faded = host.drawn()[0].color.a;
    assert_eq!(faded, halo::composite_alpha(255, 1.0, generator.ancestor_alpha(), 2));

    // steady frame: nothing to do
    assert!(!generator.update(&mut host));
    assert!(!host.is_dirty());

    host.remove_ancestor(GroupId(1));
    assert!(generator.update(&mut host));
    assert_abs_diff_eq!(generator.ancestor_alpha(), 0.8, epsilon = 1e-6);
    generator.modify_mesh(&mut host);
    assert!(host.drawn()[0].color.a > faded);
}

#[test]
fn test_base_alpha_and_exponent() {
    init();
    let mut host = MemoryHost::new(white_triangle()).with_base_alpha(0.5);
    let mut generator = OutlineGenerator::new(red_config()).unwrap();

    generator.modify_mesh(&mut host);
    // 0.5^2 * 255 = 63.75
    assert_eq!(host.drawn()[0].color.a, 64);

    generator.set_alpha_count(&mut host, 3).unwrap();
    generator.modify_mesh(&mut host);
    // 0.5^3 * 255 = 31.875
    assert_eq!(host.drawn()[0].color.a, 32);
    assert_eq!(host.drawn()[12].color, Color32::WHITE);
}

#[test]
fn test_batch_matches_single_generator() {
    init();
    let config = OutlineConfig {
        distance: 3.0,
        outline_count: 16,
        alpha_count: 4,
        color: Color32::new(20, 40, 60, 230),
    };
    let ancestors = vec![AncestorOpacity::new(9, 0.7)];

    let mut host = MemoryHost::new(white_triangle())
        .with_ancestors(ancestors.clone())
        .with_base_alpha(0.9);
    let mut generator = OutlineGenerator::new(config).unwrap();
    generator.on_enable(&mut host);
    generator.modify_mesh(&mut host);

    let mut item = BatchItem::new(config, white_triangle());
    item.base_alpha = 0.9;
    item.ancestors = ancestors;
    let outliner = BatchOutliner::new();
    let results = outliner.outline_batch(vec![item.clone(), item]);

    for result in results {
        assert_eq!(result.result.unwrap().as_slice(), host.drawn());
    }
}

#[test]
fn test_config_from_json_drives_generator() {
    let config = OutlineConfig::from_json(
        r#"{"distance": 1.0, "outline_count": 6, "alpha_count": 2, "color": {"r": 0, "g": 0, "b": 0, "a": 255}}"#,
    )
    .unwrap();
    let mut host = MemoryHost::new(white_triangle());
    let mut generator = OutlineGenerator::new(config).unwrap();

    assert_eq!(
        generator.modify_mesh(&mut host),
        RebuildOutcome::Rebuilt { vertices: 21 }
    );
    assert!(host.drawn()[..18]
        .iter()
        .all(|vertex| vertex.color == Color32::BLACK));
}
