//! # Integration Tests
//!
//! End-to-end checks of the profile generators and the stitcher working
//! together, including the closed-manifold and mating-clearance properties.

use crate::mesh::Mesh;
use crate::profile::{
    auger_thread, screw_thread, thread_rings, AugerParams, ThreadKind, ThreadParams,
};
use crate::stitch::close_points;
use std::collections::HashMap;

fn m6() -> ThreadParams {
    ThreadParams {
        pitch: None, // resolves to 1.0 via the standards table
        tolerance: 0.4,
        tooth_angle: 30.0,
        ..ThreadParams::new(6.0)
    }
}

/// Counts how many triangles use each undirected edge.
fn edge_use_counts(mesh: &Mesh) -> HashMap<(u32, u32), u32> {
    let mut counts = HashMap::new();
    for tri in mesh.triangles() {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

fn assert_closed_manifold(mesh: &Mesh) {
    for (edge, count) in edge_use_counts(mesh) {
        assert_eq!(
            count, 2,
            "edge {:?} used {} times; a closed manifold uses every edge twice",
            edge, count
        );
    }
}

#[test]
fn test_m6_scenario() {
    // outer 6mm, height 10mm, pitch defaulted to 1mm, 30 degree flank,
    // tolerance 0.4, no tip shaping
    let stack = thread_rings(&m6(), 10.0).unwrap();

    // 10 full revolutions at 3 sampled levels each, plus the end extensions
    assert_eq!(stack.ring_count(), 37);

    let mesh = close_points(&stack).unwrap();
    assert!(mesh.validate(), "no degenerate or zero-area triangles");
    assert!(mesh.signed_volume() > 0.0, "outward winding throughout");
    assert_closed_manifold(&mesh);

    let (min, max) = mesh.bounding_box();
    assert!(min.z.abs() < 1e-9);
    assert!((max.z - 10.0).abs() < 1e-9);
    // External thread: crest radius is nominal minus half the tolerance
    assert!((max.x - 2.8).abs() < 0.05);
}

#[test]
fn test_triangle_count_law_for_generated_threads() {
    let stack = thread_rings(&m6(), 10.0).unwrap();
    let n = stack.ring_count();
    let p = stack.points_per_ring();
    let mesh = close_points(&stack).unwrap();
    assert_eq!(mesh.triangle_count(), 2 * p * (n - 1) + 2 * p);
    assert_eq!(mesh.vertex_count(), n * p + 2);
}

#[test]
fn test_tolerance_round_trip() {
    // An external and an internal thread of the same nominal diameter must
    // engage with a radial clearance equal to the tolerance
    let external = thread_rings(&m6(), 10.0).unwrap();
    let internal = thread_rings(
        &ThreadParams {
            kind: ThreadKind::Internal,
            ..m6()
        },
        10.0,
    )
    .unwrap();

    let crest = |stack: &crate::stitch::RingStack| {
        stack
            .rings
            .iter()
            .flatten()
            .map(|p| (p.x * p.x + p.y * p.y).sqrt())
            .fold(0.0_f64, f64::max)
    };

    let clearance = crest(&internal) - crest(&external);
    assert!(
        (clearance - 0.4).abs() < 1e-9,
        "expected 0.4 clearance, got {}",
        clearance
    );
}

#[test]
fn test_tip_shaping_monotone_and_bounded() {
    let params = ThreadParams {
        tip_height: Some(3.0),
        tip_min_fract: Some(0.25),
        ..m6()
    };
    let stack = thread_rings(&params, 10.0).unwrap();

    // External M6 form: crest 2.8, sharp-V depth ~0.866
    let root_r = 2.8 - 1.0 / (2.0 * 30.0_f64.to_radians().tan());
    let tooth_height = 2.8 - root_r;

    // Crest-level rings fully inside the tip region must lose depth
    // monotonically toward the top
    let mut prev_depth = f64::INFINITY;
    for (hs, ring) in stack.rings.iter().enumerate() {
        if hs % 3 != 1 {
            continue;
        }
        if ring.iter().any(|p| p.z < 10.0 - 3.0) {
            continue;
        }
        let depth = ring
            .iter()
            .map(|p| (p.x * p.x + p.y * p.y).sqrt() - root_r)
            .fold(0.0_f64, f64::max);
        assert!(
            depth <= prev_depth + 1e-9,
            "tooth depth must not grow toward the tip"
        );
        prev_depth = depth;
    }

    // The very last ring retains tip_min_fract of the depth
    let top = &stack.rings[stack.ring_count() - 1];
    let top_depth = top
        .iter()
        .map(|p| (p.x * p.x + p.y * p.y).sqrt() - root_r)
        .fold(0.0_f64, f64::max);
    assert!(
        (top_depth - 0.25 * tooth_height).abs() < 0.05 * tooth_height,
        "expected ~{:.3} depth at the tip, got {:.3}",
        0.25 * tooth_height,
        top_depth
    );
}

#[test]
fn test_single_pitch_height() {
    // Height of exactly one pitch: still at least 2 rings and a valid solid
    let params = ThreadParams {
        pitch: Some(1.0),
        ..m6()
    };
    let stack = thread_rings(&params, 1.0).unwrap();
    assert!(stack.ring_count() >= 2);

    let mesh = close_points(&stack).unwrap();
    assert!(mesh.validate());
    assert!(mesh.signed_volume() > 0.0);
    assert_closed_manifold(&mesh);
}

#[test]
fn test_screw_thread_composes_generation_and_stitching() {
    let direct = screw_thread(&m6(), 10.0).unwrap();
    let composed = close_points(&thread_rings(&m6(), 10.0).unwrap()).unwrap();
    assert_eq!(direct.triangle_count(), composed.triangle_count());
    assert_eq!(direct.vertex_count(), composed.vertex_count());
}

#[test]
fn test_auger_thread_is_closed_and_outward() {
    let mesh = auger_thread(&AugerParams::new(20.0, 8.0, 8.0), 40.0).unwrap();
    assert!(mesh.validate());
    assert!(mesh.signed_volume() > 0.0);
    assert_closed_manifold(&mesh);
}

#[test]
fn test_auger_point_tip_stays_manifold() {
    // Full-radius taper down to a point tip; the cap fan degenerates to
    // near-zero area but the topology must stay closed
    let params = AugerParams {
        tip_height: Some(10.0),
        tip_min_fract: Some(0.0),
        ..AugerParams::new(20.0, 8.0, 8.0)
    };
    let mesh = auger_thread(&params, 40.0).unwrap();
    assert!(mesh.signed_volume() > 0.0);
    assert_closed_manifold(&mesh);
}

#[test]
fn test_internal_thread_encloses_external() {
    // The internal (negative) volume is uniformly larger
    let external = screw_thread(&m6(), 10.0).unwrap();
    let internal = screw_thread(
        &ThreadParams {
            kind: ThreadKind::Internal,
            ..m6()
        },
        10.0,
    )
    .unwrap();
    assert!(internal.signed_volume() > external.signed_volume());
}

#[test]
fn test_generation_is_deterministic() {
    let a = screw_thread(&m6(), 10.0).unwrap();
    let b = screw_thread(&m6(), 10.0).unwrap();
    assert_eq!(a.vertex_count(), b.vertex_count());
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.triangles(), b.triangles());
}

#[test]
fn test_params_serde_round_trip() {
    let params = ThreadParams {
        pitch: Some(1.25),
        tip_height: Some(2.0),
        ..ThreadParams::new(8.0)
    };
    let json = serde_json::to_string(&params).unwrap();
    let back: ThreadParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back.outer_diam, 8.0);
    assert_eq!(back.pitch, Some(1.25));
    assert_eq!(back.kind, ThreadKind::External);
}
