//! # Ring Stack Stitching
//!
//! Triangulates an ordered stack of point loops into a single closed,
//! orientable triangle mesh. The stitcher is deliberately shape-agnostic:
//! thread profiles, auger tips, and plain prisms all close through the same
//! contract, so any future profile-based solid can reuse it unchanged.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// One closed polygonal cross-section loop at a given position along the
/// generation axis.
pub type Ring = Vec<DVec3>;

/// An ordered stack of rings describing a swept or helical solid before
/// triangulation, ordered bottom to top along the generation axis.
///
/// Every ring in a stack must hold the same point count. Rings need not be
/// planar; helical bands whose per-point heights vary are valid as long as
/// segments between same-index points of adjacent rings do not cross segments
/// of neighboring indices.
#[derive(Debug, Clone, Default)]
pub struct RingStack {
    /// Rings from bottom to top
    pub rings: Vec<Ring>,
}

impl RingStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { rings: Vec::new() }
    }

    /// Creates a stack with pre-allocated ring capacity.
    pub fn with_capacity(rings: usize) -> Self {
        Self {
            rings: Vec::with_capacity(rings),
        }
    }

    /// Appends a ring above all existing rings.
    pub fn push_ring(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    /// Returns the number of rings.
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Returns the point count of the first ring, or 0 for an empty stack.
    pub fn points_per_ring(&self) -> usize {
        self.rings.first().map_or(0, Vec::len)
    }
}

/// Averages a ring into its representative interior point.
fn centroid(ring: &Ring) -> DVec3 {
    let sum: DVec3 = ring.iter().copied().sum();
    sum / ring.len() as f64
}

/// Closes a ring stack into a watertight triangle mesh.
///
/// For every pair of adjacent rings `j`, `j+1` and every point index `i`, the
/// lateral surface receives the two triangles
///
/// ```text
/// (j,i) - (j+1,i)        - (j+1,(i+1)%P)
/// (j,i) - (j+1,(i+1)%P)  - (j,(i+1)%P)
/// ```
///
/// and the first and last rings are sealed with a fan of `P` triangles each
/// around that ring's centroid, so the result has no boundary edges: exactly
/// `2*P*(N-1) + 2*P` triangles for `N` rings of `P` points.
///
/// # Preconditions (not validated)
///
/// The routine performs no geometric validation; checking for crossing
/// segments would cost O(N*P^2) and the thread generators construct stacks
/// that satisfy these structurally:
///
/// - Each ring is wound clockwise as viewed from +Z (counter-clockwise as
///   seen from outside, beneath the bottom cap), so all output faces wind
///   counter-clockwise from the exterior.
/// - The first and last rings are star-shaped with respect to their
///   centroids, so the cap fans do not self-intersect.
/// - Rings do not self-intersect and adjacent rings do not cross.
///
/// # Errors
///
/// Returns [`MeshError::MalformedStack`] for fewer than 2 rings, fewer than
/// 3 points per ring, or inconsistent point counts across rings. Malformed
/// input is a programmer error; there is no geometry repair or partial
/// output.
///
/// # Example
///
/// ```rust
/// use thread_mesh::{close_points, RingStack};
/// use glam::DVec3;
///
/// // A unit-square prism of three rings (clockwise from +Z)
/// let square = |z: f64| {
///     vec![
///         DVec3::new(1.0, 1.0, z),
///         DVec3::new(1.0, -1.0, z),
///         DVec3::new(-1.0, -1.0, z),
///         DVec3::new(-1.0, 1.0, z),
///     ]
/// };
/// let mut stack = RingStack::new();
/// stack.push_ring(square(0.0));
/// stack.push_ring(square(1.0));
/// stack.push_ring(square(2.0));
///
/// let mesh = close_points(&stack).unwrap();
/// assert_eq!(mesh.triangle_count(), 24);
/// ```
pub fn close_points(stack: &RingStack) -> Result<Mesh, MeshError> {
    let n = stack.ring_count();
    if n < 2 {
        return Err(MeshError::malformed_stack(format!(
            "a stack needs at least 2 rings to close, got {}",
            n
        )));
    }

    let p = stack.rings[0].len();
    if p < 3 {
        return Err(MeshError::malformed_stack(format!(
            "rings need at least 3 points to form a loop, got {}",
            p
        )));
    }

    for (j, ring) in stack.rings.iter().enumerate() {
        if ring.len() != p {
            return Err(MeshError::malformed_stack(format!(
                "ring {} has {} points, expected {}",
                j,
                ring.len(),
                p
            )));
        }
    }

    let mut mesh = Mesh::with_capacity(n * p + 2, 2 * p * (n - 1) + 2 * p);

    for ring in &stack.rings {
        for point in ring {
            mesh.add_vertex(*point);
        }
    }
    let bottom_mid = mesh.add_vertex(centroid(&stack.rings[0]));
    let top_mid = mesh.add_vertex(centroid(&stack.rings[n - 1]));

    // Lateral surface: two triangles per quad between adjacent rings
    for j in 0..n - 1 {
        let base = j * p;
        let next = (j + 1) * p;

        for i in 0..p {
            let i_next = (i + 1) % p;

            mesh.add_triangle((base + i) as u32, (next + i) as u32, (next + i_next) as u32);
            mesh.add_triangle(
                (base + i) as u32,
                (next + i_next) as u32,
                (base + i_next) as u32,
            );
        }
    }

    // Bottom cap: fan around the centroid, facing -Z
    for i in 0..p {
        mesh.add_triangle(bottom_mid, i as u32, ((i + 1) % p) as u32);
    }

    // Top cap: fan around the centroid, facing +Z
    let top_base = (n - 1) * p;
    for i in 0..p {
        mesh.add_triangle(
            top_mid,
            (top_base + (i + 1) % p) as u32,
            (top_base + i) as u32,
        );
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Square ring wound clockwise as viewed from +Z.
    fn square_ring(half: f64, z: f64) -> Ring {
        vec![
            DVec3::new(half, half, z),
            DVec3::new(half, -half, z),
            DVec3::new(-half, -half, z),
            DVec3::new(-half, half, z),
        ]
    }

    #[test]
    fn test_close_points_square_prism() {
        let mut stack = RingStack::new();
        stack.push_ring(square_ring(1.0, 0.0));
        stack.push_ring(square_ring(1.0, 1.0));
        stack.push_ring(square_ring(1.0, 2.0));

        let mesh = close_points(&stack).unwrap();

        // 2*4*2 lateral + 2*4 caps
        assert_eq!(mesh.triangle_count(), 24);
        assert_eq!(mesh.vertex_count(), 3 * 4 + 2);
        assert!(mesh.validate());
    }

    #[test]
    fn test_close_points_prism_is_outward() {
        let mut stack = RingStack::new();
        stack.push_ring(square_ring(1.0, 0.0));
        stack.push_ring(square_ring(1.0, 1.0));
        stack.push_ring(square_ring(1.0, 2.0));

        let mesh = close_points(&stack).unwrap();

        // A 2x2x2 box; consistent outward winding gives the positive volume
        assert!((mesh.signed_volume() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_close_points_triangle_count_law() {
        for (n, p) in [(2usize, 3usize), (5, 7), (10, 16)] {
            let mut stack = RingStack::with_capacity(n);
            for j in 0..n {
                let ring: Ring = (0..p)
                    .map(|i| {
                        let ang = -2.0 * std::f64::consts::PI * i as f64 / p as f64;
                        DVec3::new(ang.cos(), ang.sin(), j as f64)
                    })
                    .collect();
                stack.push_ring(ring);
            }
            let mesh = close_points(&stack).unwrap();
            assert_eq!(mesh.triangle_count(), 2 * p * (n - 1) + 2 * p);
        }
    }

    #[test]
    fn test_close_points_rejects_single_ring() {
        let mut stack = RingStack::new();
        stack.push_ring(square_ring(1.0, 0.0));
        let result = close_points(&stack);
        assert!(matches!(result, Err(MeshError::MalformedStack { .. })));
    }

    #[test]
    fn test_close_points_rejects_degenerate_rings() {
        let mut stack = RingStack::new();
        stack.push_ring(vec![DVec3::ZERO, DVec3::X]);
        stack.push_ring(vec![DVec3::Z, DVec3::new(1.0, 0.0, 1.0)]);
        let result = close_points(&stack);
        assert!(matches!(result, Err(MeshError::MalformedStack { .. })));
    }

    #[test]
    fn test_close_points_rejects_mismatched_point_counts() {
        let mut stack = RingStack::new();
        stack.push_ring(square_ring(1.0, 0.0));
        stack.push_ring(vec![DVec3::Z, DVec3::new(1.0, 0.0, 1.0), DVec3::Y]);
        let err = close_points(&stack).unwrap_err();
        assert!(err.to_string().contains("expected 4"));
    }

    #[test]
    fn test_ring_stack_accessors() {
        let mut stack = RingStack::new();
        assert_eq!(stack.ring_count(), 0);
        assert_eq!(stack.points_per_ring(), 0);

        stack.push_ring(square_ring(1.0, 0.0));
        assert_eq!(stack.ring_count(), 1);
        assert_eq!(stack.points_per_ring(), 4);
    }

    #[test]
    fn test_centroid_is_ring_average() {
        let ring = square_ring(2.0, 5.0);
        let mid = centroid(&ring);
        assert!(mid.x.abs() < 1e-12);
        assert!(mid.y.abs() < 1e-12);
        assert!((mid.z - 5.0).abs() < 1e-12);
    }
}
