//! `GearMesh`: the geometry sequence emitted for one gear wheel.

use crate::float_types::Real;
use crate::primitive::Primitive;
use crate::vertex::Vertex;

/// An immutable, ordered sequence of drawable primitives describing one gear
/// wheel. Built once per [`GearSpec`](crate::gear::GearSpec), consumed by a
/// renderer, never mutated after emission. The builder keeps no state between
/// invocations; caching is the caller's business.
#[derive(Debug, Clone, PartialEq)]
pub struct GearMesh {
    /// Primitives in emission order: front face strip, front tooth plateau
    /// quads, back face strip, back tooth plateau quads, outward wall strip,
    /// bore strip.
    pub primitives: Vec<Primitive>,
}

impl GearMesh {
    /// Build a mesh from an existing primitive list.
    pub const fn from_primitives(primitives: Vec<Primitive>) -> Self {
        GearMesh { primitives }
    }

    /// Helper to collect all vertices from the mesh.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.primitives
            .iter()
            .flat_map(|p| p.vertices().to_vec())
            .collect()
    }

    /// Total quad count across all primitives.
    pub fn quad_count(&self) -> usize {
        self.primitives.iter().map(|p| p.quad_count()).sum()
    }

    /// Triangulate the whole mesh. Degenerate strip quads contribute a
    /// single triangle each.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        self.primitives
            .iter()
            .flat_map(|p| p.triangulate())
            .collect()
    }

    /// Signed volume of the triangulated mesh via the divergence theorem.
    /// Positive exactly when the winding is consistently outward.
    pub fn signed_volume(&self) -> Real {
        self.triangulate()
            .iter()
            .map(|[a, b, c]| a.pos.coords.dot(&b.pos.coords.cross(&c.pos.coords)) / 6.0)
            .sum()
    }
}

#[cfg(feature = "hashmap")]
impl GearMesh {
    /// Checks if the mesh is a closed 2-manifold
    ///
    /// ### Returns
    /// Returns `true` if every undirected edge of the triangulation is
    /// shared by exactly 2 triangles
    ///
    /// ### Notes:
    /// - Coordinates are quantized before comparison, so seam vertices that
    /// one face group computes at `cos(2π)` and another at `cos(0)` land on
    /// the same key
    /// - The quantization step follows the active float width
    pub fn is_manifold(&self) -> bool {
        #[cfg(feature = "f32")]
        const QUANTIZATION_FACTOR: Real = 1e5;
        #[cfg(feature = "f64")]
        const QUANTIZATION_FACTOR: Real = 1e7;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        struct QuantizedPoint(i64, i64, i64);

        fn quantize_point(p: &nalgebra::Point3<Real>) -> QuantizedPoint {
            QuantizedPoint(
                (p.x * QUANTIZATION_FACTOR).round() as i64,
                (p.y * QUANTIZATION_FACTOR).round() as i64,
                (p.z * QUANTIZATION_FACTOR).round() as i64,
            )
        }

        let mut edge_counts: hashbrown::HashMap<(QuantizedPoint, QuantizedPoint), u32> =
            hashbrown::HashMap::new();

        for tri in self.triangulate() {
            let q = [
                quantize_point(&tri[0].pos),
                quantize_point(&tri[1].pos),
                quantize_point(&tri[2].pos),
            ];
            // A triangle collapsed by quantization has no area to bound.
            if q[0] == q[1] || q[1] == q[2] || q[2] == q[0] {
                continue;
            }
            for &(i0, i1) in &[(0, 1), (1, 2), (2, 0)] {
                // Order the endpoints so (p0, p1) and (p1, p0) share a key
                let (a_key, b_key) = if (q[i0].0, q[i0].1, q[i0].2) < (q[i1].0, q[i1].1, q[i1].2)
                {
                    (q[i0], q[i1])
                } else {
                    (q[i1], q[i0])
                };
                *edge_counts.entry((a_key, b_key)).or_insert(0) += 1;
            }
        }

        !edge_counts.is_empty() && edge_counts.values().all(|&count| count == 2)
    }
}
