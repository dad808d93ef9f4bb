//! Drawable primitives emitted by the gear builder.
//!
//! A gear mesh is an ordered sequence of quads and quad-strips. A quad-strip
//! follows the usual rasterizer contract: after the first vertex pair, every
//! further pair closes one quad with the pair before it, so `2 + 2·n`
//! vertices make `n` quads.

use crate::float_types::EPSILON;
use crate::vertex::Vertex;

/// One drawable primitive with its vertices and normals.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A standalone quadrilateral in polygon winding order.
    Quad([Vertex; 4]),
    /// Interleaved vertex pairs; pair `(a, b)` followed by `(c, d)` yields
    /// the polygon `a, b, d, c`.
    QuadStrip(Vec<Vertex>),
}

impl Primitive {
    /// All vertices of the primitive in emission order.
    pub fn vertices(&self) -> &[Vertex] {
        match self {
            Primitive::Quad(vertices) => vertices,
            Primitive::QuadStrip(vertices) => vertices,
        }
    }

    /// Number of quads this primitive rasterizes to.
    pub fn quad_count(&self) -> usize {
        match self {
            Primitive::Quad(_) => 1,
            Primitive::QuadStrip(vertices) => (vertices.len() / 2).saturating_sub(1),
        }
    }

    /// Decompose into individual quads, unwinding strip pairing into polygon
    /// order.
    pub fn quads(&self) -> Vec<[Vertex; 4]> {
        match self {
            Primitive::Quad(vertices) => vec![*vertices],
            Primitive::QuadStrip(vertices) => {
                let mut quads = Vec::with_capacity(self.quad_count());
                for pair in 1..vertices.len() / 2 {
                    let base = 2 * (pair - 1);
                    quads.push([
                        vertices[base],
                        vertices[base + 1],
                        vertices[base + 3],
                        vertices[base + 2],
                    ]);
                }
                quads
            },
        }
    }

    /// Fan-triangulate every quad. The face strips re-anchor by repeating a
    /// bore vertex, which turns one quad per tooth into a triangle; the
    /// collapsed half of such a quad is dropped here.
    pub fn triangulate(&self) -> Vec<[Vertex; 3]> {
        let mut triangles = Vec::with_capacity(self.quad_count() * 2);
        for [a, b, c, d] in self.quads() {
            for tri in [[a, b, c], [a, c, d]] {
                let degenerate = tri[0].pos == tri[1].pos
                    || tri[1].pos == tri[2].pos
                    || tri[2].pos == tri[0].pos;
                if !degenerate {
                    triangles.push(tri);
                }
            }
        }
        triangles
    }

    /// `true` when every vertex carries the same normal, i.e. the primitive
    /// is flat shaded.
    pub fn is_flat_shaded(&self) -> bool {
        let vertices = self.vertices();
        let Some(first) = vertices.first() else {
            return true;
        };
        vertices
            .iter()
            .all(|v| (v.normal - first.normal).norm() < EPSILON)
    }
}
