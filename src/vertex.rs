//! Struct and functions for working with `Vertex`s from which gear
//! primitives are composed.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A mesh vertex, holding position and the normal used for lighting.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Vertex {
    pub pos: Point3<Real>,
    pub normal: Vector3<Real>,
}

impl Vertex {
    /// Create a new [`Vertex`].
    ///
    /// * `pos`    – the position in model space
    /// * `normal` – copied verbatim; orient (and normalize) it the way the
    ///   lighting model needs it.
    #[inline]
    pub const fn new(pos: Point3<Real>, normal: Vector3<Real>) -> Self {
        Vertex { pos, normal }
    }

    /// Flip the vertex normal in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Euclidean distance between vertex positions.
    pub fn distance_to(&self, other: &Vertex) -> Real {
        (self.pos - other.pos).norm()
    }

    /// Distance of the position from the rotation (z) axis.
    pub fn radial_distance(&self) -> Real {
        (self.pos.x * self.pos.x + self.pos.y * self.pos.y).sqrt()
    }
}
