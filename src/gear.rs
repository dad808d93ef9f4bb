//! Gear wheel construction: five scalars in, oriented polygons out.

use crate::errors::InvalidGearSpec;
use crate::float_types::{Real, TAU};
use crate::mesh::GearMesh;
use crate::primitive::Primitive;
use crate::vertex::Vertex;
use nalgebra::{Point3, Vector3};

/// Parameters of one gear wheel.
///
/// # Parameters
/// - `inner_radius`: radius of the bore (central hole), > 0
/// - `outer_radius`: radius at the center of the teeth, > `inner_radius`
/// - `width`: extrusion thickness along the rotation (z) axis, > 0
/// - `teeth`: number of tooth units around the circle, >= 3
/// - `tooth_depth`: radial thickness of the tooth band, split evenly above
///   and below `outer_radius`, >= 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSpec {
    pub inner_radius: Real,
    pub outer_radius: Real,
    pub width: Real,
    pub teeth: u32,
    pub tooth_depth: Real,
}

impl GearSpec {
    pub const fn new(
        inner_radius: Real,
        outer_radius: Real,
        width: Real,
        teeth: u32,
        tooth_depth: Real,
    ) -> Self {
        GearSpec {
            inner_radius,
            outer_radius,
            width,
            teeth,
            tooth_depth,
        }
    }

    /// Bore radius `r0`.
    pub const fn bore_radius(&self) -> Real {
        self.inner_radius
    }

    /// Tooth root radius `r1 = outer_radius - tooth_depth / 2`.
    pub fn root_radius(&self) -> Real {
        self.outer_radius - self.tooth_depth / 2.0
    }

    /// Tooth tip radius `r2 = outer_radius + tooth_depth / 2`.
    pub fn tip_radius(&self) -> Real {
        self.outer_radius + self.tooth_depth / 2.0
    }

    /// Angle subtended by one tooth unit, `2π / teeth`.
    pub fn angular_pitch(&self) -> Real {
        TAU / self.teeth as Real
    }

    /// Quarter of the angular pitch. The tooth profile is modeled as four
    /// equal angular spans: root segment, rising flank, tip segment, falling
    /// flank. No other tooth shape is representable.
    pub fn flank_step(&self) -> Real {
        self.angular_pitch() / 4.0
    }

    /// Check every input invariant, reporting the first violated one.
    pub fn validate(&self) -> Result<(), InvalidGearSpec> {
        for (field, value) in [
            ("inner_radius", self.inner_radius),
            ("outer_radius", self.outer_radius),
            ("width", self.width),
            ("tooth_depth", self.tooth_depth),
        ] {
            if !value.is_finite() {
                return Err(InvalidGearSpec::NonFinite { field, value });
            }
        }
        if self.teeth < 3 {
            return Err(InvalidGearSpec::TooFewTeeth { teeth: self.teeth });
        }
        if self.inner_radius <= 0.0 || self.outer_radius <= self.inner_radius {
            return Err(InvalidGearSpec::RadiiOutOfOrder {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if self.width <= 0.0 {
            return Err(InvalidGearSpec::NonPositiveWidth { width: self.width });
        }
        if self.tooth_depth < 0.0 {
            return Err(InvalidGearSpec::NegativeToothDepth {
                tooth_depth: self.tooth_depth,
            });
        }
        if self.root_radius() <= self.bore_radius() {
            return Err(InvalidGearSpec::ToothDepthExceedsRim {
                tooth_depth: self.tooth_depth,
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        Ok(())
    }
}

/// Point on a circle of `radius` at `angle`, lifted to height `z`.
fn ring(radius: Real, angle: Real, z: Real) -> Point3<Real> {
    Point3::new(radius * angle.cos(), radius * angle.sin(), z)
}

/// Unit normal pointing straight out of the rim at `angle`. Used for wall
/// segments whose edge runs parallel to the rotation axis.
fn radial_normal(angle: Real) -> Vector3<Real> {
    Vector3::new(angle.cos(), angle.sin(), 0.0)
}

/// Outward normal of a slanted wall whose front edge runs from `(ra, a)` to
/// `(rb, b)`: the in-plane edge vector rotated 90° and normalized.
fn flank_normal(ra: Real, a: Real, rb: Real, b: Real) -> Vector3<Real> {
    let u = rb * b.cos() - ra * a.cos();
    let v = rb * b.sin() - ra * a.sin();
    let len = (u * u + v * v).sqrt();
    Vector3::new(v / len, -u / len, 0.0)
}

/// Push one front/back vertex pair of the outward wall strip.
fn wall_pair(
    strip: &mut Vec<Vertex>,
    radius: Real,
    angle: Real,
    half_width: Real,
    normal: Vector3<Real>,
) {
    strip.push(Vertex::new(ring(radius, angle, half_width), normal));
    strip.push(Vertex::new(ring(radius, angle, -half_width), normal));
}

impl GearMesh {
    /// Build the mesh for one gear wheel.
    ///
    /// The wheel lies in the xy plane, centered on the origin, extruded from
    /// `-width/2` to `+width/2` along z. Six face groups are emitted, in
    /// order: front face, front tooth plateaus, back face, back tooth
    /// plateaus, outward tooth walls, bore cylinder. Faces and plateaus are
    /// flat shaded (one uniform normal per primitive); walls and bore carry
    /// per-vertex normals for gradient shading across the strip.
    ///
    /// Pure and deterministic: identical specs produce bit-identical meshes.
    pub fn gear(spec: &GearSpec) -> Result<GearMesh, InvalidGearSpec> {
        spec.validate()?;

        let r0 = spec.bore_radius();
        let r1 = spec.root_radius();
        let r2 = spec.tip_radius();
        let half_width = spec.width / 2.0;
        let teeth = spec.teeth;
        let pitch = spec.angular_pitch();
        let da = spec.flank_step();

        let mut primitives = Vec::with_capacity(2 * teeth as usize + 4);

        // Front face: one strip sweeping the bore/root annulus. The extra
        // pair per tooth re-anchors the strip past the tooth span, leaving
        // the plateau band to its own quads.
        let front_normal = Vector3::z();
        let mut front = Vec::with_capacity(4 * teeth as usize + 2);
        for i in 0..=teeth {
            let angle = pitch * i as Real;
            front.push(Vertex::new(ring(r0, angle, half_width), front_normal));
            front.push(Vertex::new(ring(r1, angle, half_width), front_normal));
            if i < teeth {
                front.push(Vertex::new(ring(r0, angle, half_width), front_normal));
                front.push(Vertex::new(
                    ring(r1, angle + 3.0 * da, half_width),
                    front_normal,
                ));
            }
        }
        primitives.push(Primitive::QuadStrip(front));

        // Front tooth plateaus: one flat quad per tooth, root to tip across
        // the four-step profile.
        for i in 0..teeth {
            let angle = pitch * i as Real;
            primitives.push(Primitive::Quad([
                Vertex::new(ring(r1, angle, half_width), front_normal),
                Vertex::new(ring(r2, angle + da, half_width), front_normal),
                Vertex::new(ring(r2, angle + 2.0 * da, half_width), front_normal),
                Vertex::new(ring(r1, angle + 3.0 * da, half_width), front_normal),
            ]));
        }

        // Back face: the front sweep mirrored to -z, pair order reversed so
        // the winding stays outward under the flipped normal.
        let back_normal = -Vector3::z();
        let mut back = Vec::with_capacity(4 * teeth as usize + 2);
        for i in 0..=teeth {
            let angle = pitch * i as Real;
            back.push(Vertex::new(ring(r1, angle, -half_width), back_normal));
            back.push(Vertex::new(ring(r0, angle, -half_width), back_normal));
            if i < teeth {
                back.push(Vertex::new(
                    ring(r1, angle + 3.0 * da, -half_width),
                    back_normal,
                ));
                back.push(Vertex::new(ring(r0, angle, -half_width), back_normal));
            }
        }
        primitives.push(Primitive::QuadStrip(back));

        // Back tooth plateaus, vertex order reversed.
        for i in 0..teeth {
            let angle = pitch * i as Real;
            primitives.push(Primitive::Quad([
                Vertex::new(ring(r1, angle + 3.0 * da, -half_width), back_normal),
                Vertex::new(ring(r2, angle + 2.0 * da, -half_width), back_normal),
                Vertex::new(ring(r2, angle + da, -half_width), back_normal),
                Vertex::new(ring(r1, angle, -half_width), back_normal),
            ]));
        }

        // Outward tooth walls: one strip of front/back pairs around the
        // whole rim, four wall quads per tooth (rising flank, tip plateau,
        // falling flank, root gap). Each computed normal applies to the pair
        // that follows it: slanted flanks get the rotated in-plane edge
        // direction, tip plateaus and root gaps the plain radial direction.
        let mut walls = Vec::with_capacity(8 * teeth as usize + 2);
        let mut normal = radial_normal(0.0);
        for i in 0..teeth {
            let angle = pitch * i as Real;
            wall_pair(&mut walls, r1, angle, half_width, normal);
            normal = flank_normal(r1, angle, r2, angle + da);
            wall_pair(&mut walls, r2, angle + da, half_width, normal);
            normal = radial_normal(angle);
            wall_pair(&mut walls, r2, angle + 2.0 * da, half_width, normal);
            normal = flank_normal(r2, angle + 2.0 * da, r1, angle + 3.0 * da);
            wall_pair(&mut walls, r1, angle + 3.0 * da, half_width, normal);
            normal = radial_normal(angle);
        }
        // One closing pair at angle 0 seals the strip against its first pair.
        wall_pair(&mut walls, r1, 0.0, half_width, normal);
        primitives.push(Primitive::QuadStrip(walls));

        // Bore cylinder: the inside wall of the central hole, per-step
        // normals pointing at the rotation axis.
        let mut bore = Vec::with_capacity(2 * teeth as usize + 2);
        for i in 0..=teeth {
            let angle = pitch * i as Real;
            let inward = -radial_normal(angle);
            bore.push(Vertex::new(ring(r0, angle, -half_width), inward));
            bore.push(Vertex::new(ring(r0, angle, half_width), inward));
        }
        primitives.push(Primitive::QuadStrip(bore));

        Ok(GearMesh::from_primitives(primitives))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derived_radii() {
        let spec = GearSpec::new(1.0, 4.0, 1.0, 20, 0.7);
        assert_eq!(spec.bore_radius(), 1.0);
        assert!((spec.root_radius() - 3.65).abs() < 1e-6);
        assert!((spec.tip_radius() - 4.35).abs() < 1e-6);
        assert!((spec.flank_step() - TAU / 80.0).abs() < 1e-6);
    }

    #[test]
    fn validate_accepts_degenerate_tooth_depth() {
        let spec = GearSpec::new(1.0, 4.0, 1.0, 20, 0.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_specs() {
        let good = GearSpec::new(1.0, 4.0, 1.0, 20, 0.7);
        assert!(good.validate().is_ok());

        let bad = GearSpec { teeth: 2, ..good };
        assert_eq!(bad.validate(), Err(InvalidGearSpec::TooFewTeeth { teeth: 2 }));

        let bad = GearSpec {
            inner_radius: 4.0,
            ..good
        };
        assert_eq!(
            bad.validate(),
            Err(InvalidGearSpec::RadiiOutOfOrder {
                inner: 4.0,
                outer: 4.0
            })
        );

        let bad = GearSpec { width: 0.0, ..good };
        assert_eq!(
            bad.validate(),
            Err(InvalidGearSpec::NonPositiveWidth { width: 0.0 })
        );

        let bad = GearSpec {
            tooth_depth: -0.5,
            ..good
        };
        assert_eq!(
            bad.validate(),
            Err(InvalidGearSpec::NegativeToothDepth { tooth_depth: -0.5 })
        );

        // Root circle would dip below the bore.
        let bad = GearSpec {
            inner_radius: 3.9,
            ..good
        };
        assert!(matches!(
            bad.validate(),
            Err(InvalidGearSpec::ToothDepthExceedsRim { .. })
        ));

        let bad = GearSpec {
            width: Real::NAN,
            ..good
        };
        assert!(matches!(
            bad.validate(),
            Err(InvalidGearSpec::NonFinite { field: "width", .. })
        ));
    }
}
