//! The three-gear demo scene: instance layout, animation state, and the
//! renderer-facing seam.
//!
//! Everything here is plain data threaded through an external render loop.
//! Animation and placement state live in explicit structs owned by the
//! caller, never in globals; the loop is expected to `sync` once per frame
//! and draw the pre-built meshes.

use crate::errors::InvalidGearSpec;
use crate::float_types::Real;
use crate::gear::GearSpec;
use crate::mesh::GearMesh;
use nalgebra::{Matrix4, Rotation3, Vector3};

/// RGBA material color handed to the renderer per draw call.
pub type Rgba = [f32; 4];

/// Degrees of master rotation per second of animation time.
const SPIN_DEG_PER_SECOND: f64 = 100.0;

/// Monotonic time source driving [`AnimState`]. Seconds since an arbitrary
/// epoch.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Animation state: the master rotation angle every gear derives from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimState {
    pub angle_deg: Real,
}

impl AnimState {
    /// Advance to the clock's current time. Time-based rather than
    /// per-frame-incremented, so the spin rate is frame-rate independent.
    pub fn sync(&mut self, clock: &impl Clock) {
        self.angle_deg = (SPIN_DEG_PER_SECOND * clock.now()) as Real;
    }
}

/// Placement of one gear for a single draw call: a translation plus a
/// rotation about the z axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearPose {
    pub offset: Vector3<Real>,
    pub angle_deg: Real,
}

impl GearPose {
    /// Model matrix: rotate about z, then translate.
    pub fn matrix(&self) -> Matrix4<Real> {
        let rotation =
            Rotation3::from_axis_angle(&Vector3::z_axis(), self.angle_deg.to_radians());
        Matrix4::new_translation(&self.offset) * rotation.to_homogeneous()
    }
}

/// One gear of the train: shape, material, and how its rotation follows the
/// master angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearInstance {
    pub spec: GearSpec,
    pub color: Rgba,
    pub offset: Vector3<Real>,
    /// Multiplier applied to the master angle.
    pub spin_rate: Real,
    /// Fixed phase offset in degrees, chosen so meshed teeth interlock
    /// instead of colliding.
    pub spin_phase_deg: Real,
}

impl GearInstance {
    /// This gear's rotation for a given master angle, in degrees.
    pub fn rotation_deg(&self, master_angle_deg: Real) -> Real {
        self.spin_rate * master_angle_deg + self.spin_phase_deg
    }

    /// Placement for the current animation state.
    pub fn pose(&self, anim: &AnimState) -> GearPose {
        GearPose {
            offset: self.offset,
            angle_deg: self.rotation_deg(anim.angle_deg),
        }
    }
}

/// Consumes baked gear meshes for display. Implementations are expected to
/// upload each mesh once and replay it per frame; the builder itself keeps
/// no cache.
pub trait GearRenderer {
    fn draw_gear(&mut self, mesh: &GearMesh, color: Rgba, pose: &GearPose);
}

/// An ordered set of gears drawn together.
#[derive(Debug, Clone, PartialEq)]
pub struct GearTrain {
    pub instances: Vec<GearInstance>,
}

impl GearTrain {
    /// The classic three-gear arrangement: a large slow wheel meshing with
    /// two smaller counter-rotating ones, phased so the teeth interlock.
    pub fn classic() -> Self {
        GearTrain {
            instances: vec![
                GearInstance {
                    spec: GearSpec::new(1.0, 4.0, 1.0, 20, 0.7),
                    color: [0.8, 0.1, 0.0, 1.0],
                    offset: Vector3::new(-3.0, -2.0, 0.0),
                    spin_rate: 1.0,
                    spin_phase_deg: 0.0,
                },
                GearInstance {
                    spec: GearSpec::new(0.5, 2.0, 2.0, 10, 0.7),
                    color: [0.0, 0.8, 0.2, 1.0],
                    offset: Vector3::new(3.1, -2.0, 0.0),
                    spin_rate: -2.0,
                    spin_phase_deg: -9.0,
                },
                GearInstance {
                    spec: GearSpec::new(1.3, 2.0, 0.5, 10, 0.7),
                    color: [0.2, 0.2, 1.0, 1.0],
                    offset: Vector3::new(-3.1, 4.2, 0.0),
                    spin_rate: -2.0,
                    spin_phase_deg: -25.0,
                },
            ],
        }
    }

    /// Build every instance's mesh once, in instance order. Bake these into
    /// whatever retained form the renderer uses; nothing needs regenerating
    /// per frame.
    pub fn build_meshes(&self) -> Result<Vec<GearMesh>, InvalidGearSpec> {
        self.instances
            .iter()
            .map(|instance| GearMesh::gear(&instance.spec))
            .collect()
    }

    /// Current pose of every instance, in instance order.
    pub fn poses(&self, anim: &AnimState) -> Vec<GearPose> {
        self.instances
            .iter()
            .map(|instance| instance.pose(anim))
            .collect()
    }

    /// Draw the whole train: one renderer call per gear, in instance order.
    /// `meshes` must line up with `instances`, as produced by
    /// [`build_meshes`](Self::build_meshes).
    pub fn draw(&self, renderer: &mut impl GearRenderer, meshes: &[GearMesh], anim: &AnimState) {
        for (instance, mesh) in self.instances.iter().zip(meshes) {
            renderer.draw_gear(mesh, instance.color, &instance.pose(anim));
        }
    }
}
