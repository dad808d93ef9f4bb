//! View rotation state and the window projection contract.

use crate::float_types::Real;
use nalgebra::{Matrix4, Rotation3, Vector3};

/// Degrees added to a view axis per key press.
const VIEW_STEP_DEG: Real = 5.0;

/// Near clip plane distance.
const ZNEAR: Real = 5.0;
/// Far clip plane distance.
const ZFAR: Real = 30.0;

/// Distance the camera is pulled back along the view axis.
pub const CAMERA_PULLBACK: Real = -20.0;

/// Discrete view commands, one per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    RotateUp,
    RotateDown,
    RotateLeft,
    RotateRight,
    /// Roll about the view axis; left/right are the modifier-flipped pair of
    /// the same key.
    RollLeft,
    RollRight,
    /// Close the application. Not a view mutation; the event loop owns it.
    Quit,
}

/// Camera rotation around the scene, in degrees per axis. Persists across
/// frames, mutated only by [`apply`](Self::apply).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub rot_x_deg: Real,
    pub rot_y_deg: Real,
    pub rot_z_deg: Real,
}

impl Default for ViewState {
    /// Starting view: tilted down and to the side so all three wheels are
    /// visible at once.
    fn default() -> Self {
        ViewState {
            rot_x_deg: 20.0,
            rot_y_deg: 30.0,
            rot_z_deg: 0.0,
        }
    }
}

impl ViewState {
    /// Apply one command. Returns `false` for commands the view does not
    /// consume (only [`ViewCommand::Quit`]).
    pub fn apply(&mut self, command: ViewCommand) -> bool {
        match command {
            ViewCommand::RotateUp => self.rot_x_deg += VIEW_STEP_DEG,
            ViewCommand::RotateDown => self.rot_x_deg -= VIEW_STEP_DEG,
            ViewCommand::RotateLeft => self.rot_y_deg += VIEW_STEP_DEG,
            ViewCommand::RotateRight => self.rot_y_deg -= VIEW_STEP_DEG,
            ViewCommand::RollRight => self.rot_z_deg += VIEW_STEP_DEG,
            ViewCommand::RollLeft => self.rot_z_deg -= VIEW_STEP_DEG,
            ViewCommand::Quit => return false,
        }
        true
    }

    /// Scene rotation matrix, `Rx · Ry · Rz`.
    pub fn matrix(&self) -> Matrix4<Real> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.rot_x_deg.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), self.rot_y_deg.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.rot_z_deg.to_radians());
        (rx * ry * rz).to_homogeneous()
    }

    /// Complete eye-space transform: the scene rotation seen from a camera
    /// pulled back [`CAMERA_PULLBACK`] along the view axis.
    pub fn view_matrix(&self) -> Matrix4<Real> {
        Matrix4::new_translation(&Vector3::new(0.0, 0.0, CAMERA_PULLBACK)) * self.matrix()
    }
}

/// Symmetric view frustum, recomputed on every window resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: Real,
    pub right: Real,
    pub bottom: Real,
    pub top: Real,
    pub znear: Real,
    pub zfar: Real,
}

impl Frustum {
    /// Frustum for a viewport of the given pixel size: half-width fixed at
    /// `znear * 0.5`, half-height scaled by the aspect ratio so the vertical
    /// field of view follows the window shape.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        let aspect = height as Real / width as Real;
        let xmax = ZNEAR * 0.5;
        Frustum {
            left: -xmax,
            right: xmax,
            bottom: -xmax * aspect,
            top: xmax * aspect,
            znear: ZNEAR,
            zfar: ZFAR,
        }
    }

    /// Perspective projection matrix of this frustum.
    pub fn matrix(&self) -> Matrix4<Real> {
        let two_near = 2.0 * self.znear;
        let rl = self.right - self.left;
        let tb = self.top - self.bottom;
        let depth = self.zfar - self.znear;
        Matrix4::new(
            two_near / rl,
            0.0,
            (self.right + self.left) / rl,
            0.0,
            0.0,
            two_near / tb,
            (self.top + self.bottom) / tb,
            0.0,
            0.0,
            0.0,
            -(self.zfar + self.znear) / depth,
            -two_near * self.zfar / depth,
            0.0,
            0.0,
            -1.0,
            0.0,
        )
    }
}
