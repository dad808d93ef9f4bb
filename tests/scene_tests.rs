use gearmesh::GearMesh;
use gearmesh::float_types::{EPSILON, Real};
use gearmesh::scene::{AnimState, Clock, GearPose, GearRenderer, GearTrain, Rgba};
use gearmesh::view::{CAMERA_PULLBACK, Frustum, ViewCommand, ViewState};
use nalgebra::{Point3, Vector3};

/// Fixed-time stand-in for the render loop's monotonic clock.
struct TestClock(f64);

impl Clock for TestClock {
    fn now(&self) -> f64 {
        self.0
    }
}

#[test]
fn classic_train_layout() {
    let train = GearTrain::classic();
    assert_eq!(train.instances.len(), 3);

    let specs: Vec<_> = train
        .instances
        .iter()
        .map(|g| {
            (
                g.spec.inner_radius,
                g.spec.outer_radius,
                g.spec.width,
                g.spec.teeth,
                g.spec.tooth_depth,
            )
        })
        .collect();
    assert_eq!(specs[0], (1.0, 4.0, 1.0, 20, 0.7));
    assert_eq!(specs[1], (0.5, 2.0, 2.0, 10, 0.7));
    assert_eq!(specs[2], (1.3, 2.0, 0.5, 10, 0.7));

    assert_eq!(train.instances[0].color, [0.8, 0.1, 0.0, 1.0]);
    assert_eq!(train.instances[1].color, [0.0, 0.8, 0.2, 1.0]);
    assert_eq!(train.instances[2].color, [0.2, 0.2, 1.0, 1.0]);

    assert_eq!(train.instances[0].offset, Vector3::new(-3.0, -2.0, 0.0));
    assert_eq!(train.instances[1].offset, Vector3::new(3.1, -2.0, 0.0));
    assert_eq!(train.instances[2].offset, Vector3::new(-3.1, 4.2, 0.0));
}

#[test]
fn gears_counter_rotate_with_phase() {
    let train = GearTrain::classic();
    let anim = AnimState { angle_deg: 10.0 };

    let poses = train.poses(&anim);
    assert_eq!(poses[0].angle_deg, 10.0, "gear 1 follows the master angle");
    assert_eq!(poses[1].angle_deg, -29.0, "gear 2 is -2·angle - 9°");
    assert_eq!(poses[2].angle_deg, -45.0, "gear 3 is -2·angle - 25°");
}

#[test]
fn animation_follows_the_clock() {
    let mut anim = AnimState::default();
    assert_eq!(anim.angle_deg, 0.0);

    anim.sync(&TestClock(2.5));
    assert_eq!(anim.angle_deg, 250.0, "100 degrees of rotation per second");

    anim.sync(&TestClock(0.0));
    assert_eq!(anim.angle_deg, 0.0, "sync is absolute, not incremental");
}

#[test]
fn pose_matrix_translates_and_spins() {
    let pose = GearPose {
        offset: Vector3::new(-3.0, -2.0, 0.0),
        angle_deg: 90.0,
    };
    let m = pose.matrix();

    let origin = m.transform_point(&Point3::origin());
    approx::assert_relative_eq!(origin.x, -3.0, epsilon = EPSILON);
    approx::assert_relative_eq!(origin.y, -2.0, epsilon = EPSILON);

    // A quarter turn about z maps +x to +y.
    let x = m.transform_vector(&Vector3::x());
    approx::assert_relative_eq!(x.x, 0.0, epsilon = EPSILON);
    approx::assert_relative_eq!(x.y, 1.0, epsilon = EPSILON);
}

#[test]
fn view_state_steps_five_degrees_per_press() {
    let mut view = ViewState::default();
    assert_eq!(
        (view.rot_x_deg, view.rot_y_deg, view.rot_z_deg),
        (20.0, 30.0, 0.0)
    );

    assert!(view.apply(ViewCommand::RotateUp));
    assert_eq!(view.rot_x_deg, 25.0);
    assert!(view.apply(ViewCommand::RotateDown));
    assert!(view.apply(ViewCommand::RotateDown));
    assert_eq!(view.rot_x_deg, 15.0);

    assert!(view.apply(ViewCommand::RotateLeft));
    assert_eq!(view.rot_y_deg, 35.0);
    assert!(view.apply(ViewCommand::RotateRight));
    assert_eq!(view.rot_y_deg, 30.0);

    assert!(view.apply(ViewCommand::RollLeft));
    assert_eq!(view.rot_z_deg, -5.0);
    assert!(view.apply(ViewCommand::RollRight));
    assert_eq!(view.rot_z_deg, 0.0);

    let before = view;
    assert!(
        !view.apply(ViewCommand::Quit),
        "quit is not a view mutation"
    );
    assert_eq!(view, before);
}

#[test]
fn view_matrix_pulls_the_camera_back() {
    let view = ViewState::default();
    let m = view.view_matrix();
    approx::assert_relative_eq!(m[(2, 3)], CAMERA_PULLBACK, epsilon = EPSILON);

    // Identity rotation leaves only the pull-back.
    let plain = ViewState {
        rot_x_deg: 0.0,
        rot_y_deg: 0.0,
        rot_z_deg: 0.0,
    };
    let p = plain.view_matrix().transform_point(&Point3::origin());
    approx::assert_relative_eq!(p.z, CAMERA_PULLBACK, epsilon = EPSILON);
}

#[test]
fn frustum_tracks_viewport_aspect() {
    let square = Frustum::for_viewport(300, 300);
    assert_eq!(square.right, 2.5, "half-width is znear * 0.5");
    assert_eq!(square.top, 2.5);
    assert_eq!(square.left, -2.5);
    assert_eq!(square.znear, 5.0);
    assert_eq!(square.zfar, 30.0);

    let wide = Frustum::for_viewport(600, 300);
    assert_eq!(wide.right, 2.5, "width stays fixed");
    assert_eq!(wide.top, 1.25, "height follows the aspect ratio");
}

#[test]
fn frustum_matrix_matches_the_projection_formula() {
    let m = Frustum::for_viewport(300, 300).matrix();
    approx::assert_relative_eq!(m[(0, 0)], 2.0, epsilon = EPSILON);
    approx::assert_relative_eq!(m[(1, 1)], 2.0, epsilon = EPSILON);
    approx::assert_relative_eq!(m[(2, 2)], -1.4, epsilon = EPSILON);
    approx::assert_relative_eq!(m[(2, 3)], -12.0, epsilon = EPSILON);
    assert_eq!(m[(3, 2)], -1.0);
    assert_eq!(m[(3, 3)], 0.0);

    let wide = Frustum::for_viewport(600, 300).matrix();
    approx::assert_relative_eq!(wide[(1, 1)], 4.0, epsilon = EPSILON);
}

/// Records draw calls instead of rasterizing them.
#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<(Rgba, Real, usize)>,
}

impl GearRenderer for RecordingRenderer {
    fn draw_gear(&mut self, mesh: &GearMesh, color: Rgba, pose: &GearPose) {
        self.calls.push((color, pose.angle_deg, mesh.quad_count()));
    }
}

#[test]
fn draw_hands_each_gear_to_the_renderer_once() {
    let train = GearTrain::classic();
    let meshes = train.build_meshes().unwrap();
    let anim = AnimState { angle_deg: 0.0 };

    let mut renderer = RecordingRenderer::default();
    train.draw(&mut renderer, &meshes, &anim);

    assert_eq!(renderer.calls.len(), 3);
    assert_eq!(renderer.calls[0].0, [0.8, 0.1, 0.0, 1.0]);
    assert_eq!(renderer.calls[0].1, 0.0);
    assert_eq!(renderer.calls[1].1, -9.0, "phase offsets apply at rest");
    assert_eq!(renderer.calls[2].1, -25.0);
    assert_eq!(renderer.calls[0].2, 11 * 20, "the big wheel's quads");
}
