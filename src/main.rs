// main.rs
//
// Build the classic three-gear train, report what was generated, and write
// each wheel to an STL file. A render loop would bake the same meshes into
// GPU buffers instead; this binary is the CPU-side dry run.

use gearmesh::scene::{AnimState, Clock, GearTrain};
use gearmesh::view::{Frustum, ViewState};
use std::process::ExitCode;
use std::time::Instant;

/// Wall-clock seconds since program start.
struct SystemClock {
    start: Instant,
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

fn main() -> ExitCode {
    let train = GearTrain::classic();
    let meshes = match train.build_meshes() {
        Ok(meshes) => meshes,
        Err(err) => {
            eprintln!("invalid gear spec: {err}");
            return ExitCode::FAILURE;
        },
    };

    for (instance, mesh) in train.instances.iter().zip(&meshes) {
        println!(
            "gear with {} teeth: {} primitives, {} quads, {} triangles",
            instance.spec.teeth,
            mesh.primitives.len(),
            mesh.quad_count(),
            mesh.triangulate().len(),
        );
    }

    // One frame's worth of animation state, as the render loop would
    // compute it.
    let clock = SystemClock {
        start: Instant::now(),
    };
    let mut anim = AnimState::default();
    anim.sync(&clock);
    println!("master angle {:.4} deg after startup", anim.angle_deg);

    // Freeze the train at t = 1s for a stable pose table.
    let anim = AnimState { angle_deg: 100.0 };
    for (instance, pose) in train.instances.iter().zip(train.poses(&anim)) {
        println!(
            "  {:2} teeth at ({:+.1}, {:+.1}): rotated {:+.1} deg",
            instance.spec.teeth, pose.offset.x, pose.offset.y, pose.angle_deg
        );
    }

    let view = ViewState::default();
    let frustum = Frustum::for_viewport(300, 300);
    println!(
        "view rotation ({}, {}, {}) deg; frustum x in [{}, {}], z in [{}, {}]",
        view.rot_x_deg,
        view.rot_y_deg,
        view.rot_z_deg,
        frustum.left,
        frustum.right,
        frustum.znear,
        frustum.zfar,
    );

    #[cfg(feature = "stl-io")]
    {
        let _ = std::fs::create_dir_all("stl");
        for (i, mesh) in meshes.iter().enumerate() {
            let name = format!("gear{}", i + 1);
            match mesh.to_stl_binary(&name) {
                Ok(bytes) => {
                    let _ = std::fs::write(format!("stl/{name}.stl"), bytes);
                },
                Err(err) => {
                    eprintln!("failed to export {name}: {err}");
                    return ExitCode::FAILURE;
                },
            }
        }
        println!("wrote stl/gear1.stl .. stl/gear3.stl");
    }

    ExitCode::SUCCESS
}
