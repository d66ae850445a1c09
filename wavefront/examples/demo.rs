//! Renders a single pass of a fisheye tile and prints which pixels got a
//! path and which fell outside of the image circle.
//!
//! Run with `RUST_LOG=trace` to see per-wave reports.

use glam::{uvec2, vec3};
use wavefront::gpu::RayState;
use wavefront::{
    Camera, Engine, Film, Integrator, KernelFeatures, Projection, SplitConfig,
    Tile,
};

fn main() -> Result<(), wavefront::Error> {
    env_logger::init();

    let size = uvec2(32, 16);

    let engine = Engine::new(
        KernelFeatures::default(),
        Film::default(),
        Integrator::randomized(1),
    )?;

    let camera = Camera {
        projection: Projection::Fisheye {
            fov: std::f32::consts::PI,
        },
        position: vec3(0.0, 1.0, -5.0),
        look_at: vec3(0.0, 1.0, 0.0),
        resolution: size,
        ..Default::default()
    };

    let mut controller = engine.create_controller(
        &camera,
        Tile::new(uvec2(0, 0), size, 0..1),
        SplitConfig::new(size.x * size.y).with_cpu_pools(),
    )?;

    let report = controller.init_paths();

    let mut mask = vec![' '; (size.x * size.y) as usize];

    for slot in controller.slots() {
        let ch = match slot.state {
            RayState::Active => '#',
            RayState::ToRegenerate => '.',
            RayState::Inactive => continue,
        };

        mask[(slot.work.x + slot.work.y * size.x) as usize] = ch;
    }

    for row in mask.chunks(size.x as usize) {
        println!("{}", row.iter().collect::<String>());
    }

    println!("{report:?}");

    Ok(())
}
