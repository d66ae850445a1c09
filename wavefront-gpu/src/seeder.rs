use glam::Vec2;

use crate::{hash_uint2, Camera, Noise, Ray};

/// Derives per-sample random state and the primary ray of a path.
///
/// Implementations must be deterministic (the same inputs always yield the
/// same hash and ray) and should produce independent streams for distinct
/// `(x, y, sample)` triples.
pub trait PathSeeder {
    /// `rng_state` is the word stored for this pixel in the rng-state buffer.
    fn seed(&self, rng_state: u32, sample: u32, x: u32, y: u32) -> (u32, Ray);
}

/// Outcome of seeding a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimarySample {
    /// Ray has non-zero extent and takes part in path iteration.
    Valid { rng_hash: u32, ray: Ray },

    /// Ray has zero extent (e.g. the sample fell outside of the lens or the
    /// image circle) and contributes nothing.
    Degenerate { ray: Ray },
}

impl PrimarySample {
    pub fn seed(
        seeder: &impl PathSeeder,
        rng_state: u32,
        sample: u32,
        x: u32,
        y: u32,
    ) -> Self {
        let (rng_hash, ray) = seeder.seed(rng_state, sample, x, y);

        if ray.is_degenerate() {
            Self::Degenerate { ray }
        } else {
            Self::Valid { rng_hash, ray }
        }
    }
}

/// Seeds paths by sampling a camera.
#[derive(Clone, Copy, Debug)]
pub struct CameraSeeder<'a> {
    camera: &'a Camera,
    seed: u32,
}

impl<'a> CameraSeeder<'a> {
    pub fn new(camera: &'a Camera, seed: u32) -> Self {
        Self { camera, seed }
    }
}

impl PathSeeder for CameraSeeder<'_> {
    fn seed(&self, rng_state: u32, sample: u32, x: u32, y: u32) -> (u32, Ray) {
        let rng_hash = hash_uint2(x, y) ^ self.seed ^ rng_state;
        let mut noise = Noise::new(rng_hash, sample);

        let filter = noise.sample_vec2();

        let lens = if self.camera.aperture_size() > 0.0 {
            noise.sample_vec2()
        } else {
            Vec2::ZERO
        };

        let time = if self.camera.has_motion_blur() {
            noise.sample()
        } else {
            0.0
        };

        let ray = self.camera.sample(x, y, filter, lens, time);

        (rng_hash, ray)
    }
}
