use core::f32::consts::PI;

use glam::{vec2, Vec2};

use crate::hash_uint2;

/// Per-sample stream of uniform random numbers.
///
/// Streams for different `(rng_hash, sample)` pairs are independent, while
/// the same pair always produces the same sequence.
#[derive(Copy, Clone, Debug)]
pub struct Noise {
    state: u32,
}

impl Noise {
    pub fn new(rng_hash: u32, sample: u32) -> Self {
        Self {
            state: hash_uint2(rng_hash, sample),
        }
    }

    /// Generates a uniform sample in range `<0.0, 1.0)`.
    pub fn sample(&mut self) -> f32 {
        // 24 bits are all an f32 mantissa can hold, so this never rounds up to
        // 1.0
        ((self.sample_int() >> 8) as f32) / ((1u32 << 24) as f32)
    }

    /// Generates a uniform sample in range `<0, u32::MAX>`.
    pub fn sample_int(&mut self) -> u32 {
        self.state =
            self.state.wrapping_mul(747796405).wrapping_add(2891336453);

        let word = ((self.state >> ((self.state >> 28) + 4)) ^ self.state)
            .wrapping_mul(277803737);

        (word >> 22) ^ word
    }

    /// Generates a uniform sample in the unit square.
    pub fn sample_vec2(&mut self) -> Vec2 {
        let u = self.sample();
        let v = self.sample();

        vec2(u, v)
    }
}

/// Maps a point from the unit square into the unit disk, preserving
/// stratification.
///
/// See:
/// - Shirley & Chiu, "A Low Distortion Map Between Disk and Square"
pub fn concentric_disk(uv: Vec2) -> Vec2 {
    let uv = 2.0 * uv - Vec2::ONE;

    if uv == Vec2::ZERO {
        return Vec2::ZERO;
    }

    let (r, theta) = if uv.x.abs() > uv.y.abs() {
        (uv.x, (PI / 4.0) * (uv.y / uv.x))
    } else {
        (uv.y, (PI / 2.0) - (PI / 4.0) * (uv.x / uv.y))
    };

    r * vec2(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn deterministic() {
        let mut a = Noise::new(123, 4);
        let mut b = Noise::new(123, 4);

        for _ in 0..32 {
            assert_eq!(a.sample_int(), b.sample_int());
        }
    }

    #[test]
    fn independent_per_sample() {
        let a: Vec<_> = {
            let mut noise = Noise::new(123, 4);
            (0..8).map(|_| noise.sample_int()).collect()
        };

        let b: Vec<_> = {
            let mut noise = Noise::new(123, 5);
            (0..8).map(|_| noise.sample_int()).collect()
        };

        assert_ne!(a, b);
    }

    #[test]
    fn samples_are_in_range() {
        let mut noise = Noise::new(0, 0);
        let mut sum = 0.0;

        for _ in 0..4096 {
            let sample = noise.sample();

            assert!(sample >= 0.0 && sample < 1.0);
            sum += sample;
        }

        assert_relative_eq!(sum / 4096.0, 0.5, epsilon = 0.05);
    }

    #[test]
    fn concentric_disk_stays_inside_disk() {
        let mut noise = Noise::new(42, 0);

        for _ in 0..1024 {
            let uv = noise.sample_vec2();

            assert!(concentric_disk(uv).length() <= 1.0 + 1e-5);
        }

        assert_eq!(Vec2::ZERO, concentric_disk(vec2(0.5, 0.5)));
    }
}
