use core::ops;

use crate::Ray;

/// Bookkeeping carried along a light path between the split kernels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathState {
    pub flags: PathFlags,

    /// Per-pixel random seed, see [`crate::PathSeeder`]
    pub rng_hash: u32,

    /// Index of the next random dimension to be consumed
    pub rng_offset: u32,

    pub sample: u32,
    pub num_samples: u32,

    pub bounce: u32,
    pub diffuse_bounce: u32,
    pub glossy_bounce: u32,
    pub transmission_bounce: u32,
    pub transparent_bounce: u32,

    pub branch_factor: f32,
    pub min_ray_pdf: f32,
    pub ray_pdf: f32,

    /// Distance travelled through transparent surfaces so far
    pub ray_t: f32,

    /// Shutter time shared by all rays of this path
    pub time: f32,
}

impl PathState {
    /// Random dimensions consumed by the camera (filter, lens, time) before
    /// the path starts bouncing.
    pub const RNG_BASE_NUM: u32 = 5;

    pub fn new(
        rng_hash: u32,
        sample: u32,
        num_samples: u32,
        ray: &Ray,
    ) -> Self {
        Self {
            flags: PathFlags::empty(),
            rng_hash,
            rng_offset: Self::RNG_BASE_NUM,
            sample,
            num_samples,
            bounce: 0,
            diffuse_bounce: 0,
            glossy_bounce: 0,
            transmission_bounce: 0,
            transparent_bounce: 0,
            branch_factor: 1.0,
            min_ray_pdf: f32::MAX,
            ray_pdf: 0.0,
            ray_t: 0.0,
            time: ray.time(),
        }
    }
}

impl Default for PathState {
    fn default() -> Self {
        Self::new(0, 0, 0, &Ray::default())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PathFlags(u32);

impl PathFlags {
    pub const CAMERA: Self = Self(1 << 0);
    pub const REFLECT: Self = Self(1 << 1);
    pub const TRANSMIT: Self = Self(1 << 2);
    pub const DIFFUSE: Self = Self(1 << 3);
    pub const GLOSSY: Self = Self(1 << 4);
    pub const SINGULAR: Self = Self(1 << 5);
    pub const TRANSPARENT: Self = Self(1 << 6);
    pub const SHADOW: Self = Self(1 << 7);
    pub const MIS_SKIP: Self = Self(1 << 8);

    pub fn empty() -> Self {
        Self(0)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl ops::BitOr for PathFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn new() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z, 1.0).with_time(0.25);
        let target = PathState::new(0xcafebabe, 3, 16, &ray);

        assert!(target.flags.is_empty());
        assert_eq!(0xcafebabe, target.rng_hash);
        assert_eq!(PathState::RNG_BASE_NUM, target.rng_offset);
        assert_eq!(3, target.sample);
        assert_eq!(16, target.num_samples);
        assert_eq!(0, target.bounce);
        assert_eq!(0, target.diffuse_bounce);
        assert_eq!(0, target.transparent_bounce);
        assert_eq!(1.0, target.branch_factor);
        assert_eq!(f32::MAX, target.min_ray_pdf);
        assert_eq!(0.25, target.time);
    }

    #[test]
    fn flags() {
        let mut target = PathFlags::CAMERA | PathFlags::DIFFUSE;

        assert!(target.contains(PathFlags::CAMERA));
        assert!(!target.contains(PathFlags::GLOSSY));

        target.remove(PathFlags::CAMERA);
        target.insert(PathFlags::SHADOW);

        assert_eq!(
            (PathFlags::DIFFUSE | PathFlags::SHADOW).get(),
            target.get()
        );
    }
}
