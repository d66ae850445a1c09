use bytemuck::{Pod, Zeroable};
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Ray {
    origin: Vec3,

    /// Parametric extent; zero means the ray doesn't participate in path
    /// iteration at all.
    t: f32,

    dir: Vec3,
    time: f32,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3, t: f32) -> Self {
        Self {
            origin,
            t,
            dir,
            time: 0.0,
        }
    }

    /// Returns a zero-extent ray starting at given point.
    pub fn degenerate(origin: Vec3) -> Self {
        Self::new(origin, Vec3::ZERO, 0.0)
    }

    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn dir(&self) -> Vec3 {
        self.dir
    }

    pub fn t(&self) -> f32 {
        self.t
    }

    /// Shutter time this ray was sampled at, in `<0.0, 1.0>`.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_degenerate(&self) -> bool {
        self.t == 0.0
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.dir * distance
    }
}

#[cfg(test)]
mod tests {
    use glam::vec3;

    use super::*;

    #[test]
    fn degenerate() {
        assert!(Ray::degenerate(Vec3::ONE).is_degenerate());
        assert!(Ray::default().is_degenerate());

        let ray = Ray::new(Vec3::ZERO, vec3(0.0, 0.0, 1.0), 10.0);

        assert!(!ray.is_degenerate());
        assert_eq!(vec3(0.0, 0.0, 2.5), ray.at(2.5));
    }
}
