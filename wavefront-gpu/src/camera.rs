use bytemuck::{Pod, Zeroable};
use glam::{vec3, Mat4, Vec2, Vec3, Vec4, Vec4Swizzles};

use crate::{concentric_disk, Ray};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Camera {
    /// Maps raster coordinates (pixels, with `z = 0`) into camera space; for
    /// fisheye cameras camera space is the `<0.0, 1.0>` image square instead.
    pub raster_to_camera: Mat4,

    pub camera_to_world: Mat4,

    /// x - (as u32) projection; see `Camera::PROJECTION_*`
    /// y - aperture size; zero disables depth of field
    /// z - focal distance
    /// w - fisheye field of view, in radians
    pub d0: Vec4,

    /// x - near clip
    /// y - clip length (far clip minus near clip)
    /// z - shutter time; negative disables motion blur
    /// w - unused
    pub d1: Vec4,
}

impl Camera {
    pub const PROJECTION_PERSPECTIVE: u32 = 0;
    pub const PROJECTION_ORTHOGRAPHIC: u32 = 1;
    pub const PROJECTION_FISHEYE: u32 = 2;

    pub fn projection(&self) -> u32 {
        self.d0.x.to_bits()
    }

    pub fn aperture_size(&self) -> f32 {
        self.d0.y
    }

    pub fn focal_distance(&self) -> f32 {
        self.d0.z
    }

    pub fn fisheye_fov(&self) -> f32 {
        self.d0.w
    }

    pub fn near_clip(&self) -> f32 {
        self.d1.x
    }

    pub fn clip_length(&self) -> f32 {
        self.d1.y
    }

    pub fn has_motion_blur(&self) -> bool {
        self.d1.z >= 0.0
    }

    pub fn origin(&self) -> Vec3 {
        self.camera_to_world.w_axis.xyz()
    }

    /// Generates the primary ray for given pixel.
    ///
    /// `filter` and `lens` are uniform samples in the unit square, `time` is
    /// a uniform sample in `<0.0, 1.0>`.
    ///
    /// Returns a ray with zero extent if the sample doesn't map into the
    /// camera's support (e.g. it lays outside of fisheye's image circle).
    pub fn sample(
        &self,
        x: u32,
        y: u32,
        filter: Vec2,
        lens: Vec2,
        time: f32,
    ) -> Ray {
        let raster = vec3(x as f32 + filter.x, y as f32 + filter.y, 0.0);
        let p_camera = self.raster_to_camera.transform_point3(raster);

        let ray = match self.projection() {
            Self::PROJECTION_ORTHOGRAPHIC => {
                self.sample_orthographic(p_camera, lens)
            }
            Self::PROJECTION_FISHEYE => self.sample_fisheye(p_camera),
            _ => self.sample_perspective(p_camera, lens),
        };

        ray.with_time(time)
    }

    fn sample_perspective(&self, p_camera: Vec3, lens: Vec2) -> Ray {
        let pinhole_dir = p_camera.normalize();
        let mut origin = Vec3::ZERO;
        let mut dir = pinhole_dir;

        if self.aperture_size() > 0.0 {
            let lens = concentric_disk(lens) * self.aperture_size();
            let focal_point = dir * (self.focal_distance() / dir.z);

            origin = lens.extend(0.0);
            dir = (focal_point - origin).normalize();
        }

        // Clipping planes are perpendicular to the view axis, so the distance
        // along an off-axis ray is longer
        let z_inv = 1.0 / pinhole_dir.z;

        self.to_world(
            origin,
            dir,
            self.near_clip() * z_inv,
            self.clip_length() * z_inv,
        )
    }

    fn sample_orthographic(&self, p_camera: Vec3, lens: Vec2) -> Ray {
        let mut origin = p_camera;
        let mut dir = Vec3::Z;

        if self.aperture_size() > 0.0 {
            let lens = concentric_disk(lens) * self.aperture_size();
            let focal_point = origin + dir * self.focal_distance();

            origin += lens.extend(0.0);
            dir = (focal_point - origin).normalize();
        }

        self.to_world(origin, dir, self.near_clip(), self.clip_length())
    }

    fn sample_fisheye(&self, p_camera: Vec3) -> Ray {
        let uv = 2.0 * p_camera.truncate() - Vec2::ONE;
        let r = uv.length();

        if r > 1.0 {
            return Ray::degenerate(self.origin());
        }

        let theta = r * self.fisheye_fov() * 0.5;

        let dir_xy = if r > 0.0 {
            uv / r * theta.sin()
        } else {
            Vec2::ZERO
        };

        self.to_world(
            Vec3::ZERO,
            dir_xy.extend(theta.cos()),
            self.near_clip(),
            self.clip_length(),
        )
    }

    fn to_world(&self, origin: Vec3, dir: Vec3, near: f32, t: f32) -> Ray {
        let origin = self.camera_to_world.transform_point3(origin);
        let dir = self.camera_to_world.transform_vector3(dir).normalize();

        Ray::new(origin + dir * near, dir, t)
    }
}
