use glam::{vec4, Mat4, UVec2, Vec3};

use crate::{gpu, Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub projection: Projection,
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,

    /// Size of the whole image, in pixels
    pub resolution: UVec2,

    pub near: f32,
    pub far: f32,

    /// Radius of the lens; zero disables depth of field
    pub aperture: f32,

    /// Distance from the camera to the plane in perfect focus
    pub focal_distance: f32,

    /// Whether rays should be spread across the shutter interval
    pub motion_blur: bool,
}

impl Camera {
    pub(crate) fn serialize(&self) -> Result<gpu::Camera> {
        self.validate()?;

        let (projection, fisheye_fov) = match self.projection {
            Projection::Perspective { .. } => {
                (gpu::Camera::PROJECTION_PERSPECTIVE, 0.0)
            }
            Projection::Orthographic { .. } => {
                (gpu::Camera::PROJECTION_ORTHOGRAPHIC, 0.0)
            }
            Projection::Fisheye { fov } => {
                (gpu::Camera::PROJECTION_FISHEYE, fov)
            }
        };

        Ok(gpu::Camera {
            raster_to_camera: self.raster_to_camera(),
            camera_to_world: self.camera_to_world(),
            d0: vec4(
                f32::from_bits(projection),
                self.aperture,
                self.focal_distance,
                fisheye_fov,
            ),
            d1: vec4(
                self.near,
                self.far - self.near,
                if self.motion_blur { 1.0 } else { -1.0 },
                0.0,
            ),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.resolution.x == 0 || self.resolution.y == 0 {
            return Err(Error::InvalidCamera("resolution must be non-zero"));
        }

        match self.projection {
            Projection::Perspective { fov }
                if !(fov > 0.0 && fov < std::f32::consts::PI) =>
            {
                return Err(Error::InvalidCamera(
                    "perspective field of view must lay within (0, pi)",
                ));
            }

            Projection::Orthographic { height } if !(height > 0.0) => {
                return Err(Error::InvalidCamera(
                    "orthographic height must be positive",
                ));
            }

            Projection::Fisheye { fov } if !(fov > 0.0) => {
                return Err(Error::InvalidCamera(
                    "fisheye field of view must be positive",
                ));
            }

            _ => (),
        }

        if self.position == self.look_at {
            return Err(Error::InvalidCamera(
                "position and look-at point must differ",
            ));
        }

        let forward = (self.look_at - self.position).normalize();

        if self.up.cross(forward).length_squared() == 0.0 {
            return Err(Error::InvalidCamera(
                "up vector must not be parallel to the view direction",
            ));
        }

        if self.near < 0.0 || self.far < self.near {
            return Err(Error::InvalidCamera(
                "clipping range must satisfy 0 <= near <= far",
            ));
        }

        if self.aperture < 0.0 {
            return Err(Error::InvalidCamera("aperture must not be negative"));
        }

        if self.aperture > 0.0 && self.focal_distance <= 0.0 {
            return Err(Error::InvalidCamera(
                "focal distance must be positive when aperture is set",
            ));
        }

        Ok(())
    }

    /// Maps pixels into camera space, where the camera looks towards +Z and
    /// +Y points up.
    fn raster_to_camera(&self) -> Mat4 {
        let size = self.resolution.as_vec2();
        let aspect = size.x / size.y;

        match self.projection {
            Projection::Perspective { fov } => {
                let half_h = (fov * 0.5).tan();
                let half_w = half_h * aspect;

                Self::raster_to_screen(size, half_w, half_h, 1.0)
            }

            Projection::Orthographic { height } => {
                let half_h = height * 0.5;
                let half_w = half_h * aspect;

                Self::raster_to_screen(size, half_w, half_h, 0.0)
            }

            Projection::Fisheye { .. } => {
                // The image circle gets inscribed into the shorter side
                let extent = size.min_element();

                Mat4::from_cols(
                    vec4(1.0 / extent, 0.0, 0.0, 0.0),
                    vec4(0.0, -1.0 / extent, 0.0, 0.0),
                    vec4(0.0, 0.0, 1.0, 0.0),
                    vec4(
                        0.5 - size.x / (2.0 * extent),
                        0.5 + size.y / (2.0 * extent),
                        0.0,
                        1.0,
                    ),
                )
            }
        }
    }

    /// Maps pixels into a `[-half_w, half_w] x [-half_h, half_h]` rectangle
    /// placed at given depth.
    fn raster_to_screen(
        size: glam::Vec2,
        half_w: f32,
        half_h: f32,
        z: f32,
    ) -> Mat4 {
        Mat4::from_cols(
            vec4(2.0 * half_w / size.x, 0.0, 0.0, 0.0),
            vec4(0.0, -2.0 * half_h / size.y, 0.0, 0.0),
            vec4(0.0, 0.0, 1.0, 0.0),
            vec4(-half_w, half_h, z, 1.0),
        )
    }

    fn camera_to_world(&self) -> Mat4 {
        let forward = (self.look_at - self.position).normalize();
        let right = self.up.cross(forward).normalize();
        let up = forward.cross(right);

        Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            forward.extend(0.0),
            self.position.extend(1.0),
        )
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "{:?}, position={}, look_at={}, resolution={}x{}",
            self.projection,
            self.position,
            self.look_at,
            self.resolution.x,
            self.resolution.y,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            projection: Default::default(),
            position: Vec3::ZERO,
            look_at: Vec3::Z,
            up: Vec3::Y,
            resolution: UVec2::new(512, 512),
            near: 0.1,
            far: 100.0,
            aperture: 0.0,
            focal_distance: 10.0,
            motion_blur: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// `fov` is the vertical field of view, in radians
    Perspective { fov: f32 },

    /// `height` is the vertical extent of the view, in world units
    Orthographic { height: f32 },

    /// Equidistant fisheye; `fov` is the field of view across the image
    /// circle, in radians
    Fisheye { fov: f32 },
}

impl Default for Projection {
    fn default() -> Self {
        Self::Perspective {
            fov: std::f32::consts::FRAC_PI_2,
        }
    }
}
