//! Common structs, algorithms etc. used by Wavefront's kernels and renderer.

#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]

mod camera;
mod film;
mod hash;
mod noise;
mod passes;
mod path_radiance;
mod path_state;
mod ray;
mod ray_state;
mod seeder;
mod slot;
mod subsurface;
mod tile;
mod work_pools;

pub use self::camera::*;
pub use self::film::*;
pub use self::hash::*;
pub use self::noise::*;
pub use self::passes::*;
pub use self::path_radiance::*;
pub use self::path_state::*;
pub use self::ray::*;
pub use self::ray_state::*;
pub use self::seeder::*;
pub use self::slot::*;
pub use self::subsurface::*;
pub use self::tile::*;
pub use self::work_pools::*;

pub mod prelude {
    pub use glam::{uvec2, vec2, vec3, vec4, Mat4, UVec2, Vec2, Vec3, Vec4};

    pub use crate::*;
}
