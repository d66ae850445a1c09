//! Host side of the split-kernel path tracer: configuration, buffers and the
//! wave dispatcher driving the kernels over a tile.

mod buffers;
mod camera;
mod error;
mod features;
mod split_controller;
mod tile;
mod utils;
mod version;

use log::info;
pub use wavefront_gpu as gpu;

pub use self::buffers::*;
pub use self::camera::*;
pub use self::error::*;
pub use self::features::*;
pub use self::split_controller::*;
pub use self::tile::*;
pub use self::version::*;

#[derive(Debug)]
pub struct Engine {
    features: KernelFeatures,
    film: Film,
    integrator: Integrator,
}

impl Engine {
    pub fn new(
        features: KernelFeatures,
        film: Film,
        integrator: Integrator,
    ) -> Result<Self> {
        info!("Initializing; version={}", version_number());

        film.validate()?;

        info!(
            "Features: {features:?}; film: {film:?}; integrator: \
             {integrator:?}"
        );

        Ok(Self {
            features,
            film,
            integrator,
        })
    }

    pub fn features(&self) -> &KernelFeatures {
        &self.features
    }

    pub fn film(&self) -> &Film {
        &self.film
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    /// Prepares everything needed to render given tile.
    pub fn create_controller(
        &self,
        camera: &Camera,
        tile: Tile,
        config: SplitConfig,
    ) -> Result<SplitController> {
        SplitController::new(self, camera, tile, config)
    }
}
