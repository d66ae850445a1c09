use log::debug;

use crate::{
    gpu, Camera, Engine, FilmBuffer, Result, RngStateBuffer, SlotTable,
    SplitConfig, Tile, WorkPools,
};

#[derive(Debug)]
pub struct SplitBuffers {
    pub camera: gpu::Camera,
    pub tile: gpu::WorkTile,
    pub work_pools: WorkPools,
    pub rng_state: RngStateBuffer,
    pub film: FilmBuffer,
    pub slots: SlotTable,
}

impl SplitBuffers {
    pub fn new(
        engine: &Engine,
        camera: &Camera,
        tile: &Tile,
        config: &SplitConfig,
    ) -> Result<Self> {
        debug!("Initializing split buffers");

        tile.validate_within(camera.resolution)?;
        tile.validate_addressing(engine.film().pass_stride)?;

        let pixels = tile.buffer_pixels();

        Ok(Self {
            camera: camera.serialize()?,
            tile: tile.serialize()?,
            work_pools: WorkPools::new(config),
            rng_state: RngStateBuffer::new(pixels),
            film: FilmBuffer::new(pixels, engine.film().pass_stride),
            slots: SlotTable::new(config, engine.features()),
        })
    }
}
