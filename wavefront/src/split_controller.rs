mod buffers;
mod passes;

use std::ops::Range;

use log::{debug, info};

pub use self::buffers::*;
pub use self::passes::*;
use crate::gpu::{self, PathSeeder};
use crate::{
    Camera, Engine, Error, FilmBuffer, Result, RngStateBuffer, SplitConfig,
    Tile,
};

/// Drives the path-init stage over a single tile.
///
/// A render pass starts with [`Self::init_paths()`], which gives every slot
/// a path; once downstream stages retire paths (by marking their slots
/// [`gpu::RayState::ToRegenerate`]), [`Self::regenerate_paths()`] refills
/// those slots, until there's no work left.
#[derive(Debug)]
pub struct SplitController {
    tile: Tile,
    buffers: SplitBuffers,
    passes: SplitPasses,
}

impl SplitController {
    pub(crate) fn new(
        engine: &Engine,
        camera: &Camera,
        tile: Tile,
        config: SplitConfig,
    ) -> Result<Self> {
        info!(
            "Creating split controller: {}; camera: {}",
            tile.describe(),
            camera.describe()
        );

        config.validate()?;

        let buffers = SplitBuffers::new(engine, camera, &tile, &config)?;
        let passes = SplitPasses::new(engine, &buffers);

        debug!(
            "Split controller created; slots={}, work={}",
            buffers.slots.len(),
            buffers.tile.total_work_size(),
        );

        Ok(Self {
            tile,
            buffers,
            passes,
        })
    }

    /// Runs the first wave of a render pass over all slots.
    pub fn init_paths(&mut self) -> WaveReport {
        self.passes
            .path_init
            .run(&mut self.buffers, Wave::Initial)
    }

    pub fn init_paths_with(
        &mut self,
        seeder: &(impl PathSeeder + Sync),
    ) -> WaveReport {
        self.passes
            .path_init
            .run_with(&mut self.buffers, Wave::Initial, seeder)
    }

    /// Runs a wave over slots marked as [`gpu::RayState::ToRegenerate`].
    pub fn regenerate_paths(&mut self) -> WaveReport {
        self.passes
            .path_init
            .run(&mut self.buffers, Wave::Regenerate)
    }

    pub fn regenerate_paths_with(
        &mut self,
        seeder: &(impl PathSeeder + Sync),
    ) -> WaveReport {
        self.passes
            .path_init
            .run_with(&mut self.buffers, Wave::Regenerate, seeder)
    }

    /// Rewinds the current render pass, so that its work can be claimed
    /// again; the film is kept.
    pub fn reset(&mut self) {
        debug!("Resetting render pass: {}", self.tile.describe());

        self.buffers.work_pools.reset();
        self.buffers.slots.reset();
    }

    /// Starts a new render pass over the same pixels, but different samples.
    pub fn next_pass(&mut self, samples: Range<u32>) -> Result<()> {
        let tile = Tile {
            samples,
            ..self.tile.clone()
        };

        self.buffers.tile = tile.serialize()?;
        self.tile = tile;
        self.passes.path_init.update(&self.buffers);
        self.reset();

        Ok(())
    }

    pub fn set_rng_state(&mut self, rng_state: Vec<u32>) -> Result<()> {
        let needed = self.tile.buffer_pixels();

        if rng_state.len() < needed {
            return Err(Error::BufferTooSmall {
                buffer: "rng-state",
                needed,
                actual: rng_state.len(),
            });
        }

        self.buffers.rng_state = RngStateBuffer::from(rng_state);

        Ok(())
    }

    /// Swaps the film, returning the previous one.
    pub fn replace_film(&mut self, film: FilmBuffer) -> Result<FilmBuffer> {
        let pass_stride = self.passes.path_init.params().pass_stride;

        if film.pass_stride() != pass_stride {
            return Err(Error::PassStrideMismatch {
                expected: pass_stride,
                actual: film.pass_stride(),
            });
        }

        self.tile.validate_addressing(pass_stride)?;

        let needed = self.tile.buffer_pixels() * pass_stride as usize;

        if film.len() < needed {
            return Err(Error::BufferTooSmall {
                buffer: "film",
                needed,
                actual: film.len(),
            });
        }

        Ok(std::mem::replace(&mut self.buffers.film, film))
    }

    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    pub fn film(&self) -> &FilmBuffer {
        &self.buffers.film
    }

    pub fn slots(&self) -> &[gpu::RaySlot] {
        self.buffers.slots.as_slice()
    }

    /// Gives access to slots the way downstream stages have it, e.g. to
    /// retire finished paths.
    pub fn slots_mut(&mut self) -> &mut [gpu::RaySlot] {
        self.buffers.slots.as_mut_slice()
    }

    /// Returns how many claims the work pools have served so far, including
    /// the ones that found no work.
    pub fn claims(&mut self) -> u64 {
        self.buffers.work_pools.claims()
    }
}

impl Drop for SplitController {
    fn drop(&mut self) {
        info!("Deleting split controller: {}", self.tile.describe());
    }
}
