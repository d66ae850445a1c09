use log::{debug, trace};
use rayon::prelude::*;

use crate::gpu::{self, PathSeeder, RayState};
use crate::{utils, Engine, SplitBuffers};

/// Selects which slots a wave runs over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wave {
    /// Every slot, at the beginning of a render pass
    Initial,

    /// Only slots retired by downstream stages
    Regenerate,
}

impl Wave {
    fn includes(self, state: RayState) -> bool {
        match self {
            Wave::Initial => true,
            Wave::Regenerate => state.needs_regeneration(),
        }
    }
}

/// Slot states after a wave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaveReport {
    pub active: usize,
    pub inactive: usize,
    pub to_regenerate: usize,
}

impl WaveReport {
    fn new(slots: &[gpu::RaySlot]) -> Self {
        slots.iter().fold(Self::default(), |mut report, slot| {
            match slot.state {
                RayState::Active => report.active += 1,
                RayState::Inactive => report.inactive += 1,
                RayState::ToRegenerate => report.to_regenerate += 1,
            }

            report
        })
    }

    /// Returns whether all slots are idle, i.e. the render pass has run out
    /// of work and nothing is in flight.
    pub fn is_idle(&self) -> bool {
        self.active == 0 && self.to_regenerate == 0
    }
}

#[derive(Debug)]
pub struct PathInitPass {
    params: gpu::PathInitPassParams,
}

impl PathInitPass {
    pub fn new(engine: &Engine, buffers: &SplitBuffers) -> Self {
        debug!("Initializing pass: path-init");

        Self {
            params: gpu::PathInitPassParams {
                seed: engine.integrator().seed,
                total_work_size: buffers.tile.total_work_size(),
                num_samples: engine.integrator().aa_samples,
                pass_stride: engine.film().pass_stride,
                use_light_pass: engine.features().light_pass as u32,
            },
        }
    }

    pub fn params(&self) -> &gpu::PathInitPassParams {
        &self.params
    }

    /// Picks up tile changes made between render passes.
    pub fn update(&mut self, buffers: &SplitBuffers) {
        self.params.total_work_size = buffers.tile.total_work_size();
    }

    /// Runs the wave, seeding paths from the controller's camera.
    pub fn run(&self, buffers: &mut SplitBuffers, wave: Wave) -> WaveReport {
        let camera = buffers.camera;
        let seeder = gpu::CameraSeeder::new(&camera, self.params.seed);

        self.run_with(buffers, wave, &seeder)
    }

    pub fn run_with(
        &self,
        buffers: &mut SplitBuffers,
        wave: Wave,
        seeder: &(impl PathSeeder + Sync),
    ) -> WaveReport {
        let SplitBuffers {
            tile,
            work_pools,
            rng_state,
            film,
            slots,
            ..
        } = buffers;

        let tile = &*tile;
        let work_pools = work_pools.view();
        let film = film.view();
        let rng_state = rng_state.as_slice();

        utils::measure("path-init", || {
            slots.as_mut_slice().par_iter_mut().enumerate().for_each(
                |(ray_index, slot)| {
                    if !wave.includes(slot.state) {
                        return;
                    }

                    wavefront_kernels::path_init::main(
                        ray_index as u32,
                        &self.params,
                        tile,
                        seeder,
                        work_pools,
                        rng_state,
                        film,
                        slot,
                    );
                },
            );
        });

        let report = WaveReport::new(slots.as_slice());

        trace!("Wave finished: {wave:?}, {report:?}");

        report
    }
}
