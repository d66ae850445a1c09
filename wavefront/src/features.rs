use rand::Rng;

use crate::{gpu, Error, Result};

/// Capabilities compiled into the kernels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KernelFeatures {
    /// Whether paths accumulate per-component light passes besides the
    /// combined emission
    pub light_pass: bool,

    /// Whether slots carry indirect subsurface rays
    pub subsurface: bool,
}

/// Layout of the film buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Film {
    /// Number of floats each pixel occupies; the first four hold the combined
    /// pass
    pub pass_stride: u32,
}

impl Film {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.pass_stride < 4 {
            return Err(Error::PassStrideTooSmall(self.pass_stride));
        }

        Ok(())
    }
}

impl Default for Film {
    fn default() -> Self {
        Self { pass_stride: 4 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Integrator {
    /// Mixed into every pixel's random stream
    pub seed: u32,

    /// Number of AA samples per pixel for the whole render
    pub aa_samples: u32,
}

impl Integrator {
    /// Creates an integrator with a random seed.
    pub fn randomized(aa_samples: u32) -> Self {
        Self {
            seed: rand::thread_rng().gen(),
            aa_samples,
        }
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self {
            seed: 0,
            aa_samples: 1,
        }
    }
}

/// Shape of the slot table a split controller drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    /// Number of in-flight paths requested
    pub slots: u32,

    /// Number of consecutive slots sharing a single work counter
    pub pool_size: u32,
}

impl SplitConfig {
    pub fn new(slots: u32) -> Self {
        Self {
            slots,
            ..Default::default()
        }
    }

    /// Configures one work counter per slot, which is what sequential
    /// devices do.
    pub fn with_cpu_pools(mut self) -> Self {
        self.pool_size = gpu::WorkPoolsView::SIZE_CPU;
        self
    }

    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Returns the actual number of slots: work pools partition slots evenly,
    /// so the requested amount is rounded up to a multiple of the pool size.
    pub fn global_size(&self) -> u32 {
        self.slots.div_ceil(self.pool_size) * self.pool_size
    }

    pub fn pool_count(&self) -> u32 {
        self.global_size() / self.pool_size
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.slots == 0 {
            return Err(Error::NoSlots);
        }

        if self.pool_size == 0 {
            return Err(Error::ZeroPoolSize);
        }

        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            slots: 1024 * 1024,
            pool_size: gpu::WorkPoolsView::SIZE_GPU,
        }
    }
}
