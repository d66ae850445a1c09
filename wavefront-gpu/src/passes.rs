use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct PathInitPassParams {
    /// Integrator seed, mixed into every pixel's rng hash
    pub seed: u32,

    /// Number of work items in the current render pass
    pub total_work_size: u32,

    /// Number of AA samples per pixel for the whole render
    pub num_samples: u32,

    /// Number of floats each pixel occupies in the film
    pub pass_stride: u32,

    /// 1 if light passes are being accumulated, 0 otherwise
    pub use_light_pass: u32,
}

impl PathInitPassParams {
    pub fn use_light_pass(&self) -> bool {
        self.use_light_pass != 0
    }
}
