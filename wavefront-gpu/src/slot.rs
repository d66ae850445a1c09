use glam::Vec3;

use crate::{
    PathRadiance, PathState, Ray, RayState, SubsurfaceIndirectRays, WorkItem,
};

/// State of a single in-flight path.
///
/// Slots live in a fixed-size table indexed by the slot id; during a wave
/// each slot is owned exclusively by the kernel invocation processing it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RaySlot {
    pub state: RayState,
    pub ray: Ray,
    pub throughput: Vec3,
    pub radiance: PathRadiance,
    pub path: PathState,

    /// Work item this slot has claimed most recently
    pub work: WorkItem,

    /// Offset of this slot's pixel in the film buffer; all stages must write
    /// there instead of recomputing it
    pub buffer_offset: u32,

    /// Present only when subsurface scattering is compiled into the kernels
    pub subsurface: Option<SubsurfaceIndirectRays>,
}

impl RaySlot {
    pub fn new(subsurface: bool) -> Self {
        Self {
            subsurface: subsurface.then(Default::default),
            ..Default::default()
        }
    }
}
