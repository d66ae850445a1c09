use glam::Vec3;

use crate::Ray;

/// Indirect rays leaving a subsurface-scattering hit, queued up so that the
/// slot can trace them one by one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubsurfaceIndirectRays {
    num_rays: u32,
    rays: [Ray; Self::MAX_HITS],
    throughputs: [Vec3; Self::MAX_HITS],
}

impl SubsurfaceIndirectRays {
    /// Maximum number of hits a single BSSRDF sample may produce.
    pub const MAX_HITS: usize = 4;

    /// Forgets all queued rays; stale entries are left in place and simply
    /// overwritten later.
    pub fn reset(&mut self) {
        self.num_rays = 0;
    }

    pub fn len(&self) -> usize {
        self.num_rays as usize
    }

    pub fn is_empty(&self) -> bool {
        self.num_rays == 0
    }

    /// Queues a ray; returns `false` if the queue is already full.
    pub fn push(&mut self, ray: Ray, throughput: Vec3) -> bool {
        let idx = self.num_rays as usize;

        if idx >= Self::MAX_HITS {
            return false;
        }

        self.rays[idx] = ray;
        self.throughputs[idx] = throughput;
        self.num_rays += 1;

        true
    }

    pub fn pop(&mut self) -> Option<(Ray, Vec3)> {
        if self.num_rays == 0 {
            return None;
        }

        self.num_rays -= 1;

        let idx = self.num_rays as usize;

        Some((self.rays[idx], self.throughputs[idx]))
    }
}
