use std::sync::atomic::AtomicU32;

use derivative::Derivative;
use log::debug;

use crate::{gpu, SplitConfig};

/// Work counters of a split controller, one per pool of slots.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct WorkPools {
    pool_size: u32,
    global_size: u32,

    #[derivative(Debug = "ignore")]
    pools: Vec<AtomicU32>,
}

impl WorkPools {
    pub fn new(config: &SplitConfig) -> Self {
        debug!(
            "Allocating work pools; pools={}, pool_size={}",
            config.pool_count(),
            config.pool_size,
        );

        Self {
            pool_size: config.pool_size,
            global_size: config.global_size(),
            pools: (0..config.pool_count())
                .map(|_| AtomicU32::new(0))
                .collect(),
        }
    }

    /// Rewinds all counters; must happen between render passes and never
    /// during one.
    pub fn reset(&mut self) {
        for pool in &mut self.pools {
            *pool.get_mut() = 0;
        }
    }

    /// Returns how many claims have been made in total, successful or not.
    pub fn claims(&mut self) -> u64 {
        self.pools
            .iter_mut()
            .map(|pool| *pool.get_mut() as u64)
            .sum()
    }

    pub(crate) fn view(&self) -> gpu::WorkPoolsView<'_> {
        gpu::WorkPoolsView::new(&self.pools, self.pool_size, self.global_size)
    }
}
