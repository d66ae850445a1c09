use core::sync::atomic::{AtomicU32, Ordering};

/// Atomic work counters shared by all ray slots of a render pass.
///
/// Slots are grouped into pools of [`Self::pool_size()`] consecutive slots
/// and each pool has its own counter, so that claiming work doesn't have
/// every slot contend on a single atomic. The k-th claim within pool `p`
/// maps to the global work index:
///
/// ```text
/// (k / pool_size) * global_size + p * pool_size + (k % pool_size)
/// ```
///
/// i.e. pools interleave through the work index space in chunks of
/// `pool_size`, one chunk per pool per "round"; since `(p, k)` pairs are
/// unique, so are the work indices.
#[derive(Clone, Copy)]
pub struct WorkPoolsView<'a> {
    pools: &'a [AtomicU32],
    pool_size: u32,
    global_size: u32,
}

impl<'a> WorkPoolsView<'a> {
    /// Pool size used when slots are executed in device-sized groups.
    pub const SIZE_GPU: u32 = 64;

    /// Pool size used when each slot is its own execution group.
    pub const SIZE_CPU: u32 = 1;

    pub fn new(
        pools: &'a [AtomicU32],
        pool_size: u32,
        global_size: u32,
    ) -> Self {
        debug_assert!(pool_size > 0);
        debug_assert!(global_size % pool_size == 0);
        debug_assert!(pools.len() as u32 * pool_size >= global_size);

        Self {
            pools,
            pool_size,
            global_size,
        }
    }

    /// Number of pool counters needed for `global_size` slots.
    pub fn pool_count(global_size: u32, pool_size: u32) -> u32 {
        global_size.div_ceil(pool_size)
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size
    }

    pub fn global_size(&self) -> u32 {
        self.global_size
    }

    /// Claims the next work item for given slot; returns `None` if there's no
    /// work left for this slot's pool.
    ///
    /// Never blocks and never hands out the same index twice during a render
    /// pass.
    pub fn claim(self, ray_index: u32, total_work_size: u32) -> Option<u32> {
        debug_assert!(ray_index < self.global_size);

        // With small amount of work there might be more slots than work items;
        // such slots are stopped right away
        if ray_index >= total_work_size {
            return None;
        }

        let pool = ray_index / self.pool_size;

        // Uniqueness relies only on the read-modify-write being atomic; the
        // wave boundary publishes everything else
        let work_index =
            self.pools[pool as usize].fetch_add(1, Ordering::Relaxed);

        let global_work_index = (work_index as u64 / self.pool_size as u64)
            * (self.global_size as u64)
            + (pool as u64) * (self.pool_size as u64)
            + (work_index % self.pool_size) as u64;

        if global_work_index < total_work_size as u64 {
            Some(global_work_index as u32)
        } else {
            None
        }
    }
}
