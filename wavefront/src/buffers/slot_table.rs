use derivative::Derivative;

use crate::gpu::{RayState, RaySlot};
use crate::{KernelFeatures, SplitConfig};

/// Fixed-size table of in-flight paths.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct SlotTable {
    #[derivative(Debug = "ignore")]
    slots: Vec<RaySlot>,
}

impl SlotTable {
    pub fn new(config: &SplitConfig, features: &KernelFeatures) -> Self {
        Self {
            slots: vec![
                RaySlot::new(features.subsurface);
                config.global_size() as usize
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[RaySlot] {
        &self.slots
    }

    pub fn as_mut_slice(&mut self) -> &mut [RaySlot] {
        &mut self.slots
    }

    pub fn count(&self, state: RayState) -> usize {
        self.slots.iter().filter(|slot| slot.state == state).count()
    }

    /// Marks all slots as idle, e.g. before starting a new render pass.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.state = RayState::Inactive;
        }
    }
}
