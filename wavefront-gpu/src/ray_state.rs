/// Lifecycle state of a ray slot.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RayState {
    /// Slot has no work and is skipped by all stages until the next render
    /// pass.
    #[default]
    Inactive = 0,

    /// Slot holds a claimed, non-degenerate ray that's being traced.
    Active = 1,

    /// Slot is done with its work item and should claim a new one during the
    /// next wave.
    ToRegenerate = 2,
}

impl RayState {
    pub fn needs_regeneration(self) -> bool {
        self == Self::ToRegenerate
    }
}
