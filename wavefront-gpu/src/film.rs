use core::sync::atomic::{AtomicU32, Ordering};

use glam::{vec4, Vec3, Vec4};

/// Output buffer where render passes accumulate their results.
///
/// Each pixel occupies `pass_stride` consecutive floats; floats are stored as
/// their bit patterns inside atomics so that many slots can accumulate into
/// the buffer at once.
#[derive(Clone, Copy)]
pub struct FilmView<'a> {
    buffer: &'a [AtomicU32],
}

impl<'a> FilmView<'a> {
    pub fn new(buffer: &'a [AtomicU32]) -> Self {
        Self { buffer }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn get(self, idx: u32) -> f32 {
        f32::from_bits(self.buffer[idx as usize].load(Ordering::Relaxed))
    }

    pub fn get_float4(self, offset: u32) -> Vec4 {
        vec4(
            self.get(offset),
            self.get(offset + 1),
            self.get(offset + 2),
            self.get(offset + 3),
        )
    }

    /// Atomically adds `value` to the float at `idx`.
    pub fn add(self, idx: u32, value: f32) {
        let _ = self.buffer[idx as usize].fetch_update(
            Ordering::Relaxed,
            Ordering::Relaxed,
            |bits| Some((f32::from_bits(bits) + value).to_bits()),
        );
    }

    /// Accumulates a three-channel pass starting at `offset`.
    pub fn write_pass_float3(self, offset: u32, value: Vec3) {
        self.add(offset, value.x);
        self.add(offset + 1, value.y);
        self.add(offset + 2, value.z);
    }

    /// Accumulates a four-channel pass starting at `offset`.
    pub fn write_pass_float4(self, offset: u32, value: Vec4) {
        self.add(offset, value.x);
        self.add(offset + 1, value.y);
        self.add(offset + 2, value.z);
        self.add(offset + 3, value.w);
    }
}
