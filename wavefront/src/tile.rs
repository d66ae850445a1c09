use std::ops::Range;

use glam::UVec2;

use crate::{gpu, Error, Result};

/// Rectangular part of the image rendered by a single render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Position of the tile's top-left corner within the image
    pub pos: UVec2,

    /// Size of the tile, in pixels
    pub size: UVec2,

    /// Samples rendered during the pass, e.g. `0..16` for the first 16 AA
    /// samples of each pixel
    pub samples: Range<u32>,

    /// Index of the tile's top-left pixel within the film and rng-state
    /// buffers
    pub offset: i64,

    /// Row stride of the film and rng-state buffers, in pixels
    pub stride: u32,
}

impl Tile {
    /// Creates a tile whose buffers contain just the tile itself, row by row.
    pub fn new(pos: UVec2, size: UVec2, samples: Range<u32>) -> Self {
        Self {
            pos,
            size,
            samples,
            offset: 0,
            stride: size.x,
        }
    }

    /// Places the tile within larger buffers.
    pub fn with_buffer_layout(mut self, offset: i64, stride: u32) -> Self {
        self.offset = offset;
        self.stride = stride;
        self
    }

    pub fn num_samples(&self) -> u32 {
        self.samples.end.saturating_sub(self.samples.start)
    }

    pub fn total_work_size(&self) -> u64 {
        self.size.x as u64 * self.size.y as u64 * self.num_samples() as u64
    }

    /// Returns how many pixels the film and rng-state buffers must contain
    /// for this tile to fit.
    pub fn buffer_pixels(&self) -> usize {
        if self.size.x == 0 || self.size.y == 0 {
            return 0;
        }

        let last = self.offset
            + (self.size.y as i64 - 1) * self.stride as i64
            + self.size.x as i64;

        last.max(0) as usize
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.samples.end < self.samples.start {
            return Err(Error::InvalidSampleRange {
                start: self.samples.start,
                end: self.samples.end,
            });
        }

        if self.stride < self.size.x {
            return Err(Error::StrideTooSmall {
                stride: self.stride,
                width: self.size.x,
            });
        }

        if self.offset < 0 {
            return Err(Error::NegativePixelIndex(self.offset));
        }

        let work = self.total_work_size();

        if work > u32::MAX as u64 {
            return Err(Error::TooMuchWork(work));
        }

        // Buffer offsets are 32-bit, so the whole film must be addressable
        let pixels = self.buffer_pixels() as u64;

        if pixels > u32::MAX as u64 {
            return Err(Error::TooMuchWork(pixels));
        }

        if self.pos.x.checked_add(self.size.x).is_none()
            || self.pos.y.checked_add(self.size.y).is_none()
        {
            return Err(Error::TooMuchWork(work));
        }

        Ok(())
    }

    /// Checks that every float of the tile's pixels in a film of given
    /// pass stride can be addressed with a 32-bit offset.
    pub(crate) fn validate_addressing(&self, pass_stride: u32) -> Result<()> {
        let pixels = self.buffer_pixels() as u64;

        let floats = pixels
            .checked_mul(pass_stride as u64)
            .filter(|&floats| floats <= u32::MAX as u64 + 1);

        if floats.is_none() {
            return Err(Error::FilmNotAddressable {
                pixels,
                pass_stride,
            });
        }

        Ok(())
    }

    /// Checks that the tile lays within an image of given size.
    pub(crate) fn validate_within(&self, resolution: UVec2) -> Result<()> {
        let end = self.pos.as_u64vec2() + self.size.as_u64vec2();

        if end.x > resolution.x as u64 || end.y > resolution.y as u64 {
            return Err(Error::TileOutsideImage {
                pos: self.pos,
                size: self.size,
                resolution,
            });
        }

        Ok(())
    }

    pub(crate) fn serialize(&self) -> Result<gpu::WorkTile> {
        self.validate()?;

        let origin =
            self.pos.x as i64 + self.pos.y as i64 * self.stride as i64;

        let offset = i32::try_from(self.offset - origin)
            .map_err(|_| Error::TooMuchWork(self.buffer_pixels() as u64))?;

        Ok(gpu::WorkTile {
            x: self.pos.x,
            y: self.pos.y,
            w: self.size.x,
            h: self.size.y,
            start_sample: self.samples.start,
            num_samples: self.num_samples(),
            offset,
            stride: self.stride,
        })
    }

    pub(crate) fn describe(&self) -> String {
        format!(
            "{}x{} at {}x{}, samples {}..{}",
            self.size.x,
            self.size.y,
            self.pos.x,
            self.pos.y,
            self.samples.start,
            self.samples.end,
        )
    }
}
