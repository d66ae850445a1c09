use bytemuck::{Pod, Zeroable};

/// Rectangular region of the image being rendered during a render pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct WorkTile {
    /// Pixel coordinates of the tile's top-left corner
    pub x: u32,
    pub y: u32,

    /// Size of the tile, in pixels
    pub w: u32,
    pub h: u32,

    pub start_sample: u32,
    pub num_samples: u32,

    /// Added to `x + y * stride` to get the pixel's index into the film and
    /// rng-state buffers; usually `-(tile.x + tile.y * stride)` shifted by
    /// wherever the tile lives in those buffers.
    pub offset: i32,

    /// Row stride of the film and rng-state buffers, in pixels
    pub stride: u32,
}

impl WorkTile {
    pub fn pixels(&self) -> u32 {
        self.w * self.h
    }

    /// Returns how many work items (pixel x sample) this tile consists of.
    pub fn total_work_size(&self) -> u32 {
        self.pixels() * self.num_samples
    }

    /// Maps a linear work index into the pixel and sample it stands for.
    ///
    /// Work items are enumerated sample-major: all pixels of the first sample
    /// come first, row by row.
    pub fn work_item(&self, index: u32) -> WorkItem {
        let tile_pixels = self.pixels();
        let sample_offset = index / tile_pixels;
        let pixel_offset = index - sample_offset * tile_pixels;
        let y_offset = pixel_offset / self.w;
        let x_offset = pixel_offset - y_offset * self.w;

        WorkItem {
            index,
            x: self.x + x_offset,
            y: self.y + y_offset,
            sample: self.start_sample + sample_offset,
        }
    }

    /// Returns index of given pixel in the film and rng-state buffers.
    pub fn pixel_idx(&self, x: u32, y: u32) -> u32 {
        let idx =
            self.offset as i64 + x as i64 + (y as i64) * (self.stride as i64);

        debug_assert!(
            idx >= 0 && idx <= u32::MAX as i64,
            "pixel {x}x{y} lays outside of the buffer"
        );

        idx as u32
    }

    /// Returns offset of given pixel's first pass in the film buffer.
    pub fn buffer_offset(&self, x: u32, y: u32, pass_stride: u32) -> u32 {
        self.pixel_idx(x, y) * pass_stride
    }
}

/// Single (pixel, sample) unit of work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WorkItem {
    pub index: u32,
    pub x: u32,
    pub y: u32,
    pub sample: u32,
}
