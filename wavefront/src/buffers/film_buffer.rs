use std::sync::atomic::{AtomicU32, Ordering};

use derivative::Derivative;
use glam::Vec4;
use log::debug;

use crate::{gpu, Error, Result};

/// Host-side film: `pixels * pass_stride` floats, accumulated atomically by
/// the kernels.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct FilmBuffer {
    pass_stride: u32,

    #[derivative(Debug = "ignore")]
    data: Vec<AtomicU32>,
}

impl FilmBuffer {
    pub fn new(pixels: usize, pass_stride: u32) -> Self {
        debug!("Allocating film; pixels={pixels}, pass_stride={pass_stride}");

        let data = (0..pixels * pass_stride as usize)
            .map(|_| AtomicU32::new(0.0f32.to_bits()))
            .collect();

        Self { pass_stride, data }
    }

    /// Wraps existing floats, e.g. a film accumulated by a previous render.
    pub fn from_floats(floats: &[f32], pass_stride: u32) -> Result<Self> {
        if pass_stride < 4 {
            return Err(Error::PassStrideTooSmall(pass_stride));
        }

        if floats.len() % pass_stride as usize != 0 {
            return Err(Error::FilmLengthMismatch {
                len: floats.len(),
                pass_stride,
            });
        }

        let data = floats
            .iter()
            .map(|value| AtomicU32::new(value.to_bits()))
            .collect();

        Ok(Self { pass_stride, data })
    }

    pub fn pass_stride(&self) -> u32 {
        self.pass_stride
    }

    /// Returns number of floats in the film.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn pixels(&self) -> usize {
        self.data.len() / self.pass_stride as usize
    }

    pub fn get(&self, idx: usize) -> f32 {
        f32::from_bits(self.data[idx].load(Ordering::Relaxed))
    }

    /// Returns the combined pass of given pixel.
    pub fn pixel(&self, pixel_idx: usize) -> Vec4 {
        self.view()
            .get_float4((pixel_idx * self.pass_stride as usize) as u32)
    }

    pub fn to_vec(&self) -> Vec<f32> {
        (0..self.data.len()).map(|idx| self.get(idx)).collect()
    }

    pub fn clear(&mut self) {
        for value in &mut self.data {
            *value.get_mut() = 0.0f32.to_bits();
        }
    }

    pub(crate) fn view(&self) -> gpu::FilmView<'_> {
        gpu::FilmView::new(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use glam::vec4;

    use super::*;

    #[test]
    fn smoke() {
        let mut target = FilmBuffer::new(3, 5);

        assert_eq!(15, target.len());
        assert_eq!(3, target.pixels());

        target.view().write_pass_float4(5, vec4(1.0, 2.0, 3.0, 4.0));

        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0), target.pixel(1));
        assert_eq!(Vec4::ZERO, target.pixel(2));
        assert_eq!(2.0, target.to_vec()[6]);

        target.clear();

        assert!(target.to_vec().iter().all(|&value| value == 0.0));
    }

    #[test]
    fn from_floats() {
        let floats: Vec<f32> = (1..=8).map(|value| value as f32).collect();
        let target = FilmBuffer::from_floats(&floats, 4).unwrap();

        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0), target.pixel(0));
        assert_eq!(vec4(5.0, 6.0, 7.0, 8.0), target.pixel(1));
        assert_eq!(2, target.pixels());

        assert_eq!(
            Some(Error::FilmLengthMismatch {
                len: 5,
                pass_stride: 4
            }),
            FilmBuffer::from_floats(&floats[..5], 4).err(),
        );

        assert_eq!(
            Some(Error::PassStrideTooSmall(2)),
            FilmBuffer::from_floats(&[], 2).err(),
        );
    }
}
