use derivative::Derivative;

/// Per-pixel words mixed into each pixel's random stream.
///
/// Rendering the same image twice with different rng states yields
/// decorrelated noise; an all-zeros buffer is the neutral state.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct RngStateBuffer {
    #[derivative(Debug = "ignore")]
    data: Vec<u32>,
}

impl RngStateBuffer {
    pub fn new(pixels: usize) -> Self {
        Self {
            data: vec![0; pixels],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }
}

impl From<Vec<u32>> for RngStateBuffer {
    fn from(data: Vec<u32>) -> Self {
        Self { data }
    }
}
