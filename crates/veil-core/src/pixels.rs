use crate::capacity;

/// Flattened RGB samples of a carrier image, row-major and channel-interleaved.
///
/// Only bit 0 of a sample is ever touched by the embedder.
/// The constructor trusts the caller: a `samples` vector that is shorter or
/// longer than `width * height * 3` is reported by [`crate::embed`] and
/// [`crate::extract`] instead of here.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Self {
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// the number of least significant bits the dimensions provide
    pub fn bit_slots(&self) -> usize {
        capacity::bit_slots(self.width, self.height)
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}
