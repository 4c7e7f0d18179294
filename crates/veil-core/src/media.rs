//! Reading carrier images from disk and writing them back losslessly.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};
use log::{debug, error};

use crate::pixels::PixelBuffer;
use crate::{Result, SteganoError};

impl From<RgbImage> for PixelBuffer {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        PixelBuffer::new(width, height, image.into_raw())
    }
}

/// alpha and any other extra channel is dropped
impl From<&DynamicImage> for PixelBuffer {
    fn from(image: &DynamicImage) -> Self {
        image.to_rgb8().into()
    }
}

impl PixelBuffer {
    /// turns the samples back into an image, fails if they do not match the dimensions
    pub fn into_image(self) -> Result<RgbImage> {
        let (width, height) = self.dimensions();
        RgbImage::from_raw(width, height, self.into_samples()).ok_or_else(|| {
            error!("Pixel buffer does not match its dimensions {width}x{height}");
            SteganoError::ImageEncodingError
        })
    }
}

/// Opens any image the enabled codecs can decode and flattens it into RGB samples
pub fn open_carrier(path: impl AsRef<Path>) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| {
        error!("Error opening carrier {path:?}: {e}");
        SteganoError::InvalidImageMedia
    })?;
    let (width, height) = image.dimensions();
    debug!("Opened carrier {path:?} with {width}x{height} pixels");

    Ok(PixelBuffer::from(&image))
}

/// Writes `buffer` as PNG to `path`. Only `.png` targets are accepted.
pub fn save_carrier(buffer: PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_lossless_target(path)?;

    let file = File::create(path).map_err(|e| {
        error!("Error creating file {path:?}: {e}");
        SteganoError::WriteError { source: e }
    })?;
    save_to_writer(buffer, file)?;
    debug!("Saved carrier to {path:?}");

    Ok(())
}

/// Encodes `buffer` as PNG into any seekable writer
pub fn save_to_writer<W: Write + Seek>(buffer: PixelBuffer, mut writer: W) -> Result<()> {
    buffer
        .into_image()?
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
}

pub(crate) fn ensure_lossless_target(path: &Path) -> Result<()> {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if is_png {
        Ok(())
    } else {
        Err(SteganoError::LossyTarget)
    }
}
