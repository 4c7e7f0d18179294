use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::extract::lsb_bytes;
use crate::media::open_carrier;
use crate::{Result, SteganoError};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps the whole least significant bit plane of an image into a file,
/// without looking for a terminator.
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl UnveilRawApi {
    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the file where the raw bytes will be written to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(SteganoError::TargetNotSet);
        };

        let buffer = open_carrier(&secret_media)?;
        let raw = lsb_bytes(&buffer)?;

        let mut destination = File::create(&destination_file)
            .map_err(|source| SteganoError::WriteError { source })?;
        destination
            .write_all(&raw)
            .map_err(|source| SteganoError::WriteError { source })?;
        debug!("Wrote {} raw bytes to {destination_file:?}", raw.len());

        Ok(())
    }
}
