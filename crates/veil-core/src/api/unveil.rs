use std::path::{Path, PathBuf};

use log::debug;

use crate::extract::extract;
use crate::media::open_carrier;
use crate::progress::{NoProgress, ProgressReporter};
use crate::{Result, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the secret image that contains the message to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished.
    ///
    /// `Ok(None)` means the image does not carry a message.
    pub fn execute(self) -> Result<Option<String>> {
        self.execute_with(&mut NoProgress)
    }

    /// Like [`UnveilApi::execute`], reporting the scan progress to `progress`
    pub fn execute_with<P>(self, progress: &mut P) -> Result<Option<String>>
    where
        P: ProgressReporter + ?Sized,
    {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let buffer = open_carrier(&secret_media)?;
        let message = extract(&buffer, progress)?;
        match &message {
            Some(text) => debug!(
                "Unveiled {} characters from {secret_media:?}",
                text.chars().count()
            ),
            None => debug!("No message found in {secret_media:?}"),
        }

        Ok(message)
    }
}
