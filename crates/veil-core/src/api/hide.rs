use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::embed::hide_message;
use crate::media::{ensure_lossless_target, open_carrier, save_carrier};
use crate::progress::{NoProgress, ProgressReporter};
use crate::{Result, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// The carrier image, any format that decodes to RGB. It is only read.
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the carrier with the hidden message goes, must be a `.png`
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the hide process and blocks until it is finished
    pub fn execute(self) -> Result<()> {
        self.execute_with(&mut NoProgress)
    }

    /// Like [`HideApi::execute`], reporting the embedding progress to `progress`
    pub fn execute_with<P>(self, progress: &mut P) -> Result<()>
    where
        P: ProgressReporter + ?Sized,
    {
        let Some(message) = self.message.filter(|m| !m.is_empty()) else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        ensure_lossless_target(&output)?;

        let mut buffer = open_carrier(&image)?;
        hide_message(&mut buffer, &message, progress).map_err(|e| {
            error!("Error hiding message in {image:?}: {e}");
            e
        })?;
        debug!("Hid {} characters in {image:?}", message.chars().count());

        save_carrier(buffer, &output)
    }
}
