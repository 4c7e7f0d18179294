use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how long a message an image can take
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier image to inspect
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let report = veil_core::api::capacity::of_file(&self.media)?;
        println!("{}: {report}", self.media.display());

        Ok(())
    }
}
