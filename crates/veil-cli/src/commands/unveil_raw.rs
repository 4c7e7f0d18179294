use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Dumps the raw least significant bits of an image, without looking for a message end
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source image that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self) -> CliResult<()> {
        veil_core::api::unveil_raw::prepare()
            .from_secret_file(self.media)
            .into_raw_file(self.output_file)
            .execute()?;

        Ok(())
    }
}
