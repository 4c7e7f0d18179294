use std::path::PathBuf;

use clap::Args;
use log::info;
use veil_core::Job;

use super::await_job;
use crate::CliResult;

/// Unveils a text message from an image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source image that contains the secret message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Store the message in that file instead of printing it
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let media = self.media;
        let job = Job::spawn(move |progress| {
            veil_core::api::unveil::prepare()
                .from_secret_file(media)
                .execute_with(progress)
        });

        match (await_job(job, "Unveiling")?, self.output_file) {
            (Some(message), Some(output_file)) => {
                std::fs::write(&output_file, message)?;
                info!("Message written to {}", output_file.display());
            }
            (Some(message), None) => println!("{message}"),
            (None, _) => println!("No hidden message found!"),
        }

        Ok(())
    }
}
