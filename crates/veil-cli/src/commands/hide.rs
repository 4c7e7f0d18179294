use std::path::PathBuf;

use clap::Args;
use dialoguer::Input;
use log::info;
use veil_core::Job;

use super::await_job;
use crate::CliResult;

/// Hides a text message in an image, the result is always written as PNG
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG or JPEG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, asked for interactively if omitted
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let message = match self.message {
            Some(message) => message,
            None => Input::<String>::new()
                .with_prompt("Message to hide")
                .interact_text()?,
        };

        let media = self.media;
        let target = self.write_to_file.clone();
        let job = Job::spawn(move |progress| {
            veil_core::api::hide::prepare()
                .with_message(&message)
                .with_image(media)
                .with_output(target)
                .execute_with(progress)
        });
        await_job(job, "Hiding")?;

        info!(
            "Message hidden successfully and saved as {}",
            self.write_to_file.display()
        );
        Ok(())
    }
}
