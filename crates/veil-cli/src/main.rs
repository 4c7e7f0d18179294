use std::fmt::{self, Debug, Formatter};

use clap::Parser;
use thiserror::Error;
use veil_core::SteganoError;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error)]
pub enum CliError {
    #[error(transparent)]
    Stegano(#[from] SteganoError),

    #[error("Failed to read the message from the terminal")]
    Prompt(#[from] dialoguer::Error),

    #[error("Failed to write the unveiled message")]
    Output(#[from] std::io::Error),
}

impl Debug for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // `main` prints errors with Debug, show the readable chain instead
        write!(f, "{self}")?;
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            write!(f, "\n  caused by: {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}

fn main() -> CliResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::UnveilRaw(args) => args.run(),
        Commands::Capacity(args) => args.run(),
    }
}
