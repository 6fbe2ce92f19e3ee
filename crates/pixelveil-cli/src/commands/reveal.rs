use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Reveals the text message hidden in an image
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Source image that contains the hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,
}

impl RevealArgs {
    pub fn run(self) -> CliResult<()> {
        let message = pixelveil_core::commands::reveal(&self.media)?;
        println!("{message}");

        Ok(())
    }
}
