use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Hides a text message in a PNG or JPEG image
#[derive(Args, Debug)]
pub struct ConcealArgs {
    /// Carrier image such as a PNG or JPEG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, up to 999 characters
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl ConcealArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::conceal(&self.media, &self.write_to_file, &self.message)
    }
}
