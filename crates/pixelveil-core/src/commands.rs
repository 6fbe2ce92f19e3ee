use std::path::Path;

use crate::media::{Carrier, Persist};
use crate::result::Result;

/// Hides `message` inside the carrier image and writes the result to
/// `target` as a PNG file.
pub fn conceal(carrier: &Path, target: &Path, message: &str) -> Result<()> {
    let mut media = Carrier::from_file(carrier)?;
    media.conceal_message(message)?;
    media.save_as(target)
}

/// Recovers the hidden message from `secret_media`.
pub fn reveal(secret_media: &Path) -> Result<String> {
    let media = Carrier::from_file(secret_media)?;
    media.reveal_message()
}
