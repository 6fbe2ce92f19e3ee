use std::fs::File;
use std::path::Path;

use image::RgbImage;
use log::error;

use crate::error::VeilError;
use crate::media::image::overwrite_codec::{hide_message, unveil_message};
use crate::result::Result;

use super::Persist;

/// a carrier image for steganography
#[derive(Debug, Clone)]
pub struct Carrier {
    image: RgbImage,
}

impl Carrier {
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Decodes an image file into a carrier. PNG and JPEG input is accepted;
    /// saving always produces PNG (see [`Persist`]) because a lossy target
    /// would corrupt the hidden envelope.
    pub fn from_file(f: &Path) -> Result<Self> {
        if let Some(ext) = f.extension() {
            let ext = ext.to_str().unwrap_or_default().to_lowercase();
            match ext.as_str() {
                "png" | "jpg" | "jpeg" => Ok(Self::from_image(
                    image::open(f)
                        .map_err(|_e| VeilError::InvalidImageMedia)?
                        .to_rgb8(),
                )),
                _ => Err(VeilError::UnsupportedMedia),
            }
        } else {
            Err(VeilError::UnsupportedMedia)
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn conceal_message(&mut self, message: &str) -> Result<&mut Self> {
        hide_message(&mut self.image, message)?;

        Ok(self)
    }

    pub fn reveal_message(&self) -> Result<String> {
        unveil_message(&self.image)
    }

    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&mut self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                VeilError::ImageEncodingError
            })
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            VeilError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn should_reject_media_without_an_image_extension() {
        let result = Carrier::from_file(Path::new("Cargo.toml"));
        match result.err() {
            Some(VeilError::UnsupportedMedia) => (),
            _ => panic!("expected UnsupportedMedia"),
        }
    }

    #[test]
    fn should_reject_a_file_that_is_not_an_image() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let fake = dir.path().join("fake.png");
        File::create(&fake)
            .and_then(|mut f| f.write_all(b"not a png"))
            .expect("Failed to write fake image");

        let result = Carrier::from_file(&fake);
        match result.err() {
            Some(VeilError::InvalidImageMedia) => (),
            _ => panic!("expected InvalidImageMedia"),
        }
    }

    #[test]
    fn should_save_and_reload_a_carrier_losslessly() {
        let dir = TempDir::new().expect("Failed to create temporary directory");
        let target = dir.path().join("secret.png");

        let mut carrier = Carrier::from_image(RgbImage::new(5, 5));
        carrier
            .conceal_message("Hello World!")
            .expect("Cannot conceal message")
            .save_as(&target)
            .expect("Cannot save carrier");

        let reloaded = Carrier::from_file(&target).expect("Cannot reload carrier");
        assert_eq!(reloaded.reveal_message().unwrap(), "Hello World!");
    }
}
