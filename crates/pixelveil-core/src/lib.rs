//! # Pixelveil Core API
//!
//! Hides a short text message inside a carrier image and recovers it again.
//! The message is framed by a 3 digit zero padded decimal length field and
//! written over the leading byte-slots of the image, one byte per color
//! channel, rows first. The carrier keeps its dimensions; only the first
//! `3 + length` channel values change.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an in-memory image
//!
//! ```rust
//! use image::RgbImage;
//! use pixelveil_core::{hide_message, unveil_message};
//!
//! let mut carrier = RgbImage::new(10, 10);
//! hide_message(&mut carrier, "Hello World!").unwrap();
//!
//! assert_eq!(unveil_message(&carrier).unwrap(), "Hello World!");
//! ```
//!
//! ## Hide a message inside an image file
//!
//! ```rust,no_run
//! use pixelveil_core::VeilEncoder;
//!
//! VeilEncoder::new()
//!     .use_media("carrier-image.png").unwrap()
//!     .save_as("image-with-a-message-inside.png")
//!     .with_message("Hello World!")
//!     .conceal_and_save()
//!     .unwrap();
//! ```

#![warn(clippy::redundant_else)]

pub mod capacity;
pub mod commands;
pub mod envelope;
pub mod error;
pub mod media;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

use std::path::{Path, PathBuf};

pub use crate::capacity::{available_slots, plan, CapacityPlan, CHANNELS_PER_PIXEL};
pub use crate::envelope::{Envelope, LENGTH_FIELD_LEN, MAX_MESSAGE_LEN};
pub use crate::error::VeilError;
pub use crate::media::image::overwrite_codec::{hide_message, unveil_message};
pub use crate::media::{Carrier, Persist};
pub use crate::result::Result;

/// Fluent front door for hiding a message in an image file.
#[derive(Default)]
pub struct VeilEncoder {
    target: Option<PathBuf>,
    carrier: Option<Carrier>,
    message: Option<String>,
}

impl VeilEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_media(&mut self, input_file: impl AsRef<Path>) -> Result<&mut Self> {
        self.carrier = Some(Carrier::from_file(input_file.as_ref())?);

        Ok(self)
    }

    pub fn save_as(&mut self, output_file: impl AsRef<Path>) -> &mut Self {
        self.target = Some(output_file.as_ref().to_owned());
        self
    }

    pub fn with_message(&mut self, msg: &str) -> &mut Self {
        self.message = Some(msg.to_owned());
        self
    }

    pub fn conceal_and_save(&mut self) -> Result<&mut Self> {
        if self.carrier.is_none() {
            return Err(VeilError::CarrierNotSet);
        }
        if self.target.is_none() {
            return Err(VeilError::TargetNotSet);
        }
        if self.message.is_none() {
            return Err(VeilError::MissingMessage);
        }

        if let (Some(media), Some(target), Some(message)) = (
            self.carrier.as_mut(),
            self.target.as_ref(),
            self.message.as_ref(),
        ) {
            media.conceal_message(message)?.save_as(target)?;
        }

        Ok(self)
    }
}
