use std::io::{Read, Write};

use byteorder::ReadBytesExt;
use image::RgbImage;

use crate::capacity::{self, available_slots};
use crate::envelope::{self, LENGTH_FIELD_LEN};
use crate::error::VeilError;
use crate::media::image::iterators::{Channels, ChannelsMut};
use crate::result::Result;
use crate::universal_decoder::{UniversalDecoder, WholeByteUnveil};
use crate::universal_encoder::{UniversalEncoder, WholeByteHide};

/// Factory for decoder and encoder over a carrier image
pub struct OverwriteCodec;

impl OverwriteCodec {
    /// builds an image decoder that implements `Read`, yielding one byte per
    /// color channel in canonical order
    ///
    /// ## Example how to retrieve a decoder:
    /// ```rust
    /// use std::io::Read;
    /// use image::RgbImage;
    /// use pixelveil_core::media::image::OverwriteCodec;
    ///
    /// let mut image_with_secret = RgbImage::new(10, 10);
    /// pixelveil_core::hide_message(&mut image_with_secret, "Hello World!")
    ///     .expect("Cannot hide in carrier");
    ///
    /// let mut buf = vec![0; 15];
    /// OverwriteCodec::decoder(&image_with_secret)
    ///     .read_exact(&mut buf[..])
    ///     .expect("Cannot read 15 bytes from codec");
    ///
    /// let msg = String::from_utf8(buf).expect("Cannot convert result to string");
    /// assert_eq!(msg, "012Hello World!");
    /// ```
    pub fn decoder<'i>(input: &'i RgbImage) -> Box<dyn Read + 'i> {
        Box::new(UniversalDecoder::new(Channels::new(input), WholeByteUnveil))
    }

    /// builds an image encoder that implements `Write`, spending one color
    /// channel per written byte
    pub fn encoder<'i>(carrier: &'i mut RgbImage) -> Box<dyn Write + 'i> {
        Box::new(UniversalEncoder::new(
            ChannelsMut::new(carrier),
            WholeByteHide,
        ))
    }
}

/// Writes `message` into the leading byte-slots of `image`, length field
/// first.
///
/// The capacity check happens before any slot is touched, so on every error
/// the carrier is bit-identical to before the call. Slots beyond the
/// envelope keep their pixel values.
pub fn hide_message(image: &mut RgbImage, message: &str) -> Result<()> {
    let plan = capacity::plan(message, image.dimensions())?;

    let mut encoder = OverwriteCodec::encoder(image);
    encoder
        .write_all(plan.envelope().as_bytes())
        .map_err(|_e| VeilError::ImageEncodingError)?;

    Ok(())
}

/// Recovers the message from the leading byte-slots of `image`.
///
/// The format carries no marker, so a carrier that never held a message and
/// whose first slots happen to read as digits decodes to spurious text.
pub fn unveil_message(image: &RgbImage) -> Result<String> {
    let available = available_slots(image.dimensions());
    if available < LENGTH_FIELD_LEN {
        return Err(VeilError::MalformedLengthField);
    }

    let mut decoder = OverwriteCodec::decoder(image);
    let mut digits = [0u8; LENGTH_FIELD_LEN];
    for digit in digits.iter_mut() {
        *digit = decoder.read_u8()?;
    }
    let declared = envelope::parse_length_field(&digits)?;

    if LENGTH_FIELD_LEN + declared > available {
        return Err(VeilError::TruncatedPayload {
            declared,
            available,
        });
    }

    let mut payload = vec![0u8; declared];
    decoder
        .read_exact(&mut payload)
        .map_err(|source| VeilError::ReadError { source })?;

    Ok(envelope::decode_payload(&payload))
}
