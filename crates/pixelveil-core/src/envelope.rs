use crate::error::VeilError;
use crate::result::Result;

/// Number of decimal digits in the length field.
pub const LENGTH_FIELD_LEN: usize = 3;

/// Longest message the length field can describe.
pub const MAX_MESSAGE_LEN: usize = 999;

/// The unit that is written into a carrier: a zero padded decimal length
/// field followed by one byte per message character.
///
/// `"Hi"` frames as the bytes of `"002Hi"`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Envelope {
    bytes: Vec<u8>,
}

impl Envelope {
    /// Frames a message, validating the length ceiling and that every
    /// character fits a single byte-slot.
    pub fn for_message(message: &str) -> Result<Self> {
        let length = message.chars().count();
        if length > MAX_MESSAGE_LEN {
            return Err(VeilError::MessageTooLong { length });
        }

        let mut bytes = Vec::with_capacity(LENGTH_FIELD_LEN + length);
        bytes.extend_from_slice(format!("{length:03}").as_bytes());
        for c in message.chars() {
            if c as u32 > u8::MAX as u32 {
                return Err(VeilError::UnsupportedCharacter(c));
            }
            bytes.push(c as u8);
        }

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Byte-slots the envelope occupies in a carrier, length field included.
    pub fn required_slots(&self) -> usize {
        self.bytes.len()
    }
}

/// Parses the leading length field bytes. Only `[0-9]{3}` is accepted,
/// anything else means the carrier holds no envelope of this format.
pub fn parse_length_field(digits: &[u8; LENGTH_FIELD_LEN]) -> Result<usize> {
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(VeilError::MalformedLengthField);
    }

    Ok(digits
        .iter()
        .fold(0, |length, d| length * 10 + usize::from(d - b'0')))
}

/// Reinterprets extracted payload bytes as text, one character per byte.
pub fn decode_payload(payload: &[u8]) -> String {
    payload.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[test]
    fn should_frame_a_message_with_a_zero_padded_length_field() {
        let envelope = Envelope::for_message("Hi").unwrap();

        assert_eq!(envelope.as_bytes(), b"002Hi");
        assert_eq!(envelope.required_slots(), 5);
    }

    #[test]
    fn should_frame_the_empty_message_as_length_field_only() {
        let envelope = Envelope::for_message("").unwrap();

        assert_eq!(envelope.as_bytes(), b"000");
        assert_eq!(envelope.required_slots(), LENGTH_FIELD_LEN);
    }

    #[test]
    fn should_accept_the_longest_representable_message() {
        let message = "x".repeat(MAX_MESSAGE_LEN);
        let envelope = Envelope::for_message(&message).unwrap();

        assert_eq!(&envelope.as_bytes()[..LENGTH_FIELD_LEN], b"999");
        assert_eq!(envelope.required_slots(), LENGTH_FIELD_LEN + 999);
    }

    #[test]
    fn should_reject_a_message_longer_than_the_length_field() {
        let message = "x".repeat(MAX_MESSAGE_LEN + 1);
        match Envelope::for_message(&message).err() {
            Some(VeilError::MessageTooLong { length }) => assert_eq!(length, 1000),
            _ => panic!("expected MessageTooLong"),
        }
    }

    #[test]
    fn should_frame_every_single_byte_code_point() {
        let envelope = Envelope::for_message("\u{0}ÿ").unwrap();

        assert_eq!(envelope.as_bytes(), &[b'0', b'0', b'2', 0x00, 0xff]);
    }

    #[test]
    fn should_reject_characters_beyond_a_single_byte() {
        match Envelope::for_message("€uro").err() {
            Some(VeilError::UnsupportedCharacter(c)) => assert_eq!(c, '€'),
            _ => panic!("expected UnsupportedCharacter"),
        }
    }

    #[test]
    fn should_parse_a_digit_only_length_field() {
        assert_eq!(parse_length_field(b"000").unwrap(), 0);
        assert_eq!(parse_length_field(b"002").unwrap(), 2);
        assert_eq!(parse_length_field(b"999").unwrap(), 999);
    }

    #[test]
    fn should_reject_non_digit_length_fields() {
        for field in [b"A1!", b"+12", b" 12", b"1.2", b"\x0012"] {
            assert!(
                matches!(
                    parse_length_field(field),
                    Err(VeilError::MalformedLengthField)
                ),
                "field {field:?} should be malformed"
            );
        }
    }

    #[test]
    fn should_decode_payload_bytes_one_character_each() {
        assert_eq!(decode_payload(b"Hi"), "Hi");
        assert_eq!(decode_payload(&[0xff, 0x00, b'!']), "ÿ\u{0}!");
        assert_eq!(decode_payload(&[]), "");
    }
}
