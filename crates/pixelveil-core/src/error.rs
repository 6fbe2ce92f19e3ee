use thiserror::Error;

#[derive(Error, Debug)]
pub enum VeilError {
    /// Represents an unsupported carrier media. For example, a movie file is not supported
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a message the 3 digit length field cannot describe
    #[error("Message is {length} characters long, only up to 999 characters can be hidden")]
    MessageTooLong { length: usize },

    /// Represents a carrier without enough byte-slots for the envelope
    #[error("Image is too small to store the message: {required} byte-slots needed, {available} available")]
    ImageTooSmall { required: usize, available: usize },

    /// Represents a leading length field that does not read as 3 decimal digits
    #[error("Invalid image format: no message length field found")]
    MalformedLengthField,

    /// Represents a length field claiming more payload than the carrier holds
    #[error("Declared message length {declared} exceeds the {available} byte-slots of the image")]
    TruncatedPayload { declared: usize, available: usize },

    /// Represents a message character that does not fit into a single byte-slot
    #[error("Unsupported character {0:?}: only code points 0-255 can be hidden")]
    UnsupportedCharacter(char),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
