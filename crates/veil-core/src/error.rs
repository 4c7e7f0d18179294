use thiserror::Error;

/// Failure inside the embed or extract loop, caused by a pixel buffer that
/// does not hold what its dimensions announce.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum Fault {
    /// The pixel buffer contains no samples at all
    #[error("the pixel buffer contains no samples")]
    Empty,

    /// A sample that the dimensions promised was missing
    #[error("the pixel buffer ended at sample {index}, only {len} samples are present")]
    Truncated { index: usize, len: usize },

    /// The amount of samples does not match `width * height * 3`
    #[error("the pixel buffer holds {len} samples but its dimensions announce {expected}")]
    LengthMismatch { len: usize, expected: usize },

    /// A sentinel was found, but the bits in front of it do not form whole bytes
    #[error("the terminator was found after {bits} bits, which is not a whole number of bytes")]
    Misaligned { bits: usize },
}

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a message that needs more bit-slots than the carrier offers
    #[error(
        "Capacity Error: the message needs {required} bit-slots but the carrier only provides {available}"
    )]
    Capacity { required: usize, available: usize },

    /// Represents a character that does not fit into one byte, e.g. an emoji
    #[error("Encoding Error: the character {character:?} at position {position} is outside of the range 0..=255")]
    Encoding { character: char, position: usize },

    /// Represents a bitstream that cannot be cut into bytes
    #[error("Decoding Error: a bitstream of {bits} bits is not a multiple of 8")]
    Decoding { bits: usize },

    /// Represents an unexpected failure while writing bits into the carrier.
    /// The carrier is left as it was before the call.
    #[error("Embed Error")]
    Embed(#[source] Fault),

    /// Represents an unexpected failure while scanning the carrier
    #[error("Extract Error")]
    Extract(#[source] Fault),

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents an output file format that would destroy the hidden bits, e.g. JPEG
    #[error("The target file must be a PNG image, lossy formats destroy hidden data")]
    LossyTarget,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents a background job that panicked before it could deliver a result
    #[error("The background worker panicked")]
    WorkerPanicked,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,
}
