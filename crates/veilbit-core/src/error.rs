use thiserror::Error;

pub use veilbit_cipher::CipherError;

#[derive(Error, Debug)]
pub enum VeilbitError {
    /// Represents an unsupported carrier media, for example a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media, for example a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// The framed payload does not fit into the carrier. Raised before any
    /// pixel or coefficient is touched.
    #[error("Payload of {required} bits exceeds the usable carrier capacity of {capacity} bits")]
    PayloadTooLarge { required: usize, capacity: usize },

    /// The extracted bit stream ends before the length declared by its
    /// header is satisfied. Wrong password, wrong file or a damaged carrier.
    #[error("Extracted stream of {available} bits is shorter than the {needed} bits its length header declares")]
    TruncatedStream { needed: usize, available: usize },

    /// The frequency engine was handed a carrier whose dimensions are not
    /// multiples of the transform block edge.
    #[error("Carrier dimensions {width}x{height} are not multiples of 8")]
    UnsupportedDimensions { width: u32, height: u32 },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Represents an error when encrypting the payload
    #[error("Encryption error")]
    Encryption(CipherError),

    /// Represents an error when decrypting the payload
    #[error("Decryption error: {0}")]
    Decryption(CipherError),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("No payload set")]
    PayloadNotSet,
}
