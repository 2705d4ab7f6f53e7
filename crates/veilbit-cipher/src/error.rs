use thiserror::Error;

#[derive(Debug, Error)]
pub enum CipherError {
    /// The ciphertext is shorter than one IV plus one padding unit.
    #[error("Ciphertext of {len} bytes is too short to contain any payload")]
    TruncatedCiphertext { len: usize },

    /// The ciphertext body is not a whole number of cipher blocks.
    #[error("Ciphertext length {len} is not a multiple of the cipher block size")]
    MisalignedCiphertext { len: usize },

    /// The trailing padding byte is outside `1..=pad_unit`. After decryption
    /// this is the strongest available signal for a wrong password.
    #[error("Invalid padding byte {value} after decryption")]
    InvalidPadding { value: u8 },
}
