//! # Payload Encryption
//!
//! Symmetric encryption of payloads before they are hidden in a carrier.
//! The key is the SHA-256 digest of the password, encryption is AES-256 in
//! CBC mode with a fresh random IV prepended to the ciphertext.
//!
//! Plaintext is padded to a multiple of the padding unit (32 bytes, larger
//! than the AES block on purpose) with trailing-count bytes: every padding
//! byte holds the number of padding bytes added, and input that is already
//! aligned still receives a full unit so unpadding is unambiguous.

use aes::cipher::block_padding::NoPadding;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes256;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

pub mod error;

pub use crate::error::CipherError;

pub type Result<T> = std::result::Result<T, CipherError>;

const IV_LEN: usize = 16;
const AES_BLOCK_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Default padding unit in bytes. Deliberately decoupled from the 16 byte
/// AES block size, see [`Cipher::with_pad_unit`].
pub const DEFAULT_PAD_UNIT: usize = 32;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Password bound AES-256-CBC cipher. The derived key is wiped on drop.
pub struct Cipher {
    key: [u8; KEY_LEN],
    pad_unit: usize,
}

impl Cipher {
    pub fn new(password: &str) -> Self {
        let key: [u8; KEY_LEN] = Sha256::digest(password.as_bytes()).into();
        Self {
            key,
            pad_unit: DEFAULT_PAD_UNIT,
        }
    }

    /// Override the padding unit. Must be a multiple of the AES block size
    /// and at most 255, so the count fits into the padding byte.
    pub fn with_pad_unit(mut self, pad_unit: usize) -> Self {
        assert!(
            pad_unit > 0 && pad_unit <= u8::MAX as usize && pad_unit % AES_BLOCK_LEN == 0,
            "padding unit must be a block multiple in 16..=240"
        );
        self.pad_unit = pad_unit;
        self
    }

    /// Pad and encrypt, returning `iv ++ ciphertext`.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = pad(plaintext, self.pad_unit);

        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);

        let ciphertext = Aes256CbcEnc::new(&self.key.into(), &iv.into())
            .encrypt_padded_vec_mut::<NoPadding>(&padded);

        let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
        out.extend_from_slice(&iv);
        out.extend_from_slice(&ciphertext);

        iv.zeroize();

        Ok(out)
    }

    /// Strip the IV, decrypt and unpad.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() < IV_LEN + self.pad_unit {
            return Err(CipherError::TruncatedCiphertext { len: data.len() });
        }
        let (iv, body) = data.split_at(IV_LEN);
        if body.len() % AES_BLOCK_LEN != 0 {
            return Err(CipherError::MisalignedCiphertext { len: body.len() });
        }

        let plaintext = Aes256CbcDec::new(&self.key.into(), GenericArray::from_slice(iv))
            .decrypt_padded_vec_mut::<NoPadding>(body)
            .map_err(|_| CipherError::MisalignedCiphertext { len: body.len() })?;

        unpad(plaintext, self.pad_unit)
    }
}

impl Drop for Cipher {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

/// encrypt data with password, it uses SHA-256 for key derivation and
/// AES-256-CBC with a random prepended IV for encryption
pub fn encrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    Cipher::new(password).encrypt(data)
}

/// decrypt data with password, inverse of [`encrypt_data`]
pub fn decrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    Cipher::new(password).decrypt(data)
}

fn pad(data: &[u8], unit: usize) -> Vec<u8> {
    // aligned input still gets a full unit, the count byte must always exist
    let fill = unit - data.len() % unit;
    let mut out = Vec::with_capacity(data.len() + fill);
    out.extend_from_slice(data);
    out.extend(std::iter::repeat(fill as u8).take(fill));
    out
}

fn unpad(mut data: Vec<u8>, unit: usize) -> Result<Vec<u8>> {
    let value = *data.last().ok_or(CipherError::InvalidPadding { value: 0 })?;
    let count = value as usize;
    if count == 0 || count > unit || count > data.len() {
        return Err(CipherError::InvalidPadding { value });
    }
    data.truncate(data.len() - count);
    Ok(data)
}
