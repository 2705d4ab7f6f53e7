//! # Veilbit Core API
//!
//! Hides an encrypted payload inside a carrier image so that the stego image
//! stays visually indistinguishable from the original, and recovers the
//! exact payload bytes later. Two embedding domains are available:
//!
//! - [`Domain::spatial`] — the least significant bit of every RGB color
//!   channel, 3 bits per pixel
//! - [`Domain::frequency`] — the least significant bit of one quantized DCT
//!   coefficient per 8×8 luminance block, 1 bit per block
//!
//! # Usage Examples
//!
//! ## Hide a payload inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//! use veilbit_core::VeilbitEncoder;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier.png");
//! image::RgbaImage::from_pixel(64, 64, image::Rgba([120, 130, 140, 255]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier image");
//!
//! VeilbitEncoder::new()
//!     .use_media(&carrier)
//!     .expect("Carrier image was not readable")
//!     .save_as(temp_dir.path().join("image-with-a-payload-inside.png"))
//!     .with_encryption("SuperSecret42")
//!     .add_payload_data(b"Hello, World!".to_vec())
//!     .hide_and_save()
//!     .expect("Failed to hide payload in image");
//! ```
//!
//! ## Recover it again
//!
//! ```rust,no_run
//! use std::path::Path;
//! use veilbit_core::{commands, Domain};
//!
//! commands::extract(
//!     Path::new("image-with-a-payload-inside.png"),
//!     Path::new("payload.bin"),
//!     Some("SuperSecret42".into()),
//!     Domain::spatial(),
//! )
//! .expect("Failed to extract payload from image");
//! ```

#![warn(clippy::redundant_else)]

pub mod analysis;
pub mod capacity;
pub mod commands;
pub mod error;
pub mod frame;
pub mod media;
pub mod result;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::info;

use media::image::dct::BLOCK_EDGE;
use media::{Media, Persist};

pub use crate::capacity::Capacity;
pub use crate::error::VeilbitError;
pub use crate::media::image::{Domain, EmbeddingEngine, FrequencyEngine, SpatialEngine};
pub use crate::result::Result;

/// Embeds one payload into one carrier image, as a builder.
///
/// The embedding pipeline is fixed: encrypt (when a password is set), frame,
/// capacity check, embed, encode. It either runs to completion or fails with
/// the first error; no partial output is written.
pub struct VeilbitEncoder {
    domain: Domain,
    target: Option<PathBuf>,
    carrier: Option<Media>,
    payload: Option<Vec<u8>>,
    password: Option<String>,
}

impl Default for VeilbitEncoder {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            target: None,
            carrier: None,
            payload: None,
            password: None,
        }
    }
}

impl VeilbitEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domain(domain: Domain) -> Self {
        Self {
            domain,
            ..Self::default()
        }
    }

    pub fn use_media(&mut self, input_file: impl AsRef<Path>) -> Result<&mut Self> {
        self.carrier = Some(Media::from_file(input_file.as_ref())?);

        Ok(self)
    }

    pub fn save_as(&mut self, output_file: impl AsRef<Path>) -> &mut Self {
        self.target = Some(output_file.as_ref().to_owned());
        self
    }

    pub fn with_encryption<S: Into<String>>(&mut self, password: S) -> &mut Self {
        self.password = Some(password.into());
        self
    }

    pub fn add_payload_file<P: AsRef<Path> + ?Sized>(&mut self, input_file: &P) -> Result<&mut Self> {
        let mut fd =
            File::open(input_file).map_err(|source| VeilbitError::ReadError { source })?;
        let mut data = Vec::new();
        fd.read_to_end(&mut data)
            .map_err(|source| VeilbitError::ReadError { source })?;

        Ok(self.add_payload_data(data))
    }

    pub fn add_payload_data(&mut self, data: Vec<u8>) -> &mut Self {
        self.payload = Some(data);
        self
    }

    pub fn hide_and_save(&mut self) -> Result<&mut Self> {
        let Some(media) = self.carrier.as_ref() else {
            return Err(VeilbitError::CarrierNotSet);
        };
        let Some(target) = self.target.as_ref() else {
            return Err(VeilbitError::TargetNotSet);
        };
        let Some(payload) = self.payload.as_ref() else {
            return Err(VeilbitError::PayloadNotSet);
        };

        let carrier = prepare_carrier(&media.0, &self.domain);
        let (width, height) = carrier.dimensions();

        let data = match self.password.as_deref() {
            Some(password) => veilbit_cipher::encrypt_data(password, payload)
                .map_err(VeilbitError::Encryption)?,
            None => payload.clone(),
        };

        let bits = frame::decompose(&data);
        let capacity = self.domain.plan(width, height);
        info!(
            "carrier {width}x{height} px offers {} usable bits, framed payload needs {}",
            capacity.usable_bits(),
            bits.len()
        );
        capacity.check(bits.len())?;

        let stego = self.domain.embed(&carrier, &bits)?;
        Media::from_image(stego).save_as(target)?;

        Ok(self)
    }
}

/// The frequency engine needs block aligned dimensions; grow the carrier to
/// the next multiple of 8 before it runs. Spatial carriers pass through.
fn prepare_carrier(carrier: &RgbaImage, domain: &Domain) -> RgbaImage {
    match domain {
        Domain::Frequency(_) => {
            let (width, height) = carrier.dimensions();
            let aligned_w = width.div_ceil(BLOCK_EDGE as u32) * BLOCK_EDGE as u32;
            let aligned_h = height.div_ceil(BLOCK_EDGE as u32) * BLOCK_EDGE as u32;
            if (aligned_w, aligned_h) == (width, height) {
                carrier.clone()
            } else {
                info!("resizing carrier from {width}x{height} to block aligned {aligned_w}x{aligned_h}");
                image::imageops::resize(
                    carrier,
                    aligned_w,
                    aligned_h,
                    image::imageops::FilterType::Triangle,
                )
            }
        }
        Domain::Spatial(_) => carrier.clone(),
    }
}
