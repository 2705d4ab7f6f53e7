use std::fs::File;
use std::path::Path;

pub use image::RgbaImage;
use log::error;

use crate::error::VeilbitError;
use crate::result::Result;

use super::Persist;

/// a media container for steganography carriers
#[derive(Debug)]
pub struct Media(pub RgbaImage);

impl Media {
    pub fn from_image(img: RgbaImage) -> Self {
        Self(img)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        if let Some(ext) = f.extension() {
            let ext = ext.to_string_lossy().to_lowercase();
            match ext.as_str() {
                "png" | "jpg" | "jpeg" => Ok(Self(
                    image::open(f)
                        .map_err(|_e| VeilbitError::InvalidImageMedia)?
                        .to_rgba8(),
                )),
                _ => Err(VeilbitError::UnsupportedMedia),
            }
        } else {
            Err(VeilbitError::UnsupportedMedia)
        }
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let mut f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            VeilbitError::WriteError { source: e }
        })?;
        self.0
            .write_to(&mut f, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                VeilbitError::ImageEncodingError
            })
    }
}
