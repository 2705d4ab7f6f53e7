//! One-shot pipeline entry points used by the CLI.

use std::fs;
use std::path::Path;

use log::info;

use crate::analysis::{lsb_window_averages, LsbStats};
use crate::frame;
use crate::media::image::{Domain, EmbeddingEngine};
use crate::media::Media;
use crate::{Result, VeilbitError, VeilbitEncoder};

pub fn hide(
    media: &Path,
    payload_file: &Path,
    write_to_file: &Path,
    password: Option<String>,
    domain: Domain,
) -> Result<()> {
    let mut encoder = VeilbitEncoder::with_domain(domain);
    encoder
        .use_media(media)?
        .save_as(write_to_file)
        .add_payload_file(payload_file)?;

    if let Some(password) = password {
        encoder.with_encryption(password);
    }

    encoder.hide_and_save()?;

    Ok(())
}

pub fn extract(
    stego: &Path,
    write_to_file: &Path,
    password: Option<String>,
    domain: Domain,
) -> Result<()> {
    let media = Media::from_file(stego)?;
    let (width, height) = media.0.dimensions();
    info!("stego image is {width}x{height} px");

    let bits = domain.extract(&media.0)?;
    let payload = frame::assemble(&bits)?;
    let payload = match password {
        Some(password) => veilbit_cipher::decrypt_data(&password, &payload)
            .map_err(VeilbitError::Decryption)?,
        None => payload,
    };

    // writing is the last step, nothing is persisted on failure
    fs::write(write_to_file, &payload).map_err(|source| VeilbitError::WriteError { source })?;
    info!("wrote {} payload bytes to {write_to_file:?}", payload.len());

    Ok(())
}

pub fn analyse(suspect: &Path) -> Result<LsbStats> {
    let media = Media::from_file(suspect)?;
    Ok(lsb_window_averages(&media.0))
}
