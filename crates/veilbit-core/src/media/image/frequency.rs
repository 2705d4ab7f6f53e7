//! Frequency domain engine: payload bits live in the least significant bit
//! of one quantized DCT coefficient per 8×8 luminance block.
//!
//! Embedding runs every block through forward transform → quantization →
//! zigzag, overwrites the designated slot, then inverts the whole chain and
//! clamps back to the sample range. Extraction re-applies the forward chain
//! and reads the slot again; the write rule must therefore survive the
//! dequantize/inverse-transform/requantize loop, which the round-trip tests
//! verify empirically.

use image::RgbaImage;

use crate::capacity::Capacity;
use crate::error::VeilbitError;
use crate::media::image::dct::{self, BLOCK_EDGE, BLOCK_LEN};
use crate::media::image::ycbcr::YcbcrImage;
use crate::media::image::EmbeddingEngine;
use crate::result::Result;

/// Zigzag position carrying the payload bit in every luminance block.
///
/// A moderate frequency slot (natural position (1,1), quantization step 12):
/// low enough that its quantized value routinely stays clear of the noise
/// floor, high enough that flipping its LSB moves pixels by at most a few
/// sample steps.
pub const COEFFICIENT_SLOT: usize = 4;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyEngine;

/// Two's-complement LSB overwrite, reversible for negative coefficients.
fn with_lsb(coefficient: i16, bit: bool) -> i16 {
    (coefficient & !1) | bit as i16
}

fn ensure_block_aligned(width: u32, height: u32) -> Result<()> {
    if width as usize % BLOCK_EDGE != 0 || height as usize % BLOCK_EDGE != 0 {
        return Err(VeilbitError::UnsupportedDimensions { width, height });
    }
    Ok(())
}

/// Copy one 8×8 block out of a planar channel.
fn gather_block(channel: &[f64], width: usize, bx: usize, by: usize) -> [f64; BLOCK_LEN] {
    let mut samples = [0.0f64; BLOCK_LEN];
    for row in 0..BLOCK_EDGE {
        for col in 0..BLOCK_EDGE {
            samples[row * BLOCK_EDGE + col] =
                channel[(by * BLOCK_EDGE + row) * width + bx * BLOCK_EDGE + col];
        }
    }
    samples
}

/// Write one 8×8 block back, clamped to the valid sample range.
fn scatter_block(
    channel: &mut [f64],
    width: usize,
    bx: usize,
    by: usize,
    samples: &[f64; BLOCK_LEN],
) {
    for row in 0..BLOCK_EDGE {
        for col in 0..BLOCK_EDGE {
            channel[(by * BLOCK_EDGE + row) * width + bx * BLOCK_EDGE + col] =
                samples[row * BLOCK_EDGE + col].clamp(0.0, 255.0);
        }
    }
}

impl FrequencyEngine {
    /// Channel level embed: one bit per luminance block in block-raster
    /// order. Chrominance planes pass through untouched, so only luminance
    /// carries data.
    pub fn embed_channels(&self, mut channels: YcbcrImage, bits: &[bool]) -> Result<YcbcrImage> {
        ensure_block_aligned(channels.width, channels.height)?;

        let width = channels.width as usize;
        let blocks_wide = width / BLOCK_EDGE;
        let blocks_tall = channels.height as usize / BLOCK_EDGE;
        let blocks = blocks_wide * blocks_tall;
        if bits.len() > blocks {
            return Err(VeilbitError::PayloadTooLarge {
                required: bits.len(),
                capacity: blocks,
            });
        }

        let mut block_index = 0;
        for by in 0..blocks_tall {
            for bx in 0..blocks_wide {
                let samples = gather_block(&channels.y, width, bx, by);
                let quantized = dct::quantize(&dct::forward(&samples));
                let mut ordered = dct::zigzag(&quantized);

                // blocks beyond the bit supply still take the quantization
                // round trip, only the slot write is skipped
                if let Some(&bit) = bits.get(block_index) {
                    ordered[COEFFICIENT_SLOT] = with_lsb(ordered[COEFFICIENT_SLOT], bit);
                }

                let restored = dct::inverse(&dct::dequantize(&dct::inverse_zigzag(&ordered)));
                scatter_block(&mut channels.y, width, bx, by, &restored);

                block_index += 1;
            }
        }

        Ok(channels)
    }

    /// Channel level extract: the slot LSB of every luminance block in the
    /// same block-raster order, one bit per block.
    pub fn extract_channels(&self, channels: &YcbcrImage) -> Result<Vec<bool>> {
        ensure_block_aligned(channels.width, channels.height)?;

        let width = channels.width as usize;
        let blocks_wide = width / BLOCK_EDGE;
        let blocks_tall = channels.height as usize / BLOCK_EDGE;

        let mut bits = Vec::with_capacity(blocks_wide * blocks_tall);
        for by in 0..blocks_tall {
            for bx in 0..blocks_wide {
                let samples = gather_block(&channels.y, width, bx, by);
                let ordered = dct::zigzag(&dct::quantize(&dct::forward(&samples)));
                bits.push(ordered[COEFFICIENT_SLOT] & 1 == 1);
            }
        }

        Ok(bits)
    }
}

impl EmbeddingEngine for FrequencyEngine {
    fn plan(&self, width: u32, height: u32) -> Capacity {
        Capacity::frequency(width, height)
    }

    fn embed(&self, carrier: &RgbaImage, bits: &[bool]) -> Result<RgbaImage> {
        let channels = YcbcrImage::from_rgba(carrier);
        Ok(self.embed_channels(channels, bits)?.to_rgba())
    }

    fn extract(&self, stego: &RgbaImage) -> Result<Vec<bool>> {
        self.extract_channels(&YcbcrImage::from_rgba(stego))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Smooth mid-range carrier, far from the clamping edges.
    fn prepare_smooth_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let base = 120.0 + 40.0 * (x as f64 * 0.31).sin() + 30.0 * (y as f64 * 0.23).cos();
            Rgba([
                base as u8,
                (base * 0.9 + 10.0) as u8,
                (base * 0.8 + 25.0) as u8,
                255,
            ])
        })
    }

    #[test]
    fn with_lsb_is_reversible_for_negative_coefficients() {
        for value in [-7i16, -4, -1, 0, 1, 6] {
            for bit in [false, true] {
                let written = with_lsb(value, bit);
                assert_eq!(written & 1 == 1, bit);
                assert!((written - value).abs() <= 1);
            }
        }
    }

    #[test]
    fn should_reproduce_embedded_bits_per_block() {
        // 32x32 px = 16 blocks
        let carrier = prepare_smooth_image(32, 32);
        let bits: Vec<bool> = (0..10).map(|i| i % 3 != 1).collect();

        let engine = FrequencyEngine;
        let stego = engine.embed(&carrier, &bits).unwrap();
        let unveiled = engine.extract(&stego).unwrap();

        assert_eq!(unveiled.len(), 16);
        assert_eq!(&unveiled[..bits.len()], &bits[..]);
    }

    #[test]
    fn should_survive_a_png_file_round_trip() {
        let carrier = prepare_smooth_image(64, 64);
        let bits: Vec<bool> = (0..64).map(|i| (i * 7) % 5 < 2).collect();

        let engine = FrequencyEngine;
        let stego = engine.embed(&carrier, &bits).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("stego.png");
        stego.save(&file).unwrap();
        let reloaded = image::open(&file).unwrap().to_rgba8();

        assert_eq!(&engine.extract(&reloaded).unwrap()[..], &bits[..]);
    }

    #[test]
    fn should_leave_chrominance_and_alpha_untouched() {
        let carrier = prepare_smooth_image(16, 16);
        let channels = YcbcrImage::from_rgba(&carrier);

        let stego_channels = FrequencyEngine
            .embed_channels(channels.clone(), &[true, false, true])
            .unwrap();

        assert_eq!(stego_channels.cb, channels.cb);
        assert_eq!(stego_channels.cr, channels.cr);
        assert_eq!(stego_channels.alpha, channels.alpha);
        assert_ne!(stego_channels.y, channels.y);
    }

    #[test]
    fn should_reject_unaligned_dimensions() {
        let carrier = prepare_smooth_image(12, 16);
        match FrequencyEngine.embed(&carrier, &[true]) {
            Err(VeilbitError::UnsupportedDimensions {
                width: 12,
                height: 16,
            }) => (),
            other => panic!("expected UnsupportedDimensions, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_more_bits_than_blocks() {
        let carrier = prepare_smooth_image(8, 8);
        match FrequencyEngine.embed(&carrier, &[true, false]) {
            Err(VeilbitError::PayloadTooLarge {
                required: 2,
                capacity: 1,
            }) => (),
            other => panic!("expected PayloadTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn extract_yields_one_bit_per_block_regardless_of_payload() {
        let carrier = prepare_smooth_image(40, 24);
        let stego = FrequencyEngine.embed(&carrier, &[true; 4]).unwrap();
        assert_eq!(FrequencyEngine.extract(&stego).unwrap().len(), 5 * 3);
    }
}
