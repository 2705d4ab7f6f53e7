//! Spatial domain engine: payload bits live in the least significant bit of
//! each RGB color channel, pixels walked in raster order.

use image::RgbaImage;

use crate::capacity::{Capacity, SPATIAL_BITS_PER_PIXEL};
use crate::error::VeilbitError;
use crate::media::image::EmbeddingEngine;
use crate::result::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialEngine;

fn with_lsb(channel: u8, bit: bool) -> u8 {
    (channel & !1) | bit as u8
}

impl EmbeddingEngine for SpatialEngine {
    fn plan(&self, width: u32, height: u32) -> Capacity {
        Capacity::spatial(width, height)
    }

    fn embed(&self, carrier: &RgbaImage, bits: &[bool]) -> Result<RgbaImage> {
        let mut padded = bits.to_vec();
        while padded.len() % SPATIAL_BITS_PER_PIXEL != 0 {
            padded.push(false);
        }

        let budget = self.plan(carrier.width(), carrier.height()).total_bits();
        if padded.len() > budget {
            return Err(VeilbitError::PayloadTooLarge {
                required: padded.len(),
                capacity: budget,
            });
        }

        let mut stego = carrier.clone();
        // pixels beyond the payload keep their original low bits
        for (pixel, chunk) in stego
            .pixels_mut()
            .zip(padded.chunks(SPATIAL_BITS_PER_PIXEL))
        {
            for (channel, &bit) in pixel.0.iter_mut().zip(chunk) {
                *channel = with_lsb(*channel, bit);
            }
        }

        Ok(stego)
    }

    fn extract(&self, stego: &RgbaImage) -> Result<Vec<bool>> {
        let budget = self.plan(stego.width(), stego.height()).total_bits();
        let mut bits = Vec::with_capacity(budget);
        for pixel in stego.pixels() {
            for channel in &pixel.0[..SPATIAL_BITS_PER_PIXEL] {
                bits.push(channel & 1 == 1);
            }
        }

        Ok(bits)
    }
}
