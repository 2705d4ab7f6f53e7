pub mod dct;
pub mod frequency;
pub mod spatial;
pub mod ycbcr;

pub use frequency::FrequencyEngine;
pub use spatial::SpatialEngine;

use enum_dispatch::enum_dispatch;
use image::RgbaImage;

use crate::capacity::Capacity;
use crate::result::Result;

/// A reversible rule for writing a bit sequence into a carrier image and
/// reading it back out.
///
/// Implementations consume bits in a fixed deterministic scan order; the
/// extract side yields every bit position the carrier has, leaving it to the
/// framing layer to decide how much of that stream is meaningful.
#[enum_dispatch]
pub trait EmbeddingEngine {
    /// Embeddable bit budget for a carrier of the given dimensions.
    fn plan(&self, width: u32, height: u32) -> Capacity;

    /// Write `bits` into a copy of `carrier`.
    fn embed(&self, carrier: &RgbaImage, bits: &[bool]) -> Result<RgbaImage>;

    /// Read all bit positions of `stego` in the scan order used by `embed`.
    fn extract(&self, stego: &RgbaImage) -> Result<Vec<bool>>;
}

/// Embedding domain, chosen once when a pipeline is constructed.
#[enum_dispatch(EmbeddingEngine)]
#[derive(Debug, Clone, Copy)]
pub enum Domain {
    Spatial(SpatialEngine),
    Frequency(FrequencyEngine),
}

impl Domain {
    pub fn spatial() -> Self {
        Self::Spatial(SpatialEngine)
    }

    pub fn frequency() -> Self {
        Self::Frequency(FrequencyEngine)
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::spatial()
    }
}
