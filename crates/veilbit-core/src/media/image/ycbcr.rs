//! RGBA ↔ planar YCbCr conversion (JFIF weights) for the frequency engine.

use image::{Rgba, RgbaImage};

/// Planar luma/chroma view of a carrier. Alpha is carried through untouched
/// so it can be restored verbatim on reassembly.
#[derive(Debug, Clone, PartialEq)]
pub struct YcbcrImage {
    pub width: u32,
    pub height: u32,
    pub y: Vec<f64>,
    pub cb: Vec<f64>,
    pub cr: Vec<f64>,
    pub alpha: Vec<u8>,
}

impl YcbcrImage {
    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let n = (width * height) as usize;

        let mut y = Vec::with_capacity(n);
        let mut cb = Vec::with_capacity(n);
        let mut cr = Vec::with_capacity(n);
        let mut alpha = Vec::with_capacity(n);

        for &Rgba([r, g, b, a]) in img.pixels() {
            let (r, g, b) = (r as f64, g as f64, b as f64);
            y.push(0.299 * r + 0.587 * g + 0.114 * b);
            cb.push(128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b);
            cr.push(128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b);
            alpha.push(a);
        }

        Self {
            width,
            height,
            y,
            cb,
            cr,
            alpha,
        }
    }

    pub fn to_rgba(&self) -> RgbaImage {
        let mut out = RgbaImage::new(self.width, self.height);
        for (i, pixel) in out.pixels_mut().enumerate() {
            let y = self.y[i];
            let cb = self.cb[i] - 128.0;
            let cr = self.cr[i] - 128.0;

            let r = y + 1.402 * cr;
            let g = y - 0.344136 * cb - 0.714136 * cr;
            let b = y + 1.772 * cb;

            *pixel = Rgba([to_sample(r), to_sample(g), to_sample(b), self.alpha[i]]);
        }
        out
    }
}

fn to_sample(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_pixels_map_to_pure_luma() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([90, 90, 90, 255]));
        let ycc = YcbcrImage::from_rgba(&img);

        for i in 0..4 {
            assert!((ycc.y[i] - 90.0).abs() < 1e-9);
            assert!((ycc.cb[i] - 128.0).abs() < 1e-6);
            assert!((ycc.cr[i] - 128.0).abs() < 1e-6);
        }
    }

    #[test]
    fn round_trip_is_within_one_sample_step() {
        let img = RgbaImage::from_fn(4, 4, |x, y| {
            Rgba([
                (40 + x * 30) as u8,
                (200 - y * 25) as u8,
                (90 + x * 10 + y * 5) as u8,
                (17 + x) as u8,
            ])
        });

        let back = YcbcrImage::from_rgba(&img).to_rgba();
        for (a, b) in img.pixels().zip(back.pixels()) {
            for c in 0..3 {
                let delta = (a.0[c] as i16 - b.0[c] as i16).abs();
                assert!(delta <= 1, "channel {c} off by {delta}");
            }
            assert_eq!(a.0[3], b.0[3], "alpha must pass through verbatim");
        }
    }
}
