//! LSB distribution statistics for eyeballing whether an image carries data.
//!
//! A clean photo has visibly structured low bits; an embedded ciphertext
//! pushes the windowed LSB averages towards 0.5.

use image::RgbaImage;

/// Samples per averaging window.
pub const WINDOW: usize = 100;

/// Mean LSB value per color channel over consecutive windows of [`WINDOW`]
/// samples, raster order.
#[derive(Debug, Clone, PartialEq)]
pub struct LsbStats {
    pub red: Vec<f64>,
    pub green: Vec<f64>,
    pub blue: Vec<f64>,
}

impl LsbStats {
    pub fn windows(&self) -> usize {
        self.red.len()
    }
}

pub fn lsb_window_averages(img: &RgbaImage) -> LsbStats {
    let n = (img.width() * img.height()) as usize;
    let mut red = Vec::with_capacity(n);
    let mut green = Vec::with_capacity(n);
    let mut blue = Vec::with_capacity(n);

    for pixel in img.pixels() {
        red.push((pixel.0[0] & 1) as f64);
        green.push((pixel.0[1] & 1) as f64);
        blue.push((pixel.0[2] & 1) as f64);
    }

    LsbStats {
        red: window_means(&red),
        green: window_means(&green),
        blue: window_means(&blue),
    }
}

fn window_means(samples: &[f64]) -> Vec<f64> {
    samples
        .chunks(WINDOW)
        .map(|window| window.iter().sum::<f64>() / window.len() as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn all_even_channels_average_to_zero() {
        let img = RgbaImage::from_pixel(20, 10, Rgba([2, 4, 6, 255]));
        let stats = lsb_window_averages(&img);

        assert_eq!(stats.windows(), 2);
        assert!(stats.red.iter().all(|&m| m == 0.0));
        assert!(stats.green.iter().all(|&m| m == 0.0));
        assert!(stats.blue.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn alternating_lsb_averages_to_half() {
        let img = RgbaImage::from_fn(10, 10, |x, y| {
            let v = ((x + y * 10) % 2) as u8;
            Rgba([v, v, 200 + v, 255])
        });
        let stats = lsb_window_averages(&img);

        assert_eq!(stats.windows(), 1);
        assert!((stats.red[0] - 0.5).abs() < 1e-9);
        assert!((stats.blue[0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn last_window_may_be_partial() {
        let img = RgbaImage::from_pixel(15, 7, Rgba([255, 255, 255, 255]));
        let stats = lsb_window_averages(&img);

        // 105 samples: one full window plus 5 spare
        assert_eq!(stats.windows(), 2);
        assert_eq!(stats.green[1], 1.0);
    }
}
