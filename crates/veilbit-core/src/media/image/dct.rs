//! 8×8 block transform primitives for the frequency engine.
//!
//! Separable orthonormal DCT-II forward/inverse with a precomputed cosine
//! table, nearest-integer quantization against the JPEG standard luminance
//! step table, and the zigzag ordering that linearizes a block from low to
//! high spatial frequency.

use std::sync::OnceLock;

/// Edge length of a transform block.
pub const BLOCK_EDGE: usize = 8;

/// Coefficients per block.
pub const BLOCK_LEN: usize = BLOCK_EDGE * BLOCK_EDGE;

/// JPEG standard luminance quantization steps, natural (row-major) order.
pub const LUMA_QUANT_TABLE: [u16; BLOCK_LEN] = [
    16, 11, 10, 16, 24, 40, 51, 61, //
    12, 12, 14, 19, 26, 58, 60, 55, //
    14, 13, 16, 24, 40, 57, 69, 56, //
    14, 17, 22, 29, 51, 87, 80, 62, //
    18, 22, 37, 56, 68, 109, 103, 77, //
    24, 35, 55, 64, 81, 104, 113, 92, //
    49, 64, 78, 87, 103, 121, 120, 101, //
    72, 92, 95, 98, 112, 100, 103, 99,
];

/// Maps zigzag index (0–63) to natural row-major index (0–63).
pub const ZIGZAG_TO_NATURAL: [usize; BLOCK_LEN] = [
    0, 1, 8, 16, 9, 2, 3, 10, //
    17, 24, 32, 25, 18, 11, 4, 5, //
    12, 19, 26, 33, 40, 48, 41, 34, //
    27, 20, 13, 6, 7, 14, 21, 28, //
    35, 42, 49, 56, 57, 50, 43, 36, //
    29, 22, 15, 23, 30, 37, 44, 51, //
    58, 59, 52, 45, 38, 31, 39, 46, //
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Inverse of [`ZIGZAG_TO_NATURAL`].
pub const NATURAL_TO_ZIGZAG: [usize; BLOCK_LEN] = {
    let mut table = [0usize; BLOCK_LEN];
    let mut i = 0;
    while i < BLOCK_LEN {
        table[ZIGZAG_TO_NATURAL[i]] = i;
        i += 1;
    }
    table
};

/// `COSINE[u][x] = cos((2*x + 1) * u * PI / 16)`
static COSINE: OnceLock<[[f64; BLOCK_EDGE]; BLOCK_EDGE]> = OnceLock::new();

/// Normalization constants: C(0) = 1/sqrt(8), C(u>0) = 1/2.
static NORM: OnceLock<[f64; BLOCK_EDGE]> = OnceLock::new();

fn cosine_table() -> &'static [[f64; BLOCK_EDGE]; BLOCK_EDGE] {
    COSINE.get_or_init(|| {
        let mut table = [[0.0f64; BLOCK_EDGE]; BLOCK_EDGE];
        for (u, row) in table.iter_mut().enumerate() {
            for (x, entry) in row.iter_mut().enumerate() {
                *entry = ((2 * x + 1) as f64 * u as f64 * std::f64::consts::PI / 16.0).cos();
            }
        }
        table
    })
}

fn norm_table() -> &'static [f64; BLOCK_EDGE] {
    NORM.get_or_init(|| {
        let mut n = [0.5f64; BLOCK_EDGE];
        n[0] = 1.0 / (BLOCK_EDGE as f64).sqrt();
        n
    })
}

/// 8×8 forward DCT over level-shifted samples (expected ~0–255).
pub fn forward(samples: &[f64; BLOCK_LEN]) -> [f64; BLOCK_LEN] {
    let cos = cosine_table();
    let c = norm_table();

    let mut shifted = [0.0f64; BLOCK_LEN];
    for (out, sample) in shifted.iter_mut().zip(samples) {
        *out = sample - 128.0;
    }

    // separable: rows first, then columns
    let mut temp = [0.0f64; BLOCK_LEN];
    for row in 0..BLOCK_EDGE {
        for u in 0..BLOCK_EDGE {
            let mut sum = 0.0;
            for x in 0..BLOCK_EDGE {
                sum += shifted[row * BLOCK_EDGE + x] * cos[u][x];
            }
            temp[row * BLOCK_EDGE + u] = c[u] * sum;
        }
    }

    let mut coeffs = [0.0f64; BLOCK_LEN];
    for col in 0..BLOCK_EDGE {
        for v in 0..BLOCK_EDGE {
            let mut sum = 0.0;
            for y in 0..BLOCK_EDGE {
                sum += temp[y * BLOCK_EDGE + col] * cos[v][y];
            }
            coeffs[v * BLOCK_EDGE + col] = c[v] * sum;
        }
    }

    coeffs
}

/// 8×8 inverse DCT back to the sample domain (plus the +128 level shift).
pub fn inverse(coeffs: &[f64; BLOCK_LEN]) -> [f64; BLOCK_LEN] {
    let cos = cosine_table();
    let c = norm_table();

    // separable: columns first, then rows
    let mut temp = [0.0f64; BLOCK_LEN];
    for col in 0..BLOCK_EDGE {
        for y in 0..BLOCK_EDGE {
            let mut sum = 0.0;
            for v in 0..BLOCK_EDGE {
                sum += c[v] * coeffs[v * BLOCK_EDGE + col] * cos[v][y];
            }
            temp[y * BLOCK_EDGE + col] = sum;
        }
    }

    let mut samples = [0.0f64; BLOCK_LEN];
    for row in 0..BLOCK_EDGE {
        for x in 0..BLOCK_EDGE {
            let mut sum = 0.0;
            for u in 0..BLOCK_EDGE {
                sum += c[u] * temp[row * BLOCK_EDGE + u] * cos[u][x];
            }
            samples[row * BLOCK_EDGE + x] = sum + 128.0;
        }
    }

    samples
}

/// Nearest-integer quantization against [`LUMA_QUANT_TABLE`].
pub fn quantize(coeffs: &[f64; BLOCK_LEN]) -> [i16; BLOCK_LEN] {
    let mut quantized = [0i16; BLOCK_LEN];
    for i in 0..BLOCK_LEN {
        quantized[i] = (coeffs[i] / LUMA_QUANT_TABLE[i] as f64).round() as i16;
    }
    quantized
}

/// Multiplies the per-position step back, inverse of [`quantize`] up to the
/// rounding loss.
pub fn dequantize(quantized: &[i16; BLOCK_LEN]) -> [f64; BLOCK_LEN] {
    let mut coeffs = [0.0f64; BLOCK_LEN];
    for i in 0..BLOCK_LEN {
        coeffs[i] = quantized[i] as f64 * LUMA_QUANT_TABLE[i] as f64;
    }
    coeffs
}

/// Reorder a natural-order block into the zigzag sequence.
pub fn zigzag(block: &[i16; BLOCK_LEN]) -> [i16; BLOCK_LEN] {
    let mut ordered = [0i16; BLOCK_LEN];
    for (zi, &ni) in ZIGZAG_TO_NATURAL.iter().enumerate() {
        ordered[zi] = block[ni];
    }
    ordered
}

/// Reorder a zigzag sequence back into natural order.
pub fn inverse_zigzag(ordered: &[i16; BLOCK_LEN]) -> [i16; BLOCK_LEN] {
    let mut block = [0i16; BLOCK_LEN];
    for (zi, &ni) in ZIGZAG_TO_NATURAL.iter().enumerate() {
        block[ni] = ordered[zi];
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zigzag_tables_are_inverse_bijections() {
        let mut seen = [false; BLOCK_LEN];
        for i in 0..BLOCK_LEN {
            assert_eq!(NATURAL_TO_ZIGZAG[ZIGZAG_TO_NATURAL[i]], i);
            assert!(!seen[ZIGZAG_TO_NATURAL[i]]);
            seen[ZIGZAG_TO_NATURAL[i]] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn zigzag_known_positions() {
        assert_eq!(ZIGZAG_TO_NATURAL[0], 0);
        assert_eq!(ZIGZAG_TO_NATURAL[1], 1);
        assert_eq!(ZIGZAG_TO_NATURAL[2], 8);
        assert_eq!(ZIGZAG_TO_NATURAL[4], 9);
        assert_eq!(ZIGZAG_TO_NATURAL[63], 63);
    }

    #[test]
    fn zigzag_round_trips_a_block() {
        let mut block = [0i16; BLOCK_LEN];
        for (i, v) in block.iter_mut().enumerate() {
            *v = i as i16 - 30;
        }
        assert_eq!(inverse_zigzag(&zigzag(&block)), block);
    }

    #[test]
    fn dc_only_coefficients_produce_flat_samples() {
        let mut coeffs = [0.0f64; BLOCK_LEN];
        coeffs[0] = 16.0;

        let samples = inverse(&coeffs);
        // DC contribution = (1/sqrt(8))^2 * 16 = 2
        for &s in &samples {
            assert!((s - 130.0).abs() < 1e-9, "expected uniform 130, got {s}");
        }
    }

    #[test]
    fn forward_inverse_round_trip_is_tight() {
        let mut samples = [0.0f64; BLOCK_LEN];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = 96.0 + ((i * 37) % 64) as f64;
        }

        let recovered = inverse(&forward(&samples));
        for (a, b) in samples.iter().zip(&recovered) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn quantize_dequantize_round_trip_within_one_step() {
        let mut samples = [0.0f64; BLOCK_LEN];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = 128.0 + 40.0 * ((i as f64) * 0.43).sin();
        }

        let quantized = quantize(&forward(&samples));
        let requantized = quantize(&forward(&inverse(&dequantize(&quantized))));

        for i in 0..BLOCK_LEN {
            assert!(
                (quantized[i] - requantized[i]).abs() <= 1,
                "coefficient {i} drifted: {} vs {}",
                quantized[i],
                requantized[i]
            );
        }
    }
}
