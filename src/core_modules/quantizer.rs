// THEORY:
// The `quantizer` module is the analytical core of the whole crate. It models
// what an RGB332 display actually does to an 8-bit channel value, and then
// inverts that loss as well as it can be inverted.
//
// Key architectural principles:
// 1.  **Simulation before correction**: `quantize` reproduces the hardware
//     behavior exactly (keep the top N bits, re-expand evenly across 0..=255
//     with truncating division). Everything else is built on top of it.
// 2.  **Search, not algebra**: `compensate` brute-forces all 256 candidate
//     inputs and keeps the first one whose quantized value is closest to the
//     target. With at most 8 output levels per channel the scan is trivially
//     cheap, and it is robust to the uneven bucket widths the `>>` truncation
//     produces. The ascending scan order is load-bearing: it is what makes
//     ties resolve to the smallest input.
// 3.  **Pay the search once**: `CompensationLut` runs the search 512 times at
//     startup (256 targets x 2 channel families) so the per-pixel cost during
//     image processing is three array reads.

use crate::core_modules::pixel::pixel::Pixel;

pub type BitDepth = u8;

/// RGB332 layout: 3 bits red, 3 bits green, 2 bits blue.
pub const RED_BITS: BitDepth = 3;
pub const GREEN_BITS: BitDepth = 3;
pub const BLUE_BITS: BitDepth = 2;

/// Simulates RGB332-style quantization of one channel: keep the top `bits`
/// bits, then expand the level index evenly back across the 8-bit range.
pub fn quantize(value: u8, bits: BitDepth) -> u8 {
    let level = (value >> (8 - bits)) as u16;
    let max_level = (1u16 << bits) - 1;
    (level * 255 / max_level) as u8
}

/// The `2^bits` representative values reachable after quantization,
/// in ascending order.
pub fn level_table(bits: BitDepth) -> Vec<u8> {
    let max_level = (1u16 << bits) - 1;
    (0..=max_level).map(|i| (i * 255 / max_level) as u8).collect()
}

/// Finds the input value whose quantized output lands closest to `target`.
/// Ascending scan; the first candidate achieving the minimal absolute
/// difference wins, so ties resolve to the smallest input. Stops early on an
/// exact hit.
pub fn compensate(target: u8, bits: BitDepth) -> u8 {
    let mut best_input = 0u8;
    let mut best_diff = 256i16;

    for candidate in 0..=255u8 {
        let quantized = quantize(candidate, bits);
        let diff = (quantized as i16 - target as i16).abs();
        if diff < best_diff {
            best_diff = diff;
            best_input = candidate;
            if diff == 0 {
                break;
            }
        }
    }

    best_input
}

/// Per-channel compensation tables: target value in, pre-distorted input out.
/// Red and green share the 3-bit table, blue uses the 2-bit table.
pub struct CompensationLut {
    red_green: [u8; 256],
    blue: [u8; 256],
}

impl CompensationLut {
    pub fn new() -> Self {
        let mut red_green = [0u8; 256];
        let mut blue = [0u8; 256];
        for target in 0..=255u8 {
            red_green[target as usize] = compensate(target, RED_BITS);
            blue[target as usize] = compensate(target, BLUE_BITS);
        }
        Self { red_green, blue }
    }

    /// Pre-distorts one pixel so it survives RGB332 quantization as closely
    /// as possible to its intended color.
    pub fn apply(&self, pixel: Pixel) -> Pixel {
        Pixel {
            red: self.red_green[pixel.red as usize],
            green: self.red_green[pixel.green as usize],
            blue: self.blue[pixel.blue as usize],
        }
    }
}

impl Default for CompensationLut {
    fn default() -> Self {
        Self::new()
    }
}
