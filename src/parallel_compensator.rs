// THEORY:
// The `parallel_compensator` module is the throughput-oriented twin of
// `compensator`. Every pixel is independent, so the image splits cleanly into
// disjoint horizontal row bands: one tokio task per band, each owning its own
// slice of the buffer, results joined back in band order. No band ever
// touches another band's rows, so there is no locking and no aliasing.
//
// The band count follows the machine (`num_cpus`), capped by the row count so
// tiny images never produce empty bands. The compensation tables are built
// once and shared across workers behind an `Arc`.
//
// Output must be byte-identical to the sequential `Compensator`; the parallel
// split changes scheduling, never arithmetic.

use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
use crate::core_modules::quantizer::CompensationLut;
use anyhow::Context;
use futures::future::join_all;
use image::RgbImage;
use std::path::Path;
use std::sync::Arc;

/// Applies RGB332 compensation with one worker task per row band.
pub struct ParallelCompensator {
    lut: Arc<CompensationLut>,
    workers: usize,
}

impl ParallelCompensator {
    pub fn new() -> Self {
        Self {
            lut: Arc::new(CompensationLut::new()),
            workers: num_cpus::get().max(1),
        }
    }

    /// Pre-distorts every pixel of `image` in place, band-parallel.
    pub async fn compensate_buffer(&self, image: &mut RgbImage) -> anyhow::Result<()> {
        let height = image.height() as usize;
        let width = image.width() as usize;
        if height == 0 || width == 0 {
            return Ok(());
        }

        let bands = self.workers.min(height);
        let rows_per_band = height.div_ceil(bands);
        let row_bytes = width * CHANNELS;

        let mut tasks = Vec::with_capacity(bands);
        for band_rows in image.chunks(rows_per_band * row_bytes) {
            let mut band: Vec<u8> = band_rows.to_vec();
            let lut = Arc::clone(&self.lut);
            tasks.push(tokio::spawn(async move {
                for bytes in band.chunks_mut(CHANNELS) {
                    let compensated: [u8; CHANNELS] = lut.apply(Pixel::from(&*bytes)).into();
                    bytes.copy_from_slice(&compensated);
                }
                band
            }));
        }

        let raw: &mut [u8] = &mut *image;
        let mut offset = 0;
        for result in join_all(tasks).await {
            let band = result.context("Compensation worker panicked")?;
            raw[offset..offset + band.len()].copy_from_slice(&band);
            offset += band.len();
        }
        Ok(())
    }

    /// Loads `input`, compensates it band-parallel, and saves to `output`.
    pub async fn compensate_image(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        let mut image = image::open(input)
            .with_context(|| format!("Failed to decode {}", input.display()))?
            .to_rgb8();

        self.compensate_buffer(&mut image).await?;

        image
            .save(output)
            .with_context(|| format!("Failed to save {}", output.display()))?;
        Ok(())
    }
}

impl Default for ParallelCompensator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compensator::Compensator;

    fn noisy_image(width: u32, height: u32) -> RgbImage {
        let mut image = RgbImage::new(width, height);
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            // Deterministic but non-smooth channel values.
            let r = (x.wrapping_mul(31).wrapping_add(y.wrapping_mul(7)) % 256) as u8;
            let g = (x.wrapping_mul(13) ^ y.wrapping_mul(101)) as u8;
            let b = (x.wrapping_add(y).wrapping_mul(59) % 256) as u8;
            pixel.0 = [r, g, b];
        }
        image
    }

    #[tokio::test]
    async fn matches_sequential_output_exactly() {
        let mut parallel = noisy_image(47, 33);
        let mut sequential = parallel.clone();

        ParallelCompensator::new()
            .compensate_buffer(&mut parallel)
            .await
            .expect("Error Compensating Buffer.");
        Compensator::new().compensate_buffer(&mut sequential);

        assert_eq!(parallel.as_raw(), sequential.as_raw());
    }

    #[tokio::test]
    async fn single_row_image_still_works() {
        let mut parallel = noisy_image(64, 1);
        let mut sequential = parallel.clone();

        ParallelCompensator::new()
            .compensate_buffer(&mut parallel)
            .await
            .expect("Error Compensating Buffer.");
        Compensator::new().compensate_buffer(&mut sequential);

        assert_eq!(parallel.as_raw(), sequential.as_raw());
    }
}
