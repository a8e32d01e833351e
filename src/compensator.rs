// THEORY:
// The `compensator` module is the top-level orchestrator for the image
// pipeline: load an image, force it to plain RGB, pre-distort every pixel
// through the compensation tables, and write the result out. It is the
// reference (sequential) implementation; `parallel_compensator` must produce
// byte-identical output.
//
// Pixels are fully independent, so there is no cross-pixel state here at all:
// the whole module is a loop around `CompensationLut::apply` plus path
// bookkeeping. Errors are propagated, never retried; a run either produces a
// complete output file or none.

use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::quantizer::CompensationLut;
use anyhow::Context;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension when no explicit output is given.
const OUTPUT_SUFFIX: &str = "_compensated";

/// Applies RGB332 compensation to whole images.
pub struct Compensator {
    lut: CompensationLut,
}

impl Compensator {
    pub fn new() -> Self {
        Self {
            lut: CompensationLut::new(),
        }
    }

    /// Pre-distorts every pixel of `image` in place.
    pub fn compensate_buffer(&self, image: &mut RgbImage) {
        for pixel in image.pixels_mut() {
            let compensated = self.lut.apply(Pixel::from(&pixel.0[..]));
            pixel.0 = compensated.into();
        }
    }

    /// Loads `input`, compensates it, and saves the result to `output`.
    /// The load forces a 3-channel color model, dropping alpha and palettes.
    pub fn compensate_image(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        let mut image = image::open(input)
            .with_context(|| format!("Failed to decode {}", input.display()))?
            .to_rgb8();

        self.compensate_buffer(&mut image);

        image
            .save(output)
            .with_context(|| format!("Failed to save {}", output.display()))?;
        Ok(())
    }
}

impl Default for Compensator {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the default output path: input stem plus `_compensated`, same
/// extension, same directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}{OUTPUT_SUFFIX}");
    if let Some(extension) = input.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }

    input.with_file_name(name)
}
