// THEORY:
// This file is the main entry point for the `rgb332_prep` library crate.
// It follows the standard Rust convention of using `lib.rs` to define the
// public API exposed to the two binaries (`compensate` and `synthwave_bg`)
// and to any external consumer.
//
// The crate splits into a small layered stack: `core_modules` holds the
// reusable building blocks (the dumb `Pixel` value type, the RGB332
// `quantizer` with its compensation search, and the `Canvas` raster surface),
// while the top-level modules orchestrate them into the two actual tools:
// `compensator` / `parallel_compensator` for pre-distorting images against
// RGB332 quantization loss, and `background` for rendering the fixed
// perspective-grid wallpaper.

pub mod background;
pub mod compensator;
pub mod core_modules;
pub mod parallel_compensator;
