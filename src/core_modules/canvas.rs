// THEORY:
// The `Canvas` module is a minimal raster surface for procedural drawing. It
// owns a flat RGB byte buffer, exposes bounds-checked pixel writes and a
// width-1 line rasterizer, and knows how to persist itself as a PNG. It is
// deliberately dumb: geometry decisions (where lines go, in what order, in
// what color) belong to the caller.
//
// Out-of-bounds writes are silently clipped rather than rejected. The grid
// geometry intentionally produces endpoints outside the frame (the fanned
// vertical lines), and clipping at the raster level keeps the geometry code
// free of special cases.

use crate::core_modules::pixel::pixel::{CHANNELS, Pixel};
use image::ImageEncoder;

/// A fixed-size RGB drawing surface, initialized to black.
pub struct Canvas {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0u8; (width * height) as usize * CHANNELS],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGB buffer, row-major, three bytes per pixel.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Writes one pixel, ignoring coordinates outside the canvas.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let index = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.buffer[index] = color.red;
        self.buffer[index + 1] = color.green;
        self.buffer[index + 2] = color.blue;
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Pixel {
        let index = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Pixel::from(&self.buffer[index..index + CHANNELS])
    }

    /// Draws a width-1 line segment by DDA: step along the major axis,
    /// rounding the interpolated minor coordinate. Endpoints outside the
    /// canvas are clipped pixel by pixel.
    pub fn draw_line(&mut self, p0: (i32, i32), p1: (i32, i32), color: Pixel) {
        let (x0, y0) = p0;
        let (x1, y1) = p1;
        let dx = x1 - x0;
        let dy = y1 - y0;
        let steps = dx.abs().max(dy.abs());

        if steps == 0 {
            self.put_pixel(x0, y0, color);
            return;
        }

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = (x0 as f64 + dx as f64 * t).round() as i32;
            let y = (y0 as f64 + dy as f64 * t).round() as i32;
            self.put_pixel(x, y, color);
        }
    }

    /// Encodes the buffer as a PNG at `path`.
    pub fn save(&self, path: &std::path::Path) -> Result<(), image::error::ImageError> {
        let output = std::fs::File::create(path)?;
        let encoder = image::codecs::png::PngEncoder::new(output);
        encoder.write_image(
            &self.buffer,
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(8, 8);
        assert!(canvas.buffer().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn horizontal_line_covers_full_row() {
        let mut canvas = Canvas::new(16, 16);
        let gray = Pixel::new(60, 60, 60);
        canvas.draw_line((0, 5), (15, 5), gray);
        for x in 0..16 {
            assert_eq!(canvas.get_pixel(x, 5), gray);
        }
        // The neighboring rows stay untouched.
        for x in 0..16 {
            assert_eq!(canvas.get_pixel(x, 4), Pixel::default());
            assert_eq!(canvas.get_pixel(x, 6), Pixel::default());
        }
    }

    #[test]
    fn steep_line_hits_both_endpoints() {
        let mut canvas = Canvas::new(16, 16);
        let white = Pixel::new(255, 255, 255);
        canvas.draw_line((3, 0), (5, 15), white);
        assert_eq!(canvas.get_pixel(3, 0), white);
        assert_eq!(canvas.get_pixel(5, 15), white);
        // One pixel per row along the major axis.
        for y in 0..16 {
            let lit = (0..16).filter(|&x| canvas.get_pixel(x, y) == white).count();
            assert_eq!(lit, 1);
        }
    }

    #[test]
    fn out_of_bounds_endpoints_are_clipped() {
        let mut canvas = Canvas::new(8, 8);
        let white = Pixel::new(255, 255, 255);
        canvas.draw_line((-10, 3), (20, 3), white);
        for x in 0..8 {
            assert_eq!(canvas.get_pixel(x, 3), white);
        }
    }

    #[test]
    fn save_writes_a_decodable_png() {
        let mut canvas = Canvas::new(4, 4);
        canvas.put_pixel(1, 2, Pixel::new(10, 20, 30));
        let path = std::env::temp_dir().join("canvas_save_test.png");
        canvas.save(&path).expect("Error Saving File.");

        let reloaded = image::open(&path).expect("Error Reloading File.").to_rgb8();
        assert_eq!(reloaded.dimensions(), (4, 4));
        assert_eq!(reloaded.get_pixel(1, 2), &image::Rgb([10, 20, 30]));
        let _ = std::fs::remove_file(&path);
    }
}
