// THEORY:
// The `background` module is pure geometry: it computes the endpoints of a
// synthwave-style perspective floor grid and drives the `Canvas` rasterizer
// with them. Nothing here is random or time-dependent, so two renders are
// byte-identical.
//
// The illusion of depth comes from two tricks:
// 1.  Vertical lines are evenly spaced at the horizon and fan out toward the
//     bottom edge by a fixed spread factor around the center column. Outer
//     lines leave the frame entirely; the canvas clips them.
// 2.  Horizontal lines are spaced by t^1.5 of the horizon-to-bottom span, so
//     they bunch up near the horizon and widen toward the viewer.
// The horizon is drawn last so it overdraws every intersection cleanly.

use crate::core_modules::canvas::Canvas;
use crate::core_modules::pixel::pixel::Pixel;

pub const WIDTH: u32 = 240;
pub const HEIGHT: u32 = 240;

/// Horizon sits 40 pixels below the vertical center.
pub const HORIZON_Y: i32 = HEIGHT as i32 / 2 + 40;

const CENTER_X: i32 = WIDTH as i32 / 2;
const NUM_VERTICAL: u32 = 15;
const NUM_HORIZONTAL: u32 = 12;
const SPREAD_FACTOR: f64 = 2.5;

const GRID_COLOR: Pixel = Pixel { red: 60, green: 60, blue: 60 };
const HORIZON_COLOR: Pixel = Pixel { red: 80, green: 80, blue: 80 };

pub const OUTPUT_NAME: &str = "synthwave_bg.png";

/// Endpoints of vertical grid line `i` (0..=NUM_VERTICAL): evenly spaced at
/// the horizon, fanned out from the center column at the bottom edge.
pub fn vertical_line(i: u32) -> ((i32, i32), (i32, i32)) {
    let horizon_x = (i * WIDTH / NUM_VERTICAL) as i32;
    let offset_from_center = horizon_x - CENTER_X;
    let bottom_x = (CENTER_X as f64 + offset_from_center as f64 * SPREAD_FACTOR) as i32;
    ((horizon_x, HORIZON_Y), (bottom_x, HEIGHT as i32))
}

/// Row of horizontal grid line `i` (1..=NUM_HORIZONTAL). The 1.5 exponent
/// compresses spacing toward the horizon.
pub fn horizontal_line_y(i: u32) -> i32 {
    let t = i as f64 / NUM_HORIZONTAL as f64;
    (HORIZON_Y as f64 + (HEIGHT as i32 - HORIZON_Y) as f64 * t.powf(1.5)) as i32
}

/// Renders the full grid onto a fresh black canvas.
pub fn render() -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    for i in 0..=NUM_VERTICAL {
        let (top, bottom) = vertical_line(i);
        canvas.draw_line(top, bottom, GRID_COLOR);
    }

    for i in 1..=NUM_HORIZONTAL {
        let y = horizontal_line_y(i);
        canvas.draw_line((0, y), (WIDTH as i32, y), GRID_COLOR);
    }

    canvas.draw_line((0, HORIZON_Y), (WIDTH as i32, HORIZON_Y), HORIZON_COLOR);

    canvas
}
