//! Vector drawing primitives over [`Frame`].
//!
//! All primitives clip against the canvas and degrade to no-ops for
//! degenerate input; nothing here returns an error. Lines are clipped with
//! Cohen-Sutherland outcodes before Bresenham stepping; axis-aligned fills
//! and blits take the cheaper per-pixel skip instead.

use crate::charset::Charset;
use crate::frame::{Color, Frame};
use crate::size::DisplaySize;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// 4-bit region classification of a point against the canvas rectangle.
fn outcode<S: DisplaySize>(x: i16, y: i16) -> u8 {
    let mut code = INSIDE;

    if x < 0 {
        code |= LEFT;
    } else if x >= S::WIDTH as i16 {
        code |= RIGHT;
    }

    if y < 0 {
        code |= TOP;
    } else if y >= S::HEIGHT as i16 {
        code |= BOTTOM;
    }

    code
}

impl<S: DisplaySize, C: Charset> Frame<S, C> {
    /// Bounds-checked plot for primitives that walk signed coordinates.
    fn plot(&mut self, x: i16, y: i16, color: Color) {
        if x < 0 || y < 0 || x >= S::WIDTH as i16 || y >= S::HEIGHT as i16 {
            return;
        }
        self.set_pixel(x as u8, y as u8, color);
    }

    /// Draw a line between two points, clipped to the canvas.
    ///
    /// Endpoints are clipped with Cohen-Sutherland region testing, then the
    /// surviving segment is stepped with integer Bresenham. Both endpoints
    /// are drawn; a line entirely outside the canvas draws nothing.
    pub fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);
        let mut out0 = outcode::<S>(x0, y0);
        let mut out1 = outcode::<S>(x1, y1);

        loop {
            if (out0 | out1) == 0 {
                // both endpoints inside
                break;
            }
            if (out0 & out1) != 0 {
                // both endpoints share an outside region -> invisible
                return;
            }

            let out = if out0 != 0 { out0 } else { out1 };
            // Intersect with the violated boundary. The divisions are safe:
            // a zero denominator would put both endpoints in the same
            // region, caught above.
            let (x, y) = if out & TOP != 0 {
                let x = x0 as i32 + (x1 - x0) as i32 * (0 - y0) as i32 / (y1 - y0) as i32;
                (x as i16, 0)
            } else if out & BOTTOM != 0 {
                let edge = S::HEIGHT as i32 - 1;
                let x = x0 as i32 + (x1 - x0) as i32 * (edge - y0 as i32) / (y1 - y0) as i32;
                (x as i16, edge as i16)
            } else if out & RIGHT != 0 {
                let edge = S::WIDTH as i32 - 1;
                let y = y0 as i32 + (y1 - y0) as i32 * (edge - x0 as i32) / (x1 - x0) as i32;
                (edge as i16, y as i16)
            } else {
                let y = y0 as i32 + (y1 - y0) as i32 * (0 - x0) as i32 / (x1 - x0) as i32;
                (0, y as i16)
            };

            if out == out0 {
                x0 = x;
                y0 = y;
                out0 = outcode::<S>(x0, y0);
            } else {
                x1 = x;
                y1 = y;
                out1 = outcode::<S>(x1, y1);
            }
        }

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx: i16 = if x0 < x1 { 1 } else { -1 };
        let sy: i16 = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0 as u8, y0 as u8, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Rectangle outline between two corners, in any corner order.
    pub fn draw_rect_corners(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };

        self.draw_line(x0, y0, x1, y0, color); // top
        self.draw_line(x0, y0, x0, y1, color); // left
        self.draw_line(x1, y0, x1, y1, color); // right
        self.draw_line(x0, y1, x1, y1, color); // bottom
    }

    /// Rectangle outline from origin and size; zero or negative sizes draw
    /// nothing.
    pub fn draw_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.draw_rect_corners(x, y, x + w - 1, y + h - 1, color);
    }

    /// Filled rectangle between two corners (inclusive), in any corner
    /// order. Rows and columns outside the canvas are skipped per pixel.
    pub fn fill_rect_corners(&mut self, x0: i16, y0: i16, x1: i16, y1: i16, color: Color) {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };

        for y in y0..=y1 {
            if y < 0 || y >= S::HEIGHT as i16 {
                continue;
            }
            for x in x0..=x1 {
                if x < 0 || x >= S::WIDTH as i16 {
                    continue;
                }
                self.set_pixel(x as u8, y as u8, color);
            }
        }
    }

    /// Filled rectangle from origin and size; zero or negative sizes draw
    /// nothing.
    pub fn fill_rect(&mut self, x: i16, y: i16, w: i16, h: i16, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.fill_rect_corners(x, y, x + w - 1, y + h - 1, color);
    }

    /// Circle outline, Bresenham midpoint with 8-way symmetry. Radius 0 is
    /// a single pixel; negative radii draw nothing.
    pub fn draw_circle(&mut self, xc: i16, yc: i16, r: i16, color: Color) {
        let mut x: i16 = 0;
        let mut y = r;
        let mut d = 3 - 2 * r;

        while y >= x {
            self.plot(xc + x, yc + y, color);
            self.plot(xc - x, yc + y, color);
            self.plot(xc + x, yc - y, color);
            self.plot(xc - x, yc - y, color);
            self.plot(xc + y, yc + x, color);
            self.plot(xc - y, yc + x, color);
            self.plot(xc + y, yc - x, color);
            self.plot(xc - y, yc - x, color);

            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }
        }
    }

    /// Filled circle via horizontal spans between the symmetric points of
    /// each midpoint step.
    pub fn fill_circle(&mut self, xc: i16, yc: i16, r: i16, color: Color) {
        let mut x: i16 = 0;
        let mut y = r;
        let mut d = 3 - 2 * r;

        while y >= x {
            for i in (xc - x)..=(xc + x) {
                self.plot(i, yc + y, color);
                self.plot(i, yc - y, color);
            }
            for i in (xc - y)..=(xc + y) {
                self.plot(i, yc + x, color);
                self.plot(i, yc - x, color);
            }

            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }
        }
    }

    /// Triangle outline: three clipped lines.
    pub fn draw_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) {
        self.draw_line(x0, y0, x1, y1, color);
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x0, y0, color);
    }

    /// Filled triangle by scanline interpolation.
    ///
    /// Vertices are sorted by y, the triangle is split at the middle
    /// vertex's scanline, and each scanline fills the span between the long
    /// edge and the currently active short edge. Zero-height segments are
    /// skipped, so degenerate triangles draw nothing.
    pub fn fill_triangle(
        &mut self,
        x0: i16,
        y0: i16,
        x1: i16,
        y1: i16,
        x2: i16,
        y2: i16,
        color: Color,
    ) {
        let (mut x0, mut y0, mut x1, mut y1, mut x2, mut y2) = (x0, y0, x1, y1, x2, y2);

        if y0 > y1 {
            core::mem::swap(&mut y0, &mut y1);
            core::mem::swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            core::mem::swap(&mut y1, &mut y2);
            core::mem::swap(&mut x1, &mut x2);
        }
        if y0 > y1 {
            core::mem::swap(&mut y0, &mut y1);
            core::mem::swap(&mut x0, &mut x1);
        }

        let total_height = y2 - y0;

        for i in 0..total_height {
            let second_half = i > y1 - y0 || y1 == y0;
            let segment_height = if second_half { y2 - y1 } else { y1 - y0 };
            if segment_height == 0 {
                continue;
            }

            let alpha = i as f32 / total_height as f32;
            let beta =
                (i - if second_half { y1 - y0 } else { 0 }) as f32 / segment_height as f32;

            let ax = x0 + ((x2 - x0) as f32 * alpha) as i16;
            let bx = if second_half {
                x1 + ((x2 - x1) as f32 * beta) as i16
            } else {
                x0 + ((x1 - x0) as f32 * beta) as i16
            };

            let (ax, bx) = if ax > bx { (bx, ax) } else { (ax, bx) };
            self.draw_line(ax, y0 + i, bx, y0 + i, color);
        }
    }

    /// Opaque 1-bit-per-pixel blit: set source bits draw in `color`, clear
    /// bits in its inverse. Rows are packed MSB-first and padded to whole
    /// bytes. Pixels outside the canvas are skipped; empty or undersized
    /// source data draws nothing (or stops at the data end).
    pub fn draw_bitmap(&mut self, x: i16, y: i16, data: &[u8], w: i16, h: i16, color: Color) {
        if data.is_empty() || w <= 0 || h <= 0 {
            return;
        }

        let bg = color.inverse();
        let bytes_per_row = ((w + 7) / 8) as usize;

        for j in 0..h {
            if y + j < 0 || y + j >= S::HEIGHT as i16 {
                continue;
            }
            for i in 0..w {
                if x + i < 0 || x + i >= S::WIDTH as i16 {
                    continue;
                }
                let byte = match data.get(j as usize * bytes_per_row + (i / 8) as usize) {
                    Some(&b) => b,
                    None => return,
                };
                let bit = 7 - (i % 8) as u8;
                let px = if byte & (1 << bit) != 0 { color } else { bg };
                self.set_pixel((x + i) as u8, (y + j) as u8, px);
            }
        }
    }
}
