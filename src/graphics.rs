//! Drawing primitives and embedded-graphics support
//!
//! All primitives are integer rasterizers over [`Framebuffer`]: lines and
//! circles go through single-pixel plots, filled rectangles take a
//! page-masked fast path, and glyphs merge shifted font columns into one or
//! two page rows. With the `graphics` feature enabled the framebuffer also
//! implements [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget)
//! so the embedded-graphics primitives and fonts work on it directly.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{Color, Dimensions, Framebuffer};
//!
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = Framebuffer::new(dims, [0u8; 1024]);
//!
//! fb.line(0, 0, 127, 63, Color::On);
//! fb.circle(64, 32, 20, Color::On);
//! fb.fill_rect(10, 10, 30, 25, Color::On);
//! let _ = fb.text(0, 56, Color::On, "Hello");
//! ```

use crate::color::Color;
use crate::error::GlyphError;
use crate::font::FONT_5X7;
use crate::framebuffer::Framebuffer;

/// Width of a font cell in columns
pub const GLYPH_WIDTH: u32 = 5;

/// Horizontal advance between characters (cell plus one column of spacing)
pub const GLYPH_ADVANCE: u32 = 6;

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Plot a point given signed coordinates, clipping anything off-panel
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        self.set_pixel(x as u32, y as u32, color);
    }

    /// Draw a line with the integer Bresenham algorithm
    ///
    /// Both endpoints are plotted; a zero-length line is a single pixel.
    /// Off-panel portions are clipped pixel by pixel.
    pub fn line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            self.plot(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Draw a 1-pixel-wide circle outline with the midpoint algorithm
    pub fn circle(&mut self, x0: i32, y0: i32, radius: i32, color: Color) {
        let mut f = 1 - radius;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * radius;
        let mut x = 0;
        let mut y = radius;

        self.plot(x0, y0 + radius, color);
        self.plot(x0, y0 - radius, color);
        self.plot(x0 + radius, y0, color);
        self.plot(x0 - radius, y0, color);

        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x;

            self.plot(x0 + x, y0 + y, color);
            self.plot(x0 - x, y0 + y, color);
            self.plot(x0 + x, y0 - y, color);
            self.plot(x0 - x, y0 - y, color);
            self.plot(x0 + y, y0 + x, color);
            self.plot(x0 - y, y0 + x, color);
            self.plot(x0 + y, y0 - x, color);
            self.plot(x0 - y, y0 - x, color);
        }
    }

    /// Fill the axis-aligned box with corners `(x0, y0)` and `(x1, y1)`
    ///
    /// Inverted bounds (`x0 > x1` or `y0 > y1`) are a no-op. A degenerate
    /// box (zero width or height) is drawn as a line. Boxes spanning more
    /// than one page row are filled with byte masks (partial masks on the
    /// top and bottom pages, full bytes in between) instead of per-pixel
    /// plots; single-page boxes fall back to row-by-row lines.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        if x0 > x1 || y0 > y1 {
            return;
        }
        if x0 == x1 || y0 == y1 {
            self.line(x0, y0, x1, y1, color);
            return;
        }

        let (width, height) = (self.width() as i32, self.height() as i32);
        if x1 < 0 || y1 < 0 || x0 >= width || y0 >= height {
            return;
        }
        let x0 = x0.max(0) as u32;
        let y0 = y0.max(0) as u32;
        let x1 = x1.min(width - 1) as u32;
        let y1 = y1.min(height - 1) as u32;

        if y0 / 8 != y1 / 8 {
            // Bits [y0 % 8, 7] of the top page row
            self.fill_page_span(y0 / 8, x0, x1, 0xFF << (y0 % 8), color);
            for page in (y0 / 8 + 1)..(y1 / 8) {
                self.fill_page_span(page, x0, x1, 0xFF, color);
            }
            // Bits [0, y1 % 8] of the bottom page row
            self.fill_page_span(y1 / 8, x0, x1, 0xFF >> (7 - y1 % 8), color);
        } else {
            for y in y0..=y1 {
                self.line(x0 as i32, y as i32, x1 as i32, y as i32, color);
            }
        }
    }

    /// Merge a bit mask into every byte of one page row over `[x0, x1]`
    fn fill_page_span(&mut self, page: u32, x0: u32, x1: u32, mask: u8, color: Color) {
        let base = (page * self.width()) as usize;
        for x in x0..=x1 {
            self.apply_mask(base + x as usize, mask, color);
        }
    }

    /// Render a 5x8 font cell with its top-left corner at `(x, y)`
    ///
    /// `y` need not be page-aligned: the cell's columns are merged into page
    /// `y / 8` shifted down by `y % 8` bits, with the overflow merged into
    /// the next page. Unrelated bits of both pages are untouched. Columns
    /// past the right panel edge are clipped.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError`] without mutating the buffer if the anchor is
    /// off the panel or the character is outside the 7-bit font table.
    pub fn glyph(&mut self, x: u32, y: u32, color: Color, ch: char) -> Result<(), GlyphError> {
        if x >= self.width() || y >= self.height() {
            return Err(GlyphError::OutOfBounds { x, y });
        }
        let code = ch as u32;
        if code > 127 {
            return Err(GlyphError::UnsupportedCharacter(ch));
        }

        let cell = FONT_5X7[code as usize];
        let width = self.width();
        let page = y / 8;
        let shift = y % 8;

        for (i, &column) in cell.iter().enumerate() {
            let cx = x + i as u32;
            if cx >= width {
                break;
            }
            self.apply_mask((page * width + cx) as usize, column << shift, color);
            if shift != 0 && page + 1 < self.pages() {
                self.apply_mask(
                    ((page + 1) * width + cx) as usize,
                    column >> (8 - shift),
                    color,
                );
            }
        }
        Ok(())
    }

    /// Render a string of 5x8 glyphs starting at `(x, y)`
    ///
    /// Advances [`GLYPH_ADVANCE`] pixels per character and stops at the
    /// right panel edge. Non-ASCII characters are skipped (their cell is
    /// left blank) rather than failing the whole string.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::OutOfBounds`] if the anchor row is off the panel.
    pub fn text(&mut self, x: u32, y: u32, color: Color, s: &str) -> Result<(), GlyphError> {
        if y >= self.height() {
            return Err(GlyphError::OutOfBounds { x, y });
        }
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width() {
                break;
            }
            if ch.is_ascii() {
                self.glyph(cx, y, color, ch)?;
            }
            cx += GLYPH_ADVANCE;
        }
        Ok(())
    }
}

#[cfg(feature = "graphics")]
mod draw_target {
    use core::convert::Infallible;
    use embedded_graphics_core::{
        draw_target::DrawTarget,
        geometry::{OriginDimensions, Point, Size},
        prelude::Pixel,
    };

    use super::{Color, Framebuffer};

    impl<B> DrawTarget for Framebuffer<B>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        type Color = Color;
        type Error = Infallible;

        fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
        where
            Iter: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(Point { x, y }, color) in pixels {
                if x < 0 || y < 0 {
                    continue;
                }
                self.set_pixel(x as u32, y as u32, color);
            }
            Ok(())
        }
    }

    impl<B> OriginDimensions for Framebuffer<B>
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        fn size(&self) -> Size {
            Size::new(self.width(), self.height())
        }
    }
}
