//! Page-organized framebuffer
//!
//! The SSD1306 GDDRAM is organized in pages of 8 rows: the byte at index
//! `page * width + x` holds the column of pixels `(x, page*8)` through
//! `(x, page*8 + 7)`, with bit 0 the topmost row of the page. The
//! [`Framebuffer`] mirrors that layout exactly so a flush is a plain byte
//! stream in row-major page order.
//!
//! Buffer storage is caller-supplied, as any `AsRef<[u8]> + AsMut<[u8]>`
//! type: a `[u8; N]` on bare metal, a `Vec<u8>` where `alloc` is available.
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
//! fb.set_pixel(10, 20, Color::On);
//! assert_eq!(fb.pixel(10, 20), Some(Color::On));
//!
//! // Out-of-range coordinates are a silent no-op
//! fb.set_pixel(1000, 1000, Color::On);
//! ```

use crate::color::Color;
use crate::config::Dimensions;

/// In-memory image of the controller's page-organized GDDRAM
///
/// Owned exclusively by one [`Display`](crate::Display) in normal use;
/// drawing and flushing from multiple threads requires external
/// serialization, there is no internal locking.
pub struct Framebuffer<B> {
    /// Backing storage, at least `dimensions.buffer_size()` bytes
    buf: B,
    /// Panel width in pixels
    width: u32,
    /// Panel height in pixels
    height: u32,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a framebuffer over caller-supplied storage
    ///
    /// The storage is zeroed (all pixels off).
    ///
    /// # Panics
    ///
    /// Panics if the storage is smaller than `dimensions.buffer_size()`.
    /// Use [`Display::new`](crate::Display::new) for a fallible check.
    pub fn new(dimensions: Dimensions, mut buf: B) -> Self {
        let required = dimensions.buffer_size();
        assert!(
            buf.as_mut().len() >= required,
            "framebuffer storage too small: required {} bytes, got {}",
            required,
            buf.as_mut().len()
        );
        for byte in &mut buf.as_mut()[..required] {
            *byte = 0x00;
        }
        Self {
            buf,
            width: dimensions.width,
            height: dimensions.height,
        }
    }

    /// Panel width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Panel height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u32 {
        self.height / 8
    }

    /// Raw bytes in row-major page order, ready to stream to the controller
    pub fn data(&self) -> &[u8] {
        let len = (self.width * self.height / 8) as usize;
        &self.buf.as_ref()[..len]
    }

    /// Fill the whole buffer with one color
    pub fn clear(&mut self, color: Color) {
        let len = (self.width * self.height / 8) as usize;
        let fill = color.fill_byte();
        for byte in &mut self.buf.as_mut()[..len] {
            *byte = fill;
        }
    }

    /// Set or clear a single pixel
    ///
    /// Coordinates outside `[0, width) x [0, height)` are a silent no-op.
    /// The other 7 pixels sharing the byte are untouched.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (self.width * (y / 8) + x) as usize;
        let bit = 1u8 << (y % 8);
        match color {
            Color::On => self.buf.as_mut()[idx] |= bit,
            Color::Off => self.buf.as_mut()[idx] &= !bit,
        }
    }

    /// Query a single pixel
    ///
    /// Returns `None` for coordinates outside the panel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (self.width * (y / 8) + x) as usize;
        let bit = 1u8 << (y % 8);
        if self.buf.as_ref()[idx] & bit != 0 {
            Some(Color::On)
        } else {
            Some(Color::Off)
        }
    }

    /// OR (on) or AND-NOT (off) a bit mask into one buffer byte
    pub(crate) fn apply_mask(&mut self, idx: usize, mask: u8, color: Color) {
        match color {
            Color::On => self.buf.as_mut()[idx] |= mask,
            Color::Off => self.buf.as_mut()[idx] &= !mask,
        }
    }
}
