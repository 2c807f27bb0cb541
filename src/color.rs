//! Binary pixel state
//!
//! The SSD1306 models a pixel as a single bit: lit or unlit. Each byte of
//! the framebuffer packs a vertical run of 8 pixels, so clearing the whole
//! buffer to one color is a byte fill.
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::Color;
//!
//! assert_eq!(Color::On.fill_byte(), 0xFF);
//! assert_eq!(Color::Off.fill_byte(), 0x00);
//! ```

/// Pixel state on a monochrome OLED panel
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    /// Pixel unlit
    Off,
    /// Pixel lit
    On,
}

impl Color {
    /// Byte value that fills all 8 pixels of a framebuffer byte with this color
    pub fn fill_byte(self) -> u8 {
        match self {
            Self::Off => 0x00,
            Self::On => 0xFF,
        }
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::On,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Off,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for embedded_graphics_core::pixelcolor::BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::On => Self::On,
            Color::Off => Self::Off,
        }
    }
}
