//! SSD1306 OLED Display Driver
//!
//! A driver for the SSD1306 monochrome OLED display controller over I2C,
//! supporting panels up to 128x64 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable panel dimensions and bring-up profile
//! - Built-in rasterizer: lines, circles, filled rectangles, 5x7 text
//! - Caller-supplied framebuffer storage, no allocation required
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::i2c::{I2c, Operation};
//! use ssd1306_i2c::{Builder, Color, DEFAULT_I2C_ADDRESS, Dimensions, Display, I2cInterface};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c, DEFAULT_I2C_ADDRESS, rst);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let buffer = [0u8; 1024];
//! let mut display = match Display::new(interface, config, buffer) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.init(&mut delay);
//! display.line(0, 0, 127, 63, Color::On);
//! let _ = display.text(8, 8, Color::On, "hello");
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Pixel color type for monochrome panels
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 5x7 bitmap font
pub mod font;
/// Page-organized in-memory frame image
pub mod framebuffer;
/// Drawing primitives over the framebuffer
pub mod graphics;
/// Hardware interface abstraction
pub mod interface;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_HEIGHT, MAX_WIDTH};
pub use display::{DATA_CHUNK_SIZE, Display};
pub use error::{BuilderError, Error, GlyphError};
pub use font::FONT_5X7;
pub use framebuffer::Framebuffer;
pub use graphics::{GLYPH_ADVANCE, GLYPH_WIDTH};
pub use interface::{
    DEFAULT_I2C_ADDRESS, DisplayInterface, I2cInterface, InterfaceError, RESET_SETTLE_MS,
};
