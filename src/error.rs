//! Error types for the driver
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`GlyphError`] - Rejected glyph rendering preconditions
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions (width must be a multiple of 8)
//! let result = Dimensions::new(100, 64);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum panel width in pixels supported by the SSD1306 controller
///
/// The SSD1306 drives up to 128 segment (column) outputs.
pub const MAX_WIDTH: u32 = 128;

/// Maximum panel height in pixels supported by the SSD1306 controller
///
/// The SSD1306 drives up to 64 common (row) outputs.
pub const MAX_HEIGHT: u32 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C bus or reset pin)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation; the root cause is preserved, never masked.
    Interface(I::Error),
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// A flush was requested before [`init`](crate::Display::init) succeeded
    NotInitialized,
    /// Glyph rendering rejected its input
    Glyph(GlyphError),
}

impl<I: DisplayInterface> From<GlyphError> for Error<I> {
    fn from(err: GlyphError) -> Self {
        Self::Glyph(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::NotInitialized => write!(f, "Display has not been initialized"),
            Self::Glyph(e) => write!(f, "{e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Preconditions rejected by glyph rendering
///
/// Out-of-range pixel coordinates are a silent no-op for single-pixel
/// drawing, but glyph rendering writes shifted patterns into up to two page
/// rows, so a bad anchor or character code is reported instead of dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphError {
    /// Character code outside the 7-bit font table
    UnsupportedCharacter(char),
    /// Anchor point outside the panel
    OutOfBounds {
        /// X coordinate of the rejected anchor
        x: u32,
        /// Y coordinate of the rejected anchor
        y: u32,
    },
}

impl core::fmt::Display for GlyphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedCharacter(c) => {
                write!(f, "Character {c:?} is outside the 7-bit font table")
            }
            Self::OutOfBounds { x, y } => write!(f, "Glyph anchor ({x}, {y}) is off the panel"),
        }
    }
}

impl core::error::Error for GlyphError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u32,
        /// Height in pixels requested
        height: u32,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_WIDTH}x{MAX_HEIGHT}, both must be multiples of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
