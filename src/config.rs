//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_HEIGHT, MAX_WIDTH};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels (segment outputs)
    pub width: u32,
    /// Height in pixels (common outputs)
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_WIDTH
    /// - height == 0 or height > MAX_HEIGHT
    /// - width or height is not a multiple of 8 (pages are 8 rows tall and
    ///   each framebuffer byte spans 8 rows)
    pub fn new(width: u32, height: u32) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_WIDTH || !width.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_HEIGHT || !height.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Calculate required framebuffer size in bytes
    pub fn buffer_size(&self) -> usize {
        (self.width as usize * self.height as usize) / 8
    }

    /// Number of 8-row pages the panel is partitioned into
    pub fn pages(&self) -> u32 {
        self.height / 8
    }
}

/// Display configuration
///
/// Holds the bring-up profile sent to the controller by
/// [`Display::init`](crate::Display::init). One canonical sequence covers
/// all supported panels; panel variants are builder overrides, not separate
/// code paths. Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Contrast value (command 0x81 parameter)
    pub contrast: u8,
    /// Clock divide ratio / oscillator frequency byte (command 0xD5 parameter)
    pub clock_divide: u8,
    /// Pre-charge period byte (command 0xD9 parameter)
    pub precharge: u8,
    /// VCOMH deselect level (command 0xDB parameter)
    pub vcomh_deselect: u8,
    /// COM pin hardware configuration byte (command 0xDA parameter)
    pub com_pins: u8,
    /// Vertical display offset (command 0xD3 parameter)
    pub display_offset: u8,
    /// Display RAM start line (OR'd into command 0x40, 6 bits)
    pub start_line: u8,
    /// Mirror columns (segment remap, command 0xA1 vs 0xA0)
    pub mirror_columns: bool,
    /// Mirror rows (COM scan direction, command 0xC8 vs 0xC0)
    pub mirror_rows: bool,
    /// Enable the internal charge pump (command 0x8D parameter)
    pub charge_pump: bool,
}

/// Builder for constructing display configuration
///
/// Defaults match a 128x64 module wired with both axes mirrored and the
/// internal charge pump supplying the panel voltage.
///
/// # Example
///
/// ```
/// use ssd1306_i2c::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).contrast(0x8F).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Contrast value
    contrast: u8,
    /// Clock divide ratio / oscillator frequency byte
    clock_divide: u8,
    /// Pre-charge period byte
    precharge: u8,
    /// VCOMH deselect level
    vcomh_deselect: u8,
    /// COM pin hardware configuration byte
    com_pins: u8,
    /// Vertical display offset
    display_offset: u8,
    /// Display RAM start line
    start_line: u8,
    /// Mirror columns (segment remap)
    mirror_columns: bool,
    /// Mirror rows (COM scan direction)
    mirror_rows: bool,
    /// Enable the internal charge pump
    charge_pump: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            contrast: 0xCF,
            // Maximum oscillator frequency, divide ratio 1
            clock_divide: 0xF0,
            // Phase 1 = 1 DCLK, phase 2 = 15 DCLK
            precharge: 0xF1,
            // ~0.77 x Vcc
            vcomh_deselect: 0x40,
            // Alternative COM configuration, no left/right remap
            com_pins: crate::command::COM_PINS_BASE | crate::command::COM_PINS_ALTERNATIVE,
            display_offset: 0x00,
            start_line: 0x00,
            // Common module wiring puts the connector at the top, so both
            // axes are mirrored by default
            mirror_columns: true,
            mirror_rows: true,
            charge_pump: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the contrast value
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the VCOMH deselect level
    pub fn vcomh_deselect(mut self, value: u8) -> Self {
        self.vcomh_deselect = value;
        self
    }

    /// Set the COM pin hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set the vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the display RAM start line (6 bits)
    pub fn start_line(mut self, value: u8) -> Self {
        self.start_line = value & 0x3F;
        self
    }

    /// Set whether columns are mirrored (segment remap)
    pub fn mirror_columns(mut self, value: bool) -> Self {
        self.mirror_columns = value;
        self
    }

    /// Set whether rows are mirrored (COM scan direction)
    pub fn mirror_rows(mut self, value: bool) -> Self {
        self.mirror_rows = value;
        self
    }

    /// Set whether the internal charge pump is enabled
    ///
    /// Disable only for modules with an external panel supply.
    pub fn charge_pump(mut self, value: bool) -> Self {
        self.charge_pump = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            contrast: self.contrast,
            clock_divide: self.clock_divide,
            precharge: self.precharge,
            vcomh_deselect: self.vcomh_deselect,
            com_pins: self.com_pins,
            display_offset: self.display_offset,
            start_line: self.start_line,
            mirror_columns: self.mirror_columns,
            mirror_rows: self.mirror_rows,
            charge_pump: self.charge_pump,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_accepts_full_panel() {
        let dims = Dimensions::new(128, 64).unwrap();
        assert_eq!(dims.buffer_size(), 1024);
        assert_eq!(dims.pages(), 8);
    }

    #[test]
    fn dimensions_accepts_small_panel() {
        let dims = Dimensions::new(64, 32).unwrap();
        assert_eq!(dims.buffer_size(), 256);
        assert_eq!(dims.pages(), 4);
    }

    #[test]
    fn dimensions_rejects_non_multiple_of_eight() {
        assert!(Dimensions::new(100, 64).is_err());
        assert!(Dimensions::new(128, 60).is_err());
    }

    #[test]
    fn dimensions_rejects_zero_and_oversize() {
        assert!(Dimensions::new(0, 64).is_err());
        assert!(Dimensions::new(128, 0).is_err());
        assert!(Dimensions::new(136, 64).is_err());
        assert!(Dimensions::new(128, 72).is_err());
    }

    #[test]
    fn builder_requires_dimensions() {
        assert!(matches!(
            Builder::new().build(),
            Err(BuilderError::MissingDimensions)
        ));
    }

    #[test]
    fn builder_masks_start_line_to_six_bits() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .start_line(0xFF)
            .build()
            .unwrap();
        assert_eq!(config.start_line, 0x3F);
    }
}
