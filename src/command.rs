//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! OLED display controller, grouped by datasheet category, plus the I2C
//! control bytes that frame command and data transfers on the bus.
//!
//! ## Transfer structure
//!
//! Every I2C write to the controller starts with a control byte that
//! classifies the rest of the transfer:
//!
//! | Control byte | Meaning                  |
//! |--------------|--------------------------|
//! | `0x80`       | Single command byte      |
//! | `0x00`       | Stream of command bytes  |
//! | `0xC0`       | Single GDDRAM data byte  |
//! | `0x40`       | Stream of GDDRAM data    |
//!
//! The control byte selection is handled by
//! [`I2cInterface`](crate::interface::I2cInterface); commands listed here
//! are the payload that follows it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306_i2c::{command, DisplayInterface, I2cInterface, DEFAULT_I2C_ADDRESS};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::i2c::{I2c, Operation};
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
//! # let mut interface = I2cInterface::new(MockI2c, DEFAULT_I2C_ADDRESS, MockPin);
//! // Set contrast to maximum
//! let _ = interface.send_commands(&[command::CONTRAST, 0xFF]);
//!
//! // Turn the panel off
//! let _ = interface.send_commands(&[command::DISPLAY_OFF]);
//! ```

// I2C control bytes (framing prefixes)

/// Control byte announcing a single command byte (0x80)
pub const CONTROL_COMMAND_SINGLE: u8 = 0x80;

/// Control byte announcing a stream of command bytes (0x00)
pub const CONTROL_COMMAND_STREAM: u8 = 0x00;

/// Control byte announcing a single GDDRAM data byte (0xC0)
pub const CONTROL_DATA_SINGLE: u8 = 0xC0;

/// Control byte announcing a stream of GDDRAM data bytes (0x40)
pub const CONTROL_DATA_STREAM: u8 = 0x40;

// Fundamental commands

/// Set contrast command (0x81)
///
/// Followed by one byte holding the contrast value (0x00-0xFF).
pub const CONTRAST: u8 = 0x81;

/// Resume displaying GDDRAM contents (0xA4)
pub const DISPLAY_RAM: u8 = 0xA4;

/// Light every pixel regardless of GDDRAM contents (0xA5)
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal (non-inverted) display command (0xA6)
pub const INVERSE_OFF: u8 = 0xA6;

/// Inverted display command (0xA7)
pub const INVERSE_ON: u8 = 0xA7;

/// Display off / sleep command (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Scrolling commands
//
// Parameter layouts are controller-specific; see the datasheet. No scroll
// sequencing API is provided, only the raw opcodes.

/// Continuous horizontal scroll, rightward (0x26); 7-byte sequence
pub const HSCROLL_RIGHT: u8 = 0x26;

/// Continuous horizontal scroll, leftward (0x27); 7-byte sequence
pub const HSCROLL_LEFT: u8 = 0x27;

/// Continuous vertical and rightward horizontal scroll (0x29); 6-byte sequence
pub const VHSCROLL_RIGHT: u8 = 0x29;

/// Continuous vertical and leftward horizontal scroll (0x2A); 6-byte sequence
pub const VHSCROLL_LEFT: u8 = 0x2A;

/// Deactivate scrolling (0x2E)
pub const STOP_SCROLL: u8 = 0x2E;

/// Activate scrolling (0x2F)
pub const START_SCROLL: u8 = 0x2F;

/// Set vertical scroll area (0xA3); 3-byte sequence
pub const VSCROLL_AREA: u8 = 0xA3;

// Addressing setting commands

/// Set lower column start address nibble for page addressing (0x00)
///
/// OR with the low nibble of the column address.
pub const COLUMN_START_LOW: u8 = 0x00;

/// Set higher column start address nibble for page addressing (0x10)
///
/// OR with the high nibble of the column address.
pub const COLUMN_START_HIGH: u8 = 0x10;

/// Set memory addressing mode (0x20)
///
/// Followed by one of the `ADDRESS_MODE_*` bytes.
pub const ADDRESS_MODE: u8 = 0x20;

/// Horizontal addressing mode parameter
pub const ADDRESS_MODE_HORIZONTAL: u8 = 0x00;

/// Vertical addressing mode parameter
pub const ADDRESS_MODE_VERTICAL: u8 = 0x01;

/// Page addressing mode parameter
pub const ADDRESS_MODE_PAGE: u8 = 0x02;

/// Set column address range (0x21)
///
/// Followed by start and end column addresses.
pub const COLUMN_ADDRESS: u8 = 0x21;

/// Set page address range (0x22)
///
/// Followed by start and end page addresses.
pub const PAGE_ADDRESS: u8 = 0x22;

/// Set page start address for page addressing (0xB0)
///
/// OR with the 3-bit page number.
pub const PAGE_START: u8 = 0xB0;

// Hardware configuration commands

/// Set display RAM start line (0x40)
///
/// OR with the 6-bit start line.
pub const START_LINE: u8 = 0x40;

/// Map segment 0 to column 0 (0xA0)
pub const SEGMENT_REMAP_NORMAL: u8 = 0xA0;

/// Map segment 0 to the last column (0xA1), mirroring horizontally
pub const SEGMENT_REMAP_MIRROR: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Followed by one byte holding `rows - 1` (valid range 15..=63).
pub const MUX_RATIO: u8 = 0xA8;

/// Scan COM outputs from COM0 (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// Scan COM outputs toward COM0 (0xC8), mirroring vertically
pub const COM_SCAN_MIRROR: u8 = 0xC8;

/// Set vertical display offset (0xD3)
///
/// Followed by one byte holding the 6-bit COM shift.
pub const DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pin hardware configuration (0xDA)
///
/// Followed by [`COM_PINS_BASE`] OR'd with the `COM_PINS_*` flags.
pub const COM_PINS: u8 = 0xDA;

/// Mandatory base bits of the COM pin configuration parameter
pub const COM_PINS_BASE: u8 = 0x02;

/// Alternative COM pin configuration flag
pub const COM_PINS_ALTERNATIVE: u8 = 0x10;

/// Left/right COM remap flag
pub const COM_PINS_LR_REMAP: u8 = 0x20;

// Timing and driving scheme commands

/// Set display clock divide ratio and oscillator frequency (0xD5)
///
/// Followed by one byte: low nibble divide ratio, high nibble F(osc).
pub const CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge periods (0xD9)
///
/// Followed by one byte: low nibble phase 1, high nibble phase 2.
pub const PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Followed by the deselect level byte (0x40 on common modules).
pub const VCOMH_DESELECT: u8 = 0xDB;

/// No operation (0xE3)
pub const NOP: u8 = 0xE3;

// Charge pump commands

/// Charge pump setting (0x8D)
///
/// Followed by [`CHARGE_PUMP_ON`] or [`CHARGE_PUMP_OFF`].
pub const CHARGE_PUMP: u8 = 0x8D;

/// Disable the charge pump parameter
pub const CHARGE_PUMP_OFF: u8 = 0x10;

/// Enable the charge pump parameter
pub const CHARGE_PUMP_ON: u8 = 0x14;
