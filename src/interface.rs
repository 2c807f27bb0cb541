//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the SSD1306 controller
//! over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in its I2C wiring requires:
//! - I2C bus (SDA + SCL), device address 0x3C or 0x3D
//! - 1 GPIO pin: **RST**, reset (output, active low)
//!
//! Command/data selection happens in-band: every transfer starts with a
//! control byte (see [`command`](crate::command)) rather than a dedicated
//! DC pin.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use ssd1306_i2c::{DisplayInterface, I2cInterface, DEFAULT_I2C_ADDRESS};
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let mut interface = I2cInterface::new(MockI2c, DEFAULT_I2C_ADDRESS, MockPin);
//!
//! // Hardware reset pulse
//! let _ = interface.reset(&mut delay);
//!
//! // Multi-byte command stream (framed with control byte 0x00)
//! let _ = interface.send_commands(&[0x81, 0xCF]);
//!
//! // Pixel data stream (framed with control byte 0x40)
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{
    CONTROL_COMMAND_SINGLE, CONTROL_COMMAND_STREAM, CONTROL_DATA_SINGLE, CONTROL_DATA_STREAM,
};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default I2C address of SSD1306 modules (SA0 tied low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Reset pulse settle time in milliseconds
pub const RESET_SETTLE_MS: u32 = 3;

/// Trait for hardware interface to the SSD1306 controller
///
/// This trait abstracts over different hardware attachments, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// frame command and data transfers. The provided implementation is
/// [`I2cInterface`]; a SPI attachment with a dedicated DC pin would
/// implement the same trait.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command sequence to the controller in one framed transfer
    ///
    /// The implementation must classify the payload by length (single vs
    /// multi-byte) and tag it as a command transfer. Framing never inspects
    /// payload content and retains no state between calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send pixel data to the controller in one framed transfer
    ///
    /// Same length classification as [`send_commands`](Self::send_commands),
    /// tagged as a data transfer. The bus has an implicit maximum transfer
    /// size; callers flushing a full frame chunk the payload (see
    /// [`DATA_CHUNK_SIZE`](crate::display::DATA_CHUNK_SIZE)) before calling.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform a hardware reset pulse
    ///
    /// The implementation must drive RST low, hold for the settle time
    /// ([`RESET_SETTLE_MS`]), then drive it high.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails. Pin failures are
    /// fatal to [`init`](crate::Display::init).
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// I2C communication error
    Bus(BusErr),
    /// Reset pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "I2C error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// I2C hardware interface for the SSD1306
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C and GPIO traits.
/// Owns the bus handle and the reset pin exclusively; [`release`](Self::release)
/// hands them back.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct I2cInterface<I2C, RST> {
    /// I2C bus handle
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    /// Reset pin (active low)
    rst: RST,
}

impl<I2C, RST> I2cInterface<I2C, RST>
where
    I2C: I2c,
    RST: OutputPin,
{
    /// Create a new I2cInterface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - 7-bit device address ([`DEFAULT_I2C_ADDRESS`] on most modules)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(i2c: I2C, address: u8, rst: RST) -> Self {
        Self { i2c, address, rst }
    }

    /// Get the configured device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the owned bus and reset pin
    ///
    /// Consumes the interface, so the handles cannot be used through a
    /// released interface.
    pub fn release(self) -> (I2C, RST) {
        (self.i2c, self.rst)
    }

    /// Write one control byte followed by the payload as a single transaction
    ///
    /// Adjacent write operations in one embedded-hal I2C transaction are
    /// contiguous on the wire, so the controller sees `[control, payload...]`
    /// in one addressed write.
    fn write_framed(&mut self, control: u8, payload: &[u8]) -> Result<(), I2C::Error> {
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[control]), Operation::Write(payload)],
        )
    }
}

impl<I2C, RST> DisplayInterface for I2cInterface<I2C, RST>
where
    I2C: I2c,
    I2C::Error: Debug,
    RST: OutputPin,
    RST::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, RST::Error>;

    fn send_commands(&mut self, commands: &[u8]) -> InterfaceResult<(), Self::Error> {
        if commands.is_empty() {
            return Ok(());
        }
        let control = if commands.len() == 1 {
            CONTROL_COMMAND_SINGLE
        } else {
            CONTROL_COMMAND_STREAM
        };
        self.write_framed(control, commands)
            .map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        if data.is_empty() {
            return Ok(());
        }
        let control = if data.len() == 1 {
            CONTROL_DATA_SINGLE
        } else {
            CONTROL_DATA_STREAM
        };
        self.write_framed(control, data).map_err(InterfaceError::Bus)
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal::digital::ErrorType;
    use embedded_hal::i2c::ErrorType as I2cErrorType;

    #[derive(Debug, Clone, Copy)]
    struct MockError;

    impl core::fmt::Display for MockError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            write!(f, "mock error")
        }
    }

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> embedded_hal::i2c::ErrorKind {
            embedded_hal::i2c::ErrorKind::Other
        }
    }

    /// Records every addressed write as one flattened byte vector.
    #[derive(Debug, Default)]
    struct MockI2c {
        writes: alloc::vec::Vec<(u8, alloc::vec::Vec<u8>)>,
    }

    impl I2cErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let mut bytes = alloc::vec::Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.writes.push((address, bytes));
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockPin {
        states: alloc::vec::Vec<bool>,
    }

    impl ErrorType for MockPin {
        type Error = MockError;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.states.push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.states.push(true);
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_interface() -> I2cInterface<MockI2c, MockPin> {
        I2cInterface::new(MockI2c::default(), DEFAULT_I2C_ADDRESS, MockPin::default())
    }

    #[test]
    fn single_command_uses_single_control_byte() {
        let mut interface = test_interface();
        interface.send_commands(&[0xAE]).unwrap();
        assert_eq!(
            interface.i2c.writes,
            alloc::vec![(DEFAULT_I2C_ADDRESS, alloc::vec![0x80, 0xAE])]
        );
    }

    #[test]
    fn multi_byte_command_uses_stream_control_byte() {
        let mut interface = test_interface();
        interface.send_commands(&[0x81, 0xCF]).unwrap();
        assert_eq!(
            interface.i2c.writes,
            alloc::vec![(DEFAULT_I2C_ADDRESS, alloc::vec![0x00, 0x81, 0xCF])]
        );
    }

    #[test]
    fn single_data_byte_uses_single_control_byte() {
        let mut interface = test_interface();
        interface.send_data(&[0x55]).unwrap();
        assert_eq!(
            interface.i2c.writes,
            alloc::vec![(DEFAULT_I2C_ADDRESS, alloc::vec![0xC0, 0x55])]
        );
    }

    #[test]
    fn multi_byte_data_uses_stream_control_byte() {
        let mut interface = test_interface();
        interface.send_data(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(
            interface.i2c.writes,
            alloc::vec![(DEFAULT_I2C_ADDRESS, alloc::vec![0x40, 0x01, 0x02, 0x03])]
        );
    }

    #[test]
    fn framing_covers_chunk_boundary_lengths() {
        // 32 bytes is one framed transfer; a 33-byte payload chunked by the
        // caller becomes a 32-byte stream frame plus a single-byte frame.
        let payload = [0xA5u8; 33];
        let mut interface = test_interface();
        for chunk in payload.chunks(32) {
            interface.send_data(chunk).unwrap();
        }
        assert_eq!(interface.i2c.writes.len(), 2);
        assert_eq!(interface.i2c.writes[0].1[0], 0x40);
        assert_eq!(interface.i2c.writes[0].1.len(), 33);
        assert_eq!(interface.i2c.writes[1].1, alloc::vec![0xC0, 0xA5]);
    }

    #[test]
    fn empty_payload_is_not_transmitted() {
        let mut interface = test_interface();
        interface.send_commands(&[]).unwrap();
        interface.send_data(&[]).unwrap();
        assert!(interface.i2c.writes.is_empty());
    }

    #[test]
    fn reset_pulses_low_then_high() {
        let mut interface = test_interface();
        interface.reset(&mut MockDelay).unwrap();
        assert_eq!(interface.rst.states, alloc::vec![false, true]);
    }

    #[test]
    fn release_returns_handles() {
        let interface = test_interface();
        let (i2c, _rst) = interface.release();
        assert!(i2c.writes.is_empty());
    }
}
