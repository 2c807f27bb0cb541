//! Core display operations
//!
//! [`Display`] owns the hardware interface and the in-memory
//! [`Framebuffer`], and drives the device lifecycle: hardware reset plus
//! configuration ([`init`](Display::init)), full-frame transfer
//! ([`flush`](Display::flush)), and teardown ([`close`](Display::close)).
//!
//! Everything is synchronous and blocking; a display is a single-writer
//! resource and callers needing concurrent access must serialize it
//! externally.

use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{
    ADDRESS_MODE, ADDRESS_MODE_HORIZONTAL, CHARGE_PUMP, CHARGE_PUMP_OFF, CHARGE_PUMP_ON,
    CLOCK_DIVIDE, COM_PINS, COM_SCAN_MIRROR, COM_SCAN_NORMAL, CONTRAST, DISPLAY_OFF,
    DISPLAY_OFFSET, DISPLAY_ON, INVERSE_OFF, INVERSE_ON, MUX_RATIO, PRECHARGE,
    SEGMENT_REMAP_MIRROR, SEGMENT_REMAP_NORMAL, START_LINE, VCOMH_DESELECT,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Data bytes per framed bus transfer when flushing the framebuffer
///
/// The transport has an implicit maximum transfer size, so a full frame is
/// streamed as fixed-size slices. Chunk boundaries never split a pixel
/// byte: the chunk size divides every valid framebuffer length.
pub const DATA_CHUNK_SIZE: usize = 32;

/// SSD1306 display session
///
/// Owns the interface (bus + reset pin) and the framebuffer exclusively.
/// Construction does not touch the hardware; [`init`](Self::init) must run
/// before the first [`flush`](Self::flush).
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Framebuffer storage implementing `AsRef<[u8]> + AsMut<[u8]>`
pub struct Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Hardware interface
    interface: I,
    /// Bring-up profile
    config: Config,
    /// In-memory frame image
    framebuffer: Framebuffer<B>,
    /// Set once `init` has completed successfully
    initialized: bool,
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new display session over caller-supplied framebuffer storage
    ///
    /// The framebuffer starts all-clear.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the storage is smaller than
    /// `config.dimensions.buffer_size()`.
    pub fn new(interface: I, config: Config, mut buffer: B) -> Result<Self, Error<I>> {
        let required = config.dimensions.buffer_size();
        let provided = buffer.as_mut().len();
        if provided < required {
            return Err(Error::BufferTooSmall { required, provided });
        }
        let framebuffer = Framebuffer::new(config.dimensions, buffer);
        Ok(Self {
            interface,
            config,
            framebuffer,
            initialized: false,
        })
    }

    /// Reset and configure the controller
    ///
    /// Pulses the reset line (3 ms settle), then transmits the whole
    /// bring-up sequence as a single multi-byte command frame: display off,
    /// start line, horizontal addressing, contrast, segment remap, inverse
    /// off, multiplex ratio, display offset, COM scan direction, clock,
    /// pre-charge, COM pins, VCOMH deselect, charge pump, display on.
    ///
    /// The first interface error propagates with no retry; `init` may be
    /// invoked again once the underlying fault is fixed.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.initialized = false;
        self.interface.reset(delay).map_err(Error::Interface)?;

        let config = &self.config;
        let sequence = [
            DISPLAY_OFF,
            START_LINE | config.start_line,
            ADDRESS_MODE,
            ADDRESS_MODE_HORIZONTAL,
            CONTRAST,
            config.contrast,
            if config.mirror_columns {
                SEGMENT_REMAP_MIRROR
            } else {
                SEGMENT_REMAP_NORMAL
            },
            INVERSE_OFF,
            MUX_RATIO,
            (config.dimensions.height - 1) as u8,
            DISPLAY_OFFSET,
            config.display_offset,
            if config.mirror_rows {
                COM_SCAN_MIRROR
            } else {
                COM_SCAN_NORMAL
            },
            CLOCK_DIVIDE,
            config.clock_divide,
            PRECHARGE,
            config.precharge,
            COM_PINS,
            config.com_pins,
            VCOMH_DESELECT,
            config.vcomh_deselect,
            CHARGE_PUMP,
            if config.charge_pump {
                CHARGE_PUMP_ON
            } else {
                CHARGE_PUMP_OFF
            },
            DISPLAY_ON,
        ];
        self.interface
            .send_commands(&sequence)
            .map_err(Error::Interface)?;
        self.initialized = true;
        Ok(())
    }

    /// Transfer the whole framebuffer to the device
    ///
    /// Always a full-frame transfer in row-major page order, streamed in
    /// [`DATA_CHUNK_SIZE`] slices. Aborts the remaining chunks on the first
    /// transport error; the in-memory framebuffer is never mutated by a
    /// flush, failed or not.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before a successful
    /// [`init`](Self::init), or the first interface error encountered.
    pub fn flush(&mut self) -> DisplayResult<I> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }
        for chunk in self.framebuffer.data().chunks(DATA_CHUNK_SIZE) {
            self.interface.send_data(chunk).map_err(Error::Interface)?;
        }
        Ok(())
    }

    /// Power the panel off and release the interface
    ///
    /// Consuming `self` makes a double close unrepresentable. The interface
    /// is returned so the caller can reclaim the bus and reset pin (see
    /// [`I2cInterface::release`](crate::interface::I2cInterface::release)).
    pub fn close(mut self) -> Result<I, Error<I>> {
        self.interface
            .send_commands(&[DISPLAY_OFF])
            .map_err(Error::Interface)?;
        Ok(self.interface)
    }

    /// Put the panel to sleep without ending the session
    pub fn power_off(&mut self) -> DisplayResult<I> {
        self.interface
            .send_commands(&[DISPLAY_OFF])
            .map_err(Error::Interface)
    }

    /// Wake the panel from sleep
    pub fn power_on(&mut self) -> DisplayResult<I> {
        self.interface
            .send_commands(&[DISPLAY_ON])
            .map_err(Error::Interface)
    }

    /// Invert (or restore) the panel's pixel polarity
    pub fn invert(&mut self, inverted: bool) -> DisplayResult<I> {
        let cmd = if inverted { INVERSE_ON } else { INVERSE_OFF };
        self.interface
            .send_commands(&[cmd])
            .map_err(Error::Interface)
    }

    /// Change the contrast at runtime
    pub fn set_contrast(&mut self, value: u8) -> DisplayResult<I> {
        self.interface
            .send_commands(&[CONTRAST, value])
            .map_err(Error::Interface)
    }

    /// Fill the framebuffer with one color (in memory only)
    pub fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color);
    }

    /// Set or clear one framebuffer pixel; out-of-range is a no-op
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.framebuffer.set_pixel(x, y, color);
    }

    /// Draw a line into the framebuffer
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.framebuffer.line(x0, y0, x1, y1, color);
    }

    /// Draw a circle outline into the framebuffer
    pub fn circle(&mut self, x0: i32, y0: i32, radius: i32, color: Color) {
        self.framebuffer.circle(x0, y0, radius, color);
    }

    /// Fill a rectangle in the framebuffer
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.framebuffer.fill_rect(x0, y0, x1, y1, color);
    }

    /// Render one glyph into the framebuffer
    pub fn glyph(&mut self, x: u32, y: u32, color: Color, ch: char) -> DisplayResult<I> {
        self.framebuffer.glyph(x, y, color, ch)?;
        Ok(())
    }

    /// Render a string into the framebuffer
    pub fn text(&mut self, x: u32, y: u32, color: Color, s: &str) -> DisplayResult<I> {
        self.framebuffer.text(x, y, color, s)?;
        Ok(())
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Access the framebuffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::error::GlyphError;

    /// Records every framed transfer the display issues.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Frame {
        Command,
        Data,
    }

    #[derive(Debug)]
    struct MockInterface {
        frames: alloc::vec::Vec<(Frame, alloc::vec::Vec<u8>)>,
        resets: usize,
        fail_commands: bool,
        fail_after_data_frames: Option<usize>,
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MockFailure;

    impl MockInterface {
        fn new() -> Self {
            Self {
                frames: alloc::vec::Vec::new(),
                resets: 0,
                fail_commands: false,
                fail_after_data_frames: None,
            }
        }

        fn data_frames(&self) -> alloc::vec::Vec<&alloc::vec::Vec<u8>> {
            self.frames
                .iter()
                .filter(|(kind, _)| *kind == Frame::Data)
                .map(|(_, payload)| payload)
                .collect()
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockFailure;

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
            if self.fail_commands {
                return Err(MockFailure);
            }
            self.frames.push((Frame::Command, commands.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if let Some(limit) = self.fail_after_data_frames {
                let sent = self.data_frames().len();
                if sent >= limit {
                    return Err(MockFailure);
                }
            }
            self.frames.push((Frame::Data, data.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            self.resets += 1;
            Ok(())
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Display<MockInterface, alloc::vec::Vec<u8>> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        let buffer = alloc::vec![0u8; config.dimensions.buffer_size()];
        Display::new(MockInterface::new(), config, buffer).unwrap()
    }

    #[test]
    fn new_rejects_undersized_buffer() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        let result = Display::new(MockInterface::new(), config, alloc::vec![0u8; 100]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 1024,
                provided: 100
            })
        ));
    }

    #[test]
    fn init_resets_then_sends_one_command_frame() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();

        assert_eq!(display.interface.resets, 1);
        assert_eq!(display.interface.frames.len(), 1);

        let (kind, payload) = &display.interface.frames[0];
        assert_eq!(*kind, Frame::Command);
        assert_eq!(
            payload.as_slice(),
            &[
                0xAE, // display off
                0x40, // start line 0
                0x20, 0x00, // horizontal addressing
                0x81, 0xCF, // contrast
                0xA1, // segment remap, mirrored
                0xA6, // inverse off
                0xA8, 0x3F, // mux ratio 64
                0xD3, 0x00, // display offset
                0xC8, // COM scan, mirrored
                0xD5, 0xF0, // clock
                0xD9, 0xF1, // pre-charge
                0xDA, 0x12, // COM pins
                0xDB, 0x40, // VCOMH deselect
                0x8D, 0x14, // charge pump on
                0xAF, // display on
            ]
        );
    }

    #[test]
    fn flush_before_init_is_rejected() {
        let mut display = test_display();
        assert!(matches!(display.flush(), Err(Error::NotInitialized)));
        assert!(display.interface.frames.is_empty());
    }

    #[test]
    fn flush_streams_whole_frame_in_32_byte_chunks() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();
        display.line(0, 0, 127, 63, Color::On);
        display.flush().unwrap();

        // 128*64/8 bytes / 32 per chunk = 32 data frames
        let data_frames = display.interface.data_frames();
        assert_eq!(data_frames.len(), 32);
        assert!(data_frames.iter().all(|frame| frame.len() == 32));

        // No command frames interleaved after the init frame
        assert!(
            display.interface.frames[1..]
                .iter()
                .all(|(kind, _)| *kind == Frame::Data)
        );

        // Chunks concatenate back to the framebuffer, page-major
        let mut streamed = alloc::vec::Vec::new();
        for frame in &data_frames {
            streamed.extend_from_slice(frame);
        }
        assert_eq!(streamed.as_slice(), display.framebuffer().data());
    }

    #[test]
    fn flush_aborts_on_first_transport_error() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();
        display.clear(Color::On);
        display.interface.fail_after_data_frames = Some(5);

        assert!(matches!(display.flush(), Err(Error::Interface(MockFailure))));
        assert_eq!(display.interface.data_frames().len(), 5);
        // The in-memory frame is unaffected by the failed flush
        assert!(display.framebuffer().data().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn failed_init_leaves_display_uninitialized() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();

        // A re-init that faults drops the session back to uninitialized,
        // so flush is gated until a later init succeeds
        display.interface.fail_commands = true;
        assert!(matches!(
            display.init(&mut MockDelay),
            Err(Error::Interface(MockFailure))
        ));
        assert!(matches!(display.flush(), Err(Error::NotInitialized)));

        display.interface.fail_commands = false;
        display.init(&mut MockDelay).unwrap();
        display.flush().unwrap();
    }

    #[test]
    fn close_sends_power_off_and_returns_interface() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();
        let interface = display.close().unwrap();
        let (kind, payload) = interface.frames.last().unwrap();
        assert_eq!(*kind, Frame::Command);
        assert_eq!(payload.as_slice(), &[0xAE]);
    }

    #[test]
    fn power_and_polarity_commands_are_single_opcodes() {
        let mut display = test_display();
        display.power_off().unwrap();
        display.power_on().unwrap();
        display.invert(true).unwrap();
        display.invert(false).unwrap();
        display.set_contrast(0x7F).unwrap();

        let payloads: alloc::vec::Vec<_> = display
            .interface
            .frames
            .iter()
            .map(|(_, payload)| payload.as_slice())
            .collect();
        assert_eq!(
            payloads,
            alloc::vec![
                &[0xAE][..],
                &[0xAF][..],
                &[0xA7][..],
                &[0xA6][..],
                &[0x81, 0x7F][..],
            ]
        );
    }

    #[test]
    fn glyph_errors_surface_through_the_session() {
        let mut display = test_display();
        assert!(matches!(
            display.glyph(500, 0, Color::On, 'A'),
            Err(Error::Glyph(GlyphError::OutOfBounds { x: 500, y: 0 }))
        ));
    }

    #[test]
    fn small_panel_flushes_expected_chunk_count() {
        let config = Builder::new()
            .dimensions(Dimensions::new(64, 32).unwrap())
            .build()
            .unwrap();
        let buffer = alloc::vec![0u8; config.dimensions.buffer_size()];
        let mut display = Display::new(MockInterface::new(), config, buffer).unwrap();
        display.init(&mut MockDelay).unwrap();
        display.flush().unwrap();
        // 64*32/8 = 256 bytes = 8 chunks
        assert_eq!(display.interface.data_frames().len(), 8);
    }

    #[test]
    fn init_respects_profile_overrides() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 32).unwrap())
            .contrast(0x10)
            .mirror_columns(false)
            .mirror_rows(false)
            .charge_pump(false)
            .start_line(4)
            .build()
            .unwrap();
        let buffer = alloc::vec![0u8; config.dimensions.buffer_size()];
        let mut display = Display::new(MockInterface::new(), config, buffer).unwrap();
        display.init(&mut MockDelay).unwrap();

        let (_, payload) = &display.interface.frames[0];
        assert_eq!(payload[1], 0x44); // start line 4
        assert_eq!(payload[5], 0x10); // contrast
        assert_eq!(payload[6], 0xA0); // segment remap normal
        assert_eq!(payload[9], 0x1F); // mux ratio 32
        assert_eq!(payload[12], 0xC0); // COM scan normal
        assert_eq!(payload[22], 0x10); // charge pump off
    }
}
