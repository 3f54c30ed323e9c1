//! Display handle: owns the frame and the bus, runs the flush engine.
//!
//! Drawing happens on the embedded [`Frame`]; nothing touches the bus
//! until [`Display::flush`] walks the dirty map. The flush engine
//! coalesces consecutive dirty columns of each page into one addressed
//! burst, which collapses hundreds of single-column writes into a few
//! transactions on a typical redraw.

use pictor_gfx::charset::{Charset, Utf8};
use pictor_gfx::frame::{Color, Frame};
use pictor_gfx::size::DisplaySize;

use crate::bus::{BusError, DisplayBus};
use crate::cmd;

/// Panel orientation and flush behavior, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Scan COM lines bottom-up (vertical flip).
    pub mirror_vertical: bool,
    /// Remap segment columns right-to-left (horizontal flip).
    pub mirror_horizontal: bool,
    /// Invert panel polarity (RAM 1 shows dark).
    pub invert: bool,
    /// Let widget draw calls present themselves via
    /// [`Display::flush_if_auto`].
    pub auto_flush: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mirror_vertical: true,
            mirror_horizontal: true,
            invert: false,
            auto_flush: true,
        }
    }
}

/// A panel plus the frame staged for it.
///
/// `S` fixes the geometry, `B` the transport, `C` the text encoding used
/// by string draws on the embedded frame.
pub struct Display<S: DisplaySize, B: DisplayBus, C: Charset = Utf8> {
    frame: Frame<S, C>,
    bus: B,
    config: DisplayConfig,
    initialized: bool,
}

impl<S: DisplaySize, B: DisplayBus, C: Charset> Display<S, B, C> {
    /// Create a display with default configuration. The panel is not
    /// touched until [`Display::init`].
    pub fn new(bus: B) -> Self {
        Self::with_config(bus, DisplayConfig::default())
    }

    /// Create a display with an explicit configuration.
    pub fn with_config(bus: B, config: DisplayConfig) -> Self {
        Self {
            frame: Frame::new(),
            bus,
            config,
            initialized: false,
        }
    }

    /// The staged frame, for inspection.
    pub fn frame(&self) -> &Frame<S, C> {
        &self.frame
    }

    /// The staged frame, for drawing.
    pub fn frame_mut(&mut self) -> &mut Frame<S, C> {
        &mut self.frame
    }

    /// The transport, for inspection.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Direct access to the transport.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Whether [`Display::init`] has completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether widget draws should present themselves.
    pub fn auto_flush(&self) -> bool {
        self.config.auto_flush
    }

    /// Switch automatic presentation on or off at runtime.
    pub fn set_auto_flush(&mut self, enabled: bool) {
        self.config.auto_flush = enabled;
    }

    /// Run the controller power-up sequence, then light the whole panel.
    ///
    /// Flushing is refused until this has succeeded once.
    pub fn init(&mut self) -> Result<(), BusError> {
        let cfg = self.config;

        self.bus.send_commands(&[cmd::DISPLAY_OFF])?;
        self.bus
            .send_commands(&[cmd::SET_MEM_MODE, cmd::MEM_MODE_HORIZONTAL])?;
        self.bus.send_commands(&[cmd::SET_PAGE_ADDR])?;
        self.bus.send_commands(&[cmd::SET_LOW_COLUMN])?;
        self.bus.send_commands(&[cmd::SET_HIGH_COLUMN])?;
        self.bus.send_commands(&[if cfg.mirror_vertical {
            cmd::SET_COM_SCAN_DEC
        } else {
            cmd::SET_COM_SCAN_INC
        }])?;
        self.bus.send_commands(&[if cfg.mirror_horizontal {
            cmd::SET_SEG_REMAP
        } else {
            cmd::SET_SEG_REMAP_OFF
        }])?;
        self.bus.send_commands(&[if cfg.invert {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        }])?;
        self.bus.send_commands(&[cmd::SET_CONTRAST, 0xFF])?;
        self.bus.send_commands(&[cmd::SET_MUX_RATIO, S::MULTIPLEX])?;
        self.bus.send_commands(&[cmd::RESUME_FROM_RAM])?;
        self.bus.send_commands(&[cmd::SET_DISPLAY_OFFSET, 0x00])?;
        self.bus.send_commands(&[cmd::SET_CLOCK_DIV, 0x80])?;
        self.bus.send_commands(&[cmd::SET_PRECHARGE, 0xF1])?;
        self.bus.send_commands(&[cmd::SET_COM_PINS, S::COM_PINS])?;
        self.bus.send_commands(&[cmd::SET_VCOM_DETECT, 0x40])?;
        self.bus.send_commands(&[cmd::SET_CHARGE_PUMP, 0x14])?;
        self.bus.send_commands(&[cmd::DISPLAY_ON])?;

        self.initialized = true;
        self.frame.fill(Color::On);
        self.flush();

        #[cfg(feature = "defmt")]
        defmt::debug!("display initialized ({=u8}x{=u8})", S::WIDTH, S::HEIGHT);

        Ok(())
    }

    /// Set panel contrast, 0x00 to 0xFF.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), BusError> {
        self.bus.send_commands(&[cmd::SET_CONTRAST, contrast])
    }

    /// Invert or restore panel polarity at runtime.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), BusError> {
        self.bus.send_commands(&[if inverted {
            cmd::SET_INVERSE
        } else {
            cmd::SET_NORMAL
        }])
    }

    /// Switch the panel on or off without losing frame contents.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), BusError> {
        self.bus.send_commands(&[if on {
            cmd::DISPLAY_ON
        } else {
            cmd::DISPLAY_OFF
        }])
    }

    /// Fill every pixel with `color` and present immediately.
    pub fn fill_and_present(&mut self, color: Color) {
        self.frame.fill(color);
        self.flush();
    }

    /// Blank the panel and present immediately.
    pub fn clear(&mut self) {
        self.fill_and_present(Color::Off);
    }

    /// Present now when configured for automatic flushing.
    ///
    /// Widget draw calls end with this, so manual-flush callers can batch
    /// several widgets into one [`Display::flush`].
    pub fn flush_if_auto(&mut self) {
        if self.config.auto_flush {
            self.flush();
        }
    }

    /// Transmit every dirty column and clear the dirty map.
    ///
    /// One pass over the dirty bits per page, left to right. Consecutive
    /// dirty columns accumulate into a run; a clean bit or the page end
    /// closes the run and sends it as one addressed burst. An all-dirty
    /// flag byte extends the run by eight columns without per-bit
    /// scanning. A clean frame performs no bus traffic at all.
    ///
    /// Dirty bits are cleared as each run is composed, before the
    /// transport reports success, so a failed burst is dropped rather
    /// than retried.
    pub fn flush(&mut self) {
        if !self.initialized {
            return;
        }
        let Self { frame, bus, .. } = self;

        for page in 0..S::PAGES {
            let mut run_start: u8 = 0;
            let mut run_len: u16 = 0;

            for byte in 0..S::WIDTH_BYTES {
                let idx = page as usize * S::WIDTH_BYTES as usize + byte as usize;
                let flags = frame.dirty_flags()[idx];

                if flags == 0xFF {
                    if run_len == 0 {
                        run_start = byte * 8;
                    }
                    run_len += 8;
                    continue;
                }

                for bit in 0..8u8 {
                    if flags & (1 << bit) != 0 {
                        if run_len == 0 {
                            run_start = byte * 8 + bit;
                        }
                        run_len += 1;
                    } else if run_len > 0 {
                        Self::send_run(frame, bus, page, run_start, run_len);
                        run_len = 0;
                    }
                }
            }

            // runs never cross into the next page
            if run_len > 0 {
                Self::send_run(frame, bus, page, run_start, run_len);
            }
        }
    }

    fn send_run(frame: &mut Frame<S, C>, bus: &mut B, page: u8, start: u8, len: u16) {
        frame.clear_dirty_range(page, start, len);

        let col = start + S::X_OFFSET;
        let addressing = [
            cmd::SET_PAGE_ADDR | ((page + S::PAGE_OFFSET) & 0x07),
            cmd::SET_LOW_COLUMN | (col & 0x0F),
            cmd::SET_HIGH_COLUMN | (col >> 4),
        ];
        if let Err(_e) = bus.send_commands(&addressing) {
            #[cfg(feature = "defmt")]
            defmt::debug!("flush addressing failed: {}", _e);
            return;
        }

        let from = page as usize * S::WIDTH as usize + start as usize;
        let to = from + len as usize;
        if let Err(_e) = bus.send_data(&frame.buffer()[from..to]) {
            #[cfg(feature = "defmt")]
            defmt::debug!("flush burst failed: {}", _e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;
    use pictor_gfx::size::{Size128x64, Size64x32Offset};

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Commands(Vec<u8, 8>),
        Data(Vec<u8, 128>),
    }

    #[derive(Default)]
    struct MockBus {
        calls: std::vec::Vec<Call>,
        fail: bool,
    }

    impl DisplayBus for MockBus {
        fn send_commands(&mut self, cmds: &[u8]) -> Result<(), BusError> {
            if self.fail {
                return Err(BusError::Nack);
            }
            let mut v = Vec::new();
            v.extend_from_slice(cmds).unwrap();
            self.calls.push(Call::Commands(v));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), BusError> {
            if self.fail {
                return Err(BusError::Nack);
            }
            let mut v = Vec::new();
            v.extend_from_slice(data).unwrap();
            self.calls.push(Call::Data(v));
            Ok(())
        }
    }

    fn commands(bytes: &[u8]) -> Call {
        let mut v = Vec::new();
        v.extend_from_slice(bytes).unwrap();
        Call::Commands(v)
    }

    fn data(bytes: &[u8]) -> Call {
        let mut v = Vec::new();
        v.extend_from_slice(bytes).unwrap();
        Call::Data(v)
    }

    /// Initialized display with a blank frame and an empty call log.
    fn blank_display() -> Display<Size128x64, MockBus> {
        let mut d = Display::new(MockBus::default());
        d.init().unwrap();
        d.fill_and_present(Color::Off);
        d.bus_mut().calls.clear();
        d
    }

    #[test]
    fn test_flush_before_init_sends_nothing() {
        let mut d: Display<Size128x64, _> = Display::new(MockBus::default());
        d.frame_mut().set_pixel(0, 0, Color::On);
        d.flush();
        assert!(d.bus().calls.is_empty());
        // refusal leaves the change pending
        assert!(d.frame().is_dirty());
    }

    #[test]
    fn test_init_command_sequence() {
        let mut d: Display<Size128x64, _> = Display::new(MockBus::default());
        d.init().unwrap();

        let calls = &d.bus().calls;
        // 18 setup commands, then 8 pages of addressed full-width bursts
        assert_eq!(calls.len(), 18 + 16);
        assert_eq!(calls[0], commands(&[0xAE]));
        assert_eq!(calls[1], commands(&[0x20, 0x00]));
        // default config mirrors both axes
        assert_eq!(calls[5], commands(&[0xC8]));
        assert_eq!(calls[6], commands(&[0xA1]));
        assert_eq!(calls[9], commands(&[0xA8, 0x3F]));
        assert_eq!(calls[16], commands(&[0x8D, 0x14]));
        assert_eq!(calls[17], commands(&[0xAF]));
        // the panel comes up lit
        assert_eq!(calls[18], commands(&[0xB0, 0x00, 0x10]));
        assert_eq!(calls[19], data(&[0xFF; 128]));
        assert!(!d.frame().is_dirty());
    }

    #[test]
    fn test_init_respects_config() {
        let config = DisplayConfig {
            mirror_vertical: false,
            mirror_horizontal: false,
            invert: true,
            auto_flush: true,
        };
        let mut d: Display<Size128x64, _> = Display::with_config(MockBus::default(), config);
        d.init().unwrap();

        let calls = &d.bus().calls;
        assert_eq!(calls[5], commands(&[0xC0]));
        assert_eq!(calls[6], commands(&[0xA0]));
        assert_eq!(calls[7], commands(&[0xA7]));
    }

    #[test]
    fn test_flush_nothing_dirty_makes_zero_calls() {
        let mut d = blank_display();
        d.flush();
        assert!(d.bus().calls.is_empty());
    }

    #[test]
    fn test_flush_single_pixel_is_one_addressed_burst() {
        let mut d = blank_display();
        d.frame_mut().set_pixel(10, 20, Color::On);
        d.flush();

        let calls = &d.bus().calls;
        assert_eq!(calls.len(), 2);
        // page 2, column 10
        assert_eq!(calls[0], commands(&[0xB2, 0x0A, 0x10]));
        assert_eq!(calls[1], data(&[0x10]));

        d.bus_mut().calls.clear();
        d.flush();
        assert!(d.bus().calls.is_empty());
    }

    #[test]
    fn test_flush_coalesces_adjacent_columns() {
        let mut d = blank_display();
        for x in 10..=13 {
            d.frame_mut().set_pixel(x, 0, Color::On);
        }
        d.flush();

        let calls = &d.bus().calls;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], commands(&[0xB0, 0x0A, 0x10]));
        assert_eq!(calls[1], data(&[0x01, 0x01, 0x01, 0x01]));
    }

    #[test]
    fn test_flush_splits_runs_at_clean_column() {
        let mut d = blank_display();
        d.frame_mut().set_pixel(10, 0, Color::On);
        d.frame_mut().set_pixel(12, 0, Color::On);
        d.flush();

        let calls = &d.bus().calls;
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], commands(&[0xB0, 0x0A, 0x10]));
        assert_eq!(calls[1], data(&[0x01]));
        assert_eq!(calls[2], commands(&[0xB0, 0x0C, 0x10]));
        assert_eq!(calls[3], data(&[0x01]));
    }

    #[test]
    fn test_flush_full_flag_byte_extends_run() {
        let mut d = blank_display();
        // columns 16..=23 make flag byte 2 read 0xFF; column 24 adds a
        // partial bit in the next flag byte, and the run must bridge them
        for x in 16..=24 {
            d.frame_mut().set_pixel(x, 0, Color::On);
        }
        d.flush();

        let calls = &d.bus().calls;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], commands(&[0xB0, 0x00, 0x11]));
        assert_eq!(calls[1], data(&[0x01; 9]));
    }

    #[test]
    fn test_flush_runs_never_cross_pages() {
        let mut d = blank_display();
        // adjacent in dirty-bit order but on different pages
        d.frame_mut().set_pixel(127, 7, Color::On);
        d.frame_mut().set_pixel(0, 8, Color::On);
        d.flush();

        let calls = &d.bus().calls;
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], commands(&[0xB0, 0x0F, 0x17]));
        assert_eq!(calls[1], data(&[0x80]));
        assert_eq!(calls[2], commands(&[0xB1, 0x00, 0x10]));
        assert_eq!(calls[3], data(&[0x01]));
    }

    #[test]
    fn test_flush_clears_dirty_even_when_bus_fails() {
        let mut d = blank_display();
        d.frame_mut().set_pixel(5, 5, Color::On);
        d.bus_mut().fail = true;
        d.flush();
        // dropped, not retried: the run was cleared before the failure
        assert!(!d.frame().is_dirty());

        d.bus_mut().fail = false;
        d.flush();
        assert!(d.bus().calls.is_empty());
    }

    #[test]
    fn test_windowed_panel_offsets_addressing() {
        let mut d: Display<Size64x32Offset, _> = Display::new(MockBus::default());
        d.init().unwrap();
        d.fill_and_present(Color::Off);
        d.bus_mut().calls.clear();

        d.frame_mut().set_pixel(0, 0, Color::On);
        d.flush();

        let calls = &d.bus().calls;
        // page 0 maps to 4, column 0 maps to 32
        assert_eq!(calls[0], commands(&[0xB4, 0x00, 0x12]));
        assert_eq!(calls[1], data(&[0x01]));
    }

    #[test]
    fn test_fill_presents_whole_frame() {
        let mut d = blank_display();
        d.fill_and_present(Color::On);

        let calls = &d.bus().calls;
        assert_eq!(calls.len(), 16);
        assert_eq!(calls[1], data(&[0xFF; 128]));
        assert_eq!(calls[14], commands(&[0xB7, 0x00, 0x10]));
        assert!(!d.frame().is_dirty());
    }

    #[test]
    fn test_flush_if_auto_respects_config() {
        let config = DisplayConfig {
            auto_flush: false,
            ..DisplayConfig::default()
        };
        let mut d: Display<Size128x64, _> = Display::with_config(MockBus::default(), config);
        d.init().unwrap();
        d.fill_and_present(Color::Off);
        d.bus_mut().calls.clear();

        d.frame_mut().set_pixel(1, 1, Color::On);
        d.flush_if_auto();
        assert!(d.bus().calls.is_empty());

        d.set_auto_flush(true);
        d.flush_if_auto();
        assert_eq!(d.bus().calls.len(), 2);
    }

    #[test]
    fn test_control_command_bytes() {
        let mut d = blank_display();
        d.set_contrast(0x7F).unwrap();
        d.set_inverted(true).unwrap();
        d.set_inverted(false).unwrap();
        d.set_display_on(false).unwrap();

        let calls = &d.bus().calls;
        assert_eq!(calls[0], commands(&[0x81, 0x7F]));
        assert_eq!(calls[1], commands(&[0xA7]));
        assert_eq!(calls[2], commands(&[0xA6]));
        assert_eq!(calls[3], commands(&[0xAE]));
    }
}
