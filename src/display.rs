//! Core display operations
//!
//! [`Display`] owns the hardware interface, the framebuffer and the
//! configuration, and ties them together: power-up and power-down
//! sequencing, pushing the framebuffer to panel RAM, and the drawing
//! and text operations that render into the framebuffer.

use alloc::vec::Vec;

use crate::color::Rgb;
use crate::command::{
    COMMAND_LOCK_EXTENDED, COMMAND_LOCK_UNLOCK, DISPLAY_ALL_OFF, DISPLAY_OFF, DISPLAY_ON,
    FUNCTION_SELECT, NORMAL_DISPLAY, SET_CLOCK_DIVIDER, SET_COLUMN_ADDRESS, SET_COMMAND_LOCK,
    SET_CONTRAST, SET_DISPLAY_OFFSET, SET_GPIO, SET_MASTER_CONTRAST, SET_MUX_RATIO, SET_PRECHARGE,
    SET_PRECHARGE2, SET_REMAP, SET_ROW_ADDRESS, SET_SEGMENT_LOW_VOLTAGE, SET_START_LINE, SET_VCOMH,
    WRITE_RAM,
};
use crate::config::Config;
use crate::error::Error;
use crate::font::Font;
use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::interface::PanelInterface;
use crate::{font, raster};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the SSD1351
///
/// Drawing operations render into the in-memory framebuffer; nothing
/// reaches the panel until [`Display::update_screen`] pushes the whole
/// frame over the bus.
pub struct Display<I>
where
    I: PanelInterface,
{
    /// Hardware interface
    interface: I,
    /// Host-side pixel buffer
    framebuffer: FrameBuffer,
    /// Display configuration
    config: Config,
    /// Whether a refresh is currently being pushed to the panel
    refreshing: bool,
}

impl<I> Display<I>
where
    I: PanelInterface,
{
    /// Create a new Display instance with a zeroed framebuffer
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            framebuffer: FrameBuffer::new(),
            config,
            refreshing: false,
        }
    }

    /// Open the bus, reset the panel and run the initialization sequence
    ///
    /// Pulses the reset line, sends the power-up command sequence
    /// (unlock, panel timing and drive levels, contrast, display on)
    /// and finishes by zeroing the framebuffer so the first refresh
    /// shows a blank screen.
    ///
    /// # Errors
    ///
    /// Stops at the first command that fails and returns the interface
    /// error after logging it; the framebuffer is left untouched in
    /// that case.
    pub fn turn_on(&mut self) -> DisplayResult<I> {
        match self.power_up() {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("display power-up failed: {e:?}");
                Err(e)
            }
        }
    }

    fn power_up(&mut self) -> DisplayResult<I> {
        self.interface
            .open_bus(self.config.clock_hz)
            .map_err(Error::Interface)?;
        self.interface.reset_pulse().map_err(Error::Interface)?;

        // Unlock the command interface, then the extended command set.
        self.send(SET_COMMAND_LOCK, &[COMMAND_LOCK_UNLOCK])?;
        self.send(SET_COMMAND_LOCK, &[COMMAND_LOCK_EXTENDED])?;

        // Sleep while configuring.
        self.send(DISPLAY_OFF, &[])?;

        // Panel timing and geometry.
        self.send(SET_CLOCK_DIVIDER, &[0xF1])?;
        self.send(SET_MUX_RATIO, &[0x7F])?;
        self.send(SET_COLUMN_ADDRESS, &[0x00, 0x7F])?;
        self.send(SET_ROW_ADDRESS, &[0x00, 0x7F])?;
        self.send(SET_REMAP, &[0x74])?;
        self.send(SET_START_LINE, &[0x00])?;
        self.send(SET_DISPLAY_OFFSET, &[0x00])?;
        self.send(SET_GPIO, &[0x00])?;
        self.send(FUNCTION_SELECT, &[0x01])?;

        // Drive levels.
        self.send(SET_PRECHARGE, &[0x32])?;
        self.send(SET_SEGMENT_LOW_VOLTAGE, &[0xA0, 0xB5, 0x55])?;
        self.send(SET_VCOMH, &[0x05])?;
        self.send(SET_MASTER_CONTRAST, &[0x0F])?;
        self.send(SET_PRECHARGE2, &[0x01])?;
        let c = self.config.contrast;
        self.send(SET_CONTRAST, &[c, c, c])?;

        // Wake up.
        self.send(DISPLAY_ON, &[])?;
        self.send(NORMAL_DISPLAY, &[])?;
        self.send(SET_START_LINE, &[0x00])?;

        self.framebuffer.clear();
        Ok(())
    }

    /// Power the panel down and release the hardware
    ///
    /// Pulses the reset line, blanks the panel, closes the bus and
    /// releases the control lines.
    ///
    /// # Errors
    ///
    /// Returns the first interface error after logging it; later steps
    /// are skipped.
    pub fn turn_off(&mut self) -> DisplayResult<I> {
        match self.power_down() {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("display power-down failed: {e:?}");
                Err(e)
            }
        }
    }

    fn power_down(&mut self) -> DisplayResult<I> {
        self.interface.reset_pulse().map_err(Error::Interface)?;
        self.send(DISPLAY_ALL_OFF, &[])?;
        self.interface.close_bus().map_err(Error::Interface)?;
        self.interface.release_lines();
        Ok(())
    }

    /// Push the framebuffer to panel RAM
    ///
    /// Returns `Ok(true)` when a refresh was performed and `Ok(false)`
    /// when one was already in flight, in which case nothing is sent and
    /// the new frame goes out with the pending refresh.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the push fails partway; the
    /// in-flight marker is cleared either way so the next call can
    /// retry.
    pub fn update_screen(&mut self) -> core::result::Result<bool, Error<I>> {
        if self.refreshing {
            return Ok(false);
        }
        self.refreshing = true;
        let result = self.push_frame();
        self.refreshing = false;

        match result {
            Ok(()) => Ok(true),
            Err(e) => {
                log::error!("screen refresh failed: {e:?}");
                Err(e)
            }
        }
    }

    fn push_frame(&mut self) -> DisplayResult<I> {
        self.send(SET_COLUMN_ADDRESS, &[0x00, (WIDTH - 1) as u8])?;
        self.send(SET_ROW_ADDRESS, &[0x00, (HEIGHT - 1) as u8])?;
        self.interface
            .send_command(WRITE_RAM, self.framebuffer.raw())
            .map_err(Error::Interface)
    }

    /// Set the contrast for all three channels
    ///
    /// Values outside `0..=255` are clamped to the nearest bound and
    /// logged.
    ///
    /// # Errors
    ///
    /// Returns the interface error if the command fails.
    pub fn set_contrast(&mut self, value: i32) -> DisplayResult<I> {
        let clamped = if value < 0 {
            log::warn!("contrast {value} below range, using 0");
            0
        } else if value > 255 {
            log::warn!("contrast {value} above range, using 255");
            255
        } else {
            value as u8
        };
        self.send(SET_CONTRAST, &[clamped, clamped, clamped])
    }

    /// Scroll the panel vertically by setting the display start line
    ///
    /// # Errors
    ///
    /// Returns the interface error if the command fails.
    pub fn set_vertical_scroll(&mut self, row: u8) -> DisplayResult<I> {
        self.send(SET_START_LINE, &[row])
    }

    fn send(&mut self, opcode: u8, payload: &[u8]) -> DisplayResult<I> {
        self.interface
            .send_command(opcode, payload)
            .map_err(Error::Interface)
    }

    /// Zero the framebuffer and reset the text cursor
    ///
    /// Only affects host memory; call [`Self::update_screen`] to blank
    /// the panel.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.framebuffer.set_cursor(x, y);
    }

    /// Current text cursor position as (x, y)
    pub fn cursor(&self) -> (i32, i32) {
        self.framebuffer.cursor()
    }

    /// Draw a straight line, inclusive of both endpoints
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        raster::draw_line(&mut self.framebuffer, x0, y0, x1, y1, color);
    }

    /// Stroke the outline of a w x h rectangle at (x0, y0)
    pub fn draw_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: Rgb) {
        raster::draw_rect(&mut self.framebuffer, x0, y0, w, h, color);
    }

    /// Fill a w x h rectangle at (x0, y0)
    pub fn fill_rect(&mut self, x0: i32, y0: i32, w: i32, h: i32, color: Rgb) {
        raster::fill_rect(&mut self.framebuffer, x0, y0, w, h, color);
    }

    /// Stroke a circle of radius `r` centred on (xc, yc)
    pub fn draw_circle(&mut self, xc: i32, yc: i32, r: i32, color: Rgb) {
        raster::draw_circle(&mut self.framebuffer, xc, yc, r, color);
    }

    /// Fill a circle of radius `r` centred on (xc, yc)
    pub fn fill_circle(&mut self, xc: i32, yc: i32, r: i32, color: Rgb) {
        raster::fill_circle(&mut self.framebuffer, xc, yc, r, color);
    }

    /// Lay out text at the cursor, see
    /// [`font::write_string`](crate::font::write_string)
    pub fn write_string(
        &mut self,
        fnt: &Font<'_>,
        size: i32,
        text: &str,
        color: Rgb,
        wrap: bool,
        background: Rgb,
    ) {
        font::write_string(&mut self.framebuffer, fnt, size, text, color, wrap, background);
    }

    /// Replace the framebuffer with pre-rendered pixel data
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `bytes` is not a full frame.
    pub fn set_raw(&mut self, bytes: Vec<u8>) -> DisplayResult<I> {
        self.framebuffer.set_raw(bytes)?;
        Ok(())
    }

    /// Borrow the framebuffer's live pixel bytes
    pub fn raw(&self) -> &[u8] {
        self.framebuffer.raw()
    }

    /// Borrow the framebuffer
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Borrow the framebuffer mutably
    ///
    /// This is the integration point for external renderers, including
    /// the embedded-graphics `DrawTarget` implementation behind the
    /// `graphics` feature.
    pub fn framebuffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.framebuffer
    }
}
