//! Hardware interface abstraction
//!
//! This module provides the [`PanelInterface`] trait and the
//! [`Interface`] struct for communicating with the SSD1351 controller
//! over SPI.
//!
//! ## Hardware Requirements
//!
//! The SSD1351 requires:
//! - SPI bus (MOSI + SCK)
//! - 2 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!
//! ## Command framing
//!
//! Every controller command is one opcode byte sent with DC low,
//! followed by its payload bytes sent with DC high. Payloads larger
//! than [`MAX_TRANSFER_SIZE`] are split into sequential bus writes so a
//! full-frame RAM write stays within common SPI driver limits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1351::{Interface, OutputLine, PanelInterface, Transport};
//! # struct MockSpi;
//! # #[derive(Debug)]
//! # struct MockSpiError;
//! # impl Transport for MockSpi {
//! #     type Error = MockSpiError;
//! #     fn open(&mut self, _clock_hz: u32) -> Result<(), Self::Error> { Ok(()) }
//! #     fn is_open(&self) -> bool { true }
//! #     fn transfer(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn close(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = core::convert::Infallible; }
//! # impl embedded_hal::digital::OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = Interface::new(MockSpi, OutputLine(MockPin), OutputLine(MockPin));
//!
//! // Hardware reset, then a bare command and one with payload
//! let _ = interface.reset_pulse();
//! let _ = interface.send_command(0xAF, &[]);
//! let _ = interface.send_command(0x15, &[0x00, 0x7F]);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Largest single bus write issued by [`Interface::send_command`]
///
/// Command payloads above this size are split into sequential writes.
pub const MAX_TRANSFER_SIZE: usize = 4096;

/// Default SPI clock in Hz (300 * 65,536)
pub const DEFAULT_CLOCK_HZ: u32 = 19_660_800;

/// Granularity the SPI clock is rounded to, in Hz
pub const CLOCK_STEP_HZ: u32 = 65_536;

/// Round a requested SPI clock down to the bus granularity
///
/// Rates are floored to a multiple of [`CLOCK_STEP_HZ`] so the bus is
/// never driven faster than asked for. Requests below one step come out
/// as 0 and are rejected by the transport.
pub const fn effective_clock_hz(requested: u32) -> u32 {
    requested / CLOCK_STEP_HZ * CLOCK_STEP_HZ
}

/// A byte-oriented bus with explicit open/close lifecycle
///
/// This is the write path to the controller, typically a SPI device
/// node. The bus starts closed; [`Interface::open_bus`] opens it at the
/// configured clock before the first command and
/// [`Interface::close_bus`] returns it to the closed state during
/// power-down.
pub trait Transport {
    /// Error type for bus operations
    type Error: Debug;

    /// Open the bus at the given clock rate in Hz
    ///
    /// # Errors
    ///
    /// Returns an error if the bus cannot be acquired or the rate is
    /// unsupported.
    fn open(&mut self, clock_hz: u32) -> InterfaceResult<(), Self::Error>;

    /// Whether the bus is currently open
    fn is_open(&self) -> bool;

    /// Write bytes to the bus
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn transfer(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Close the bus
    ///
    /// # Errors
    ///
    /// Returns an error if the bus cannot be released cleanly.
    fn close(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// A digital output line with an optional release step
///
/// `release` only matters on hosts where the line is a claimed kernel
/// resource (sysfs/cdev GPIO) and defaults to a no-op. Any embedded-hal
/// GPIO can be used through the [`OutputLine`] adapter.
pub trait ControlLine {
    /// Error type for line operations
    type Error: Debug;

    /// Drive the line high (`true`) or low (`false`)
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be driven.
    fn write_level(&mut self, high: bool) -> InterfaceResult<(), Self::Error>;

    /// Return the line to the platform
    ///
    /// Called once during power-down, after the final level write.
    fn release(&mut self) {}
}

/// [`ControlLine`] adapter for any embedded-hal [`OutputPin`]
///
/// HAL pins are plain outputs with nothing to release, so `release`
/// keeps its no-op default.
pub struct OutputLine<P>(pub P);

impl<P> ControlLine for OutputLine<P>
where
    P: OutputPin,
    P::Error: Debug,
{
    type Error = P::Error;

    fn write_level(&mut self, high: bool) -> InterfaceResult<(), Self::Error> {
        if high { self.0.set_high() } else { self.0.set_low() }
    }
}

/// Errors that can occur at the interface level
///
/// Generic over transport and line error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, LineErr> {
    /// Bus communication error
    Bus(BusErr),
    /// Control line error
    Line(LineErr),
}

impl<BusErr: Debug, LineErr: Debug> core::fmt::Display for InterfaceError<BusErr, LineErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Line(e) => write!(f, "Line error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, LineErr: Debug> core::error::Error for InterfaceError<BusErr, LineErr> {}

/// Trait for hardware interface to the SSD1351 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// bus and GPIO implementation.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a 4-wire interface without a DC line, or
/// additional CS control), implement this trait on your own type.
pub trait PanelInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Open the underlying bus, if it is not open already
    ///
    /// The requested clock is floored to a multiple of
    /// [`CLOCK_STEP_HZ`]. Opening an already-open bus is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus cannot be opened.
    fn open_bus(&mut self, clock_hz: u32) -> InterfaceResult<(), Self::Error>;

    /// Send one command: the opcode with DC low, then the payload with
    /// DC high
    ///
    /// Payloads longer than [`MAX_TRANSFER_SIZE`] are written in
    /// sequential chunks. An empty payload still toggles DC back high
    /// so the bus is left in data mode.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or a line write fails; the
    /// command may then have been partially transferred.
    fn send_command(&mut self, opcode: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform a hardware reset pulse: RST low, then high
    ///
    /// # Errors
    ///
    /// Returns an error if the reset line cannot be driven.
    fn reset_pulse(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Close the underlying bus
    ///
    /// # Errors
    ///
    /// Returns an error if the bus cannot be released cleanly.
    fn close_bus(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Release the control lines back to the platform
    fn release_lines(&mut self);
}

/// Hardware interface implementation for the SSD1351
///
/// Implements [`PanelInterface`] over a [`Transport`] bus and two
/// [`ControlLine`]s; embedded-hal [`OutputPin`]s plug in via
/// [`OutputLine`].
///
/// ## Type Parameters
///
/// * `SPI` - bus implementing [`Transport`]
/// * `DC` - Data/Command line implementing [`ControlLine`]
/// * `RST` - Reset line implementing [`ControlLine`]
pub struct Interface<SPI, DC, RST> {
    /// SPI bus for communication
    spi: SPI,
    /// Data/Command select line (low=command, high=data)
    dc: DC,
    /// Reset line (active low)
    rst: RST,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: Transport,
    DC: ControlLine,
    RST: ControlLine,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - bus (must implement [`Transport`])
    /// * `dc` - Data/Command line (output, low=command, high=data)
    /// * `rst` - Reset line (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    #[cfg(test)]
    pub(crate) fn bus(&self) -> &SPI {
        &self.spi
    }
}

impl<SPI, DC, RST, LineErr> PanelInterface for Interface<SPI, DC, RST>
where
    SPI: Transport,
    DC: ControlLine<Error = LineErr>,
    RST: ControlLine<Error = LineErr>,
    LineErr: Debug,
{
    type Error = InterfaceError<SPI::Error, LineErr>;

    fn open_bus(&mut self, clock_hz: u32) -> InterfaceResult<(), Self::Error> {
        if self.spi.is_open() {
            return Ok(());
        }
        let effective = effective_clock_hz(clock_hz);
        log::debug!("opening bus at {effective} Hz (requested {clock_hz})");
        self.spi.open(effective).map_err(InterfaceError::Bus)
    }

    fn send_command(&mut self, opcode: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.write_level(false).map_err(InterfaceError::Line)?;
        self.spi.transfer(&[opcode]).map_err(InterfaceError::Bus)?;
        self.dc.write_level(true).map_err(InterfaceError::Line)?;
        for chunk in payload.chunks(MAX_TRANSFER_SIZE) {
            self.spi.transfer(chunk).map_err(InterfaceError::Bus)?;
        }
        Ok(())
    }

    fn reset_pulse(&mut self) -> InterfaceResult<(), Self::Error> {
        self.rst.write_level(false).map_err(InterfaceError::Line)?;
        self.rst.write_level(true).map_err(InterfaceError::Line)
    }

    fn close_bus(&mut self) -> InterfaceResult<(), Self::Error> {
        self.spi.close().map_err(InterfaceError::Bus)
    }

    fn release_lines(&mut self) {
        self.dc.release();
        self.rst.release();
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Recording test doubles shared by the interface and display tests

    use super::{InterfaceResult, PanelInterface, Transport};
    use alloc::vec::Vec;

    /// Injected failure marker
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MockError;

    /// Transport that records every call and can fail on demand
    #[derive(Debug, Default)]
    pub struct MockTransport {
        pub open: bool,
        pub opened_at: Vec<u32>,
        pub writes: Vec<Vec<u8>>,
        pub closes: u32,
        /// Fail the nth `transfer` call (0-based) and every later one
        pub fail_from: Option<usize>,
    }

    impl Transport for MockTransport {
        type Error = MockError;

        fn open(&mut self, clock_hz: u32) -> InterfaceResult<(), Self::Error> {
            self.open = true;
            self.opened_at.push(clock_hz);
            Ok(())
        }

        fn is_open(&self) -> bool {
            self.open
        }

        fn transfer(&mut self, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
            if self.fail_from.is_some_and(|n| self.writes.len() >= n) {
                return Err(MockError);
            }
            self.writes.push(bytes.to_vec());
            Ok(())
        }

        fn close(&mut self) -> InterfaceResult<(), Self::Error> {
            self.open = false;
            self.closes += 1;
            Ok(())
        }
    }

    /// Control line that records levels and release
    #[derive(Debug, Default)]
    pub struct MockLine {
        pub levels: Vec<bool>,
        pub released: bool,
    }

    impl super::ControlLine for MockLine {
        type Error = MockError;

        fn write_level(&mut self, high: bool) -> InterfaceResult<(), Self::Error> {
            self.levels.push(high);
            Ok(())
        }

        fn release(&mut self) {
            self.released = true;
        }
    }

    /// [`PanelInterface`] double that records full commands
    ///
    /// Used by the display tests, which care about command content
    /// rather than bus framing.
    #[derive(Debug, Default)]
    pub struct MockInterface {
        pub commands: Vec<(u8, Vec<u8>)>,
        pub bus_open: bool,
        pub opened_at: Vec<u32>,
        pub resets: u32,
        pub closes: u32,
        pub released: bool,
        /// Fail the nth `send_command` call (0-based) and every later one
        pub fail_from: Option<usize>,
    }

    impl PanelInterface for MockInterface {
        type Error = MockError;

        fn open_bus(&mut self, clock_hz: u32) -> InterfaceResult<(), Self::Error> {
            if !self.bus_open {
                self.bus_open = true;
                self.opened_at.push(clock_hz);
            }
            Ok(())
        }

        fn send_command(&mut self, opcode: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error> {
            if self.fail_from.is_some_and(|n| self.commands.len() >= n) {
                return Err(MockError);
            }
            self.commands.push((opcode, payload.to_vec()));
            Ok(())
        }

        fn reset_pulse(&mut self) -> InterfaceResult<(), Self::Error> {
            self.resets += 1;
            Ok(())
        }

        fn close_bus(&mut self) -> InterfaceResult<(), Self::Error> {
            self.bus_open = false;
            self.closes += 1;
            Ok(())
        }

        fn release_lines(&mut self) {
            self.released = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::{MockLine, MockTransport};
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_effective_clock_floors_to_step() {
        assert_eq!(effective_clock_hz(19_660_800), 19_660_800);
        assert_eq!(effective_clock_hz(19_660_801), 19_660_800);
        assert_eq!(effective_clock_hz(20_000_000), 19_988_480);
        assert_eq!(effective_clock_hz(65_535), 0);
    }

    #[test]
    fn test_default_clock_is_aligned() {
        assert_eq!(DEFAULT_CLOCK_HZ % CLOCK_STEP_HZ, 0);
    }

    #[test]
    fn test_send_command_frames_opcode_and_payload() {
        let mut interface = Interface::new(MockTransport::default(), MockLine::default(), MockLine::default());
        interface.send_command(0x15, &[0x00, 0x7F]).unwrap();

        assert_eq!(interface.spi.writes, vec![vec![0x15], vec![0x00, 0x7F]]);
        // DC drops for the opcode and returns high for the payload.
        assert_eq!(interface.dc.levels, vec![false, true]);
        assert!(interface.rst.levels.is_empty());
    }

    #[test]
    fn test_send_command_without_payload_still_restores_dc() {
        let mut interface = Interface::new(MockTransport::default(), MockLine::default(), MockLine::default());
        interface.send_command(0xAF, &[]).unwrap();

        assert_eq!(interface.spi.writes, vec![vec![0xAF]]);
        assert_eq!(interface.dc.levels, vec![false, true]);
    }

    #[test]
    fn test_send_command_chunks_large_payload() {
        // A full frame (32,768 bytes) must go out as 8 full chunks after
        // the opcode write.
        let payload = vec![0xAB; 32_768];
        let mut interface = Interface::new(MockTransport::default(), MockLine::default(), MockLine::default());
        interface.send_command(0x5C, &payload).unwrap();

        assert_eq!(interface.spi.writes.len(), 9);
        assert_eq!(interface.spi.writes[0], vec![0x5C]);
        for chunk in &interface.spi.writes[1..] {
            assert_eq!(chunk.len(), MAX_TRANSFER_SIZE);
        }
    }

    #[test]
    fn test_send_command_chunks_ragged_tail() {
        let payload = vec![0x00; MAX_TRANSFER_SIZE + 10];
        let mut interface = Interface::new(MockTransport::default(), MockLine::default(), MockLine::default());
        interface.send_command(0x5C, &payload).unwrap();

        assert_eq!(interface.spi.writes.len(), 3);
        assert_eq!(interface.spi.writes[1].len(), MAX_TRANSFER_SIZE);
        assert_eq!(interface.spi.writes[2].len(), 10);
    }

    #[test]
    fn test_send_command_stops_at_first_bus_error() {
        let spi = MockTransport {
            fail_from: Some(2),
            ..MockTransport::default()
        };
        let payload = vec![0x00; MAX_TRANSFER_SIZE * 3];
        let mut interface = Interface::new(spi, MockLine::default(), MockLine::default());

        let result = interface.send_command(0x5C, &payload);
        assert!(matches!(result, Err(InterfaceError::Bus(_))));
        // Opcode plus one chunk made it out before the failure.
        assert_eq!(interface.spi.writes.len(), 2);
    }

    #[test]
    fn test_open_bus_floors_clock_and_is_idempotent() {
        let mut interface = Interface::new(MockTransport::default(), MockLine::default(), MockLine::default());
        interface.open_bus(20_000_000).unwrap();
        interface.open_bus(5_000_000).unwrap();

        // The second open is a no-op: one open call, floored rate.
        assert_eq!(interface.spi.opened_at, vec![19_988_480]);
    }

    #[test]
    fn test_reset_pulse_levels() {
        let mut interface = Interface::new(MockTransport::default(), MockLine::default(), MockLine::default());
        interface.reset_pulse().unwrap();
        assert_eq!(interface.rst.levels, vec![false, true]);
        assert!(interface.dc.levels.is_empty());
    }

    #[test]
    fn test_close_and_release() {
        let mut interface = Interface::new(MockTransport::default(), MockLine::default(), MockLine::default());
        interface.open_bus(DEFAULT_CLOCK_HZ).unwrap();
        interface.close_bus().unwrap();
        interface.release_lines();

        assert!(!interface.spi.is_open());
        assert_eq!(interface.spi.closes, 1);
        assert!(interface.dc.released);
        assert!(interface.rst.released);
    }

    #[test]
    fn test_output_line_adapts_hal_pins() {
        struct Pin(Vec<bool>);
        impl embedded_hal::digital::ErrorType for Pin {
            type Error = core::convert::Infallible;
        }
        impl embedded_hal::digital::OutputPin for Pin {
            fn set_low(&mut self) -> Result<(), Self::Error> {
                self.0.push(false);
                Ok(())
            }
            fn set_high(&mut self) -> Result<(), Self::Error> {
                self.0.push(true);
                Ok(())
            }
        }

        let mut line = OutputLine(Pin(Vec::new()));
        line.write_level(true).unwrap();
        line.write_level(false).unwrap();
        line.release();
        assert_eq!(line.0.0, vec![true, false]);
    }
}
