//! SSD1351 OLED Display Driver
//!
//! A driver for the SSD1351 color OLED controller driving 128x128 RGB
//! panels over SPI.
//!
//! ## Features
//!
//! - `no_std` compatible (requires `alloc`)
//! - `embedded-hal` v1.0 GPIO support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - In-memory framebuffer with drawing primitives and bitmap text
//! - Full-frame refresh with chunked RAM writes
//! - Built-in 5x7 ASCII font
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ssd1351::{Builder, Display, Interface, OutputLine, Rgb, Transport, font5x7::FONT_5X7};
//!
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
//! # let spi = MockSpi;
//! # let dc = OutputLine(MockPin);
//! # let rst = OutputLine(MockPin);
//! let interface = Interface::new(spi, dc, rst);
//! let config = Builder::new().contrast(0xFF).build();
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.turn_on();
//!
//! display.fill_rect(10, 10, 40, 20, Rgb::from_hex("#FF530D").unwrap());
//! display.set_cursor(0, 40);
//! display.write_string(&FONT_5X7, 1, "Hello", Rgb::new(255, 255, 255), true, Rgb::new(0, 0, 0));
//! let _ = display.update_screen();
//! ```

#![no_std]

extern crate alloc;

/// Color types and the RGB565 panel encoding
pub mod color;
/// SSD1351 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Fixed-width bitmap font text layout
pub mod font;
/// Built-in 5x7 ASCII font
pub mod font5x7;
/// In-memory pixel buffer for the 128x128 panel
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// 2-D drawing primitives over the framebuffer
pub mod raster;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::{BLACK, ColorError, Rgb, WHITE};
pub use config::{Builder, Config, DEFAULT_CONTRAST};
pub use display::Display;
pub use error::Error;
pub use font::Font;
pub use framebuffer::{BUFFER_SIZE, FrameBuffer, HEIGHT, SizeMismatch, WIDTH};
pub use interface::{
    CLOCK_STEP_HZ, ControlLine, DEFAULT_CLOCK_HZ, Interface, InterfaceError, MAX_TRANSFER_SIZE,
    OutputLine, PanelInterface, Transport,
};
