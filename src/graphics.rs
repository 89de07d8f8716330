//! Graphics support via embedded-graphics
//!
//! Implements [`DrawTarget`] for [`FrameBuffer`], so the full
//! embedded-graphics primitive, image and text stack can render
//! straight into the display's pixel buffer in [`Rgb565`], the panel's
//! native color format.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use ssd1351::FrameBuffer;
//!
//! let mut fb = FrameBuffer::new();
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut fb)
//!     .unwrap();
//! ```
//!
//! With a full [`Display`](crate::display::Display), draw into
//! [`framebuffer_mut`](crate::display::Display::framebuffer_mut) and
//! push the result with
//! [`update_screen`](crate::display::Display::update_screen).

use core::convert::Infallible;
use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::Rgb565,
    pixelcolor::raw::{RawData, RawU16},
};

use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH, HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // DrawTarget requires out-of-bounds pixels to be discarded,
            // so clip here rather than relying on the buffer's flat
            // index arithmetic.
            if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
                continue;
            }

            // The panel's two RAM bytes are the big-endian halves of
            // the packed RGB565 word.
            let raw = RawU16::from(color).into_inner();
            self.write_pixel(x, y, raw.to_be_bytes());
        }

        Ok(())
    }
}
