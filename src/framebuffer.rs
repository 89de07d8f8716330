//! In-memory pixel buffer for the 128x128 panel
//!
//! The SSD1351 RAM holds two bytes per pixel (RGB565, see
//! [`crate::color`]), row-major. [`FrameBuffer`] mirrors that layout in
//! host memory so drawing happens locally and the whole buffer is pushed
//! to the panel in one refresh.
//!
//! The buffer also carries the text cursor used by
//! [`crate::font::write_string`]; the cursor is deliberately not
//! bounds-checked, matching the drawing primitives' unguarded coordinate
//! preconditions.

use alloc::vec;
use alloc::vec::Vec;

/// Panel width in pixels
pub const WIDTH: u32 = 128;

/// Panel height in pixels
pub const HEIGHT: u32 = 128;

/// Size of the pixel buffer in bytes (two bytes per pixel)
pub const BUFFER_SIZE: usize = (WIDTH * HEIGHT * 2) as usize;

/// Raw buffer of a different length than [`BUFFER_SIZE`] was supplied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeMismatch {
    /// Required buffer length in bytes
    pub expected: usize,
    /// Supplied buffer length in bytes
    pub provided: usize,
}

impl core::fmt::Display for SizeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "the size of the raw buffer is incorrect: expected length {}, current length {}",
            self.expected, self.provided
        )
    }
}

impl core::error::Error for SizeMismatch {}

/// Host-side copy of the panel RAM plus the text cursor
///
/// Pixel (x, y) lives at byte offset `(x + y * WIDTH) * 2`. The buffer
/// length is always exactly [`BUFFER_SIZE`]; [`FrameBuffer::set_raw`]
/// enforces it and [`FrameBuffer::clear`] restores it.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    data: Vec<u8>,
    cursor_x: i32,
    cursor_y: i32,
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a zeroed buffer with the cursor at the origin
    pub fn new() -> Self {
        Self {
            data: vec![0; BUFFER_SIZE],
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    /// Zero every pixel and reset the cursor to (0, 0)
    ///
    /// Also restores the buffer length if an earlier [`Self::set_raw`]
    /// left it at a different size (it cannot, but `clear` does not rely
    /// on that invariant).
    pub fn clear(&mut self) {
        if self.data.len() != BUFFER_SIZE {
            self.data = vec![0; BUFFER_SIZE];
        } else {
            self.data.fill(0);
        }
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    /// Replace the buffer with externally produced pixel data
    ///
    /// This is the entry point for pre-rendered RGB565 content (image
    /// decoders, compositors). The buffer is taken over as-is, without
    /// copying.
    ///
    /// # Errors
    ///
    /// Returns [`SizeMismatch`] if `bytes` is not exactly
    /// [`BUFFER_SIZE`] bytes long; the current contents are kept.
    pub fn set_raw(&mut self, bytes: Vec<u8>) -> Result<(), SizeMismatch> {
        if bytes.len() != BUFFER_SIZE {
            return Err(SizeMismatch {
                expected: BUFFER_SIZE,
                provided: bytes.len(),
            });
        }
        self.data = bytes;
        Ok(())
    }

    /// Borrow the live pixel bytes
    ///
    /// This is the buffer itself, not a copy; callers must not hold on to
    /// derived data across a concurrent refresh.
    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the live pixel bytes mutably
    pub fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Write one pixel's two panel bytes
    ///
    /// No bounds check is applied to the coordinates: the caller is
    /// expected to keep `0 <= x < WIDTH` and `0 <= y < HEIGHT`. An x
    /// outside the row simply aliases into the neighbouring rows through
    /// the flat index arithmetic; writes whose computed offset falls
    /// outside the buffer are dropped.
    pub fn write_pixel(&mut self, x: i32, y: i32, px: [u8; 2]) {
        let offset = (x + y * WIDTH as i32) * 2;
        if offset < 0 {
            return;
        }
        let offset = offset as usize;
        if let Some(slot) = self.data.get_mut(offset..offset + 2) {
            slot.copy_from_slice(&px);
        }
    }

    /// Move the text cursor
    ///
    /// Coordinates are not validated; drawing from an out-of-range cursor
    /// follows the same index arithmetic as [`Self::write_pixel`].
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// Current text cursor position as (x, y)
    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor_x, self.cursor_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed_and_sized() {
        let fb = FrameBuffer::new();
        assert_eq!(fb.raw().len(), 32768);
        assert!(fb.raw().iter().all(|&b| b == 0));
        assert_eq!(fb.cursor(), (0, 0));
    }

    #[test]
    fn test_clear_resets_contents_and_cursor() {
        let mut fb = FrameBuffer::new();
        let bytes: Vec<u8> = (0..BUFFER_SIZE).map(|i| (i % 256) as u8).collect();
        fb.set_raw(bytes).unwrap();
        fb.set_cursor(33, 78);

        fb.clear();

        assert_eq!(fb.raw().len(), BUFFER_SIZE);
        assert!(fb.raw().iter().all(|&b| b == 0));
        assert_eq!(fb.cursor(), (0, 0));
    }

    #[test]
    fn test_set_raw_rejects_wrong_length() {
        let mut fb = FrameBuffer::new();
        let result = fb.set_raw(vec![0xFF; 200 * 200 * 2]);
        assert_eq!(
            result,
            Err(SizeMismatch {
                expected: 32768,
                provided: 80000
            })
        );
        // Contents untouched on failure.
        assert!(fb.raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_raw_takes_over_buffer() {
        let mut fb = FrameBuffer::new();
        let bytes: Vec<u8> = (0..BUFFER_SIZE).map(|i| (i % 256) as u8).collect();
        fb.set_raw(bytes).unwrap();
        assert_eq!(fb.raw()[5], 5);
        assert_eq!(fb.raw()[255], 255);
        assert_eq!(fb.raw()[256], 0);
    }

    #[test]
    fn test_write_pixel_row_major_layout() {
        let mut fb = FrameBuffer::new();
        fb.write_pixel(3, 2, [0xAB, 0xCD]);
        let offset = (3 + 2 * 128) * 2;
        assert_eq!(fb.raw()[offset], 0xAB);
        assert_eq!(fb.raw()[offset + 1], 0xCD);
    }

    #[test]
    fn test_write_pixel_x_overflow_aliases_next_row() {
        // Unguarded precondition: x = 130 lands two pixels into row y+1.
        let mut fb = FrameBuffer::new();
        fb.write_pixel(130, 0, [0x12, 0x34]);
        // (130 + 0 * 128) * 2 = 260 = start of row 1 + pixel 2
        assert_eq!(fb.raw()[260], 0x12);
        assert_eq!(fb.raw()[261], 0x34);
    }

    #[test]
    fn test_write_pixel_out_of_buffer_is_dropped() {
        let mut fb = FrameBuffer::new();
        fb.write_pixel(0, 128, [0xFF, 0xFF]);
        fb.write_pixel(-1, 0, [0xFF, 0xFF]);
        assert!(fb.raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_cursor_round_trip() {
        let mut fb = FrameBuffer::new();
        fb.set_cursor(33, 78);
        assert_eq!(fb.cursor(), (33, 78));
    }
}
