//! Color types and the RGB565 panel encoding
//!
//! The SSD1351 drives each pixel from two RAM bytes holding a packed
//! 16-bit RGB565 value (5 red, 6 green, 5 blue bits). This module defines
//! the 24-bit [`Rgb`] triple and its conversion into that packing.
//!
//! ## Encoding
//!
//! | byte | bits                                      |
//! |------|-------------------------------------------|
//! | 0    | `r[7:3]` then `g[7:5]`                    |
//! | 1    | `g[4:2]` then `b[7:3]`                    |
//!
//! The conversion is lossy: the low 3 (red/blue) or 2 (green) bits of each
//! channel are discarded and cannot be recovered.
//!
//! ## Example
//!
//! ```
//! use ssd1351::Rgb;
//!
//! assert_eq!(Rgb::new(255, 83, 13).to_panel(), [0xFA, 0x81]);
//! assert_eq!(Rgb::from_hex("#FF530D"), Ok(Rgb::new(255, 83, 13)));
//! ```

/// A 24-bit RGB color triple
///
/// Channel values cover the full 0..=255 range; quantization to the
/// panel's 5/6/5-bit depth only happens in [`Rgb::to_panel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

/// White, the default foreground for drawing operations
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Black, the default background for drawing operations
pub const BLACK: Rgb = Rgb::new(0, 0, 0);

impl Rgb {
    /// Create a color from its channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into the panel's two-byte RGB565 encoding
    ///
    /// Byte 0 carries the red channel and the high green bits, byte 1 the
    /// low green bits and the blue channel, matching the controller's
    /// 65k-color RAM layout.
    pub const fn to_panel(self) -> [u8; 2] {
        [
            (self.r & 0xF8) | (self.g >> 5),
            ((self.g & 0x1C) << 3) | (self.b >> 3),
        ]
    }

    /// Parse a `RRGGBB` hex color, with or without a leading `#`
    ///
    /// Digits are case-insensitive. Anything other than exactly six hex
    /// digits (after the optional `#`) is rejected; there is no alpha
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColor`] if the string is malformed.
    ///
    /// ## Example
    ///
    /// ```
    /// use ssd1351::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("ff530d"), Ok(Rgb::new(255, 83, 13)));
    /// assert!(Rgb::from_hex("#zF530D").is_err());
    /// assert!(Rgb::from_hex("#FF530DA").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor);
        }
        let channel = |range: core::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidColor)
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Errors from color parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not a valid `#RRGGBB` / `RRGGBB` color
    InvalidColor,
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidColor => write!(f, "not a valid hexadecimal colour"),
        }
    }
}

impl core::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_panel_reference_colour() {
        assert_eq!(Rgb::new(255, 83, 13).to_panel(), [0xFA, 0x81]);
    }

    #[test]
    fn test_to_panel_black_and_white() {
        assert_eq!(BLACK.to_panel(), [0x00, 0x00]);
        assert_eq!(WHITE.to_panel(), [0xFF, 0xFF]);
    }

    #[test]
    fn test_to_panel_is_pure() {
        let c = Rgb::new(128, 128, 128);
        assert_eq!(c.to_panel(), c.to_panel());
    }

    #[test]
    fn test_to_panel_channel_isolation() {
        // Each channel lands in its own bit field.
        assert_eq!(Rgb::new(255, 0, 0).to_panel(), [0xF8, 0x00]);
        assert_eq!(Rgb::new(0, 255, 0).to_panel(), [0x07, 0xE0]);
        assert_eq!(Rgb::new(0, 0, 255).to_panel(), [0x00, 0x1F]);
    }

    #[test]
    fn test_from_hex_with_hash() {
        assert_eq!(Rgb::from_hex("#FF530D"), Ok(Rgb::new(255, 83, 13)));
    }

    #[test]
    fn test_from_hex_without_hash() {
        assert_eq!(Rgb::from_hex("FF530D"), Ok(Rgb::new(255, 83, 13)));
    }

    #[test]
    fn test_from_hex_is_case_insensitive() {
        assert_eq!(Rgb::from_hex("#ff530d"), Rgb::from_hex("#FF530D"));
    }

    #[test]
    fn test_from_hex_rejects_bad_digit() {
        assert_eq!(Rgb::from_hex("#zF530D"), Err(ColorError::InvalidColor));
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert_eq!(Rgb::from_hex("#FF530DA"), Err(ColorError::InvalidColor));
        assert_eq!(Rgb::from_hex("#FF530"), Err(ColorError::InvalidColor));
        assert_eq!(Rgb::from_hex(""), Err(ColorError::InvalidColor));
    }
}
