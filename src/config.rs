//! Display configuration types and builder

use crate::interface::DEFAULT_CLOCK_HZ;

/// Default per-channel contrast applied during initialization
pub const DEFAULT_CONTRAST: u8 = 0xFF;

/// Display configuration
///
/// Holds the configurable parameters for the SSD1351 controller. Use
/// [`Builder`] to create a Config; [`Config::default`] matches
/// `Builder::new().build()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Requested SPI clock in Hz
    ///
    /// Floored to the bus granularity when the bus is opened, see
    /// [`effective_clock_hz`](crate::interface::effective_clock_hz).
    pub clock_hz: u32,
    /// Per-channel contrast applied during initialization
    pub contrast: u8,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1351::Builder;
///
/// let config = Builder::new().clock_hz(12_000_000).contrast(0x80).build();
/// assert_eq!(config.contrast, 0x80);
/// ```
#[must_use]
pub struct Builder {
    /// Requested SPI clock in Hz
    clock_hz: u32,
    /// Per-channel contrast applied during initialization
    contrast: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            clock_hz: DEFAULT_CLOCK_HZ,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested SPI clock in Hz
    pub fn clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    /// Set the contrast applied to all three channels during
    /// initialization
    pub fn contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            clock_hz: self.clock_hz,
            contrast: self.contrast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.clock_hz, 19_660_800);
        assert_eq!(config.contrast, 0xFF);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Builder::new().clock_hz(12_000_000).contrast(0x32).build();
        assert_eq!(config.clock_hz, 12_000_000);
        assert_eq!(config.contrast, 0x32);
    }
}
