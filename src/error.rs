//! Error types for the driver
//!
//! This module defines the runtime error type for display operations
//! ([`Error`]). Lower layers carry their own errors:
//! [`InterfaceError`](crate::interface::InterfaceError) for hardware
//! communication, [`SizeMismatch`](crate::framebuffer::SizeMismatch)
//! for raw buffer replacement and
//! [`ColorError`](crate::color::ColorError) for color parsing.

use crate::framebuffer::SizeMismatch;
use crate::interface::PanelInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware
/// error.
pub enum Error<I: PanelInterface> {
    /// Interface error (bus or control line)
    ///
    /// Wraps the underlying hardware error from the [`PanelInterface`]
    /// implementation.
    Interface(I::Error),
    /// Raw pixel buffer of the wrong length
    BufferSize(SizeMismatch),
}

// Implemented by hand rather than derived: the derive would demand
// `I: Debug`, but only `I::Error` needs to be printable.
impl<I: PanelInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::BufferSize(e) => f.debug_tuple("BufferSize").field(e).finish(),
        }
    }
}

impl<I: PanelInterface> From<SizeMismatch> for Error<I> {
    fn from(err: SizeMismatch) -> Self {
        Self::BufferSize(err)
    }
}

impl<I: PanelInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferSize(e) => write!(f, "{e}"),
        }
    }
}

impl<I: PanelInterface> core::error::Error for Error<I> {}
