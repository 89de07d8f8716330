//! SSD1351 command definitions
//!
//! This module defines the command bytes used to control the SSD1351
//! OLED display controller. Commands are sent over SPI with the DC pin
//! low for the opcode byte and high for any payload bytes.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Set DC low (command mode)
//! 2. Send the opcode byte
//! 3. Set DC high (data mode)
//! 4. Send payload bytes (if any), chunked to the transport limit

// Lock and power commands

/// Command lock command (0xFD)
///
/// Payload 0x12 unlocks the command interface; payload 0xB1 additionally
/// makes commands 0xA2, 0xB1, 0xB3, 0xBB, 0xBE and 0xC1 accessible.
pub const SET_COMMAND_LOCK: u8 = 0xFD;

/// Unlock payload for [`SET_COMMAND_LOCK`]
pub const COMMAND_LOCK_UNLOCK: u8 = 0x12;

/// Extended-command payload for [`SET_COMMAND_LOCK`]
pub const COMMAND_LOCK_EXTENDED: u8 = 0xB1;

/// Display off (sleep mode on) command (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (sleep mode off) command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Display all off command (0xA4)
///
/// Blanks the panel without clearing RAM; used during power-down.
pub const DISPLAY_ALL_OFF: u8 = 0xA4;

/// Normal display mode command (0xA6)
///
/// Shows RAM contents without inversion.
pub const NORMAL_DISPLAY: u8 = 0xA6;

// Addressing commands

/// Set column address range command (0x15)
///
/// Requires 2 bytes: [start, end], each in 0..=127.
pub const SET_COLUMN_ADDRESS: u8 = 0x15;

/// Set row address range command (0x75)
///
/// Requires 2 bytes: [start, end], each in 0..=127.
pub const SET_ROW_ADDRESS: u8 = 0x75;

/// Write RAM command (0x5C)
///
/// Payload bytes stream into display RAM at the configured
/// column/row window, two bytes per pixel (RGB565).
pub const WRITE_RAM: u8 = 0x5C;

// Panel configuration commands

/// Segment remap / color depth command (0xA0)
///
/// Requires 1 byte. 0x74 selects 65k color depth with column address
/// remapping (without it the image is mirrored).
pub const SET_REMAP: u8 = 0xA0;

/// Set display start line command (0xA1)
///
/// Requires 1 byte: the first RAM row driven to the top of the panel.
/// Also serves as the vertical scroll control.
pub const SET_START_LINE: u8 = 0xA1;

/// Set display offset command (0xA2)
///
/// Requires 1 byte.
pub const SET_DISPLAY_OFFSET: u8 = 0xA2;

/// Front clock divider / oscillator frequency command (0xB3)
///
/// Requires 1 byte.
pub const SET_CLOCK_DIVIDER: u8 = 0xB3;

/// Multiplex ratio command (0xCA)
///
/// Requires 1 byte: number of driven rows minus one.
pub const SET_MUX_RATIO: u8 = 0xCA;

/// GPIO configuration command (0xB5)
///
/// Requires 1 byte.
pub const SET_GPIO: u8 = 0xB5;

/// Function select command (0xAB)
///
/// Requires 1 byte. 0x01 enables the internal voltage regulator
/// (diode drop).
pub const FUNCTION_SELECT: u8 = 0xAB;

// Drive level commands

/// Phase 1/2 precharge period command (0xB1)
///
/// Requires 1 byte. Only accessible in the extended-command lock state.
pub const SET_PRECHARGE: u8 = 0xB1;

/// Second precharge period command (0xB6)
///
/// Requires 1 byte.
pub const SET_PRECHARGE2: u8 = 0xB6;

/// Set segment low voltage command (0xB4)
///
/// Requires 3 bytes: [0xA0, 0xB5, 0x55] selects the external VSL.
pub const SET_SEGMENT_LOW_VOLTAGE: u8 = 0xB4;

/// VCOMH voltage command (0xBE)
///
/// Requires 1 byte.
pub const SET_VCOMH: u8 = 0xBE;

/// Master contrast current command (0xC7)
///
/// Requires 1 byte in 0..=15.
pub const SET_MASTER_CONTRAST: u8 = 0xC7;

/// Per-channel contrast command (0xC1)
///
/// Requires 3 bytes: contrast for the A (red), B (green) and C (blue)
/// segment groups.
pub const SET_CONTRAST: u8 = 0xC1;
