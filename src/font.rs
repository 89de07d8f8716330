//! Fixed-width bitmap font text layout
//!
//! Glyphs are stored column-major: each character occupies `width`
//! consecutive bytes of [`Font::data`], one byte per pixel column, bit 0
//! of each byte being the top row. [`write_string`] lays text out at the
//! framebuffer cursor, advancing it glyph by glyph, with optional word
//! and letter wrapping.
//!
//! A ready-made 5x7 ASCII font is available as
//! [`FONT_5X7`](crate::font5x7::FONT_5X7).

use alloc::borrow::Cow;
use alloc::format;
use alloc::vec::Vec;

use crate::color::Rgb;
use crate::framebuffer::{FrameBuffer, WIDTH};

/// Vertical gap in pixels between wrapped lines
pub const LINE_SPACING: i32 = 1;

/// Horizontal gap in pixels between glyphs
pub const LETTER_SPACING: i32 = 1;

/// A fixed-width bitmap font
///
/// `lookup` lists the supported characters in glyph order; the glyph for
/// `lookup[i]` is `data[i * width .. (i + 1) * width]`.
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    /// Supported characters, in the order their glyphs appear in `data`
    pub lookup: &'a str,
    /// Column-run glyph bytes, `width` bytes per character
    pub data: &'a [u8],
    /// Glyph width in pixel columns
    pub width: u32,
    /// Glyph height in pixel rows, drives the line advance
    ///
    /// Column bytes always paint all 8 bits; a shorter font's unused
    /// top bits render as background rows below the glyph.
    pub height: u32,
}

/// Look up the column bytes for one character
///
/// Characters absent from `font.lookup` yield the empty slice: the glyph
/// draws as nothing while layout still advances the cursor, mirroring
/// the undefined-lookup behaviour of column-run fonts rather than
/// substituting a fallback glyph.
pub fn glyph_bytes<'a>(font: &Font<'a>, ch: char) -> &'a [u8] {
    let width = font.width as usize;
    match font.lookup.chars().position(|c| c == ch) {
        Some(pos) => &font.data[pos * width..pos * width + width],
        None => &[],
    }
}

/// Bits of one glyph column, top row first
fn column_bits(byte: u8) -> impl Iterator<Item = bool> {
    (0..8).map(move |row| (byte >> row) & 1 == 1)
}

/// Draw one glyph at the framebuffer cursor
///
/// All 8 bits of each column byte are painted: set bits in `color`,
/// clear bits in `background`, regardless of the font's nominal height.
/// At `size` > 1 each bit covers a size x size pixel block. The cursor
/// itself is not moved; [`write_string`] owns the advance.
pub fn draw_glyph(fb: &mut FrameBuffer, glyph: &[u8], size: i32, color: Rgb, background: Rgb) {
    let fg = color.to_panel();
    let bg = background.to_panel();
    let (cx, cy) = fb.cursor();

    for (col, &byte) in glyph.iter().enumerate() {
        for (row, on) in column_bits(byte).enumerate() {
            let px = if on { fg } else { bg };
            if size == 1 {
                fb.write_pixel(cx + col as i32, cy + row as i32, px);
            } else {
                let x = col as i32 * size;
                let y = row as i32 * size;
                for k in 0..size {
                    for l in 0..size {
                        fb.write_pixel(cx + x + k, cy + y + l, px);
                    }
                }
            }
        }
    }
}

/// Lay out a string at the framebuffer cursor
///
/// The text is split on spaces; every non-final (or empty) word gets its
/// space back so spacing is painted too. With `wrap` enabled a word that
/// would run past the right edge moves the cursor to the start of the
/// next line first, and individual glyphs that reach the edge wrap as
/// well. `'\n'` forces a line break. The cursor reflects the end of the
/// laid-out text when the call returns.
pub fn write_string(
    fb: &mut FrameBuffer,
    font: &Font<'_>,
    size: i32,
    text: &str,
    color: Rgb,
    wrap: bool,
    background: Rgb,
) {
    let words: Vec<&str> = text.split(' ').collect();
    let count = words.len() as i32;
    let glyph_advance = font.width as i32 * size;
    let line_advance = font.height as i32 * size + LINE_SPACING;
    let (mut offset, mut line_y) = fb.cursor();

    for (w, &word) in words.iter().enumerate() {
        let word: Cow<'_, str> = if (w as i32) < count - 1 || word.is_empty() {
            Cow::Owned(format!("{word} "))
        } else {
            Cow::Borrowed(word)
        };

        let word_len = word.chars().count() as i32;
        let projected = glyph_advance * word_len + size * (count - 1);
        if wrap && count > 1 && offset >= WIDTH as i32 - projected {
            offset = 1;
            line_y += line_advance;
            fb.set_cursor(offset, line_y);
        }

        for ch in word.chars() {
            if ch == '\n' {
                offset = 0;
                line_y += line_advance;
            } else {
                draw_glyph(fb, glyph_bytes(font, ch), size, color, background);
                offset += glyph_advance + LETTER_SPACING;
                if wrap && offset >= WIDTH as i32 - font.width as i32 - LETTER_SPACING {
                    offset = 0;
                    line_y += line_advance;
                }
            }
            fb.set_cursor(offset, line_y);
        }
    }
}

/// Approximate pixel width of a laid-out string
///
/// Computed as `(glyph width * size + letter spacing) * characters`; it
/// counts the trailing letter gap and ignores wrapping, so it is an
/// estimate rather than an exact layout width.
pub fn string_width(font: &Font<'_>, size: i32, text: &str) -> i32 {
    (font.width as i32 * size + LETTER_SPACING) * text.chars().count() as i32
}
