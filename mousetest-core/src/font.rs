//! The 8x8 glyph ROM.
//!
//! 96 glyphs, one byte per row, most-significant bit leftmost, addressed
//! as `code * 8 + row`. The layout mirrors the character generator the
//! original font was dumped from: the block below 0x20 is an alternate
//! page holding the lower-case letters, which is why the string renderer
//! subtracts the backtick offset from codes at or above `` ` `` before
//! looking glyphs up here. Codes 0x20-0x5F are the usual ASCII page.

// -----------------------------------------------------------------------------
// Licence Statement
// -----------------------------------------------------------------------------
// Copyright (c) The MouseTest Developers, 2026
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program.  If not, see <https://www.gnu.org/licenses/>.
// -----------------------------------------------------------------------------

/// Number of glyphs in the ROM.
pub const GLYPH_COUNT: usize = 96;

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 8;

/// One row of one glyph.
pub fn row(code: u8, row: usize) -> u8 {
	GLYPH_ROM[(code as usize * GLYPH_HEIGHT) + row]
}

/// The glyph bitmaps.
#[rustfmt::skip]
pub static GLYPH_ROM: [u8; GLYPH_COUNT * GLYPH_HEIGHT] = [
	// 0x00 '@'
	0x3C, 0x66, 0x6E, 0x6E, 0x60, 0x62, 0x3C, 0x00,
	// 0x01 'a'
	0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x3E, 0x00,
	// 0x02 'b'
	0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x00,
	// 0x03 'c'
	0x00, 0x00, 0x3C, 0x66, 0x60, 0x66, 0x3C, 0x00,
	// 0x04 'd'
	0x06, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x00,
	// 0x05 'e'
	0x00, 0x00, 0x3C, 0x66, 0x7E, 0x60, 0x3C, 0x00,
	// 0x06 'f'
	0x1C, 0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x00,
	// 0x07 'g'
	0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x3C,
	// 0x08 'h'
	0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00,
	// 0x09 'i'
	0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00,
	// 0x0A 'j'
	0x06, 0x00, 0x06, 0x06, 0x06, 0x06, 0x66, 0x3C,
	// 0x0B 'k'
	0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x00,
	// 0x0C 'l'
	0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00,
	// 0x0D 'm'
	0x00, 0x00, 0x76, 0x7F, 0x6B, 0x6B, 0x63, 0x00,
	// 0x0E 'n'
	0x00, 0x00, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00,
	// 0x0F 'o'
	0x00, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x00,
	// 0x10 'p'
	0x00, 0x00, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60,
	// 0x11 'q'
	0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x06,
	// 0x12 'r'
	0x00, 0x00, 0x6E, 0x70, 0x60, 0x60, 0x60, 0x00,
	// 0x13 's'
	0x00, 0x00, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x00,
	// 0x14 't'
	0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x1C, 0x00,
	// 0x15 'u'
	0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x00,
	// 0x16 'v'
	0x00, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00,
	// 0x17 'w'
	0x00, 0x00, 0x63, 0x6B, 0x6B, 0x7F, 0x36, 0x00,
	// 0x18 'x'
	0x00, 0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00,
	// 0x19 'y'
	0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x3C,
	// 0x1A 'z'
	0x00, 0x00, 0x7E, 0x0C, 0x18, 0x30, 0x7E, 0x00,
	// 0x1B '['
	0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00,
	// 0x1C backslash
	0x00, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x00,
	// 0x1D ']'
	0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00,
	// 0x1E up arrow
	0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x00,
	// 0x1F left arrow
	0x00, 0x10, 0x30, 0x7F, 0x7F, 0x30, 0x10, 0x00,
	// 0x20 ' '
	0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
	// 0x21 '!'
	0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00,
	// 0x22 '"'
	0x66, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00,
	// 0x23 '#'
	0x66, 0x66, 0xFF, 0x66, 0xFF, 0x66, 0x66, 0x00,
	// 0x24 '$'
	0x18, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x18, 0x00,
	// 0x25 '%'
	0x62, 0x66, 0x0C, 0x18, 0x30, 0x66, 0x46, 0x00,
	// 0x26 '&'
	0x3C, 0x66, 0x3C, 0x38, 0x67, 0x66, 0x3F, 0x00,
	// 0x27 '\''
	0x06, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
	// 0x28 '('
	0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00,
	// 0x29 ')'
	0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00,
	// 0x2A '*'
	0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00,
	// 0x2B '+'
	0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00,
	// 0x2C ','
	0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30,
	// 0x2D '-'
	0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00,
	// 0x2E '.'
	0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00,
	// 0x2F '/'
	0x00, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x00,
	// 0x30 '0'
	0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00,
	// 0x31 '1'
	0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00,
	// 0x32 '2'
	0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00,
	// 0x33 '3'
	0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00,
	// 0x34 '4'
	0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00,
	// 0x35 '5'
	0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00,
	// 0x36 '6'
	0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00,
	// 0x37 '7'
	0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00,
	// 0x38 '8'
	0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00,
	// 0x39 '9'
	0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00,
	// 0x3A ':'
	0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00,
	// 0x3B ';'
	0x00, 0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x30,
	// 0x3C '<'
	0x0E, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0E, 0x00,
	// 0x3D '='
	0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00,
	// 0x3E '>'
	0x70, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x70, 0x00,
	// 0x3F '?'
	0x3C, 0x66, 0x06, 0x0C, 0x18, 0x00, 0x18, 0x00,
	// 0x40 horizontal bar
	0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00,
	// 0x41 'A'
	0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00,
	// 0x42 'B'
	0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x00,
	// 0x43 'C'
	0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00,
	// 0x44 'D'
	0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00,
	// 0x45 'E'
	0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00,
	// 0x46 'F'
	0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00,
	// 0x47 'G'
	0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3C, 0x00,
	// 0x48 'H'
	0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00,
	// 0x49 'I'
	0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00,
	// 0x4A 'J'
	0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38, 0x00,
	// 0x4B 'K'
	0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00,
	// 0x4C 'L'
	0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00,
	// 0x4D 'M'
	0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00,
	// 0x4E 'N'
	0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00,
	// 0x4F 'O'
	0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00,
	// 0x50 'P'
	0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00,
	// 0x51 'Q'
	0x3C, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x0E, 0x00,
	// 0x52 'R'
	0x7C, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0x66, 0x00,
	// 0x53 'S'
	0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00,
	// 0x54 'T'
	0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00,
	// 0x55 'U'
	0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00,
	// 0x56 'V'
	0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00,
	// 0x57 'W'
	0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00,
	// 0x58 'X'
	0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00,
	// 0x59 'Y'
	0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00,
	// 0x5A 'Z'
	0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00,
	// 0x5B cross
	0x18, 0x18, 0x18, 0xFF, 0xFF, 0x18, 0x18, 0x18,
	// 0x5C left half block
	0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0,
	// 0x5D vertical bar
	0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18,
	// 0x5E checker
	0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA,
	// 0x5F lower-right wedge
	0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF,
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rows_are_addressed_code_times_height() {
		// 'A' is glyph 0x41; its first row is the 0x3C arch.
		assert_eq!(row(0x41, 0), 0x3C);
		// Space is blank.
		for r in 0..GLYPH_HEIGHT {
			assert_eq!(row(0x20, r), 0x00);
		}
	}
}
