//! Text rendering on top of the packed frame buffer.
//!
//! Glyphs are 8x8, so the 640x480 surface is an 80x60 character grid.
//! Each glyph row covers exactly four frame buffer bytes, which lets the
//! renderer write whole pixel pairs and never read the buffer back.

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

use crate::font;
use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::pixel::Colour;

/// Width of the character grid.
pub const TEXT_COLS: usize = 80;

/// Height of the character grid.
pub const TEXT_ROWS: usize = 60;

/// Codes at or above this are folded down onto the glyph ROM's
/// alternate page, which is where the lower-case letters live.
pub const PAGE_OFFSET: u8 = b'`';

impl FrameBuffer {
	/// Draw one glyph with its top-left corner at pixel `(x, y)`.
	///
	/// The cell is painted opaquely: pixels the glyph leaves clear come
	/// out black. Glyphs that would not fit entirely on screen, and
	/// codes outside the ROM, are skipped.
	pub fn draw_glyph(&mut self, x: usize, y: usize, code: u8, colour: Colour) {
		if usize::from(code) >= font::GLYPH_COUNT {
			return;
		}
		// Phrased subtraction-side so huge coordinates cannot overflow.
		if x > WIDTH - 8 || y > HEIGHT - 8 {
			return;
		}
		for line in 0..font::GLYPH_HEIGHT {
			// Last byte of this glyph row; the row is emitted two
			// pixels at a time from the right-hand edge inwards.
			let base = (((y + line) * WIDTH) + x) >> 1;
			let mut bits = font::row(code, line);
			for i in 0..4 {
				let mut pair = 0u8;
				if bits & 0b10 != 0 {
					pair = colour.index();
				}
				if bits & 0b01 != 0 {
					pair |= colour.index() << 3;
				}
				self.bytes[base + 3 - i] = pair;
				bits >>= 2;
			}
		}
	}

	/// Draw a string starting at character cell `(col, row)`.
	///
	/// Text that reaches the right-hand margin wraps to column 1 of the
	/// next row; anything that would land on or below the bottom margin
	/// is dropped. Bytes at or above `` ` `` are remapped onto the
	/// ROM's lower-case page before lookup.
	pub fn draw_string(&mut self, mut col: usize, mut row: usize, text: &str, colour: Colour) {
		for byte in text.bytes() {
			if col >= TEXT_COLS - 1 {
				col = 1;
				row += 1;
			}
			if row >= TEXT_ROWS - 1 {
				return;
			}
			let code = if byte >= PAGE_OFFSET {
				byte - PAGE_OFFSET
			} else {
				byte
			};
			self.draw_glyph(col * 8, row * 8, code, colour);
			col += 1;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Read an 8-pixel glyph row back out of the frame buffer as a
	/// bitmap, treating `colour` as set and anything else as clear.
	fn read_row_bits(fb: &FrameBuffer, x: usize, y: usize, colour: Colour) -> u8 {
		let mut bits = 0;
		for px in 0..8 {
			bits <<= 1;
			if fb.pixel(x + px, y) == colour.index() {
				bits |= 1;
			}
		}
		bits
	}

	fn assert_glyph_at(fb: &FrameBuffer, x: usize, y: usize, code: u8, colour: Colour) {
		for line in 0..font::GLYPH_HEIGHT {
			assert_eq!(
				read_row_bits(fb, x, y + line, colour),
				font::row(code, line),
				"glyph {code:#04x} line {line} at ({x},{y})"
			);
		}
	}

	fn assert_cell_blank(fb: &FrameBuffer, x: usize, y: usize) {
		for line in 0..font::GLYPH_HEIGHT {
			for px in 0..8 {
				assert_eq!(fb.pixel(x + px, y + line), 0);
			}
		}
	}

	#[test]
	fn glyph_pixels_match_the_rom() {
		let mut fb = FrameBuffer::new();
		fb.draw_glyph(16, 24, b'A', Colour::White);
		assert_glyph_at(&fb, 16, 24, b'A', Colour::White);
	}

	#[test]
	fn glyph_cell_is_painted_opaquely() {
		let mut fb = FrameBuffer::new();
		fb.fill_rect(0, 0, WIDTH, HEIGHT, Colour::Green);
		fb.draw_glyph(8, 8, b' ', Colour::White);
		// A blank glyph blacks out its whole cell.
		assert_cell_blank(&fb, 8, 8);
		// The neighbouring cells keep the background.
		assert_eq!(fb.pixel(7, 8), Colour::Green.index());
		assert_eq!(fb.pixel(16, 8), Colour::Green.index());
	}

	#[test]
	fn out_of_rom_codes_are_skipped() {
		let mut fb = FrameBuffer::new();
		fb.draw_glyph(0, 0, 96, Colour::White);
		fb.draw_glyph(0, 0, 255, Colour::White);
		assert_cell_blank(&fb, 0, 0);
	}

	#[test]
	fn off_screen_glyphs_are_skipped() {
		let mut fb = FrameBuffer::new();
		// Partially off the right and bottom edges, and wildly out of
		// range; none of these may touch the buffer.
		fb.draw_glyph(WIDTH - 7, 0, b'A', Colour::White);
		fb.draw_glyph(0, HEIGHT - 7, b'A', Colour::White);
		fb.draw_glyph(usize::MAX, 0, b'A', Colour::White);
		fb.draw_glyph(0, usize::MAX, b'A', Colour::White);
		let blank = FrameBuffer::new();
		assert!(fb.as_bytes() == blank.as_bytes());
	}

	#[test]
	fn string_renders_each_cell() {
		let mut fb = FrameBuffer::new();
		fb.draw_string(10, 5, "HI 42", Colour::Yellow);
		for (i, code) in [b'H', b'I', b' ', b'4', b'2'].into_iter().enumerate() {
			assert_glyph_at(&fb, (10 + i) * 8, 5 * 8, code, Colour::Yellow);
		}
	}

	#[test]
	fn lower_case_is_folded_onto_the_alternate_page() {
		let mut fb = FrameBuffer::new();
		fb.draw_string(0, 0, "a", Colour::White);
		// 'a' is 0x61 and lands on ROM code 0x01.
		assert_glyph_at(&fb, 0, 0, 0x01, Colour::White);
	}

	#[test]
	fn string_wraps_to_column_one() {
		let mut fb = FrameBuffer::new();
		fb.draw_string(78, 0, "ABCDE", Colour::White);
		// One cell fits on row 0, the rest wrap to column 1 of row 1.
		assert_glyph_at(&fb, 78 * 8, 0, b'A', Colour::White);
		assert_glyph_at(&fb, 8, 8, b'B', Colour::White);
		assert_glyph_at(&fb, 16, 8, b'C', Colour::White);
		assert_glyph_at(&fb, 24, 8, b'D', Colour::White);
		assert_glyph_at(&fb, 32, 8, b'E', Colour::White);
		assert_cell_blank(&fb, 0, 8);
	}

	#[test]
	fn string_stops_at_the_bottom_margin() {
		let mut fb = FrameBuffer::new();
		fb.draw_string(0, 59, "X", Colour::White);
		let blank = FrameBuffer::new();
		assert!(fb.as_bytes() == blank.as_bytes());
	}
}
