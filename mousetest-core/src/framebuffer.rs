//! The packed-pixel framebuffer and the rectangle-fill primitive.
//!
//! One fixed 640x480 mode, two pixels per byte, 320-byte row stride. The
//! buffer is allocated once (statically, in the firmware) and streamed to
//! the display continuously by the scanout pipeline; rendering happens in
//! place with no locking, so a write landing mid-scan can tear. That is an
//! accepted trade for never blocking either side.

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

use crate::pixel::{Colour, PixelPair};

/// How many pixels per scan-line.
pub const WIDTH: usize = 640;

/// How many scan-lines.
pub const HEIGHT: usize = 480;

/// Bytes per scan-line; each byte carries two pixels.
pub const ROW_STRIDE: usize = WIDTH / 2;

/// Total size of the pixel storage in bytes.
pub const BUFFER_LEN: usize = (WIDTH * HEIGHT) / 2;

/// The packed pixel storage the scanout pipeline streams from.
pub struct FrameBuffer {
	pub(crate) bytes: [u8; BUFFER_LEN],
}

impl FrameBuffer {
	/// A zeroed (all-black) framebuffer.
	pub const fn new() -> FrameBuffer {
		FrameBuffer {
			bytes: [0; BUFFER_LEN],
		}
	}

	/// Base address of the pixel storage.
	///
	/// This is what the scanout pipeline streams from, start to finish,
	/// once per frame, forever. The pipeline never owns the buffer; it
	/// only reads through this pointer.
	pub fn as_ptr(&self) -> *const u8 {
		self.bytes.as_ptr()
	}

	/// The raw packed pixel storage.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Read back one pixel's colour index (0-7).
	pub fn pixel(&self, x: usize, y: usize) -> u8 {
		let pair = PixelPair::new(self.bytes[((y * WIDTH) + x) >> 1]);
		if x & 1 == 1 {
			pair.right()
		} else {
			pair.left()
		}
	}

	/// Fill a rectangle with one colour.
	///
	/// Oversized rectangles are silently shrunk to fit the buffer; there
	/// is no error path. Because each byte holds two pixels there are
	/// three alignment cases: a leading odd-x column owns only the right
	/// nibble of its byte, the middle is written a whole byte (two
	/// pixels) at a time, and a trailing single column owns only the
	/// left nibble. Each case computes its byte address once and then
	/// walks down the rows by the fixed stride.
	pub fn fill_rect(
		&mut self,
		x: usize,
		y: usize,
		mut width: usize,
		mut height: usize,
		colour: Colour,
	) {
		if x >= WIDTH || y >= HEIGHT {
			return;
		}
		// The guards above make these subtractions safe; `min` keeps the
		// clamp free of overflow however large the requested size is.
		width = width.min(WIDTH - x);
		height = height.min(HEIGHT - y);
		if width == 0 || height == 0 {
			return;
		}

		let mut byte_index = ((y * WIDTH) + x) >> 1;

		if x & 1 == 1 {
			// Partially-owned leading byte: right nibble only.
			let mut offset = byte_index;
			byte_index += 1;
			width -= 1;
			for _ in 0..height {
				let mut pair = PixelPair::new(self.bytes[offset]);
				pair.set_right(colour);
				self.bytes[offset] = pair.as_byte();
				offset += ROW_STRIDE;
			}
		}

		while width > 1 {
			// Fully-owned byte column: both pixels at once.
			let mut offset = byte_index;
			byte_index += 1;
			width -= 2;
			let pair = PixelPair::both(colour);
			for _ in 0..height {
				self.bytes[offset] = pair.as_byte();
				offset += ROW_STRIDE;
			}
		}

		if width == 1 {
			// Partially-owned trailing byte: left nibble only.
			let mut offset = byte_index;
			for _ in 0..height {
				let mut pair = PixelPair::new(self.bytes[offset]);
				pair.set_left(colour);
				self.bytes[offset] = pair.as_byte();
				offset += ROW_STRIDE;
			}
		}
	}
}

impl Default for FrameBuffer {
	fn default() -> FrameBuffer {
		FrameBuffer::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Check every pixel: `colour` inside the rectangle, 0 outside.
	fn assert_rect(fb: &FrameBuffer, x: usize, y: usize, w: usize, h: usize, colour: Colour) {
		for py in 0..HEIGHT {
			for px in 0..WIDTH {
				let inside = px >= x && px < x + w && py >= y && py < y + h;
				let expected = if inside { colour.index() } else { 0 };
				assert_eq!(
					fb.pixel(px, py),
					expected,
					"pixel ({}, {}) wrong for rect ({}, {}, {}, {})",
					px,
					py,
					x,
					y,
					w,
					h
				);
			}
		}
	}

	#[test]
	fn fill_writes_inside_and_only_inside() {
		for (x, y, w, h) in [
			(0, 0, 1, 1),
			(0, 0, 2, 2),
			(1, 0, 1, 1),
			(3, 7, 5, 3),
			(10, 10, 7, 7),
			(632, 472, 8, 8),
			(639, 479, 1, 1),
		] {
			let mut fb = FrameBuffer::new();
			fb.fill_rect(x, y, w, h, Colour::Magenta);
			assert_rect(&fb, x, y, w, h, Colour::Magenta);
		}
	}

	#[test]
	fn oversized_fill_is_clamped() {
		let mut fb = FrameBuffer::new();
		fb.fill_rect(630, 470, 100, 100, Colour::Cyan);
		assert_rect(&fb, 630, 470, 10, 10, Colour::Cyan);
	}

	#[test]
	fn extreme_fill_sizes_are_clamped_not_overflowed() {
		let mut fb = FrameBuffer::new();
		fb.fill_rect(1, 0, usize::MAX, usize::MAX, Colour::White);
		assert_rect(&fb, 1, 0, WIDTH - 1, HEIGHT, Colour::White);

		let mut fb = FrameBuffer::new();
		fb.fill_rect(639, 479, usize::MAX, 1, Colour::Red);
		assert_rect(&fb, 639, 479, 1, 1, Colour::Red);
	}

	#[test]
	fn out_of_bounds_fill_does_nothing() {
		let mut fb = FrameBuffer::new();
		fb.fill_rect(640, 0, 10, 10, Colour::White);
		fb.fill_rect(0, 480, 10, 10, Colour::White);
		fb.fill_rect(10_000, 10_000, 10, 10, Colour::White);
		assert!(fb.bytes.iter().all(|&b| b == 0));
	}

	#[test]
	fn odd_x_single_column_leaves_neighbour_byte_identical() {
		let mut fb = FrameBuffer::new();
		// Give the even-x neighbours a known colour first.
		fb.fill_rect(100, 50, 1, 4, Colour::Green);
		let before: [u8; 4] = core::array::from_fn(|row| fb.bytes[((50 + row) * WIDTH + 100) >> 1]);
		fb.fill_rect(101, 50, 1, 4, Colour::Red);
		for (row, &b) in before.iter().enumerate() {
			let after = fb.bytes[((50 + row) * WIDTH + 100) >> 1];
			// Same byte, left nibble untouched, right nibble now red.
			assert_eq!(after & 0b0000_0111, b & 0b0000_0111);
			assert_eq!((after >> 3) & 0b0000_0111, Colour::Red.index());
		}
	}

	#[test]
	fn fill_is_idempotent() {
		let mut once = FrameBuffer::new();
		once.fill_rect(13, 27, 31, 9, Colour::Blue);
		let mut twice = FrameBuffer::new();
		twice.fill_rect(13, 27, 31, 9, Colour::Blue);
		twice.fill_rect(13, 27, 31, 9, Colour::Blue);
		assert!(once.bytes.iter().eq(twice.bytes.iter()));
	}

	#[test]
	fn border_scenario() {
		// Full green fill, then a black fill inset by one pixel: a
		// one-pixel green border must remain.
		let mut fb = FrameBuffer::new();
		fb.fill_rect(0, 0, WIDTH, HEIGHT, Colour::Green);
		fb.fill_rect(1, 1, WIDTH - 2, HEIGHT - 2, Colour::Black);
		for y in 0..HEIGHT {
			for x in 0..WIDTH {
				let on_border = x == 0 || x == WIDTH - 1 || y == 0 || y == HEIGHT - 1;
				let expected = if on_border {
					Colour::Green.index()
				} else {
					Colour::Black.index()
				};
				assert_eq!(fb.pixel(x, y), expected, "pixel ({}, {})", x, y);
			}
		}
	}
}
