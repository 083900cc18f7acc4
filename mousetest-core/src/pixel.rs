//! Packed-pixel value types.
//!
//! The display sink takes one byte per two horizontally-adjacent pixels:
//! the left pixel's 3-bit colour index in bits 0-2 and the right pixel's
//! in bits 3-5. Bits 6 and 7 are unused. Every single-pixel write must
//! leave the neighbouring pixel's nibble untouched.

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

/// The eight colour indices the pixel sink understands.
///
/// The index order is fixed by the wiring of the resistor DAC: bit 0 is
/// red, bit 1 is green, bit 2 is blue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Colour {
	Black = 0,
	Red = 1,
	Green = 2,
	Yellow = 3,
	Blue = 4,
	Magenta = 5,
	Cyan = 6,
	White = 7,
}

impl Colour {
	/// The 3-bit colour index.
	pub const fn index(self) -> u8 {
		self as u8
	}
}

/// Two horizontally-adjacent packed pixels.
///
/// All the nibble mask/shift logic lives here so the rectangle-fill and
/// glyph-blit algorithms never touch raw bit operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct PixelPair(u8);

impl PixelPair {
	/// Wrap a raw framebuffer byte.
	pub const fn new(byte: u8) -> PixelPair {
		PixelPair(byte)
	}

	/// A pair with both pixels set to the same colour.
	pub const fn both(colour: Colour) -> PixelPair {
		PixelPair((colour.index() << 3) | colour.index())
	}

	/// The left (even-x) pixel's colour index.
	pub const fn left(self) -> u8 {
		self.0 & 0b0000_0111
	}

	/// The right (odd-x) pixel's colour index.
	pub const fn right(self) -> u8 {
		(self.0 >> 3) & 0b0000_0111
	}

	/// Recolour the left pixel, leaving the right pixel's nibble intact.
	pub fn set_left(&mut self, colour: Colour) {
		self.0 = (self.0 & 0b1111_1000) | colour.index();
	}

	/// Recolour the right pixel, leaving the left pixel's nibble intact.
	pub fn set_right(&mut self, colour: Colour) {
		self.0 = (self.0 & 0b1100_0111) | (colour.index() << 3);
	}

	/// The raw byte as the scanout engine will stream it.
	pub const fn as_byte(self) -> u8 {
		self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pair_packs_left_low_right_high() {
		let mut pair = PixelPair::new(0);
		pair.set_left(Colour::White);
		pair.set_right(Colour::Red);
		assert_eq!(pair.as_byte(), 0b0000_1111);
		assert_eq!(pair.left(), Colour::White.index());
		assert_eq!(pair.right(), Colour::Red.index());
	}

	#[test]
	fn single_pixel_write_preserves_neighbour() {
		let mut pair = PixelPair::both(Colour::Cyan);
		pair.set_left(Colour::Black);
		assert_eq!(pair.right(), Colour::Cyan.index());
		pair.set_right(Colour::Yellow);
		assert_eq!(pair.left(), Colour::Black.index());
	}

	#[test]
	fn both_replicates_the_index() {
		for colour in [
			Colour::Black,
			Colour::Red,
			Colour::Green,
			Colour::Yellow,
			Colour::Blue,
			Colour::Magenta,
			Colour::Cyan,
			Colour::White,
		] {
			let pair = PixelPair::both(colour);
			assert_eq!(pair.left(), colour.index());
			assert_eq!(pair.right(), colour.index());
		}
	}
}
