//! # MouseTest Core
//!
//! Everything in this crate is independent of the RP2040: the packed-pixel
//! framebuffer and its rendering primitives, the 8x8 glyph ROM, and the
//! quadrature decoder state machine. The firmware crate provides the
//! hardware behind the [`quadrature::InputPort`] trait and streams the
//! framebuffer out over DMA; this crate can be tested on the host.

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

#![no_std]
#![deny(unsafe_code)]

pub mod draw;
pub mod font;
pub mod framebuffer;
pub mod pixel;
pub mod quadrature;
