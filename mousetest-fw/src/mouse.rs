//! # Quadrature mouse sampling on Core 1
//!
//! Core 1 does nothing but spin the decoder from `mousetest-core` as fast
//! as it can, reading all four quadrature signals in one SIO register
//! snapshot per pass. Interrupts stay off so nothing can stretch the gap
//! between an edge and its direction re-sample.

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

use mousetest_core::quadrature::{AxisPins, InputPort, MotionState, QuadratureDecoder};
use rp_pico::hal::pac;

/// Vertical movement signal is GPIO10.
const MOUSE_V_PIN: u32 = 10;

/// Vertical direction (quadrature complement) signal is GPIO11.
const MOUSE_VQ_PIN: u32 = 11;

/// Horizontal direction (quadrature complement) signal is GPIO12.
const MOUSE_HQ_PIN: u32 = 12;

/// Horizontal movement signal is GPIO13.
const MOUSE_H_PIN: u32 = 13;

/// Five clocks at 126 MHz is just shy of 40 ns, long enough for the
/// complement signal to settle after an edge on the movement signal.
const SETTLE_CYCLES: u32 = 5;

/// Reads pin levels out of the SIO `GPIO_IN` register.
///
/// The register is read-only and reflects every GPIO regardless of which
/// core owns the pin objects, so going through `SIO::ptr` here does not
/// race with Core 0.
struct SioPort;

impl InputPort for SioPort {
	fn sample(&mut self) -> u32 {
		let sio = unsafe { &*pac::SIO::ptr() };
		sio.gpio_in().read().bits()
	}

	fn settle(&mut self) {
		cortex_m::asm::delay(SETTLE_CYCLES);
	}
}

/// The Core 1 entry point. Never returns.
pub fn decoder_task(motion: &'static MotionState) -> ! {
	cortex_m::interrupt::disable();

	let mut port = SioPort;
	let mut decoder = QuadratureDecoder::new(
		&mut port,
		AxisPins {
			signal: MOUSE_H_PIN,
			complement: MOUSE_HQ_PIN,
		},
		AxisPins {
			signal: MOUSE_V_PIN,
			complement: MOUSE_VQ_PIN,
		},
	);

	loop {
		decoder.poll(&mut port, motion);
	}
}

// -----------------------------------------------------------------------------
// End of file
// -----------------------------------------------------------------------------
