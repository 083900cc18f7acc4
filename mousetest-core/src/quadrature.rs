//! Quadrature decoding for an Amiga/Atari style mouse.
//!
//! Each axis presents two phase-shifted square waves. The decoder watches
//! one of them for edges; on a rising edge it waits out the encoder's
//! settling time, samples again, and reads the travel direction off the
//! other wave. Counts only ever increase, so a reader sees "something
//! moved, most recently that way" rather than a position.
//!
//! The hardware is abstracted behind [`InputPort`] so the decoder can be
//! driven from a scripted pin recording on the host.

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

use core::sync::atomic::{AtomicU32, Ordering};

/// Where pin level snapshots come from.
///
/// `sample` returns the live levels of the low 32 GPIOs as one word.
/// `settle` burns roughly 40 ns so a re-sample lands after the encoder
/// contacts have stopped bouncing.
pub trait InputPort {
	/// Snapshot the current pin levels.
	fn sample(&mut self) -> u32;
	/// Wait out the encoder settling time.
	fn settle(&mut self);
}

/// Which pin bits carry one axis.
#[derive(Debug, Clone, Copy)]
pub struct AxisPins {
	/// Bit number of the wave the decoder edge-watches.
	pub signal: u32,
	/// Bit number of the phase-shifted wave that encodes direction.
	pub complement: u32,
}

/// Motion published by the decoder for one axis.
///
/// Written by the decoding core, read by whoever renders the UI. Plain
/// loads and stores are enough here: the two fields are only loosely
/// related and a display that is one event stale is fine.
#[derive(Debug, Default)]
pub struct AxisMotion {
	direction: AtomicU32,
	count: AtomicU32,
}

impl AxisMotion {
	pub const fn new() -> AxisMotion {
		AxisMotion {
			direction: AtomicU32::new(0),
			count: AtomicU32::new(0),
		}
	}

	/// Level of the complement wave at the last rising edge.
	pub fn direction(&self) -> u32 {
		self.direction.load(Ordering::Relaxed)
	}

	/// How many rising edges have been seen. Wraps.
	pub fn count(&self) -> u32 {
		self.count.load(Ordering::Relaxed)
	}

	fn record(&self, direction: u32) {
		self.direction.store(direction, Ordering::Relaxed);
		// Only one core ever writes, so load-then-store is safe and
		// avoids atomic RMW ops the Cortex-M0+ does not have.
		let count = self.count.load(Ordering::Relaxed);
		self.count.store(count.wrapping_add(1), Ordering::Relaxed);
	}
}

/// Motion state for both axes, shared between cores.
#[derive(Debug, Default)]
pub struct MotionState {
	pub horizontal: AxisMotion,
	pub vertical: AxisMotion,
}

impl MotionState {
	pub const fn new() -> MotionState {
		MotionState {
			horizontal: AxisMotion::new(),
			vertical: AxisMotion::new(),
		}
	}
}

/// Edge memory and pin assignment for one axis.
struct AxisDecoder {
	pins: AxisPins,
	last_level: u32,
}

impl AxisDecoder {
	fn new(pins: AxisPins, levels: u32) -> AxisDecoder {
		AxisDecoder {
			last_level: (levels >> pins.signal) & 1,
			pins,
		}
	}

	/// Check one axis against the latest snapshot.
	///
	/// A rising edge re-samples the port after the settling time and
	/// replaces the shared snapshot, so the axis checked next in the
	/// same pass works from the fresher levels. A falling edge only
	/// updates the edge memory.
	fn poll<P: InputPort>(&mut self, levels: &mut u32, port: &mut P, motion: &AxisMotion) {
		let level = (*levels >> self.pins.signal) & 1;
		if level == self.last_level {
			return;
		}
		self.last_level = level;
		if level == 1 {
			port.settle();
			*levels = port.sample();
			motion.record((*levels >> self.pins.complement) & 1);
		}
	}
}

/// Two-axis decoder, meant to be spun in a tight loop on its own core.
pub struct QuadratureDecoder {
	horizontal: AxisDecoder,
	vertical: AxisDecoder,
}

impl QuadratureDecoder {
	/// Prime the edge memory of both axes from a first snapshot.
	pub fn new<P: InputPort>(port: &mut P, horizontal: AxisPins, vertical: AxisPins) -> QuadratureDecoder {
		let levels = port.sample();
		QuadratureDecoder {
			horizontal: AxisDecoder::new(horizontal, levels),
			vertical: AxisDecoder::new(vertical, levels),
		}
	}

	/// One pass over both axes, horizontal first.
	pub fn poll<P: InputPort>(&mut self, port: &mut P, motion: &MotionState) {
		let mut levels = port.sample();
		self.horizontal.poll(&mut levels, port, &motion.horizontal);
		self.vertical.poll(&mut levels, port, &motion.vertical);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const H: AxisPins = AxisPins {
		signal: 13,
		complement: 12,
	};
	const V: AxisPins = AxisPins {
		signal: 10,
		complement: 11,
	};

	/// Replays a fixed sequence of pin snapshots; the last one repeats.
	struct ScriptedPort<'a> {
		script: &'a [u32],
		next: usize,
		settles: usize,
	}

	impl<'a> ScriptedPort<'a> {
		fn new(script: &'a [u32]) -> ScriptedPort<'a> {
			ScriptedPort {
				script,
				next: 0,
				settles: 0,
			}
		}
	}

	impl InputPort for ScriptedPort<'_> {
		fn sample(&mut self) -> u32 {
			let level = self.script[self.next];
			if self.next + 1 < self.script.len() {
				self.next += 1;
			}
			level
		}

		fn settle(&mut self) {
			self.settles += 1;
		}
	}

	fn bit(pin: u32) -> u32 {
		1 << pin
	}

	#[test]
	fn rising_edge_counts_and_latches_direction() {
		let script = [
			0,                         // priming snapshot
			bit(H.signal),             // poll sees the rising edge
			bit(H.signal) | bit(H.complement), // post-settle re-sample
		];
		let mut port = ScriptedPort::new(&script);
		let motion = MotionState::new();
		let mut decoder = QuadratureDecoder::new(&mut port, H, V);

		decoder.poll(&mut port, &motion);

		assert_eq!(motion.horizontal.count(), 1);
		assert_eq!(motion.horizontal.direction(), 1);
		assert_eq!(motion.vertical.count(), 0);
		assert_eq!(port.settles, 1);
	}

	#[test]
	fn direction_follows_the_complement_level() {
		let script = [
			0,
			bit(V.signal),
			bit(V.signal), // complement low after settling
		];
		let mut port = ScriptedPort::new(&script);
		let motion = MotionState::new();
		let mut decoder = QuadratureDecoder::new(&mut port, H, V);

		decoder.poll(&mut port, &motion);

		assert_eq!(motion.vertical.count(), 1);
		assert_eq!(motion.vertical.direction(), 0);
	}

	#[test]
	fn falling_edge_only_updates_edge_memory() {
		let script = [
			bit(H.signal), // primed high
			0,             // falling edge
			bit(H.signal), // rises again next poll
			bit(H.signal) | bit(H.complement),
		];
		let mut port = ScriptedPort::new(&script);
		let motion = MotionState::new();
		let mut decoder = QuadratureDecoder::new(&mut port, H, V);

		decoder.poll(&mut port, &motion);
		assert_eq!(motion.horizontal.count(), 0);
		assert_eq!(port.settles, 0);

		decoder.poll(&mut port, &motion);
		assert_eq!(motion.horizontal.count(), 1);
		assert_eq!(motion.horizontal.direction(), 1);
	}

	#[test]
	fn steady_level_is_ignored() {
		let script = [bit(H.signal) | bit(V.signal)];
		let mut port = ScriptedPort::new(&script);
		let motion = MotionState::new();
		let mut decoder = QuadratureDecoder::new(&mut port, H, V);

		for _ in 0..100 {
			decoder.poll(&mut port, &motion);
		}

		assert_eq!(motion.horizontal.count(), 0);
		assert_eq!(motion.vertical.count(), 0);
	}

	#[test]
	fn post_settle_snapshot_feeds_the_other_axis() {
		// The vertical edge only shows up in the re-sample taken after
		// the horizontal settling delay, and must still be decoded in
		// the same pass.
		let script = [
			0,
			bit(H.signal),                                    // poll snapshot: only H rose
			bit(H.signal) | bit(V.signal),                    // post-H-settle: V has risen too
			bit(H.signal) | bit(V.signal) | bit(V.complement), // post-V-settle
		];
		let mut port = ScriptedPort::new(&script);
		let motion = MotionState::new();
		let mut decoder = QuadratureDecoder::new(&mut port, H, V);

		decoder.poll(&mut port, &motion);

		assert_eq!(motion.horizontal.count(), 1);
		assert_eq!(motion.vertical.count(), 1);
		assert_eq!(motion.vertical.direction(), 1);
		assert_eq!(port.settles, 2);
	}

	#[test]
	fn counts_never_decrease() {
		// A long alternating run on both axes.
		let mut script = [0u32; 64];
		for (i, slot) in script.iter_mut().enumerate() {
			if i % 2 == 1 {
				*slot = bit(H.signal) | bit(V.signal) | bit(H.complement);
			}
		}
		let mut port = ScriptedPort::new(&script);
		let motion = MotionState::new();
		let mut decoder = QuadratureDecoder::new(&mut port, H, V);

		let mut last = 0;
		for _ in 0..40 {
			decoder.poll(&mut port, &motion);
			let now = motion.horizontal.count();
			assert!(now >= last);
			last = now;
		}
		assert!(last > 0);
	}
}
