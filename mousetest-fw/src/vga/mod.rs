//! # VGA scanout for MouseTest
//!
//! Generates 640x480@60Hz VGA with a 25.2 MHz pixel clock (the spec is
//! 25.175 MHz, so we are 0.1% off), using three PIO state machines and two
//! DMA channels. The assumption is that the CPU is clocked at 126 MHz,
//! i.e. 5x the pixel clock. All of the PIO code relies on this assumption!
//!
//! The h-sync machine paces everything: it runs one loop iteration per
//! scan-line and raises IRQ 0 at the start of each line's back porch. The
//! v-sync machine counts those line flags to build the frame structure,
//! and raises IRQ 1 on every visible line. The RGB machine waits for IRQ 1
//! and then shifts one line of pixel pairs out of its FIFO.
//!
//! Pixels arrive in the RGB FIFO by DMA, one byte (two pixels) per
//! transfer, paced by the FIFO's DREQ. When the data channel has streamed
//! the whole framebuffer it chains to a second channel, which rewrites the
//! data channel's read address with the framebuffer base and chains back,
//! re-arming it for the next frame. Once started, scanout needs no CPU at
//! all: to change the picture you change the framebuffer contents.

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

// -----------------------------------------------------------------------------
// Imports
// -----------------------------------------------------------------------------

use core::sync::atomic::{AtomicU32, Ordering};

use defmt::debug;
use rp_pico::hal::{self, pac, pio::PIOExt};

use mousetest_core::framebuffer::BUFFER_LEN;

// -----------------------------------------------------------------------------
// Static and Const Data
// -----------------------------------------------------------------------------

/// Scan-lines in the active area plus the front porch, minus one for the
/// `mov` that reloads the counter. Counted in 25.2 MHz pixel clocks.
const TIMING_ACTIVE: u32 = 655;

/// Visible scan-lines per frame, minus one.
const LINES_ACTIVE: u32 = 479;

/// Pixel-pairs per visible scan-line, minus one.
const PIXEL_PAIRS_ACTIVE: u32 = 319;

/// H-Sync is GPIO8.
const HSYNC_PIN: u8 = 8;

/// V-Sync is GPIO9.
const VSYNC_PIN: u8 = 9;

/// Red is GPIO0; Green and Blue follow on GPIO1 and GPIO2.
const RED_PIN: u8 = 0;

/// DMA channel streaming pixel bytes into the RGB FIFO.
const PIXEL_DMA_CHAN: usize = 0;

/// DMA channel that re-arms [`PIXEL_DMA_CHAN`] at the end of each frame.
const RELOAD_DMA_CHAN: usize = 1;

/// The framebuffer base address, in a word the reload channel can DMA from.
static SCANOUT_BASE: AtomicU32 = AtomicU32::new(0);

// -----------------------------------------------------------------------------
// Functions
// -----------------------------------------------------------------------------

/// Set up the scanout pipeline and start it.
///
/// `framebuffer` must point at [`BUFFER_LEN`] bytes of packed pixels that
/// live forever; the DMA reads them from now on.
pub fn init(pio: pac::PIO0, dma: pac::DMA, resets: &mut pac::RESETS, framebuffer: *const u8) {
	// Grab PIO0 and the state machines it contains
	let (mut pio, sm0, sm1, sm2, _sm3) = pio.split(resets);

	// One loop iteration per scan-line, at the pixel clock. The first
	// `pull` picks up the active-plus-front-porch length once; after that
	// the program wraps forever: busy-wait through the active area and
	// front porch, hold sync low for 96 clocks, then raise it again for
	// the 48 clock back porch, flagging IRQ 0 so the other machines know
	// a new line has started.
	let hsync_program = pio_proc::pio_asm!(
		"pull block"
		".wrap_target"
		"mov x, osr"
		"activeporch:"
		"    jmp x-- activeporch"
		"set pins, 0 [31]"
		"set pins, 0 [31]"
		"set pins, 0 [31]"
		"set pins, 1 [31]"
		"irq 0 [14]"
		".wrap"
	);

	// One loop iteration per frame, clocked like the h-sync machine but
	// advancing only on its IRQ 0 line flags. Every visible line also
	// raises IRQ 1, which is what releases the RGB machine below. The
	// frame structure is 480 visible lines, 10 lines of front porch, a 2
	// line sync pulse and a 33 line back porch (the 33rd is the wrap).
	let vsync_program = pio_proc::pio_asm!(
		"pull block"
		".wrap_target"
		"mov y, osr"
		"active:"
		"    wait 1 irq 0"
		"    irq 1"
		"    jmp y-- active"
		"set y, 9"
		"frontporch:"
		"    wait 1 irq 0"
		"    jmp y-- frontporch"
		"set pins, 0"
		"wait 1 irq 0"
		"wait 1 irq 0"
		"set pins, 1"
		"set y, 31"
		"backporch:"
		"    wait 1 irq 0"
		"    jmp y-- backporch"
		".wrap"
	);

	// Runs at the full system clock, 5x the pixel clock. Each visible
	// line it waits for the v-sync machine's IRQ 1, then shifts 320
	// pixel-pair bytes out of the FIFO; the delays pad each `out` so a
	// pixel-pair takes exactly 10 system clocks. Between lines the RGB
	// pins are forced black. The byte-wide DMA writes are replicated
	// across the 32-bit FIFO word by the bus fabric, so each `pull`
	// yields one pixel pair in its low byte.
	let rgb_program = pio_proc::pio_asm!(
		"pull block"
		"mov y, osr"
		".wrap_target"
		"set pins, 0"
		"mov x, y"
		"wait 1 irq 1 [3]"
		"colorout:"
		"    pull block"
		"    out pins, 3 [4]"
		"    out pins, 3 [2]"
		"    jmp x-- colorout"
		".wrap"
	);

	let hsync_installed = pio.install(&hsync_program.program).unwrap();
	let (mut hsync_sm, _, mut hsync_fifo) =
		hal::pio::PIOBuilder::from_installed_program(hsync_installed)
			.buffers(hal::pio::Buffers::OnlyTx)
			.set_pins(HSYNC_PIN, 1)
			.clock_divisor_fixed_point(5, 0)
			.build(sm0);
	hsync_sm.set_pindirs([(HSYNC_PIN, hal::pio::PinDir::Output)]);

	let vsync_installed = pio.install(&vsync_program.program).unwrap();
	let (mut vsync_sm, _, mut vsync_fifo) =
		hal::pio::PIOBuilder::from_installed_program(vsync_installed)
			.buffers(hal::pio::Buffers::OnlyTx)
			.set_pins(VSYNC_PIN, 1)
			.clock_divisor_fixed_point(5, 0)
			.build(sm1);
	vsync_sm.set_pindirs([(VSYNC_PIN, hal::pio::PinDir::Output)]);

	// Important: the RGB machine must run with a clock divider of 1. Its
	// pixel timing comes from the instruction delays above, and a divider
	// would add line-start jitter.
	let rgb_installed = pio.install(&rgb_program.program).unwrap();
	let (mut rgb_sm, _, mut rgb_fifo) =
		hal::pio::PIOBuilder::from_installed_program(rgb_installed)
			.buffers(hal::pio::Buffers::OnlyTx)
			.set_pins(RED_PIN, 3)
			.out_pins(RED_PIN, 3)
			.out_shift_direction(hal::pio::ShiftDirection::Right)
			.build(sm2);
	rgb_sm.set_pindirs((RED_PIN..RED_PIN + 3).map(|x| (x, hal::pio::PinDir::Output)));

	// Each program starts with a `pull block` that loads its loop count.
	// The FIFOs are empty, so these must all land before the machines
	// start; a full FIFO here means the ordering above is broken.
	defmt::assert!(hsync_fifo.write(TIMING_ACTIVE));
	defmt::assert!(vsync_fifo.write(LINES_ACTIVE));
	defmt::assert!(rgb_fifo.write(PIXEL_PAIRS_ACTIVE));

	debug!("PIO programs loaded");

	SCANOUT_BASE.store(framebuffer as u32, Ordering::Relaxed);

	// Stream the framebuffer into the RGB FIFO, one byte at a time, paced
	// by the FIFO. On completion, chain to the reload channel.
	dma.ch(PIXEL_DMA_CHAN)
		.ch_read_addr()
		.write(|w| unsafe { w.bits(framebuffer as u32) });
	dma.ch(PIXEL_DMA_CHAN)
		.ch_write_addr()
		.write(|w| unsafe { w.bits(rgb_fifo.fifo_address() as usize as u32) });
	dma.ch(PIXEL_DMA_CHAN)
		.ch_trans_count()
		.write(|w| unsafe { w.bits(BUFFER_LEN as u32) });

	// Rewrite the pixel channel's read address from SCANOUT_BASE, then
	// chain back to it, which re-triggers it with its counts reloaded.
	dma.ch(RELOAD_DMA_CHAN)
		.ch_read_addr()
		.write(|w| unsafe { w.bits(SCANOUT_BASE.as_ptr() as u32) });
	dma.ch(RELOAD_DMA_CHAN)
		.ch_write_addr()
		.write(|w| unsafe { w.bits(dma.ch(PIXEL_DMA_CHAN).ch_read_addr().as_ptr() as u32) });
	dma.ch(RELOAD_DMA_CHAN)
		.ch_trans_count()
		.write(|w| unsafe { w.bits(1) });

	// The two channels chain to each other, so the control words go in
	// through the non-triggering alias; neither channel may start until
	// both are fully programmed.
	dma.ch(PIXEL_DMA_CHAN).ch_al1_ctrl().write(|w| {
		w.data_size().size_byte();
		w.incr_read().set_bit();
		w.incr_write().clear_bit();
		unsafe { w.treq_sel().bits(rgb_fifo.dreq_value()) };
		unsafe { w.chain_to().bits(RELOAD_DMA_CHAN as u8) };
		unsafe { w.ring_size().bits(0) };
		w.ring_sel().clear_bit();
		w.bswap().clear_bit();
		w.irq_quiet().clear_bit();
		w.en().set_bit();
		w.sniff_en().clear_bit();
		w
	});
	dma.ch(RELOAD_DMA_CHAN).ch_al1_ctrl().write(|w| {
		w.data_size().size_word();
		w.incr_read().clear_bit();
		w.incr_write().clear_bit();
		w.treq_sel().permanent();
		unsafe { w.chain_to().bits(PIXEL_DMA_CHAN as u8) };
		unsafe { w.ring_size().bits(0) };
		w.ring_sel().clear_bit();
		w.bswap().clear_bit();
		w.irq_quiet().clear_bit();
		w.en().set_bit();
		w.sniff_en().clear_bit();
		w
	});

	debug!("DMA programmed");

	// The three machines share line timing through IRQs, so their clock
	// dividers are synchronised and they start on the same system clock.
	let _running = hsync_sm.with(vsync_sm).with(rgb_sm).sync().start();

	// Kick off the pixel channel; from here the ring runs itself.
	dma.multi_chan_trigger()
		.write(|w| unsafe { w.bits(1 << PIXEL_DMA_CHAN) });

	debug!("Scanout running");

	// We drop our state-machine and PIO objects here - this means the
	// video cannot be reconfigured at a later time, but it does keep on
	// running as-is.
}

// -----------------------------------------------------------------------------
// End of file
// -----------------------------------------------------------------------------
