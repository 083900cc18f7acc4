//! # MouseTest for the Raspberry Pi Pico
//!
//! Drives a 640x480@60Hz 8-colour VGA display straight out of a framebuffer
//! in SRAM, and decodes an Amiga/Atari style quadrature mouse on the second
//! core. Core 0 owns the framebuffer and repaints a handful of status lines
//! 60-ish times a second; the PIO/DMA scanout set up by [`vga`] streams the
//! buffer to the pins with no further CPU involvement.
//!
//! The CPU runs at 126 MHz, which is 5x the 25.2 MHz VGA pixel clock. All
//! of the PIO code relies on this ratio!

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
#![no_main]

// -----------------------------------------------------------------------------
// Sub-modules
// -----------------------------------------------------------------------------

pub mod mouse;
pub mod vga;

// -----------------------------------------------------------------------------
// Imports
// -----------------------------------------------------------------------------

use core::fmt::Write;

use cortex_m_rt::entry;
use defmt::*;
use defmt_rtt as _;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use fugit::{HertzU32, RateExtU32};
use panic_probe as _;
use rp_pico::{
	self as pico,
	hal::{self, pac},
};

use mousetest_core::{
	framebuffer::{FrameBuffer, HEIGHT, WIDTH},
	pixel::Colour,
	quadrature::MotionState,
};

// -----------------------------------------------------------------------------
// Static and Const Data
// -----------------------------------------------------------------------------

/// This is the standard RP2040 bootloader. It must be stored in the first 256
/// bytes of the external SPI Flash chip. It will map the external SPI flash
/// chip to address `0x1000_0000` and jump to an Interrupt Vector Table at
/// address `0x1000_0100` (i.e. immediately after the bootloader).
///
/// See `memory.x` for a definition of the `.boot2` section.
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

/// The pixels the scanout pipeline streams to the screen. Core 0 draws into
/// this; the DMA reads it forever.
static mut FRAMEBUFFER: FrameBuffer = FrameBuffer::new();

/// Mouse motion, written by Core 1 and read by the main loop.
static MOTION: MotionState = MotionState::new();

/// Stack for Core 1. The decoder loop is a leaf function, so it needs very
/// little.
static mut CORE1_STACK: hal::multicore::Stack<1024> = hal::multicore::Stack::new();

/// One frame period, roughly. The main loop sleeps this long between repaints.
const FRAME_MS: u32 = 16;

// -----------------------------------------------------------------------------
// Functions
// -----------------------------------------------------------------------------

/// This is the entry-point. It is called by cortex-m-rt once the `.bss` and
/// `.data` sections have been initialised.
#[entry]
fn main() -> ! {
	info!("MouseTest starting...");

	// Grab the singleton containing all the RP2040 peripherals
	let mut pac = pac::Peripherals::take().unwrap();
	// Grab the singleton containing all the generic Cortex-M peripherals
	let core = pac::CorePeripherals::take().unwrap();

	// Reset the DMA engine. If we don't do this, starting from the debugger
	// (as opposed to a cold-start) is unreliable.
	pac.RESETS.reset().modify(|_r, w| w.dma().set_bit());
	cortex_m::asm::nop();
	pac.RESETS.reset().modify(|_r, w| w.dma().clear_bit());
	while pac.RESETS.reset_done().read().dma().bit_is_clear() {}

	// Needed by the clock setup
	let mut watchdog = hal::watchdog::Watchdog::new(pac.WATCHDOG);

	// Run at 126 MHz SYS_PLL, 48 MHz USB_PLL

	let xosc = hal::xosc::setup_xosc_blocking(pac.XOSC, pico::XOSC_CRYSTAL_FREQ.Hz())
		.map_err(|_x| false)
		.unwrap();

	// Configure watchdog tick generation to tick over every microsecond
	watchdog.enable_tick_generation((pico::XOSC_CRYSTAL_FREQ / 1_000_000) as u8);

	let mut clocks = hal::clocks::ClocksManager::new(pac.CLOCKS);

	let pll_sys = hal::pll::setup_pll_blocking(
		pac.PLL_SYS,
		xosc.operating_frequency(),
		hal::pll::PLLConfig {
			vco_freq: HertzU32::MHz(1512),
			refdiv: 1,
			post_div1: 6,
			post_div2: 2,
		},
		&mut clocks,
		&mut pac.RESETS,
	)
	.map_err(|_x| false)
	.unwrap();

	let pll_usb = hal::pll::setup_pll_blocking(
		pac.PLL_USB,
		xosc.operating_frequency(),
		hal::pll::common_configs::PLL_USB_48MHZ,
		&mut clocks,
		&mut pac.RESETS,
	)
	.map_err(|_x| false)
	.unwrap();

	clocks
		.init_default(&xosc, &pll_sys, &pll_usb)
		.map_err(|_x| false)
		.unwrap();

	info!("Clocks OK");

	// sio is the *Single-cycle Input/Output* peripheral. It has all our GPIO
	// pins, as well as the mailboxes we need to boot the second core.
	let mut sio = hal::sio::Sio::new(pac.SIO);

	// Configure and grab all the RP2040 pins the Pico exposes.
	let pins = pico::Pins::new(
		pac.IO_BANK0,
		pac.PADS_BANK0,
		sio.gpio_bank0,
		&mut pac.RESETS,
	);

	// Disable power save mode to force SMPS into low-efficiency, low-noise mode.
	let mut b_power_save = pins.b_power_save.into_push_pull_output();
	b_power_save.set_high().unwrap();

	// Give the three RGB pins and the two sync pins to PIO0 to output video
	let _red = pins.gpio0.into_function::<hal::gpio::FunctionPio0>();
	let _green = pins.gpio1.into_function::<hal::gpio::FunctionPio0>();
	let _blue = pins.gpio2.into_function::<hal::gpio::FunctionPio0>();
	let _h_sync = pins.gpio8.into_function::<hal::gpio::FunctionPio0>();
	let _v_sync = pins.gpio9.into_function::<hal::gpio::FunctionPio0>();

	// The mouse buttons short to ground when pressed
	let button_right = pins.gpio3.into_pull_up_input();
	let button_left = pins.gpio5.into_pull_up_input();

	// The quadrature signals are driven both ways by the mouse. Core 1
	// reads them straight out of the SIO input register.
	let _mouse_v = pins.gpio10.into_floating_input();
	let _mouse_vq = pins.gpio11.into_floating_input();
	let _mouse_hq = pins.gpio12.into_floating_input();
	let _mouse_h = pins.gpio13.into_floating_input();

	info!("Pins OK");

	// Start the decoder before the scanout pipeline. It only reads GPIOs, so
	// it doesn't care whether video is up yet.
	let mut mc = hal::multicore::Multicore::new(&mut pac.PSM, &mut pac.PPB, &mut sio.fifo);
	let cores = mc.cores();
	let core1 = &mut cores[1];
	let core1_stack = unsafe { &mut *core::ptr::addr_of_mut!(CORE1_STACK.mem) };
	core1
		.spawn(core1_stack, || mouse::decoder_task(&MOTION))
		.unwrap();

	info!("Decoder running on Core 1");

	// `main` never returns and nothing else names FRAMEBUFFER, so this
	// reference is unique.
	let framebuffer = unsafe { &mut *core::ptr::addr_of_mut!(FRAMEBUFFER) };

	vga::init(pac.PIO0, pac.DMA, &mut pac.RESETS, framebuffer.as_ptr());

	info!("VGA initialised");

	// A green border, one pixel wide, around a black screen.
	framebuffer.fill_rect(0, 0, WIDTH, HEIGHT, Colour::Green);
	framebuffer.fill_rect(1, 1, WIDTH - 2, HEIGHT - 2, Colour::Black);

	let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());
	let mut text: heapless::String<64> = heapless::String::new();
	let mut on_time: u32 = 0;

	loop {
		// Active-low buttons: report 1 while pressed.
		let left = u8::from(button_left.is_low().unwrap());
		let right = u8::from(button_right.is_low().unwrap());

		text.clear();
		write!(text, "Left Button {}      Right Button {}", left, right).unwrap();
		framebuffer.draw_string(20, 30, &text, Colour::Yellow);

		text.clear();
		let direction = if MOTION.vertical.direction() & 1 == 1 {
			"Up   "
		} else {
			"Down "
		};
		write!(
			text,
			"Last  Vertical  Move Was {}  Count = {}",
			direction,
			MOTION.vertical.count()
		)
		.unwrap();
		framebuffer.draw_string(16, 34, &text, Colour::Yellow);

		text.clear();
		let direction = if MOTION.horizontal.direction() & 1 == 1 {
			"Left "
		} else {
			"Right"
		};
		write!(
			text,
			"Last Horizontal Move Was {}  Count = {}",
			direction,
			MOTION.horizontal.count()
		)
		.unwrap();
		framebuffer.draw_string(16, 36, &text, Colour::Yellow);

		text.clear();
		// Roughly 50 repaints a second, so show hundredths in steps of two.
		write!(text, "Time On = {}.{}", on_time / 50, (on_time % 50) * 2).unwrap();
		framebuffer.draw_string(60, 2, &text, Colour::Magenta);

		delay.delay_ms(FRAME_MS);
		on_time = on_time.wrapping_add(1);
	}
}

// -----------------------------------------------------------------------------
// End of file
// -----------------------------------------------------------------------------
