//! WS2801 RGB LED Strip Driver
//!
//! Driver for chains of WS2801-family addressable RGB LEDs, such as the
//! [Adafruit 12mm diffused pixel strands](https://www.adafruit.com/product/322).
//!
//! The WS2801 shifts 24 bits per LED (one byte each for red, green and blue)
//! down a two-wire serial bus and latches the shifted data onto the LEDs once
//! the clock line stays idle. There is no command set and no readback: the
//! whole protocol is "clock out `3 * n` bytes, then leave the bus alone long
//! enough for the chain to latch".
//!
//! This driver keeps a frame buffer in memory and pushes it out in one bus
//! write:
//!
//! 1. create a [`Ws2801`] with the pixel count, an SPI bus and a delay
//!    provider,
//! 1. set pixel colors with [`Ws2801::set_pixel`] and friends (nothing
//!    reaches the hardware yet),
//! 1. call [`Ws2801::show`] to transmit the frame and wait out the latch
//!    time.
//!
//! ### Usage
//!
//! ```rust,ignore
//! use ws2801::{color, Ws2801};
//!
//! let mut strip = Ws2801::new(25, spi, delay)?;
//! strip.set_pixel(0, color::pack(255, 0, 0))?;
//! strip.set_pixel_rgb(1, 0, 255, 0)?;
//! strip.show()?;
//! ```
//!
//! With the default `smart-leds` feature the strip also implements
//! [`smart_leds::SmartLedsWrite`], so iterator-based animation code works
//! unchanged.
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

extern crate alloc;

pub mod color;
pub mod driver;
pub mod error;

pub mod interface;

/// Data bytes per LED: one each for red, green and blue.
pub const BYTES_PER_PIXEL: usize = 3;

/// Minimum bus idle time after a frame, in microseconds.
///
/// The WS2801 latches shifted data onto the LEDs when the clock line has
/// been idle for 500 µs; 2 ms gives a comfortable margin before the next
/// frame may start.
pub const LATCH_DELAY_US: u32 = 2_000;

pub use crate::driver::Ws2801;
pub use crate::error::{Error, Result};
pub use crate::interface::StripInterface;

/// Useful exports
pub mod prelude {
    pub use crate::color::{pack, unpack};
    pub use crate::driver::Ws2801;
    pub use crate::error::{Error, Result};
}
