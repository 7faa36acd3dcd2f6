//! WS2801 strip driver implementation.
//!
//! [`Ws2801`] owns a frame buffer of one RGB triplet per pixel and the bus
//! interface the frame is pushed through. All mutators only touch the
//! buffer; nothing reaches the LEDs until [`Ws2801::show`] clocks the whole
//! frame out and waits for the chain to latch.
//!
//! Pixel colors can be addressed either as packed 24-bit `0xRRGGBB` values
//! or as individual 8-bit components; the component form is the primitive,
//! the packed form unpacks into it (see [`crate::color`]).

use alloc::vec;
use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiBus;

use crate::color;
use crate::error::{Error, Result};
use crate::interface::StripInterface;
use crate::BYTES_PER_PIXEL;

/// WS2801 LED strip driver.
///
/// ## Type Parameters
///
/// - `SPI` - SPI bus the pixel data is clocked out on
/// - `DELAY` - Delay provider for the latch timing
pub struct Ws2801<SPI, DELAY> {
    /// The bus interface
    interface: StripInterface<SPI, DELAY>,
    /// Frame buffer, one contiguous R, G, B triplet per pixel
    pixels: Vec<u8>,
    /// Number of pixels in the chain
    count: usize,
}

impl<SPI, DELAY> Ws2801<SPI, DELAY>
where
    SPI: SpiBus,
    DELAY: DelayNs,
{
    /// Create a driver for a chain of `count` pixels.
    ///
    /// The frame buffer is allocated once here and never resized; every
    /// pixel starts out black. Fails with [`Error::InvalidStripLength`]
    /// when `count` is zero.
    pub fn new(count: usize, spi: SPI, delay: DELAY) -> Result<Self> {
        Self::from_interface(count, StripInterface::new(spi, delay))
    }

    /// Create a driver from an existing bus interface.
    pub fn from_interface(count: usize, interface: StripInterface<SPI, DELAY>) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidStripLength);
        }
        log::debug!(
            "ws2801 strip: {} pixels, {}-byte frame",
            count,
            count * BYTES_PER_PIXEL
        );
        Ok(Ws2801 {
            interface,
            pixels: vec![0; count * BYTES_PER_PIXEL],
            count,
        })
    }

    /// Set pixel `n` to a packed 24-bit color.
    ///
    /// Bits above bit 23 are ignored. The strip itself does not change
    /// until [`Self::show`] is called.
    pub fn set_pixel(&mut self, n: usize, color: u32) -> Result<()> {
        let (r, g, b) = color::unpack(color);
        self.set_pixel_rgb(n, r, g, b)
    }

    /// Set pixel `n` to the given red, green and blue components.
    ///
    /// Fails with [`Error::PixelOutOfRange`] before touching the buffer
    /// when `n` is outside the chain.
    pub fn set_pixel_rgb(&mut self, n: usize, r: u8, g: u8, b: u8) -> Result<()> {
        self.check_index(n)?;
        let offset = n * BYTES_PER_PIXEL;
        self.pixels[offset] = r;
        self.pixels[offset + 1] = g;
        self.pixels[offset + 2] = b;
        Ok(())
    }

    /// Retrieve the packed 24-bit color of pixel `n`.
    pub fn get_pixel(&self, n: usize) -> Result<u32> {
        let (r, g, b) = self.get_pixel_rgb(n)?;
        Ok(color::pack(r as u32, g as u32, b as u32))
    }

    /// Retrieve the stored red, green and blue components of pixel `n`.
    pub fn get_pixel_rgb(&self, n: usize) -> Result<(u8, u8, u8)> {
        self.check_index(n)?;
        let offset = n * BYTES_PER_PIXEL;
        Ok((
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ))
    }

    /// Set every pixel to a packed 24-bit color.
    ///
    /// Every index is valid by construction, so unlike the per-pixel
    /// mutators this cannot fail.
    pub fn set_all(&mut self, color: u32) {
        let (r, g, b) = color::unpack(color);
        self.set_all_rgb(r, g, b);
    }

    /// Set every pixel to the given red, green and blue components.
    pub fn set_all_rgb(&mut self, r: u8, g: u8, b: u8) {
        for triplet in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            triplet[0] = r;
            triplet[1] = g;
            triplet[2] = b;
        }
    }

    /// Clear every pixel to black.
    pub fn clear(&mut self) {
        self.set_all(0);
    }

    /// Push the current frame out to the hardware.
    ///
    /// This is the only operation the strip can observe; it writes the
    /// whole frame in one bus transfer and then blocks for the latch time
    /// (see [`crate::LATCH_DELAY_US`]). On a bus error the frame buffer is
    /// left intact and the call may simply be retried.
    pub fn show(&mut self) -> Result<()> {
        log::debug!("pushing {} bytes to the strip", self.pixels.len());
        self.interface.write_frame(&self.pixels)
    }

    /// Number of pixels in the chain.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the chain has no pixels.
    ///
    /// Construction rejects zero-length strips, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Read-only view of the raw frame, `3 * len()` bytes in pixel order.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// Release the underlying bus interface.
    pub fn release(self) -> StripInterface<SPI, DELAY> {
        self.interface
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.count {
            Ok(())
        } else {
            Err(Error::PixelOutOfRange {
                index,
                count: self.count,
            })
        }
    }
}

#[cfg(feature = "smart-leds")]
impl<SPI, DELAY> smart_leds::SmartLedsWrite for Ws2801<SPI, DELAY>
where
    SPI: SpiBus,
    DELAY: DelayNs,
{
    type Error = Error;
    type Color = smart_leds::RGB8;

    /// Fill the frame from the iterator and push it out.
    ///
    /// At most `len()` colors are taken; pixels the iterator does not
    /// cover keep their previous color, exactly as a partial sequence of
    /// [`Ws2801::set_pixel`] calls would leave them.
    fn write<T, I>(&mut self, iterator: T) -> Result<()>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let count = self.count;
        for (n, color) in iterator.into_iter().take(count).enumerate() {
            let color = color.into();
            self.set_pixel_rgb(n, color.r, color.g, color.b)?;
        }
        self.show()
    }
}
