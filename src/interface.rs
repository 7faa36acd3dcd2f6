//! Strip interface using SPI
use embedded_hal::{delay::DelayNs, spi::SpiBus};

use crate::error::{Error, Result};
use crate::LATCH_DELAY_US;

/// The connection to a WS2801 chain.
///
/// The chain has no chip select, no data/command line and no readback, so
/// the whole interface is an SPI bus (clock + data out) plus a delay
/// provider for the latch timing. Both are taken by value; the blanket
/// `&mut` impls of the embedded-hal traits let a caller keep ownership and
/// lend the bus to the strip instead.
pub struct StripInterface<SPI, DELAY> {
    /// SPI bus the pixel data is clocked out on
    spi: SPI,
    /// Delay provider for the post-frame latch wait
    delay: DELAY,
}

impl<SPI, DELAY> StripInterface<SPI, DELAY> {
    /// Create a new interface from its parts.
    pub fn new(spi: SPI, delay: DELAY) -> Self {
        StripInterface { spi, delay }
    }

    /// Release the bus and delay provider.
    pub fn release(self) -> (SPI, DELAY) {
        (self.spi, self.delay)
    }
}

impl<SPI, DELAY> StripInterface<SPI, DELAY>
where
    SPI: SpiBus,
    DELAY: DelayNs,
{
    /// Clock a complete frame out to the chain and wait out the latch time.
    ///
    /// The latch wait only happens after a successful transfer; on a bus
    /// error the frame never reached the LEDs and there is nothing to
    /// settle, so the error is returned immediately and the caller may
    /// retry.
    pub(crate) fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        if let Err(e) = self.spi.write(frame) {
            log::error!("SPI write error for {}-byte frame: {:?}", frame.len(), e);
            return Err(Error::BusWrite);
        }
        // SpiBus::write may return before the bytes hit the wire; the latch
        // timing starts once the bus is actually idle.
        if let Err(e) = self.spi.flush() {
            log::error!("SPI flush error after frame: {:?}", e);
            return Err(Error::BusWrite);
        }
        self.latch();
        Ok(())
    }

    /// Block until the chain has latched the shifted data.
    fn latch(&mut self) {
        self.delay.delay_us(LATCH_DELAY_US);
    }
}
