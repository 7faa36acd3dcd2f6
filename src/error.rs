//! Error type for strip operations.

use core::fmt;

/// A specialized result type for WS2801 strip operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when driving the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The strip was constructed with zero pixels.
    InvalidStripLength,
    /// A pixel index outside the strip was given.
    PixelOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of pixels in the strip.
        count: usize,
    },
    /// The SPI bus write failed while pushing a frame.
    BusWrite,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidStripLength => write!(f, "strip length must be at least one pixel"),
            Error::PixelOutOfRange { index, count } => {
                write!(f, "pixel index {index} outside strip of {count} pixels")
            }
            Error::BusWrite => write!(f, "SPI bus write failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
