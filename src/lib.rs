//! A simple Driver for SSD1680 based black/white/red E-Ink Displays via SPI
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available
//! - SPI_MODE_0 is used (CPHL = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//! - Chip select is handled by the `SpiDevice`
//!
//! ### Other....
//!
//! - Buffersize: every plane buffer has to be exactly
//!   [`Geometry::framebuffer_size`](ssd1680::Geometry::framebuffer_size) bytes,
//!   which is `ceil(packed side / 8) * other side` of the display
//! - Pixels are packed MSB first along the controller's source axis. For
//!   `Rotate0`/`Rotate180` that is the logical x axis, for `Rotate90`/`Rotate270`
//!   the logical y axis.
//!
//! # Examples
//!
//! ```ignore
//! use ssd1680_epd::prelude::*;
//!
//! let interface = DisplayInterface::new(spi, busy, dc, rst, delay);
//! let mut epd = Ssd1680::new(interface, 250, 122, Orientation::Rotate90)?;
//!
//! let mut scratch = [0u8; 4000];
//! epd.clear_frame(Color::White, &mut scratch)?;
//!
//! // draw something into the buffers
//!
//! epd.update_color_frame(&black, &red)?;
//! epd.refresh()?;
//!
//! epd.sleep()?;
//! ```
//!
//! The log crate is used for diagnostics; install any logger to see them.
#![no_std]

#[cfg(test)]
extern crate alloc;

mod traits;

pub mod color;
pub mod config;
pub mod error;

/// Interface for the physical connection between display and the controlling device
pub mod interface;

pub mod ssd1680;

pub use crate::traits::HardwareInterface;

/// Includes everything important besides the chosen display
pub mod prelude {
    pub use crate::color::{Color, Plane};
    pub use crate::config::{Config, WakePolicy};
    pub use crate::error::Error;
    pub use crate::interface::DisplayInterface;
    pub use crate::ssd1680::{DeepSleepMode, Orientation, PowerState, RefreshMode, Ssd1680};
    pub use crate::traits::HardwareInterface;
    pub use crate::SPI_MODE;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spi_mode_0() {
        assert_eq!(SPI_MODE, embedded_hal::spi::MODE_0);
    }
}
