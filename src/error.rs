use core::fmt::{Debug, Display, Formatter};

/// Epd error type
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Error<E> {
    /// The hardware interface failed; the running sequence was abandoned
    Interface(E),

    /// A plane buffer didn't match the framebuffer size of the display
    BufferSize {
        /// framebuffer size in bytes
        expected: usize,
        /// length of the buffer that was handed in
        actual: usize,
    },

    /// The busy line didn't clear within the configured timeout
    BusyTimeout {
        /// milliseconds spent polling before giving up
        waited_ms: u32,
    },

    /// The display is in deep sleep and has to be woken up first
    Asleep,

    /// The resolution doesn't fit into the controller's RAM addressing
    UnsupportedResolution {
        /// requested width in pixels
        width: u16,
        /// requested height in pixels
        height: u16,
    },
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Interface(err)
    }
}

impl<E: Display> Display for Error<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(err) => write!(f, "hardware interface error: {}", err),
            Self::BufferSize { expected, actual } => write!(
                f,
                "buffer of {} bytes doesn't match the framebuffer size of {} bytes",
                actual, expected
            ),
            Self::BusyTimeout { waited_ms } => {
                write!(f, "display still busy after {} ms", waited_ms)
            }
            Self::Asleep => write!(f, "display is in deep sleep"),
            Self::UnsupportedResolution { width, height } => write!(
                f,
                "resolution {}x{} exceeds the controller's RAM addressing",
                width, height
            ),
        }
    }
}

impl<E: Debug + Display> core::error::Error for Error<E> {}

/// Errors of the [`DisplayInterface`](crate::interface::DisplayInterface)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ErrorKind<SpiE, BusyE, DcE, RstE> {
    /// Encountered an SPI error
    SpiError(SpiE),

    /// Encountered an error on Busy GPIO
    BusyError(BusyE),

    /// Encountered an error on DC GPIO
    DcError(DcE),

    /// Encountered an error on RST GPIO
    RstError(RstE),
}

impl<SpiE, BusyE, DcE, RstE> Display for ErrorKind<SpiE, BusyE, DcE, RstE>
where
    SpiE: Debug,
    BusyE: Debug,
    DcE: Debug,
    RstE: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => write!(f, "SPI error: {:?}", err),
            Self::BusyError(err) => write!(f, "busy pin error: {:?}", err),
            Self::DcError(err) => write!(f, "DC pin error: {:?}", err),
            Self::RstError(err) => write!(f, "reset pin error: {:?}", err),
        }
    }
}

impl<SpiE, BusyE, DcE, RstE> core::error::Error for ErrorKind<SpiE, BusyE, DcE, RstE>
where
    SpiE: Debug,
    BusyE: Debug,
    DcE: Debug,
    RstE: Debug,
{
}
