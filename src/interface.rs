use crate::error::ErrorKind;
use crate::traits::HardwareInterface;
use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType as PinErrorType, InputPin, OutputPin},
    spi::{ErrorType as SpiErrorType, SpiDevice},
};

/// Error of a [`DisplayInterface`] built from the given SPI device and pins
pub type InterfaceError<SPI, BUSY, DC, RST> = ErrorKind<
    <SPI as SpiErrorType>::Error,
    <BUSY as PinErrorType>::Error,
    <DC as PinErrorType>::Error,
    <RST as PinErrorType>::Error,
>;

/// The SSD1680 busy line is high while the controller is working
const IS_BUSY_LOW: bool = false;

/// The connection interface of the SSD1680 over `embedded-hal`
///
/// Owns the SPI device (chip select is handled by the `SpiDevice`), the busy
/// input, the Data/Command output, the active-low reset output and a delay.
pub struct DisplayInterface<SPI, BUSY, DC, RST, DELAY> {
    /// SPI
    spi: SPI,
    /// High for busy, Wait until display is ready!
    busy: BUSY,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
    delay: DELAY,
}

impl<SPI, BUSY, DC, RST, DELAY> DisplayInterface<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Creates a new `DisplayInterface` struct
    pub fn new(spi: SPI, busy: BUSY, dc: DC, rst: RST, delay: DELAY) -> Self {
        DisplayInterface {
            spi,
            busy,
            dc,
            rst,
            delay,
        }
    }

    /// Gives back the SPI device, pins and delay
    pub fn release(self) -> (SPI, BUSY, DC, RST, DELAY) {
        (self.spi, self.busy, self.dc, self.rst, self.delay)
    }

    /// Basic function for sending a command byte
    fn cmd(&mut self, command: u8) -> Result<(), InterfaceError<SPI, BUSY, DC, RST>> {
        // low for commands
        self.dc.set_low().map_err(ErrorKind::DcError)?;

        // Transfer the command over spi
        self.write_spi(&[command])
    }

    /// Basic function for sending an array of u8-values of data over spi
    fn data(&mut self, data: &[u8]) -> Result<(), InterfaceError<SPI, BUSY, DC, RST>> {
        // high for data
        self.dc.set_high().map_err(ErrorKind::DcError)?;

        self.write_spi(data)
    }

    // spi write helper/abstraction function
    fn write_spi(&mut self, data: &[u8]) -> Result<(), InterfaceError<SPI, BUSY, DC, RST>> {
        // transfer spi data
        // Be careful!! Linux has a default limit of 4096 bytes per spi transfer
        // see https://raspberrypi.stackexchange.com/questions/65595/spi-transfer-fails-with-buffer-size-greater-than-4096
        if cfg!(target_os = "linux") {
            for data_chunk in data.chunks(4096) {
                self.spi.write(data_chunk).map_err(ErrorKind::SpiError)?;
            }
            Ok(())
        } else {
            self.spi.write(data).map_err(ErrorKind::SpiError)
        }
    }
}

impl<SPI, BUSY, DC, RST, DELAY> HardwareInterface for DisplayInterface<SPI, BUSY, DC, RST, DELAY>
where
    SPI: SpiDevice,
    BUSY: InputPin,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Error = InterfaceError<SPI, BUSY, DC, RST>;

    fn write(&mut self, command: u8, data: Option<&[u8]>) -> Result<(), Self::Error> {
        self.cmd(command)?;

        match data {
            Some(data) if !data.is_empty() => self.data(data),
            // release the data/command line even without payload
            _ => self.dc.set_high().map_err(ErrorKind::DcError),
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn set_reset(&mut self, asserted: bool) -> Result<(), Self::Error> {
        if asserted {
            self.rst.set_low().map_err(ErrorKind::RstError)
        } else {
            self.rst.set_high().map_err(ErrorKind::RstError)
        }
    }

    /// Checks if device is still busy
    fn is_busy(&mut self) -> Result<bool, Self::Error> {
        let level_high = self.busy.is_high().map_err(ErrorKind::BusyError)?;
        Ok(level_high != IS_BUSY_LOW)
    }
}
