/// All commands need to have this trait which gives the address of the command
/// which needs to be send via SPI with activated CommandsPin (Data/Command Pin in CommandMode)
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// The four primitive operations the driver needs from the hardware.
///
/// [`DisplayInterface`](crate::interface::DisplayInterface) implements this for
/// `embedded-hal` SPI devices and pins. Implement it yourself to drive the
/// controller over anything else, or to record the traffic in tests.
pub trait HardwareInterface {
    /// Error reported by the underlying transport
    type Error;

    /// Sends `command` with the Data/Command line in command mode, then `data`
    /// (if any) with the line in data mode.
    ///
    /// `None` and an empty slice both mean "command without payload".
    fn write(&mut self, command: u8, data: Option<&[u8]>) -> Result<(), Self::Error>;

    /// Blocks for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Asserts (`true`) or releases (`false`) the controller's reset input.
    ///
    /// This is the logical level: an active-low reset pin is driven low when asserted.
    fn set_reset(&mut self, asserted: bool) -> Result<(), Self::Error>;

    /// Returns `true` while the controller reports busy
    fn is_busy(&mut self) -> Result<bool, Self::Error>;
}

impl<T: HardwareInterface + ?Sized> HardwareInterface for &mut T {
    type Error = T::Error;

    fn write(&mut self, command: u8, data: Option<&[u8]>) -> Result<(), Self::Error> {
        (**self).write(command, data)
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn set_reset(&mut self, asserted: bool) -> Result<(), Self::Error> {
        (**self).set_reset(asserted)
    }

    fn is_busy(&mut self) -> Result<bool, Self::Error> {
        (**self).is_busy()
    }
}
