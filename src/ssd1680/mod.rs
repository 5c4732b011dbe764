//! A Driver for black/white/red E-Ink displays with the SSD1680 controller
//!
//! The SSD1680 drives up to 176 source lines (byte packed along the RAM X
//! axis) and 296 gate lines (one RAM row each). Panels such as the 2.13"
//! 122x250 and the 2.9" 128x296 three color modules use it.
//!
//! # Example
//!
//!```rust, no_run
//!# use core::convert::Infallible;
//!# use ssd1680_epd::prelude::*;
//!# struct Bus;
//!# impl HardwareInterface for Bus {
//!#     type Error = Infallible;
//!#     fn write(&mut self, _: u8, _: Option<&[u8]>) -> Result<(), Infallible> { Ok(()) }
//!#     fn delay_ms(&mut self, _: u32) {}
//!#     fn set_reset(&mut self, _: bool) -> Result<(), Infallible> { Ok(()) }
//!#     fn is_busy(&mut self) -> Result<bool, Infallible> { Ok(false) }
//!# }
//!# fn main() -> Result<(), Error<Infallible>> {
//!# let interface = Bus;
//!// Setup EPD, 250x122 in landscape
//!let mut epd = Ssd1680::new(interface, 250, 122, Orientation::Rotate90)?;
//!
//!// One bit per pixel, MSB first
//!let size = epd.geometry().framebuffer_size();
//!let black = [0xFFu8; 4000];
//!let red = [0x00u8; 4000];
//!assert_eq!(size, black.len());
//!
//!// Display updated frame
//!epd.update_color_frame(&black, &red)?;
//!epd.refresh()?;
//!
//!// Set the EPD to sleep
//!epd.sleep()?;
//!# Ok(())
//!# }
//!```
use log::{debug, trace, warn};

use crate::color::{Color, Plane};
use crate::config::{Config, WakePolicy};
use crate::error::Error;
use crate::traits::{Command as _, HardwareInterface};

pub(crate) mod command;
pub mod geometry;
pub mod window;

use self::command::{
    BoosterPhase, BoosterSoftStart, BorderWaveForm, BorderWaveFormFixLevel, BorderWaveFormGs,
    BorderWaveFormVbd, Command, DisplayUpdateControl1, DisplayUpdateControl2, DriverOutput,
    RamOption,
};
pub use self::command::DeepSleepMode;
pub use self::geometry::{Geometry, Orientation};
pub use self::window::{RamPointer, Window};

/// Settle time around each edge of the reset pulse
const RESET_DELAY_MS: u32 = 10;

const BOOSTER_PHASE: BoosterPhase = BoosterPhase {
    driving_strength: 0b010,
    min_off_time: 0b0100,
};

const BOOSTER_SOFT_START: BoosterSoftStart = BoosterSoftStart {
    phases: [BOOSTER_PHASE; 3],
    duration: 0b0000_0101,
};

const BORDER_WAVEFORM: BorderWaveForm = BorderWaveForm {
    vbd: BorderWaveFormVbd::Gs,
    fix_level: BorderWaveFormFixLevel::Vss,
    follow_lut: true,
    gs_trans: BorderWaveFormGs::Lut1,
};

const UPDATE_CONTROL_1: DisplayUpdateControl1 = DisplayUpdateControl1 {
    red_ram: RamOption::Normal,
    bw_ram: RamOption::Normal,
    source_s8_to_s167: true,
};

type EpdResult<HW> = Result<(), Error<<HW as HardwareInterface>::Error>>;

/// Power state of the controller as far as the driver knows it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// The configuration sequence hasn't run to completion yet, or it failed
    Uninitialized,
    /// Reset and fully configured
    Ready,
    /// Woken from deep sleep by a hardware reset only, see [`WakePolicy::ResetOnly`]
    Woken,
    /// In deep sleep, only [`Ssd1680::wake_up`] and [`Ssd1680::init`] are accepted
    Sleeping,
}

/// Selects one of the two refresh sequences of the controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefreshMode {
    /// Refresh the whole panel with the temperature compensated waveform
    #[default]
    Full,
    /// Refresh only the RAM window set by [`Ssd1680::set_refresh_window`]
    Window,
}

impl RefreshMode {
    fn update_control(self) -> DisplayUpdateControl2 {
        match self {
            RefreshMode::Full => DisplayUpdateControl2::full(),
            RefreshMode::Window => DisplayUpdateControl2::window(),
        }
    }
}

/// Ssd1680 driver
///
/// Owns the hardware interface for its whole lifetime. All operations block
/// until the controller has cleared its busy line.
pub struct Ssd1680<HW> {
    interface: HW,
    geometry: Geometry,
    config: Config,
    state: PowerState,
}

impl<HW> Ssd1680<HW>
where
    HW: HardwareInterface,
{
    /// Creates a new driver with the default [`Config`]
    ///
    /// This already resets and initialises the device.
    pub fn new(
        interface: HW,
        width: u16,
        height: u16,
        orientation: Orientation,
    ) -> Result<Self, Error<HW::Error>> {
        Self::with_config(interface, width, height, orientation, Config::default())
    }

    /// Creates a new driver
    ///
    /// `width` and `height` are the logical resolution as seen after rotating
    /// by `orientation`. Fails with [`Error::UnsupportedResolution`] before
    /// touching the bus if the controller can't address it.
    pub fn with_config(
        interface: HW,
        width: u16,
        height: u16,
        orientation: Orientation,
        config: Config,
    ) -> Result<Self, Error<HW::Error>> {
        let geometry = Geometry::new(width, height, orientation)
            .ok_or(Error::UnsupportedResolution { width, height })?;

        let mut epd = Ssd1680 {
            interface,
            geometry,
            config,
            state: PowerState::Uninitialized,
        };

        epd.init()?;

        Ok(epd)
    }

    /// Hardware reset, software reset and the register configuration
    ///
    /// Already called from [`new`](Self::new). Call it again after a
    /// [`wake_up`](Self::wake_up) with [`WakePolicy::ResetOnly`] if the
    /// panel doesn't keep its registers in deep sleep, or to recover from a
    /// failed sequence.
    pub fn init(&mut self) -> EpdResult<HW> {
        debug!(
            "Initialising SSD1680: {}x{} {:?}, {} columns x {} rows",
            self.geometry.width(),
            self.geometry.height(),
            self.geometry.orientation(),
            self.geometry.column_count(),
            self.geometry.row_count()
        );
        self.state = PowerState::Uninitialized;

        self.hardware_reset()?;

        // reset s/w settings
        self.command(Command::SwReset)?;
        self.wait_busy()?;

        self.configure()?;

        self.state = PowerState::Ready;
        Ok(())
    }

    /// Let the device enter deep-sleep mode to save power.
    ///
    /// The deep sleep mode returns to standby with a hardware reset, see
    /// [`wake_up`](Self::wake_up). Does nothing if the device already sleeps.
    pub fn sleep(&mut self) -> EpdResult<HW> {
        if self.state == PowerState::Sleeping {
            debug!("SSD1680 already in deep sleep");
            return Ok(());
        }

        debug!("Entering deep sleep ({:?})", self.config.deep_sleep_mode);
        // the busy line stays meaningless until the next hardware reset
        self.cmd_with_data(Command::DeepSleepMode, &[self.config.deep_sleep_mode as u8])?;
        self.state = PowerState::Sleeping;
        Ok(())
    }

    /// Wakes the device up from sleep
    ///
    /// What happens after the hardware reset is decided by [`Config::wake_policy`].
    pub fn wake_up(&mut self) -> EpdResult<HW> {
        debug!("Waking SSD1680 ({:?})", self.config.wake_policy);
        match self.config.wake_policy {
            WakePolicy::ResetOnly => {
                self.hardware_reset()?;
                self.state = PowerState::Woken;
                Ok(())
            }
            WakePolicy::Reinitialize => self.init(),
        }
    }

    /// Transmit a full frame into one of the RAM planes
    ///
    /// `buffer` has to be exactly [`Geometry::framebuffer_size`] bytes long.
    /// Nothing is shown until [`refresh`](Self::refresh).
    pub fn send_plane(&mut self, buffer: &[u8], plane: Plane) -> EpdResult<HW> {
        self.check_awake()?;
        self.check_buffer(buffer)?;

        trace!("Writing {} bytes to the {:?} plane", buffer.len(), plane);
        self.set_ram_pointer(RamPointer::frame_start(&self.geometry))?;

        let command = match plane {
            Plane::BlackWhite => Command::WriteRamBlackWhite,
            Plane::Red => Command::WriteRamRed,
        };
        self.write_register(command, buffer)
    }

    /// Transmit both planes
    ///
    /// Both buffers are checked before anything is sent.
    pub fn update_color_frame(&mut self, black: &[u8], red: &[u8]) -> EpdResult<HW> {
        self.check_awake()?;
        self.check_buffer(black)?;
        self.check_buffer(red)?;

        self.send_plane(black, Plane::BlackWhite)?;
        self.send_plane(red, Plane::Red)
    }

    /// Fills both planes with `color`
    ///
    /// `scratch` has to be framebuffer sized; it is overwritten and used as
    /// the transfer buffer so no allocation is needed.
    pub fn clear_frame(&mut self, color: Color, scratch: &mut [u8]) -> EpdResult<HW> {
        self.check_awake()?;
        self.check_buffer(scratch)?;

        for plane in [Plane::BlackWhite, Plane::Red] {
            scratch.fill(color.get_byte_value(plane));
            self.send_plane(scratch, plane)?;
        }
        Ok(())
    }

    /// Restricts the active RAM window to the pixel rectangle spanned by
    /// `(x1, y1)` and `(x2, y2)` in logical coordinates, both corners included
    ///
    /// The byte packed axis is rounded to whole bytes. Follow up with
    /// [`refresh_window`](Self::refresh_window), and use
    /// [`restore_full_window`](Self::restore_full_window) before the next full frame.
    pub fn set_refresh_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> EpdResult<HW> {
        self.check_awake()?;

        let window = Window::from_pixels(self.geometry.orientation(), x1, y1, x2, y2);
        debug!("Setting refresh window {:?}", window);
        self.set_window(window)
    }

    /// Sets the RAM window back to the whole panel
    pub fn restore_full_window(&mut self) -> EpdResult<HW> {
        self.check_awake()?;
        self.set_window(Window::full(&self.geometry))
    }

    /// Displays the frame data from RAM on the whole panel
    ///
    /// This function waits until the device isn't busy anymore, which takes
    /// a few seconds on a three color panel.
    pub fn refresh(&mut self) -> EpdResult<HW> {
        self.display_frame(RefreshMode::Full)
    }

    /// Displays the frame data of the window set by [`set_refresh_window`](Self::set_refresh_window)
    pub fn refresh_window(&mut self) -> EpdResult<HW> {
        self.display_frame(RefreshMode::Window)
    }

    /// Runs the refresh sequence of `mode` and waits for it to finish
    pub fn display_frame(&mut self, mode: RefreshMode) -> EpdResult<HW> {
        self.check_awake()?;

        debug!("Refreshing display ({:?})", mode);
        self.cmd_with_data(Command::DisplayUpdateControl2, &[mode.update_control().0])?;
        self.command(Command::MasterActivation)?;
        self.wait_busy()
    }

    /// Wait until the display has stopped processing data
    ///
    /// You can call this to make sure a frame is displayed before going further
    pub fn wait_until_idle(&mut self) -> EpdResult<HW> {
        self.check_awake()?;
        self.wait_busy()
    }

    /// Checks if device is still busy
    pub fn is_busy(&mut self) -> Result<bool, Error<HW::Error>> {
        Ok(self.interface.is_busy()?)
    }

    /// Puts the device to sleep and gives back the hardware interface
    pub fn deinit(mut self) -> Result<HW, Error<HW::Error>> {
        self.sleep()?;
        Ok(self.interface)
    }

    /// Gives back the hardware interface without talking to the device
    pub fn release(self) -> HW {
        self.interface
    }

    /// RAM layout derived from resolution and orientation
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Get the width of the display
    pub fn width(&self) -> u16 {
        self.geometry.width()
    }

    /// Get the height of the display
    pub fn height(&self) -> u16 {
        self.geometry.height()
    }

    /// Get the orientation the display was set up with
    pub fn orientation(&self) -> Orientation {
        self.geometry.orientation()
    }

    /// Power state as last set by the driver
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    /// Configuration the driver was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Pulses the reset line and waits for the controller to boot
    fn hardware_reset(&mut self) -> EpdResult<HW> {
        trace!("Resetting SSD1680");
        self.interface.set_reset(false)?;
        self.interface.delay_ms(RESET_DELAY_MS);

        self.interface.set_reset(true)?;
        self.interface.delay_ms(RESET_DELAY_MS);

        self.interface.set_reset(false)?;
        self.interface.delay_ms(RESET_DELAY_MS);

        // no SPI before the internal boot has finished
        self.wait_busy()?;
        self.interface.delay_ms(RESET_DELAY_MS);
        Ok(())
    }

    fn configure(&mut self) -> EpdResult<HW> {
        let driver_output = DriverOutput {
            mux: self.geometry.row_count() - 1,
            gate_g1_first: false,
            interlaced: false,
            scan_bottom_up: false,
        };
        self.write_register(Command::DriverOutputControl, &driver_output.to_bytes())?;

        self.write_register(
            Command::BoosterSoftStartControl,
            &BOOSTER_SOFT_START.to_bytes(),
        )?;

        let entry_mode = self.geometry.orientation().data_entry_mode();
        self.write_register(Command::DataEntryModeSetting, &[entry_mode.to_u8()])?;

        self.set_window(Window::full(&self.geometry))?;

        self.write_register(Command::BorderWaveformControl, &[BORDER_WAVEFORM.to_u8()])?;

        self.write_register(Command::DisplayUpdateControl1, &UPDATE_CONTROL_1.to_bytes())?;
        self.write_register(
            Command::DisplayUpdateControl2,
            &[DisplayUpdateControl2::full().0],
        )
    }

    fn set_window(&mut self, window: Window) -> EpdResult<HW> {
        self.write_register(Command::SetRamXAddressStartEndPosition, &window.x_bytes())?;
        self.write_register(Command::SetRamYAddressStartEndPosition, &window.y_bytes())
    }

    fn set_ram_pointer(&mut self, pointer: RamPointer) -> EpdResult<HW> {
        self.write_register(Command::SetRamXAddressCounter, &pointer.x_bytes())?;
        self.write_register(Command::SetRamYAddressCounter, &pointer.y_bytes())
    }

    fn check_awake(&self) -> EpdResult<HW> {
        if self.state == PowerState::Sleeping {
            warn!("SSD1680 is in deep sleep, wake it up first");
            return Err(Error::Asleep);
        }
        Ok(())
    }

    fn check_buffer(&self, buffer: &[u8]) -> EpdResult<HW> {
        let expected = self.geometry.framebuffer_size();
        if buffer.len() != expected {
            warn!(
                "Rejecting buffer of {} bytes, the framebuffer has {} bytes",
                buffer.len(),
                expected
            );
            return Err(Error::BufferSize {
                expected,
                actual: buffer.len(),
            });
        }
        Ok(())
    }

    /// Polls the busy line until it clears or the configured timeout is reached
    fn wait_busy(&mut self) -> EpdResult<HW> {
        let interval = self.config.busy_poll_interval_ms;
        let mut waited_ms: u32 = 0;

        while self.interface.is_busy()? {
            if let Some(timeout) = self.config.busy_timeout_ms {
                if waited_ms >= timeout {
                    warn!("SSD1680 still busy after {} ms", waited_ms);
                    return Err(Error::BusyTimeout { waited_ms });
                }
            }
            self.interface.delay_ms(interval);
            // a zero interval still has to run into the timeout
            waited_ms = waited_ms.saturating_add(interval.max(1));
        }

        if waited_ms > 0 {
            trace!("Busy for {} ms", waited_ms);
        }
        Ok(())
    }

    /// Sends a register write and waits for the controller to process it
    fn write_register(&mut self, command: Command, data: &[u8]) -> EpdResult<HW> {
        self.cmd_with_data(command, data)?;
        self.wait_busy()
    }

    fn command(&mut self, command: Command) -> EpdResult<HW> {
        trace!("{:?}", command);
        self.interface.write(command.address(), None)?;
        Ok(())
    }

    fn cmd_with_data(&mut self, command: Command, data: &[u8]) -> EpdResult<HW> {
        trace!("{:?}: {} bytes", command, data.len());
        self.interface.write(command.address(), Some(data))?;
        Ok(())
    }
}
