//! Runtime policies of the driver

use crate::ssd1680::DeepSleepMode;

/// Default delay between two polls of the busy line
pub const DEFAULT_BUSY_POLL_INTERVAL_MS: u32 = 2;

/// What [`wake_up`](crate::ssd1680::Ssd1680::wake_up) does after the hardware reset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WakePolicy {
    /// Only pulse the reset line.
    ///
    /// Whether the register configuration survives deep sleep depends on the
    /// panel, so the display reports [`PowerState::Woken`](crate::ssd1680::PowerState::Woken)
    /// afterwards and [`init`](crate::ssd1680::Ssd1680::init) is left to the caller.
    #[default]
    ResetOnly,
    /// Pulse the reset line, then run the software reset and the full
    /// register configuration again.
    Reinitialize,
}

/// Driver configuration
///
/// `Config::default()` polls the busy line every 2ms without a timeout,
/// only resets the controller on wake up and keeps the RAM during deep sleep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Delay between two polls of the busy line in ms
    pub busy_poll_interval_ms: u32,
    /// Give up waiting for the busy line after this many ms.
    /// `None` waits forever, which hangs on a stuck busy line.
    pub busy_timeout_ms: Option<u32>,
    /// Behaviour of `wake_up`
    pub wake_policy: WakePolicy,
    /// Mode sent with the deep sleep command
    pub deep_sleep_mode: DeepSleepMode,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Same as `Config::default()`, usable in const context
    pub const fn new() -> Self {
        Config {
            busy_poll_interval_ms: DEFAULT_BUSY_POLL_INTERVAL_MS,
            busy_timeout_ms: None,
            wake_policy: WakePolicy::ResetOnly,
            deep_sleep_mode: DeepSleepMode::RetainRam,
        }
    }

    /// Sets the delay between two polls of the busy line
    pub const fn busy_poll_interval_ms(mut self, interval: u32) -> Self {
        self.busy_poll_interval_ms = interval;
        self
    }

    /// Sets the busy timeout, `None` waits forever
    pub const fn busy_timeout_ms(mut self, timeout: Option<u32>) -> Self {
        self.busy_timeout_ms = timeout;
        self
    }

    /// Sets what `wake_up` does after the hardware reset
    pub const fn wake_policy(mut self, policy: WakePolicy) -> Self {
        self.wake_policy = policy;
        self
    }

    /// Sets the mode sent with the deep sleep command
    pub const fn deep_sleep_mode(mut self, mode: DeepSleepMode) -> Self {
        self.deep_sleep_mode = mode;
        self
    }
}
