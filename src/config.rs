//! Module configuration edited by the console
//!
//! The console is the only writer while a session is active; persistence is
//! delegated to [`ConfigStorage`](crate::board::ConfigStorage).

use crate::Fixed;
use crate::color::{IDENTITY, Matrix3};

/// Number of PWM channels driven by one module
pub const PWM_CHANNEL_COUNT: usize = 8;

/// Number of RGB LEDs wired to the PWM channels
pub const RGB_LED_COUNT: usize = 2;

/// Number of heat sensors on the module
pub const HEAT_SENSOR_COUNT: usize = 4;

/// Highest assignable bus address
pub const MAX_ADDRESS: u8 = 0xfd;

/// Address every module listens on
pub const BROADCAST_ADDRESS: u8 = 0xfd;

/// Calibration and wiring of one RGB LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedInfo {
    /// PWM channel for red, green and blue
    pub channels: [u8; 3],
    /// Inverse of the calibrated chromaticity matrix, row-major
    pub color_matrix: Matrix3,
    /// Peak luminance of red, green and blue
    pub peak_y: [Fixed; 3],
}

impl LedInfo {
    /// Uncalibrated LED using three consecutive channels from `first_channel`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn uncalibrated(first_channel: usize) -> Self {
        let first = first_channel as u8;
        Self {
            channels: [first, first + 1, first + 2],
            color_matrix: IDENTITY,
            peak_y: [Fixed::ONE; 3],
        }
    }
}

/// In-memory configuration of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Bus address, `0x00..=0xfd`
    pub address: u8,
    /// Per-sensor heat limit
    pub heat_limits: [u16; HEAT_SENSOR_COUNT],
    /// Per-LED calibration
    pub leds: [LedInfo; RGB_LED_COUNT],
}

impl ModuleConfig {
    pub const fn new() -> Self {
        let mut leds = [LedInfo::uncalibrated(0); RGB_LED_COUNT];
        let mut i = 0;
        while i < RGB_LED_COUNT {
            leds[i] = LedInfo::uncalibrated(3 * i);
            i += 1;
        }

        Self {
            address: 0,
            heat_limits: [u16::MAX; HEAT_SENSOR_COUNT],
            leds,
        }
    }

    /// Check that the configuration may be persisted
    pub fn is_valid(&self) -> bool {
        self.address <= MAX_ADDRESS
            && self
                .leds
                .iter()
                .flat_map(|led| led.channels)
                .all(|channel| usize::from(channel) < PWM_CHANNEL_COUNT)
    }

    pub const fn is_broadcast(&self) -> bool {
        self.address == BROADCAST_ADDRESS
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self::new()
    }
}
