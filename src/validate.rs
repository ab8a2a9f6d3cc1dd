//! Range checks for command arguments
//!
//! The checks only decide pass or fail; the calling command prints the
//! bound-specific diagnostic.

use crate::config::{HEAT_SENSOR_COUNT, PWM_CHANNEL_COUNT, RGB_LED_COUNT};
use crate::error::Error;

/// Exclusive upper bound of an unsigned 16-bit value
pub const U16_BOUND: i64 = 0x1_0000;

/// Check that `0 <= value < bound`
#[allow(clippy::cast_lossless)]
pub const fn check_range(value: i32, bound: i64) -> Result<(), Error> {
    if value < 0 || value as i64 >= bound {
        Err(Error::ArgumentOutOfRange)
    } else {
        Ok(())
    }
}

/// Check a module-local PWM channel index
#[allow(clippy::cast_possible_wrap)]
pub const fn check_channel_index(value: i32) -> Result<(), Error> {
    check_range(value, PWM_CHANNEL_COUNT as i64)
}

/// Check an RGB LED index
#[allow(clippy::cast_possible_wrap)]
pub const fn check_led_index(value: i32) -> Result<(), Error> {
    check_range(value, RGB_LED_COUNT as i64)
}

/// Check a heat sensor index
#[allow(clippy::cast_possible_wrap)]
pub const fn check_sensor_index(value: i32) -> Result<(), Error> {
    check_range(value, HEAT_SENSOR_COUNT as i64)
}

/// Check that the value fits into an unsigned 16-bit number
pub const fn check_u16(value: i32) -> Result<(), Error> {
    check_range(value, U16_BOUND)
}
