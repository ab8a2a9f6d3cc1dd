//! Command handlers
//!
//! The handler set is closed: every registered descriptor names one
//! [`CommandId`], and dispatch is a `match` over it. Handlers validate
//! their arguments, print a bound-specific message when a check fails, and
//! either edit the configuration or call into the board.

mod calibration;
mod module;
mod output;
mod session;
mod storage;

use crate::board::Board;
use crate::config::{HEAT_SENSOR_COUNT, ModuleConfig, PWM_CHANNEL_COUNT, RGB_LED_COUNT};
use crate::console::{CRLF, Console};
use crate::error::Error;
use crate::validate::{check_channel_index, check_led_index, check_sensor_index, check_u16};

/// Identifies the handler of a console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    SetAddress,
    SetBrightness,
    SetColor,
    CalibrateLed,
    Echo,
    PasteFile,
    SetHeatLimit,
    ReloadConfig,
    SetCorrection,
    SetPwmChannels,
    Quit,
    Reset,
    SaveConfig,
    SetMaxY,
    Help,
}

impl CommandId {
    /// Run the handler with already parsed arguments
    pub(crate) fn run<B: Board>(
        self,
        console: &mut Console<B>,
        config: &mut ModuleConfig,
        args: &[i32],
    ) -> Result<(), Error> {
        match self {
            Self::SetAddress => module::set_address(console, config, args),
            Self::SetHeatLimit => module::set_heat_limit(console, config, args),
            Self::SetBrightness => output::set_brightness(console, args),
            Self::SetColor => output::set_color(console, config, args),
            Self::CalibrateLed => calibration::calibrate_led(console, config, args),
            Self::SetCorrection => calibration::set_correction(console, config, args),
            Self::SetMaxY => calibration::set_max_y(console, config, args),
            Self::SetPwmChannels => calibration::set_pwm_channels(console, config, args),
            Self::ReloadConfig => storage::reload_config(console, config),
            Self::SaveConfig => storage::save_config(console, config),
            Self::Echo => session::echo(console),
            Self::PasteFile => session::paste_file(console, config),
            Self::Quit => Ok(()),
            Self::Reset => session::reset(console),
            Self::Help => session::help(console),
        }
    }
}

/// Validate a PWM channel index, reporting the valid range on failure
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_index<B: Board>(console: &mut Console<B>, value: i32) -> Result<u8, Error> {
    if let Err(error) = check_channel_index(value) {
        console.print(format_args!(
            "PWM channel index out of range (0 to {}){CRLF}",
            PWM_CHANNEL_COUNT - 1
        ));
        return Err(error);
    }
    Ok(value as u8)
}

/// Validate an RGB LED index, reporting the valid range on failure
#[allow(clippy::cast_sign_loss)]
fn led_index<B: Board>(console: &mut Console<B>, value: i32) -> Result<usize, Error> {
    if let Err(error) = check_led_index(value) {
        console.print(format_args!(
            "RGB LED index out of range (0 to {}){CRLF}",
            RGB_LED_COUNT - 1
        ));
        return Err(error);
    }
    Ok(value as usize)
}

/// Validate a heat sensor index, reporting the valid range on failure
#[allow(clippy::cast_sign_loss)]
fn sensor_index<B: Board>(console: &mut Console<B>, value: i32) -> Result<usize, Error> {
    if let Err(error) = check_sensor_index(value) {
        console.print(format_args!(
            "Heat sensor index out of range (0 to {}){CRLF}",
            HEAT_SENSOR_COUNT - 1
        ));
        return Err(error);
    }
    Ok(value as usize)
}

/// Validate a 16-bit quantity; `what` names it in the diagnostic
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn short_value<B: Board>(console: &mut Console<B>, value: i32, what: &str) -> Result<u16, Error> {
    if let Err(error) = check_u16(value) {
        console.print(format_args!("{what} out of range (0 to 0xffff){CRLF}"));
        return Err(error);
    }
    Ok(value as u16)
}
