//! LED calibration commands
//!
//! These commands prompt for their values interactively, reading further
//! lines from the operator before they return.

use crate::Fixed;
use crate::board::Board;
use crate::color::{COLOR_NAMES, Matrix3};
use crate::config::ModuleConfig;
use crate::console::Console;
use crate::error::Error;

use super::{channel_index, led_index};

const ENTER_MATRIX: &str = "Enter correction matrix";
const ENTER_MAX_Y: &str = "Enter maximum Y value";
const MATRIX_IS_SINGULAR: &str = "Calibration values do not form an invertible matrix";

const ASK_X: &str = "x (in 65536ths) = ";
const ASK_Y: &str = "y (in 65536ths) = ";
const ASK_LUMINANCE_INT: &str = "Y (integer part) = ";
const ASK_LUMINANCE_FRACT: &str = "Y (fractional part in 65536ths) = ";

/// `C <led>`
///
/// Asks for the chromaticity and peak luminance of red, green and blue and
/// stores the inverse of
///
/// ```text
/// | x_r x_g x_b |
/// | y_r y_g y_b |
/// |  1   1   1  |
/// ```
///
/// as the LED's correction matrix. Nothing is stored unless all values were
/// read and the matrix could be inverted.
pub(super) fn calibrate_led<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
    args: &[i32],
) -> Result<(), Error> {
    let &[led] = args else {
        return Err(Error::MissingArguments);
    };
    let led = led_index(console, led)?;

    let mut matrix: Matrix3 = [Fixed::ONE; 9];
    let mut peak_y = [Fixed::ZERO; 3];

    for (color, name) in COLOR_NAMES.iter().enumerate() {
        console.say(name);
        for (row, prompt) in [ASK_X, ASK_Y].into_iter().enumerate() {
            matrix[3 * row + color] = Fixed::from_fraction(console.ask_int(prompt, 10));
        }

        let integer = console.ask_int(ASK_LUMINANCE_INT, 10);
        let fraction = console.ask_int(ASK_LUMINANCE_FRACT, 10);
        peak_y[color] = Fixed::from_int(integer) + Fixed::from_fraction(fraction);
    }

    let Some(inverse) = console.board().invert_3x3(&matrix) else {
        console.say(MATRIX_IS_SINGULAR);
        return Err(Error::SingularMatrix);
    };

    let info = &mut config.leds[led];
    info.color_matrix = inverse;
    info.peak_y = peak_y;
    Ok(())
}

/// `m <led>`: enter the nine raw 16.16 matrix entries, row-major
pub(super) fn set_correction<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
    args: &[i32],
) -> Result<(), Error> {
    let &[led] = args else {
        return Err(Error::MissingArguments);
    };
    let led = led_index(console, led)?;

    console.say(ENTER_MATRIX);
    let mut matrix: Matrix3 = [Fixed::ZERO; 9];
    for entry in &mut matrix {
        *entry = Fixed::from_raw(console.ask_int("", 10));
    }

    config.leds[led].color_matrix = matrix;
    Ok(())
}

/// `y <led-index>`: enter the three raw 16.16 peak luminances in hex
pub(super) fn set_max_y<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
    args: &[i32],
) -> Result<(), Error> {
    let &[led] = args else {
        return Err(Error::MissingArguments);
    };
    let led = led_index(console, led)?;

    console.say(ENTER_MAX_Y);
    let mut peak_y = [Fixed::ZERO; 3];
    for value in &mut peak_y {
        *value = Fixed::from_raw(console.ask_int("", 16));
    }

    config.leds[led].peak_y = peak_y;
    Ok(())
}

/// `p <led> <r-chan> <g-chan> <b-chan>`
pub(super) fn set_pwm_channels<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
    args: &[i32],
) -> Result<(), Error> {
    let &[led, red, green, blue] = args else {
        return Err(Error::MissingArguments);
    };
    let led = led_index(console, led)?;

    let mut channels = [0; 3];
    for (slot, value) in channels.iter_mut().zip([red, green, blue]) {
        *slot = channel_index(console, value)?;
    }

    config.leds[led].channels = channels;
    Ok(())
}
