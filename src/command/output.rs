//! Commands that drive the PWM outputs directly

use crate::Fixed;
use crate::board::Board;
use crate::config::ModuleConfig;
use crate::console::{CRLF, Console};
use crate::error::Error;
use crate::validate::check_range;

use super::{channel_index, led_index, short_value};

/// `b <channel> <brightness>`
pub(super) fn set_brightness<B: Board>(
    console: &mut Console<B>,
    args: &[i32],
) -> Result<(), Error> {
    let &[index, brightness] = args else {
        return Err(Error::MissingArguments);
    };

    let index = channel_index(console, index)?;
    let brightness = short_value(console, brightness, "Brightness")?;

    let board = console.board_mut();
    let channel = board.map_channel(index);
    board.set_brightness(channel, brightness)?;
    board.send_frame()
}

/// `c <led> <x> <y> <Y>`
///
/// `x` and `y` are chromaticity coordinates in 65536ths, `Y` is the
/// luminance in 65536ths.
pub(super) fn set_color<B: Board>(
    console: &mut Console<B>,
    config: &ModuleConfig,
    args: &[i32],
) -> Result<(), Error> {
    let &[led, x, y, luminance] = args else {
        return Err(Error::MissingArguments);
    };

    let led = led_index(console, led)?;
    short_value(console, x, "Chromaticity x")?;
    short_value(console, y, "Chromaticity y")?;
    if let Err(error) = check_range(luminance, i64::from(i32::MAX) + 1) {
        console.say("Luminance must not be negative");
        return Err(error);
    }

    let info = config.leds[led];
    let rgb = console.board().correct(
        &info,
        Fixed::from_fraction(x),
        Fixed::from_fraction(y),
        Fixed::from_fraction(luminance),
    );

    console.print(format_args!(
        "Color correction: {} {} {}{CRLF}",
        rgb[0], rgb[1], rgb[2]
    ));

    let board = console.board_mut();
    for (channel, level) in info.channels.into_iter().zip(rgb) {
        board.set_brightness(channel, level)?;
    }
    board.send_frame()
}
