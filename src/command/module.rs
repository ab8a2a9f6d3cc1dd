use crate::board::Board;
use crate::config::{BROADCAST_ADDRESS, MAX_ADDRESS, ModuleConfig};
use crate::console::Console;
use crate::error::Error;
use crate::validate::check_range;

use super::{sensor_index, short_value};

const ADDR_OUT_OF_RANGE: &str = "Address out of range (0x00 to 0xfd)";
const WARN_BROADCAST_ADDR: &str = "Warning: Setting address to broadcast";

/// `a <address>`
///
/// `0xfe` is reserved and `0xff` unused, so the highest address is the
/// broadcast address, which is accepted with a warning.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn set_address<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
    args: &[i32],
) -> Result<(), Error> {
    let &[address] = args else {
        return Err(Error::MissingArguments);
    };

    if let Err(error) = check_range(address, i64::from(MAX_ADDRESS) + 1) {
        console.say(ADDR_OUT_OF_RANGE);
        return Err(error);
    }
    let address = address as u8;
    if address == BROADCAST_ADDRESS {
        console.say(WARN_BROADCAST_ADDR);
    }

    config.address = address;
    Ok(())
}

/// `h <sensor> <heat-limit>`
pub(super) fn set_heat_limit<B: Board>(
    console: &mut Console<B>,
    config: &mut ModuleConfig,
    args: &[i32],
) -> Result<(), Error> {
    let &[sensor, limit] = args else {
        return Err(Error::MissingArguments);
    };

    let sensor = sensor_index(console, sensor)?;
    let limit = short_value(console, limit, "Heat limit")?;

    config.heat_limits[sensor] = limit;
    Ok(())
}
