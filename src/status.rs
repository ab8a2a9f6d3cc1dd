//! Status screen
//!
//! ```text
//! myrtio-led-console build 0.1.0
//! Module address:   7
//!
//! Heat sensor settings:
//! Sensor  Limit
//!     0   65535
//!
//! LED settings:
//! LED  channel  correction matrix                   Y_max
//!   0   0            1.0000     0.0000     0.0000      1.0000
//!       1            0.0000     1.0000     0.0000      1.0000
//!       2            0.0000     0.0000     1.0000      1.0000
//!
//! >
//! ```

use core::fmt::{self, Write};

use crate::config::ModuleConfig;
use crate::console::CRLF;

const MODULE_ADDRESS: &str = "Module address: ";
const IS_BROADCAST: &str = " (broadcast)";
const HEAT_SETTINGS_HEAD: &str = "Heat sensor settings:\r\nSensor  Limit\r\n";
const LED_SETTINGS_HEAD: &str =
    "LED settings:\r\nLED  channel  correction matrix                   Y_max\r\n";
const CONSOLE_PROMPT: &str = "> ";

/// Write the configuration snapshot followed by the prompt marker
pub fn show_status_prompt<W: Write>(
    out: &mut W,
    config: &ModuleConfig,
    program_id: &str,
) -> fmt::Result {
    write!(out, "{program_id}{CRLF}")?;

    out.write_str(MODULE_ADDRESS)?;
    write!(out, "{:3}", config.address)?;
    if config.is_broadcast() {
        out.write_str(IS_BROADCAST)?;
    }
    write!(out, "{CRLF}{CRLF}")?;

    out.write_str(HEAT_SETTINGS_HEAD)?;
    for (sensor, limit) in config.heat_limits.iter().enumerate() {
        write!(out, "   {sensor:2}   {limit:5}{CRLF}")?;
    }
    out.write_str(CRLF)?;

    out.write_str(LED_SETTINGS_HEAD)?;
    for (index, led) in config.leds.iter().enumerate() {
        for color in 0..3 {
            if color == 0 {
                write!(out, "{index:3}")?;
            } else {
                out.write_str("   ")?;
            }
            write!(out, "  {:2}       ", led.channels[color])?;

            for entry in &led.color_matrix[3 * color..3 * color + 3] {
                write!(out, " {entry:>10}")?;
            }
            write!(out, "  {:>10}{CRLF}", led.peak_y[color])?;
        }
        out.write_str(CRLF)?;
    }

    out.write_str(CONSOLE_PROMPT)
}
