//! Hardware collaborators of the console
//!
//! Implement these traits for the target board. The console is generic
//! over [`Board`], which every type implementing all of them gets for free.

use core::fmt;

use crate::color::{self, ChannelLevels, Matrix3};
use crate::config::{LedInfo, ModuleConfig};
use crate::error::Error;
use crate::fixed::Fixed;
use crate::parser::LineBuffer;

/// Blocking source of operator input lines
pub trait LineInput {
    /// Block until a full line was received and store it in `line`
    ///
    /// The terminator is not stored. Overlong lines are truncated.
    fn read_line(&mut self, line: &mut LineBuffer);
}

/// PWM controller driving the LED channels
pub trait PwmOutput {
    /// Stage a brightness for a controller channel
    fn set_brightness(&mut self, channel: u8, brightness: u16) -> Result<(), Error>;

    /// Latch all staged brightness values
    fn send_frame(&mut self) -> Result<(), Error>;

    /// Map a module-local channel index to a controller channel
    fn map_channel(&self, index: u8) -> u8 {
        index
    }
}

/// Non-volatile configuration storage
pub trait ConfigStorage {
    /// Load the stored configuration
    fn load(&mut self) -> Result<ModuleConfig, Error>;

    /// Persist the configuration
    fn save(&mut self, config: &ModuleConfig) -> Result<(), Error>;

    /// Check that the configuration may be persisted
    fn is_valid(&self, config: &ModuleConfig) -> bool {
        config.is_valid()
    }
}

/// Color math used by the calibration commands
///
/// The default methods use the software implementation in [`color`].
pub trait ColorCorrection {
    fn correct(&self, led: &LedInfo, x: Fixed, y: Fixed, luminance: Fixed) -> ChannelLevels {
        color::correct_xyy(led, x, y, luminance)
    }

    fn invert_3x3(&self, matrix: &Matrix3) -> Option<Matrix3> {
        color::invert_3x3(matrix)
    }
}

/// System reset
pub trait SystemReset {
    /// Request a system reset
    ///
    /// On hardware this does not return once the reset takes effect.
    fn request_reset(&mut self);
}

/// Everything the console needs from the board
///
/// Console output goes through [`fmt::Write`].
pub trait Board:
    LineInput + fmt::Write + PwmOutput + ConfigStorage + ColorCorrection + SystemReset
{
}

impl<T> Board for T where
    T: LineInput + fmt::Write + PwmOutput + ConfigStorage + ColorCorrection + SystemReset
{
}
