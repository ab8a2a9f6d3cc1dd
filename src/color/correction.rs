//! xyY to PWM drive level conversion
//!
//! The correction matrix of an LED is the inverse of
//!
//! ```text
//! | x_r x_g x_b |
//! | y_r y_g y_b |
//! |  1   1   1  |
//! ```
//!
//! built from the measured chromaticity of each primary. Mixing the primaries
//! with luminances `L_c` yields the target color when
//! `M · (L_c / y_c) = (Y / y) · (x, y, 1)`.

use crate::Fixed;
use crate::config::LedInfo;

use super::matrix::invert_3x3;

/// 16-bit drive level for red, green and blue
pub type ChannelLevels = [u16; 3];

/// Compute the channel drive levels that show `(x, y, Y)` on an LED
///
/// Levels are normalized against the calibrated peak luminance of each
/// channel and clamped to full scale. Colors outside the LED's gamut are
/// clipped per channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn correct_xyy(led: &LedInfo, x: Fixed, y: Fixed, luminance: Fixed) -> ChannelLevels {
    let mut levels = [0; 3];
    if y <= Fixed::ZERO {
        return levels;
    }
    // Row 1 of the calibrated chromaticity matrix holds each primary's y_c
    let Some(primaries) = invert_3x3(&led.color_matrix) else {
        return levels;
    };

    let target = [x.to_f32(), y.to_f32(), 1.0];
    let scale = luminance.to_f32() / y.to_f32();

    for (channel, level) in levels.iter_mut().enumerate() {
        let row = &led.color_matrix[3 * channel..3 * channel + 3];
        let weight: f32 = row
            .iter()
            .zip(target)
            .map(|(m, t)| m.to_f32() * t)
            .sum();
        let channel_luminance = scale * weight * primaries[3 + channel].to_f32();

        let peak = led.peak_y[channel].to_f32();
        if peak <= 0.0 {
            continue;
        }
        let duty = (channel_luminance / peak).clamp(0.0, 1.0);
        *level = libm::roundf(duty * f32::from(u16::MAX)) as u16;
    }

    levels
}
