//! Signed 16.16 fixed-point numbers
//!
//! Correction matrices and peak luminance values are stored in this format,
//! exactly as the PWM firmware consumes them.

use core::fmt;
use core::fmt::Write as _;
use core::ops::{Add, Mul};

/// Number of fractional bits
pub const FRACTION_BITS: u32 = 16;

const ONE_RAW: i32 = 1 << FRACTION_BITS;

/// Signed fixed-point value with 16 integer and 16 fractional bits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed(i32);

impl Fixed {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(ONE_RAW);

    /// Wrap a raw 16.16 value
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw 16.16 representation
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Integer value, saturating outside the representable range
    pub const fn from_int(value: i32) -> Self {
        Self(value.saturating_mul(ONE_RAW))
    }

    /// Fraction given in 65536ths
    pub const fn from_fraction(sixty_five_536ths: i32) -> Self {
        Self(sixty_five_536ths)
    }

    /// Saturating addition
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / ONE_RAW as f32
    }

    /// Convert from `f32`, rounding to nearest and saturating
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_f32(value: f32) -> Self {
        let scaled = libm::roundf(value * ONE_RAW as f32);
        if scaled.is_nan() {
            return Self::ZERO;
        }
        // `as` saturates for floats
        Self(scaled as i32)
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Mul for Fixed {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: Self) -> Self {
        let product = (i64::from(self.0) * i64::from(rhs.0)) >> FRACTION_BITS;
        Self(product.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }
}

/// Decimal rendering with four fractional digits, e.g. `-1.5000`.
///
/// Honors width and alignment flags, so `{:>10}` lines up status columns.
impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = i64::from(self.0).unsigned_abs();
        let integer = magnitude >> FRACTION_BITS;
        let fraction = ((magnitude & 0xffff) * 10_000) >> FRACTION_BITS;

        let mut text = heapless::String::<16>::new();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(text, "{sign}{integer}.{fraction:04}")?;
        f.pad(&text)
    }
}
