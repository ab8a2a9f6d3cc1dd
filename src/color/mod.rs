mod correction;
mod matrix;

pub use correction::{ChannelLevels, correct_xyy};
pub use matrix::{IDENTITY, Matrix3, invert_3x3};

/// Operator-facing names of the color channels, in matrix column order
pub const COLOR_NAMES: [&str; 3] = ["red", "green", "blue"];
