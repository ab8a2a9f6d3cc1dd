//! 3×3 fixed-point matrices
//!
//! Inversion is computed in `f32` and rounded back to 16.16.

use crate::Fixed;

/// Row-major 3×3 matrix
pub type Matrix3 = [Fixed; 9];

/// Identity matrix
pub const IDENTITY: Matrix3 = [
    Fixed::ONE,
    Fixed::ZERO,
    Fixed::ZERO,
    Fixed::ZERO,
    Fixed::ONE,
    Fixed::ZERO,
    Fixed::ZERO,
    Fixed::ZERO,
    Fixed::ONE,
];

/// Determinants below this are treated as singular
const SINGULAR_EPSILON: f32 = 1.0e-6;

/// Invert a 3×3 matrix
///
/// Returns `None` if the matrix has no inverse.
pub fn invert_3x3(matrix: &Matrix3) -> Option<Matrix3> {
    let m = matrix.map(Fixed::to_f32);

    let c00 = m[4] * m[8] - m[5] * m[7];
    let c01 = m[5] * m[6] - m[3] * m[8];
    let c02 = m[3] * m[7] - m[4] * m[6];

    let det = m[0] * c00 + m[1] * c01 + m[2] * c02;
    if libm::fabsf(det) < SINGULAR_EPSILON {
        return None;
    }

    // Adjugate (transposed cofactors) divided by the determinant
    let inverse = [
        c00,
        m[2] * m[7] - m[1] * m[8],
        m[1] * m[5] - m[2] * m[4],
        c01,
        m[0] * m[8] - m[2] * m[6],
        m[2] * m[3] - m[0] * m[5],
        c02,
        m[1] * m[6] - m[0] * m[7],
        m[0] * m[4] - m[1] * m[3],
    ];

    Some(inverse.map(|value| Fixed::from_f32(value / det)))
}
