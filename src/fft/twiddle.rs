use core::fmt::Debug;

use num_complex::Complex;
use num_traits::{Float, Zero};

use crate::constant::MINUS_TWO_PI;

/// Scalar precision the transforms can run in.
///
/// Twiddle factors are always evaluated in `f64` and then narrowed with [`FftFloat::from_f64`],
/// so single-precision runs only lose accuracy in the butterflies, not in the roots of unity.
pub trait FftFloat: Float + Debug + Send + Sync + 'static {
    /// Converts a double-precision value to this precision.
    fn from_f64(value: f64) -> Self;
}

impl FftFloat for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as Self
    }
}

impl FftFloat for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// `exp(-2πi·k/n)`: the `k`-th power of the primitive `n`-th root of unity of the forward kernel.
///
/// # Panics
/// Panics if `n == 0`.
#[inline]
#[must_use]
pub fn root_of_unity<F: FftFloat>(k: usize, n: usize) -> Complex<F> {
    assert!(n > 0, "root of unity of order zero");
    // Reducing first keeps the angle in [-2π, 0], where it is most accurate.
    let angle = MINUS_TWO_PI * (k % n) as f64 / n as f64;
    Complex::new(F::from_f64(angle.cos()), F::from_f64(angle.sin()))
}

/// Evaluates `Σ_j c_j · step^j` by Horner's scheme, highest coefficient first.
///
/// With `step = exp(-2πi·k/n)` and `n` coefficients this is output `k` of a direct DFT, using
/// one complex multiply-add per term and no per-term exponentiation.
#[inline]
pub(crate) fn horner<F, I>(coefficients: I, step: Complex<F>) -> Complex<F>
where
    F: FftFloat,
    I: DoubleEndedIterator<Item = Complex<F>>,
{
    coefficients
        .rev()
        .fold(Complex::zero(), |acc, coefficient| acc * step + coefficient)
}
