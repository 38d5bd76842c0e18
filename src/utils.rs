use num_complex::Complex;
use num_traits::Zero;

use crate::{errors::FftError, fft::FftFloat};

/// Largest complex magnitude in `values`, or zero for an empty slice.
#[must_use]
pub fn max_norm<F: FftFloat>(values: &[Complex<F>]) -> F {
    values
        .iter()
        .map(|value| value.norm())
        .fold(F::zero(), F::max)
}

/// Euclidean norm `sqrt(Σ |v_i|²)` of `values`.
#[must_use]
pub fn two_norm<F: FftFloat>(values: &[Complex<F>]) -> F {
    values
        .iter()
        .map(Complex::norm_sqr)
        .fold(F::zero(), |acc, square| acc + square)
        .sqrt()
}

/// Element-wise `a - b`.
///
/// # Errors
///
/// [`FftError::LengthMismatch`] when the two slices differ in length.
pub fn difference<F: FftFloat>(
    a: &[Complex<F>],
    b: &[Complex<F>],
) -> Result<Vec<Complex<F>>, FftError> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// `max_norm(a - b)` relative to `max_norm(b)`.
///
/// Falls back to the absolute error when `b` is identically zero.
pub fn relative_max_error<F: FftFloat>(
    a: &[Complex<F>],
    b: &[Complex<F>],
) -> Result<F, FftError> {
    let error = max_norm(&difference(a, b)?);
    let scale = max_norm(b);
    Ok(if scale.is_zero() { error } else { error / scale })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norms_of_empty_slice() {
        assert_eq!(max_norm::<f64>(&[]), 0.0);
        assert_eq!(two_norm::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_max_norm_picks_largest_magnitude() {
        let values = [
            Complex::new(3.0, 4.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, -2.0),
        ];
        assert_eq!(max_norm(&values), 5.0);
    }

    #[test]
    fn test_two_norm() {
        let values = [Complex::new(3.0, 4.0), Complex::new(0.0, 12.0)];
        // sqrt(25 + 144) = 13
        assert_eq!(two_norm(&values), 13.0);
    }

    #[test]
    fn test_difference() {
        let a = [Complex::new(1.0, 1.0), Complex::new(2.0, -1.0)];
        let b = [Complex::new(0.5, 1.0), Complex::new(2.0, 1.0)];
        assert_eq!(
            difference(&a, &b).unwrap(),
            vec![Complex::new(0.5, 0.0), Complex::new(0.0, -2.0)]
        );
    }

    #[test]
    fn test_difference_rejects_length_mismatch() {
        let a = [Complex::<f32>::zero(); 3];
        let b = [Complex::<f32>::zero(); 2];
        assert_eq!(
            difference(&a, &b),
            Err(FftError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_relative_max_error() {
        let a = [Complex::new(10.5, 0.0), Complex::new(1.0, 0.0)];
        let b = [Complex::new(10.0, 0.0), Complex::new(1.0, 0.0)];
        assert_eq!(relative_max_error(&a, &b).unwrap(), 0.05);

        let zeros = [Complex::<f64>::zero(); 2];
        assert_eq!(relative_max_error(&a, &zeros).unwrap(), 10.5);
    }
}
