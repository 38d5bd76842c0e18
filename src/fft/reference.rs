use num_complex::Complex;

use super::twiddle::{FftFloat, horner, root_of_unity};

/// Direct `O(N²)` DFT of `input`, returned as a new vector.
///
/// Each output `X_k` is the polynomial `Σ_j x_j · z^j` evaluated at `z = exp(-2πi·k/N)` by
/// Horner's scheme. The input is left untouched. Only meant as a correctness reference for the
/// fast engines.
#[must_use]
pub fn dft_matrix_mult<F: FftFloat>(input: &[Complex<F>]) -> Vec<Complex<F>> {
    let size = input.len();
    (0..size)
        .map(|k| horner(input.iter().copied(), root_of_unity(k, size)))
        .collect()
}

/// Neumaier-compensated running sum of `f64` terms.
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn push(&mut self, term: f64) {
        let total = self.sum + term;
        if self.sum.abs() >= term.abs() {
            self.compensation += (self.sum - total) + term;
        } else {
            self.compensation += (term - total) + self.sum;
        }
        self.sum = total;
    }

    fn value(self) -> f64 {
        self.sum + self.compensation
    }
}

/// Output `k` of the DFT of `input`, given the `N` roots `twiddles[m] = exp(-2πi·m/N)`.
///
/// Each term uses the exact root `twiddles[j·k mod N]` and the real and imaginary parts are
/// accumulated with compensated summation.
fn compensated_bin(input: &[Complex<f64>], twiddles: &[Complex<f64>], k: usize) -> Complex<f64> {
    let size = input.len();
    let mut re = CompensatedSum::default();
    let mut im = CompensatedSum::default();
    let mut exponent = 0;
    for x in input {
        let term = x * twiddles[exponent];
        re.push(term.re);
        im.push(term.im);
        exponent = (exponent + k) % size;
    }
    Complex::new(re.value(), im.value())
}

fn twiddle_table(size: usize) -> Vec<Complex<f64>> {
    (0..size).map(|m| root_of_unity(m, size)).collect()
}

/// High-accuracy `O(N²)` DFT in double precision.
///
/// Unlike [`dft_matrix_mult`], whose Horner recurrence accumulates rounding error through the
/// repeated multiplications by the step, every term here is multiplied by a directly evaluated
/// root of unity and the sums are compensated. The error stays near machine precision for the
/// sizes of the accuracy suite.
#[must_use]
pub fn dft_compensated(input: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let twiddles = twiddle_table(input.len());
    (0..input.len())
        .map(|k| compensated_bin(input, &twiddles, k))
        .collect()
}

/// The outputs of [`dft_compensated`] at the given `bins` only.
///
/// # Panics
/// Panics if a bin is not below `input.len()`.
#[must_use]
pub fn dft_compensated_bins(input: &[Complex<f64>], bins: &[usize]) -> Vec<Complex<f64>> {
    assert!(
        bins.iter().all(|&k| k < input.len()),
        "every bin must be below the input length {}",
        input.len()
    );
    let twiddles = twiddle_table(input.len());
    bins.iter()
        .map(|&k| compensated_bin(input, &twiddles, k))
        .collect()
}
