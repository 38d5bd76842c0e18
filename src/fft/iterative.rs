//! Breadth-first mixed-radix Cooley-Tukey.
//!
//! The radices are consumed front to back, one layer per radix, directly on the flat buffer.
//! Before layer `i` the buffer holds `N / (r_0 · … · r_{i-1})` interleaved partial transforms;
//! layer `i` merges groups of `r_i` of them. Partial transforms are stored in digit-reversed
//! block order, which is why the block twiddle uses the reversed block index and why a final
//! digit-reversal permutation is required to obtain natural order.

use num_complex::Complex;
use num_traits::Zero;
use tracing::instrument;

use super::{
    check_radices,
    digit_reversal::{permute_by_digit_reversal, reverse_digits},
    twiddle::{FftFloat, horner, root_of_unity},
};
use crate::errors::FftError;

/// Transforms `buffer` in place, breadth first, using the radices from first to last.
///
/// The product of `radices` must equal `buffer.len()`. The output is in natural order.
#[instrument(skip_all, fields(size = buffer.len(), radices = ?radices), level = "debug")]
pub fn fft_iterative_breadth_first<F: FftFloat>(
    buffer: &mut [Complex<F>],
    radices: &[usize],
) -> Result<(), FftError> {
    check_radices(buffer.len(), radices)?;
    let Some((&first, remaining)) = radices.split_first() else {
        // Length one: the transform is the identity.
        return Ok(());
    };

    let mut rows = buffer.len() / first;
    first_layer(buffer, first, rows);

    // Radices processed so far, most recent first, as `reverse_digits` expects them.
    let mut processed = vec![first];
    let mut size = first;

    for &radix in remaining {
        size *= radix;
        rows /= radix;
        layer(buffer, radix, size, rows, &processed);
        processed.insert(0, radix);
    }

    permute_by_digit_reversal(buffer, radices)
}

/// Length-`radix` DFTs of the `rows` interleaved groups `x[low], x[low + rows], …`.
fn first_layer<F: FftFloat>(buffer: &mut [Complex<F>], radix: usize, rows: usize) {
    let phase_steps: Vec<Complex<F>> = (0..radix).map(|k| root_of_unity(k, radix)).collect();
    let mut staged = vec![Complex::zero(); radix];

    for low in 0..rows {
        for (out, &phase_step) in staged.iter_mut().zip(&phase_steps) {
            *out = horner((0..radix).map(|j| buffer[j * rows + low]), phase_step);
        }
        for (k, value) in staged.iter().enumerate() {
            buffer[k * rows + low] = *value;
        }
    }
}

/// Merges groups of `radix` partial transforms into transforms of length `size`.
///
/// `processed` lists the radices of earlier layers, most recent first.
fn layer<F: FftFloat>(
    buffer: &mut [Complex<F>],
    radix: usize,
    size: usize,
    rows: usize,
    processed: &[usize],
) {
    let phase_steps: Vec<Complex<F>> = (0..radix).map(|k| root_of_unity(k, radix)).collect();
    let mut staged = vec![Complex::zero(); radix];

    for high in 0..size / radix {
        let twiddle_step = root_of_unity::<F>(reverse_digits(high, processed), size);
        let steps: Vec<Complex<F>> = phase_steps
            .iter()
            .map(|&phase_step| twiddle_step * phase_step)
            .collect();

        for low in 0..rows {
            let base = high * radix;
            for (out, &step) in staged.iter_mut().zip(&steps) {
                *out = horner((0..radix).map(|j| buffer[(base + j) * rows + low]), step);
            }
            for (k, value) in staged.iter().enumerate() {
                buffer[(base + k) * rows + low] = *value;
            }
        }
    }
}
