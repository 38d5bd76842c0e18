//! Mixed-radix digit reversal, the generalization of bit reversal to arbitrary radices.
//!
//! An index `i < r_0 · r_1 · … · r_{m-1}` is read as a mixed-radix number whose least
//! significant digit has radix `r_0`:
//!
//! ```text
//! i = d_0 + r_0 · (d_1 + r_1 · (d_2 + …))
//! ```
//!
//! Reversing it rebuilds a number from the same digits with `d_0` as the most significant one.

use crate::{errors::FftError, fft::check_radices};

/// Digits of `value`, least significant first, one per radix.
///
/// Whatever does not fit in the radices is dropped, so the result always has
/// `radices.len()` digits.
#[must_use]
pub fn mixed_radix_digits(mut value: usize, radices: &[usize]) -> Vec<usize> {
    radices
        .iter()
        .map(|&radix| {
            let digit = value % radix;
            value /= radix;
            digit
        })
        .collect()
}

/// Reverses the mixed-radix digits of `value` with respect to `radices`.
///
/// The digit extracted with `radices[0]` becomes the most significant digit of the result.
/// With all radices equal to 2 this is ordinary bit reversal over `radices.len()` bits.
#[inline]
#[must_use]
pub fn reverse_digits(value: usize, radices: &[usize]) -> usize {
    radices
        .iter()
        .fold((value, 0), |(rest, reversed), &radix| {
            (rest / radix, reversed * radix + rest % radix)
        })
        .1
}

/// Permutation table that brings the output of the breadth-first engine into natural order.
///
/// The table satisfies `natural[i] = scrambled[table[i]]`. It is built by reversing every index
/// against the radix sequence read back to front.
#[must_use]
pub fn digit_reversal_permutation(radices: &[usize]) -> Vec<usize> {
    let size = radices.iter().product();
    let reversed_radices: Vec<usize> = radices.iter().rev().copied().collect();

    let mut permutation = vec![0; size];
    for index in 0..size {
        permutation[reverse_digits(index, &reversed_radices)] = index;
    }
    permutation
}

/// Reorders `buffer` by digit reversal of its indices with respect to `radices`.
///
/// The elements are gathered into a temporary copy first, so no element is overwritten before
/// it has been read.
pub fn permute_by_digit_reversal<T: Copy>(
    buffer: &mut [T],
    radices: &[usize],
) -> Result<(), FftError> {
    check_radices(buffer.len(), radices)?;

    let permutation = digit_reversal_permutation(radices);
    let staged: Vec<T> = permutation.iter().map(|&source| buffer[source]).collect();
    buffer.copy_from_slice(&staged);
    Ok(())
}
