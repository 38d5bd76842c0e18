//! # Mixed-Radix Cooley-Tukey Transforms
//!
//! Forward, unnormalized DFT of arbitrary composite length:
//!
//! ```text
//! X_k = Σ_{n=0}^{N-1} x_n · exp(-2πi·k·n/N)
//! ```
//!
//! Two decimation-in-time engines share the same radix sequences but walk the decomposition
//! differently:
//!
//! - [`fft_recursive_depth_first`] recurses on strided columns and writes each combination
//!   straight to its natural position, so no reordering is needed.
//! - [`fft_iterative_breadth_first`] sweeps the flat buffer one radix layer at a time; its
//!   intermediate layout is digit-scrambled and a final [`permute_by_digit_reversal`] restores
//!   natural order.
//!
//! [`dft_matrix_mult`] is the direct `O(N²)` evaluation both are checked against, and
//! [`dft_compensated`] a slower, more accurate one for large sizes.

pub mod digit_reversal;
pub mod iterative;
pub mod recursive;
pub mod reference;
pub mod twiddle;

#[cfg(test)]
mod tests;

use core::{fmt, str::FromStr};

pub use digit_reversal::{
    digit_reversal_permutation, mixed_radix_digits, permute_by_digit_reversal, reverse_digits,
};
pub use iterative::fft_iterative_breadth_first;
use num_complex::Complex;
pub use recursive::fft_recursive_depth_first;
pub use reference::{dft_compensated, dft_compensated_bins, dft_matrix_mult};
pub use twiddle::{FftFloat, root_of_unity};

use crate::{
    errors::FftError,
    planner::{RadixStrategy, compute_radices},
};

/// Checks the preconditions shared by every operation driven by a radix sequence.
///
/// The buffer must be non-empty, every radix at least 2, and the radices must multiply up to
/// `len` exactly. A length-1 buffer goes with the empty radix sequence.
pub(crate) fn check_radices(len: usize, radices: &[usize]) -> Result<(), FftError> {
    if len == 0 {
        return Err(FftError::EmptyBuffer);
    }
    if let Some(&radix) = radices.iter().find(|&&radix| radix < 2) {
        return Err(FftError::InvalidRadix { radix });
    }
    let product = radices
        .iter()
        .try_fold(1usize, |acc, &radix| acc.checked_mul(radix));
    if product != Some(len) {
        return Err(FftError::RadixProductMismatch { product, len });
    }
    Ok(())
}

/// Which engine computes the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Depth-first recursion over strided columns; see [`fft_recursive_depth_first`].
    RecursiveDepthFirst,
    /// Breadth-first layers over the flat buffer; see [`fft_iterative_breadth_first`].
    IterativeBreadthFirst,
}

impl Algorithm {
    /// Transforms `buffer` in place with this engine.
    pub fn run<F: FftFloat>(
        self,
        buffer: &mut [Complex<F>],
        radices: &[usize],
    ) -> Result<(), FftError> {
        match self {
            Self::RecursiveDepthFirst => fft_recursive_depth_first(buffer, radices),
            Self::IterativeBreadthFirst => fft_iterative_breadth_first(buffer, radices),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RecursiveDepthFirst => "recursive",
            Self::IterativeBreadthFirst => "iterative",
        })
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Accepts the names printed by [`Display`](fmt::Display) as well as the numeric
    /// selectors `1` (iterative) and `2` (recursive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" | "1" => Ok(Self::IterativeBreadthFirst),
            "recursive" | "2" => Ok(Self::RecursiveDepthFirst),
            _ => Err(format!("Invalid algorithm: {s}")),
        }
    }
}

/// A transform length together with its radix sequence and the engine to run.
///
/// Planning happens once in [`FftPlan::new`]; [`FftPlan::process`] can then be applied to any
/// number of buffers of that length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FftPlan {
    len: usize,
    radices: Vec<usize>,
    algorithm: Algorithm,
}

impl FftPlan {
    /// Plans a transform of length `len`, decomposed into radices by `strategy`.
    pub fn new(len: usize, algorithm: Algorithm, strategy: RadixStrategy) -> Result<Self, FftError> {
        let radices = compute_radices(len, strategy)?;
        Ok(Self {
            len,
            radices,
            algorithm,
        })
    }

    /// Plan with a caller-chosen radix sequence.
    pub fn with_radices(
        len: usize,
        algorithm: Algorithm,
        radices: Vec<usize>,
    ) -> Result<Self, FftError> {
        check_radices(len, &radices)?;
        Ok(Self {
            len,
            radices,
            algorithm,
        })
    }

    /// Transform length.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a successfully built plan, since lengths are positive.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The planned radix sequence, in the order the engines receive it.
    #[must_use]
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Transforms `buffer` in place. The buffer must have the planned length.
    pub fn process<F: FftFloat>(&self, buffer: &mut [Complex<F>]) -> Result<(), FftError> {
        if buffer.len() != self.len {
            return Err(FftError::LengthMismatch {
                expected: self.len,
                actual: buffer.len(),
            });
        }
        self.algorithm.run(buffer, &self.radices)
    }
}
