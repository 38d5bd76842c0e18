//! Depth-first mixed-radix Cooley-Tukey.
//!
//! A view of size `N = rest · r` is read as a row-major matrix with rows of length `r`. Its `r`
//! columns (stride `r`, offsets `0..r`) are transformed recursively with the remaining radices,
//! then combined:
//!
//! ```text
//! X[k1·rest + k0] = Σ_{j0} C_{j0}[k0] · ω_N^{j0·k0} · ω_r^{j0·k1}
//! ```
//!
//! where `C_{j0}` is the transformed column `j0`. Every output lands directly at its natural
//! index, so the result needs no reordering whatever the radix order.

use num_complex::Complex;
use num_traits::Zero;
use tracing::instrument;

use super::{
    check_radices,
    twiddle::{FftFloat, horner, root_of_unity},
};
use crate::{errors::FftError, view::StridedView};

/// Transforms `buffer` in place, depth first, using the radices from last to first.
///
/// The product of `radices` must equal `buffer.len()`. The output is in natural order.
#[instrument(skip_all, fields(size = buffer.len(), radices = ?radices), level = "debug")]
pub fn fft_recursive_depth_first<F: FftFloat>(
    buffer: &mut [Complex<F>],
    radices: &[usize],
) -> Result<(), FftError> {
    check_radices(buffer.len(), radices)?;
    if radices.is_empty() {
        // Length one: the transform is the identity.
        return Ok(());
    }

    let mut view = StridedView::new(buffer);
    solve(&mut view, radices)
}

fn solve<F: FftFloat>(
    view: &mut StridedView<'_, Complex<F>>,
    radices: &[usize],
) -> Result<(), FftError> {
    let size = view.len();
    debug_assert_eq!(radices.iter().product::<usize>(), size);

    let Some((&radix, remaining)) = radices.split_last() else {
        return Ok(());
    };

    if remaining.is_empty() {
        direct_dft(view);
        return Ok(());
    }

    let rest = size / radix;

    // Column `j0` holds the elements j0, j0 + radix, j0 + 2·radix, ...
    for column in 0..radix {
        let mut column_view = view.subview(radix, column, rest)?;
        solve(&mut column_view, remaining)?;
    }

    // Element k0 of column j0 sits at logical index j0 + k0·radix. Outputs are staged because
    // every one of them reads a full row of inputs.
    let mut staged = vec![Complex::zero(); size];
    for k0 in 0..rest {
        let twiddle_step = root_of_unity::<F>(k0, size);
        let row = k0 * radix;
        for k1 in 0..radix {
            let step = twiddle_step * root_of_unity::<F>(k1, radix);
            staged[k1 * rest + k0] = horner((0..radix).map(|j0| view[row + j0]), step);
        }
    }
    view.copy_from_slice(&staged);

    Ok(())
}

/// Base case: direct DFT of the whole view, staged before it is written back.
fn direct_dft<F: FftFloat>(view: &mut StridedView<'_, Complex<F>>) {
    let size = view.len();
    let input = view.to_vec();

    let staged: Vec<Complex<F>> = (0..size)
        .map(|k| horner(input.iter().copied(), root_of_unity(k, size)))
        .collect();
    view.copy_from_slice(&staged);
}
