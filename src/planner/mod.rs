//! # Radix Planning
//!
//! A transform of length `N` is decomposed into an ordered sequence of radices whose product is
//! `N`. The order matters: the recursive engine peels radices off the back of the sequence, the
//! iterative engine processes them front to back.
//!
//! Planning always starts from the prime factorization of `N` (found by trial division, so the
//! factors come out in ascending order) and then arranges those factors according to a
//! [`RadixStrategy`].

pub mod errors;

use errors::PlannerError;
use tracing::instrument;

/// How the prime factors of a transform length are turned into radices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadixStrategy {
    /// Prime factors, smallest first.
    Ascending,
    /// Prime factors, largest first.
    Descending,
    /// Consecutive ascending prime factors multiplied together while the running radix stays
    /// at or below `threshold`.
    Thresholded { threshold: usize },
}

impl RadixStrategy {
    /// Builds a strategy from its numeric selector.
    ///
    /// - `1`: [`RadixStrategy::Ascending`]
    /// - `2`: [`RadixStrategy::Descending`]
    /// - `3`: [`RadixStrategy::Thresholded`] with the given `threshold`
    ///
    /// The threshold is only checked, and only used, by the thresholded strategy.
    pub const fn from_option(option: u8, threshold: usize) -> Result<Self, PlannerError> {
        match option {
            1 => Ok(Self::Ascending),
            2 => Ok(Self::Descending),
            3 if threshold < 2 => Err(PlannerError::ThresholdTooSmall { threshold }),
            3 => Ok(Self::Thresholded { threshold }),
            _ => Err(PlannerError::UnknownStrategy { option }),
        }
    }
}

/// Prime factorization of `n` with multiplicity, in ascending order.
///
/// `prime_factors(1)` is empty. `n` must be positive.
#[must_use]
pub fn prime_factors(mut n: usize) -> Vec<usize> {
    debug_assert!(n > 0);
    let mut factors = Vec::new();

    let mut divisor = 2;
    // `divisor <= n / divisor` is `divisor² <= n` without the overflow.
    while divisor <= n / divisor {
        while n % divisor == 0 {
            n /= divisor;
            factors.push(divisor);
        }
        divisor += 1;
    }
    if n > 1 {
        factors.push(n);
    }

    factors
}

/// Greedily merges consecutive factors into radices no larger than `threshold`.
///
/// The running radix absorbs the next factor as long as the product stays `<= threshold`;
/// otherwise the running radix is emitted and the factor starts a new one. A single factor
/// larger than the threshold therefore becomes a radix on its own.
fn group_factors(factors: &[usize], threshold: usize) -> Vec<usize> {
    let Some((&first, rest)) = factors.split_first() else {
        return Vec::new();
    };

    let mut radices = Vec::new();
    let mut radix = first;
    for &factor in rest {
        match radix.checked_mul(factor) {
            Some(product) if product <= threshold => radix = product,
            _ => {
                radices.push(radix);
                radix = factor;
            }
        }
    }
    radices.push(radix);

    radices
}

/// Decomposes `length` into an ordered radix sequence following `strategy`.
///
/// The product of the returned radices always equals `length`. A prime `length` yields
/// `[length]`; `length == 1` yields the empty sequence.
#[instrument(level = "debug")]
pub fn compute_radices(length: usize, strategy: RadixStrategy) -> Result<Vec<usize>, PlannerError> {
    if length == 0 {
        return Err(PlannerError::ZeroLength);
    }

    let factors = prime_factors(length);
    let radices = match strategy {
        RadixStrategy::Ascending => factors,
        RadixStrategy::Descending => {
            let mut factors = factors;
            factors.reverse();
            factors
        }
        RadixStrategy::Thresholded { threshold } => {
            if threshold < 2 {
                return Err(PlannerError::ThresholdTooSmall { threshold });
            }
            group_factors(&factors, threshold)
        }
    };

    debug_assert_eq!(radices.iter().product::<usize>(), length);
    Ok(radices)
}

/// [`compute_radices`] with the strategy given by its numeric selector (see
/// [`RadixStrategy::from_option`]). `threshold` is ignored unless `option == 3`.
pub fn compute_radices_by_option(
    length: usize,
    option: u8,
    threshold: usize,
) -> Result<Vec<usize>, PlannerError> {
    compute_radices(length, RadixStrategy::from_option(option, threshold)?)
}
