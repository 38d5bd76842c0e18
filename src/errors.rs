//! Main error types for the transform engines.

use thiserror::Error;

use crate::{planner::errors::PlannerError, view::errors::ViewError};

/// Top-level error type for transform operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// Radix planning rejected its input.
    #[error(transparent)]
    Planner(#[from] PlannerError),

    /// A strided view could not be laid over its buffer.
    #[error(transparent)]
    View(#[from] ViewError),

    /// The sample buffer holds no element.
    #[error("cannot transform an empty buffer")]
    EmptyBuffer,

    /// A radix smaller than two was supplied.
    #[error("invalid radix {radix}: every radix must be at least 2")]
    InvalidRadix { radix: usize },

    /// The radices do not multiply up to the buffer length.
    ///
    /// `product` is `None` when the product overflows `usize`.
    #[error("radix product {product:?} does not match buffer length {len}")]
    RadixProductMismatch { product: Option<usize>, len: usize },

    /// A buffer does not have the length the operation was prepared for.
    #[error("expected a buffer of length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
