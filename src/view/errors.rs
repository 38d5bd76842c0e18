use thiserror::Error;

/// Errors raised when a strided view is laid over a buffer or another view.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// Views must advance by at least one element.
    #[error("stride must be positive")]
    ZeroStride,

    /// The last element addressed by the view lies outside what it is laid over.
    #[error(
        "view with offset {offset}, stride {stride} and length {len} exceeds the {available} available elements"
    )]
    OutOfBounds {
        offset: usize,
        stride: usize,
        len: usize,
        available: usize,
    },
}
