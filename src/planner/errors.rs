use thiserror::Error;

/// Errors raised while factorizing a transform length into radices.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerError {
    /// The transform length must be positive.
    #[error("transform length must be positive")]
    ZeroLength,

    /// The numeric strategy selector is outside `1..=3`.
    #[error("unknown radix strategy {option}, expected 1, 2 or 3")]
    UnknownStrategy { option: u8 },

    /// The grouping threshold of the thresholded strategy is below 2.
    #[error("grouping threshold {threshold} is below 2")]
    ThresholdTooSmall { threshold: usize },
}
