/// Phase constant of the forward kernel `exp(-2πi·k/n)`.
///
/// Every twiddle factor in the crate is derived from this single value so that the sign
/// convention of the transform lives in exactly one place.
pub const MINUS_TWO_PI: f64 = -2.0 * core::f64::consts::PI;

/// Number of times each size is transformed by the speed harness.
pub const REPETITIONS: usize = 10;

/// Seed used for the random inputs of the accuracy harness.
pub const ACCURACY_SEED: u64 = 43;

/// Max-norm error accepted when an engine is compared against the reference transform
/// in double precision.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;
