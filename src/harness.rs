//! Accuracy and speed measurements of the transform engines.
//!
//! Both suites build their inputs up front, compute radices before starting the clock and time
//! only the transform itself.

use core::{fmt, str::FromStr, time::Duration};
use std::time::Instant;

use itertools::Itertools;
use num_complex::Complex;
use num_traits::{ToPrimitive, Zero};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, info_span, instrument};

use crate::{
    constant::{ACCURACY_SEED, REPETITIONS},
    errors::FftError,
    fft::{Algorithm, FftFloat, dft_compensated},
    planner::{RadixStrategy, compute_radices},
    utils::{difference, max_norm, two_norm},
};

/// Sizes of the accuracy suite: `2³·3·5·7`, `3·5·11·13`, `2⁴·3·37` and `2³·3³·5³`.
pub const ACCURACY_SIZES: [usize; 4] = [840, 2145, 1776, 27000];

/// Size of the all-zero instance appended to the accuracy suite.
pub const ZERO_INSTANCE_SIZE: usize = 1776;

/// Powers of two `2⁶ ..= 2¹⁵` used by default in the speed suite.
pub const POWER_OF_TWO_SIZES: [usize; 10] =
    [64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768];

/// Composite sizes used by the speed suite instead of powers of two.
pub const COMPOSITE_SIZES: [usize; 18] = [
    6, 9, 12, 15, 18, 24, 36, 80, 108, 210, 504, 1000, 1960, 4725, 10368, 27000, 75600, 165375,
];

/// Input signal together with its exact transform.
#[derive(Debug, Clone, PartialEq)]
pub struct TestInstance<F> {
    pub size: usize,
    pub input: Vec<Complex<F>>,
    pub expected: Vec<Complex<F>>,
}

impl<F: FftFloat> TestInstance<F> {
    /// Random input with real and imaginary parts drawn uniformly from `[0, 1)`.
    ///
    /// The input is drawn in double precision and the expected output is computed by
    /// [`dft_compensated`] before both are narrowed to `F`.
    #[must_use]
    pub fn random(size: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let input: Vec<Complex<f64>> = (0..size)
            .map(|_| Complex::new(rng.random::<f64>(), rng.random::<f64>()))
            .collect();
        let expected = dft_compensated(&input);

        Self {
            size,
            input: narrow(&input),
            expected: narrow(&expected),
        }
    }

    /// All-zero input, whose transform is all zeros.
    #[must_use]
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            input: vec![Complex::zero(); size],
            expected: vec![Complex::zero(); size],
        }
    }
}

fn narrow<F: FftFloat>(values: &[Complex<f64>]) -> Vec<Complex<F>> {
    values
        .iter()
        .map(|value| Complex::new(F::from_f64(value.re), F::from_f64(value.im)))
        .collect()
}

fn widen<F: FftFloat>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// The instances of the accuracy suite, in the order they are reported.
#[must_use]
pub fn accuracy_instances<F: FftFloat>() -> Vec<TestInstance<F>> {
    ACCURACY_SIZES
        .iter()
        .map(|&size| TestInstance::random(size, ACCURACY_SEED))
        .chain(core::iter::once(TestInstance::zeros(ZERO_INSTANCE_SIZE)))
        .collect()
}

/// Which measurement the driver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suite {
    /// Repeated timing over a list of sizes.
    #[default]
    Performance,
    /// Errors against the reference transform.
    Accuracy,
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Performance => "performance",
            Self::Accuracy => "accuracy",
        })
    }
}

impl FromStr for Suite {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "performance" | "1" => Ok(Self::Performance),
            "accuracy" | "2" => Ok(Self::Accuracy),
            _ => Err(format!("Invalid test suite: {s}")),
        }
    }
}

/// One line of the accuracy table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyRow {
    pub size: usize,
    pub elapsed: Duration,
    /// `max |expected_i - output_i|`
    pub max_error: f64,
    /// `sqrt(Σ |expected_i - output_i|²)`
    pub two_norm_error: f64,
}

impl fmt::Display for AccuracyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>8} {:>14.3?} {:>14.6e} {:>14.6e}",
            self.size, self.elapsed, self.max_error, self.two_norm_error
        )
    }
}

/// One line of the speed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRow {
    pub size: usize,
    pub repetitions: usize,
    pub total: Duration,
}

impl SpeedRow {
    #[must_use]
    pub fn average(&self) -> Duration {
        self.total / u32::try_from(self.repetitions.max(1)).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for SpeedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>8} {:>6} {:>14.3?} {:>14.3?}",
            self.size,
            self.repetitions,
            self.total,
            self.average()
        )
    }
}

/// Transforms every instance once and measures its error against the expected output.
#[instrument(skip_all, fields(%algorithm, ?strategy, cases = instances.len()))]
pub fn run_accuracy<F: FftFloat>(
    instances: &[TestInstance<F>],
    algorithm: Algorithm,
    strategy: RadixStrategy,
) -> Result<Vec<AccuracyRow>, FftError> {
    instances
        .iter()
        .map(|instance| {
            let _span = info_span!("accuracy case", size = instance.size).entered();
            let radices = compute_radices(instance.size, strategy)?;
            debug!(radices = %radices.iter().join("·"));
            let mut buffer = instance.input.clone();

            let start = Instant::now();
            algorithm.run(&mut buffer, &radices)?;
            let elapsed = start.elapsed();

            let error = difference(&instance.expected, &buffer)?;
            let row = AccuracyRow {
                size: instance.size,
                elapsed,
                max_error: widen(max_norm(&error)),
                two_norm_error: widen(two_norm(&error)),
            };
            info!(max_error = row.max_error, two_norm_error = row.two_norm_error);
            Ok(row)
        })
        .collect()
}

/// Transforms a fresh random input of each size [`REPETITIONS`] times.
///
/// Every repetition starts from the same input, so each timed call does the same work.
#[instrument(skip_all, fields(%algorithm, ?strategy, cases = sizes.len()))]
pub fn run_speed<F: FftFloat>(
    sizes: &[usize],
    algorithm: Algorithm,
    strategy: RadixStrategy,
) -> Result<Vec<SpeedRow>, FftError> {
    sizes
        .iter()
        .map(|&size| {
            let _span = info_span!("speed case", size).entered();
            let radices = compute_radices(size, strategy)?;
            debug!(radices = %radices.iter().join("·"));
            let mut rng = StdRng::seed_from_u64(size as u64);
            let input: Vec<Complex<F>> = (0..size)
                .map(|_| {
                    Complex::new(
                        F::from_f64(rng.random::<f64>()),
                        F::from_f64(rng.random::<f64>()),
                    )
                })
                .collect();
            let mut buffer = input.clone();

            let mut total = Duration::ZERO;
            for _ in 0..REPETITIONS {
                buffer.copy_from_slice(&input);
                let start = Instant::now();
                algorithm.run(&mut buffer, &radices)?;
                total += start.elapsed();
            }

            let row = SpeedRow {
                size,
                repetitions: REPETITIONS,
                total,
            };
            info!(total = ?row.total, average = ?row.average());
            Ok(row)
        })
        .collect()
}
