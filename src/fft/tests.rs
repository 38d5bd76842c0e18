use num_complex::Complex;
use num_traits::Zero;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::*;
use crate::{
    constant::DEFAULT_TOLERANCE,
    planner::{RadixStrategy, compute_radices},
    utils::{difference, max_norm},
};

const STRATEGIES: [RadixStrategy; 4] = [
    RadixStrategy::Ascending,
    RadixStrategy::Descending,
    RadixStrategy::Thresholded { threshold: 4 },
    RadixStrategy::Thresholded { threshold: 32 },
];

const ALGORITHMS: [Algorithm; 2] = [
    Algorithm::RecursiveDepthFirst,
    Algorithm::IterativeBreadthFirst,
];

fn random_signal(size: usize, seed: u64) -> Vec<Complex<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| Complex::new(rng.random::<f64>(), rng.random::<f64>()))
        .collect()
}

fn transformed(
    algorithm: Algorithm,
    input: &[Complex<f64>],
    radices: &[usize],
) -> Vec<Complex<f64>> {
    let mut buffer = input.to_vec();
    algorithm.run(&mut buffer, radices).unwrap();
    buffer
}

fn max_error(a: &[Complex<f64>], b: &[Complex<f64>]) -> f64 {
    max_norm(&difference(a, b).unwrap())
}

#[test]
fn test_engines_match_reference_on_composite_lengths() {
    for size in [2, 6, 12, 30, 60, 72, 97, 105, 210, 360, 840] {
        let input = random_signal(size, size as u64);
        let expected = dft_matrix_mult(&input);

        for strategy in STRATEGIES {
            let radices = compute_radices(size, strategy).unwrap();
            for algorithm in ALGORITHMS {
                let output = transformed(algorithm, &input, &radices);
                let error = max_error(&output, &expected);
                assert!(
                    error < DEFAULT_TOLERANCE,
                    "{algorithm} with {radices:?} on size {size}: error {error}"
                );
            }
        }
    }
}

#[test]
fn test_engines_match_compensated_reference_on_large_lengths() {
    // Sampled bins keep the quadratic reference affordable.
    for size in [27000, 75600] {
        let input = random_signal(size, 43);
        let bins: Vec<usize> = (0..size).step_by(997).chain([1, size - 1]).collect();
        let expected = dft_compensated_bins(&input, &bins);

        for strategy in [RadixStrategy::Ascending, RadixStrategy::Thresholded { threshold: 32 }] {
            let radices = compute_radices(size, strategy).unwrap();
            for algorithm in ALGORITHMS {
                let output = transformed(algorithm, &input, &radices);
                let sampled: Vec<Complex<f64>> = bins.iter().map(|&k| output[k]).collect();
                let error = max_error(&sampled, &expected);
                assert!(
                    error < DEFAULT_TOLERANCE,
                    "{algorithm} with {radices:?} on size {size}: error {error}"
                );
            }
        }
    }
}

#[test]
fn test_engines_agree_with_each_other() {
    let size = 2 * 2 * 2 * 3 * 5 * 7;
    let input = random_signal(size, 43);

    let recursive = transformed(
        Algorithm::RecursiveDepthFirst,
        &input,
        &compute_radices(size, RadixStrategy::Descending).unwrap(),
    );
    let iterative = transformed(
        Algorithm::IterativeBreadthFirst,
        &input,
        &compute_radices(size, RadixStrategy::Ascending).unwrap(),
    );

    assert!(max_error(&recursive, &iterative) < DEFAULT_TOLERANCE);
}

#[test]
fn test_zero_input_gives_exact_zero() {
    for size in [1, 4, 12, 1776] {
        for strategy in STRATEGIES {
            let radices = compute_radices(size, strategy).unwrap();
            for algorithm in ALGORITHMS {
                let output = transformed(algorithm, &vec![Complex::zero(); size], &radices);
                assert!(
                    output.iter().all(|value| value.re == 0.0 && value.im == 0.0),
                    "{algorithm} with {radices:?} on size {size}"
                );
            }
        }
    }
}

#[test]
fn test_concrete_small_cases() {
    let one = Complex::new(1.0, 0.0);
    let zero = Complex::zero();

    for algorithm in ALGORITHMS {
        for radices in [vec![2, 2], vec![4]] {
            let output = transformed(algorithm, &[one, zero, zero, zero], &radices);
            assert!(max_error(&output, &[one; 4]) < 1e-12);

            let output = transformed(algorithm, &[one; 4], &radices);
            assert!(max_error(&output, &[Complex::new(4.0, 0.0), zero, zero, zero]) < 1e-12);
        }

        for radices in [vec![2, 2, 2], vec![4, 2], vec![2, 4], vec![8]] {
            let mut impulse = vec![zero; 8];
            impulse[0] = one;
            let output = transformed(algorithm, &impulse, &radices);
            assert!(max_error(&output, &[one; 8]) < 1e-12);
        }
    }
}

#[test]
fn test_single_precision_engines() {
    let size = 360;
    let input = random_signal(size, 7);
    let expected = dft_matrix_mult(&input);
    let input_f32: Vec<Complex<f32>> = input
        .iter()
        .map(|value| Complex::new(value.re as f32, value.im as f32))
        .collect();

    let radices = compute_radices(size, RadixStrategy::Thresholded { threshold: 16 }).unwrap();
    for algorithm in ALGORITHMS {
        let mut buffer = input_f32.clone();
        algorithm.run(&mut buffer, &radices).unwrap();
        let widened: Vec<Complex<f64>> = buffer
            .iter()
            .map(|value| Complex::new(f64::from(value.re), f64::from(value.im)))
            .collect();
        assert!(max_error(&widened, &expected) < 1e-3);
    }
}

#[test]
fn test_plan_processes_buffers_of_planned_length() {
    let plan = FftPlan::new(
        60,
        Algorithm::IterativeBreadthFirst,
        RadixStrategy::Thresholded { threshold: 6 },
    )
    .unwrap();
    assert_eq!(plan.len(), 60);
    assert_eq!(plan.radices(), &[4, 3, 5]);
    assert_eq!(plan.algorithm(), Algorithm::IterativeBreadthFirst);

    let input = random_signal(60, 1);
    let mut buffer = input.clone();
    plan.process(&mut buffer).unwrap();
    assert!(max_error(&buffer, &dft_matrix_mult(&input)) < DEFAULT_TOLERANCE);

    let mut wrong = vec![Complex::<f64>::zero(); 30];
    assert_eq!(
        plan.process(&mut wrong),
        Err(FftError::LengthMismatch {
            expected: 60,
            actual: 30
        })
    );
}

#[test]
fn test_plan_with_radices_is_validated() {
    assert!(FftPlan::with_radices(12, Algorithm::RecursiveDepthFirst, vec![3, 4]).is_ok());
    assert_eq!(
        FftPlan::with_radices(12, Algorithm::RecursiveDepthFirst, vec![3, 5]),
        Err(FftError::RadixProductMismatch {
            product: Some(15),
            len: 12
        })
    );
    assert!(matches!(
        FftPlan::new(0, Algorithm::RecursiveDepthFirst, RadixStrategy::Ascending),
        Err(FftError::Planner(_))
    ));
}

#[test]
fn test_algorithm_parsing() {
    assert_eq!("iterative".parse(), Ok(Algorithm::IterativeBreadthFirst));
    assert_eq!("1".parse(), Ok(Algorithm::IterativeBreadthFirst));
    assert_eq!("recursive".parse(), Ok(Algorithm::RecursiveDepthFirst));
    assert_eq!("2".parse(), Ok(Algorithm::RecursiveDepthFirst));
    assert!("fftw".parse::<Algorithm>().is_err());
    assert_eq!(Algorithm::RecursiveDepthFirst.to_string(), "recursive");
}

fn arb_signal(size: usize) -> impl Strategy<Value = Vec<Complex<f64>>> {
    prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0), size)
        .prop_map(|pairs| pairs.into_iter().map(|(re, im)| Complex::new(re, im)).collect())
}

fn arb_case() -> impl Strategy<Value = (Vec<Complex<f64>>, Vec<usize>)> {
    prop::collection::vec(2usize..8, 1..5)
        .prop_filter("keep lengths small", |radices| {
            radices.iter().product::<usize>() <= 512
        })
        .prop_flat_map(|radices| {
            let size = radices.iter().product();
            (arb_signal(size), Just(radices))
        })
}

proptest! {
    #[test]
    fn prop_engines_match_reference((input, radices) in arb_case()) {
        let expected = dft_matrix_mult(&input);
        for algorithm in ALGORITHMS {
            let output = transformed(algorithm, &input, &radices);
            prop_assert!(max_error(&output, &expected) < DEFAULT_TOLERANCE);
        }
    }

    #[test]
    fn prop_engines_are_linear(
        (x, radices) in arb_case(),
        a in -2.0f64..2.0,
        b in -2.0f64..2.0,
        seed in any::<u64>(),
    ) {
        let y = random_signal(x.len(), seed);
        let combined: Vec<Complex<f64>> =
            x.iter().zip(&y).map(|(xi, yi)| *xi * a + *yi * b).collect();

        for algorithm in ALGORITHMS {
            let lhs = transformed(algorithm, &combined, &radices);
            let tx = transformed(algorithm, &x, &radices);
            let ty = transformed(algorithm, &y, &radices);
            let rhs: Vec<Complex<f64>> =
                tx.iter().zip(&ty).map(|(u, v)| *u * a + *v * b).collect();
            prop_assert!(max_error(&lhs, &rhs) < DEFAULT_TOLERANCE);
        }
    }
}
