pub mod constant;
pub mod errors;
pub mod fft;
pub mod harness;
pub mod planner;
pub mod utils;
pub mod view;

pub use errors::FftError;
pub use fft::{
    Algorithm, FftFloat, FftPlan, dft_matrix_mult, fft_iterative_breadth_first,
    fft_recursive_depth_first,
};
pub use planner::{RadixStrategy, compute_radices};
pub use view::StridedView;
