mod gaussian;
pub use gaussian::gaussian_blur_nxn;

/// Fixed and generated convolution kernels.
pub mod kernels;

mod mode;
pub use mode::mode_filter;

mod ops;
pub use ops::{blur_3x3, edge_detect_3x3};
