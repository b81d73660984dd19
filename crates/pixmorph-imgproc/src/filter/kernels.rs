use std::f64::consts::PI;

/// Gaussian-like smoothing mask, `[1 2 1; 2 4 2; 1 2 1] / 16`.
pub const BLUR_3X3: [[f64; 3]; 3] = [
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
];

/// Edge mask: `1` at the center and `-1/8` on the eight neighbors.
pub const EDGE_3X3: [[f64; 3]; 3] = [
    [-1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0],
    [-1.0 / 8.0, 1.0, -1.0 / 8.0],
    [-1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0],
];

/// Isotropic gaussian weight at offset `(dx, dy)`.
///
/// # Arguments
///
/// * `dx` - The horizontal offset.
/// * `dy` - The vertical offset.
/// * `sigma` - The sigma of the gaussian.
///
/// # Returns
///
/// `1 / (2 pi sigma^2) * exp(-(dx^2 + dy^2) / (2 sigma^2))`.
pub fn gaussian_weight(dx: f64, dy: f64, sigma: f64) -> f64 {
    let sigma_sq = sigma * sigma;
    (-(dx * dx + dy * dy) / (2.0 * sigma_sq)).exp() / (2.0 * PI * sigma_sq)
}

/// Create a square gaussian kernel.
///
/// # Arguments
///
/// * `half` - Half the window size; the kernel is `2 * half + 1` wide.
/// * `sigma` - The sigma of the gaussian.
///
/// # Returns
///
/// The unnormalized weights, row-major, indexed by `(dy + half, dx + half)`.
pub fn gaussian_kernel_2d(half: usize, sigma: f64) -> Vec<f64> {
    let size = 2 * half + 1;
    let mut kernel = Vec::with_capacity(size * size);
    for dy in 0..size {
        for dx in 0..size {
            let dx = dx as f64 - half as f64;
            let dy = dy as f64 - half as f64;
            kernel.push(gaussian_weight(dx, dy, sigma));
        }
    }
    kernel
}
