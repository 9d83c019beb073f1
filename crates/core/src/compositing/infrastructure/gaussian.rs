use crate::compositing::blur_filter::EdgeMode;

/// Kernel size for a blur radius: sigma = radius / 2, size = 6 sigma
/// rounded up to odd. Radii at or below zero collapse to the identity
/// kernel.
pub fn kernel_size_for_radius(radius: f64) -> usize {
    if radius <= 0.0 {
        return 1;
    }
    let sigma = radius / 2.0;
    let size = (sigma * 6.0).ceil() as usize;
    (size | 1).max(3)
}

/// Precompute a normalized 1D Gaussian kernel of the given odd size.
///
/// Sigma is derived as `kernel_size / 6.0` so the kernel covers three
/// standard deviations each side.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = kernel_size as f64 / 6.0;
    let half = (kernel_size / 2) as f64;
    let mut kernel: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel.iter().map(|&v| v as f32).collect()
}

/// Map a possibly out-of-range sample index into `0..len` per `mode`.
///
/// `None` means the sample contributes nothing (Decal).
fn edge_index(i: isize, len: usize, mode: EdgeMode) -> Option<usize> {
    let n = len as isize;
    if (0..n).contains(&i) {
        return Some(i as usize);
    }
    match mode {
        EdgeMode::Repeat => Some(i.rem_euclid(n) as usize),
        EdgeMode::Clamp => Some(i.clamp(0, n - 1) as usize),
        EdgeMode::Mirror => {
            let j = i.rem_euclid(2 * n);
            let reflected = if j < n { j } else { 2 * n - 1 - j };
            Some(reflected as usize)
        }
        EdgeMode::Decal => None,
    }
}

/// Separable Gaussian blur over a whole frame buffer, honoring the edge
/// mode when a tap falls past the frame boundary.
///
/// Horizontal pass applies `kernel_x` into `temp`, vertical pass applies
/// `kernel_y` back into `data`. `temp` is reused across calls in hot
/// paths.
pub fn separable_blur(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel_x: &[f32],
    kernel_y: &[f32],
    mode: EdgeMode,
    temp: &mut Vec<f32>,
) {
    if width == 0 || height == 0 || (kernel_x.len() <= 1 && kernel_y.len() <= 1) {
        return;
    }
    temp.resize(width * height * channels, 0.0);

    let half_x = (kernel_x.len() / 2) as isize;
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel_x.iter().enumerate() {
                    if let Some(sx) = edge_index(x as isize + k as isize - half_x, width, mode) {
                        sum += data[(y * width + sx) * channels + c] as f32 * w;
                    }
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    let half_y = (kernel_y.len() / 2) as isize;
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel_y.iter().enumerate() {
                    if let Some(sy) = edge_index(y as isize + k as isize - half_y, height, mode) {
                        sum += temp[(sy * width + x) * channels + c] * w;
                    }
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
