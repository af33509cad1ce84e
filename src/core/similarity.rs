use crate::simd::get_euclidean_distance;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("vector lengths differ: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },
    #[error("input vector has zero variance")]
    ZeroVariance,
    #[error("input vector has zero magnitude")]
    ZeroMagnitude,
}

fn check_shape(x: &[f64], y: &[f64]) -> Result<(), SimilarityError> {
    if x.len() != y.len() {
        return Err(SimilarityError::ShapeMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    Ok(())
}

/// Length of the line segment connecting `x` and `y` in Euclidean n-space.
pub fn euclidean_distance(x: &[f64], y: &[f64]) -> Result<f64, SimilarityError> {
    check_shape(x, y)?;
    let dist_func = get_euclidean_distance();
    Ok(unsafe { dist_func(x, y) })
}

/// Similarity in (0, 1]: `1 / (1 + distance)`. Equals 1 exactly when `x == y`.
pub fn euclidean_similarity(x: &[f64], y: &[f64]) -> Result<f64, SimilarityError> {
    Ok(1.0 / (1.0 + euclidean_distance(x, y)?))
}

pub fn cosine_similarity(x: &[f64], y: &[f64]) -> Result<f64, SimilarityError> {
    check_shape(x, y)?;
    let dot_product: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let norm_x = x.iter().map(|a| a * a).sum::<f64>().sqrt();
    let norm_y = y.iter().map(|a| a * a).sum::<f64>().sqrt();
    if norm_x == 0.0 || norm_y == 0.0 {
        return Err(SimilarityError::ZeroMagnitude);
    }
    Ok(dot_product / (norm_x * norm_y))
}

/// Sample Pearson correlation coefficient between `x` and `y`.
///
/// Each vector is centered on its own mean before the normalized dot product
/// is taken, so the result is in [-1, 1] and invariant under positive scaling
/// and shifting of either input. A constant input (this includes empty and
/// single-element vectors) has no variance to correlate against; that case is
/// reported as [`SimilarityError::ZeroVariance`] rather than a silent NaN.
pub fn pearson_similarity(x: &[f64], y: &[f64]) -> Result<f64, SimilarityError> {
    check_shape(x, y)?;
    if x.is_empty() {
        return Err(SimilarityError::ZeroVariance);
    }

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y.iter()) {
        let dx = a - x_mean;
        let dy = b - y_mean;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        return Err(SimilarityError::ZeroVariance);
    }

    Ok(sxy / (sxx * syy).sqrt())
}
