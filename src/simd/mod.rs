pub mod avx2;
pub mod distance;

pub type DistanceFunc = unsafe fn(&[f64], &[f64]) -> f64;

pub fn get_euclidean_distance() -> DistanceFunc {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return avx2::euclidean_distance_avx2;
        }
    }

    // Fallback
    wrapper_scalar
}

unsafe fn wrapper_scalar(a: &[f64], b: &[f64]) -> f64 {
    distance::euclidean_distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_dispatched_kernel_matches_scalar() {
        let mut rng = rand::thread_rng();
        // 37 elements exercises both the vectorized body and the tail loop.
        let a: Vec<f64> = (0..37).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let b: Vec<f64> = (0..37).map(|_| rng.gen_range(-10.0..10.0)).collect();

        let scalar = distance::euclidean_distance(&a, &b);
        let dispatched = unsafe { get_euclidean_distance()(&a, &b) };

        assert!(
            (scalar - dispatched).abs() < 1e-9,
            "scalar = {}, dispatched = {}",
            scalar,
            dispatched
        );
    }
}
