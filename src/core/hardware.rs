/// Hardware Detection Module
/// Queries CPU features at runtime.

#[derive(Debug, Clone, Copy)]
pub struct CpuFeatures {
    pub avx2: bool,
    pub fma: bool,
}

impl CpuFeatures {
    #[cfg(target_arch = "x86_64")]
    pub fn detect() -> Self {
        Self {
            avx2: is_x86_feature_detected!("avx2"),
            fma: is_x86_feature_detected!("fma"),
        }
    }

    #[cfg(not(target_arch = "x86_64"))]
    pub fn detect() -> Self {
        Self {
            avx2: false,
            fma: false,
        }
    }

    /// True when the vectorized distance kernel will be dispatched.
    pub fn simd_active(&self) -> bool {
        self.avx2 && self.fma
    }
}
