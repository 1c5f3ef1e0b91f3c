//! Compile-time configuration.
//!
//! Everything here is fixed when the crate is built: the `simd-except` Cargo
//! feature, the lane backend chosen by the build script (`neon`, `sse` or the
//! portable `fallback`), and the thresholds used by the slice drivers.

/// Whether kernels preserve floating-point exception behaviour.
///
/// When set, special lanes are overwritten with a benign value before the fast
/// path runs and are recomputed by the scalar reference afterwards, so no
/// spurious overflow/underflow/invalid flags are raised. When clear, kernels
/// rely purely on post-hoc blending, which is faster.
pub const WANT_SIMD_EXCEPT: bool = cfg!(feature = "simd-except");

/// Slices at most this long are processed on the calling thread even by the
/// `par_*` drivers.
pub const PARALLEL_SIMD_THRESHOLD: usize = 262_144;

/// Number of elements handed to each rayon task.
pub const PARALLEL_CHUNK_SIZE: usize = 16_384;

/// Lane backend compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// AArch64 Advanced SIMD registers.
    Neon,
    /// x86_64 SSE2 registers.
    Sse,
    /// Plain arrays, one scalar operation per lane.
    Portable,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Neon => "neon",
            Backend::Sse => "sse2",
            Backend::Portable => "portable",
        }
    }
}

/// Returns the backend that `F64x2` and `F32x4` are built on.
pub fn active_backend() -> Backend {
    let backend = if cfg!(all(neon, target_arch = "aarch64")) {
        Backend::Neon
    } else if cfg!(all(sse, target_arch = "x86_64")) {
        Backend::Sse
    } else {
        Backend::Portable
    };
    log::debug!(
        "lanemath backend: {} (simd-except: {})",
        backend.name(),
        WANT_SIMD_EXCEPT
    );
    backend
}
