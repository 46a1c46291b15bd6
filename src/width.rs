//! Runtime vector-width discovery
//!
//! The kernel never hard-codes a SIMD width. Instead it asks this module how
//! many 32-bit lanes the hardware vector unit holds, discovered at run time
//! so the same binary adapts to whatever the processor exposes:
//!
//! | Architecture | Feature  | Lanes |
//! |--------------|----------|-------|
//! | `x86_64`/x86 | AVX-512F | 16    |
//! | `x86_64`/x86 | AVX2     | 8     |
//! | `x86_64`/x86 | SSE2     | 4     |
//! | aarch64      | NEON     | 4     |
//! | wasm32       | simd128  | 4     |
//! | anything else| scalar   | 1     |
//!
//! The probe result is cached process-wide: hardware capabilities do not
//! change mid-process, so one detection pass serves every kernel call.

use std::sync::OnceLock;

static NATIVE_WIDTH: OnceLock<(usize, &'static str)> = OnceLock::new();

/// Number of 32-bit lanes the native vector unit holds
///
/// Always at least 1. Detected once per process and cached.
///
/// # Example
///
/// ```
/// let lanes = medir::width::native_lanes();
/// assert!(lanes >= 1);
/// ```
#[must_use]
pub fn native_lanes() -> usize {
    probe_cached().0
}

/// Human-readable name of the instruction set backing [`native_lanes`]
///
/// Used in the startup banner and the final report.
#[must_use]
pub fn simd_label() -> &'static str {
    probe_cached().1
}

/// Native vector register width in bits (lanes × 32)
#[must_use]
pub fn vector_bits() -> usize {
    native_lanes() * 32
}

fn probe_cached() -> (usize, &'static str) {
    *NATIVE_WIDTH.get_or_init(probe)
}

/// Query hardware vector capabilities
///
/// Detection is dynamic where the platform supports it (x86 CPUID) and
/// compile-time elsewhere (NEON is baseline on aarch64, simd128 is a wasm
/// target feature).
fn probe() -> (usize, &'static str) {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        if is_x86_feature_detected!("avx512f") {
            (16, "AVX-512F")
        } else if is_x86_feature_detected!("avx2") {
            (8, "AVX2")
        } else if is_x86_feature_detected!("sse2") {
            (4, "SSE2")
        } else {
            (1, "scalar")
        }
    }

    #[cfg(target_arch = "aarch64")]
    {
        (4, "NEON")
    }

    #[cfg(target_arch = "wasm32")]
    {
        if cfg!(target_feature = "simd128") {
            (4, "SIMD128")
        } else {
            (1, "scalar")
        }
    }

    #[cfg(not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "wasm32"
    )))]
    {
        (1, "scalar")
    }
}
