//! medir: scalable-vector SAXPY throughput benchmark
//!
//! Measures sustained single-precision floating-point throughput by running
//! a width-agnostic SAXPY kernel (`Y = a * X + Y`) over a fixed buffer for
//! a wall-clock budget, then reporting GFLOPS and spot-checking results.
//!
//! The core is the scalable-vector sweep: one code path that is correct for
//! any hardware lane width because the width is queried at run time and a
//! per-chunk lane predicate gates loads, the fused multiply-add, and stores
//! so the partial tail of a buffer whose length is not a multiple of the
//! width needs no separate scalar cleanup loop.
//!
//! ## Architecture
//!
//! ```text
//! width (runtime lane query) ─┐
//! mask  (lane predicate)     ─┼→ kernel (masked SAXPY sweep) → bench (time-boxed loop + report)
//! error (precondition)       ─┘
//! ```
//!
//! ## Modules
//!
//! - [`width`] - Runtime vector-width capability query
//! - [`mask`] - Per-chunk active-lane predicates
//! - [`kernel`] - Width-agnostic SAXPY with FMA semantics
//! - [`bench`] - Time-boxed execution loop, throughput report, verification
//! - [`error`] - Crate error type and `Result` alias
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use medir::{BenchConfig, SaxpyBench};
//!
//! let config = BenchConfig {
//!     len: 4096,
//!     scale: 2.5,
//!     target: Duration::from_millis(10),
//!     progress_every: 0,
//! };
//! let report = SaxpyBench::new(config).run().unwrap();
//! assert!(report.iterations >= 1);
//! assert!(report.all_samples_match());
//! ```

pub mod bench;
pub mod error;
pub mod kernel;
pub mod mask;
pub mod width;

pub use bench::{sample_indices, BenchConfig, BenchReport, SampleCheck, SaxpyBench};
pub use error::{MedirError, Result};
pub use kernel::{saxpy, saxpy_reference, saxpy_with_lanes, MAX_LANES};
pub use mask::LaneMask;
pub use width::{native_lanes, simd_label, vector_bits};
