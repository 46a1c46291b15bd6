//! Time-boxed SAXPY execution loop
//!
//! Runs the kernel repeatedly against a fixed workload until a wall-clock
//! budget elapses, then reports aggregate throughput and spot-checks a
//! handful of output positions against an independently computed expected
//! value.
//!
//! ## Measurement discipline
//!
//! Before every iteration the accumulator is restored from an immutable
//! baseline, so each iteration performs numerically identical work: without
//! the reset, values would grow across iterations and the workload would
//! drift away from what is being measured. The stop condition is a
//! monotonic elapsed-time check against the target duration; the iteration
//! count is an output of the run, never an input.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use medir::bench::{BenchConfig, SaxpyBench};
//!
//! let config = BenchConfig {
//!     len: 1024,
//!     scale: 2.5,
//!     target: Duration::from_millis(5),
//!     progress_every: 0,
//! };
//! let report = SaxpyBench::new(config).run().unwrap();
//! assert!(report.iterations >= 1);
//! assert!(report.samples.iter().all(|s| s.matches()));
//! ```

use std::io::Write;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kernel::saxpy;
use crate::width::native_lanes;

/// Interior index sampled by the verification step (when in range)
const INTERIOR_SAMPLE: usize = 42;

/// Benchmark parameters
///
/// All values are fixed for a run; the defaults reproduce the canonical
/// workload (10 million elements, a = 2.5, two-minute budget).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Buffer length in elements
    pub len: usize,
    /// Scalar multiplier applied by the kernel
    pub scale: f32,
    /// Wall-clock budget for the measurement loop
    pub target: Duration,
    /// Print a progress line every this many iterations (0 disables)
    pub progress_every: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            len: 10_000_000,
            scale: 2.5,
            target: Duration::from_secs(120),
            progress_every: 10,
        }
    }
}

/// One verification sample: expected vs observed at a buffer index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleCheck {
    /// Buffer position checked
    pub index: usize,
    /// Independently recomputed `fma(a, x[index], y0[index])`
    pub expected: f32,
    /// Value the kernel left in the accumulator
    pub got: f32,
}

impl SampleCheck {
    /// Bit-exact agreement between expected and observed
    #[must_use]
    pub fn matches(&self) -> bool {
        self.expected.to_bits() == self.got.to_bits()
    }
}

/// Aggregate result of a benchmark run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Kernel invocations completed before the budget elapsed
    pub iterations: u64,
    /// Total wall-clock time, sub-second resolution
    pub elapsed_secs: f64,
    /// Achieved throughput in GFLOPS (2 FLOPs per element per iteration)
    pub gflops: f64,
    /// Lane width the kernel ran with
    pub lanes: usize,
    /// Sampled correctness checks
    pub samples: Vec<SampleCheck>,
}

impl BenchReport {
    /// Whether every sampled position agrees bit-exactly
    #[must_use]
    pub fn all_samples_match(&self) -> bool {
        self.samples.iter().all(SampleCheck::matches)
    }
}

impl std::fmt::Display for BenchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "---------------------")?;
        writeln!(f, "Total iterations: {}", self.iterations)?;
        writeln!(f, "Total time:       {:.6} seconds", self.elapsed_secs)?;
        writeln!(f, "Performance:      {:.4} GFLOPS", self.gflops)?;
        writeln!(f)?;
        writeln!(f, "Verifying a few results...")?;
        for sample in &self.samples {
            writeln!(
                f,
                "y[{}]: Expected={}, Got={}",
                sample.index, sample.expected, sample.got
            )?;
        }
        Ok(())
    }
}

/// Fixed SAXPY workload driven by the time-boxed loop
///
/// Owns the three buffers exclusively: the input `x` and the baseline `y0`
/// are initialized once and never mutated afterwards; the accumulator `y`
/// is overwritten from `y0` at the start of every iteration. All memory is
/// allocated up front and never resized.
#[derive(Debug)]
pub struct SaxpyBench {
    config: BenchConfig,
    x: Vec<f32>,
    y: Vec<f32>,
    y0: Vec<f32>,
}

impl SaxpyBench {
    /// Allocate and initialize the workload buffers
    ///
    /// `x[i] = i` and `y0[i] = len - i`, the canonical fill pattern.
    #[must_use]
    pub fn new(config: BenchConfig) -> Self {
        let len = config.len;
        #[allow(clippy::cast_precision_loss)] // indices as benchmark fill data
        let x: Vec<f32> = (0..len).map(|i| i as f32).collect();
        #[allow(clippy::cast_precision_loss)]
        let y0: Vec<f32> = (0..len).map(|i| (len - i) as f32).collect();
        let y = y0.clone();
        Self { config, x, y, y0 }
    }

    /// Parameters this workload was built with
    #[must_use]
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Accumulator contents after the most recent kernel call
    #[must_use]
    pub fn output(&self) -> &[f32] {
        &self.y
    }

    /// Run the time-boxed measurement loop
    ///
    /// Iterates restore-baseline → kernel → count until the configured
    /// budget elapses, printing a progress line every `progress_every`-th
    /// iteration. At least one iteration runs even for a zero budget.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::MedirError::InvalidArgument`] from the
    /// kernel; with the equal-length buffers built by [`SaxpyBench::new`]
    /// this does not occur in practice.
    pub fn run(&mut self) -> Result<BenchReport> {
        let start = Instant::now();
        let mut iterations: u64 = 0;

        loop {
            // Reset the accumulator so every iteration does identical work
            self.y.copy_from_slice(&self.y0);

            saxpy(self.config.scale, &self.x, &mut self.y)?;
            iterations += 1;

            if self.config.progress_every > 0 && iterations % self.config.progress_every == 0 {
                print!(
                    "\rElapsed time: {}s, Iterations: {}",
                    start.elapsed().as_secs(),
                    iterations
                );
                let _ = std::io::stdout().flush();
            }

            if start.elapsed() >= self.config.target {
                break;
            }
        }

        let elapsed_secs = start.elapsed().as_secs_f64();
        Ok(self.report(iterations, elapsed_secs))
    }

    /// Assemble the report for a finished run
    fn report(&self, iterations: u64, elapsed_secs: f64) -> BenchReport {
        #[allow(clippy::cast_precision_loss)]
        let total_flops = 2.0 * self.config.len as f64 * iterations as f64;
        let gflops = if elapsed_secs > 0.0 {
            total_flops / elapsed_secs / 1e9
        } else {
            0.0
        };

        let samples = sample_indices(self.config.len)
            .into_iter()
            .map(|index| SampleCheck {
                index,
                expected: self.config.scale.mul_add(self.x[index], self.y0[index]),
                got: self.y[index],
            })
            .collect();

        BenchReport {
            iterations,
            elapsed_secs,
            gflops,
            lanes: native_lanes(),
            samples,
        }
    }
}

/// Verification sample positions: first, second, an interior index, the
/// midpoint, and the last index, clamped to the buffer and deduplicated
/// for short buffers
#[must_use]
pub fn sample_indices(len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let candidates = [0, 1, INTERIOR_SAMPLE, len / 2, len - 1];
    let mut indices = Vec::with_capacity(candidates.len());
    for idx in candidates {
        if idx < len && !indices.contains(&idx) {
            indices.push(idx);
        }
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::saxpy_reference;

    fn quick_config(len: usize, target: Duration) -> BenchConfig {
        BenchConfig {
            len,
            scale: 2.5,
            target,
            progress_every: 0,
        }
    }

    #[test]
    fn test_default_config_matches_canonical_workload() {
        let config = BenchConfig::default();
        assert_eq!(config.len, 10_000_000);
        assert!((config.scale - 2.5).abs() < f32::EPSILON);
        assert_eq!(config.target, Duration::from_secs(120));
        assert_eq!(config.progress_every, 10);
    }

    #[test]
    fn test_new_initializes_canonical_fill() {
        let bench = SaxpyBench::new(quick_config(16, Duration::ZERO));
        assert_eq!(bench.x[0], 0.0);
        assert_eq!(bench.x[15], 15.0);
        assert_eq!(bench.y0[0], 16.0);
        assert_eq!(bench.y0[15], 1.0);
        assert_eq!(bench.y, bench.y0);
    }

    #[test]
    fn test_run_executes_at_least_one_iteration() {
        let report = SaxpyBench::new(quick_config(64, Duration::ZERO))
            .run()
            .unwrap();
        assert!(report.iterations >= 1);
        assert!(report.elapsed_secs > 0.0);
        assert!(report.gflops > 0.0);
        assert!(report.lanes >= 1);
    }

    #[test]
    fn test_run_samples_all_match() {
        let report = SaxpyBench::new(quick_config(128, Duration::from_millis(5)))
            .run()
            .unwrap();
        assert!(report.all_samples_match());
        for sample in &report.samples {
            assert!(sample.matches());
        }
    }

    #[test]
    fn test_run_result_independent_of_iteration_count() {
        // Many time-boxed iterations must leave y exactly as one kernel
        // call from the baseline does: the restore discipline makes the
        // outcome independent of how many iterations fit in the budget
        let mut bench = SaxpyBench::new(quick_config(256, Duration::from_millis(10)));
        let report = bench.run().unwrap();
        assert!(report.iterations >= 1);

        let mut expected = bench.y0.clone();
        saxpy_reference(bench.config.scale, &bench.x, &mut expected).unwrap();
        assert_eq!(bench.output(), expected.as_slice());
    }

    #[test]
    fn test_run_longer_target_never_fewer_iterations() {
        let short = SaxpyBench::new(quick_config(128, Duration::from_millis(2)))
            .run()
            .unwrap();
        let long = SaxpyBench::new(quick_config(128, Duration::from_millis(60)))
            .run()
            .unwrap();
        assert!(
            long.iterations >= short.iterations,
            "long budget ran {} iterations, short ran {}",
            long.iterations,
            short.iterations
        );
    }

    #[test]
    fn test_run_never_stops_before_target() {
        let target = Duration::from_millis(20);
        let start = Instant::now();
        SaxpyBench::new(quick_config(64, target)).run().unwrap();
        assert!(start.elapsed() >= target);
    }

    #[test]
    fn test_sample_indices_large_buffer() {
        let n = 10_000_000;
        assert_eq!(sample_indices(n), vec![0, 1, 42, n / 2, n - 1]);
    }

    #[test]
    fn test_sample_indices_short_buffers() {
        assert!(sample_indices(0).is_empty());
        assert_eq!(sample_indices(1), vec![0]);
        assert_eq!(sample_indices(2), vec![0, 1]);
        // len 8: midpoint 4, last 7; interior 42 out of range
        assert_eq!(sample_indices(8), vec![0, 1, 4, 7]);
    }

    #[test]
    fn test_sample_indices_deduplicates() {
        // len 43: interior index 42 collides with the last index
        let indices = sample_indices(43);
        assert_eq!(indices, vec![0, 1, 42, 21]);
    }

    #[test]
    fn test_sample_indices_always_in_bounds() {
        for len in [1, 2, 3, 7, 42, 43, 85, 100] {
            for idx in sample_indices(len) {
                assert!(idx < len, "index {idx} out of bounds for len {len}");
            }
        }
    }

    #[test]
    fn test_report_display_format() {
        let report = BenchReport {
            iterations: 12,
            elapsed_secs: 1.5,
            gflops: 3.25,
            lanes: 8,
            samples: vec![SampleCheck {
                index: 42,
                expected: 9.5,
                got: 9.5,
            }],
        };
        let text = report.to_string();
        assert!(text.contains("Total iterations: 12"));
        assert!(text.contains("Total time:       1.500000 seconds"));
        assert!(text.contains("Performance:      3.2500 GFLOPS"));
        assert!(text.contains("y[42]: Expected=9.5, Got=9.5"));
    }

    #[test]
    fn test_sample_check_mismatch_detected() {
        let sample = SampleCheck {
            index: 0,
            expected: 1.0,
            got: 1.000_001,
        };
        assert!(!sample.matches());
    }
}
