//! medir: SAXPY throughput benchmark binary
//!
//! Runs the canonical workload (10 million elements, a = 2.5, two-minute
//! budget) against the width-agnostic kernel and prints a throughput report
//! with sampled verification lines. All parameters are compile-time
//! constants; no command-line arguments are consumed.

use medir::width::{native_lanes, simd_label, vector_bits};
use medir::{BenchConfig, SaxpyBench};

fn main() {
    let config = BenchConfig::default();

    println!("SAXPY Throughput Benchmark");
    println!("---------------------");
    println!("Target duration: {} seconds", config.target.as_secs());
    println!("Vector size:     {} elements", config.len);
    println!(
        "Vector width:    {} bits ({} x f32 lanes, {})",
        vector_bits(),
        native_lanes(),
        simd_label()
    );
    println!("---------------------");

    println!("Initializing vectors...");
    let mut bench = SaxpyBench::new(config);
    println!("Initialization complete. Starting computation.");

    match bench.run() {
        Ok(report) => {
            println!();
            println!("Computation finished.");
            print!("{report}");
        },
        Err(err) => {
            eprintln!("medir: {err}");
            std::process::exit(1);
        },
    }
}
