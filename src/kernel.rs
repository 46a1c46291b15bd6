//! Width-agnostic SAXPY kernel
//!
//! Computes `y[i] = a * x[i] + y[i]` element-wise with a single fused
//! multiply-add per element, swept in chunks of the runtime-discovered
//! native vector width. A [`LaneMask`] gates the loads and stores of every
//! chunk, so the final partial chunk of a buffer whose length is not a
//! multiple of the width goes through the same code path as the full
//! chunks, with no separate scalar cleanup loop.
//!
//! ## FMA semantics
//!
//! Every element is produced by one `f32::mul_add`: a single rounding step,
//! matching hardware FMA behavior. The result is bit-exact against
//! [`saxpy_reference`], which applies the same operation scalar-wise.

use crate::error::{MedirError, Result};
use crate::mask::LaneMask;
use crate::width::native_lanes;

/// Upper bound on supported lane counts, sized for the chunk staging
/// buffers (well above any width [`native_lanes`] reports)
pub const MAX_LANES: usize = 64;

/// SAXPY over the native vector width: `y = a * x + y`
///
/// Queries the hardware lane width once per call and sweeps both buffers in
/// masked chunks of that width.
///
/// # Errors
///
/// Returns [`MedirError::InvalidArgument`] if `x` and `y` differ in length.
/// The check runs before any element access; `y` is never touched on error.
///
/// # Example
///
/// ```
/// let x = vec![0.0_f32, 1.0, 2.0, 3.0];
/// let mut y = vec![1.0_f32; 4];
/// medir::kernel::saxpy(2.0, &x, &mut y).unwrap();
/// assert_eq!(y, vec![1.0, 3.0, 5.0, 7.0]);
/// ```
pub fn saxpy(a: f32, x: &[f32], y: &mut [f32]) -> Result<()> {
    saxpy_with_lanes(a, x, y, native_lanes())
}

/// SAXPY with an explicit lane width
///
/// Same contract as [`saxpy`], but sweeps in chunks of `lanes` instead of
/// the detected native width. The result is identical for every width;
/// exposing the parameter lets tests and tuning runs exercise the masked
/// tail path at widths the local hardware does not report.
///
/// # Errors
///
/// Returns [`MedirError::InvalidArgument`] if the buffer lengths differ,
/// if `lanes` is zero, or if `lanes` exceeds [`MAX_LANES`].
pub fn saxpy_with_lanes(a: f32, x: &[f32], y: &mut [f32], lanes: usize) -> Result<()> {
    if x.len() != y.len() {
        return Err(MedirError::InvalidArgument {
            reason: format!(
                "operand lengths differ: x has {} elements, y has {}",
                x.len(),
                y.len()
            ),
        });
    }
    if lanes == 0 || lanes > MAX_LANES {
        return Err(MedirError::InvalidArgument {
            reason: format!("lane width {lanes} outside supported range 1..={MAX_LANES}"),
        });
    }

    sweep(a, x, y, lanes);
    Ok(())
}

/// The scalable-width sweep
///
/// Per chunk: build the lane predicate, perform a masked load (inactive
/// lanes forced to zero, never dereferenced), one FMA across all lanes,
/// then a masked store writing only the active lanes.
fn sweep(a: f32, x: &[f32], y: &mut [f32], width: usize) {
    let n = x.len();
    let mut xv = [0.0_f32; MAX_LANES];
    let mut yv = [0.0_f32; MAX_LANES];

    let mut i = 0;
    while i < n {
        let mask = LaneMask::for_offset(i, n, width);

        for lane in 0..width {
            if mask.active(lane) {
                xv[lane] = x[i + lane];
                yv[lane] = y[i + lane];
            } else {
                xv[lane] = 0.0;
                yv[lane] = 0.0;
            }
        }

        // Full-width FMA; inactive lanes compute a*0+0, a defined value
        // that the masked store below never writes back
        for lane in 0..width {
            yv[lane] = a.mul_add(xv[lane], yv[lane]);
        }

        for lane in 0..width {
            if mask.active(lane) {
                y[i + lane] = yv[lane];
            }
        }

        i += width;
    }
}

/// Scalar FMA reference: `y[i] = fma(a, x[i], y[i])`
///
/// One `f32::mul_add` per element, the same operation the vectorized sweep
/// applies, so results are bit-exact between the two.
///
/// # Errors
///
/// Returns [`MedirError::InvalidArgument`] if `x` and `y` differ in length.
pub fn saxpy_reference(a: f32, x: &[f32], y: &mut [f32]) -> Result<()> {
    if x.len() != y.len() {
        return Err(MedirError::InvalidArgument {
            reason: format!(
                "operand lengths differ: x has {} elements, y has {}",
                x.len(),
                y.len()
            ),
        });
    }

    for (yi, &xi) in y.iter_mut().zip(x.iter()) {
        *yi = a.mul_add(xi, *yi);
    }
    Ok(())
}
