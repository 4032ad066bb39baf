//! Fast path for the five point smoothing stencil.
//!
//! The column index only changes every `ny` elements of the linear
//! buffer, so the column-boundary test hoists out of the hot loop by
//! splitting the index range into three contiguous regions: first
//! column, interior columns, last column. Row-boundary tests stay
//! per element. The weight computation is the same as
//! [`crate::solver::naive`], only the branch structure differs, and
//! the interior loop stays branch-light enough to vectorize.

use crate::domain::Grid;
use crate::stencil::*;
use nalgebra::vector;

pub fn apply_step(stencil: &Stencil<5>, input: &Grid, output: &mut Grid) {
    debug_assert!(input.same_size(output));
    let expected_offsets = [
        vector![1, 0],
        vector![0, -1],
        vector![-1, 0],
        vector![0, 1],
        vector![0, 0],
    ];
    debug_assert_eq!(&expected_offsets, stencil.offsets());

    // Linear offsets: +x is +ny, -x is -ny, -y is -1, +y is +1.
    let w = stencil.weights();
    let nx = input.nx();
    let ny = input.ny();
    let size = nx * ny;
    let ny_min_1 = ny - 1;
    let ib = input.buffer();
    let ob = output.buffer_mut();

    if nx == 1 {
        // Degenerate single column, no neighbor column on either side.
        for (k, o) in ob.iter_mut().enumerate() {
            let mut v = w[4] * ib[k];
            if k > 0 {
                v += w[1] * ib[k - 1];
            }
            if k < ny_min_1 {
                v += w[3] * ib[k + 1];
            }
            *o = v;
        }
        return;
    }

    // First column, no column to the left.
    for k in 0..ny {
        let mut v = w[4] * ib[k] + w[0] * ib[k + ny];
        if k % ny > 0 {
            v += w[1] * ib[k - 1];
        }
        if k % ny != ny_min_1 {
            v += w[3] * ib[k + 1];
        }
        ob[k] = v;
    }

    // Interior columns, both column neighbors always present.
    for k in ny..size - ny {
        let mut v =
            w[4] * ib[k] + w[2] * ib[k - ny] + w[0] * ib[k + ny];
        if k % ny > 0 {
            v += w[1] * ib[k - 1];
        }
        if k % ny != ny_min_1 {
            v += w[3] * ib[k + 1];
        }
        ob[k] = v;
    }

    // Last column, no column to the right.
    for k in size - ny..size {
        let mut v = w[4] * ib[k] + w[2] * ib[k - ny];
        if k % ny > 0 {
            v += w[1] * ib[k - 1];
        }
        if k % ny != ny_min_1 {
            v += w[3] * ib[k + 1];
        }
        ob[k] = v;
    }
}
