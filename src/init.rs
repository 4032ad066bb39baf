//! Grid initialization.
//!
//! The standard test input is a checkerboard over an 8x8 block
//! partition of the grid, block size `nx/8` by `ny/8` with integer
//! division, so grids smaller than 8 in a dimension get empty blocks.

use crate::domain::Grid;
use crate::util::*;
use nalgebra::vector;

/// Blocks per dimension of the checkerboard partition.
pub const PATTERN_BLOCKS: i32 = 8;

/// Value of the "on" cells, the rest stay zero.
pub const PATTERN_HIGH: f64 = 100.0;

/// Fill with the block checkerboard: a cell is high when its block's
/// row index plus column index is odd.
pub fn checkerboard(image: &mut Grid) {
    let nx = image.nx() as i32;
    let ny = image.ny() as i32;
    for j in 0..PATTERN_BLOCKS {
        for i in 0..PATTERN_BLOCKS {
            if (i + j) % 2 == 0 {
                continue;
            }
            for jj in j * ny / PATTERN_BLOCKS..(j + 1) * ny / PATTERN_BLOCKS {
                for ii in
                    i * nx / PATTERN_BLOCKS..(i + 1) * nx / PATTERN_BLOCKS
                {
                    image.modify(&vector![ii, jj], PATTERN_HIGH);
                }
            }
        }
    }
}

/// Block coordinate a cell falls in, for checking the pattern.
pub fn block_of(coord: &Coord<2>, exclusive_bounds: &Coord<2>) -> Coord<2> {
    vector![
        coord[0] * PATTERN_BLOCKS / exclusive_bounds[0],
        coord[1] * PATTERN_BLOCKS / exclusive_bounds[1]
    ]
}
