//! Column-major linear indexing.
//!
//! The buffer stores all rows of column 0, then column 1, and so on.
//! Cell `(i, j)` lives at `k = j + i * ny`, so the in-column neighbor
//! is `k ± 1` and the in-row neighbor is `k ± ny`.

use crate::util::*;
use nalgebra::vector;

pub fn buffer_size(exclusive_bounds: &Coord<2>) -> usize {
    debug_assert!(exclusive_bounds[0] > 0 && exclusive_bounds[1] > 0);
    exclusive_bounds[0] as usize * exclusive_bounds[1] as usize
}

pub fn coord_to_linear(coord: &Coord<2>, exclusive_bounds: &Coord<2>) -> usize {
    debug_assert!(coord[0] >= 0 && coord[1] >= 0);
    debug_assert!(coord[0] < exclusive_bounds[0]);
    debug_assert!(coord[1] < exclusive_bounds[1]);
    coord[0] as usize * exclusive_bounds[1] as usize + coord[1] as usize
}

pub fn linear_to_coord(
    linear_index: usize,
    exclusive_bounds: &Coord<2>,
) -> Coord<2> {
    debug_assert!(linear_index < buffer_size(exclusive_bounds));
    let ny = exclusive_bounds[1] as usize;
    vector![(linear_index / ny) as i32, (linear_index % ny) as i32]
}
