//! The domain is a rectangular grid of cell values backed by one
//! contiguous column-major buffer, see [`crate::util::indexing`].
//! Solvers read one grid and write a second one of the same size,
//! callers swap the two between steps instead of copying.

use crate::error::Error;
use crate::util::indexing;
use crate::util::*;
use nalgebra::vector;
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ptr::NonNull;

/// Buffers are aligned for vectorized inner loops.
/// Alignment is a performance hint only, output values do not depend on it.
pub const BUFFER_ALIGN: usize = 32;

/// Owned aligned buffer of `f64` cell values, zero-initialized.
/// Stands in for the fftw `AlignedVec` we used to get this from.
struct AlignedBuffer {
    ptr: NonNull<f64>,
    len: usize,
}

impl AlignedBuffer {
    fn zeroed(len: usize) -> Result<Self, Error> {
        debug_assert!(len > 0);
        let bytes = len * std::mem::size_of::<f64>();
        let layout = Layout::from_size_align(bytes, BUFFER_ALIGN)
            .map_err(|_| Error::Allocation { bytes })?;
        // SAFETY: layout has non-zero size, null is checked below.
        let raw = unsafe { alloc_zeroed(layout) };
        let ptr = NonNull::new(raw as *mut f64)
            .ok_or(Error::Allocation { bytes })?;
        Ok(AlignedBuffer { ptr, len })
    }

    fn as_slice(&self) -> &[f64] {
        // SAFETY: ptr is valid for len elements for the buffer's lifetime.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn as_mut_slice(&mut self) -> &mut [f64] {
        // SAFETY: as above, and we hold &mut self.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for AlignedBuffer {
    fn drop(&mut self) {
        let bytes = self.len * std::mem::size_of::<f64>();
        let layout = Layout::from_size_align(bytes, BUFFER_ALIGN).unwrap();
        // SAFETY: allocated in zeroed with the same layout.
        unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
    }
}

// NonNull suppresses the auto impls, the buffer is an exclusive owner.
unsafe impl Send for AlignedBuffer {}
unsafe impl Sync for AlignedBuffer {}

pub struct Grid {
    exclusive_bounds: Coord<2>,
    buffer: AlignedBuffer,
}

impl Grid {
    /// Allocate an all-zero `nx` by `ny` grid.
    /// Allocation failure is reported rather than aborting.
    pub fn zeroed(nx: usize, ny: usize) -> Result<Self, Error> {
        // Hard invariant, a zero-sized allocation would be unsound.
        assert!(nx > 0 && ny > 0);
        let exclusive_bounds = vector![nx as i32, ny as i32];
        let buffer =
            AlignedBuffer::zeroed(indexing::buffer_size(&exclusive_bounds))?;
        Ok(Grid {
            exclusive_bounds,
            buffer,
        })
    }

    pub fn nx(&self) -> usize {
        self.exclusive_bounds[0] as usize
    }

    pub fn ny(&self) -> usize {
        self.exclusive_bounds[1] as usize
    }

    pub fn exclusive_bounds(&self) -> &Coord<2> {
        &self.exclusive_bounds
    }

    pub fn buffer_size(&self) -> usize {
        indexing::buffer_size(&self.exclusive_bounds)
    }

    pub fn same_size(&self, other: &Grid) -> bool {
        self.exclusive_bounds == other.exclusive_bounds
    }

    pub fn buffer(&self) -> &[f64] {
        self.buffer.as_slice()
    }

    pub fn buffer_mut(&mut self) -> &mut [f64] {
        self.buffer.as_mut_slice()
    }

    pub fn contains(&self, coord: &Coord<2>) -> bool {
        coord[0] >= 0
            && coord[0] < self.exclusive_bounds[0]
            && coord[1] >= 0
            && coord[1] < self.exclusive_bounds[1]
    }

    pub fn coord_to_linear(&self, coord: &Coord<2>) -> usize {
        indexing::coord_to_linear(coord, &self.exclusive_bounds)
    }

    pub fn linear_to_coord(&self, linear_index: usize) -> Coord<2> {
        indexing::linear_to_coord(linear_index, &self.exclusive_bounds)
    }

    #[track_caller]
    pub fn view(&self, coord: &Coord<2>) -> f64 {
        debug_assert!(
            self.contains(coord),
            "{:?} does not contain {:?}",
            self.exclusive_bounds,
            coord
        );
        self.buffer()[self.coord_to_linear(coord)]
    }

    #[track_caller]
    pub fn modify(&mut self, coord: &Coord<2>, value: f64) {
        debug_assert!(
            self.contains(coord),
            "{:?} does not contain {:?}",
            self.exclusive_bounds,
            coord
        );
        let index = self.coord_to_linear(coord);
        self.buffer_mut()[index] = value;
    }

    pub fn set_values<F: Fn(Coord<2>) -> f64>(&mut self, f: F) {
        let exclusive_bounds = self.exclusive_bounds;
        for (k, value_mut) in self.buffer_mut().iter_mut().enumerate() {
            *value_mut = f(indexing::linear_to_coord(k, &exclusive_bounds));
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn zeroed_grid() {
        let grid = Grid::zeroed(5, 3).unwrap();
        assert_eq!(grid.nx(), 5);
        assert_eq!(grid.ny(), 3);
        assert_eq!(grid.buffer_size(), 15);
        assert_eq!(grid.buffer().len(), 15);
        for v in grid.buffer() {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn buffer_alignment() {
        for n in [1, 3, 17, 1000] {
            let grid = Grid::zeroed(n, n).unwrap();
            assert_eq!(grid.buffer().as_ptr() as usize % BUFFER_ALIGN, 0);
        }
    }

    #[test]
    fn view_modify() {
        let mut grid = Grid::zeroed(4, 7).unwrap();
        grid.modify(&vector![2, 5], 42.0);
        assert_approx_eq!(f64, grid.view(&vector![2, 5]), 42.0);
        // (2, 5) -> 2 * 7 + 5
        assert_approx_eq!(f64, grid.buffer()[19], 42.0);
    }

    #[test]
    fn set_values_linear_layout() {
        let mut grid = Grid::zeroed(3, 4).unwrap();
        grid.set_values(|coord| (coord[0] * 4 + coord[1]) as f64);
        for (k, v) in grid.buffer().iter().enumerate() {
            assert_approx_eq!(f64, *v, k as f64);
        }
    }

    #[test]
    fn contains_bounds() {
        let grid = Grid::zeroed(3, 4).unwrap();
        assert!(grid.contains(&vector![0, 0]));
        assert!(grid.contains(&vector![2, 3]));
        assert!(!grid.contains(&vector![3, 0]));
        assert!(!grid.contains(&vector![0, 4]));
        assert!(!grid.contains(&vector![-1, 0]));
        assert!(!grid.contains(&vector![0, -1]));
    }
}
