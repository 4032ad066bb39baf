//! Reference stencil application.
//!
//! Walks every cell and sums the weighted neighbors that actually lie
//! inside the grid. Missing neighbors contribute nothing: boundary
//! cells see a weight sum below 1.0 and decay toward zero. The direct
//! solver must match this path bit-for-bit up to summation order.

use crate::domain::Grid;
use crate::stencil::*;

pub fn apply_step<const NEIGHBORHOOD_SIZE: usize>(
    stencil: &Stencil<NEIGHBORHOOD_SIZE>,
    input: &Grid,
    output: &mut Grid,
) {
    debug_assert!(input.same_size(output));
    let weights = stencil.weights();
    for k in 0..input.buffer_size() {
        let coord = input.linear_to_coord(k);
        let mut result = 0.0;
        for (n, offset) in stencil.offsets().iter().enumerate() {
            let neighbor = coord + offset;
            if input.contains(&neighbor) {
                result += weights[n] * input.view(&neighbor);
            }
        }
        output.buffer_mut()[k] = result;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::stencil::standard_stencils::*;
    use float_cmp::assert_approx_eq;
    use nalgebra::vector;

    #[test]
    fn hot_pixel_spread() {
        let stencil = smoothing_2d();
        let mut input = Grid::zeroed(5, 5).unwrap();
        let mut output = Grid::zeroed(5, 5).unwrap();
        input.modify(&vector![2, 2], 1.0);

        apply_step(&stencil, &input, &mut output);

        assert_approx_eq!(f64, output.view(&vector![2, 2]), CENTER_WEIGHT);
        for offset in
            [vector![1, 0], vector![-1, 0], vector![0, 1], vector![0, -1]]
        {
            let v = output.view(&(vector![2, 2] + offset));
            assert_approx_eq!(f64, v, NEIGHBOR_WEIGHT);
        }
        let touched = 0.6 + 4.0 * 0.1;
        let total: f64 = output.buffer().iter().sum();
        assert_approx_eq!(f64, total, touched, ulps = 2);
    }

    #[test]
    fn boundary_decay() {
        let c = 3.0;
        let stencil = smoothing_2d();
        let mut input = Grid::zeroed(6, 4).unwrap();
        let mut output = Grid::zeroed(6, 4).unwrap();
        input.set_values(|_| c);

        apply_step(&stencil, &input, &mut output);

        for k in 0..output.buffer_size() {
            let coord = output.linear_to_coord(k);
            let on_x_edge = coord[0] == 0 || coord[0] == 5;
            let on_y_edge = coord[1] == 0 || coord[1] == 3;
            let v = output.buffer()[k];
            if on_x_edge && on_y_edge {
                // Corner loses two neighbor terms.
                assert_approx_eq!(f64, v, 0.8 * c, ulps = 2);
            } else if on_x_edge || on_y_edge {
                assert_approx_eq!(f64, v, 0.9 * c, ulps = 2);
            } else {
                assert_approx_eq!(f64, v, c, ulps = 2);
            }
            if on_x_edge || on_y_edge {
                assert!(v < c);
            }
        }
    }

    #[test]
    fn interior_convexity() {
        let stencil = smoothing_2d();
        let mut input = Grid::zeroed(7, 7).unwrap();
        let mut output = Grid::zeroed(7, 7).unwrap();
        // Values all in [2, 5].
        input.set_values(|coord| {
            2.0 + ((coord[0] * 3 + coord[1] * 5) % 4) as f64
        });

        apply_step(&stencil, &input, &mut output);

        for i in 1..6 {
            for j in 1..6 {
                let v = output.view(&vector![i, j]);
                assert!((2.0..=5.0).contains(&v));
            }
        }
    }

    #[test]
    fn single_cell_grid() {
        let stencil = smoothing_2d();
        let mut input = Grid::zeroed(1, 1).unwrap();
        let mut output = Grid::zeroed(1, 1).unwrap();
        input.modify(&vector![0, 0], 10.0);

        apply_step(&stencil, &input, &mut output);

        // Only the center term survives.
        assert_approx_eq!(f64, output.view(&vector![0, 0]), 6.0);
    }
}
