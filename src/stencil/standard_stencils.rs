use crate::stencil::*;

/// Weight kept by the cell itself.
pub const CENTER_WEIGHT: f64 = 0.6;

/// Weight of each of the four grid neighbors.
pub const NEIGHBOR_WEIGHT: f64 = 0.1;

/// Five point smoothing stencil.
///
/// Interior weights sum to 1.0, so one application is a convex
/// combination and cannot overshoot the neighborhood's value range.
/// At grid edges the missing neighbor terms are dropped, not
/// renormalized, so boundary cells decay toward zero over iterations.
pub fn smoothing_2d() -> Stencil<5> {
    Stencil::new(
        [[1, 0], [0, -1], [-1, 0], [0, 1], [0, 0]],
        |args: &[f64; 5]| {
            CENTER_WEIGHT * args[4]
                + NEIGHBOR_WEIGHT * (args[0] + args[1] + args[2] + args[3])
        },
    )
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::util::*;
    use float_cmp::assert_approx_eq;
    use nalgebra::vector;

    #[test]
    fn smoothing_weights() {
        let s = smoothing_2d();
        let w = s.weights();
        for n in 0..4 {
            assert_approx_eq!(f64, w[n], NEIGHBOR_WEIGHT, ulps = 1);
        }
        assert_approx_eq!(f64, w[4], CENTER_WEIGHT, ulps = 1);
    }

    #[test]
    fn smoothing_is_convex_combination() {
        let s = smoothing_2d();
        assert_approx_eq!(f64, s.weights().sum(), 1.0, ulps = 1);
        assert_approx_eq!(f64, s.apply(&Values::from_element(7.0)), 7.0);
    }

    #[test]
    fn center_offset_is_last() {
        let s = smoothing_2d();
        assert_eq!(s.offsets()[4], vector![0, 0]);
    }
}
