pub mod direct;
pub mod naive;

use crate::domain::Grid;
use crate::stencil::Stencil;

/// Run the smoothing loop for `niters` iterations.
///
/// One iteration is two stencil passes, `image -> scratch` then
/// `scratch -> image`, so the latest result always ends up back in
/// `image`. The buffers trade roles, nothing is copied.
pub fn apply(
    stencil: &Stencil<5>,
    image: &mut Grid,
    scratch: &mut Grid,
    niters: usize,
) {
    debug_assert!(image.same_size(scratch));
    for _ in 0..niters {
        direct::apply_step(stencil, image, scratch);
        direct::apply_step(stencil, scratch, image);
    }
}
