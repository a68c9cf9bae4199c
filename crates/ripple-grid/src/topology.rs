//! Index helpers for the toroidal grid substrate.
//!
//! The Laplacian always looks up neighbours with periodic wrap; edge
//! treatment is applied afterwards by the stepper. These helpers are the
//! single place that turns `(x, y)` plus an offset into a flat index.

use ripple_core::Stencil;
use smallvec::SmallVec;

/// Flat row-major index of `(x, y)` on a grid `width` cells wide.
#[inline]
pub fn flat_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Flat index of `(x, y)` if it lies inside a `width × height` grid.
#[inline]
pub fn checked_index(x: i32, y: i32, width: u32, height: u32) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (ux, uy) = (x as u32, y as u32);
    if ux >= width || uy >= height {
        return None;
    }
    Some(flat_index(ux, uy, width))
}

/// Wrap `val` into `[0, len)`.
#[inline]
pub fn wrap_axis(val: i64, len: u32) -> u32 {
    let n = i64::from(len);
    (((val % n) + n) % n) as u32
}

/// Flat indices of the stencil neighbours of `(x, y)` with periodic wrap.
///
/// Order follows [`Stencil::offsets`], so sums over the result are
/// reproducible bit for bit.
pub fn neighbours_wrapped(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    stencil: Stencil,
) -> SmallVec<[usize; 8]> {
    let mut result = SmallVec::new();
    for &(dx, dy) in stencil.offsets() {
        let nx = wrap_axis(i64::from(x) + i64::from(dx), width);
        let ny = wrap_axis(i64::from(y) + i64::from(dy), height);
        result.push(flat_index(nx, ny, width));
    }
    result
}
