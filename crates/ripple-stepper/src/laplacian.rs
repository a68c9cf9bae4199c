//! Discrete Laplacian over a toroidal grid.
//!
//! Neighbour lookups always wrap around the edges; fixed and reflective
//! walls are applied later as an overwrite of the edge cells.

use ripple_core::Stencil;
use ripple_grid::topology::{flat_index, neighbours_wrapped};

/// Laplacian of `field` at `(x, y)`.
///
/// Generic path driven by [`Stencil::offsets`]. The stepper never calls
/// it: it is the reference that [`laplacian_into`] is checked against,
/// and a single-cell lookup for callers inspecting one point.
#[allow(clippy::too_many_arguments)]
pub fn laplacian_at(
    field: &[f32],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    stencil: Stencil,
    dx: f64,
    dy: f64,
) -> f32 {
    let norm = stencil.normalization(dx, dy) as f32;
    let center = field[flat_index(x, y, width)];
    let sum: f32 = neighbours_wrapped(x, y, width, height, stencil)
        .iter()
        .map(|&i| field[i])
        .sum();
    (sum - stencil.center_weight() * center) * norm
}

/// Write the Laplacian of `field` into `out`, row by row.
///
/// Sums neighbours in the same order as [`laplacian_at`], so both paths
/// agree bit for bit.
///
/// # Panics
///
/// Panics if either slice does not hold `width * height` cells.
pub fn laplacian_into(
    field: &[f32],
    width: u32,
    height: u32,
    stencil: Stencil,
    dx: f64,
    dy: f64,
    out: &mut [f32],
) {
    let w = width as usize;
    let h = height as usize;
    assert_eq!(field.len(), w * h, "field size mismatch");
    assert_eq!(out.len(), w * h, "output size mismatch");

    let norm = stencil.normalization(dx, dy) as f32;
    let center_weight = stencil.center_weight();

    for y in 0..h {
        let ym = if y == 0 { h - 1 } else { y - 1 };
        let yp = if y + 1 == h { 0 } else { y + 1 };
        let up = &field[ym * w..ym * w + w];
        let row = &field[y * w..y * w + w];
        let down = &field[yp * w..yp * w + w];
        let out_row = &mut out[y * w..y * w + w];

        for x in 0..w {
            let xm = if x == 0 { w - 1 } else { x - 1 };
            let xp = if x + 1 == w { 0 } else { x + 1 };

            // W, E, N, S
            let mut sum = row[xm] + row[xp] + up[x] + down[x];
            if stencil == Stencil::Moore {
                // NW, NE, SW, SE
                sum = sum + up[xm] + up[xp] + down[xm] + down[xp];
            }
            out_row[x] = (sum - center_weight * row[x]) * norm;
        }
    }
}
