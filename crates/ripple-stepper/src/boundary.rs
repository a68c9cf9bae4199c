//! Edge treatment applied to the next field.

use ripple_core::BoundaryMode;

/// Overwrite the edge rows and columns of `field` according to `mode`.
///
/// - `Fixed`: edges set to exactly zero.
/// - `Reflective`: row 0 copies row 1 and the last row copies the one
///   before it; then the same for columns. Corners therefore take the
///   value of their diagonal interior neighbour.
/// - `Periodic`: untouched.
///
/// # Panics
///
/// Panics if `field` does not hold `width * height` cells or a side is
/// shorter than 3.
pub fn apply_boundary(field: &mut [f32], width: u32, height: u32, mode: BoundaryMode) {
    let w = width as usize;
    let h = height as usize;
    assert_eq!(field.len(), w * h, "field size mismatch");
    assert!(w >= 3 && h >= 3, "boundary needs an interior cell");

    match mode {
        BoundaryMode::Periodic => {}
        BoundaryMode::Fixed => {
            field[..w].fill(0.0);
            field[(h - 1) * w..].fill(0.0);
            for y in 1..h - 1 {
                field[y * w] = 0.0;
                field[y * w + w - 1] = 0.0;
            }
        }
        BoundaryMode::Reflective => {
            field.copy_within(w..2 * w, 0);
            field.copy_within((h - 2) * w..(h - 1) * w, (h - 1) * w);
            for y in 0..h {
                let row = y * w;
                field[row] = field[row + 1];
                field[row + w - 1] = field[row + w - 2];
            }
        }
    }
}
