//! Test fixtures for Ripple development.
//!
//! Canned grids and step configurations shared by the integration tests
//! of the stepper and engine crates, plus small helpers for reading the
//! edges and symmetry of a field.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    adversarial_grid, exact_config, impulse_grid, scenario_config, scenario_grid,
};

use ripple_grid::topology::flat_index;

/// Values of the four edges, in order: top row, bottom row, left column,
/// right column. Corners appear in both their row and their column.
pub fn edge_values(field: &[f32], width: u32, height: u32) -> Vec<f32> {
    let w = width as usize;
    let h = height as usize;
    let mut out = Vec::with_capacity(2 * (w + h));
    out.extend_from_slice(&field[..w]);
    out.extend_from_slice(&field[(h - 1) * w..h * w]);
    out.extend((0..h).map(|y| field[y * w]));
    out.extend((0..h).map(|y| field[y * w + w - 1]));
    out
}

/// Whether every cell off the outermost ring is zero.
pub fn interior_is_zero(field: &[f32], width: u32, height: u32) -> bool {
    (1..height - 1).all(|y| (1..width - 1).all(|x| field[flat_index(x, y, width)] == 0.0))
}

/// Largest `|p|` in the field.
pub fn peak(field: &[f32]) -> f32 {
    field.iter().fold(0.0f32, |m, v| m.max(v.abs()))
}

/// Largest difference between `field` and its mirror image across the
/// vertical axis, the horizontal axis, and (for square grids) the
/// main diagonal.
pub fn max_asymmetry(field: &[f32], width: u32, height: u32) -> f32 {
    let mut worst = 0.0f32;
    for y in 0..height {
        for x in 0..width {
            let v = field[flat_index(x, y, width)];
            let mx = field[flat_index(width - 1 - x, y, width)];
            let my = field[flat_index(x, height - 1 - y, width)];
            worst = worst.max((v - mx).abs()).max((v - my).abs());
            if width == height {
                let t = field[flat_index(y, x, width)];
                worst = worst.max((v - t).abs());
            }
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_values_cover_ring() {
        let field: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let edges = edge_values(&field, 4, 3);
        assert_eq!(&edges[..4], &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(&edges[4..8], &[8.0, 9.0, 10.0, 11.0]);
        assert_eq!(&edges[8..11], &[0.0, 4.0, 8.0]);
        assert_eq!(&edges[11..], &[3.0, 7.0, 11.0]);
    }

    #[test]
    fn symmetric_spike_has_no_asymmetry() {
        let mut field = vec![0.0; 25];
        field[12] = 1.0;
        assert_eq!(max_asymmetry(&field, 5, 5), 0.0);
        field[11] = 0.5;
        assert_eq!(max_asymmetry(&field, 5, 5), 0.5);
    }

    #[test]
    fn peak_and_interior() {
        let mut field = vec![0.0; 16];
        field[0] = -3.0;
        assert_eq!(peak(&field), 3.0);
        assert!(interior_is_zero(&field, 4, 4));
        field[5] = 1.0;
        assert!(!interior_is_zero(&field, 4, 4));
    }
}
