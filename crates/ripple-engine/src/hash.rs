//! Hashing utilities for determinism checks.
//!
//! Uses FNV-1a over the raw bits of each cell, so two runs hash equal
//! only if they are bit-identical. Not cryptographically secure.

use ripple_core::Cell;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

fn fold_field(hash: u64, field: &[f32]) -> u64 {
    field
        .iter()
        .fold(hash, |h, v| fnv1a_bytes(h, &v.to_bits().to_le_bytes()))
}

/// Hash every cell of `field` by its `f32::to_bits()`.
///
/// `0.0` and `-0.0` hash differently, as do distinct NaN payloads.
pub fn field_hash(field: &[f32]) -> u64 {
    fold_field(FNV_OFFSET, field)
}

/// Hash the full simulation state: step count, both fields and the
/// source list in insertion order.
pub(crate) fn state_hash(
    step: u64,
    pressure: &[f32],
    prev_pressure: &[f32],
    sources: impl Iterator<Item = Cell>,
) -> u64 {
    let mut hash = fnv1a_bytes(FNV_OFFSET, &step.to_le_bytes());
    hash = fold_field(hash, pressure);
    hash = fold_field(hash, prev_pressure);
    for cell in sources {
        hash = fnv1a_bytes(hash, &cell.x.to_le_bytes());
        hash = fnv1a_bytes(hash, &cell.y.to_le_bytes());
    }
    hash
}
