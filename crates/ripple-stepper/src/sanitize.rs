//! Numerical safety pass: NaN/∞ replacement and clamping.
//!
//! Divergence is never reported as an error. The field is corrected in
//! place so a real-time driver keeps running; the returned counts let
//! the caller notice that it happened.

/// What [`sanitize`] changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SanitizeStats {
    /// Cells that held NaN or ±∞.
    pub nonfinite: usize,
    /// Finite cells pulled back into `[−clip, clip]`.
    pub clamped: usize,
}

impl SanitizeStats {
    /// Whether the pass changed anything.
    pub fn is_clean(&self) -> bool {
        self.nonfinite == 0 && self.clamped == 0
    }
}

/// Replace NaN with 0, then bound the field.
///
/// With `clip = Some(c)`: `+∞ → c`, `−∞ → −c`, and every value is
/// clamped into `[−c, c]`. With `clip = None` only NaN is replaced and
/// infinities are left as they are.
pub fn sanitize(field: &mut [f32], clip: Option<f32>) -> SanitizeStats {
    let mut stats = SanitizeStats::default();
    match clip {
        Some(c) => {
            for v in field.iter_mut() {
                if v.is_nan() {
                    *v = 0.0;
                    stats.nonfinite += 1;
                } else if v.is_infinite() {
                    *v = c.copysign(*v);
                    stats.nonfinite += 1;
                } else if v.abs() > c {
                    *v = v.clamp(-c, c);
                    stats.clamped += 1;
                }
            }
        }
        None => {
            for v in field.iter_mut() {
                if v.is_nan() {
                    *v = 0.0;
                    stats.nonfinite += 1;
                }
            }
        }
    }
    stats
}
