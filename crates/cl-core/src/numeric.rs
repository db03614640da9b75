use crate::ClError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ClError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ClError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ClError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ClError::NonPositive { what, value: v })
    }
}

/// Render a value with a fixed number of decimals, the way result panels show it.
pub fn fixed(v: Real, decimals: usize) -> String {
    format!("{v:.decimals$}")
}
