use crate::GfError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, GfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, GfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(GfError::NonPositive { what, value: v })
    }
}

/// Python-style `int()` of a float: truncation toward zero, rejecting
/// anything that does not land on a valid `usize`.
pub fn truncate_to_index(v: Real, what: &'static str) -> Result<usize, GfError> {
    let v = ensure_finite(v, what)?;
    let t = v.trunc();
    if t < 0.0 || t > usize::MAX as Real {
        return Err(GfError::InvalidArg { what });
    }
    Ok(t as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(matches!(
            ensure_positive(0.0, "porosity"),
            Err(GfError::NonPositive { .. })
        ));
        assert_eq!(ensure_positive(0.2, "porosity").unwrap(), 0.2);
    }

    #[test]
    fn truncation_matches_reference_offsets() {
        // 60/2 - 0.416*60 and 60/2 + 0.416*60
        assert_eq!(truncate_to_index(30.0 - 0.416 * 60.0, "x").unwrap(), 5);
        assert_eq!(truncate_to_index(30.0 + 0.416 * 60.0, "x").unwrap(), 54);
        assert_eq!(truncate_to_index(-0.5, "x").unwrap(), 0);
        assert!(truncate_to_index(-1.5, "x").is_err());
        assert!(truncate_to_index(Real::INFINITY, "x").is_err());
    }

    proptest! {
        #[test]
        fn truncation_never_exceeds_input(v in 0.0f64..1.0e6) {
            let t = truncate_to_index(v, "v").unwrap();
            prop_assert!(t as f64 <= v);
            prop_assert!(v - (t as f64) < 1.0);
        }
    }
}
