//! Direct SRK pressure: `P = R·T/(V − b) − a/(V·(V + b))`.

use srk_core::{R, Tolerances, ensure_finite, nearly_equal};
use tracing::warn;

use crate::error::{EosError, EosResult};
use crate::parameters::{compute_a, compute_b};

/// How close V may come to a pole of the expression before it is rejected.
const POLE_TOLERANCE: Tolerances = Tolerances {
    abs: 1e-12,
    rel: 1e-9,
};

/// Pressure [bar] at temperature `t` [K] and molar volume `v` [L/mol].
pub fn calculate_pressure(t: f64, v: f64, tc: f64, pc: f64, omega: f64) -> EosResult<f64> {
    let a = compute_a(t, tc, pc, omega)?;
    let b = compute_b(t, tc, pc)?;
    pressure_from_parameters(t, v, a, b)
}

/// Same expression with `a`, `b` already evaluated.
pub fn pressure_from_parameters(t: f64, v: f64, a: f64, b: f64) -> EosResult<f64> {
    let v = ensure_finite(v, "molar volume")?;

    let pole = if nearly_equal(v, b, POLE_TOLERANCE) {
        Some("molar volume equals co-volume b")
    } else if nearly_equal(v, 0.0, POLE_TOLERANCE) {
        Some("molar volume is zero")
    } else if nearly_equal(v, -b, POLE_TOLERANCE) {
        Some("molar volume equals -b")
    } else {
        None
    };
    if let Some(what) = pole {
        warn!(v, b, what, "pressure evaluated at a pole");
        return Err(EosError::NumericDomain { what });
    }

    let p = R * t / (v - b) - a / (v * (v + b));
    if !p.is_finite() {
        return Err(EosError::NumericDomain {
            what: "pressure is not finite",
        });
    }
    Ok(p)
}
