//! Cubic-in-Z construction and closed-form real-root extraction.
//!
//! The monic cubic `Z³ + pZ² + qZ + r = 0` is reduced to the depressed form
//! `t³ + p′t + q′ = 0` with `Z = t − p/3`. The sign of the discriminant
//! `Δ = 4p′³/27 + q′²` picks the method:
//!
//! - `Δ < 0`: three distinct real roots, trigonometric method.
//! - `Δ ≥ 0`: one real root (the boundary `Δ = 0` included), Cardano's formula.
//!
//! # Coefficient forms
//!
//! [`CubicForm::Observed`] builds
//!
//! ```text
//! p = −1
//! q = a/(b·R·T) − b·P/(R·T) − 1
//! r = −a·P / (b·(R·T)²)
//! ```
//!
//! which is not the textbook SRK cubic `Z³ − Z² + (A − B − B²)Z − AB = 0`
//! with `A = aP/(RT)²`, `B = bP/(RT)`. Its roots are therefore not, in
//! general, `PV/(RT)` of a volume that reproduces `P` through
//! [`calculate_pressure`](crate::pressure::calculate_pressure). The observed
//! form stays the default so existing results are reproduced; the textbook
//! form is available as [`CubicForm::Textbook`].

use std::f64::consts::PI;

use srk_core::{R, ensure_finite, ensure_positive};
use tracing::{debug, trace, warn};

use crate::error::{EosError, EosResult};

/// Roots at or below this value are discarded as non-physical.
pub const ROOT_THRESHOLD: f64 = 0.01;

/// Which coefficient set to build from (T, P, a, b).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CubicForm {
    /// Coefficients as historically computed by this calculator.
    #[default]
    Observed,
    /// Standard SRK cubic in Z.
    Textbook,
}

/// Coefficients of the monic cubic `Z³ + pZ² + qZ + r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicCoefficients {
    pub p: f64,
    pub q: f64,
    pub r: f64,
}

impl CubicCoefficients {
    pub fn build(form: CubicForm, t: f64, pressure: f64, a: f64, b: f64) -> Self {
        match form {
            CubicForm::Observed => Self::observed(t, pressure, a, b),
            CubicForm::Textbook => Self::textbook(t, pressure, a, b),
        }
    }

    pub fn observed(t: f64, pressure: f64, a: f64, b: f64) -> Self {
        let rt = R * t;
        Self {
            p: -1.0,
            q: a / (b * rt) - b * pressure / rt - 1.0,
            r: -a * pressure / (b * rt * rt),
        }
    }

    pub fn textbook(t: f64, pressure: f64, a: f64, b: f64) -> Self {
        let rt = R * t;
        let big_a = a * pressure / (rt * rt);
        let big_b = b * pressure / rt;
        Self {
            p: -1.0,
            q: big_a - big_b - big_b * big_b,
            r: -big_a * big_b,
        }
    }

    /// Shift `Z = t − p/3`.
    pub fn depressed(&self) -> DepressedCubic {
        let p = self.p;
        let q = self.q;
        DepressedCubic {
            p: q - p * p / 3.0,
            q: self.r - p * q / 3.0 + 2.0 * p * p * p / 27.0,
        }
    }

    /// Polynomial value at `z`.
    pub fn eval(&self, z: f64) -> f64 {
        ((z + self.p) * z + self.q) * z + self.r
    }

    /// Every real root in Z, unfiltered and unordered.
    pub fn real_roots(&self) -> EosResult<Vec<f64>> {
        let shift = self.p / 3.0;
        Ok(self
            .depressed()
            .real_roots()?
            .into_iter()
            .map(|t| t - shift)
            .collect())
    }
}

/// Coefficients of the depressed cubic `t³ + p′t + q′`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepressedCubic {
    pub p: f64,
    pub q: f64,
}

impl DepressedCubic {
    pub fn discriminant(&self) -> f64 {
        4.0 * self.p * self.p * self.p / 27.0 + self.q * self.q
    }

    pub fn eval(&self, t: f64) -> f64 {
        (t * t + self.p) * t + self.q
    }

    /// Real roots in t: three from the trigonometric method when `Δ < 0`,
    /// otherwise the single Cardano root.
    pub fn real_roots(&self) -> EosResult<Vec<f64>> {
        let delta = self.discriminant();
        if !delta.is_finite() {
            return Err(EosError::NonFinite {
                what: "cubic discriminant",
                value: delta,
            });
        }

        if delta < 0.0 {
            debug!(delta, "three real roots, trigonometric method");
            self.trigonometric_roots().map(Vec::from)
        } else {
            debug!(delta, "one real root, Cardano's method");
            self.cardano_root().map(|root| vec![root])
        }
    }

    fn trigonometric_roots(&self) -> EosResult<[f64; 3]> {
        if self.p >= 0.0 {
            warn!(p = self.p, q = self.q, "three-root branch with p' >= 0");
            return Err(EosError::NumericDomain {
                what: "three-root branch requires p' < 0",
            });
        }

        let arg = -self.q / 2.0 * (-27.0 / (self.p * self.p * self.p)).sqrt();
        if !(-1.0..=1.0).contains(&arg) {
            warn!(arg, p = self.p, q = self.q, "acos argument out of range");
            return Err(EosError::NumericDomain {
                what: "acos argument outside [-1, 1]",
            });
        }

        let phi = arg.acos();
        let amplitude = 2.0 * (-self.p / 3.0).sqrt();
        Ok([0.0, 1.0, 2.0].map(|k| amplitude * ((phi + 2.0 * PI * k) / 3.0).cos()))
    }

    fn cardano_root(&self) -> EosResult<f64> {
        let u = (-self.q / 2.0 + self.discriminant().sqrt() / 2.0).cbrt();
        if u == 0.0 {
            warn!(p = self.p, q = self.q, "Cardano term u vanished");
            return Err(EosError::NumericDomain {
                what: "Cardano term u is zero",
            });
        }
        let v = -self.p / (3.0 * u);
        Ok(u + v)
    }
}

/// Admissible roots of the cubic: ascending, each above the threshold.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootSet(Vec<f64>);

impl RootSet {
    /// Keep finite candidates strictly above `threshold`, sorted ascending.
    pub fn filtered(candidates: impl IntoIterator<Item = f64>, threshold: f64) -> Self {
        let mut roots: Vec<f64> = candidates
            .into_iter()
            .filter(|z| z.is_finite() && *z > threshold)
            .collect();
        roots.sort_by(f64::total_cmp);
        Self(roots)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn smallest(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn largest(&self) -> Option<f64> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

/// Admissible compressibility-factor roots at (T [K], P [bar]) for given `a`, `b`,
/// using the observed coefficient form and the default threshold.
pub fn solve_cubic(t: f64, pressure: f64, a: f64, b: f64) -> EosResult<RootSet> {
    solve_cubic_with(CubicForm::Observed, ROOT_THRESHOLD, t, pressure, a, b)
}

pub fn solve_cubic_with(
    form: CubicForm,
    threshold: f64,
    t: f64,
    pressure: f64,
    a: f64,
    b: f64,
) -> EosResult<RootSet> {
    let t = ensure_positive(t, "temperature")?;
    let pressure = ensure_positive(pressure, "pressure")?;
    let b = ensure_positive(b, "co-volume b")?;
    let a = ensure_finite(a, "attraction parameter a")?;
    let threshold = ensure_finite(threshold, "root threshold")?;

    let coeffs = CubicCoefficients::build(form, t, pressure, a, b);
    trace!(p = coeffs.p, q = coeffs.q, r = coeffs.r, ?form, "cubic coefficients");

    let roots = RootSet::filtered(coeffs.real_roots()?, threshold);
    debug!(admissible = roots.len(), "cubic roots filtered");
    Ok(roots)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::parameters::{compute_a, compute_b};
    use crate::substance::Substance;
    use proptest::prelude::*;

    fn any_substance() -> impl Strategy<Value = Substance> {
        (0..Substance::ALL.len()).prop_map(|i| Substance::ALL[i])
    }

    proptest! {
        #[test]
        fn roots_are_filtered_and_ordered(
            substance in any_substance(),
            tr in 0.6_f64..4.0,
            pressure in 0.1_f64..500.0,
            textbook in any::<bool>(),
        ) {
            let c = substance.constants();
            let t = tr * c.tc();
            let a = compute_a(t, c.tc(), c.pc(), c.omega()).unwrap();
            let b = compute_b(t, c.tc(), c.pc()).unwrap();
            let form = if textbook { CubicForm::Textbook } else { CubicForm::Observed };

            // Domain errors are legitimate outcomes; only inspect successful sets.
            if let Ok(roots) = solve_cubic_with(form, ROOT_THRESHOLD, t, pressure, a, b) {
                prop_assert!(roots.len() <= 3);
                prop_assert!(roots.iter().all(|z| z > ROOT_THRESHOLD));
                prop_assert!(roots.as_slice().windows(2).all(|w| w[0] <= w[1]));
            }
        }

        #[test]
        fn depressed_roots_satisfy_polynomial(p in -10.0_f64..10.0, q in -10.0_f64..10.0) {
            let cubic = DepressedCubic { p, q };
            if let Ok(roots) = cubic.real_roots() {
                for t in roots {
                    let scale = 1.0 + t.abs().powi(3) + (p * t).abs() + q.abs();
                    prop_assert!(cubic.eval(t).abs() <= 1e-9 * scale, "t = {}, residual = {}", t, cubic.eval(t));
                }
            }
        }
    }
}
