//! SRK attraction and co-volume parameters.
//!
//! ```text
//! Tr = T / Tc
//! m  = 0.48 + 1.574ω − 0.176ω²
//! α  = (1 + m(1 − √Tr))²
//! a  = 0.42748 · α · (R·Tc)² / Pc        [bar·L²/mol²]
//! b  = 0.08664 · R·Tc / Pc               [L/mol]
//! ```

use crate::error::EosResult;
use crate::substance::SubstanceConstants;
use srk_core::{R, ensure_finite, ensure_positive};

const OMEGA_A: f64 = 0.42748;
const OMEGA_B: f64 = 0.08664;

/// Dimensional EOS parameters at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EosParameters {
    /// Attraction parameter [bar·L²/mol²].
    pub a: f64,
    /// Co-volume [L/mol].
    pub b: f64,
}

impl EosParameters {
    /// Evaluate both parameters for a substance at `t` [K].
    pub fn at(t: f64, constants: &SubstanceConstants) -> EosResult<Self> {
        Ok(Self {
            a: compute_a(t, constants.tc(), constants.pc(), constants.omega())?,
            b: compute_b(t, constants.tc(), constants.pc())?,
        })
    }
}

/// Soave's m(ω) slope.
pub fn soave_m(omega: f64) -> f64 {
    0.48 + 1.574 * omega - 0.176 * omega * omega
}

/// Soave's α(Tr, ω) temperature correction.
pub fn alpha(tr: f64, omega: f64) -> f64 {
    let s = 1.0 + soave_m(omega) * (1.0 - tr.sqrt());
    s * s
}

/// Attraction parameter `a` [bar·L²/mol²].
pub fn compute_a(t: f64, tc: f64, pc: f64, omega: f64) -> EosResult<f64> {
    let t = ensure_positive(t, "temperature")?;
    let tc = ensure_positive(tc, "critical temperature")?;
    let pc = ensure_positive(pc, "critical pressure")?;
    let omega = ensure_finite(omega, "acentric factor")?;

    let rtc = R * tc;
    Ok(OMEGA_A * alpha(t / tc, omega) * rtc * rtc / pc)
}

/// Co-volume `b` [L/mol].
///
/// Independent of temperature; `t` is validated so both parameters share
/// the same domain.
pub fn compute_b(t: f64, tc: f64, pc: f64) -> EosResult<f64> {
    ensure_positive(t, "temperature")?;
    let tc = ensure_positive(tc, "critical temperature")?;
    let pc = ensure_positive(pc, "critical pressure")?;

    Ok(OMEGA_B * R * tc / pc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EosError;
    use srk_core::{Tolerances, nearly_equal};

    const TC: f64 = 190.6;
    const PC: f64 = 46.0;
    const OMEGA: f64 = 0.011;

    #[test]
    fn methane_at_300k() {
        let a = compute_a(300.0, TC, PC, OMEGA).unwrap();
        let b = compute_b(300.0, TC, PC).unwrap();
        assert!(nearly_equal(a, 1.781, Tolerances::relative(1e-2)), "a = {a}");
        assert!(nearly_equal(b, 0.02984, Tolerances::relative(1e-3)), "b = {b}");
    }

    #[test]
    fn alpha_is_one_at_critical_temperature() {
        for omega in [-0.39, 0.0, 0.011, 0.644] {
            assert_eq!(alpha(1.0, omega), 1.0);
        }
        let a = compute_a(TC, TC, PC, OMEGA).unwrap();
        let rtc = R * TC;
        assert!(nearly_equal(a, OMEGA_A * rtc * rtc / PC, Tolerances::default()));
    }

    #[test]
    fn b_does_not_depend_on_temperature() {
        let b1 = compute_b(150.0, TC, PC).unwrap();
        let b2 = compute_b(900.0, TC, PC).unwrap();
        assert_eq!(b1, b2);
    }

    #[test]
    fn a_decreases_with_temperature() {
        let cold = compute_a(200.0, TC, PC, OMEGA).unwrap();
        let hot = compute_a(400.0, TC, PC, OMEGA).unwrap();
        assert!(cold > hot);
    }

    #[test]
    fn reject_domain_violations() {
        assert!(matches!(
            compute_a(0.0, TC, PC, OMEGA),
            Err(EosError::NonPhysical { what: "temperature" })
        ));
        assert!(matches!(
            compute_a(300.0, -TC, PC, OMEGA),
            Err(EosError::NonPhysical { .. })
        ));
        assert!(matches!(
            compute_b(300.0, TC, 0.0),
            Err(EosError::NonPhysical { .. })
        ));
        assert!(matches!(
            compute_a(300.0, TC, PC, f64::NAN),
            Err(EosError::NonFinite { .. })
        ));
    }

    #[test]
    fn parameters_from_constants() {
        let c = SubstanceConstants::new(TC, PC, OMEGA).unwrap();
        let params = EosParameters::at(300.0, &c).unwrap();
        assert_eq!(params.a, compute_a(300.0, TC, PC, OMEGA).unwrap());
        assert_eq!(params.b, compute_b(300.0, TC, PC).unwrap());
    }
}
