//! Inversion of the equation of state: (T, P) → Z or V.
//!
//! 1. `a`, `b` from the parameter calculator.
//! 2. Admissible roots from the cubic solver.
//! 3. Empty root set → [`EosError::NoPhysicalRoot`].
//! 4. One root is Z; several go through the root selector.
//! 5. `V = Z·R·T/P`.

use srk_core::R;
use tracing::{debug, warn};

use crate::cubic::{CubicForm, RootSet, solve_cubic_with};
use crate::error::{EosError, EosResult};
use crate::options::SolverOptions;
use crate::parameters::EosParameters;
use crate::selection::RootSelector;
use crate::substance::SubstanceConstants;

/// Outcome of one inversion, with the intermediate values that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inversion {
    /// Temperature [K].
    pub temperature: f64,
    /// Pressure [bar].
    pub pressure: f64,
    pub parameters: EosParameters,
    pub roots: RootSet,
    /// Selected compressibility factor.
    pub z: f64,
}

impl Inversion {
    /// Molar volume [L/mol] of the selected root.
    pub fn molar_volume(&self) -> f64 {
        self.z * R * self.temperature / self.pressure
    }

    /// True when the cubic had more than one admissible root.
    pub fn is_multi_root(&self) -> bool {
        self.roots.len() > 1
    }
}

/// Invert with an arbitrary selection policy.
pub fn invert_with_selector<S>(
    t: f64,
    pressure: f64,
    constants: &SubstanceConstants,
    form: CubicForm,
    threshold: f64,
    selector: &S,
) -> EosResult<Inversion>
where
    S: RootSelector + ?Sized,
{
    let parameters = EosParameters::at(t, constants)?;
    let roots = solve_cubic_with(form, threshold, t, pressure, parameters.a, parameters.b)?;

    let z = match roots.len() {
        0 => {
            warn!(t, pressure, "no physical root of the cubic");
            return Err(EosError::NoPhysicalRoot {
                temperature_k: t,
                pressure_bar: pressure,
            });
        }
        1 => roots.as_slice()[0],
        n => {
            let z = selector.select(&roots).ok_or(EosError::NoPhysicalRoot {
                temperature_k: t,
                pressure_bar: pressure,
            })?;
            debug!(roots = n, z, "selected root from multi-root set");
            z
        }
    };

    Ok(Inversion {
        temperature: t,
        pressure,
        parameters,
        roots,
        z,
    })
}

/// Invert using the policy and form carried by `options`.
pub fn invert(
    t: f64,
    pressure: f64,
    constants: &SubstanceConstants,
    options: &SolverOptions,
) -> EosResult<Inversion> {
    invert_with_selector(
        t,
        pressure,
        constants,
        options.form,
        options.root_threshold,
        &options.selection,
    )
}

/// Compressibility factor Z at `t` [K], `pressure` [bar].
pub fn calculate_compressibility_factor(
    t: f64,
    pressure: f64,
    tc: f64,
    pc: f64,
    omega: f64,
) -> EosResult<f64> {
    let constants = SubstanceConstants::new(tc, pc, omega)?;
    invert(t, pressure, &constants, &SolverOptions::default()).map(|inv| inv.z)
}

/// Molar volume [L/mol] at `t` [K], `pressure` [bar].
pub fn calculate_volume(t: f64, pressure: f64, tc: f64, pc: f64, omega: f64) -> EosResult<f64> {
    let constants = SubstanceConstants::new(tc, pc, omega)?;
    invert(t, pressure, &constants, &SolverOptions::default()).map(|inv| inv.molar_volume())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::RootSelection;
    use srk_core::{Tolerances, nearly_equal};

    const TC: f64 = 190.6;
    const PC: f64 = 46.0;
    const OMEGA: f64 = 0.011;

    fn methane() -> SubstanceConstants {
        SubstanceConstants::new(TC, PC, OMEGA).unwrap()
    }

    #[test]
    fn methane_300k_50bar() {
        let z = calculate_compressibility_factor(300.0, 50.0, TC, PC, OMEGA).unwrap();
        let v = calculate_volume(300.0, 50.0, TC, PC, OMEGA).unwrap();
        assert!(nearly_equal(z, 1.774, Tolerances::relative(1e-2)), "z = {z}");
        assert!(nearly_equal(v, 0.885, Tolerances::relative(1e-2)), "v = {v}");
        assert!(nearly_equal(v, z * R * 300.0 / 50.0, Tolerances::default()));
    }

    #[test]
    fn volume_is_z_times_rt_over_p() {
        let inv = invert(300.0, 50.0, &methane(), &SolverOptions::default()).unwrap();
        assert_eq!(inv.molar_volume(), inv.z * R * 300.0 / 50.0);
        assert!(!inv.is_multi_root());
    }

    #[test]
    fn multi_root_region_selects_by_policy() {
        // Observed form has three admissible roots here.
        let t = 430.0;
        let p = 0.01 * R * t;
        let largest = invert(t, p, &methane(), &SolverOptions::default()).unwrap();
        assert_eq!(largest.roots.len(), 3);
        assert!(largest.is_multi_root());
        assert_eq!(Some(largest.z), largest.roots.largest());

        let opts = SolverOptions::default().with_selection(RootSelection::Smallest);
        let smallest = invert(t, p, &methane(), &opts).unwrap();
        assert_eq!(Some(smallest.z), smallest.roots.smallest());
        assert!(smallest.z < largest.z);
    }

    #[test]
    fn empty_root_set_is_reported() {
        let err = calculate_compressibility_factor(300.0, 1e-4, TC, PC, OMEGA).unwrap_err();
        assert!(matches!(err, EosError::NoPhysicalRoot { .. }));
        assert!(calculate_volume(300.0, 1e-4, TC, PC, OMEGA).is_err());
    }

    #[test]
    fn custom_selector_is_used_for_multi_root_sets() {
        let t = 430.0;
        let p = 0.01 * R * t;
        let middle = |roots: &RootSet| roots.as_slice().get(1).copied();
        let inv = invert_with_selector(t, p, &methane(), CubicForm::Observed, 0.01, &middle)
            .unwrap();
        assert_eq!(inv.z, inv.roots.as_slice()[1]);
    }

    #[test]
    fn reject_invalid_inputs() {
        assert!(matches!(
            calculate_volume(300.0, -5.0, TC, PC, OMEGA),
            Err(EosError::NonPhysical { what: "pressure" })
        ));
        assert!(matches!(
            calculate_volume(300.0, 50.0, 0.0, PC, OMEGA),
            Err(EosError::NonPhysical { .. })
        ));
    }
}
