//! Unit-typed front end over the functional API.

use srk_core::units::{MolarVolume, Pressure, Temperature, bar, in_bar, in_kelvin};

use crate::catalog;
use crate::cubic::{RootSet, solve_cubic_with};
use crate::error::EosResult;
use crate::inversion::{Inversion, invert};
use crate::options::SolverOptions;
use crate::parameters::EosParameters;
use crate::pressure::pressure_from_parameters;
use crate::substance::SubstanceConstants;

/// SRK equation of state bound to one substance.
///
/// Holds no state beyond its constants and options; every call recomputes
/// `a` and `b`. Safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrkModel {
    constants: SubstanceConstants,
    options: SolverOptions,
}

impl SrkModel {
    pub fn new(constants: SubstanceConstants) -> Self {
        Self {
            constants,
            options: SolverOptions::default(),
        }
    }

    /// Model for a substance from the built-in table (case-sensitive name).
    pub fn for_substance(name: &str) -> EosResult<Self> {
        catalog::lookup(name).map(Self::new)
    }

    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn constants(&self) -> &SubstanceConstants {
        &self.constants
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn parameters(&self, t: Temperature) -> EosResult<EosParameters> {
        EosParameters::at(in_kelvin(t), &self.constants)
    }

    /// Pressure at temperature `t` and molar volume `v` [L/mol].
    pub fn pressure(&self, t: Temperature, v: MolarVolume) -> EosResult<Pressure> {
        let t_k = in_kelvin(t);
        let params = self.parameters(t)?;
        pressure_from_parameters(t_k, v, params.a, params.b).map(bar)
    }

    /// Admissible compressibility-factor roots, ascending.
    pub fn roots(&self, t: Temperature, p: Pressure) -> EosResult<RootSet> {
        let params = self.parameters(t)?;
        solve_cubic_with(
            self.options.form,
            self.options.root_threshold,
            in_kelvin(t),
            in_bar(p),
            params.a,
            params.b,
        )
    }

    pub fn invert(&self, t: Temperature, p: Pressure) -> EosResult<Inversion> {
        invert(in_kelvin(t), in_bar(p), &self.constants, &self.options)
    }

    pub fn compressibility(&self, t: Temperature, p: Pressure) -> EosResult<f64> {
        self.invert(t, p).map(|inv| inv.z)
    }

    /// Molar volume [L/mol].
    pub fn molar_volume(&self, t: Temperature, p: Pressure) -> EosResult<MolarVolume> {
        self.invert(t, p).map(|inv| inv.molar_volume())
    }
}
