use srk_core::{R, ensure_finite};

use crate::catalog;
use crate::error::EosResult;
use crate::inversion::invert;
use crate::options::SolverOptions;
use crate::parameters::EosParameters;
use crate::pressure::pressure_from_parameters;
use crate::substance::{Substance, SubstanceConstants};

/// Which quantity to compute, and from what.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationInput {
    /// P from T [K] and V [L/mol].
    PressureFromVolume { t: f64, v: f64 },
    /// V from T [K] and P [bar].
    VolumeFromPressure { t: f64, p: f64 },
    /// Z from T [K] and P [bar].
    CompressibilityFromPressure { t: f64, p: f64 },
}

impl CalculationInput {
    pub fn label(self) -> &'static str {
        match self {
            Self::PressureFromVolume { .. } => "pressure (given T and V)",
            Self::VolumeFromPressure { .. } => "volume (given T and P)",
            Self::CompressibilityFromPressure { .. } => "compressibility factor (given T and P)",
        }
    }
}

/// Everything known about one evaluated state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EosReport {
    pub substance: &'static str,
    pub constants: SubstanceConstants,
    pub temperature_k: f64,
    pub pressure_bar: f64,
    pub molar_volume_l_per_mol: f64,
    pub z: f64,
    pub parameters: EosParameters,
    /// Admissible cubic roots; empty for a direct pressure evaluation.
    pub roots: Vec<f64>,
}

/// Evaluate `input` for the substance called `name` (case-sensitive).
pub fn calculate(
    name: &str,
    input: CalculationInput,
    options: &SolverOptions,
) -> EosResult<EosReport> {
    let substance: Substance = name.parse()?;
    calculate_for(substance, input, options)
}

pub fn calculate_for(
    substance: Substance,
    input: CalculationInput,
    options: &SolverOptions,
) -> EosResult<EosReport> {
    let constants = substance.constants();

    match input {
        CalculationInput::PressureFromVolume { t, v } => {
            let parameters = EosParameters::at(t, &constants)?;
            let p = pressure_from_parameters(t, v, parameters.a, parameters.b)?;
            Ok(EosReport {
                substance: substance.name(),
                constants,
                temperature_k: t,
                pressure_bar: p,
                molar_volume_l_per_mol: v,
                z: ensure_finite(p * v / (R * t), "compressibility factor")?,
                parameters,
                roots: Vec::new(),
            })
        }
        CalculationInput::VolumeFromPressure { t, p }
        | CalculationInput::CompressibilityFromPressure { t, p } => {
            let inv = invert(t, p, &constants, options)?;
            Ok(EosReport {
                substance: substance.name(),
                constants,
                temperature_k: t,
                pressure_bar: p,
                molar_volume_l_per_mol: inv.molar_volume(),
                z: inv.z,
                parameters: inv.parameters,
                roots: inv.roots.into_vec(),
            })
        }
    }
}

/// Constants for display, resolving `name` through the table.
pub fn describe(name: &str) -> EosResult<(Substance, SubstanceConstants)> {
    let entry = catalog::resolve(name)?;
    Ok((entry.substance, entry.constants))
}
