//! Pure substances and their critical constants.

use crate::error::{EosError, EosResult};
use srk_core::{ensure_finite, ensure_positive};

/// Critical constants of a pure substance.
///
/// Invariant: `tc > 0`, `pc > 0`, all fields finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubstanceConstants {
    tc: f64,
    pc: f64,
    omega: f64,
}

impl SubstanceConstants {
    /// Validate and build a constant set.
    ///
    /// `tc` in K, `pc` in bar, `omega` dimensionless (may be negative, e.g. hydrogen).
    pub fn new(tc: f64, pc: f64, omega: f64) -> EosResult<Self> {
        let tc = ensure_positive(tc, "critical temperature")?;
        let pc = ensure_positive(pc, "critical pressure")?;
        let omega = ensure_finite(omega, "acentric factor")?;
        Ok(Self { tc, pc, omega })
    }

    const fn table(tc: f64, pc: f64, omega: f64) -> Self {
        Self { tc, pc, omega }
    }

    /// Critical temperature [K].
    pub fn tc(&self) -> f64 {
        self.tc
    }

    /// Critical pressure [bar].
    pub fn pc(&self) -> f64 {
        self.pc
    }

    /// Acentric factor.
    pub fn omega(&self) -> f64 {
        self.omega
    }
}

/// Substances shipped with the built-in property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Substance {
    Methane,
    Ethane,
    Propane,
    Butane,
    Pentane,
    Hexane,
    Heptane,
    Octane,
    Nonane,
    Decane,
    Ethylene,
    Propylene,
    Benzene,
    Toluene,
    Xylene,
    Nitrogen,
    Oxygen,
    CarbonDioxide,
    CarbonMonoxide,
    Hydrogen,
    Water,
    Ammonia,
    HydrogenSulfide,
    Methanol,
    Ethanol,
    Acetone,
    Chloroform,
    /// 1,1,1,2-Tetrafluoroethane
    Refrigerant134a,
    Argon,
    Helium,
}

impl Substance {
    pub const ALL: [Substance; 30] = [
        Substance::Methane,
        Substance::Ethane,
        Substance::Propane,
        Substance::Butane,
        Substance::Pentane,
        Substance::Hexane,
        Substance::Heptane,
        Substance::Octane,
        Substance::Nonane,
        Substance::Decane,
        Substance::Ethylene,
        Substance::Propylene,
        Substance::Benzene,
        Substance::Toluene,
        Substance::Xylene,
        Substance::Nitrogen,
        Substance::Oxygen,
        Substance::CarbonDioxide,
        Substance::CarbonMonoxide,
        Substance::Hydrogen,
        Substance::Water,
        Substance::Ammonia,
        Substance::HydrogenSulfide,
        Substance::Methanol,
        Substance::Ethanol,
        Substance::Acetone,
        Substance::Chloroform,
        Substance::Refrigerant134a,
        Substance::Argon,
        Substance::Helium,
    ];

    /// Lookup key. Matching is case-sensitive.
    pub fn name(&self) -> &'static str {
        match self {
            Substance::Methane => "Methane",
            Substance::Ethane => "Ethane",
            Substance::Propane => "Propane",
            Substance::Butane => "Butane",
            Substance::Pentane => "Pentane",
            Substance::Hexane => "Hexane",
            Substance::Heptane => "Heptane",
            Substance::Octane => "Octane",
            Substance::Nonane => "Nonane",
            Substance::Decane => "Decane",
            Substance::Ethylene => "Ethylene",
            Substance::Propylene => "Propylene",
            Substance::Benzene => "Benzene",
            Substance::Toluene => "Toluene",
            Substance::Xylene => "Xylene",
            Substance::Nitrogen => "Nitrogen",
            Substance::Oxygen => "Oxygen",
            Substance::CarbonDioxide => "CarbonDioxide",
            Substance::CarbonMonoxide => "CarbonMonoxide",
            Substance::Hydrogen => "Hydrogen",
            Substance::Water => "Water",
            Substance::Ammonia => "Ammonia",
            Substance::HydrogenSulfide => "HydrogenSulfide",
            Substance::Methanol => "Methanol",
            Substance::Ethanol => "Ethanol",
            Substance::Acetone => "Acetone",
            Substance::Chloroform => "Chloroform",
            Substance::Refrigerant134a => "Refrigerant134a",
            Substance::Argon => "Argon",
            Substance::Helium => "Helium",
        }
    }

    /// Chemical formula, for display only.
    pub fn formula(&self) -> &'static str {
        match self {
            Substance::Methane => "CH4",
            Substance::Ethane => "C2H6",
            Substance::Propane => "C3H8",
            Substance::Butane => "C4H10",
            Substance::Pentane => "C5H12",
            Substance::Hexane => "C6H14",
            Substance::Heptane => "C7H16",
            Substance::Octane => "C8H18",
            Substance::Nonane => "C9H20",
            Substance::Decane => "C10H22",
            Substance::Ethylene => "C2H4",
            Substance::Propylene => "C3H6",
            Substance::Benzene => "C6H6",
            Substance::Toluene => "C7H8",
            Substance::Xylene => "C8H10",
            Substance::Nitrogen => "N2",
            Substance::Oxygen => "O2",
            Substance::CarbonDioxide => "CO2",
            Substance::CarbonMonoxide => "CO",
            Substance::Hydrogen => "H2",
            Substance::Water => "H2O",
            Substance::Ammonia => "NH3",
            Substance::HydrogenSulfide => "H2S",
            Substance::Methanol => "CH3OH",
            Substance::Ethanol => "C2H5OH",
            Substance::Acetone => "C3H6O",
            Substance::Chloroform => "CHCl3",
            Substance::Refrigerant134a => "C2H2F4",
            Substance::Argon => "Ar",
            Substance::Helium => "He",
        }
    }

    /// Critical constants: Tc [K], Pc [bar], ω.
    pub fn constants(&self) -> SubstanceConstants {
        match self {
            Substance::Methane => SubstanceConstants::table(190.6, 46.0, 0.011),
            Substance::Ethane => SubstanceConstants::table(305.4, 48.8, 0.099),
            Substance::Propane => SubstanceConstants::table(369.8, 42.5, 0.152),
            Substance::Butane => SubstanceConstants::table(425.2, 38.0, 0.199),
            Substance::Pentane => SubstanceConstants::table(469.7, 33.7, 0.251),
            Substance::Hexane => SubstanceConstants::table(507.5, 30.1, 0.299),
            Substance::Heptane => SubstanceConstants::table(540.3, 27.4, 0.349),
            Substance::Octane => SubstanceConstants::table(568.8, 24.9, 0.399),
            Substance::Nonane => SubstanceConstants::table(594.6, 22.9, 0.445),
            Substance::Decane => SubstanceConstants::table(617.7, 21.1, 0.490),
            Substance::Ethylene => SubstanceConstants::table(282.4, 50.4, 0.087),
            Substance::Propylene => SubstanceConstants::table(365.6, 46.2, 0.146),
            Substance::Benzene => SubstanceConstants::table(562.1, 48.9, 0.210),
            Substance::Toluene => SubstanceConstants::table(591.8, 41.0, 0.263),
            Substance::Xylene => SubstanceConstants::table(617.1, 35.0, 0.310),
            Substance::Nitrogen => SubstanceConstants::table(126.2, 33.9, 0.039),
            Substance::Oxygen => SubstanceConstants::table(154.6, 50.4, 0.022),
            Substance::CarbonDioxide => SubstanceConstants::table(304.2, 73.8, 0.228),
            Substance::CarbonMonoxide => SubstanceConstants::table(132.9, 35.0, 0.066),
            Substance::Hydrogen => SubstanceConstants::table(33.2, 13.0, -0.216),
            Substance::Water => SubstanceConstants::table(647.1, 220.6, 0.344),
            Substance::Ammonia => SubstanceConstants::table(405.7, 113.5, 0.253),
            Substance::HydrogenSulfide => SubstanceConstants::table(373.5, 90.0, 0.094),
            Substance::Methanol => SubstanceConstants::table(512.6, 80.9, 0.559),
            Substance::Ethanol => SubstanceConstants::table(514.0, 61.4, 0.644),
            Substance::Acetone => SubstanceConstants::table(508.1, 47.0, 0.307),
            Substance::Chloroform => SubstanceConstants::table(536.4, 54.0, 0.218),
            Substance::Refrigerant134a => SubstanceConstants::table(374.2, 40.6, 0.327),
            Substance::Argon => SubstanceConstants::table(150.8, 48.7, 0.000),
            Substance::Helium => SubstanceConstants::table(5.2, 2.3, -0.390),
        }
    }
}

impl std::fmt::Display for Substance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Substance {
    type Err = EosError;

    /// Exact, case-sensitive match on [`Substance::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Substance::ALL
            .iter()
            .copied()
            .find(|substance| substance.name() == s)
            .ok_or_else(|| EosError::UnknownSubstance { name: s.to_string() })
    }
}
