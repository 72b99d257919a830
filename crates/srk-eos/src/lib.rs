//! srk-eos: Soave-Redlich-Kwong cubic equation of state.
//!
//! Given a substance's critical constants this crate evaluates
//! - pressure from temperature and molar volume, and
//! - compressibility factor and molar volume from temperature and pressure,
//!   by solving the SRK cubic in Z analytically.
//!
//! Working units are K, bar and L/mol with `R = 0.08314 L·bar/(mol·K)`.
//! [`SrkModel`] wraps the same operations behind `uom` quantities.

pub mod calculator;
pub mod catalog;
pub mod cubic;
pub mod error;
pub mod inversion;
pub mod model;
pub mod options;
pub mod parameters;
pub mod pressure;
pub mod selection;
pub mod substance;
pub mod sweeps;
pub mod units;

pub use calculator::{CalculationInput, EosReport, calculate, calculate_for, describe};
pub use catalog::{CatalogEntry, catalog, lookup, search};
pub use cubic::{
    CubicCoefficients, CubicForm, DepressedCubic, ROOT_THRESHOLD, RootSet, solve_cubic,
    solve_cubic_with,
};
pub use error::{EosError, EosResult};
pub use inversion::{
    Inversion, calculate_compressibility_factor, calculate_volume, invert, invert_with_selector,
};
pub use model::SrkModel;
pub use options::SolverOptions;
pub use parameters::{EosParameters, compute_a, compute_b};
pub use pressure::calculate_pressure;
pub use selection::{RootSelection, RootSelector};
pub use substance::{Substance, SubstanceConstants};
pub use sweeps::{SweepDefinition, SweepError, SweepPoint, SweepResult, SweepType, isobar, isotherm};
pub use units::{Quantity, UnitError, parse_quantity};
