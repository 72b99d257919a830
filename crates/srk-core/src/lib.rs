//! srk-core: stable foundation for the SRK toolkit.
//!
//! Contains:
//! - units (uom SI types + constructors in the K / bar / L·mol⁻¹ system)
//! - numeric (Real + tolerances + float helpers)
//! - constants (gas constant in L·bar/(mol·K))
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::R;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
