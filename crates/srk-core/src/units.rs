// srk-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};
use uom::si::{pressure::bar as bar_unit, thermodynamic_temperature::kelvin};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Molar volume [L/mol].
///
/// Not part of the uom quantity set we rely on, so we use f64 with clear documentation.
pub type MolarVolume = f64;

#[inline]
pub fn bar(v: f64) -> Pressure {
    Pressure::new::<bar_unit>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<kelvin>(v)
}

/// Pressure expressed in bar, the working unit of the equation of state.
#[inline]
pub fn in_bar(p: Pressure) -> f64 {
    p.get::<bar_unit>()
}

/// Temperature expressed in kelvin.
#[inline]
pub fn in_kelvin(t: Temperature) -> f64 {
    t.get::<kelvin>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = bar(1.0);
        let _p = pa(101_325.0);
        let _t = k(300.0);
    }

    #[test]
    fn bar_and_pascal_agree() {
        assert!((in_bar(pa(1e5)) - 1.0).abs() < 1e-12);
        assert!((in_bar(bar(46.0)) - 46.0).abs() < 1e-12);
        assert!((in_kelvin(k(190.6)) - 190.6).abs() < 1e-12);
    }
}
