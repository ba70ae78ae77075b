// sc-core/src/units.rs

use uom::si::f64::{
    Energy as UomEnergy, Length as UomLength, MagneticFluxDensity as UomMagneticFluxDensity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Length = UomLength;
pub type MagneticField = UomMagneticFluxDensity;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn nm(v: f64) -> Length {
    use uom::si::length::nanometer;
    Length::new::<nanometer>(v)
}

#[inline]
pub fn mev(v: f64) -> Energy {
    use uom::si::energy::electronvolt;
    Energy::new::<electronvolt>(1e-3 * v)
}

#[inline]
pub fn tesla(v: f64) -> MagneticField {
    use uom::si::magnetic_flux_density::tesla;
    MagneticField::new::<tesla>(v)
}

// The theory works in kelvin / nanometre / meV; these pull plain numbers
// back out of typed quantities.

#[inline]
pub fn as_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn as_nm(l: Length) -> f64 {
    use uom::si::length::nanometer;
    l.get::<nanometer>()
}

#[inline]
pub fn as_mev(e: Energy) -> f64 {
    use uom::si::energy::electronvolt;
    1e3 * e.get::<electronvolt>()
}

#[inline]
pub fn as_tesla(b: MagneticField) -> f64 {
    use uom::si::magnetic_flux_density::tesla;
    b.get::<tesla>()
}
