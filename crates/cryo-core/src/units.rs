// cryo-core/src/units.rs

use uom::si::f64::{
    Energy as UomEnergy, Mass as UomMass, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Mass = UomMass;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn joules(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v)
}

/// Temperature in Kelvin as a bare float.
#[inline]
pub fn kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// `T_R = T_K * 9/5`, evaluated in that order so table output is reproducible.
#[inline]
pub fn kelvin_to_rankine(t_k: f64) -> f64 {
    t_k * 9.0 / 5.0
}

pub mod constants {
    /// J/(kg K) -> BTU/(lbm R)
    pub const SPECIFIC_HEAT_SI_TO_IMPERIAL: f64 = 2.388459e-4;

    /// W/(m K) -> BTU/(s ft R)
    pub const THERMAL_CONDUCTIVITY_SI_TO_IMPERIAL: f64 = 1.605e-4;
}
