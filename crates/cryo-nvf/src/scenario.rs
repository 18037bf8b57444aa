//! Fill scenario and search configuration.

use cryo_core::units::{Energy, Mass, joules, kg};

/// Specific energy [J/kg].
pub type SpecEnergy = f64;

/// Physical description of one no-vent fill.
///
/// The default is the production trade: a 733,000 gallon spherical receiver,
/// empty after chilldown, filled to 95 % with no parasitic heat leak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillScenario {
    pub tank_mass: Mass,
    pub fluid_mass_final: Mass,
    pub fluid_mass_initial: Mass,
    pub liquid_mass_initial: Mass,
    pub vapor_mass_initial: Mass,
    pub inlet_enthalpy: SpecEnergy,
    pub parasitic_heat: Energy,
    /// Fill end pressure. Fixes the saturation temperatures in [`crate::Cryogen`];
    /// not read by the energy balance.
    pub target_pressure: f64,
}

impl Default for FillScenario {
    fn default() -> Self {
        Self {
            tank_mass: kg(1.6e6),
            fluid_mass_final: kg(3e6 * 0.95),
            fluid_mass_initial: kg(0.0),
            liquid_mass_initial: kg(0.0),
            vapor_mass_initial: kg(0.0),
            inlet_enthalpy: 0.5,
            parasitic_heat: joules(0.0),
            target_pressure: 40.0,
        }
    }
}

/// Root search and quadrature settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSearch {
    /// Lower bracket bound [K]
    pub bracket_low_k: f64,
    /// Upper bracket bound [K]
    pub bracket_high_k: f64,
    /// Samples in the tank heat integral
    pub quadrature_points: usize,
}

impl Default for ThresholdSearch {
    fn default() -> Self {
        Self {
            bracket_low_k: 50.0,
            bracket_high_k: 350.0,
            quadrature_points: 1000,
        }
    }
}
