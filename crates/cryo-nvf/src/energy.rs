//! Fluid internal energies and the fluid side of the balance.
//!
//! [`ideal_gas_internal_energies`] evaluates `u = cv·m/M·T` for the final,
//! initial-liquid and initial-vapor inventories. That model does not describe
//! a liquid, so the balance substitutes [`PLACEHOLDER_INTERNAL_ENERGIES`] for
//! its output. The ideal-gas values are still computed and logged so the
//! substitution stays visible; replacing the placeholders needs a liquid-phase
//! internal energy model, which has not been chosen.

use crate::cryogen::CryogenProperties;
use crate::scenario::FillScenario;
use cryo_core::units::kelvin;

/// Specific internal energies of the three fluid inventories.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InternalEnergies {
    pub fluid_final: f64,
    pub liquid_initial: f64,
    pub vapor_initial: f64,
}

/// Fixed stand-ins used by the energy balance in place of the ideal-gas model.
pub const PLACEHOLDER_INTERNAL_ENERGIES: InternalEnergies = InternalEnergies {
    fluid_final: 3250.0,
    liquid_initial: 3.4,
    vapor_initial: 3.4,
};

/// Ideal-gas internal energies at fill end (saturation) and fill start (`t_initial_k`).
pub fn ideal_gas_internal_energies(
    fluid: &CryogenProperties,
    scenario: &FillScenario,
    t_initial_k: f64,
) -> InternalEnergies {
    let per_kelvin = |mass: f64| fluid.cv * mass / fluid.molar_mass;
    InternalEnergies {
        fluid_final: per_kelvin(scenario.fluid_mass_final.value)
            * kelvin(fluid.saturation_temperature),
        liquid_initial: per_kelvin(scenario.liquid_mass_initial.value) * t_initial_k,
        vapor_initial: per_kelvin(scenario.vapor_mass_initial.value) * t_initial_k,
    }
}

/// Left-hand side of the balance [J]:
/// `m_f·u_f − (m_l·u_l + m_v·u_v) − (m_f − m_0)·h_in`.
pub fn fluid_energy_absorbed(scenario: &FillScenario, u: &InternalEnergies) -> f64 {
    let m_final = scenario.fluid_mass_final.value;
    let initial_inventory = scenario.liquid_mass_initial.value * u.liquid_initial
        + scenario.vapor_mass_initial.value * u.vapor_initial;
    let inlet = (m_final - scenario.fluid_mass_initial.value) * scenario.inlet_enthalpy;

    m_final * u.fluid_final - initial_inventory - inlet
}
