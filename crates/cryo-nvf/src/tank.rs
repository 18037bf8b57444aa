//! Receiving tank wall heat capacity.

use cryo_props::PropsResult;
use cryo_props::catalog::SS304_SPECIFIC_HEAT;
use cryo_solver::{linspace, trapezoid};

use crate::error::NvfResult;
use crate::scenario::FillScenario;

/// 304 stainless specific heat [J/(kg·K)] at `t_k`.
pub fn tank_specific_heat(t_k: f64) -> PropsResult<f64> {
    SS304_SPECIFIC_HEAT.evaluate_si(t_k)
}

/// [`tank_specific_heat`] over a slice, order preserved.
pub fn tank_specific_heat_many(temps_k: &[f64]) -> PropsResult<Vec<f64>> {
    SS304_SPECIFIC_HEAT.evaluate_si_many(temps_k)
}

/// `m_tank · ∫ c_tank dT` from `t_from_k` to `t_to_k` [J].
///
/// Signed: negative when the wall cools (`t_from_k > t_to_k`).
pub fn tank_heat_absorbed(
    scenario: &FillScenario,
    t_from_k: f64,
    t_to_k: f64,
    points: usize,
) -> NvfResult<f64> {
    let temps = linspace(t_from_k, t_to_k, points)?;
    let cp = tank_specific_heat_many(&temps)?;
    Ok(scenario.tank_mass.value * trapezoid(&cp, &temps)?)
}
