//! Energy-balance residual and the trigger-point root search.

use crate::cryogen::Cryogen;
use crate::energy::{
    PLACEHOLDER_INTERNAL_ENERGIES, fluid_energy_absorbed, ideal_gas_internal_energies,
};
use crate::error::NvfResult;
use crate::scenario::{FillScenario, ThresholdSearch};
use crate::tank::tank_heat_absorbed;
use cryo_core::units::{Temperature, k, kelvin};
use cryo_solver::{BracketConfig, RootResult, brent};
use std::fmt;
use tracing::{debug, info};

/// Terms of the balance at one candidate initial temperature [J].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    pub fluid_energy_absorbed: f64,
    /// `m_tank · ∫ c_tank dT` from the initial to the final temperature
    pub tank_heat: f64,
    /// `Q_parasitic − tank_heat`
    pub tank_energy_lost: f64,
}

impl EnergyBalance {
    /// Zero at the trigger-point temperature.
    pub fn residual(&self) -> f64 {
        self.fluid_energy_absorbed - self.tank_energy_lost
    }
}

/// Converged trigger point for one cryogen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdReport {
    pub cryogen: Cryogen,
    /// Maximum allowable initial tank temperature
    pub max_initial_temperature: Temperature,
    pub root: RootResult,
}

impl fmt::Display for ThresholdReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Maximum Initial Temp for {} = {:.2} K",
            self.cryogen,
            kelvin(self.max_initial_temperature)
        )
    }
}

/// No-vent fill calculation: scenario constants plus search settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVentFill {
    pub scenario: FillScenario,
    pub search: ThresholdSearch,
    pub bracket: BracketConfig,
}

impl NoVentFill {
    pub fn new(scenario: FillScenario, search: ThresholdSearch) -> Self {
        Self {
            scenario,
            search,
            bracket: BracketConfig::default(),
        }
    }

    /// Evaluate every term of the balance at `t_initial_k`.
    pub fn energy_balance(&self, t_initial_k: f64, cryogen: Cryogen) -> NvfResult<EnergyBalance> {
        let fluid = cryogen.properties();
        let t_final_k = kelvin(fluid.saturation_temperature);

        let ideal_gas = ideal_gas_internal_energies(&fluid, &self.scenario, t_initial_k);
        // Ideal gas does not hold for the liquid; placeholders replace it.
        let u = PLACEHOLDER_INTERNAL_ENERGIES;
        debug!(
            %cryogen,
            t_initial_k,
            discarded_u_final = ideal_gas.fluid_final,
            discarded_u_liquid = ideal_gas.liquid_initial,
            discarded_u_vapor = ideal_gas.vapor_initial,
            "ideal-gas internal energies overridden by placeholders"
        );

        let fluid_energy_absorbed = fluid_energy_absorbed(&self.scenario, &u);
        let tank_heat = tank_heat_absorbed(
            &self.scenario,
            t_initial_k,
            t_final_k,
            self.search.quadrature_points,
        )?;
        let tank_energy_lost = self.scenario.parasitic_heat.value - tank_heat;

        Ok(EnergyBalance {
            fluid_energy_absorbed,
            tank_heat,
            tank_energy_lost,
        })
    }

    /// Fluid energy absorbed minus tank energy lost [J].
    pub fn residual(&self, t_initial_k: f64, cryogen: Cryogen) -> NvfResult<f64> {
        Ok(self.energy_balance(t_initial_k, cryogen)?.residual())
    }

    /// Find the initial temperature that closes the balance inside the search bracket.
    ///
    /// Fails with [`cryo_solver::SolverError::NoSignChange`] when the residual
    /// does not change sign across the bracket.
    pub fn solve_threshold(&self, cryogen: Cryogen) -> NvfResult<ThresholdReport> {
        let root = brent(
            |t| self.residual(t, cryogen),
            self.search.bracket_low_k,
            self.search.bracket_high_k,
            &self.bracket,
        )?;

        info!(
            %cryogen,
            t_initial_k = root.root,
            iterations = root.iterations,
            evaluations = root.evaluations,
            "trigger point converged"
        );

        Ok(ThresholdReport {
            cryogen,
            max_initial_temperature: k(root.root),
            root,
        })
    }

    /// [`solve_threshold`](Self::solve_threshold) for every cryogen, in [`Cryogen::ALL`] order.
    pub fn solve_all(&self) -> NvfResult<Vec<ThresholdReport>> {
        Cryogen::ALL
            .into_iter()
            .map(|cryogen| self.solve_threshold(cryogen))
            .collect()
    }
}
