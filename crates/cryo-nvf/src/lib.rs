//! No-vent fill trigger-point temperature.
//!
//! Solves the no-vent fill energy balance (Clark & Hartwig, "Assessment of
//! prediction and efficiency parameters for cryogenic no-vent fill",
//! Cryogenics 117 (2021) 103309, eq. 7) for the initial tank wall temperature
//! at which the fluid energy absorbed equals the energy the tank gives up:
//!
//! ```text
//! m_f·u_f − (m_l·u_l + m_v·u_v) − (m_f − m_0)·h_in = Q_parasitic − m_tank·∫ c_tank dT
//! ```
//!
//! The root is the maximum initial tank temperature for which a fill can
//! complete without venting.
//!
//! # Limitation
//!
//! Fluid internal energies come from fixed placeholder values. An ideal-gas
//! estimate is computed alongside and discarded, because the ideal-gas model
//! does not hold in the liquid regime. See [`energy`].

pub mod cryogen;
pub mod energy;
pub mod error;
pub mod scenario;
pub mod tank;
pub mod threshold;

pub use cryogen::{Cryogen, CryogenProperties};
pub use energy::{InternalEnergies, PLACEHOLDER_INTERNAL_ENERGIES};
pub use error::{NvfError, NvfResult};
pub use scenario::{FillScenario, SpecEnergy, ThresholdSearch};
pub use tank::{tank_heat_absorbed, tank_specific_heat, tank_specific_heat_many};
pub use threshold::{EnergyBalance, NoVentFill, ThresholdReport};
