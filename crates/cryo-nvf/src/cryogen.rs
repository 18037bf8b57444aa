//! Cryogen variants and their constant bundles.

use cryo_core::units::{Temperature, k};
use std::fmt;

/// Fluid constants used by the energy balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CryogenProperties {
    /// Specific heat at constant volume [J/(kg·K)]
    pub cv: f64,
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Saturation temperature at the target pressure; the fill's final temperature
    pub saturation_temperature: Temperature,
}

/// Receiving-tank cryogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cryogen {
    /// Liquid oxygen
    Lox,
    /// Second cryogen, labelled "LHC4" in the original trade study
    Lhe4,
}

impl Cryogen {
    pub const ALL: [Cryogen; 2] = [Cryogen::Lox, Cryogen::Lhe4];

    pub fn properties(self) -> CryogenProperties {
        match self {
            Self::Lox => CryogenProperties {
                cv: 929.22,
                molar_mass: 16e-3,
                saturation_temperature: k(90.19),
            },
            Self::Lhe4 => CryogenProperties {
                cv: 2056.9,
                molar_mass: 52.05e-3,
                saturation_temperature: k(117.0),
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lox => "LOX",
            Self::Lhe4 => "LHe4",
        }
    }
}

impl fmt::Display for Cryogen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
