/*
    linkbudget, satellite link budgets with measured antenna patterns
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::units::Decibel;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

mod helical;
mod measured;
mod reflector;

pub use helical::AntennaHelical;
pub use measured::{MeasuredPattern, PatternScale, MAX_LINEAR_POINTING_LOSS};
pub use reflector::AntennaParabolicReflector;

/// Anything that has a peak gain. Callers may subtract this gain from a reference level to get a relative loss.
pub trait GainSource {
    /// Peak gain of the antenna
    fn antenna_gain(&self) -> Decibel;
}

/// An antenna whose gain is known and constant, e.g. taken from a datasheet.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FixedGain {
    pub gain: Decibel,
}

impl FixedGain {
    pub fn new(gain: Decibel) -> Self {
        Self { gain }
    }
}

impl GainSource for FixedGain {
    fn antenna_gain(&self) -> Decibel {
        self.gain
    }
}

/// All of the supported antenna gain models.
#[derive(Clone, Debug, PartialEq)]
pub enum Antenna {
    FixedGain(FixedGain),
    Measured(MeasuredPattern),
    Helical(AntennaHelical),
    ParabolicReflector(AntennaParabolicReflector),
}

impl Antenna {
    /// Shortcut for an antenna of constant gain.
    pub fn fixed(gain: Decibel) -> Self {
        Self::FixedGain(FixedGain::new(gain))
    }

    /// Returns the measured radiation pattern, if this antenna was built from one.
    pub fn as_measured(&self) -> Option<&MeasuredPattern> {
        match self {
            Self::Measured(pattern) => Some(pattern),
            _ => None,
        }
    }
}

impl GainSource for Antenna {
    fn antenna_gain(&self) -> Decibel {
        match self {
            Self::FixedGain(antenna) => antenna.antenna_gain(),
            Self::Measured(antenna) => antenna.antenna_gain(),
            Self::Helical(antenna) => antenna.antenna_gain(),
            Self::ParabolicReflector(antenna) => antenna.antenna_gain(),
        }
    }
}

impl From<FixedGain> for Antenna {
    fn from(antenna: FixedGain) -> Self {
        Self::FixedGain(antenna)
    }
}

impl From<MeasuredPattern> for Antenna {
    fn from(antenna: MeasuredPattern) -> Self {
        Self::Measured(antenna)
    }
}

impl From<AntennaHelical> for Antenna {
    fn from(antenna: AntennaHelical) -> Self {
        Self::Helical(antenna)
    }
}

impl From<AntennaParabolicReflector> for Antenna {
    fn from(antenna: AntennaParabolicReflector) -> Self {
        Self::ParabolicReflector(antenna)
    }
}

impl fmt::Display for Antenna {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self {
            Self::FixedGain(_) => "fixed gain",
            Self::Measured(_) => "measured pattern",
            Self::Helical(_) => "helical",
            Self::ParabolicReflector(_) => "parabolic reflector",
        };
        write!(f, "{kind} antenna ({:.3})", self.antenna_gain())
    }
}
