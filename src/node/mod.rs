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

use crate::antenna::GainSource;
use crate::units::Decibel;
use serde_derive::{Deserialize, Serialize};

mod ground_station;
mod spacecraft;

pub use ground_station::GroundStation;
pub use spacecraft::Spacecraft;

/// Selects which gain enters the EIRP or the figure of merit of a node.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainTerm {
    /// Peak gain of the node's own antenna
    Antenna,
    /// A constant, independent of the antenna
    Fixed(Decibel),
}

impl GainTerm {
    /// Constant gain historically added to the delivered power to get the EIRP.
    pub const LEGACY_EIRP: Self = Self::Fixed(Decibel::new(2.873));
    /// Baseline gain of a low gain spacecraft antenna, used in the spacecraft G/T by default.
    pub const LOW_GAIN_BASELINE: Self = Self::Fixed(Decibel::new(2.0));

    pub fn resolve<G: GainSource + ?Sized>(&self, antenna: &G) -> Decibel {
        match self {
            Self::Antenna => antenna.antenna_gain(),
            Self::Fixed(gain) => *gain,
        }
    }
}

impl Default for GainTerm {
    fn default() -> Self {
        Self::Antenna
    }
}
