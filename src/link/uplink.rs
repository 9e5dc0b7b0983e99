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

use super::{LinkDirection, LinkKind, LinkParameters};
use crate::node::{GroundStation, Spacecraft};
use crate::units::{Decibel, DecibelHertz, DecibelPerKelvin, DecibelWatt, Degree};
use std::sync::Arc;

/// Negated Boltzmann constant used in the uplink budget, in dB(W/K/Hz).
pub const UPLINK_INVERSE_BOLTZMANN: Decibel = Decibel::new(228.6);

/// Ground station to spacecraft link.
///
/// The spacecraft pointing loss is accounted for twice: once in the total losses and once in the S/No.
#[derive(Clone, Debug, PartialEq)]
pub struct Uplink {
    pub ground_station: Arc<GroundStation>,
    pub spacecraft: Spacecraft,
    pub parameters: LinkParameters,
    pub elevation: Degree,
}

impl Uplink {
    pub fn new<G: Into<Arc<GroundStation>>>(
        ground_station: G,
        spacecraft: Spacecraft,
        parameters: LinkParameters,
        elevation: Degree,
    ) -> Self {
        Self {
            ground_station: ground_station.into(),
            spacecraft,
            parameters,
            elevation,
        }
    }
}

impl LinkDirection for Uplink {
    fn kind(&self) -> LinkKind {
        LinkKind::Uplink
    }

    fn ground_station(&self) -> &GroundStation {
        &self.ground_station
    }

    fn spacecraft(&self) -> &Spacecraft {
        &self.spacecraft
    }

    fn parameters(&self) -> &LinkParameters {
        &self.parameters
    }

    fn elevation(&self) -> Degree {
        self.elevation
    }

    fn with_geometry(&self, spacecraft: Spacecraft, elevation: Degree) -> Self {
        Self {
            ground_station: Arc::clone(&self.ground_station),
            spacecraft,
            parameters: self.parameters,
            elevation,
        }
    }

    fn eirp(&self) -> DecibelWatt {
        self.ground_station.eirp()
    }

    fn figure_of_merit(&self) -> DecibelPerKelvin {
        self.spacecraft.figure_of_merit()
    }

    fn total_losses(&self) -> Decibel {
        self.parameters.additional_losses + self.path_loss() + self.spacecraft.pointing_loss
    }

    fn isotropic_signal_level(&self) -> DecibelWatt {
        self.eirp() - self.total_losses()
    }

    fn s_to_no(&self) -> DecibelHertz {
        (self.isotropic_signal_level() - self.spacecraft.pointing_loss)
            .noise_density_ratio(self.figure_of_merit(), UPLINK_INVERSE_BOLTZMANN)
    }
}
