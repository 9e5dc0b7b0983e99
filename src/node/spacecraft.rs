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

use super::GainTerm;
use crate::antenna::Antenna;
use crate::rf::{DownlinkTransmitter, ReceiverChain, TransmitterChain, UplinkReceiver};
use crate::units::{Decibel, DecibelKelvin, DecibelPerKelvin, DecibelWatt, Kilometer};
use std::fmt;
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// A spacecraft: it receives the uplink and transmits the downlink.
///
/// The altitude and the pointing loss change along a pass. Instead of mutating a shared spacecraft, each time step
/// builds a snapshot with [`Spacecraft::with_altitude`] and [`Spacecraft::with_pointing_loss`]. The antenna is
/// shared between snapshots.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct Spacecraft {
    #[builder(setter(into))]
    pub antenna: Arc<Antenna>,
    pub receiver: UplinkReceiver,
    pub transmitter: DownlinkTransmitter,
    pub altitude: Kilometer,
    /// Current pointing loss of the spacecraft antenna towards the ground station
    #[builder(default)]
    pub pointing_loss: Decibel,
    #[builder(default)]
    pub eirp_gain: GainTerm,
    #[builder(default = GainTerm::LOW_GAIN_BASELINE)]
    pub figure_of_merit_gain: GainTerm,
}

impl Spacecraft {
    /// Receiver figure of merit, G/T
    pub fn figure_of_merit(&self) -> DecibelPerKelvin {
        let t_sys: DecibelKelvin = self.receiver.system_noise_temperature().into();
        self.figure_of_merit_gain.resolve(self.antenna.as_ref())
            - self.receiver.total_in_line_losses()
            - t_sys
    }

    /// Effective isotropic radiated power of the downlink
    pub fn eirp(&self) -> DecibelWatt {
        self.transmitter.delivered_power() + self.eirp_gain.resolve(self.antenna.as_ref())
    }

    #[must_use]
    pub fn with_pointing_loss(&self, pointing_loss: Decibel) -> Self {
        let mut me = self.clone();
        me.pointing_loss = pointing_loss;
        me
    }

    #[must_use]
    pub fn with_altitude(&self, altitude: Kilometer) -> Self {
        let mut me = self.clone();
        me.altitude = altitude;
        me
    }
}

impl fmt::Display for Spacecraft {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "spacecraft at {:.3} with {}: G/T = {:.3}, EIRP = {:.3}, pointing loss = {:.3}",
            self.altitude,
            self.antenna,
            self.figure_of_merit(),
            self.eirp(),
            self.pointing_loss
        )
    }
}
