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
use crate::geometry::GeodeticPosition;
use crate::rf::{DownlinkReceiver, ReceiverChain, TransmitterChain, UplinkTransmitter};
use crate::units::{Decibel, DecibelKelvin, DecibelPerKelvin, DecibelWatt, Kilometer};
use std::fmt;
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// A ground station: it receives the downlink and transmits the uplink.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct GroundStation {
    #[builder(setter(into))]
    pub antenna: Arc<Antenna>,
    /// Pointing loss of the ground antenna, constant over a pass
    #[builder(default)]
    pub pointing_loss: Decibel,
    pub receiver: DownlinkReceiver,
    pub transmitter: UplinkTransmitter,
    #[builder(default)]
    pub altitude: Kilometer,
    /// Geodetic location, required to compute elevations over a pass
    #[builder(default, setter(strip_option))]
    pub location: Option<GeodeticPosition>,
    #[builder(default)]
    pub eirp_gain: GainTerm,
    #[builder(default)]
    pub figure_of_merit_gain: GainTerm,
}

impl GroundStation {
    /// Receiver figure of merit, G/T
    pub fn figure_of_merit(&self) -> DecibelPerKelvin {
        let t_sys: DecibelKelvin = self.receiver.system_noise_temperature().into();
        self.figure_of_merit_gain.resolve(self.antenna.as_ref())
            - self.receiver.total_in_line_losses()
            - t_sys
    }

    /// Effective isotropic radiated power of the uplink
    pub fn eirp(&self) -> DecibelWatt {
        self.transmitter.delivered_power() + self.eirp_gain.resolve(self.antenna.as_ref())
    }
}

impl fmt::Display for GroundStation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ground station with {}: G/T = {:.3}, EIRP = {:.3}",
            self.antenna,
            self.figure_of_merit(),
            self.eirp()
        )?;
        if let Some(location) = self.location {
            write!(
                f,
                " at ({:.4}, {:.4})",
                location.latitude, location.longitude
            )?;
        }
        Ok(())
    }
}
