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

use super::{connector_losses, ReceiverChain};
use crate::units::{Decibel, Kelvin};
use serde_derive::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Passive losses between the antenna port and the low noise amplifier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(default)]
pub struct InLineLosses {
    #[builder(default)]
    pub guide_loss: Decibel,
    #[builder(default)]
    pub bandpass_filter_insertion_loss: Decibel,
    #[builder(default)]
    pub other_in_line_insertion_loss: Decibel,
    /// Number of in-line connectors
    #[builder(default)]
    pub connectors: u32,
}

impl InLineLosses {
    pub fn total(&self) -> Decibel {
        self.guide_loss
            + self.bandpass_filter_insertion_loss
            + self.other_in_line_insertion_loss
            + connector_losses(self.connectors)
    }

    /// Fraction of the power at the antenna port which reaches the LNA, as a linear ratio.
    fn transmissivity(&self) -> f64 {
        1.0 / self.total().to_linear()
    }
}

/// Spacecraft receiver.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct UplinkReceiver {
    #[builder(default)]
    #[serde(flatten)]
    pub losses: InLineLosses,
    /// Sky temperature seen by the spacecraft antenna
    pub sky_temperature: Kelvin,
    /// Physical temperature of the spacecraft feed line
    pub spacecraft_temperature: Kelvin,
    pub lna_temperature: Kelvin,
    pub lna_gain: Decibel,
    /// Noise temperature of the stage after the LNA
    #[builder(default)]
    #[serde(default)]
    pub second_stage_temperature: Kelvin,
}

impl ReceiverChain for UplinkReceiver {
    fn total_in_line_losses(&self) -> Decibel {
        self.losses.total()
    }

    fn system_noise_temperature(&self) -> Kelvin {
        let a = self.losses.transmissivity();
        let g = self.lna_gain.to_linear();
        self.sky_temperature * a
            + self.spacecraft_temperature * (1.0 - a)
            + self.lna_temperature
            + self.second_stage_temperature / g
    }
}

/// Ground station receiver.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct DownlinkReceiver {
    #[builder(default)]
    #[serde(flatten)]
    pub losses: InLineLosses,
    /// Sky temperature seen by the ground station antenna
    pub sky_temperature: Kelvin,
    /// Physical temperature of the ground station feed line
    pub ground_station_temperature: Kelvin,
    pub lna_temperature: Kelvin,
    pub lna_gain: Decibel,
    /// Losses from the LNA to the communications receiver. Reported only, it does not enter the noise temperature.
    #[builder(default)]
    #[serde(default)]
    pub waveguide_losses: Decibel,
    pub comms_receiver_front_end_temperature: Kelvin,
}

impl ReceiverChain for DownlinkReceiver {
    fn total_in_line_losses(&self) -> Decibel {
        self.losses.total()
    }

    fn system_noise_temperature(&self) -> Kelvin {
        let a = self.losses.transmissivity();
        let g = self.lna_gain.to_linear();
        // NOTE: the front end contribution is scaled by 10^(a/10) with `a` the linear transmissivity, as the
        // reference ground station budgets do.
        self.sky_temperature * a
            + self.ground_station_temperature * (1.0 - a)
            + self.lna_temperature
            + self.comms_receiver_front_end_temperature * (10.0_f64.powf(a / 10.0) / g)
    }
}
