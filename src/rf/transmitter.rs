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

use super::{connector_losses, TransmitterChain};
use crate::units::{Decibel, DecibelWatt, Watt};
use serde_derive::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// A transmitter and its line up to the antenna.
///
/// The same model serves on both ends of the link: see [`UplinkTransmitter`] for the ground station and
/// [`DownlinkTransmitter`] for the spacecraft.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct Transmitter {
    /// Output power of the amplifier
    pub power_output: Watt,
    /// Total cable guide loss
    #[builder(default)]
    #[serde(default)]
    pub guide_loss: Decibel,
    /// Number of in-line connectors
    #[builder(default)]
    #[serde(default)]
    pub connectors: u32,
    #[builder(default)]
    #[serde(default)]
    pub filter_insertion_losses: Decibel,
    #[builder(default)]
    #[serde(default)]
    pub other_in_line_losses: Decibel,
    /// Antenna mismatch losses
    #[builder(default)]
    #[serde(default)]
    pub mismatch_losses: Decibel,
}

/// Transmitter of the ground station
pub type UplinkTransmitter = Transmitter;
/// Transmitter of the spacecraft
pub type DownlinkTransmitter = Transmitter;

impl TransmitterChain for Transmitter {
    fn total_line_losses(&self) -> Decibel {
        connector_losses(self.connectors)
            + self.guide_loss
            + self.filter_insertion_losses
            + self.other_in_line_losses
            + self.mismatch_losses
    }

    fn delivered_power(&self) -> DecibelWatt {
        DecibelWatt::from(self.power_output) - self.total_line_losses()
    }
}
