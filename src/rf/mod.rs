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

use crate::units::{Decibel, DecibelWatt, Kelvin};

mod receiver;
mod transmitter;

pub use receiver::{DownlinkReceiver, InLineLosses, UplinkReceiver};
pub use transmitter::{DownlinkTransmitter, Transmitter, UplinkTransmitter};

/// Insertion loss of a single in-line connector.
pub const CONNECTOR_LOSS: Decibel = Decibel::new(0.05);

/// The transmit side of an RF chain, from the power amplifier to the antenna port.
pub trait TransmitterChain {
    /// Sum of all of the losses between the amplifier output and the antenna
    fn total_line_losses(&self) -> Decibel;
    /// Power delivered to the antenna port
    fn delivered_power(&self) -> DecibelWatt;
}

/// The receive side of an RF chain, from the antenna port to the receiver.
pub trait ReceiverChain {
    /// Sum of all of the losses between the antenna and the LNA
    fn total_in_line_losses(&self) -> Decibel;
    /// System noise temperature referenced to the antenna port
    fn system_noise_temperature(&self) -> Kelvin;
}

pub(crate) fn connector_losses(connectors: u32) -> Decibel {
    CONNECTOR_LOSS * f64::from(connectors)
}
