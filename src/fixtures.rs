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

//! Reference ground station and spacecraft used across the unit tests.

use crate::antenna::Antenna;
use crate::link::LinkParameters;
use crate::node::{GroundStation, Spacecraft};
use crate::rf::{DownlinkReceiver, InLineLosses, Transmitter, UplinkReceiver};
use crate::units::{Decibel, Kelvin, Kilometer, Megahertz, Watt};

pub(crate) fn reference_station() -> GroundStation {
    GroundStation::builder()
        .antenna(Antenna::fixed(Decibel::new(12.0)))
        .receiver(
            DownlinkReceiver::builder()
                .losses(
                    InLineLosses::builder()
                        .guide_loss(Decibel::new(0.2852))
                        .bandpass_filter_insertion_loss(Decibel::new(1.5))
                        .connectors(4)
                        .build(),
                )
                .sky_temperature(Kelvin::new(154.0))
                .ground_station_temperature(Kelvin::new(290.0))
                .lna_temperature(Kelvin::new(28.0))
                .lna_gain(Decibel::new(22.5))
                .waveguide_losses(Decibel::new(0.1))
                .comms_receiver_front_end_temperature(Kelvin::new(1000.0))
                .build(),
        )
        .transmitter(
            Transmitter::builder()
                .power_output(Watt::new(13.0))
                .guide_loss(Decibel::new(0.155))
                .connectors(4)
                .filter_insertion_losses(Decibel::new(1.0))
                .other_in_line_losses(Decibel::new(0.7))
                .build(),
        )
        .altitude(Kilometer::new(0.05))
        .build()
}

pub(crate) fn reference_spacecraft(antenna: Antenna) -> Spacecraft {
    Spacecraft::builder()
        .antenna(antenna)
        .receiver(
            UplinkReceiver::builder()
                .losses(
                    InLineLosses::builder()
                        .guide_loss(Decibel::new(0.16))
                        .bandpass_filter_insertion_loss(Decibel::new(0.7))
                        .other_in_line_insertion_loss(Decibel::new(0.5))
                        .connectors(2)
                        .build(),
                )
                .sky_temperature(Kelvin::new(280.0))
                .spacecraft_temperature(Kelvin::new(280.0))
                .lna_temperature(Kelvin::new(28.0))
                .lna_gain(Decibel::new(20.0))
                .build(),
        )
        .transmitter(
            Transmitter::builder()
                .power_output(Watt::new(1.3))
                .connectors(4)
                .other_in_line_losses(Decibel::new(0.5))
                .mismatch_losses(Decibel::new(0.23))
                .build(),
        )
        .altitude(Kilometer::new(380.0))
        .build()
}

/// UHF telemetry at 20 kbit/s.
pub(crate) fn reference_parameters() -> LinkParameters {
    LinkParameters::builder()
        .frequency(Megahertz::new(437.0))
        .additional_losses(Decibel::new(3.4))
        .data_rate_bps(20_000.0)
        .modulation_loss(Decibel::new(1.0))
        .eb_to_no(Decibel::new(8.0))
        .build()
}
