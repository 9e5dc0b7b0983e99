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


/*! # linkbudget

Satellite communication link budgets: from the static parameters of an RF chain (transmitter power, line
losses, receiver noise temperatures, antenna gains) to the link margin of a downlink or an uplink, and over a whole
pass when the spacecraft antenna is described by a measured radiation pattern and its attitude is imperfect.

```
use linkbudget::prelude::*;

let downlink_margin = |sc_gain: f64| {
    let station = GroundStation::builder()
        .antenna(Antenna::fixed(Decibel::new(12.0)))
        .receiver(
            DownlinkReceiver::builder()
                .sky_temperature(Kelvin::new(154.0))
                .ground_station_temperature(Kelvin::new(290.0))
                .lna_temperature(Kelvin::new(28.0))
                .lna_gain(Decibel::new(22.5))
                .comms_receiver_front_end_temperature(Kelvin::new(1000.0))
                .build(),
        )
        .transmitter(Transmitter::builder().power_output(Watt::new(13.0)).build())
        .altitude(Kilometer::new(0.05))
        .build();

    let spacecraft = Spacecraft::builder()
        .antenna(Antenna::fixed(Decibel::new(sc_gain)))
        .receiver(
            UplinkReceiver::builder()
                .sky_temperature(Kelvin::new(280.0))
                .spacecraft_temperature(Kelvin::new(280.0))
                .lna_temperature(Kelvin::new(28.0))
                .lna_gain(Decibel::new(20.0))
                .build(),
        )
        .transmitter(Transmitter::builder().power_output(Watt::new(1.3)).build())
        .altitude(Kilometer::new(380.0))
        .build();

    let params = LinkParameters::builder()
        .frequency(Megahertz::new(437.0))
        .data_rate_bps(9600.0)
        .eb_to_no(Decibel::new(8.0))
        .build();

    Downlink::new(station, spacecraft, params, Degree::new(30.0)).link_margin()
};

// One more dB of antenna gain is one more dB of margin
let delta = downlink_margin(0.0) - downlink_margin(-1.0);
assert!((delta.value() - 1.0).abs() < 1e-9);
```
*/

/// Unit-tagged quantities: a temperature cannot be added to a power.
pub mod units;

/// Numerical integration of sampled functions.
pub mod integrate;

/// Antenna gain models, including measured radiation patterns.
pub mod antenna;

/// Transmitter and receiver chains.
pub mod rf;

/// Ground station and spacecraft nodes.
pub mod node;

/// Downlink and uplink budgets.
pub mod link;

/// Slant range, elevation and off-boresight angles.
pub mod geometry;

/// Dynamic pointing loss over a pass.
pub mod pass;

/// Configuration and reporting.
pub mod io;

mod errors;
/// Functions which may fail return this error.
pub use self::errors::LinkBudgetError;

#[cfg(test)]
pub(crate) mod fixtures;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

pub mod prelude {
    pub use crate::antenna::{
        Antenna, AntennaHelical, AntennaParabolicReflector, FixedGain, GainSource, MeasuredPattern,
        PatternScale,
    };
    pub use crate::geometry::{elevation_angle, off_boresight_angle, slant_range, GeodeticPosition};
    pub use crate::io::{ConfigRepr, ScenarioConfig};
    pub use crate::link::{
        polarization_loss, Downlink, LinkBudgetReport, LinkDirection, LinkParameters, Uplink,
    };
    pub use crate::node::{GainTerm, GroundStation, Spacecraft};
    pub use crate::pass::{AttitudeSample, LinkSample, OrbitSample, PassSummary, PointingLossPass};
    pub use crate::rf::{
        DownlinkReceiver, InLineLosses, ReceiverChain, Transmitter, TransmitterChain, UplinkReceiver,
    };
    pub use crate::units::*;
    pub use crate::LinkBudgetError;
    pub use hifitime::{Duration, Unit};
}
