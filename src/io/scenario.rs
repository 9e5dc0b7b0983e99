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

use super::{ConfigError, ConfigRepr, InvalidConfigSnafu};
use crate::antenna::{
    Antenna, AntennaHelical, AntennaParabolicReflector, FixedGain, MeasuredPattern,
};
use crate::errors::{LinkBudgetError, PatternRequiredSnafu};
use crate::geometry::GeodeticPosition;
use crate::link::{Downlink, LinkParameters, Uplink};
use crate::node::{GainTerm, GroundStation, Spacecraft};
use crate::pass::{
    offset_altitude, tile_track, AttitudeSample, LinkSample, OrbitSample, PassSummary,
    PointingLossPass,
};
use crate::rf::{DownlinkReceiver, DownlinkTransmitter, UplinkReceiver, UplinkTransmitter};
use crate::units::{Decibel, Degree, Kilometer, Meter};
use hifitime::Duration;
use serde_derive::{Deserialize, Serialize};
use snafu::OptionExt;
use std::sync::Arc;

/// Antenna of a node, as configured. A measured pattern is not stored in the configuration: it is provided when
/// building the nodes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AntennaConfig {
    FixedGain {
        gain: Decibel,
    },
    Helical {
        circumference: Meter,
        turns: u32,
        turns_spacing: Meter,
        wavelength: Meter,
    },
    ParabolicReflector {
        diameter: Meter,
        wavelength: Meter,
        aperture_efficiency: f64,
    },
    Measured,
}

impl AntennaConfig {
    pub fn build(&self, pattern: Option<MeasuredPattern>) -> Result<Antenna, LinkBudgetError> {
        if pattern.is_some() && *self != Self::Measured {
            warn!("a measured pattern was provided for a {self:?} antenna: ignoring it");
        }

        Ok(match *self {
            Self::FixedGain { gain } => FixedGain::new(gain).into(),
            Self::Helical {
                circumference,
                turns,
                turns_spacing,
                wavelength,
            } => AntennaHelical::new(circumference, turns, turns_spacing, wavelength).into(),
            Self::ParabolicReflector {
                diameter,
                wavelength,
                aperture_efficiency,
            } => AntennaParabolicReflector::new(diameter, wavelength, aperture_efficiency).into(),
            Self::Measured => pattern
                .context(PatternRequiredSnafu {
                    action: "a measured antenna configuration",
                })?
                .into(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GroundStationConfig {
    pub antenna: AntennaConfig,
    #[serde(default)]
    pub pointing_loss: Decibel,
    pub receiver: DownlinkReceiver,
    pub transmitter: UplinkTransmitter,
    #[serde(default)]
    pub altitude: Kilometer,
    #[serde(default)]
    pub location: Option<GeodeticPosition>,
    #[serde(default)]
    pub eirp_gain: GainTerm,
    #[serde(default)]
    pub figure_of_merit_gain: GainTerm,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacecraftConfig {
    pub antenna: AntennaConfig,
    pub receiver: UplinkReceiver,
    pub transmitter: DownlinkTransmitter,
    pub altitude: Kilometer,
    #[serde(default)]
    pub eirp_gain: GainTerm,
    #[serde(default = "low_gain_baseline")]
    pub figure_of_merit_gain: GainTerm,
}

fn low_gain_baseline() -> GainTerm {
    GainTerm::LOW_GAIN_BASELINE
}

/// Preparation of the time series of a pass.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassConfig {
    /// Repeat the orbit track to cover the whole attitude series
    pub tile_track: bool,
    /// Constant bias added to the altitude of the orbit track
    pub altitude_bias: Kilometer,
    /// Pointing loss above which a sample is counted in the pass summary
    pub loss_threshold: Decibel,
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            tile_track: false,
            altitude_bias: Kilometer::default(),
            loss_threshold: Decibel::new(3.0),
        }
    }
}

/// Everything needed to build a link budget, loaded from YAML with [`ConfigRepr`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    pub link: LinkParameters,
    /// Elevation of the static link budget
    pub elevation: Degree,
    pub ground_station: GroundStationConfig,
    pub spacecraft: SpacecraftConfig,
    #[serde(default)]
    pub pass: PassConfig,
}

impl ConfigRepr for ScenarioConfig {}

impl ScenarioConfig {
    pub fn ground_station(&self) -> Result<GroundStation, LinkBudgetError> {
        let cfg = &self.ground_station;
        ensure_not_measured(&cfg.antenna)?;
        Ok(GroundStation {
            antenna: Arc::new(cfg.antenna.build(None)?),
            pointing_loss: cfg.pointing_loss,
            receiver: cfg.receiver,
            transmitter: cfg.transmitter,
            altitude: cfg.altitude,
            location: cfg.location,
            eirp_gain: cfg.eirp_gain,
            figure_of_merit_gain: cfg.figure_of_merit_gain,
        })
    }

    /// Builds the spacecraft, using `pattern` if its antenna is configured as measured.
    pub fn spacecraft(&self, pattern: Option<MeasuredPattern>) -> Result<Spacecraft, LinkBudgetError> {
        let cfg = &self.spacecraft;
        Ok(Spacecraft {
            antenna: Arc::new(cfg.antenna.build(pattern)?),
            receiver: cfg.receiver,
            transmitter: cfg.transmitter,
            altitude: cfg.altitude,
            pointing_loss: Decibel::default(),
            eirp_gain: cfg.eirp_gain,
            figure_of_merit_gain: cfg.figure_of_merit_gain,
        })
    }

    pub fn downlink(&self, pattern: Option<MeasuredPattern>) -> Result<Downlink, LinkBudgetError> {
        Ok(Downlink::new(
            self.ground_station()?,
            self.spacecraft(pattern)?,
            self.link,
            self.elevation,
        ))
    }

    pub fn uplink(&self, pattern: Option<MeasuredPattern>) -> Result<Uplink, LinkBudgetError> {
        Ok(Uplink::new(
            self.ground_station()?,
            self.spacecraft(pattern)?,
            self.link,
            self.elevation,
        ))
    }
}

fn ensure_not_measured(antenna: &AntennaConfig) -> Result<(), ConfigError> {
    if *antenna == AntennaConfig::Measured {
        InvalidConfigSnafu {
            msg: "the ground station antenna cannot be a measured pattern",
        }
        .fail()
    } else {
        Ok(())
    }
}

/// Evaluates the downlink margin over a pass, from parsed time series sampled every `step` and a scenario
/// configuration.
///
/// The ground station location is required. The samples are evaluated in parallel and returned in time order.
pub fn run_downlink_pass(
    config: &ScenarioConfig,
    pattern: MeasuredPattern,
    orbit: Vec<OrbitSample>,
    attitude: Vec<AttitudeSample>,
    step: Duration,
) -> Result<Vec<LinkSample>, LinkBudgetError> {
    let location = config
        .ground_station
        .location
        .ok_or_else(|| ConfigError::InvalidConfig {
            msg: format!("scenario `{}` has no ground station location", config.name),
        })?;

    let mut orbit = if config.pass.tile_track {
        tile_track(&orbit, attitude.len())
    } else {
        orbit
    };
    offset_altitude(&mut orbit, config.pass.altitude_bias);

    let link = config.downlink(Some(pattern))?;
    let pass = PointingLossPass::new(link, location, orbit, attitude, step)?;
    let samples = pass.par_evaluate();

    let summary = PassSummary::from_samples(&samples, config.pass.loss_threshold)?;
    info!("{}: {summary}", config.name);

    Ok(samples)
}
