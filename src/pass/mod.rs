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

use crate::antenna::MeasuredPattern;
use crate::errors::{EmptySeriesSnafu, LinkBudgetError, PatternRequiredSnafu};
use crate::geometry::{elevation_angle, off_boresight_angle, GeodeticPosition};
use crate::link::LinkDirection;
use crate::node::GainTerm;
use crate::units::{Decibel, Degree, Kilometer, Radian};
use hifitime::Duration;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use snafu::{ensure, OptionExt};
use std::fmt;

pub mod inputs;

pub use inputs::{exclude_eclipses, offset_altitude, tile_track};

/// Position of the spacecraft at one time step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitSample {
    pub altitude: Kilometer,
    pub latitude: Degree,
    pub longitude: Degree,
}

impl OrbitSample {
    pub fn new(altitude: Kilometer, latitude: Degree, longitude: Degree) -> Self {
        Self {
            altitude,
            latitude,
            longitude,
        }
    }

    pub fn position(&self) -> GeodeticPosition {
        GeodeticPosition::new(self.latitude, self.longitude, self.altitude)
    }

    fn sanitized(self) -> Self {
        Self {
            altitude: Kilometer::new(inputs::finite_or_zero(self.altitude.value())),
            latitude: Degree::new(inputs::finite_or_zero(self.latitude.value())),
            longitude: Degree::new(inputs::finite_or_zero(self.longitude.value())),
        }
    }
}

/// Attitude pointing error at one time step: `theta` is measured from the antenna boresight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttitudeSample {
    pub theta: Degree,
    pub phi: Degree,
}

impl AttitudeSample {
    pub fn new(theta: Degree, phi: Degree) -> Self {
        Self { theta, phi }
    }

    fn sanitized(self) -> Self {
        Self {
            theta: Degree::new(inputs::finite_or_zero(self.theta.value())),
            phi: Degree::new(inputs::finite_or_zero(self.phi.value())),
        }
    }
}

/// State of the link at one time step of a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkSample {
    /// Time since the first sample of the pass
    pub time_offset: Duration,
    pub elevation: Degree,
    /// Angle between the spacecraft antenna boresight and the ground station
    pub off_boresight: Degree,
    /// Pattern sample towards the ground station, in the scale of the measured pattern
    pub gain: f64,
    pub pointing_loss: Decibel,
    pub link_margin: Decibel,
}

/// Dynamic pointing loss over a pass.
///
/// At each time step, the elevation of the spacecraft gives the angle between the nadir pointing antenna and the
/// ground station, to which the attitude error is added. The measured pattern of the spacecraft antenna then gives
/// the pointing loss, which feeds a fresh snapshot of the link. Time steps are independent of one another.
#[derive(Clone, Debug)]
pub struct PointingLossPass<L: LinkDirection> {
    link: L,
    pattern: MeasuredPattern,
    ground_station: GeodeticPosition,
    orbit: Vec<OrbitSample>,
    attitude: Vec<AttitudeSample>,
    step: Duration,
}

impl<L: LinkDirection> PointingLossPass<L> {
    /// Prepares a pass of `link` over the provided series, sampled every `step`.
    ///
    /// Non-finite inputs are replaced by zero. If the series differ in length, the longest is truncated.
    ///
    /// The measured pattern only sets the pointing loss. Its peak gain depends on the domain the grid was integrated
    /// over, so spacecraft gain terms set to [`GainTerm::Antenna`] are replaced by [`GainTerm::LEGACY_EIRP`] for the
    /// EIRP and [`GainTerm::LOW_GAIN_BASELINE`] for the figure of merit.
    pub fn new(
        link: L,
        ground_station: GeodeticPosition,
        orbit: Vec<OrbitSample>,
        attitude: Vec<AttitudeSample>,
        step: Duration,
    ) -> Result<Self, LinkBudgetError> {
        let pattern = link
            .spacecraft()
            .antenna
            .as_measured()
            .cloned()
            .context(PatternRequiredSnafu {
                action: "a dynamic pointing loss pass",
            })?;

        let link = with_fixed_gain_terms(link);

        ensure!(!orbit.is_empty(), EmptySeriesSnafu { series: "orbit" });
        ensure!(!attitude.is_empty(), EmptySeriesSnafu { series: "attitude" });

        let len = orbit.len().min(attitude.len());
        if orbit.len() != attitude.len() {
            warn!(
                "orbit has {} samples but attitude has {}: only the first {len} are used",
                orbit.len(),
                attitude.len()
            );
        }

        let orbit: Vec<OrbitSample> = orbit.into_iter().take(len).map(OrbitSample::sanitized).collect();
        let attitude: Vec<AttitudeSample> = attitude
            .into_iter()
            .take(len)
            .map(AttitudeSample::sanitized)
            .collect();

        info!(
            "{} pass of {len} samples every {step} ({})",
            link.kind(),
            step * (len as i64)
        );

        Ok(Self {
            link,
            pattern,
            ground_station,
            orbit,
            attitude,
            step,
        })
    }

    /// Number of time steps of this pass
    pub fn len(&self) -> usize {
        self.orbit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbit.is_empty()
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Link evaluated at each time step, before the geometry and the pointing loss are applied
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Evaluates the link at the time step `index`, or returns None past the end of the pass.
    pub fn sample(&self, index: usize) -> Option<LinkSample> {
        let orbit = self.orbit.get(index)?;
        let attitude = self.attitude.get(index)?;
        Some(self.evaluate_step(index, orbit, attitude))
    }

    /// Lazily evaluates every time step, in order. Each call restarts from the beginning of the pass.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = LinkSample> + '_ {
        self.orbit
            .iter()
            .zip(self.attitude.iter())
            .enumerate()
            .map(move |(index, (orbit, attitude))| self.evaluate_step(index, orbit, attitude))
    }

    /// Evaluates the whole pass sequentially.
    pub fn evaluate(&self) -> Vec<LinkSample> {
        self.iter().collect()
    }

    /// Evaluates the whole pass on the rayon thread pool. The samples are in the same order as [`Self::evaluate`].
    pub fn par_evaluate(&self) -> Vec<LinkSample> {
        self.orbit
            .par_iter()
            .zip(self.attitude.par_iter())
            .enumerate()
            .map(|(index, (orbit, attitude))| self.evaluate_step(index, orbit, attitude))
            .collect()
    }

    fn evaluate_step(&self, index: usize, orbit: &OrbitSample, attitude: &AttitudeSample) -> LinkSample {
        let elevation = elevation_angle(&orbit.position(), &self.ground_station);
        let off_boresight = off_boresight_angle(orbit.altitude, elevation, attitude.theta);

        let theta = Radian::from(off_boresight);
        let phi = Radian::from(attitude.phi);
        let gain = self.pattern.gain_p(theta, phi);
        let pointing_loss = self.pattern.pointing_loss(theta, phi);

        let spacecraft = self
            .link
            .spacecraft()
            .with_altitude(orbit.altitude)
            .with_pointing_loss(pointing_loss);
        let link = self.link.with_geometry(spacecraft, elevation);

        LinkSample {
            time_offset: self.step * (index as i64),
            elevation,
            off_boresight,
            gain,
            pointing_loss,
            link_margin: link.link_margin(),
        }
    }
}

fn with_fixed_gain_terms<L: LinkDirection>(link: L) -> L {
    let mut spacecraft = link.spacecraft().clone();
    if spacecraft.eirp_gain != GainTerm::Antenna && spacecraft.figure_of_merit_gain != GainTerm::Antenna {
        return link;
    }

    if spacecraft.eirp_gain == GainTerm::Antenna {
        spacecraft.eirp_gain = GainTerm::LEGACY_EIRP;
        info!("spacecraft EIRP uses {:?} over the pass", spacecraft.eirp_gain);
    }
    if spacecraft.figure_of_merit_gain == GainTerm::Antenna {
        spacecraft.figure_of_merit_gain = GainTerm::LOW_GAIN_BASELINE;
        info!(
            "spacecraft G/T uses {:?} over the pass",
            spacecraft.figure_of_merit_gain
        );
    }
    link.with_geometry(spacecraft, link.elevation())
}

/// Statistics of a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PassSummary {
    pub samples: usize,
    pub duration: Duration,
    pub min_margin: Decibel,
    pub max_margin: Decibel,
    pub mean_margin: Decibel,
    pub max_pointing_loss: Decibel,
    pub loss_threshold: Decibel,
    /// Fraction of the samples whose pointing loss exceeds the threshold, in [0, 1]
    pub fraction_above_threshold: f64,
}

impl PassSummary {
    pub fn from_samples(samples: &[LinkSample], loss_threshold: Decibel) -> Result<Self, LinkBudgetError> {
        let first = samples.first().context(EmptySeriesSnafu { series: "link sample" })?;
        let last = samples.last().unwrap_or(first);

        let mut min_margin = first.link_margin;
        let mut max_margin = first.link_margin;
        let mut max_pointing_loss = first.pointing_loss;
        let mut above = 0;
        for sample in samples {
            min_margin = min_margin.min(sample.link_margin);
            max_margin = max_margin.max(sample.link_margin);
            max_pointing_loss = max_pointing_loss.max(sample.pointing_loss);
            if sample.pointing_loss > loss_threshold {
                above += 1;
            }
        }

        let mean_margin = samples.iter().map(|s| s.link_margin).sum::<Decibel>() / samples.len() as f64;

        Ok(Self {
            samples: samples.len(),
            duration: last.time_offset - first.time_offset,
            min_margin,
            max_margin,
            mean_margin,
            max_pointing_loss,
            loss_threshold,
            fraction_above_threshold: above as f64 / samples.len() as f64,
        })
    }
}

impl fmt::Display for PassSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} samples over {}: margin in [{:.3}, {:.3}] (mean {:.3}), max pointing loss {:.3}, {:.2} % above {:.1}",
            self.samples,
            self.duration,
            self.min_margin,
            self.max_margin,
            self.mean_margin,
            self.max_pointing_loss,
            100.0 * self.fraction_above_threshold,
            self.loss_threshold
        )
    }
}
