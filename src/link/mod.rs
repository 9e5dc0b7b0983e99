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

use crate::node::{GroundStation, Spacecraft};
use crate::units::{
    Decibel, DecibelHertz, DecibelPerKelvin, DecibelWatt, Degree, Hertz, Kilometer, Megahertz,
    Meter, Radian,
};
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use typed_builder::TypedBuilder;

mod downlink;
mod uplink;

pub use downlink::Downlink;
pub use uplink::Uplink;

/// Free-space path loss of a one wavelength range, i.e. 20 log10(4π).
pub const PATH_LOSS_OFFSET: Decibel = Decibel::new(21.9842);

/// Static parameters of a link, shared by every time step of a pass.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct LinkParameters {
    /// Carrier frequency
    pub frequency: Megahertz,
    /// Losses other than the path and pointing losses (atmosphere, ionosphere, rain, ...)
    #[builder(default)]
    #[serde(default)]
    pub additional_losses: Decibel,
    /// Data rate, in bit per second
    pub data_rate_bps: f64,
    /// Maximum allowed bit error rate, reported only
    #[builder(default = 1e-6)]
    #[serde(default = "default_allowed_ber")]
    pub allowed_ber: f64,
    /// Modulation implementation loss
    #[builder(default)]
    #[serde(default)]
    pub modulation_loss: Decibel,
    /// Eb/No required by the demodulator to reach the allowed BER
    pub eb_to_no: Decibel,
}

fn default_allowed_ber() -> f64 {
    1e-6
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    Downlink,
    Uplink,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Downlink => write!(f, "downlink"),
            Self::Uplink => write!(f, "uplink"),
        }
    }
}

/// One direction of a ground station to spacecraft link.
///
/// Every quantity is recomputed from the current ground station, spacecraft and elevation on each call: nothing is
/// cached. To move along a pass, build a new snapshot with [`LinkDirection::with_geometry`].
pub trait LinkDirection: Clone + Send + Sync {
    fn kind(&self) -> LinkKind;
    fn ground_station(&self) -> &GroundStation;
    fn spacecraft(&self) -> &Spacecraft;
    fn parameters(&self) -> &LinkParameters;
    /// Elevation of the spacecraft seen from the ground station
    fn elevation(&self) -> Degree;

    /// Returns a copy of this link for another spacecraft state and elevation.
    #[must_use]
    fn with_geometry(&self, spacecraft: Spacecraft, elevation: Degree) -> Self;

    /// EIRP of the transmitting end
    fn eirp(&self) -> DecibelWatt;
    /// Figure of merit of the receiving end
    fn figure_of_merit(&self) -> DecibelPerKelvin;
    /// Path, pointing and additional losses
    fn total_losses(&self) -> Decibel;
    /// Signal level that an isotropic antenna would receive at the receiving end
    fn isotropic_signal_level(&self) -> DecibelWatt;
    /// Signal to noise power density ratio
    fn s_to_no(&self) -> DecibelHertz;

    fn slant_range(&self) -> Kilometer {
        crate::geometry::slant_range(
            self.spacecraft().altitude,
            self.ground_station().altitude,
            self.elevation(),
        )
    }

    fn wavelength(&self) -> Meter {
        Hertz::from(self.parameters().frequency).wavelength()
    }

    fn path_loss(&self) -> Decibel {
        let range = Meter::from(self.slant_range());
        PATH_LOSS_OFFSET + Decibel::new(20.0 * (range.value() / self.wavelength().value()).log10())
    }

    /// Eb/No available at the receiver for the configured data rate
    fn system_eb_to_no(&self) -> Decibel {
        self.s_to_no() - DecibelHertz::from(Hertz::new(self.parameters().data_rate_bps))
    }

    fn link_margin(&self) -> Decibel {
        self.system_eb_to_no() - self.parameters().eb_to_no - self.parameters().modulation_loss
    }

    /// Evaluates every term of the budget at once.
    fn budget(&self) -> LinkBudgetReport {
        LinkBudgetReport {
            kind: self.kind(),
            frequency: self.parameters().frequency,
            elevation: self.elevation(),
            slant_range: self.slant_range(),
            eirp: self.eirp(),
            path_loss: self.path_loss(),
            total_losses: self.total_losses(),
            isotropic_signal_level: self.isotropic_signal_level(),
            spacecraft_pointing_loss: self.spacecraft().pointing_loss,
            figure_of_merit: self.figure_of_merit(),
            s_to_no: self.s_to_no(),
            system_eb_to_no: self.system_eb_to_no(),
            required_eb_to_no: self.parameters().eb_to_no,
            modulation_loss: self.parameters().modulation_loss,
            link_margin: self.link_margin(),
        }
    }
}

/// All of the intermediate terms of a link budget, for reporting.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkBudgetReport {
    pub kind: LinkKind,
    pub frequency: Megahertz,
    pub elevation: Degree,
    pub slant_range: Kilometer,
    pub eirp: DecibelWatt,
    pub path_loss: Decibel,
    pub total_losses: Decibel,
    pub isotropic_signal_level: DecibelWatt,
    pub spacecraft_pointing_loss: Decibel,
    pub figure_of_merit: DecibelPerKelvin,
    pub s_to_no: DecibelHertz,
    pub system_eb_to_no: Decibel,
    pub required_eb_to_no: Decibel,
    pub modulation_loss: Decibel,
    pub link_margin: Decibel,
}

impl fmt::Display for LinkBudgetReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} at {:.3}, elevation {:.2}", self.kind, self.frequency, self.elevation)?;
        writeln!(f, "  slant range            {:.3}", self.slant_range)?;
        writeln!(f, "  EIRP                   {:.3}", self.eirp)?;
        writeln!(f, "  path loss              {:.3}", self.path_loss)?;
        writeln!(f, "  total losses           {:.3}", self.total_losses)?;
        writeln!(f, "  isotropic signal level {:.3}", self.isotropic_signal_level)?;
        writeln!(f, "  S/C pointing loss      {:.3}", self.spacecraft_pointing_loss)?;
        writeln!(f, "  G/T                    {:.3}", self.figure_of_merit)?;
        writeln!(f, "  S/No                   {:.3}", self.s_to_no)?;
        writeln!(f, "  system Eb/No           {:.3}", self.system_eb_to_no)?;
        writeln!(f, "  required Eb/No         {:.3}", self.required_eb_to_no)?;
        writeln!(f, "  modulation loss        {:.3}", self.modulation_loss)?;
        write!(f, "  link margin            {:.3}", self.link_margin)
    }
}

/// Polarization mismatch loss between a radio wave and a receiving antenna, per ITU-R P.341-5.
///
/// `vrw` and `vra` are the voltage axial ratios of the wave and of the antenna, and `tilt` the angle between the
/// major axes of their polarization ellipses.
pub fn polarization_loss(vrw: f64, vra: f64, tilt: Radian) -> Decibel {
    let coupling = 0.5
        + (4.0 * vrw * vra + (vrw.powi(2) - 1.0) * (vra.powi(2) - 1.0) * (tilt * 2.0).cos())
            / (2.0 * (vrw.powi(2) + 1.0) * (vra.powi(2) + 1.0));
    -Decibel::from_linear(coupling)
}
