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

use super::GainSource;
use crate::units::{Decibel, Degree, Meter, Radian};
use std::f64::consts::PI;

/// A helical antenna radiating in axial mode.
///
/// The gain and beamwidth approximations only hold for 3/4 <= C/λ <= 4/3 and a pitch angle between 11.5 and 14.5
/// degrees. Outside of that window, the antenna is still built but a warning is logged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AntennaHelical {
    pub circumference: Meter,
    pub turns_n: u32,
    pub turns_spacing: Meter,
    pub wavelength: Meter,
    gain: Decibel,
}

impl AntennaHelical {
    pub fn new(circumference: Meter, turns_n: u32, turns_spacing: Meter, wavelength: Meter) -> Self {
        let mut me = Self {
            circumference,
            turns_n,
            turns_spacing,
            wavelength,
            gain: Decibel::default(),
        };

        if !me.is_axial_mode() {
            warn!(
                "helical antenna with C/λ = {:.3} and pitch angle {:.2} is outside of the axial mode, gain may not be accurate",
                me.circumference_ratio(),
                Degree::from(me.pitch_angle())
            );
        }

        me.gain = Decibel::from_linear(
            15.0 * me.circumference_ratio().powi(2) * me.axial_length().value() / wavelength.value(),
        );

        me
    }

    pub fn diameter(&self) -> Meter {
        self.circumference / PI
    }

    pub fn axial_length(&self) -> Meter {
        self.turns_spacing * f64::from(self.turns_n)
    }

    pub fn pitch_angle(&self) -> Radian {
        Radian::atan(self.turns_spacing.value() / self.circumference.value())
    }

    /// Half power beamwidth
    pub fn half_power_beamwidth(&self) -> Degree {
        let length_ratio = self.axial_length().value() / self.wavelength.value();
        Degree::new(52.0 / (length_ratio.sqrt() * self.circumference_ratio()))
    }

    /// Whether the geometry lies within the validity domain of the axial-mode approximations.
    pub fn is_axial_mode(&self) -> bool {
        let ratio = self.circumference_ratio();
        let pitch = Degree::from(self.pitch_angle());
        (0.75..=4.0 / 3.0).contains(&ratio)
            && (Degree::new(11.5)..=Degree::new(14.5)).contains(&pitch)
    }

    fn circumference_ratio(&self) -> f64 {
        self.circumference.value() / self.wavelength.value()
    }
}

impl GainSource for AntennaHelical {
    fn antenna_gain(&self) -> Decibel {
        self.gain
    }
}
