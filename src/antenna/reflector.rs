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
use crate::units::{Decibel, Meter};
use std::f64::consts::PI;

/// A circular parabolic reflector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AntennaParabolicReflector {
    pub diameter: Meter,
    pub wavelength: Meter,
    pub aperture_efficiency: f64,
    gain: Decibel,
}

impl AntennaParabolicReflector {
    pub fn new(diameter: Meter, wavelength: Meter, aperture_efficiency: f64) -> Self {
        let gain = Decibel::from_linear(
            aperture_efficiency * (PI * diameter.value() / wavelength.value()).powi(2),
        );
        Self {
            diameter,
            wavelength,
            aperture_efficiency,
            gain,
        }
    }
}

impl GainSource for AntennaParabolicReflector {
    fn antenna_gain(&self) -> Decibel {
        self.gain
    }
}
