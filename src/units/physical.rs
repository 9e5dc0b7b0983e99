use super::Base;
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Speed of light in vacuum, in m/s.
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watt(Base);

super::unit!(Watt, "W");
super::additive!(Watt);

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kelvin(Base);

super::unit!(Kelvin, "K");
super::additive!(Kelvin);

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meter(Base);

super::unit!(Meter, "m");
super::additive!(Meter);

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometer(Base);

super::unit!(Kilometer, "km");
super::additive!(Kilometer);

super::linear_conversion!(1e-3_f64, Meter, Kilometer);
super::linear_conversion!(1e3_f64, Kilometer, Meter);

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degree(Base);

super::unit!(Degree, "deg");
super::additive!(Degree);

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radian(Base);

super::unit!(Radian, "rad");
super::additive!(Radian);

super::linear_conversion!(PI / 180.0, Degree, Radian);
super::linear_conversion!(180.0 / PI, Radian, Degree);

impl Degree {
    pub fn sin(self) -> f64 {
        Radian::from(self).sin()
    }

    pub fn cos(self) -> f64 {
        Radian::from(self).cos()
    }
}

impl Radian {
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    pub fn atan(ratio: f64) -> Self {
        Self(ratio.atan())
    }

    pub fn asin(ratio: f64) -> Self {
        Self(ratio.asin())
    }

    pub fn acos(ratio: f64) -> Self {
        Self(ratio.acos())
    }
}

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hertz(Base);

super::unit!(Hertz, "Hz");
super::additive!(Hertz);

#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megahertz(Base);

super::unit!(Megahertz, "MHz");
super::additive!(Megahertz);

super::linear_conversion!(1e6_f64, Megahertz, Hertz);
super::linear_conversion!(1e-6_f64, Hertz, Megahertz);

impl Hertz {
    /// Free-space wavelength of a carrier at this frequency.
    pub fn wavelength(self) -> Meter {
        Meter(SPEED_OF_LIGHT_M_S / self.0)
    }
}
