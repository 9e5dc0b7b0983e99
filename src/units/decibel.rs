use super::{Base, Hertz, Kelvin, Watt};
use serde_derive::{Deserialize, Serialize};

/// A relative level (gain, loss, ratio) in decibels.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decibel(Base);

super::unit!(Decibel, "dB");
super::additive!(Decibel);

impl Decibel {
    /// Converts a linear power ratio into decibels.
    pub fn from_linear(ratio: f64) -> Self {
        Self(10.0 * ratio.log10())
    }

    /// Converts this level back to a linear power ratio.
    pub fn to_linear(self) -> f64 {
        10.0_f64.powf(self.0 / 10.0)
    }
}

/// An absolute power level referenced to one watt.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecibelWatt(Base);

super::unit!(DecibelWatt, "dBW");
super::offset!(DecibelWatt, Decibel);

impl From<Watt> for DecibelWatt {
    fn from(power: Watt) -> Self {
        Self(10.0 * power.value().log10())
    }
}

impl From<DecibelWatt> for Watt {
    fn from(level: DecibelWatt) -> Self {
        Watt::new(10.0_f64.powf(level.0 / 10.0))
    }
}

impl std::ops::Sub for DecibelWatt {
    type Output = Decibel;

    fn sub(self, rhs: Self) -> Self::Output {
        Decibel(self.0 - rhs.0)
    }
}

impl DecibelWatt {
    /// Turns a received isotropic power level into a signal-to-noise density ratio given the receiver figure of merit
    /// and the negated Boltzmann constant, in dB(W/K/Hz) (i.e. about 228.6 dB).
    pub fn noise_density_ratio(
        self,
        figure_of_merit: DecibelPerKelvin,
        inverse_boltzmann: Decibel,
    ) -> DecibelHertz {
        DecibelHertz(self.0 + inverse_boltzmann.value() + figure_of_merit.value())
    }
}

/// A temperature level referenced to one kelvin.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecibelKelvin(Base);

super::unit!(DecibelKelvin, "dBK");
super::offset!(DecibelKelvin, Decibel);

impl From<Kelvin> for DecibelKelvin {
    fn from(temperature: Kelvin) -> Self {
        Self(10.0 * temperature.value().log10())
    }
}

/// Receiver figure of merit (G/T).
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecibelPerKelvin(Base);

super::unit!(DecibelPerKelvin, "dB/K");
super::offset!(DecibelPerKelvin, Decibel);

impl std::ops::Sub<DecibelKelvin> for Decibel {
    type Output = DecibelPerKelvin;

    fn sub(self, rhs: DecibelKelvin) -> Self::Output {
        DecibelPerKelvin(self.0 - rhs.value())
    }
}

/// A density ratio or rate, referenced to one hertz (e.g. S/N0, or a data rate).
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecibelHertz(Base);

super::unit!(DecibelHertz, "dB-Hz");
super::offset!(DecibelHertz, Decibel);

impl From<Hertz> for DecibelHertz {
    fn from(rate: Hertz) -> Self {
        Self(10.0 * rate.value().log10())
    }
}

impl std::ops::Sub for DecibelHertz {
    type Output = Decibel;

    fn sub(self, rhs: Self) -> Self::Output {
        Decibel(self.0 - rhs.0)
    }
}
