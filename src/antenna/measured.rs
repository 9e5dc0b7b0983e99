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
use crate::errors::{InvalidPatternSnafu, LinkBudgetError};
use crate::integrate::simpson_2d;
use crate::units::{Decibel, Radian};
use nalgebra::DMatrix;
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::f64::consts::PI;

/// Pointing loss towards a null of a linear pattern, where the sample is zero.
pub const MAX_LINEAR_POINTING_LOSS: Decibel = Decibel::new(100.0);

/// How the samples of a measured pattern are expressed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternScale {
    /// Linear radiation intensity
    #[default]
    Linear,
    /// Gain in dB, e.g. an exported far-field gain table
    Decibel,
}

/// An antenna defined by a 2D grid of measured radiation samples.
///
/// Rows of the grid correspond to theta samples and columns to phi samples, both in radians and strictly increasing.
/// The total radiated power is integrated once at construction: the grid is never mutated afterwards.
///
/// Queries outside of the sampled domain are clamped to the nearest edge of the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredPattern {
    grid: DMatrix<f64>,
    theta_rad: Vec<f64>,
    phi_rad: Vec<f64>,
    scale: PatternScale,
    /// Antenna efficiency, applied to the peak gain
    pub efficiency: f64,
    total_radiated_power: f64,
    peak_sample: f64,
}

impl MeasuredPattern {
    /// Builds a pattern assuming theta uniformly spans [-π/2, π/2] over the rows and phi uniformly spans [-π, π]
    /// over the columns.
    pub fn new(
        grid: DMatrix<f64>,
        efficiency: f64,
        scale: PatternScale,
    ) -> Result<Self, LinkBudgetError> {
        let theta = linspace(-PI / 2.0, PI / 2.0, grid.nrows());
        let phi = linspace(-PI, PI, grid.ncols());
        Self::build(grid, efficiency, scale, theta, phi)
    }

    /// Builds a pattern from explicit theta (rows) and phi (columns) sample coordinates.
    pub fn with_axes(
        grid: DMatrix<f64>,
        efficiency: f64,
        scale: PatternScale,
        theta: Vec<Radian>,
        phi: Vec<Radian>,
    ) -> Result<Self, LinkBudgetError> {
        Self::build(
            grid,
            efficiency,
            scale,
            theta.iter().map(Radian::value).collect(),
            phi.iter().map(Radian::value).collect(),
        )
    }

    fn build(
        grid: DMatrix<f64>,
        efficiency: f64,
        scale: PatternScale,
        theta_rad: Vec<f64>,
        phi_rad: Vec<f64>,
    ) -> Result<Self, LinkBudgetError> {
        ensure!(
            grid.nrows() >= 2 && grid.ncols() >= 2,
            InvalidPatternSnafu {
                reason: format!(
                    "need at least 2x2 samples, got {}x{}",
                    grid.nrows(),
                    grid.ncols()
                )
            }
        );
        ensure!(
            grid.iter().all(|sample| sample.is_finite()),
            InvalidPatternSnafu {
                reason: "grid contains non-finite samples".to_string()
            }
        );
        ensure!(
            efficiency.is_finite() && efficiency > 0.0,
            InvalidPatternSnafu {
                reason: format!("efficiency must be positive, got {efficiency}")
            }
        );
        check_axis("theta", &theta_rad, grid.nrows())?;
        check_axis("phi", &phi_rad, grid.ncols())?;

        let peak_sample = grid.max();

        if scale == PatternScale::Linear {
            ensure!(
                grid.iter().all(|sample| *sample >= 0.0),
                InvalidPatternSnafu {
                    reason: "linear radiation intensity cannot be negative".to_string()
                }
            );
            ensure!(
                peak_sample > 0.0,
                InvalidPatternSnafu {
                    reason: "linear pattern has no positive sample".to_string()
                }
            );
        }

        // Radiation intensity times the solid angle Jacobian
        let total_radiated_power = match scale {
            PatternScale::Linear => simpson_2d(&grid, &theta_rad, &phi_rad, |i| theta_rad[i].sin()),
            PatternScale::Decibel => {
                let intensity = grid.map(|gain_db| 10.0_f64.powf(gain_db / 10.0));
                simpson_2d(&intensity, &theta_rad, &phi_rad, |i| theta_rad[i].sin())
            }
        };

        if !total_radiated_power.is_finite() || total_radiated_power <= 0.0 {
            warn!(
                "measured pattern integrates to a total radiated power of {total_radiated_power}: directivity and peak gain are meaningless, check the theta axis"
            );
        }

        debug!(
            "measured pattern of {}x{} samples ({:?}), total radiated power {total_radiated_power:.6}",
            grid.nrows(),
            grid.ncols(),
            scale
        );

        Ok(Self {
            grid,
            theta_rad,
            phi_rad,
            scale,
            efficiency,
            total_radiated_power,
            peak_sample,
        })
    }

    pub fn total_radiated_power(&self) -> f64 {
        self.total_radiated_power
    }

    pub fn mean_radiation_intensity(&self) -> f64 {
        self.total_radiated_power / (4.0 * PI)
    }

    /// Interpolated sample at (theta, phi), in the scale of the grid.
    pub fn gain_p(&self, theta: Radian, phi: Radian) -> f64 {
        let (i, u) = bracket(&self.theta_rad, theta.value());
        let (j, v) = bracket(&self.phi_rad, phi.value());
        let g = &self.grid;

        (1.0 - u) * (1.0 - v) * g[(i, j)]
            + u * (1.0 - v) * g[(i + 1, j)]
            + (1.0 - u) * v * g[(i, j + 1)]
            + u * v * g[(i + 1, j + 1)]
    }

    /// Directivity at (theta, phi), i.e. the interpolated radiation intensity over the mean radiation intensity.
    pub fn directivity(&self, theta: Radian, phi: Radian) -> f64 {
        self.intensity(self.gain_p(theta, phi)) / self.mean_radiation_intensity()
    }

    /// Largest sample of the grid, in the scale of the grid.
    pub fn peak_sample(&self) -> f64 {
        self.peak_sample
    }

    /// Loss with respect to the peak of the pattern when looking at (theta, phi).
    ///
    /// For a linear pattern, the loss is capped at [`MAX_LINEAR_POINTING_LOSS`] so that a null stays finite.
    pub fn pointing_loss(&self, theta: Radian, phi: Radian) -> Decibel {
        let sample = self.gain_p(theta, phi);
        match self.scale {
            PatternScale::Decibel => Decibel::new(self.peak_sample - sample),
            PatternScale::Linear => {
                Decibel::from_linear(self.peak_sample / sample).min(MAX_LINEAR_POINTING_LOSS)
            }
        }
    }

    pub fn scale(&self) -> PatternScale {
        self.scale
    }

    pub fn grid(&self) -> &DMatrix<f64> {
        &self.grid
    }

    /// Theta sample coordinates, in radians
    pub fn theta_axis(&self) -> &[f64] {
        &self.theta_rad
    }

    /// Phi sample coordinates, in radians
    pub fn phi_axis(&self) -> &[f64] {
        &self.phi_rad
    }

    fn intensity(&self, sample: f64) -> f64 {
        match self.scale {
            PatternScale::Linear => sample,
            PatternScale::Decibel => 10.0_f64.powf(sample / 10.0),
        }
    }
}

impl GainSource for MeasuredPattern {
    fn antenna_gain(&self) -> Decibel {
        Decibel::from_linear(
            self.efficiency * self.intensity(self.peak_sample) / self.mean_radiation_intensity(),
        )
    }
}

fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![start; n];
    }
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

fn check_axis(name: &str, axis: &[f64], expected: usize) -> Result<(), LinkBudgetError> {
    ensure!(
        axis.len() == expected,
        InvalidPatternSnafu {
            reason: format!("{name} axis has {} samples but the grid has {expected}", axis.len())
        }
    );
    ensure!(
        axis.iter().all(|x| x.is_finite()) && axis.windows(2).all(|w| w[1] > w[0]),
        InvalidPatternSnafu {
            reason: format!("{name} axis must be finite and strictly increasing")
        }
    );
    Ok(())
}

/// Returns the index of the lower sample bracketing `x` and the fractional position of `x` in that cell.
/// Values outside of the axis are clamped to its first or last sample.
fn bracket(axis: &[f64], x: f64) -> (usize, f64) {
    let last = axis.len() - 1;
    let x = x.clamp(axis[0], axis[last]);
    let idx = axis
        .partition_point(|&sample| sample <= x)
        .saturating_sub(1)
        .min(last - 1);
    let frac = (x - axis[idx]) / (axis[idx + 1] - axis[idx]);
    (idx, frac)
}
