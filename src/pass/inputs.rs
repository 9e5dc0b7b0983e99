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

//! Preparation of the raw time series before a pass: the orbit track usually covers a single orbit while the
//! attitude series spans several, and the attitude error is only meaningful out of eclipse.

use super::{AttitudeSample, OrbitSample};
use crate::units::Kilometer;

/// Replaces NaN and infinite values by zero.
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Repeats the orbit track as many whole times as it fits in `target_len` samples, and at least once.
pub fn tile_track(track: &[OrbitSample], target_len: usize) -> Vec<OrbitSample> {
    if track.is_empty() {
        return Vec::new();
    }
    let repeats = (target_len / track.len()).max(1);
    debug!("tiling a track of {} samples {repeats} times", track.len());
    track.iter().copied().cycle().take(repeats * track.len()).collect()
}

/// Adds a constant bias to the altitude of every sample of the track.
pub fn offset_altitude(track: &mut [OrbitSample], bias: Kilometer) {
    for sample in track.iter_mut() {
        sample.altitude += bias;
    }
}

/// Keeps the attitude samples taken out of eclipse.
///
/// After each eclipse exit, the next `settle_samples` samples are dropped too while the attitude control settles.
/// Finally, the first `skip` remaining samples are discarded. If the flags and the attitude series differ in length,
/// only the common part is considered.
pub fn exclude_eclipses(
    attitude: &[AttitudeSample],
    in_eclipse: &[bool],
    settle_samples: usize,
    skip: usize,
) -> Vec<AttitudeSample> {
    let len = attitude.len().min(in_eclipse.len());
    if attitude.len() != in_eclipse.len() {
        warn!(
            "{} attitude samples but {} eclipse flags: only the first {len} are used",
            attitude.len(),
            in_eclipse.len()
        );
    }

    let mut excluded = in_eclipse[..len].to_vec();
    for j in 1..len {
        if in_eclipse[j - 1] && !in_eclipse[j] {
            let settled = (j + settle_samples).min(len);
            excluded[j..settled].iter_mut().for_each(|flag| *flag = true);
        }
    }

    let kept: Vec<AttitudeSample> = attitude[..len]
        .iter()
        .zip(excluded.iter())
        .filter(|(_, excluded)| !**excluded)
        .map(|(sample, _)| *sample)
        .skip(skip)
        .collect();

    debug!("{} of {len} attitude samples kept out of eclipse", kept.len());
    kept
}
