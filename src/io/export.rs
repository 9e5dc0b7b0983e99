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

use crate::errors::LinkBudgetError;
use crate::pass::LinkSample;
use serde_derive::Serialize;
use std::path::Path;

/// One row of the CSV export, with the units in the column names.
#[derive(Serialize)]
struct LinkSampleRow {
    time_offset_s: f64,
    elevation_deg: f64,
    off_boresight_deg: f64,
    gain: f64,
    pointing_loss_db: f64,
    link_margin_db: f64,
}

impl From<&LinkSample> for LinkSampleRow {
    fn from(sample: &LinkSample) -> Self {
        Self {
            time_offset_s: sample.time_offset.to_seconds(),
            elevation_deg: sample.elevation.value(),
            off_boresight_deg: sample.off_boresight.value(),
            gain: sample.gain,
            pointing_loss_db: sample.pointing_loss.value(),
            link_margin_db: sample.link_margin.value(),
        }
    }
}

/// Writes the samples of a pass to a CSV file, with a header row.
pub fn export_csv<P: AsRef<Path>>(samples: &[LinkSample], path: P) -> Result<(), LinkBudgetError> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path).map_err(|e| LinkBudgetError::Export {
        what: "link samples",
        details: e.to_string(),
    })?;

    for sample in samples {
        wtr.serialize(LinkSampleRow::from(sample))
            .map_err(|e| LinkBudgetError::Export {
                what: "link samples",
                details: e.to_string(),
            })?;
    }

    wtr.flush().map_err(|e| LinkBudgetError::Export {
        what: "link samples",
        details: e.to_string(),
    })?;

    info!("Saved {} link samples to {}", samples.len(), path.display());
    Ok(())
}
