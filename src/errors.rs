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

use crate::io::ConfigError;
use snafu::prelude::Snafu;

/// Functions that may fail return this error: the link budget math itself never panics on user input.
#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LinkBudgetError {
    #[snafu(display("invalid measured radiation pattern: {reason}"))]
    InvalidPattern { reason: String },
    #[snafu(display("{action} requires a measured radiation pattern on the spacecraft antenna"))]
    PatternRequired { action: &'static str },
    #[snafu(display("{series} time series is empty"))]
    EmptySeries { series: &'static str },
    #[snafu(display("link budget configuration failed: {source}"))]
    Config { source: ConfigError },
    #[snafu(display("could not export {what}: {details}"))]
    Export { what: &'static str, details: String },
}

impl From<ConfigError> for LinkBudgetError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source }
    }
}
