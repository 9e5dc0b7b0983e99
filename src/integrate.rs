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

/// Integrates the samples `ys` taken at the abscissae `xs` with the composite Simpson rule.
///
/// The abscissae need not be equidistant. With an even number of samples, the result is the average of
/// Simpson's rule over the first N-2 intervals plus a trapezoid on the last one, and of a trapezoid on the
/// first interval plus Simpson's rule over the remaining ones. Fewer than three samples fall back to the
/// trapezoid rule.
///
/// ```
/// use linkbudget::integrate::simpson;
/// use std::f64::consts::PI;
///
/// let xs: Vec<f64> = (0..=100).map(|i| PI * i as f64 / 100.0).collect();
/// let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
/// assert!((simpson(&ys, &xs) - 2.0).abs() < 1e-7);
/// ```
pub fn simpson(ys: &[f64], xs: &[f64]) -> f64 {
    debug_assert_eq!(ys.len(), xs.len(), "samples and abscissae differ in length");
    let n = ys.len().min(xs.len());
    match n {
        0 | 1 => 0.0,
        2 => trapezoid(ys[0], ys[1], xs[1] - xs[0]),
        _ if n % 2 == 1 => simpson_pairs(ys, xs, 0, n - 2),
        _ => {
            let first = simpson_pairs(ys, xs, 0, n - 3) + trapezoid(ys[n - 2], ys[n - 1], xs[n - 1] - xs[n - 2]);
            let last = trapezoid(ys[0], ys[1], xs[1] - xs[0]) + simpson_pairs(ys, xs, 1, n - 2);
            0.5 * (first + last)
        }
    }
}

/// Double integral of `grid[(i, j)] * weight(i)` over rows sampled at `row_xs` and columns sampled at `col_xs`.
/// Each row is integrated over the columns first, then the row integrals over the rows.
pub fn simpson_2d<F>(grid: &nalgebra::DMatrix<f64>, row_xs: &[f64], col_xs: &[f64], weight: F) -> f64
where
    F: Fn(usize) -> f64,
{
    let row_integrals: Vec<f64> = (0..grid.nrows())
        .map(|i| {
            let w = weight(i);
            let row: Vec<f64> = grid.row(i).iter().map(|v| v * w).collect();
            simpson(&row, col_xs)
        })
        .collect();

    simpson(&row_integrals, row_xs)
}

fn trapezoid(y0: f64, y1: f64, dx: f64) -> f64 {
    0.5 * dx * (y0 + y1)
}

/// Sums the Simpson panels starting at `start`, `start + 2`, ... strictly before `stop`.
fn simpson_pairs(ys: &[f64], xs: &[f64], start: usize, stop: usize) -> f64 {
    (start..stop)
        .step_by(2)
        .map(|i| {
            let h0 = xs[i + 1] - xs[i];
            let h1 = xs[i + 2] - xs[i + 1];
            let hsum = h0 + h1;
            let h0_div_h1 = h0 / h1;
            hsum / 6.0
                * (ys[i] * (2.0 - 1.0 / h0_div_h1)
                    + ys[i + 1] * hsum * hsum / (h0 * h1)
                    + ys[i + 2] * (2.0 - h0_div_h1))
        })
        .sum()
}
