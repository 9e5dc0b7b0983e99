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

use crate::io::ConfigRepr;
use crate::units::{Degree, Kilometer, Radian};
use nalgebra::Vector3;
use serde_derive::{Deserialize, Serialize};

/// Mean Earth radius of the spherical Earth model used for slant ranges and off-boresight angles, in km.
pub const EARTH_RADIUS_KM: f64 = 6378.136;
/// Semi-major axis of the WGS-84 ellipsoid, in km.
pub const WGS84_SEMI_MAJOR_KM: f64 = 6378.137;
/// Semi-minor axis of the WGS-84 ellipsoid, in km.
pub const WGS84_SEMI_MINOR_KM: f64 = 6_356.752_314_245_179_3;
/// Flattening of the WGS-84 ellipsoid.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// A location given by its geodetic coordinates on the WGS-84 ellipsoid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPosition {
    pub latitude: Degree,
    pub longitude: Degree,
    /// Height above the ellipsoid
    pub altitude: Kilometer,
}

impl GeodeticPosition {
    pub fn new(latitude: Degree, longitude: Degree, altitude: Kilometer) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Earth centered, Earth fixed Cartesian position, in km.
    pub fn to_ecef(&self) -> Vector3<f64> {
        let e2 = 2.0 * WGS84_FLATTENING - WGS84_FLATTENING.powi(2);
        let (sin_lat, cos_lat) = Radian::from(self.latitude).value().sin_cos();
        let (sin_long, cos_long) = Radian::from(self.longitude).value().sin_cos();
        let height = self.altitude.value();

        // Radii of curvature
        let sqrt_val = (1.0 - e2 * sin_lat.powi(2)).sqrt();
        let c_body = WGS84_SEMI_MAJOR_KM / sqrt_val;
        let s_body = (WGS84_SEMI_MAJOR_KM * (1.0 - WGS84_FLATTENING).powi(2)) / sqrt_val;

        Vector3::new(
            (c_body + height) * cos_lat * cos_long,
            (c_body + height) * cos_lat * sin_long,
            (s_body + height) * sin_lat,
        )
    }

    /// Outward normal of the ellipsoid at the ECEF projection of this position, not normalized.
    fn ellipsoid_normal(ecef: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            ecef.x / WGS84_SEMI_MAJOR_KM.powi(2),
            ecef.y / WGS84_SEMI_MAJOR_KM.powi(2),
            ecef.z / WGS84_SEMI_MINOR_KM.powi(2),
        )
    }
}

impl ConfigRepr for GeodeticPosition {}

/// Distance between a spacecraft and a ground station seen at the provided elevation, on a spherical Earth.
pub fn slant_range(sc_altitude: Kilometer, gs_altitude: Kilometer, elevation: Degree) -> Kilometer {
    let r_gs = EARTH_RADIUS_KM + gs_altitude.value();
    let sin_elev = elevation.sin();
    let (h_sc, h_gs) = (sc_altitude.value(), gs_altitude.value());

    Kilometer::new(
        -r_gs * sin_elev
            + (r_gs.powi(2) * sin_elev.powi(2) + h_sc.powi(2) - h_gs.powi(2)
                + 2.0 * EARTH_RADIUS_KM * (h_sc - h_gs))
                .sqrt(),
    )
}

/// Elevation of the satellite seen from the ground station, with respect to the plane tangent to the ellipsoid.
///
/// When the satellite is above the tangent plane, this is 90 degrees minus the angle between the local normal and
/// the line of sight. Otherwise, it is that angle, negated. The result is discontinuous at the horizon: it jumps
/// from about 0 to about -90 degrees, and reaches -180 degrees on the far side of the Earth. Below the horizon, only
/// the sign is meaningful.
pub fn elevation_angle(sat: &GeodeticPosition, gs: &GeodeticPosition) -> Degree {
    let gs_ecef = gs.to_ecef();
    let line_of_sight = sat.to_ecef() - gs_ecef;
    let normal = GeodeticPosition::ellipsoid_normal(&gs_ecef);

    let angle = Degree::from(Radian::new(normal.angle(&line_of_sight)));

    if normal.dot(&line_of_sight) > 0.0 {
        Degree::new(90.0) - angle
    } else {
        -angle
    }
}

/// Angle between the spacecraft antenna boresight and the ground station, when the boresight points to nadir and
/// the attitude control adds an error of `theta_adcs`.
///
/// The result is folded into [-90, 90] degrees: above 90 it becomes 180 - θ, below -90 it becomes 180 + θ.
pub fn off_boresight_angle(altitude: Kilometer, elevation: Degree, theta_adcs: Degree) -> Degree {
    let ratio = EARTH_RADIUS_KM / (EARTH_RADIUS_KM + altitude.value());
    let nadir = Degree::from(Radian::asin(ratio * elevation.cos()));
    let theta = nadir + theta_adcs;

    if theta > Degree::new(90.0) {
        Degree::new(180.0) - theta
    } else if theta < Degree::new(-90.0) {
        Degree::new(180.0) + theta
    } else {
        theta
    }
}
