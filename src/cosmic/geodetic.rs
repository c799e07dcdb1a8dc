/*
    Nyx, blazing fast astrodynamics
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

use super::{AstroError, AstroMathSnafu, GeodeticNonConvergenceSnafu};
use crate::linalg::Vector3;
use crate::utils::{atan2d, cosd, sind, unit_vector};
use serde_derive::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};
use std::fmt;
use typed_builder::TypedBuilder;

/// WGS84 semi major axis, in meters
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;
/// WGS84 first eccentricity
pub const WGS84_ECCENTRICITY: f64 = 0.081_819_190_842_966;

const E2: f64 = WGS84_ECCENTRICITY * WGS84_ECCENTRICITY;

/// Geodetic latitude and longitude in degrees, height above the WGS84 ellipsoid in meters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub lat_deg: f64,
    pub lon_deg: f64,
    pub height_m: f64,
}

impl Geodetic {
    pub fn new(lat_deg: f64, lon_deg: f64, height_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            height_m,
        }
    }

    /// Earth fixed position of these geodetic coordinates, in closed form.
    pub fn to_efi(&self) -> Vector3<f64> {
        let n = prime_vertical_radius(self.lat_deg);
        let h = self.height_m;
        Vector3::new(
            (n + h) * cosd(self.lat_deg) * cosd(self.lon_deg),
            (n + h) * cosd(self.lat_deg) * sind(self.lon_deg),
            (n * (1.0 - E2) + h) * sind(self.lat_deg),
        )
    }
}

impl Default for Geodetic {
    fn default() -> Self {
        Self::new(61.494_576_3, 23.8283, 121.9157)
    }
}

impl fmt::Display for Geodetic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "lat = {:.9} deg\tlon = {:.9} deg\th = {:.3} m",
            self.lat_deg, self.lon_deg, self.height_m
        )
    }
}

fn prime_vertical_radius(lat_deg: f64) -> f64 {
    WGS84_SEMI_MAJOR_AXIS_M / (1.0 - E2 * sind(lat_deg).powi(2)).sqrt()
}

/// Outcome of the iterative conversion from Earth fixed to geodetic coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeodeticSolution {
    pub position: Geodetic,
    pub converged: bool,
    pub iterations: usize,
}

impl GeodeticSolution {
    /// Returns the position if the iteration converged, an error holding the last estimate otherwise.
    pub fn into_result(self) -> Result<Geodetic, AstroError> {
        ensure!(
            self.converged,
            GeodeticNonConvergenceSnafu {
                last: self.position,
                iterations: self.iterations
            }
        );
        Ok(self.position)
    }
}

/// Fixed point iteration on the geodetic latitude and height.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct GeodeticSolver {
    #[builder(default = 5)]
    pub max_iter: usize,
    /// Relative change in latitude below which the iteration stops
    #[builder(default = 1e-10)]
    pub tolerance: f64,
}

impl Default for GeodeticSolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeodeticSolver {
    /// Converts an Earth fixed position into geodetic coordinates.
    ///
    /// Never iterates more than `max_iter` times: check [`GeodeticSolution::converged`], or call [`GeodeticSolution::into_result`].
    /// Errors only if the position has no direction.
    pub fn efi_to_wgs84(&self, r_efi: &Vector3<f64>) -> Result<GeodeticSolution, AstroError> {
        unit_vector(r_efi, "geodetic coordinates of the geocenter").context(AstroMathSnafu {
            action: "Earth fixed to geodetic",
        })?;

        let lon_deg = atan2d(r_efi.y, r_efi.x);
        let p = r_efi.x.hypot(r_efi.y);
        let z = r_efi.z;

        let mut lat_deg = atan2d(z, p * (1.0 - E2));
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.max_iter {
            iterations += 1;
            let n = prime_vertical_radius(lat_deg);
            let h = height(p, z, lat_deg, n);
            let next_lat_deg = atan2d(z, p * (1.0 - E2 * n / (n + h)));
            let delta = (next_lat_deg - lat_deg).abs();
            trace!("geodetic iteration {iterations}: lat = {next_lat_deg} deg (delta {delta:e})");
            lat_deg = next_lat_deg;
            if delta <= self.tolerance * lat_deg.abs() {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                "geodetic coordinates did not converge within {} iterations",
                self.max_iter
            );
        }

        let height_m = height(p, z, lat_deg, prime_vertical_radius(lat_deg));

        Ok(GeodeticSolution {
            position: Geodetic::new(lat_deg, lon_deg, height_m),
            converged,
            iterations,
        })
    }
}

/// Height above the ellipsoid, using whichever of the horizontal or vertical projection is better conditioned.
fn height(p: f64, z: f64, lat_deg: f64, n: f64) -> f64 {
    if lat_deg.abs() < 45.0 {
        p / cosd(lat_deg) - n
    } else {
        z / sind(lat_deg) - n * (1.0 - E2)
    }
}
