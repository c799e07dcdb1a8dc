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

use super::{AstroError, AstroMathSnafu};
use crate::linalg::Vector3;
use crate::utils::{asind, atan2d, between_0_360, cosd, sind};
use approx::{AbsDiffEq, RelativeEq};
use serde_derive::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Position (m), velocity (m/s) and Julian time of validity of an object, in a frame which is implied by the function that produced it.
///
/// The Julian time is in TDB for the inertial frames and in UT1 for the Earth fixed and topocentric frames.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub radius_m: Vector3<f64>,
    pub velocity_m_s: Vector3<f64>,
    pub jt: f64,
}

impl StateVector {
    pub fn new(radius_m: Vector3<f64>, velocity_m_s: Vector3<f64>, jt: f64) -> Self {
        Self {
            radius_m,
            velocity_m_s,
            jt,
        }
    }

    /// Creates a new state from its Cartesian components
    pub fn cartesian(x: f64, y: f64, z: f64, vx: f64, vy: f64, vz: f64, jt: f64) -> Self {
        Self::new(Vector3::new(x, y, z), Vector3::new(vx, vy, vz), jt)
    }

    /// A state at rest at the provided position
    pub fn at_rest(radius_m: Vector3<f64>, jt: f64) -> Self {
        Self::new(radius_m, Vector3::zeros(), jt)
    }

    /// Creates a state at rest from spherical coordinates, e.g. right ascension and declination in an equatorial frame.
    pub fn from_spherical(lon_deg: f64, lat_deg: f64, distance_m: f64, jt: f64) -> Self {
        Self::at_rest(
            distance_m
                * Vector3::new(
                    cosd(lat_deg) * cosd(lon_deg),
                    cosd(lat_deg) * sind(lon_deg),
                    sind(lat_deg),
                ),
            jt,
        )
    }

    /// Returns a copy of this state with the provided position.
    pub fn with_radius(self, radius_m: Vector3<f64>) -> Self {
        Self { radius_m, ..self }
    }

    /// Returns a copy of this state with the provided velocity.
    pub fn with_velocity(self, velocity_m_s: Vector3<f64>) -> Self {
        Self {
            velocity_m_s,
            ..self
        }
    }

    /// Returns a copy of this state tagged with another Julian time, used only when crossing a time scale boundary.
    pub fn with_jt(self, jt: f64) -> Self {
        Self { jt, ..self }
    }

    /// Distance from the origin of the frame, in meters
    pub fn rmag_m(&self) -> f64 {
        self.radius_m.norm()
    }

    pub fn vmag_m_s(&self) -> f64 {
        self.velocity_m_s.norm()
    }

    /// Longitude (or right ascension) and latitude (or declination) of the position, in degrees.
    ///
    /// The longitude is within [0, 360), unless `signed_lon` is set, in which case it is within (-180, 180].
    pub fn lon_lat_deg(&self, signed_lon: bool) -> Result<(f64, f64), AstroError> {
        let rmag = self.rmag_m();
        let lat = asind(self.radius_m.z / rmag).context(AstroMathSnafu {
            action: "latitude of a state",
        })?;
        let lon = atan2d(self.radius_m.y, self.radius_m.x);
        Ok((if signed_lon { lon } else { between_0_360(lon) }, lat))
    }

    /// Right ascension within [0, 360) and declination, in degrees, of an equatorial state.
    pub fn ra_dec_deg(&self) -> Result<(f64, f64), AstroError> {
        self.lon_lat_deg(false)
    }
}

impl Add for StateVector {
    type Output = Self;

    /// Adds the positions and velocities, keeping the Julian time of the left hand side.
    fn add(self, other: Self) -> Self {
        Self::new(
            self.radius_m + other.radius_m,
            self.velocity_m_s + other.velocity_m_s,
            self.jt,
        )
    }
}

impl Sub for StateVector {
    type Output = Self;

    /// Subtracts the positions and velocities, keeping the Julian time of the left hand side.
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.radius_m - other.radius_m,
            self.velocity_m_s - other.velocity_m_s,
            self.jt,
        )
    }
}

impl Neg for StateVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.radius_m, -self.velocity_m_s, self.jt)
    }
}

impl AbsDiffEq for StateVector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    /// Julian times must match exactly, positions and velocities within epsilon.
    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.jt == other.jt
            && self.radius_m.abs_diff_eq(&other.radius_m, epsilon)
            && self.velocity_m_s.abs_diff_eq(&other.velocity_m_s, epsilon)
    }
}

impl RelativeEq for StateVector {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.jt == other.jt
            && self
                .radius_m
                .relative_eq(&other.radius_m, epsilon, max_relative)
            && self
                .velocity_m_s
                .relative_eq(&other.velocity_m_s, epsilon, max_relative)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[JT {:.9}]\tposition = [{:.6}, {:.6}, {:.6}] m\tvelocity = [{:.6}, {:.6}, {:.6}] m/s",
            self.jt,
            self.radius_m.x,
            self.radius_m.y,
            self.radius_m.z,
            self.velocity_m_s.x,
            self.velocity_m_s.y,
            self.velocity_m_s.z
        )
    }
}

impl fmt::LowerExp for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[JT {:.9}]\tposition = [{:e}, {:e}, {:e}] m\tvelocity = [{:e}, {:e}, {:e}] m/s",
            self.jt,
            self.radius_m.x,
            self.radius_m.y,
            self.radius_m.z,
            self.velocity_m_s.x,
            self.velocity_m_s.y,
            self.velocity_m_s.z
        )
    }
}
