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

use crate::errors::{DegenerateGeometrySnafu, DomainViolationSnafu, MathError};
use crate::linalg::Vector3;
use snafu::ensure;

/// Slack allowed on inverse trigonometric arguments before they are reported as a domain violation.
/// Arguments within this slack of ±1 are clamped.
const DOMAIN_SLACK: f64 = 1e-12;

/// Sine of an angle in degrees
pub fn sind(angle_deg: f64) -> f64 {
    angle_deg.to_radians().sin()
}

/// Cosine of an angle in degrees
pub fn cosd(angle_deg: f64) -> f64 {
    angle_deg.to_radians().cos()
}

/// Tangent of an angle in degrees
pub fn tand(angle_deg: f64) -> f64 {
    angle_deg.to_radians().tan()
}

/// Arc tangent in degrees
pub fn atand(x: f64) -> f64 {
    x.atan().to_degrees()
}

/// Four quadrant arc tangent of `y / x`, in degrees within (-180, 180].
pub fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

fn clamp_unit(value: f64, action: &'static str) -> Result<f64, MathError> {
    ensure!(
        value.abs() <= 1.0 + DOMAIN_SLACK,
        DomainViolationSnafu { value, action }
    );
    Ok(value.clamp(-1.0, 1.0))
}

/// Arc sine in degrees.
///
/// Arguments which exceed ±1 by round-off only are clamped, anything else is a domain violation.
pub fn asind(x: f64) -> Result<f64, MathError> {
    Ok(clamp_unit(x, "asin")?.asin().to_degrees())
}

/// Arc cosine in degrees, same domain policy as [`asind`].
pub fn acosd(x: f64) -> Result<f64, MathError> {
    Ok(clamp_unit(x, "acos")?.acos().to_degrees())
}

/// Returns the provided angle bounded between 0.0 and 360.0 (excluded).
///
/// This function takes an angle (in degrees) and normalizes it to the range [0, 360).
pub fn between_0_360(angle_deg: f64) -> f64 {
    let bounded = angle_deg - 360.0 * (angle_deg / 360.0).floor();
    // Round-off of the floor on tiny negative angles can land exactly on 360.0
    if bounded >= 360.0 {
        0.0
    } else {
        bounded
    }
}

/// Returns the provided angle bounded between -180.0 (included) and +180.0 (excluded).
pub fn between_pm_180(angle_deg: f64) -> f64 {
    between_0_360(angle_deg + 180.0) - 180.0
}

/// Signed shortest rotation from `from_deg` to `to_deg`, within (-180, 180].
pub fn angle_diff(from_deg: f64, to_deg: f64) -> f64 {
    let diff = between_pm_180(to_deg - from_deg);
    if diff == -180.0 {
        180.0
    } else {
        diff
    }
}

/// Sexagesimal representation of an angle: the sign is carried by the `negative` flag so that angles between -1 and 0 degrees are representable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sexagesimal {
    pub negative: bool,
    pub whole: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Sexagesimal {
    fn from_value(value: f64) -> Self {
        let negative = value < 0.0;
        let abs = value.abs();
        let whole = abs.floor();
        let minutes = ((abs - whole) * 60.0).floor();
        let seconds = (abs - whole - minutes / 60.0) * 3600.0;
        Self {
            negative,
            whole: whole as u32,
            minutes: minutes as u32,
            seconds,
        }
    }

    fn to_value(self) -> f64 {
        let abs = f64::from(self.whole) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0;
        if self.negative {
            -abs
        } else {
            abs
        }
    }
}

/// Converts an angle in degrees into degrees, arc minutes and arc seconds.
pub fn deg_to_dms(angle_deg: f64) -> Sexagesimal {
    Sexagesimal::from_value(angle_deg)
}

/// Converts degrees, arc minutes and arc seconds into degrees.
pub fn dms_to_deg(dms: Sexagesimal) -> f64 {
    dms.to_value()
}

/// Converts an angle in degrees into hours, minutes and seconds of time (15 degrees per hour).
pub fn deg_to_hms(angle_deg: f64) -> Sexagesimal {
    Sexagesimal::from_value(angle_deg / 15.0)
}

/// Converts hours, minutes and seconds of time into degrees.
pub fn hms_to_deg(hms: Sexagesimal) -> f64 {
    15.0 * hms.to_value()
}

/// Returns the unit vector of the provided vector, or an error if it has no length.
pub fn unit_vector(v: &Vector3<f64>, action: &'static str) -> Result<Vector3<f64>, MathError> {
    let norm = v.norm();
    ensure!(
        norm > f64::EPSILON && norm.is_finite(),
        DegenerateGeometrySnafu { action }
    );
    Ok(v / norm)
}
