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

use super::{
    AstroError, AstroMathSnafu, StateVector, AU_M, SECONDS_PER_DAY, SPEED_OF_LIGHT_M_S,
};
use crate::errors::DegenerateGeometrySnafu;
use crate::linalg::Vector3;
use crate::time::centuries_since_j2000;
use crate::utils::{cosd, sind};
use snafu::ResultExt;

/// Periodic term of the Ron-Vondrak expansion of the barycentric velocity of the Earth (Meeus, ch. 23).
///
/// The coefficients of each axis are `[sin, sin * T, cos, cos * T]` in 1e-8 AU per day.
#[derive(Copy, Clone, Debug)]
struct VelocityTerm {
    args: [i8; 11],
    x: [i32; 4],
    y: [i32; 4],
    z: [i32; 4],
}

impl VelocityTerm {
    const fn new(args: [i8; 11], x: [i32; 4], y: [i32; 4], z: [i32; 4]) -> Self {
        Self { args, x, y, z }
    }
}

fn periodic(coeffs: &[i32; 4], t: f64, arg_rad: f64) -> f64 {
    let [s0, s1, c0, c1] = coeffs.map(f64::from);
    (s0 + s1 * t) * arg_rad.sin() + (c0 + c1 * t) * arg_rad.cos()
}

/// Barycentric velocity of the center of the Earth in the J2000 equatorial frame, in m/s.
pub fn earth_velocity_j2000(jt: f64) -> Vector3<f64> {
    let t = centuries_since_j2000(jt);
    // Mean longitudes of Venus to Neptune, then the Moon's mean longitude, elongation, anomaly and argument of latitude, in radians
    let fundamental = [
        3.176_146_7 + 1_021.328_554_6 * t,
        1.753_470_3 + 628.307_584_9 * t,
        6.203_480_9 + 334.061_243_1 * t,
        0.599_546_5 + 52.969_096_5 * t,
        0.874_016_8 + 21.329_909_5 * t,
        5.481_293_9 + 7.478_159_9 * t,
        5.311_886_3 + 3.813_303_6 * t,
        3.810_344_4 + 8_399.684_733_7 * t,
        5.198_466_7 + 7_771.377_148_6 * t,
        2.355_555_9 + 8_328.691_428_9 * t,
        1.627_905_2 + 8_433.466_160_1 * t,
    ];

    let velocity = EARTH_VELOCITY_SERIES
        .iter()
        .fold(Vector3::zeros(), |acc, term| {
            let arg: f64 = term
                .args
                .iter()
                .zip(fundamental.iter())
                .map(|(mult, angle)| f64::from(*mult) * angle)
                .sum();
            acc + Vector3::new(
                periodic(&term.x, t, arg),
                periodic(&term.y, t, arg),
                periodic(&term.z, t, arg),
            )
        });

    // Series unit is 1e-8 AU per day of 86400 s. Reference tables converting with the sidereal day
    // (86164.0905 s) differ by about 0.3% of the velocity, or 0.06 arcsec of aberration.
    velocity * (1e-8 * AU_M / SECONDS_PER_DAY)
}

/// Applies the annual aberration, and the aberration of the additional observer velocity if provided, to a right ascension and declination in degrees.
///
/// The observer velocity is in m/s in the J2000 equatorial frame, typically the diurnal velocity of a ground station.
/// Both velocities are in m/s with a day of 86400 s, see [`earth_velocity_j2000`].
pub fn aberration_stellar_radec(
    jt: f64,
    ra_deg: f64,
    dec_deg: f64,
    observer_velocity_m_s: Option<Vector3<f64>>,
) -> Result<(f64, f64), AstroError> {
    if cosd(dec_deg).abs() <= f64::EPSILON {
        return DegenerateGeometrySnafu {
            action: "right ascension at the celestial poles",
        }
        .fail()
        .context(AstroMathSnafu {
            action: "stellar aberration",
        });
    }

    let v = earth_velocity_j2000(jt) + observer_velocity_m_s.unwrap_or_else(Vector3::zeros);
    let (sin_ra, cos_ra) = (sind(ra_deg), cosd(ra_deg));

    let delta_ra_rad = (v.y * cos_ra - v.x * sin_ra) / (SPEED_OF_LIGHT_M_S * cosd(dec_deg));
    let delta_dec_rad =
        -((v.x * cos_ra + v.y * sin_ra) * sind(dec_deg) - v.z * cosd(dec_deg)) / SPEED_OF_LIGHT_M_S;

    Ok((
        ra_deg + delta_ra_rad.to_degrees(),
        dec_deg + delta_dec_rad.to_degrees(),
    ))
}

/// Applies the stellar aberration to the position of a J2000 equatorial state, keeping its distance and velocity.
pub fn aberration_stellar_cart(
    state: &StateVector,
    observer_velocity_m_s: Option<Vector3<f64>>,
) -> Result<StateVector, AstroError> {
    let (ra_deg, dec_deg) = state.ra_dec_deg()?;
    let (ra_deg, dec_deg) =
        aberration_stellar_radec(state.jt, ra_deg, dec_deg, observer_velocity_m_s)?;
    let shifted = StateVector::from_spherical(ra_deg, dec_deg, state.rmag_m(), state.jt);
    trace!(
        "stellar aberration moved the position by {:.3} arcsec",
        state.radius_m.angle(&shifted.radius_m).to_degrees() * 3600.0
    );
    Ok(state.with_radius(shifted.radius_m))
}

const EARTH_VELOCITY_SERIES: [VelocityTerm; 36] = [
    VelocityTerm::new([0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-1719914, -2, -25, 0], [25, -13, 1578089, 156], [10, 32, 684185, -358]),
    VelocityTerm::new([0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0], [6434, 141, 28007, -107], [25697, -95, -5904, -130], [11141, -48, -2559, -55]),
    VelocityTerm::new([0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0], [715, 0, 0, 0], [6, 0, -657, 0], [-15, 0, -282, 0]),
    VelocityTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0], [715, 0, 0, 0], [0, 0, -656, 0], [0, 0, -285, 0]),
    VelocityTerm::new([0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0], [486, -5, -236, -4], [-216, -4, -446, 5], [-94, 0, -193, 0]),
    VelocityTerm::new([0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0], [159, 0, 0, 0], [2, 0, -147, 0], [-6, 0, -61, 0]),
    VelocityTerm::new([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1], [0, 0, 0, 0], [0, 0, 26, 0], [0, 0, -59, 0]),
    VelocityTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0], [39, 0, 0, 0], [0, 0, -36, 0], [0, 0, -16, 0]),
    VelocityTerm::new([0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0], [33, 0, -10, 0], [-9, 0, -30, 0], [-5, 0, -13, 0]),
    VelocityTerm::new([0, 2, 0, -1, 0, 0, 0, 0, 0, 0, 0], [31, 0, 1, 0], [1, 0, -28, 0], [0, 0, -12, 0]),
    VelocityTerm::new([0, 3, -8, 3, 0, 0, 0, 0, 0, 0, 0], [8, 0, -28, 0], [25, 0, 8, 0], [11, 0, 3, 0]),
    VelocityTerm::new([0, 5, -8, 3, 0, 0, 0, 0, 0, 0, 0], [8, 0, -28, 0], [-25, 0, -8, 0], [-11, 0, -3, 0]),
    VelocityTerm::new([2, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0], [21, 0, 0, 0], [0, 0, -19, 0], [0, 0, -8, 0]),
    VelocityTerm::new([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-19, 0, 0, 0], [0, 0, 17, 0], [0, 0, 8, 0]),
    VelocityTerm::new([0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0], [17, 0, 0, 0], [0, 0, -16, 0], [0, 0, -7, 0]),
    VelocityTerm::new([0, 1, 0, -2, 0, 0, 0, 0, 0, 0, 0], [16, 0, 0, 0], [0, 0, 15, 0], [1, 0, 7, 0]),
    VelocityTerm::new([0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0], [16, 0, 0, 0], [1, 0, -15, 0], [-3, 0, -6, 0]),
    VelocityTerm::new([0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0], [11, 0, -1, 0], [-1, 0, -10, 0], [-1, 0, -5, 0]),
    VelocityTerm::new([2, -2, 0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, -11, 0], [-10, 0, 0, 0], [-4, 0, 0, 0]),
    VelocityTerm::new([0, 1, 0, -1, 0, 0, 0, 0, 0, 0, 0], [-11, 0, -2, 0], [-2, 0, 9, 0], [-1, 0, 4, 0]),
    VelocityTerm::new([0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-7, 0, -8, 0], [-8, 0, 6, 0], [-3, 0, 3, 0]),
    VelocityTerm::new([0, 3, 0, -2, 0, 0, 0, 0, 0, 0, 0], [-10, 0, 0, 0], [0, 0, 9, 0], [0, 0, 4, 0]),
    VelocityTerm::new([1, -2, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-9, 0, 0, 0], [0, 0, -9, 0], [0, 0, -4, 0]),
    VelocityTerm::new([2, -3, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-9, 0, 0, 0], [0, 0, -8, 0], [0, 0, -4, 0]),
    VelocityTerm::new([0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0], [0, 0, -9, 0], [-8, 0, 0, 0], [-3, 0, 0, 0]),
    VelocityTerm::new([2, -4, 0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, -9, 0], [8, 0, 0, 0], [3, 0, 0, 0]),
    VelocityTerm::new([0, 3, -2, 0, 0, 0, 0, 0, 0, 0, 0], [8, 0, 0, 0], [0, 0, -8, 0], [0, 0, -3, 0]),
    VelocityTerm::new([0, 0, 0, 0, 0, 0, 0, 1, 2, -1, 0], [8, 0, 0, 0], [0, 0, -7, 0], [0, 0, -3, 0]),
    VelocityTerm::new([8, -12, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-4, 0, -7, 0], [-6, 0, 4, 0], [-3, 0, 2, 0]),
    VelocityTerm::new([8, -14, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-4, 0, -7, 0], [6, 0, -4, 0], [3, 0, -2, 0]),
    VelocityTerm::new([0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0], [-6, 0, -5, 0], [-4, 0, 5, 0], [-2, 0, 2, 0]),
    VelocityTerm::new([3, -4, 0, 0, 0, 0, 0, 0, 0, 0, 0], [-1, 0, -1, 0], [-2, 0, -7, 0], [1, 0, -4, 0]),
    VelocityTerm::new([0, 2, 0, -2, 0, 0, 0, 0, 0, 0, 0], [4, 0, -6, 0], [-5, 0, -4, 0], [-2, 0, -2, 0]),
    VelocityTerm::new([3, -3, 0, 0, 0, 0, 0, 0, 0, 0, 0], [0, 0, -7, 0], [-6, 0, 0, 0], [-3, 0, 0, 0]),
    VelocityTerm::new([0, 2, -2, 0, 0, 0, 0, 0, 0, 0, 0], [5, 0, -5, 0], [-4, 0, -5, 0], [-2, 0, -2, 0]),
    VelocityTerm::new([0, 0, 0, 0, 0, 0, 0, 1, -2, 0, 0], [5, 0, 0, 0], [0, 0, -5, 0], [0, 0, -2, 0]),
];
