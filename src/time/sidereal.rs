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

use super::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JT};
use crate::cosmic::NutationTerms;
use crate::utils::{atand, between_0_360, cosd, sind};

/// Ratio of the sidereal to the solar rotation rate of the Earth.
const SIDEREAL_RATIO: f64 = 1.002_737_909_350_795;
/// Modified Julian day of 2000 January 1 0h, origin of the GAST rate polynomial.
const MJD_ORIGIN_JT: f64 = 2_451_544.5;

/// Greenwich Mean Sidereal Time, in degrees within [0, 360), of a UT1 Julian time.
///
/// The sidereal angle at the preceding 0h UT1 is a cubic in Julian centuries, to which the UT1 elapsed since 0h is added at the sidereal rate.
pub fn gmst_deg(jt_ut1: f64) -> f64 {
    let jd0 = (jt_ut1 - 0.5).floor() + 0.5;
    let ut1_deg = (jt_ut1 - jd0) * 24.0 * 15.0;
    let t0 = (jd0 - J2000_JT) / DAYS_PER_JULIAN_CENTURY;

    let theta_g0 = 100.460_618_375 + 36_000.770_053_608_34 * t0
        + 3.879_333_333_333_333e-4 * t0.powi(2)
        - 2.583_333_333_333_333e-8 * t0.powi(3);

    between_0_360(SIDEREAL_RATIO * ut1_deg + theta_g0)
}

/// Greenwich Apparent Sidereal Time, in degrees within [0, 360): GMST corrected by the equation of the equinoxes.
///
/// When `nutation` is `None`, the nutation terms are evaluated at the provided Julian time.
pub fn gast_deg(jt_ut1: f64, nutation: Option<NutationTerms>) -> f64 {
    let nut = nutation.unwrap_or_else(|| NutationTerms::at(jt_ut1));
    let equinoxes = atand(-cosd(nut.eps_deg) * sind(nut.dpsi_deg) / cosd(nut.dpsi_deg));
    between_0_360(gmst_deg(jt_ut1) - equinoxes)
}

/// Time derivative of the sidereal time, in degrees per second.
pub fn gast_rate_deg_s(jt_ut1: f64) -> f64 {
    let mjd = jt_ut1 - MJD_ORIGIN_JT;
    (360.985_647_366 + 2.0 * 2.907_88e-13 * mjd - 3.0 * 5.3016e-22 * mjd.powi(2)) / 86_400.0
}
