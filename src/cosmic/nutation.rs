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

use crate::time::centuries_since_j2000;
use serde_derive::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Arc seconds to radians
const AS2R: f64 = PI / (180.0 * 3600.0);
/// Units of the series coefficients (0.1 milliarcsecond) to degrees
const SERIES_UNIT_DEG: f64 = 1e-4 / 3600.0;

/// Obliquity, nutation in longitude and nutation in obliquity, all in degrees, valid for a single epoch.
///
/// Evaluate these once per epoch with [`NutationTerms::at`] and pass them to every transformation of that epoch which needs them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NutationTerms {
    /// Mean obliquity of the ecliptic (IAU 1980)
    pub eps_deg: f64,
    /// Nutation in longitude
    pub dpsi_deg: f64,
    /// Nutation in obliquity
    pub deps_deg: f64,
}

impl NutationTerms {
    /// Nutation terms at the provided Julian time (TT or TDB).
    pub fn at(jt: f64) -> Self {
        Self::from_centuries(centuries_since_j2000(jt))
    }

    /// Nutation terms from Julian centuries since J2000.
    pub fn from_centuries(t: f64) -> Self {
        let eps_deg =
            (84_381.448 - 46.8150 * t - 0.00059 * t.powi(2) + 0.001_813 * t.powi(3)) / 3600.0;
        let (dpsi_deg, deps_deg) = nutation_series(t);
        Self {
            eps_deg,
            dpsi_deg,
            deps_deg,
        }
    }

    /// True obliquity of the ecliptic, in degrees
    pub fn true_obliquity_deg(&self) -> f64 {
        self.eps_deg + self.deps_deg
    }
}

impl fmt::Display for NutationTerms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "eps = {:.9} deg\tdpsi = {:.3} arcsec\tdeps = {:.3} arcsec",
            self.eps_deg,
            self.dpsi_deg * 3600.0,
            self.deps_deg * 3600.0
        )
    }
}

/// Mean obliquity of the ecliptic in degrees, as the fifth order polynomial used by the ecliptic to equatorial rotation.
pub fn ecliptic_obliquity_deg(jt: f64) -> f64 {
    let t = centuries_since_j2000(jt);
    23.439_279_444_444_445 - 0.013_010_213_611_111 * t - 5.086_111_111_111_112e-8 * t.powi(2)
        + 0.565e-7 * t.powi(3)
        - 1.6e-10 * t.powi(4)
        - 1.205_555_555_555_555e-11 * t.powi(5)
}

/// One term of the IAU 1980 nutation series: multipliers of the fundamental arguments, then the longitude and obliquity coefficients with their rates.
struct SeriesTerm {
    l: i8,
    lp: i8,
    f: i8,
    d: i8,
    om: i8,
    sp: f64,
    spt: f64,
    ce: f64,
    cet: f64,
}

#[allow(clippy::too_many_arguments)]
const fn term(
    l: i8,
    lp: i8,
    f: i8,
    d: i8,
    om: i8,
    sp: f64,
    spt: f64,
    ce: f64,
    cet: f64,
) -> SeriesTerm {
    SeriesTerm {
        l,
        lp,
        f,
        d,
        om,
        sp,
        spt,
        ce,
        cet,
    }
}

/// Nutation in longitude and obliquity, in degrees.
fn nutation_series(t: f64) -> (f64, f64) {
    // Fundamental arguments, in arc seconds then radians
    let el = (485_866.733 + (1_717_915_922.633 + (31.310 + 0.064 * t) * t) * t) * AS2R;
    let elp = (1_287_099.804 + (129_596_581.224 + (-0.577 - 0.012 * t) * t) * t) * AS2R;
    let f = (335_778.877 + (1_739_527_263.137 + (-13.257 + 0.011 * t) * t) * t) * AS2R;
    let d = (1_072_261.307 + (1_602_961_601.328 + (-6.891 + 0.019 * t) * t) * t) * AS2R;
    let om = (450_160.280 + (-6_962_890.539 + (7.455 + 0.008 * t) * t) * t) * AS2R;

    let (mut dpsi, mut deps) = (0.0, 0.0);
    // Smallest terms first
    for term in NUTATION_SERIES.iter().rev() {
        let arg = f64::from(term.l) * el
            + f64::from(term.lp) * elp
            + f64::from(term.f) * f
            + f64::from(term.d) * d
            + f64::from(term.om) * om;
        dpsi += (term.sp + term.spt * t) * arg.sin();
        deps += (term.ce + term.cet * t) * arg.cos();
    }

    (dpsi * SERIES_UNIT_DEG, deps * SERIES_UNIT_DEG)
}

/// IAU 1980 nutation series, coefficients in units of 0.1 mas and 0.1 mas per Julian century.
const NUTATION_SERIES: [SeriesTerm; 106] = [
    term(0, 0, 0, 0, 1, -171996.0, -174.2, 92025.0, 8.9),
    term(0, 0, 0, 0, 2, 2062.0, 0.2, -895.0, 0.5),
    term(-2, 0, 2, 0, 1, 46.0, 0.0, -24.0, 0.0),
    term(2, 0, -2, 0, 0, 11.0, 0.0, 0.0, 0.0),
    term(-2, 0, 2, 0, 2, -3.0, 0.0, 1.0, 0.0),
    term(1, -1, 0, -1, 0, -3.0, 0.0, 0.0, 0.0),
    term(0, -2, 2, -2, 1, -2.0, 0.0, 1.0, 0.0),
    term(2, 0, -2, 0, 1, 1.0, 0.0, 0.0, 0.0),
    term(0, 0, 2, -2, 2, -13187.0, -1.6, 5736.0, -3.1),
    term(0, 1, 0, 0, 0, 1426.0, -3.4, 54.0, -0.1),
    term(0, 1, 2, -2, 2, -517.0, 1.2, 224.0, -0.6),
    term(0, -1, 2, -2, 2, 217.0, -0.5, -95.0, 0.3),
    term(0, 0, 2, -2, 1, 129.0, 0.1, -70.0, 0.0),
    term(2, 0, 0, -2, 0, 48.0, 0.0, 1.0, 0.0),
    term(0, 0, 2, -2, 0, -22.0, 0.0, 0.0, 0.0),
    term(0, 2, 0, 0, 0, 17.0, -0.1, 0.0, 0.0),
    term(0, 1, 0, 0, 1, -15.0, 0.0, 9.0, 0.0),
    term(0, 2, 2, -2, 2, -16.0, 0.1, 7.0, 0.0),
    term(0, -1, 0, 0, 1, -12.0, 0.0, 6.0, 0.0),
    term(-2, 0, 0, 2, 1, -6.0, 0.0, 3.0, 0.0),
    term(0, -1, 2, -2, 1, -5.0, 0.0, 3.0, 0.0),
    term(2, 0, 0, -2, 1, 4.0, 0.0, -2.0, 0.0),
    term(0, 1, 2, -2, 1, 4.0, 0.0, -2.0, 0.0),
    term(1, 0, 0, -1, 0, -4.0, 0.0, 0.0, 0.0),
    term(2, 1, 0, -2, 0, 1.0, 0.0, 0.0, 0.0),
    term(0, 0, -2, 2, 1, 1.0, 0.0, 0.0, 0.0),
    term(0, 1, -2, 2, 0, -1.0, 0.0, 0.0, 0.0),
    term(0, 1, 0, 0, 2, 1.0, 0.0, 0.0, 0.0),
    term(-1, 0, 0, 1, 1, 1.0, 0.0, 0.0, 0.0),
    term(0, 1, 2, -2, 0, -1.0, 0.0, 0.0, 0.0),
    term(0, 0, 2, 0, 2, -2274.0, -0.2, 977.0, -0.5),
    term(1, 0, 0, 0, 0, 712.0, 0.1, -7.0, 0.0),
    term(0, 0, 2, 0, 1, -386.0, -0.4, 200.0, 0.0),
    term(1, 0, 2, 0, 2, -301.0, 0.0, 129.0, -0.1),
    term(1, 0, 0, -2, 0, -158.0, 0.0, -1.0, 0.0),
    term(-1, 0, 2, 0, 2, 123.0, 0.0, -53.0, 0.0),
    term(0, 0, 0, 2, 0, 63.0, 0.0, -2.0, 0.0),
    term(1, 0, 0, 0, 1, 63.0, 0.1, -33.0, 0.0),
    term(-1, 0, 0, 0, 1, -58.0, -0.1, 32.0, 0.0),
    term(-1, 0, 2, 2, 2, -59.0, 0.0, 26.0, 0.0),
    term(1, 0, 2, 0, 1, -51.0, 0.0, 27.0, 0.0),
    term(0, 0, 2, 2, 2, -38.0, 0.0, 16.0, 0.0),
    term(2, 0, 0, 0, 0, 29.0, 0.0, -1.0, 0.0),
    term(1, 0, 2, -2, 2, 29.0, 0.0, -12.0, 0.0),
    term(2, 0, 2, 0, 2, -31.0, 0.0, 13.0, 0.0),
    term(0, 0, 2, 0, 0, 26.0, 0.0, -1.0, 0.0),
    term(-1, 0, 2, 0, 1, 21.0, 0.0, -10.0, 0.0),
    term(-1, 0, 0, 2, 1, 16.0, 0.0, -8.0, 0.0),
    term(1, 0, 0, -2, 1, -13.0, 0.0, 7.0, 0.0),
    term(-1, 0, 2, 2, 1, -10.0, 0.0, 5.0, 0.0),
    term(1, 1, 0, -2, 0, -7.0, 0.0, 0.0, 0.0),
    term(0, 1, 2, 0, 2, 7.0, 0.0, -3.0, 0.0),
    term(0, -1, 2, 0, 2, -7.0, 0.0, 3.0, 0.0),
    term(1, 0, 2, 2, 2, -8.0, 0.0, 3.0, 0.0),
    term(1, 0, 0, 2, 0, 6.0, 0.0, 0.0, 0.0),
    term(2, 0, 2, -2, 2, 6.0, 0.0, -3.0, 0.0),
    term(0, 0, 0, 2, 1, -6.0, 0.0, 3.0, 0.0),
    term(0, 0, 2, 2, 1, -7.0, 0.0, 3.0, 0.0),
    term(1, 0, 2, -2, 1, 6.0, 0.0, -3.0, 0.0),
    term(0, 0, 0, -2, 1, -5.0, 0.0, 3.0, 0.0),
    term(1, -1, 0, 0, 0, 5.0, 0.0, 0.0, 0.0),
    term(2, 0, 2, 0, 1, -5.0, 0.0, 3.0, 0.0),
    term(0, 1, 0, -2, 0, -4.0, 0.0, 0.0, 0.0),
    term(1, 0, -2, 0, 0, 4.0, 0.0, 0.0, 0.0),
    term(0, 0, 0, 1, 0, -4.0, 0.0, 0.0, 0.0),
    term(1, 1, 0, 0, 0, -3.0, 0.0, 0.0, 0.0),
    term(1, 0, 2, 0, 0, 3.0, 0.0, 0.0, 0.0),
    term(1, -1, 2, 0, 2, -3.0, 0.0, 1.0, 0.0),
    term(-1, -1, 2, 2, 2, -3.0, 0.0, 1.0, 0.0),
    term(-2, 0, 0, 0, 1, -2.0, 0.0, 1.0, 0.0),
    term(3, 0, 2, 0, 2, -3.0, 0.0, 1.0, 0.0),
    term(0, -1, 2, 2, 2, -3.0, 0.0, 1.0, 0.0),
    term(1, 1, 2, 0, 2, 2.0, 0.0, -1.0, 0.0),
    term(-1, 0, 2, -2, 1, -2.0, 0.0, 1.0, 0.0),
    term(2, 0, 0, 0, 1, 2.0, 0.0, -1.0, 0.0),
    term(1, 0, 0, 0, 2, -2.0, 0.0, 1.0, 0.0),
    term(3, 0, 0, 0, 0, 2.0, 0.0, 0.0, 0.0),
    term(0, 0, 2, 1, 2, 2.0, 0.0, -1.0, 0.0),
    term(-1, 0, 0, 0, 2, 1.0, 0.0, -1.0, 0.0),
    term(1, 0, 0, -4, 0, -1.0, 0.0, 0.0, 0.0),
    term(-2, 0, 2, 2, 2, 1.0, 0.0, -1.0, 0.0),
    term(-1, 0, 2, 4, 2, -2.0, 0.0, 1.0, 0.0),
    term(2, 0, 0, -4, 0, -1.0, 0.0, 0.0, 0.0),
    term(1, 1, 2, -2, 2, 1.0, 0.0, -1.0, 0.0),
    term(1, 0, 2, 2, 1, -1.0, 0.0, 1.0, 0.0),
    term(-2, 0, 2, 4, 2, -1.0, 0.0, 1.0, 0.0),
    term(-1, 0, 4, 0, 2, 1.0, 0.0, 0.0, 0.0),
    term(1, -1, 0, -2, 0, 1.0, 0.0, 0.0, 0.0),
    term(2, 0, 2, -2, 1, 1.0, 0.0, -1.0, 0.0),
    term(2, 0, 2, 2, 2, -1.0, 0.0, 0.0, 0.0),
    term(1, 0, 0, 2, 1, -1.0, 0.0, 0.0, 0.0),
    term(0, 0, 4, -2, 2, 1.0, 0.0, 0.0, 0.0),
    term(3, 0, 2, -2, 2, 1.0, 0.0, 0.0, 0.0),
    term(1, 0, 2, -2, 0, -1.0, 0.0, 0.0, 0.0),
    term(0, 1, 2, 0, 1, 1.0, 0.0, 0.0, 0.0),
    term(-1, -1, 0, 2, 1, 1.0, 0.0, 0.0, 0.0),
    term(0, 0, -2, 0, 1, -1.0, 0.0, 0.0, 0.0),
    term(0, 0, 2, -1, 2, -1.0, 0.0, 0.0, 0.0),
    term(0, 1, 0, 2, 0, -1.0, 0.0, 0.0, 0.0),
    term(1, 0, -2, -2, 0, -1.0, 0.0, 0.0, 0.0),
    term(0, -1, 2, 0, 1, -1.0, 0.0, 0.0, 0.0),
    term(1, 1, 0, -2, 1, -1.0, 0.0, 0.0, 0.0),
    term(1, 0, -2, 2, 0, -1.0, 0.0, 0.0, 0.0),
    term(2, 0, 0, 2, 0, 1.0, 0.0, 0.0, 0.0),
    term(0, 0, 2, 4, 2, -1.0, 0.0, 0.0, 0.0),
    term(0, 1, 0, 1, 0, 1.0, 0.0, 0.0, 0.0),
];
