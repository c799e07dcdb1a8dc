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

use super::rotations::{EulerRotation, EulerSequence};
use super::{AstroError, AstroMathSnafu, Geodetic, StateVector};
use crate::linalg::Vector3;
use crate::utils::{asind, atan2d, between_0_360, cosd, sind, tand, unit_vector};
use serde_derive::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt;
use typed_builder::TypedBuilder;

fn enu_rotation(observer: &Geodetic) -> EulerSequence<2> {
    EulerSequence([
        EulerRotation::R3(90.0 + observer.lon_deg),
        EulerRotation::R1(90.0 - observer.lat_deg),
    ])
}

/// Converts an Earth fixed state into the East-North-Up frame of the observer.
///
/// Only the position is translated to the observer: the observer is fixed in this frame, so the velocity is only rotated.
pub fn efi_to_enu(state: &StateVector, observer: &Geodetic) -> StateVector {
    let rot = enu_rotation(observer);
    StateVector::new(
        rot.apply(&(state.radius_m - observer.to_efi())),
        rot.apply(&state.velocity_m_s),
        state.jt,
    )
}

/// Inverse of [`efi_to_enu`]
pub fn enu_to_efi(state: &StateVector, observer: &Geodetic) -> StateVector {
    let rot = enu_rotation(observer).inverse();
    StateVector::new(
        rot.apply(&state.radius_m) + observer.to_efi(),
        rot.apply(&state.velocity_m_s),
        state.jt,
    )
}

/// Horizontal coordinates: azimuth clockwise from the North within [0, 360), elevation above the horizon, in degrees, and distance in meters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Horizontal {
    pub az_deg: f64,
    pub el_deg: f64,
    pub dist_m: f64,
    pub jt: f64,
}

impl Horizontal {
    /// Spherical decomposition of an ENU state.
    ///
    /// Angular rates are not computed: only the position of the state is used.
    pub fn from_enu(state: &StateVector) -> Result<Self, AstroError> {
        let r = &state.radius_m;
        let dist_m = r.norm();
        let u = unit_vector(r, "horizontal coordinates of the observer location")
            .context(AstroMathSnafu {
                action: "ENU to azimuth and elevation",
            })?;
        let el_deg = asind(u.z).context(AstroMathSnafu {
            action: "ENU to azimuth and elevation",
        })?;

        Ok(Self {
            az_deg: between_0_360(atan2d(r.x, r.y)),
            el_deg,
            dist_m,
            jt: state.jt,
        })
    }

    /// ENU state at rest at these horizontal coordinates.
    pub fn to_enu(&self) -> StateVector {
        StateVector::at_rest(
            self.dist_m
                * Vector3::new(
                    cosd(self.el_deg) * sind(self.az_deg),
                    cosd(self.el_deg) * cosd(self.az_deg),
                    sind(self.el_deg),
                ),
            self.jt,
        )
    }

    /// Returns a copy with the elevation lifted by the atmospheric refraction.
    pub fn refracted(self, params: &RefractionParameters) -> Self {
        Self {
            el_deg: params.apparent_elevation_deg(self.el_deg),
            ..self
        }
    }
}

impl fmt::Display for Horizontal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[JT {:.9}]\taz = {:.6} deg\tel = {:.6} deg\tdist = {:.3} m",
            self.jt, self.az_deg, self.el_deg, self.dist_m
        )
    }
}

/// Surface air conditions for the refraction model.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct RefractionParameters {
    #[builder(default = 10.0)]
    pub temperature_c: f64,
    #[builder(default = 1010.0)]
    pub pressure_mbar: f64,
}

impl Default for RefractionParameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Below this elevation, the refraction model is meaningless and no correction is applied.
const REFRACTION_MIN_EL_DEG: f64 = -1.0;

impl RefractionParameters {
    /// Refraction in degrees for a true (airless) elevation, Saemundsson's formula (Meeus, ch. 16) scaled to the air conditions.
    /// The constant term makes the refraction vanish at the zenith.
    pub fn refraction_deg(&self, true_el_deg: f64) -> f64 {
        if true_el_deg < REFRACTION_MIN_EL_DEG {
            return 0.0;
        }
        let arcmin = 1.02 / tand(true_el_deg + 10.3 / (true_el_deg + 5.11)) + 0.001_927_920_403_463_93;
        arcmin / 60.0 * (self.pressure_mbar / 1010.0) * 283.0 / (273.0 + self.temperature_c)
    }

    pub fn apparent_elevation_deg(&self, true_el_deg: f64) -> f64 {
        true_el_deg + self.refraction_deg(true_el_deg)
    }
}
