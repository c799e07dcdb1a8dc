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

use super::frames::{inertial_to_perifocal, perifocal_to_inertial};
use super::kepler::{perifocal_state, true_anomaly_deg};
use super::{AstroError, AstroMathSnafu, InvalidOrbitSnafu, KeplerSolver, StateVector};
use crate::utils::{acosd, atan2d, cosd, sind, unit_vector};
use serde_derive::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};
use std::fmt;

/// Below this inclination, the argument of periapsis is measured from the X axis of the reference plane.
const INC_MIN_DEG: f64 = 1e-7;

/// Keplerian elements of an elliptical orbit, with the angles in degrees and the axes in meters.
///
/// The plane of reference is the XY plane of the frame of the state they were computed from.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub sma_m: f64,
    pub smi_m: f64,
    pub ecc: f64,
    pub inc_deg: f64,
    pub raan_deg: f64,
    pub aop_deg: f64,
    pub ea_deg: f64,
    pub ma_deg: f64,
    pub ta_deg: f64,
    pub gm_m3_s2: f64,
    pub jt: f64,
}

impl KeplerianElements {
    /// Osculating elements of the provided state around a body of gravitational parameter `gm_m3_s2`.
    ///
    /// # Errors
    /// + [`AstroError::InvalidOrbit`] if the orbit is not elliptical
    /// + [`AstroError::AstroMath`] if the state is at the center of the body or moves radially
    pub fn from_state(state: &StateVector, gm_m3_s2: f64) -> Result<Self, AstroError> {
        let r = &state.radius_m;
        let v = &state.velocity_m_s;

        let r_hat = unit_vector(r, "osculating elements at the central body").context(
            AstroMathSnafu {
                action: "osculating elements",
            },
        )?;
        let hvec = r.cross(v);
        let h_hat = unit_vector(&hvec, "osculating elements of a radial trajectory").context(
            AstroMathSnafu {
                action: "osculating elements",
            },
        )?;

        let ecc_vec = v.cross(&hvec) / gm_m3_s2 - r_hat;
        let ecc = ecc_vec.norm();

        let energy = 0.5 * v.norm_squared() - gm_m3_s2 / r.norm();
        ensure!(
            energy < 0.0 && ecc < 1.0,
            InvalidOrbitSnafu {
                msg: format!("state is not on an elliptical orbit (energy = {energy} J/kg, e = {ecc})")
            }
        );
        let sma_m = -gm_m3_s2 / (2.0 * energy);
        let smi_m = sma_m * (1.0 - ecc.powi(2)).sqrt();

        let inc_deg = acosd(h_hat.z).context(AstroMathSnafu {
            action: "inclination of the osculating orbit",
        })?;
        let raan_deg = atan2d(hvec.x, -hvec.y);

        let aop_deg = if inc_deg < INC_MIN_DEG {
            atan2d(ecc_vec.y, ecc_vec.x) - raan_deg
        } else {
            // Ascending node coordinates, divided by whichever of cos(raan) and sin(raan) is the largest
            let asc_y = ecc_vec.z / sind(inc_deg);
            let asc_x = if sind(raan_deg).abs() < cosd(raan_deg).abs() {
                (ecc_vec.x + sind(raan_deg) * cosd(inc_deg) * asc_y) / cosd(raan_deg)
            } else {
                (ecc_vec.y - cosd(raan_deg) * cosd(inc_deg) * asc_y) / sind(raan_deg)
            };
            atan2d(asc_y, asc_x)
        };

        let r_orbital = inertial_to_perifocal(state, raan_deg, inc_deg, aop_deg).radius_m;
        let ea_deg = atan2d(r_orbital.y / smi_m, r_orbital.x / sma_m + ecc);
        let ma_deg = ea_deg - (ecc * sind(ea_deg)).to_degrees();

        Ok(Self {
            sma_m,
            smi_m,
            ecc,
            inc_deg,
            raan_deg,
            aop_deg,
            ea_deg,
            ma_deg,
            ta_deg: true_anomaly_deg(ea_deg, ecc),
            gm_m3_s2,
            jt: state.jt,
        })
    }

    /// State in the perifocal frame at the eccentric anomaly of these elements.
    pub fn to_perifocal_state(&self) -> Result<StateVector, AstroError> {
        perifocal_state(self.sma_m, self.smi_m, self.ea_deg, self.gm_m3_s2, self.jt)
    }

    /// State in the frame of reference of these elements.
    pub fn to_state(&self) -> Result<StateVector, AstroError> {
        Ok(perifocal_to_inertial(
            &self.to_perifocal_state()?,
            self.raan_deg,
            self.inc_deg,
            self.aop_deg,
        ))
    }

    /// Returns these elements propagated on the unperturbed orbit to the provided Julian time.
    pub fn at_jt(&self, jt: f64, solver: &KeplerSolver) -> Result<Self, AstroError> {
        let (ma_deg, ea_deg) =
            solver.propagate(jt - self.jt, self.ma_deg, self.sma_m, self.ecc, self.gm_m3_s2)?;
        Ok(Self {
            ma_deg,
            ea_deg,
            ta_deg: true_anomaly_deg(ea_deg, self.ecc),
            jt,
            ..*self
        })
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[JT {:.9}]\tsma = {:.3} km\tecc = {:.6}\tinc = {:.6} deg\traan = {:.6} deg\taop = {:.6} deg\tta = {:.6} deg",
            self.jt,
            self.sma_m / 1e3,
            self.ecc,
            self.inc_deg,
            self.raan_deg,
            self.aop_deg,
            self.ta_deg
        )
    }
}
