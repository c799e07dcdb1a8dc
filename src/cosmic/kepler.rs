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
    AstroError, InvalidOrbitSnafu, KeplerNonConvergenceSnafu, StateVector, SECONDS_PER_DAY,
};
use crate::linalg::Vector3;
use crate::utils::{atan2d, between_0_360, cosd, sind};
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::f64::consts::TAU;
use typed_builder::TypedBuilder;

/// Newton-Raphson solver of Kepler's equation `M = E - e sin(E)`, all anomalies in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
pub struct KeplerSolver {
    /// Bound on the sum of the sine and cosine residuals of the mean anomaly
    #[builder(default = 1e-10)]
    pub tolerance: f64,
    #[builder(default = 10)]
    pub max_iter: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl KeplerSolver {
    /// Returns the eccentric anomaly in [0, 360) degrees of the provided mean anomaly (degrees) and eccentricity.
    ///
    /// # Errors
    /// + [`AstroError::InvalidOrbit`] if the eccentricity is not within [0, 1) or the mean anomaly is not finite
    /// + [`AstroError::KeplerNonConvergence`] with the last estimate if the residual is above the tolerance after `max_iter` steps
    pub fn solve(&self, ma_deg: f64, ecc: f64) -> Result<f64, AstroError> {
        ensure!(
            (0.0..1.0).contains(&ecc),
            InvalidOrbitSnafu {
                msg: format!("Kepler equation requires an elliptical orbit, got e = {ecc}")
            }
        );
        ensure!(
            ma_deg.is_finite(),
            InvalidOrbitSnafu {
                msg: format!("Kepler equation requires a finite mean anomaly, got M = {ma_deg}")
            }
        );

        let ecc_deg = ecc.to_degrees();
        let residual = |ea_deg: f64| {
            let ma_est = ea_deg - ecc_deg * sind(ea_deg);
            (sind(ma_deg) - sind(ma_est)).abs() + (cosd(ma_deg) - cosd(ma_est)).abs()
        };

        let mut ea_deg = ma_deg;
        for iteration in 1..=self.max_iter {
            ea_deg -= (ma_deg - ea_deg + ecc_deg * sind(ea_deg)) / (ecc * cosd(ea_deg) - 1.0);
            let err = residual(ea_deg);
            trace!("Kepler iteration {iteration}: E = {ea_deg} deg (residual {err:e})");
            if err <= self.tolerance {
                return Ok(between_0_360(ea_deg));
            }
        }

        warn!(
            "Kepler equation for M = {ma_deg} deg, e = {ecc} did not converge in {} iterations",
            self.max_iter
        );

        KeplerNonConvergenceSnafu {
            last_ea_deg: ea_deg,
            iterations: self.max_iter,
        }
        .fail()
    }

    /// Advances the mean anomaly by `delta_days` on an orbit of semi major axis `sma_m`, and solves for the eccentric anomaly.
    ///
    /// Returns the propagated mean anomaly (not normalized) and eccentric anomaly, in degrees.
    pub fn propagate(
        &self,
        delta_days: f64,
        ma_deg: f64,
        sma_m: f64,
        ecc: f64,
        gm_m3_s2: f64,
    ) -> Result<(f64, f64), AstroError> {
        let period_s = orbital_period_s(sma_m, gm_m3_s2)?;
        let ma_prop_deg = ma_deg + 360.0 * delta_days * SECONDS_PER_DAY / period_s;
        Ok((ma_prop_deg, self.solve(ma_prop_deg, ecc)?))
    }
}

/// Orbital period in seconds, from Kepler's third law.
pub fn orbital_period_s(sma_m: f64, gm_m3_s2: f64) -> Result<f64, AstroError> {
    ensure!(
        sma_m > 0.0 && gm_m3_s2 > 0.0,
        InvalidOrbitSnafu {
            msg: format!(
                "semi major axis ({sma_m} m) and gravitational parameter ({gm_m3_s2} m^3/s^2) must be positive"
            )
        }
    );
    Ok(TAU * (sma_m.powi(3) / gm_m3_s2).sqrt())
}

/// True anomaly in degrees within (-180, 180] from the eccentric anomaly.
pub fn true_anomaly_deg(ea_deg: f64, ecc: f64) -> f64 {
    let denom = 1.0 - ecc * cosd(ea_deg);
    let x = (cosd(ea_deg) - ecc) / denom;
    let y = (1.0 - ecc.powi(2)).sqrt() * sind(ea_deg) / denom;
    atan2d(y, x)
}

/// Position and velocity in the perifocal frame, from the semi major and semi minor axes (m), the eccentric anomaly (deg) and the gravitational parameter.
pub fn perifocal_state(
    sma_m: f64,
    smi_m: f64,
    ea_deg: f64,
    gm_m3_s2: f64,
    jt: f64,
) -> Result<StateVector, AstroError> {
    ensure!(
        smi_m > 0.0 && smi_m <= sma_m,
        InvalidOrbitSnafu {
            msg: format!("semi minor axis {smi_m} m must be within (0, {sma_m}] m")
        }
    );
    let period_s = orbital_period_s(sma_m, gm_m3_s2)?;
    let ecc = (1.0 - (smi_m / sma_m).powi(2)).sqrt();
    // Eccentric anomaly rate, in rad/s
    let ea_dot = (TAU / period_s) / (1.0 - ecc * cosd(ea_deg));

    Ok(StateVector::new(
        Vector3::new(sma_m * (cosd(ea_deg) - ecc), smi_m * sind(ea_deg), 0.0),
        Vector3::new(
            -sma_m * ea_dot * sind(ea_deg),
            smi_m * ea_dot * cosd(ea_deg),
            0.0,
        ),
        jt,
    ))
}
