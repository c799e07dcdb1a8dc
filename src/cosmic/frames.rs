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

//! Edges of the frame ladder.
//!
//! Each function converts a [`StateVector`] across a single edge and has an exact inverse. The Julian time of the state is never modified here:
//! the caller (or the [`ladder`](super::ladder)) is responsible for tagging ToD states with UT1 before they cross into the Earth fixed frames.

use super::nutation::{ecliptic_obliquity_deg, NutationTerms};
use super::rotations::{rotate3, EulerRotation, EulerSequence};
use super::StateVector;
use crate::linalg::Vector3;
use crate::time::{centuries_since_j2000, gast_deg, gast_rate_deg_s};
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Frames of the ladder, in the order in which they must be traversed, and the perifocal frame of an orbit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Mean ecliptic and equinox of J2000
    Ecliptic,
    /// Mean equator and equinox of J2000
    EquatorialJ2000,
    /// Mean equator and equinox of date
    MeanOfDate,
    /// True equator and equinox of date
    TrueOfDate,
    /// Rotates with the Earth by the apparent sidereal time
    PseudoEarthFixed,
    /// Pseudo Earth fixed corrected for polar motion
    EarthFixed,
    /// East-North-Up frame centered on an observer
    Topocentric,
    /// Orbital plane, X towards the periapsis
    Perifocal,
}

impl Frame {
    /// Position of this frame on the ladder, top to bottom. The perifocal frame hangs off the inertial frames and is not on the ladder.
    pub fn rung(&self) -> Option<usize> {
        match self {
            Self::Ecliptic => Some(0),
            Self::EquatorialJ2000 => Some(1),
            Self::MeanOfDate => Some(2),
            Self::TrueOfDate => Some(3),
            Self::PseudoEarthFixed => Some(4),
            Self::EarthFixed => Some(5),
            Self::Topocentric => Some(6),
            Self::Perifocal => None,
        }
    }

    /// Inverse of [`Frame::rung`]
    pub fn from_rung(rung: usize) -> Option<Self> {
        match rung {
            0 => Some(Self::Ecliptic),
            1 => Some(Self::EquatorialJ2000),
            2 => Some(Self::MeanOfDate),
            3 => Some(Self::TrueOfDate),
            4 => Some(Self::PseudoEarthFixed),
            5 => Some(Self::EarthFixed),
            6 => Some(Self::Topocentric),
            _ => None,
        }
    }

    /// Whether the Julian time of a state in this frame is in UT1 (otherwise TDB)
    pub fn is_earth_fixed(&self) -> bool {
        matches!(
            self,
            Self::PseudoEarthFixed | Self::EarthFixed | Self::Topocentric
        )
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Ecliptic => "Ecliptic J2000",
            Self::EquatorialJ2000 => "Equatorial J2000",
            Self::MeanOfDate => "MoD",
            Self::TrueOfDate => "ToD",
            Self::PseudoEarthFixed => "PEF",
            Self::EarthFixed => "EFI",
            Self::Topocentric => "ENU",
            Self::Perifocal => "Perifocal",
        };
        write!(f, "{name}")
    }
}

/// Polar motion angles, in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolarMotion {
    pub xp_deg: f64,
    pub yp_deg: f64,
}

impl PolarMotion {
    pub fn new(xp_deg: f64, yp_deg: f64) -> Self {
        Self { xp_deg, yp_deg }
    }

    /// Builds the polar motion from the IERS values, which are published in arc seconds.
    pub fn from_arcsec(xp_arcsec: f64, yp_arcsec: f64) -> Self {
        Self::new(xp_arcsec / 3600.0, yp_arcsec / 3600.0)
    }
}

fn rotate<const N: usize>(state: &StateVector, seq: &EulerSequence<N>) -> StateVector {
    StateVector::new(
        seq.apply(&state.radius_m),
        seq.apply(&state.velocity_m_s),
        state.jt,
    )
}

fn nutation_or_eval(nutation: Option<NutationTerms>, jt: f64) -> NutationTerms {
    nutation.unwrap_or_else(|| {
        trace!("evaluating nutation terms at JT {jt}");
        NutationTerms::at(jt)
    })
}

/// Rotation from the ecliptic to the equator of J2000.
fn ecliptic_rotation(jt: f64) -> EulerSequence<1> {
    EulerSequence([EulerRotation::R1(-ecliptic_obliquity_deg(jt))])
}

/// Converts an ecliptic state into the equatorial J2000 frame.
pub fn ecliptic_to_j2000(state: &StateVector) -> StateVector {
    rotate(state, &ecliptic_rotation(state.jt))
}

/// Converts an equatorial J2000 state into the ecliptic frame.
pub fn j2000_to_ecliptic(state: &StateVector) -> StateVector {
    rotate(state, &ecliptic_rotation(state.jt).inverse())
}

/// Precession angles `(zeta, theta, z)` in degrees (IAU 1976) at the provided TDB Julian time.
pub fn precession_angles_deg(jt: f64) -> (f64, f64, f64) {
    let t = centuries_since_j2000(jt);
    let zeta =
        0.640_616_138_8 * t + 8.385_555_555_5e-5 * t.powi(2) + 4.999_444_444_4e-6 * t.powi(3);
    let theta =
        0.556_753_027_7 * t - 1.185_138_888_8e-4 * t.powi(2) - 1.162_027_777_7e-5 * t.powi(3);
    let z = 0.640_616_138_8 * t + 3.040_777_777_7e-4 * t.powi(2) + 5.056_388_888_8e-6 * t.powi(3);
    (zeta, theta, z)
}

fn precession(jt: f64) -> EulerSequence<3> {
    let (zeta, theta, z) = precession_angles_deg(jt);
    EulerSequence([
        EulerRotation::R3(-zeta),
        EulerRotation::R2(theta),
        EulerRotation::R3(-z),
    ])
}

/// Precesses an equatorial J2000 state to the mean equator and equinox of date.
pub fn j2000_to_mod(state: &StateVector) -> StateVector {
    rotate(state, &precession(state.jt))
}

/// Inverse of [`j2000_to_mod`]
pub fn mod_to_j2000(state: &StateVector) -> StateVector {
    rotate(state, &precession(state.jt).inverse())
}

fn nutation_rotation(nut: &NutationTerms) -> EulerSequence<3> {
    EulerSequence([
        EulerRotation::R1(nut.eps_deg),
        EulerRotation::R3(-nut.dpsi_deg),
        EulerRotation::R1(-nut.true_obliquity_deg()),
    ])
}

/// Applies the nutation to a mean of date state.
///
/// If the nutation terms are not provided, they are evaluated at the Julian time of the state.
pub fn mod_to_tod(state: &StateVector, nutation: Option<NutationTerms>) -> StateVector {
    let nut = nutation_or_eval(nutation, state.jt);
    rotate(state, &nutation_rotation(&nut))
}

/// Inverse of [`mod_to_tod`]
pub fn tod_to_mod(state: &StateVector, nutation: Option<NutationTerms>) -> StateVector {
    let nut = nutation_or_eval(nutation, state.jt);
    rotate(state, &nutation_rotation(&nut).inverse())
}

/// Angular velocity of the Earth about the third axis, in rad/s, at a UT1 Julian time.
fn earth_rate(jt_ut1: f64) -> Vector3<f64> {
    Vector3::new(0.0, 0.0, gast_rate_deg_s(jt_ut1).to_radians())
}

/// Rotates a true of date state by the apparent sidereal time. The Julian time of the state must be UT1.
///
/// The velocity is rotated and then corrected by the transport term of the rotating frame,
/// `dGAST/dt * (-sin(GAST) x + cos(GAST) y, -cos(GAST) x - sin(GAST) y, 0)`, i.e. `-omega x r_pef`.
pub fn tod_to_pef(state: &StateVector, nutation: Option<NutationTerms>) -> StateVector {
    let gast = gast_deg(state.jt, nutation);
    let radius_m = rotate3(&state.radius_m, gast);
    let velocity_m_s =
        rotate3(&state.velocity_m_s, gast) - earth_rate(state.jt).cross(&radius_m);
    StateVector::new(radius_m, velocity_m_s, state.jt)
}

/// Inverse of [`tod_to_pef`], the transport term is removed before rotating back.
pub fn pef_to_tod(state: &StateVector, nutation: Option<NutationTerms>) -> StateVector {
    let gast = gast_deg(state.jt, nutation);
    let inertial_vel = state.velocity_m_s + earth_rate(state.jt).cross(&state.radius_m);
    StateVector::new(
        rotate3(&state.radius_m, -gast),
        rotate3(&inertial_vel, -gast),
        state.jt,
    )
}

fn polar_motion(pm: PolarMotion) -> EulerSequence<2> {
    EulerSequence([
        EulerRotation::R1(-pm.yp_deg),
        EulerRotation::R2(-pm.xp_deg),
    ])
}

/// Applies the polar motion to a pseudo Earth fixed state.
pub fn pef_to_efi(state: &StateVector, pm: PolarMotion) -> StateVector {
    rotate(state, &polar_motion(pm))
}

/// Inverse of [`pef_to_efi`]
pub fn efi_to_pef(state: &StateVector, pm: PolarMotion) -> StateVector {
    rotate(state, &polar_motion(pm).inverse())
}

fn orientation(raan_deg: f64, inc_deg: f64, aop_deg: f64) -> EulerSequence<3> {
    EulerSequence([
        EulerRotation::R3(-aop_deg),
        EulerRotation::R1(-inc_deg),
        EulerRotation::R3(-raan_deg),
    ])
}

/// Converts a perifocal state into the inertial frame in which the orbit orientation angles are defined.
pub fn perifocal_to_inertial(
    state: &StateVector,
    raan_deg: f64,
    inc_deg: f64,
    aop_deg: f64,
) -> StateVector {
    rotate(state, &orientation(raan_deg, inc_deg, aop_deg))
}

/// Inverse of [`perifocal_to_inertial`]
pub fn inertial_to_perifocal(
    state: &StateVector,
    raan_deg: f64,
    inc_deg: f64,
    aop_deg: f64,
) -> StateVector {
    rotate(state, &orientation(raan_deg, inc_deg, aop_deg).inverse())
}
