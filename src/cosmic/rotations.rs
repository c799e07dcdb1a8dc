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

use crate::linalg::{Matrix3, Vector3};
use crate::utils::{cosd, sind};
use std::fmt;

/// Rotates the coordinates of `p` about the first axis by `angle_deg`: the coordinate axes turn by the angle, so a vector on the +Y axis moves towards -Z for a positive angle.
pub fn rotate1(p: &Vector3<f64>, angle_deg: f64) -> Vector3<f64> {
    let (s, c) = (sind(angle_deg), cosd(angle_deg));
    Vector3::new(p.x, c * p.y + s * p.z, -s * p.y + c * p.z)
}

/// Rotates the coordinates of `p` about the second axis by `angle_deg`.
pub fn rotate2(p: &Vector3<f64>, angle_deg: f64) -> Vector3<f64> {
    let (s, c) = (sind(angle_deg), cosd(angle_deg));
    Vector3::new(c * p.x - s * p.z, p.y, s * p.x + c * p.z)
}

/// Rotates the coordinates of `p` about the third axis by `angle_deg`.
pub fn rotate3(p: &Vector3<f64>, angle_deg: f64) -> Vector3<f64> {
    let (s, c) = (sind(angle_deg), cosd(angle_deg));
    Vector3::new(c * p.x + s * p.y, -s * p.x + c * p.y, p.z)
}

/// Defines an Euler rotation, angle in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EulerRotation {
    R1(f64),
    R2(f64),
    R3(f64),
}

impl EulerRotation {
    pub fn apply(&self, p: &Vector3<f64>) -> Vector3<f64> {
        match *self {
            Self::R1(angle) => rotate1(p, angle),
            Self::R2(angle) => rotate2(p, angle),
            Self::R3(angle) => rotate3(p, angle),
        }
    }

    /// Same axis, opposite angle
    pub fn inverse(&self) -> Self {
        match *self {
            Self::R1(angle) => Self::R1(-angle),
            Self::R2(angle) => Self::R2(-angle),
            Self::R3(angle) => Self::R3(-angle),
        }
    }

    /// Get the DCM from this Euler rotation, built column by column from the rotated basis vectors.
    pub fn dcm(&self) -> Matrix3<f64> {
        Matrix3::from_columns(&[
            self.apply(&Vector3::x()),
            self.apply(&Vector3::y()),
            self.apply(&Vector3::z()),
        ])
    }
}

impl fmt::Display for EulerRotation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::R1(angle) => write!(f, "R1({angle} deg)"),
            Self::R2(angle) => write!(f, "R2({angle} deg)"),
            Self::R3(angle) => write!(f, "R3({angle} deg)"),
        }
    }
}

/// An ordered sequence of Euler rotations, the first one is applied first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerSequence<const N: usize>(pub [EulerRotation; N]);

/// A fixed three-axis Euler rotation, e.g. 3-1-3 for orbital elements or 3-2-3 for precession.
pub type Euler3Axis = EulerSequence<3>;

impl<const N: usize> EulerSequence<N> {
    pub fn apply(&self, p: &Vector3<f64>) -> Vector3<f64> {
        self.0.iter().fold(*p, |acc, rot| rot.apply(&acc))
    }

    /// Reverse order and opposite angles, such that `inverse().apply(apply(p)) == p`.
    pub fn inverse(&self) -> Self {
        let mut rots = self.0;
        rots.reverse();
        Self(rots.map(|rot| rot.inverse()))
    }

    pub fn dcm(&self) -> Matrix3<f64> {
        self.0
            .iter()
            .fold(Matrix3::identity(), |acc, rot| rot.dcm() * acc)
    }
}

impl Euler3Axis {
    /// Classical 3-1-3 sequence `R3(first) R1(second) R3(third)`.
    pub fn new_313(first_deg: f64, second_deg: f64, third_deg: f64) -> Self {
        Self([
            EulerRotation::R3(first_deg),
            EulerRotation::R1(second_deg),
            EulerRotation::R3(third_deg),
        ])
    }
}
