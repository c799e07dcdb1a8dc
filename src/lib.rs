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

/*! # nyx-frames

Observer-centric ephemerides: the reference frame ladder from the ecliptic down to the local horizon, an analytic Kepler engine feeding it, and the time and nutation models that parameterize every rung.

All angles are in degrees at the public boundary, lengths in meters, velocities in meters per second, and epochs are Julian day counts (see [`time::JulianTimes`] to build them from a [`hifitime::Epoch`]).
*/

/// Provides the reference frames, the transformations between them, and the analytic orbit models which feed them.
pub mod cosmic;

/// Utility functions shared by different modules, and which may be useful to engineers.
pub mod utils;

mod errors;
/// Functions which may fail return an error, nothing in this crate panics on bad input.
pub use self::errors::MathError;

/// All the input/output needs for this library, including loading of configuration files.
pub mod io;

#[macro_use]
extern crate log;
extern crate hifitime;
extern crate nalgebra as na;

/// Re-export of hifitime, with the Julian time and sidereal time computations needed by the frame ladder.
pub mod time;

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

pub use self::cosmic::{Frame, StateVector};
