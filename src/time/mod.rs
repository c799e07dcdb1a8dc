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

pub use hifitime::*;

mod julian;
mod sidereal;

pub use julian::{
    centuries_since_j2000, epoch_from_jt_tdb, julian_day, julian_time, GregorianTime,
    JulianTimes, DAYS_PER_JULIAN_CENTURY, J2000_JT,
};
pub use sidereal::{gast_deg, gast_rate_deg_s, gmst_deg};
