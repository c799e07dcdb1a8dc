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

use hifitime::Epoch;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Julian day of the J2000 reference epoch, 2000 January 1 12h.
pub const J2000_JT: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian centuries elapsed between J2000 and the provided Julian time, in the time scale of that Julian time.
pub fn centuries_since_j2000(jt: f64) -> f64 {
    (jt - J2000_JT) / DAYS_PER_JULIAN_CENTURY
}

/// Julian day at 0h of the provided proleptic Gregorian calendar date (Meeus, Astronomical Algorithms, ch. 7).
///
/// There is no validity check on the date: out of range months or days produce a Julian day which is consistent with the formula and nothing more.
pub fn julian_day(year: i32, month: u8, day: u8) -> f64 {
    let (mut y, mut m) = (f64::from(year), f64::from(month));
    if m < 3.0 {
        y -= 1.0;
        m += 12.0;
    }

    let a = (y / 100.0).floor();
    let b = (a / 4.0).floor();
    let c = (2.0 - a + b).floor();
    let e = (365.25 * (y + 4716.0)).floor();
    let f = (30.6001 * (m + 1.0)).floor();

    c + f64::from(day) + e + f - 1524.5
}

/// Julian time of the provided Gregorian date and time of day.
pub fn julian_time(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> f64 {
    julian_day(year, month, day)
        + f64::from(hour) / 24.0
        + f64::from(minute) / 1440.0
        + second / SECONDS_PER_DAY
}

/// Gregorian calendar date and time of day, without any time scale information.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GregorianTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl GregorianTime {
    /// Inverse of [`julian_time`], using the proleptic Gregorian calendar for all dates.
    pub fn from_jt(jt: f64) -> Self {
        let z = (jt + 0.5).floor();
        let frac = jt + 0.5 - z;

        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day_frac = b - d - (30.6001 * e).floor() + frac;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        let day = day_frac.floor();
        let hours = (day_frac - day) * 24.0;
        let hour = hours.floor();
        let minutes = (hours - hour) * 60.0;
        let minute = minutes.floor();

        Self {
            year: year as i32,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: (minutes - minute) * 60.0,
        }
    }

    pub fn to_jt(&self) -> f64 {
        julian_time(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

impl fmt::Display for GregorianTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// The two Julian times needed to walk the frame ladder: TDB for the inertial frames, UT1 for the Earth fixed frames.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JulianTimes {
    pub ut1: f64,
    pub tdb: f64,
}

impl JulianTimes {
    pub fn new(ut1: f64, tdb: f64) -> Self {
        Self { ut1, tdb }
    }

    /// Builds the pair from an epoch and the UT1 - UTC offset in seconds, as published by the IERS.
    pub fn from_epoch(epoch: Epoch, ut1_utc_s: f64) -> Self {
        Self {
            ut1: epoch.to_jde_utc_days() + ut1_utc_s / SECONDS_PER_DAY,
            tdb: epoch.to_jde_tdb_days(),
        }
    }

    /// TDB - UT1, in seconds.
    pub fn delta_t_s(&self) -> f64 {
        (self.tdb - self.ut1) * SECONDS_PER_DAY
    }
}

/// Epoch of a TDB Julian time.
pub fn epoch_from_jt_tdb(jt_tdb: f64) -> Epoch {
    Epoch::from_jde_tdb(jt_tdb)
}
