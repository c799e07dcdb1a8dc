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

use super::aberration::aberration_stellar_cart;
use super::frames::ecliptic_to_j2000;
use super::ladder::{convert_traced, observer_velocity_j2000};
use super::planets::SUN_DIAMETER_M;
use super::{
    AstroError, Corrections, Frame, FrameContext, Geodetic, Horizontal, LadderTrace, Planet,
    PolarMotion, StateVector, UnobservableTargetSnafu, SECONDS_PER_DAY, SPEED_OF_LIGHT_M_S,
};
use crate::io::ConfigRepr;
use crate::time::JulianTimes;
use crate::utils::atand;
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;
use typed_builder::TypedBuilder;

/// What is being observed.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Target {
    Sun,
    Planet(Planet),
    /// A star at a fixed J2000 right ascension and declination, in degrees
    FixedStar {
        ra_deg: f64,
        dec_deg: f64,
        distance_m: f64,
    },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Sun => write!(f, "Sun"),
            Self::Planet(planet) => write!(f, "{planet}"),
            Self::FixedStar {
                ra_deg, dec_deg, ..
            } => write!(f, "star at RA {ra_deg:.6} deg, Dec {dec_deg:.6} deg"),
        }
    }
}

/// Where the observer stands and which corrections to apply.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(default)]
pub struct ObservationConfig {
    #[builder(default)]
    pub observer: Geodetic,
    #[builder(default)]
    pub corrections: Corrections,
    /// Only used if the polar motion correction is enabled
    #[builder(default)]
    pub polar_motion: PolarMotion,
}

impl ConfigRepr for ObservationConfig {}

impl ObservationConfig {
    fn frame_context(&self, times: JulianTimes) -> FrameContext {
        let polar_motion = if self.corrections.polar_motion {
            self.polar_motion
        } else {
            PolarMotion::default()
        };
        FrameContext::builder()
            .times(times)
            .polar_motion(polar_motion)
            .observer(self.observer)
            .build()
    }
}

/// Spherical coordinates of a state: longitude (or right ascension, or azimuth) and latitude (or declination, or elevation) in degrees, distance in meters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphericalAngles {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub dist_m: f64,
}

/// Apparent position of a target, with every intermediate state of its way down to the horizon of the observer.
#[derive(Clone, Debug, PartialEq)]
pub struct ApparentPosition {
    pub target: Target,
    pub times: JulianTimes,
    /// Light time in seconds, zero if not corrected for
    pub light_time_s: f64,
    /// Heliocentric ecliptic state of a planet, at the time the light left it
    pub heliocentric: Option<StateVector>,
    /// Geocentric ecliptic state, before aberration
    pub geocentric_ecliptic: Option<StateVector>,
    /// States from the equatorial J2000 frame, after aberration, down to the topocentric frame
    pub trace: LadderTrace,
    /// Horizontal coordinates, including refraction if enabled
    pub horizontal: Horizontal,
    /// Apparent angular diameter of the Sun or of a planet, in degrees
    pub angular_diameter_deg: Option<f64>,
}

impl ApparentPosition {
    /// Spherical coordinates of the target in the provided frame.
    ///
    /// Longitudes are within [0, 360) except in the Earth fixed frame where they are within (-180, 180],
    /// and the topocentric frame returns the azimuth, elevation and distance (including refraction, if enabled).
    pub fn angles(&self, frame: Frame) -> Result<SphericalAngles, AstroError> {
        if frame == Frame::Topocentric {
            return Ok(SphericalAngles {
                lon_deg: self.horizontal.az_deg,
                lat_deg: self.horizontal.el_deg,
                dist_m: self.horizontal.dist_m,
            });
        }

        let state = match frame {
            Frame::Ecliptic => self.geocentric_ecliptic.as_ref(),
            _ => self.trace.get(frame),
        }
        .ok_or(AstroError::UnsupportedFrame {
            frame,
            action: "angles of an apparent position",
        })?;

        let (lon_deg, lat_deg) = state.lon_lat_deg(frame == Frame::EarthFixed)?;
        Ok(SphericalAngles {
            lon_deg,
            lat_deg,
            dist_m: state.rmag_m(),
        })
    }

    /// Apparent right ascension and declination in the true equator and equinox of date, in degrees.
    pub fn ra_dec_tod_deg(&self) -> Result<(f64, f64), AstroError> {
        let angles = self.angles(Frame::TrueOfDate)?;
        Ok((angles.lon_deg, angles.lat_deg))
    }
}

impl fmt::Display for ApparentPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} at JT {:.6} UT1 (light time {:.3} s)",
            self.target, self.times.ut1, self.light_time_s
        )?;
        write!(f, "{}", self.trace)?;
        write!(f, "{}", self.horizontal)
    }
}

fn light_time_days(geocentric: &StateVector, corrections: &Corrections) -> f64 {
    if corrections.light_time {
        geocentric.rmag_m() / SPEED_OF_LIGHT_M_S / SECONDS_PER_DAY
    } else {
        0.0
    }
}

/// Computes the apparent position of a target as seen by the observer of the configuration.
///
/// The geocentric ecliptic state of the Sun and of the planets is corrected for the light time in a single pass.
/// Stellar aberration (and diurnal aberration) is applied in the J2000 equatorial frame except for the Sun,
/// whose aberration is already accounted for by the light time on the position of the Earth.
pub fn observe(
    target: Target,
    times: JulianTimes,
    config: &ObservationConfig,
) -> Result<ApparentPosition, AstroError> {
    let corrections = &config.corrections;
    let ctx = config.frame_context(times);
    let tdb = times.tdb;

    let (heliocentric, geocentric_ecliptic, light_time_days) = match target {
        Target::Sun => {
            let earth = Planet::Earth.state_ecliptic(tdb)?;
            let lt = light_time_days(&earth, corrections);
            let geo = -Planet::Earth.state_ecliptic(tdb - lt)?.with_jt(tdb);
            (None, Some(geo), lt)
        }
        Target::Planet(planet) => {
            ensure!(planet != Planet::Earth, UnobservableTargetSnafu { planet });
            let earth = Planet::Earth.state_ecliptic(tdb)?;
            let lt = light_time_days(&(planet.state_ecliptic(tdb)? - earth), corrections);
            let helio = planet.state_ecliptic(tdb - lt)?;
            (Some(helio), Some((helio - earth).with_jt(tdb)), lt)
        }
        Target::FixedStar { .. } => (None, None, 0.0),
    };

    let mut j2000 = match (target, geocentric_ecliptic) {
        (
            Target::FixedStar {
                ra_deg,
                dec_deg,
                distance_m,
            },
            _,
        ) => StateVector::from_spherical(ra_deg, dec_deg, distance_m, tdb),
        (_, Some(geo)) => ecliptic_to_j2000(&geo),
        (_, None) => {
            return Err(AstroError::UnsupportedFrame {
                frame: Frame::Ecliptic,
                action: "geocentric state of a solar system body",
            })
        }
    };

    if corrections.stellar_aberration && target != Target::Sun {
        let diurnal = if corrections.diurnal_aberration {
            Some(observer_velocity_j2000(times.ut1, &ctx)?)
        } else {
            None
        };
        j2000 = aberration_stellar_cart(&j2000, diurnal)?;
    }

    let trace = convert_traced(&j2000, Frame::EquatorialJ2000, Frame::Topocentric, &ctx)?;
    let mut horizontal = Horizontal::from_enu(&trace.output)?;
    if corrections.refraction {
        horizontal = horizontal.refracted(&corrections.refraction_params);
    }

    let diameter_m = match target {
        Target::Sun => Some(SUN_DIAMETER_M),
        Target::Planet(planet) => Some(planet.mean_diameter_m()),
        Target::FixedStar { .. } => None,
    };
    let angular_diameter_deg =
        diameter_m.map(|diameter| 2.0 * atand(diameter / (2.0 * horizontal.dist_m)));

    debug!("{target} seen from {}: {horizontal}", config.observer);

    Ok(ApparentPosition {
        target,
        times,
        light_time_s: light_time_days * SECONDS_PER_DAY,
        heliocentric,
        geocentric_ecliptic,
        trace,
        horizontal,
        angular_diameter_deg,
    })
}
