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

use crate::errors::MathError;
use snafu::Snafu;

/// The elementary axis rotations, the only rotation logic of the frame ladder.
pub mod rotations;
pub use self::rotations::{rotate1, rotate2, rotate3, Euler3Axis, EulerRotation, EulerSequence};

mod state;
pub use self::state::StateVector;

/// IAU 1980 nutation and the obliquity of the ecliptic.
pub mod nutation;
pub use self::nutation::NutationTerms;

/// Every single rung of the frame ladder, as forward and inverse pairs.
pub mod frames;
pub use self::frames::{Frame, PolarMotion};

/// WGS84 geodetic coordinates.
pub mod geodetic;
pub use self::geodetic::{Geodetic, GeodeticSolution, GeodeticSolver};

/// Local East-North-Up frame, horizontal coordinates and refraction.
pub mod topocentric;
pub use self::topocentric::{Horizontal, RefractionParameters};

/// Kepler equation and perifocal states.
pub mod kepler;
pub use self::kepler::KeplerSolver;

mod elements;
pub use self::elements::KeplerianElements;

/// Approximate Keplerian elements of the planets.
pub mod planets;
pub use self::planets::Planet;

/// Stellar and diurnal aberration.
pub mod aberration;

/// Composed walks along the frame ladder.
pub mod ladder;
pub use self::ladder::{Corrections, FrameContext, LadderTrace};

/// Apparent topocentric positions of the Sun, the planets and the stars.
pub mod apparent;
pub use self::apparent::{ApparentPosition, ObservationConfig, Target};

/// Speed of light in vacuum, in m/s
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;
/// Astronomical unit, in meters (IAU 2012)
pub const AU_M: f64 = 149_597_870_700.0;
/// Gravitational parameter of the Sun, in m^3/s^2
pub const SUN_GM_M3_S2: f64 = 1.327_124_400_18e20;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AstroError {
    #[snafu(display(
        "Kepler equation did not converge within {iterations} iterations, last eccentric anomaly {last_ea_deg} deg"
    ))]
    KeplerNonConvergence { last_ea_deg: f64, iterations: usize },
    #[snafu(display(
        "geodetic coordinates did not converge within {iterations} iterations, last estimate {last}"
    ))]
    GeodeticNonConvergence { last: Geodetic, iterations: usize },
    #[snafu(display("invalid orbit: {msg}"))]
    InvalidOrbit { msg: String },
    #[snafu(display("transforming from {from} to {to} requires {what}"))]
    MissingParameter {
        from: Frame,
        to: Frame,
        what: &'static str,
    },
    #[snafu(display("{planet} cannot be observed from the surface of the Earth"))]
    UnobservableTarget { planet: Planet },
    #[snafu(display("{frame} is not supported for {action}"))]
    UnsupportedFrame { frame: Frame, action: &'static str },
    #[snafu(display("math error during {action}: {source}"))]
    AstroMath {
        source: MathError,
        action: &'static str,
    },
}
