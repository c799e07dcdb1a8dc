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

//! The frame ladder, walked one edge at a time.
//!
//! ```text
//! Ecliptic <-> EquatorialJ2000 <-> MeanOfDate <-> TrueOfDate <-> PseudoEarthFixed <-> EarthFixed <-> Topocentric
//! ```
//!
//! [`convert`] is the entry point: it only ever crosses adjacent rungs, in order, and switches the Julian time of the state
//! from TDB to UT1 when entering the Earth fixed frames (and back when leaving them).

use super::frames::{
    ecliptic_to_j2000, efi_to_pef, j2000_to_ecliptic, j2000_to_mod, mod_to_j2000, mod_to_tod,
    pef_to_efi, pef_to_tod, tod_to_mod, tod_to_pef,
};
use super::topocentric::{efi_to_enu, enu_to_efi};
use super::{
    AstroError, Frame, Geodetic, Horizontal, MissingParameterSnafu, NutationTerms, PolarMotion,
    RefractionParameters, StateVector, UnsupportedFrameSnafu,
};
use crate::linalg::Vector3;
use crate::time::JulianTimes;
use serde_derive::{Deserialize, Serialize};
use snafu::OptionExt;
use std::fmt;
use typed_builder::TypedBuilder;

/// Physical corrections applied when computing apparent positions.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(default)]
pub struct Corrections {
    #[builder(default = true)]
    pub light_time: bool,
    #[builder(default = true)]
    pub stellar_aberration: bool,
    /// Adds the rotation velocity of the observer to the stellar aberration
    #[builder(default = true)]
    pub diurnal_aberration: bool,
    #[builder(default = true)]
    pub polar_motion: bool,
    #[builder(default = false)]
    pub refraction: bool,
    #[builder(default)]
    pub refraction_params: RefractionParameters,
}

impl Default for Corrections {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Everything a walk on the ladder may need besides the state itself.
///
/// Without `times`, the Julian time of the state is kept as is when crossing into the Earth fixed frames.
/// Without `nutation`, the nutation terms are evaluated once per walk at the TDB time.
#[derive(Copy, Clone, Debug, Default, PartialEq, TypedBuilder)]
#[builder(doc)]
pub struct FrameContext {
    #[builder(default, setter(strip_option))]
    pub times: Option<JulianTimes>,
    #[builder(default, setter(strip_option))]
    pub nutation: Option<NutationTerms>,
    #[builder(default)]
    pub polar_motion: PolarMotion,
    #[builder(default, setter(strip_option))]
    pub observer: Option<Geodetic>,
}

/// Every state visited by a walk on the ladder, the input included.
#[derive(Clone, Debug, PartialEq)]
pub struct LadderTrace {
    pub states: Vec<(Frame, StateVector)>,
    pub output: StateVector,
}

impl LadderTrace {
    /// State of the walk in the provided frame, if the walk went through it.
    pub fn get(&self, frame: Frame) -> Option<&StateVector> {
        self.states
            .iter()
            .find_map(|(visited, state)| (*visited == frame).then_some(state))
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.states.iter().map(|(frame, _)| *frame)
    }
}

impl fmt::Display for LadderTrace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (frame, state) in &self.states {
            writeln!(f, "{frame:>16}: {state:e}")?;
        }
        Ok(())
    }
}

struct Walk<'a> {
    from: Frame,
    to: Frame,
    ctx: &'a FrameContext,
    nutation: Option<NutationTerms>,
}

impl Walk<'_> {
    fn observer(&self) -> Result<&Geodetic, AstroError> {
        self.ctx.observer.as_ref().context(MissingParameterSnafu {
            from: self.from,
            to: self.to,
            what: "the observer location",
        })
    }

    /// Crosses the edge from `rung` to `rung + 1`.
    fn down(&self, state: &StateVector, rung: usize) -> Result<(Frame, StateVector), AstroError> {
        Ok(match rung {
            0 => (Frame::EquatorialJ2000, ecliptic_to_j2000(state)),
            1 => (Frame::MeanOfDate, j2000_to_mod(state)),
            2 => (Frame::TrueOfDate, mod_to_tod(state, self.nutation)),
            3 => {
                let tod = match self.ctx.times {
                    Some(times) => state.with_jt(times.ut1),
                    None => *state,
                };
                (Frame::PseudoEarthFixed, tod_to_pef(&tod, self.nutation))
            }
            4 => (
                Frame::EarthFixed,
                pef_to_efi(state, self.ctx.polar_motion),
            ),
            _ => (Frame::Topocentric, efi_to_enu(state, self.observer()?)),
        })
    }

    /// Crosses the edge from `rung` to `rung - 1`.
    fn up(&self, state: &StateVector, rung: usize) -> Result<(Frame, StateVector), AstroError> {
        Ok(match rung {
            6 => (Frame::EarthFixed, enu_to_efi(state, self.observer()?)),
            5 => (
                Frame::PseudoEarthFixed,
                efi_to_pef(state, self.ctx.polar_motion),
            ),
            4 => {
                let tod = pef_to_tod(state, self.nutation);
                let tod = match self.ctx.times {
                    Some(times) => tod.with_jt(times.tdb),
                    None => tod,
                };
                (Frame::TrueOfDate, tod)
            }
            3 => (Frame::MeanOfDate, tod_to_mod(state, self.nutation)),
            2 => (Frame::EquatorialJ2000, mod_to_j2000(state)),
            _ => (Frame::Ecliptic, j2000_to_ecliptic(state)),
        })
    }
}

/// Converts a state from one frame of the ladder to another, recording every intermediate state.
///
/// # Errors
/// + [`AstroError::UnsupportedFrame`] if either frame is not on the ladder (the perifocal frame)
/// + [`AstroError::MissingParameter`] if the walk reaches the topocentric frame without an observer
pub fn convert_traced(
    state: &StateVector,
    from: Frame,
    to: Frame,
    ctx: &FrameContext,
) -> Result<LadderTrace, AstroError> {
    let start = from.rung().context(UnsupportedFrameSnafu {
        frame: from,
        action: "a walk on the frame ladder",
    })?;
    let end = to.rung().context(UnsupportedFrameSnafu {
        frame: to,
        action: "a walk on the frame ladder",
    })?;

    // Edges leaving the MoD and ToD rungs downwards are the only ones depending on nutation
    let (low, high) = (start.min(end), start.max(end));
    let nutation = match ctx.nutation {
        Some(terms) => Some(terms),
        None if (low..high).any(|rung| rung == 2 || rung == 3) => {
            let jt_tdb = ctx.times.map_or(state.jt, |times| times.tdb);
            Some(NutationTerms::at(jt_tdb))
        }
        None => None,
    };

    let walk = Walk {
        from,
        to,
        ctx,
        nutation,
    };

    let mut current = *state;
    let mut current_frame = from;
    let mut states = vec![(from, current)];
    let descending = start < end;
    let rungs: Vec<usize> = if descending {
        (start..end).collect()
    } else {
        (end + 1..=start).rev().collect()
    };

    for rung in rungs {
        let (frame, next) = if descending {
            walk.down(&current, rung)?
        } else {
            walk.up(&current, rung)?
        };
        trace!("{current_frame} -> {frame}: {next:e}");
        current = next;
        current_frame = frame;
        states.push((frame, current));
    }

    Ok(LadderTrace {
        states,
        output: current,
    })
}

/// Converts a state from one frame of the ladder to another.
pub fn convert(
    state: &StateVector,
    from: Frame,
    to: Frame,
    ctx: &FrameContext,
) -> Result<StateVector, AstroError> {
    Ok(convert_traced(state, from, to, ctx)?.output)
}

/// Converts an equatorial J2000 state into the East-North-Up frame of the observer of the context.
pub fn inertial_to_topocentric(
    state_j2000: &StateVector,
    ctx: &FrameContext,
) -> Result<StateVector, AstroError> {
    let enu = convert(state_j2000, Frame::EquatorialJ2000, Frame::Topocentric, ctx)?;
    debug!("J2000 to ENU: {enu:e}");
    Ok(enu)
}

/// Converts a state in the East-North-Up frame of the observer of the context into the equatorial J2000 frame.
pub fn topocentric_to_inertial(
    state_enu: &StateVector,
    ctx: &FrameContext,
) -> Result<StateVector, AstroError> {
    let j2000 = convert(state_enu, Frame::Topocentric, Frame::EquatorialJ2000, ctx)?;
    debug!("ENU to J2000: {j2000:e}");
    Ok(j2000)
}

/// Horizontal coordinates, as seen by the observer of the context, of a geocentric ecliptic state.
pub fn ecliptic_to_horizontal(
    state_ecl: &StateVector,
    ctx: &FrameContext,
) -> Result<Horizontal, AstroError> {
    let enu = convert(state_ecl, Frame::Ecliptic, Frame::Topocentric, ctx)?;
    let horizontal = Horizontal::from_enu(&enu)?;
    debug!("ecliptic to horizontal: {horizontal}");
    Ok(horizontal)
}

/// Velocity in the equatorial J2000 frame of the observer of the context, which is at rest on the ground, at the provided UT1 Julian time.
pub fn observer_velocity_j2000(
    jt_ut1: f64,
    ctx: &FrameContext,
) -> Result<Vector3<f64>, AstroError> {
    let observer = ctx.observer.context(MissingParameterSnafu {
        from: Frame::EarthFixed,
        to: Frame::EquatorialJ2000,
        what: "the observer location",
    })?;
    let at_rest = StateVector::at_rest(observer.to_efi(), jt_ut1);
    let j2000 = convert(&at_rest, Frame::EarthFixed, Frame::EquatorialJ2000, ctx)?;
    Ok(j2000.velocity_m_s)
}
