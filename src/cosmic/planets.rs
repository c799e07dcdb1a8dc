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

use super::kepler::true_anomaly_deg;
use super::{AstroError, KeplerSolver, KeplerianElements, StateVector, SUN_GM_M3_S2};
use crate::time::centuries_since_j2000;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// Astronomical unit used by the mean element tables, in meters
const TABLE_AU_M: f64 = 1.495_978_707e11;

/// Mean diameter of the Sun, in meters
pub const SUN_DIAMETER_M: f64 = 1.3927e9;

/// Mean elements at J2000 and their rates per Julian century, valid from 1800 to 2050 (Standish, JPL).
#[derive(Copy, Clone, Debug)]
struct MeanElements {
    /// Semi major axis, in AU
    a: [f64; 2],
    ecc: [f64; 2],
    inc: [f64; 2],
    mean_lon: [f64; 2],
    peri_lon: [f64; 2],
    node_lon: [f64; 2],
}

impl MeanElements {
    const fn new(
        a: [f64; 2],
        ecc: [f64; 2],
        inc: [f64; 2],
        mean_lon: [f64; 2],
        peri_lon: [f64; 2],
        node_lon: [f64; 2],
    ) -> Self {
        Self {
            a,
            ecc,
            inc,
            mean_lon,
            peri_lon,
            node_lon,
        }
    }
}

const MERCURY: MeanElements = MeanElements::new(
    [0.387_099_27, 0.000_000_37],
    [0.205_635_93, 0.000_019_06],
    [7.004_979_02, -0.005_947_49],
    [252.250_323_5, 149_472.674_111_75],
    [77.457_796_28, 0.160_476_89],
    [48.330_765_93, -0.125_340_81],
);

const VENUS: MeanElements = MeanElements::new(
    [0.723_335_66, 0.000_003_9],
    [0.006_776_72, -0.000_041_07],
    [3.394_676_05, -0.000_788_9],
    [181.979_099_5, 58_517.815_387_29],
    [131.602_467_18, 0.002_683_29],
    [76.679_842_55, -0.277_694_18],
);

const EARTH: MeanElements = MeanElements::new(
    [1.000_002_61, 0.000_005_62],
    [0.016_711_23, -0.000_043_92],
    [-0.000_015_31, -0.012_946_68],
    [100.464_571_66, 35_999.372_449_81],
    [102.937_681_93, 0.323_273_64],
    [-11.260_64, -5.063_402_7],
);

const MARS: MeanElements = MeanElements::new(
    [1.523_710_34, 0.000_018_47],
    [0.093_394_1, 0.000_078_82],
    [1.849_691_42, -0.008_131_31],
    [-4.553_432_05, 19_140.302_684_99],
    [-23.943_629_59, 0.444_410_88],
    [49.559_538_91, -0.292_573_43],
);

const JUPITER: MeanElements = MeanElements::new(
    [5.202_887, -0.000_116_07],
    [0.048_386_24, -0.000_132_53],
    [1.304_396_95, -0.001_837_14],
    [34.396_440_51, 3_034.746_127_75],
    [14.728_479_83, 0.212_526_68],
    [100.473_909_09, 0.204_691_06],
);

const SATURN: MeanElements = MeanElements::new(
    [9.536_675_94, -0.001_250_6],
    [0.053_861_79, -0.000_509_91],
    [2.485_991_87, 0.001_936_09],
    [49.954_244_23, 1_222.493_622_01],
    [92.598_878_31, -0.418_972_16],
    [113.662_424_48, -0.288_677_94],
);

const URANUS: MeanElements = MeanElements::new(
    [19.189_164_64, -0.001_961_76],
    [0.047_257_44, -0.000_043_97],
    [0.772_637_83, -0.002_429_39],
    [313.238_104_51, 428.482_027_85],
    [170.954_276_3, 0.408_052_81],
    [74.016_925_03, 0.042_405_89],
);

const NEPTUNE: MeanElements = MeanElements::new(
    [30.069_922_76, 0.000_262_91],
    [0.008_590_48, 0.000_051_05],
    [1.770_043_47, 0.000_353_72],
    [-55.120_029_69, 218.459_453_25],
    [44.964_762_27, -0.322_414_64],
    [131.784_225_74, -0.005_086_64],
);

/// The eight planets, whose heliocentric ecliptic positions are computed from mean Keplerian elements.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Self; 8] = [
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    fn mean_elements(&self) -> &'static MeanElements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Earth => &EARTH,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
            Self::Uranus => &URANUS,
            Self::Neptune => &NEPTUNE,
        }
    }

    /// Mean diameter in meters
    pub fn mean_diameter_m(&self) -> f64 {
        match self {
            Self::Mercury => 4_879_400.0,
            Self::Venus => 12_104_000.0,
            Self::Earth => 12_742_000.0,
            Self::Mars => 6_779_000.0,
            Self::Jupiter => 139_820_000.0,
            Self::Saturn => 116_460_000.0,
            Self::Uranus => 50_724_000.0,
            Self::Neptune => 49_244_000.0,
        }
    }

    /// Heliocentric Keplerian elements with respect to the ecliptic and mean equinox of J2000, at the provided Julian time (TDB).
    pub fn elements(&self, jt: f64) -> Result<KeplerianElements, AstroError> {
        let t = centuries_since_j2000(jt);
        let mean = self.mean_elements();
        let at = |coeffs: [f64; 2]| coeffs[0] + coeffs[1] * t;

        let sma_m = TABLE_AU_M * at(mean.a);
        let ecc = at(mean.ecc);
        let peri_lon_deg = at(mean.peri_lon);
        let raan_deg = at(mean.node_lon);
        let ma_deg = at(mean.mean_lon) - peri_lon_deg;
        let ea_deg = KeplerSolver::builder()
            .tolerance(1e-6)
            .build()
            .solve(ma_deg, ecc)?;

        Ok(KeplerianElements {
            sma_m,
            smi_m: sma_m * (1.0 - ecc.powi(2)).sqrt(),
            ecc,
            inc_deg: at(mean.inc),
            raan_deg,
            aop_deg: peri_lon_deg - raan_deg,
            ea_deg,
            ma_deg,
            ta_deg: true_anomaly_deg(ea_deg, ecc),
            gm_m3_s2: SUN_GM_M3_S2,
            jt,
        })
    }

    /// Heliocentric ecliptic state at the provided Julian time (TDB).
    pub fn state_ecliptic(&self, jt: f64) -> Result<StateVector, AstroError> {
        let state = self.elements(jt)?.to_state()?;
        debug!("{self} at JT {jt:.6}: {state:e}");
        Ok(state)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        };
        write!(f, "{name}")
    }
}
