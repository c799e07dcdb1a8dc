extern crate nyx_frames as nyx;
extern crate pretty_env_logger as pel;

use super::*;
use nyx::cosmic::frames::*;
use nyx::cosmic::topocentric::{efi_to_enu, enu_to_efi};
use nyx::cosmic::{Geodetic, GeodeticSolver, Horizontal, NutationTerms, PolarMotion};
use rand::Rng;
use rand_pcg::Pcg64Mcg;

const POS_TOL_M: f64 = 1.0;
const VEL_TOL_M_S: f64 = 1e-4;

fn observer() -> Geodetic {
    Geodetic::new(60.205_49, 24.0206, 0.0)
}

#[test]
fn ecliptic_j2000() {
    let _ = pel::try_init();
    let j2000 = ecliptic_to_j2000(&venus_ecliptic());
    assert_state_close(&j2000, &venus_j2000(), POS_TOL_M, VEL_TOL_M_S, "Ecl -> J2000");
    assert_eq!(j2000.jt, VENUS_JT);
    let ecl = j2000_to_ecliptic(&venus_j2000());
    assert_state_close(&ecl, &venus_ecliptic(), POS_TOL_M, VEL_TOL_M_S, "J2000 -> Ecl");
}

#[test]
fn j2000_mod() {
    let _ = pel::try_init();
    let mod_state = j2000_to_mod(&venus_j2000());
    assert_state_close(&mod_state, &venus_mod(), POS_TOL_M, VEL_TOL_M_S, "J2000 -> MoD");
    let j2000 = mod_to_j2000(&venus_mod());
    assert_state_close(&j2000, &venus_j2000(), POS_TOL_M, VEL_TOL_M_S, "MoD -> J2000");
}

#[test]
fn mod_tod() {
    let _ = pel::try_init();
    let tod = mod_to_tod(&venus_mod(), None);
    assert_state_close(&tod, &venus_tod(), POS_TOL_M, VEL_TOL_M_S, "MoD -> ToD");
    // Precomputed terms give the same result
    let nutation = NutationTerms::at(VENUS_JT);
    assert_eq!(mod_to_tod(&venus_mod(), Some(nutation)), tod);
    let mod_state = tod_to_mod(&venus_tod(), Some(nutation));
    assert_state_close(&mod_state, &venus_mod(), POS_TOL_M, VEL_TOL_M_S, "ToD -> MoD");
}

#[test]
fn tod_pef() {
    let _ = pel::try_init();
    let pef = tod_to_pef(&venus_tod(), None);
    assert_state_close(&pef, &venus_pef(), POS_TOL_M, VEL_TOL_M_S, "ToD -> PEF");
    // The rotation about the pole keeps the third components
    assert_eq!(pef.radius_m.z, venus_tod().radius_m.z);
    assert_eq!(pef.velocity_m_s.z, venus_tod().velocity_m_s.z);
    let tod = pef_to_tod(&venus_pef(), None);
    assert_state_close(&tod, &venus_tod(), POS_TOL_M, VEL_TOL_M_S, "PEF -> ToD");
}

#[test]
fn pef_efi() {
    let _ = pel::try_init();
    let pm = PolarMotion::new(0.1, 0.2);
    let efi = pef_to_efi(&venus_pef(), pm);
    assert_state_close(&efi, &venus_efi(), POS_TOL_M, VEL_TOL_M_S, "PEF -> EFI");
    let pef = efi_to_pef(&venus_efi(), pm);
    assert_state_close(&pef, &venus_pef(), POS_TOL_M, VEL_TOL_M_S, "EFI -> PEF");
    // No polar motion is the identity
    assert_eq!(pef_to_efi(&venus_pef(), PolarMotion::default()), venus_pef());
}

#[test]
fn efi_wgs84() {
    let _ = pel::try_init();
    let solver = GeodeticSolver::builder().max_iter(10).tolerance(1e-16).build();
    let geodetic = solver.efi_to_wgs84(&venus_efi().radius_m).unwrap().position;
    assert!((geodetic.lat_deg + 14.027_350_356_545_04).abs() < 1e-6);
    assert!((geodetic.lon_deg - 149.020_524_760_317_6).abs() < 1e-6);
    assert!((geodetic.height_m - 105_596_252_409.946_8).abs() < 100.0);
    assert_vec_close(&geodetic.to_efi(), &venus_efi().radius_m, 1.0, "WGS84 -> EFI");
}

#[test]
fn efi_enu() {
    let _ = pel::try_init();
    let enu = efi_to_enu(&venus_efi(), &observer());
    assert_state_close(&enu, &venus_enu(), POS_TOL_M, VEL_TOL_M_S, "EFI -> ENU");
    let efi = enu_to_efi(&venus_enu(), &observer());
    assert_state_close(&efi, &venus_efi(), POS_TOL_M, VEL_TOL_M_S, "ENU -> EFI");
}

#[test]
fn enu_azel() {
    let _ = pel::try_init();
    let hz = Horizontal::from_enu(&venus_enu()).unwrap();
    assert!((hz.az_deg - 65.482_266_914_168_35).abs() < 1e-8);
    assert!((hz.el_deg + 29.136_787_805_434_64).abs() < 1e-8);
    assert!((hz.dist_m - venus_enu().rmag_m()).abs() < 1e-3);
    assert_vec_close(&hz.to_enu().radius_m, &venus_enu().radius_m, 1.0, "AzEl -> ENU");
}

#[test]
fn perifocal_inertial() {
    let _ = pel::try_init();
    let per = StateVector::cartesian(
        2.593_281_124_802_49e10,
        1.468_514_157_356_373e11,
        0.0,
        -2.933_489_929_039_629e4,
        5.677_830_279_125_575e3,
        0.0,
        VENUS_JT,
    );
    let (raan, inc, aop) = (347.614_048_401_001_7, 359.997_107_366_185_2, -244.604_520_797_587_5);
    let expected = StateVector::cartesian(
        -1.489_199_431_961_666e11,
        -7.790_989_491_059_203e9,
        1.996_839_980_819_461e6,
        1.071_574_068_660_73e3,
        -2.986_010_381_659_133e4,
        1.460_825_013_954_209,
        VENUS_JT,
    );
    let inertial = perifocal_to_inertial(&per, raan, inc, aop);
    assert_state_close(&inertial, &expected, POS_TOL_M, VEL_TOL_M_S, "Perifocal -> Inertial");
    let back = inertial_to_perifocal(&inertial, raan, inc, aop);
    assert_state_close(&back, &per, 1e-3, 1e-9, "Inertial -> Perifocal");
}

#[test]
fn rotation_composition() {
    use nyx::cosmic::{rotate1, rotate2, rotate3, EulerRotation, EulerSequence};
    let p = Vector3::new(1.0, 2.0, 3.0);
    for angle in [0.0, 90.0, 180.0, 270.0, 360.0, -45.0, 12.3] {
        assert_vec_close(&rotate1(&rotate1(&p, angle), -angle), &p, 1e-14, "R1");
        assert_vec_close(&rotate2(&rotate2(&p, angle), -angle), &p, 1e-14, "R2");
        assert_vec_close(&rotate3(&rotate3(&p, angle), -angle), &p, 1e-14, "R3");
    }
    let seq = EulerSequence([
        EulerRotation::R3(30.0),
        EulerRotation::R1(-20.0),
        EulerRotation::R2(75.0),
    ]);
    assert_vec_close(&seq.inverse().apply(&seq.apply(&p)), &p, 1e-14, "sequence");
    assert_vec_close(&(seq.dcm() * p), &seq.apply(&p), 1e-14, "DCM");
}

fn assert_relative_round_trip(back: &StateVector, state: &StateVector, msg: &str) {
    let dr = (back.radius_m - state.radius_m).norm() / state.rmag_m();
    let dv = (back.velocity_m_s - state.velocity_m_s).norm() / state.vmag_m_s().max(1.0);
    assert!(dr < 1e-6 && dv < 1e-6, "{msg}: dr = {dr:.3e}, dv = {dv:.3e} for {state}");
    assert_eq!(back.jt, state.jt, "{msg}");
}

#[test]
fn random_round_trips() {
    let _ = pel::try_init();
    let mut rng = Pcg64Mcg::new(0xf4a3_e5);
    for _ in 0..2_000 {
        let unit = |rng: &mut Pcg64Mcg| {
            Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
            .normalize()
        };
        // 1900 to 2100
        let jt = rng.gen_range(2_415_020.5..2_488_069.5);
        let state = StateVector::new(
            unit(&mut rng) * rng.gen_range(6.4e6..1e12),
            unit(&mut rng) * rng.gen_range(1.0..4e4),
            jt,
        );
        let nutation = if rng.gen_bool(0.5) {
            Some(NutationTerms::at(jt))
        } else {
            None
        };
        let pm = PolarMotion::from_arcsec(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let observer = Geodetic::new(
            rng.gen_range(-90.0..90.0),
            rng.gen_range(-180.0..180.0),
            rng.gen_range(-400.0..9e3),
        );
        let (raan, inc, aop) = (
            rng.gen_range(0.0..360.0),
            rng.gen_range(0.0..180.0),
            rng.gen_range(-180.0..180.0),
        );

        assert_relative_round_trip(
            &j2000_to_ecliptic(&ecliptic_to_j2000(&state)),
            &state,
            "Ecl <-> J2000",
        );
        assert_relative_round_trip(&mod_to_j2000(&j2000_to_mod(&state)), &state, "J2000 <-> MoD");
        assert_relative_round_trip(
            &tod_to_mod(&mod_to_tod(&state, nutation), nutation),
            &state,
            "MoD <-> ToD",
        );
        assert_relative_round_trip(
            &pef_to_tod(&tod_to_pef(&state, nutation), nutation),
            &state,
            "ToD <-> PEF",
        );
        assert_relative_round_trip(&efi_to_pef(&pef_to_efi(&state, pm), pm), &state, "PEF <-> EFI");
        assert_relative_round_trip(
            &enu_to_efi(&efi_to_enu(&state, &observer), &observer),
            &state,
            "EFI <-> ENU",
        );
        assert_relative_round_trip(
            &perifocal_to_inertial(&inertial_to_perifocal(&state, raan, inc, aop), raan, inc, aop),
            &state,
            "Perifocal <-> Inertial",
        );
    }
}
