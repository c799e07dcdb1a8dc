extern crate nyx_frames as nyx;

use nyx::cosmic::NutationTerms;
use nyx::time::{gast_deg, gast_rate_deg_s, gmst_deg, julian_time};

#[test]
fn sidereal_times() {
    let jt = julian_time(2022, 5, 16, 22, 50, 30.0);
    assert!((gmst_deg(jt) - 217.255_520_082_468_1).abs() < 1e-10);
    assert!((gast_deg(jt, None) - 217.251_759_473_373_3).abs() < 1e-10);
    assert_eq!(gast_deg(jt, Some(NutationTerms::at(jt))), gast_deg(jt, None));
}

#[test]
fn sofa_gmst() {
    assert!((gmst_deg(2_458_849.5) - 100.121_820_928_528_9).abs() < 1e-10);
}

#[test]
fn one_sidereal_day() {
    let jt = julian_time(2022, 5, 16, 0, 0, 0.0);
    let rate_deg_s = gast_rate_deg_s(jt);
    // 23 h 56 min 4.0905 s
    let sidereal_day_s = 86_164.090_5;
    assert!((rate_deg_s * sidereal_day_s - 360.0).abs() < 1e-5);
    // An hour later, within the same UT1 day
    let delta_deg = gmst_deg(jt + 1.0 / 24.0) - gmst_deg(jt);
    assert!((delta_deg - rate_deg_s * 3_600.0).abs() < 1e-6);
}
