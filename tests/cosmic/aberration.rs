extern crate nyx_frames as nyx;
extern crate pretty_env_logger as pel;

use super::assert_vec_close;
use nyx::cosmic::aberration::{
    aberration_stellar_cart, aberration_stellar_radec, earth_velocity_j2000,
};
use nyx::cosmic::AstroError;
use nyx::linalg::Vector3;
use nyx::StateVector;

const VEGA_JT: f64 = 2.459_659_458_332_178e6;

fn vega() -> StateVector {
    StateVector::at_rest(
        Vector3::new(
            1.250_964_636_332_911e24,
            -7.694_131_278_689_816e24,
            6.263_819_229_905_307e24,
        ),
        VEGA_JT,
    )
}

fn vega_apparent() -> Vector3<f64> {
    Vector3::new(
        1.250_891_664_149_846e24,
        -7.694_700_506_965_913e24,
        6.263_134_530_940_476e24,
    )
}

#[test]
fn vega_with_diurnal_velocity() {
    let _ = pel::try_init();
    let observer_velocity = Vector3::new(
        0.290_007_812_179_439e2,
        -2.298_670_535_956_016e2,
        -0.000_564_533_814_336e2,
    );
    let apparent = aberration_stellar_cart(&vega(), Some(observer_velocity)).unwrap();
    // About 18.4 arcsec on a distance of 1e25 m
    assert_vec_close(&apparent.radius_m, &vega_apparent(), 2e16, "Vega apparent");
    assert!((apparent.rmag_m() - vega().rmag_m()).abs() / vega().rmag_m() < 1e-12);
    assert_eq!(apparent.velocity_m_s, Vector3::zeros());
    assert_eq!(apparent.jt, VEGA_JT);
}

#[test]
fn vega_annual_only() {
    let _ = pel::try_init();
    let apparent = aberration_stellar_cart(&vega(), None).unwrap();
    // The diurnal term is worth about 0.1 arcsec
    assert_vec_close(&apparent.radius_m, &vega_apparent(), 5e18, "Vega annual");
    let shift_arcsec = vega().radius_m.angle(&apparent.radius_m).to_degrees() * 3600.0;
    assert!((shift_arcsec - 18.33).abs() < 0.01, "{shift_arcsec}");
}

#[test]
fn earth_velocity_at_vega_epoch() {
    let velocity = earth_velocity_j2000(VEGA_JT);
    assert_vec_close(
        &velocity,
        &Vector3::new(-492.1, -27_440.1, -11_893.7),
        0.1,
        "Earth velocity",
    );
}

#[test]
fn celestial_pole_is_degenerate() {
    assert!(matches!(
        aberration_stellar_radec(VEGA_JT, 0.0, 90.0, None),
        Err(AstroError::AstroMath { .. })
    ));
    let (ra, dec) = aberration_stellar_radec(VEGA_JT, 279.234_734_8, 38.783_688_96, None).unwrap();
    assert!((ra - 279.234_734_8).abs() < 0.01);
    assert!((dec - 38.783_688_96).abs() < 0.01);
}
