extern crate nyx_frames as nyx;
extern crate pretty_env_logger as pel;

use super::assert_vec_close;
use nyx::cosmic::geodetic::WGS84_SEMI_MAJOR_AXIS_M;
use nyx::cosmic::{Geodetic, GeodeticSolver};
use nyx::linalg::Vector3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rstest::*;

#[test]
fn random_round_trips() {
    let _ = pel::try_init();
    let mut rng = Pcg64Mcg::new(0x5eed);
    let solver = GeodeticSolver::default();
    for _ in 0..1_000 {
        let position = Geodetic::new(
            rng.gen_range(-89.9..89.9),
            rng.gen_range(-180.0..180.0),
            rng.gen_range(-400.0..4e7),
        );
        let r_efi = position.to_efi();
        let solution = solver.efi_to_wgs84(&r_efi).unwrap();
        assert!(solution.converged, "{position} did not converge");
        assert!(solution.iterations <= 5);
        let back = solution.into_result().unwrap();
        assert_vec_close(&back.to_efi(), &r_efi, 1e-3, "EFI -> WGS84 -> EFI");
        assert!((back.lat_deg - position.lat_deg).abs() < 1e-9);
        assert!((back.height_m - position.height_m).abs() < 1e-3);
    }
    // Fresh seed, as a smoke test of the default solver
    let mut rng = Pcg64Mcg::seed_from_u64(0x0bad_5eed);
    let position = Geodetic::new(rng.gen_range(-60.0..60.0), 10.0, 100.0);
    let back = solver
        .efi_to_wgs84(&position.to_efi())
        .unwrap()
        .into_result()
        .unwrap();
    assert!((back.height_m - 100.0).abs() < 1e-3);
}

#[rstest]
#[case(Vector3::new(WGS84_SEMI_MAJOR_AXIS_M, 0.0, 0.0), 0.0, 0.0, 0.0)]
#[case(Vector3::new(0.0, WGS84_SEMI_MAJOR_AXIS_M + 1_000.0, 0.0), 0.0, 90.0, 1_000.0)]
#[case(Vector3::new(-WGS84_SEMI_MAJOR_AXIS_M - 10.0, 0.0, 0.0), 0.0, 180.0, 10.0)]
#[case(Vector3::new(0.0, 0.0, -6_356_752.314_245), -90.0, 0.0, 0.0)]
fn cardinal_points(
    #[case] r_efi: Vector3<f64>,
    #[case] lat_deg: f64,
    #[case] lon_deg: f64,
    #[case] height_m: f64,
) {
    let position = GeodeticSolver::default()
        .efi_to_wgs84(&r_efi)
        .unwrap()
        .position;
    assert!((position.lat_deg - lat_deg).abs() < 1e-9, "{position}");
    assert!((position.lon_deg - lon_deg).abs() < 1e-9, "{position}");
    assert!((position.height_m - height_m).abs() < 1e-3, "{position}");
}

#[test]
fn default_observer() {
    let observer = Geodetic::default();
    assert_eq!(observer.lat_deg, 61.494_576_3);
    assert_eq!(observer.lon_deg, 23.8283);
    assert_eq!(observer.height_m, 121.9157);
}
