extern crate nyx_frames as nyx;
extern crate pretty_env_logger as pel;

use nyx::cosmic::apparent::observe;
use nyx::cosmic::{
    AstroError, Corrections, Frame, Geodetic, ObservationConfig, Planet, PolarMotion, Target,
};
use nyx::io::ConfigRepr;
use nyx::time::{julian_time, JulianTimes};
use nyx::utils::angle_diff;
use std::collections::BTreeMap;
use std::path::PathBuf;

const DELTA_T_S: f64 = 69.2;

fn times(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> JulianTimes {
    let ut1 = julian_time(year, month, day, hour, minute, 0.0);
    JulianTimes::new(ut1, ut1 + DELTA_T_S / 86_400.0)
}

fn observers() -> BTreeMap<String, ObservationConfig> {
    let path: PathBuf = [
        env!("CARGO_MANIFEST_DIR"),
        "data",
        "tests",
        "config",
        "observers.yaml",
    ]
    .iter()
    .collect();
    ObservationConfig::load_named(path).unwrap()
}

#[test]
fn sun_at_the_equinoxes_and_solstices() {
    let _ = pel::try_init();
    let config = ObservationConfig::default();

    let march = observe(Target::Sun, times(2022, 3, 20, 15, 33), &config).unwrap();
    let (ra, dec) = march.ra_dec_tod_deg().unwrap();
    assert!(angle_diff(0.0, ra).abs() < 0.01, "RA {ra}");
    assert!(dec.abs() < 0.01, "Dec {dec}");

    let december = observe(Target::Sun, times(2022, 12, 21, 21, 48), &config).unwrap();
    let (ra, dec) = december.ra_dec_tod_deg().unwrap();
    assert!((ra - 270.0).abs() < 0.01, "RA {ra}");
    assert!((dec + 23.435).abs() < 0.01, "Dec {dec}");
    // The Earth is close to its perihelion in December
    assert!(december.angular_diameter_deg.unwrap() > march.angular_diameter_deg.unwrap());
    assert!(december.light_time_s < march.light_time_s);
}

#[test]
fn sun_overhead_at_the_subsolar_point() {
    let _ = pel::try_init();
    let at = times(2022, 6, 21, 9, 14);
    let sun = observe(Target::Sun, at, &ObservationConfig::default()).unwrap();
    let efi = sun.angles(Frame::EarthFixed).unwrap();
    assert!(efi.lon_deg > -180.0 && efi.lon_deg <= 180.0);

    let subsolar = ObservationConfig::builder()
        .observer(Geodetic::new(efi.lat_deg, efi.lon_deg, 0.0))
        .build();
    let overhead = observe(Target::Sun, at, &subsolar).unwrap();
    println!("{overhead}");
    assert!(overhead.horizontal.el_deg > 89.99, "{}", overhead.horizontal);
    // The trace goes all the way from J2000 to the local horizon
    let frames: Vec<Frame> = overhead.trace.frames().collect();
    assert_eq!(frames.first(), Some(&Frame::EquatorialJ2000));
    assert_eq!(frames.last(), Some(&Frame::Topocentric));
    assert_eq!(frames.len(), 6);

    // Antipode
    let antipode = ObservationConfig::builder()
        .observer(Geodetic::new(-efi.lat_deg, efi.lon_deg - 180.0, 0.0))
        .build();
    let below = observe(Target::Sun, at, &antipode).unwrap();
    assert!(below.horizontal.el_deg < -89.99);
}

#[test]
fn jupiter_from_tampere() {
    let _ = pel::try_init();
    let observers = observers();
    let config = &observers["tampere"];
    assert_eq!(config.corrections, Corrections::default());
    let jupiter = observe(
        Target::Planet(Planet::Jupiter),
        times(2022, 6, 21, 9, 14),
        config,
    )
    .unwrap();
    let helio = jupiter.heliocentric.unwrap();
    let geo = jupiter.geocentric_ecliptic.unwrap();
    // Light time within 2% of the geocentric distance
    let light_distance_m = jupiter.light_time_s * 299_792_458.0;
    assert!((light_distance_m / geo.rmag_m() - 1.0).abs() < 0.02);
    assert!(jupiter.light_time_s > 30.0 * 60.0 && jupiter.light_time_s < 55.0 * 60.0);
    assert!(helio.jt < jupiter.times.tdb);
    assert_eq!(geo.jt, jupiter.times.tdb);

    let diameter_arcsec = jupiter.angular_diameter_deg.unwrap() * 3600.0;
    assert!(diameter_arcsec > 29.0 && diameter_arcsec < 51.0, "{diameter_arcsec}");

    let topo = jupiter.angles(Frame::Topocentric).unwrap();
    assert_eq!(topo.lon_deg, jupiter.horizontal.az_deg);
    assert!((topo.dist_m - geo.rmag_m()).abs() < 7e6);
}

#[test]
fn configurations_from_yaml() {
    let _ = pel::try_init();
    let observers = observers();
    assert_eq!(observers.len(), 3);

    let refracted = &observers["espoo_refracted"];
    assert_eq!(refracted.observer, Geodetic::new(60.205_49, 24.0206, 0.0));
    assert!(refracted.corrections.refraction);
    assert!(refracted.corrections.light_time);
    assert_eq!(refracted.corrections.refraction_params.temperature_c, -5.0);
    assert_eq!(refracted.polar_motion, PolarMotion::new(0.1, 0.2));

    let bare = &observers["geocentric_ish"];
    assert_eq!(bare.observer, Geodetic::default());
    assert!(!bare.corrections.light_time);
    assert!(!bare.corrections.stellar_aberration);
    assert!(bare.corrections.diurnal_aberration);

    let at = times(2022, 6, 21, 9, 14);
    let sun = observe(Target::Sun, at, bare).unwrap();
    assert_eq!(sun.light_time_s, 0.0);

    let from_str = ObservationConfig::loads("corrections:\n  refraction: true\n").unwrap();
    assert!(from_str.corrections.refraction);
    assert_eq!(from_str.observer, Geodetic::default());
    assert!(ObservationConfig::loads("observer: [1, 2]").is_err());

    let many =
        ObservationConfig::loads_many("- {}\n- polar_motion: {xp_deg: 0.1, yp_deg: 0.0}\n")
            .unwrap();
    assert_eq!(many.len(), 2);
    assert_eq!(many[0], ObservationConfig::default());
}

#[test]
fn vega_rises_with_refraction() {
    let _ = pel::try_init();
    let vega = Target::FixedStar {
        ra_deg: 279.234_734_8,
        dec_deg: 38.783_688_96,
        distance_m: 2.4e17,
    };
    let at = times(2022, 3, 23, 23, 0);
    let observers = observers();
    let refracted = observe(vega, at, &observers["espoo_refracted"]).unwrap();
    let plain_config = ObservationConfig::builder()
        .observer(Geodetic::new(60.205_49, 24.0206, 0.0))
        .polar_motion(PolarMotion::new(0.1, 0.2))
        .build();
    let plain = observe(vega, at, &plain_config).unwrap();
    let lift = refracted.horizontal.el_deg - plain.horizontal.el_deg;
    assert!(lift > 0.0 && lift < 0.6, "{lift}");
    assert_eq!(refracted.trace, plain.trace);
    assert!(matches!(
        plain.angles(Frame::Ecliptic),
        Err(AstroError::UnsupportedFrame { .. })
    ));
}

#[test]
fn earth_cannot_be_observed() {
    let err = observe(
        Target::Planet(Planet::Earth),
        times(2022, 6, 21, 9, 14),
        &ObservationConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        format!("{err}"),
        "Earth cannot be observed from the surface of the Earth"
    );
}
