extern crate nyx_frames as nyx;

use nyx::time::{
    centuries_since_j2000, epoch_from_jt_tdb, julian_day, julian_time, Epoch, GregorianTime,
    JulianTimes, J2000_JT,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rstest::*;

#[rstest]
#[case(2022, 5, 15, 23, 53, 20.0, 2_459_715.495_370_370_3)]
#[case(2000, 1, 1, 12, 0, 0.0, J2000_JT)]
#[case(1992, 8, 20, 12, 14, 0.0, 2_448_855.009_722_222)]
#[case(1600, 12, 31, 0, 0, 0.0, 2_305_812.5)]
fn calendar_to_julian(
    #[case] year: i32,
    #[case] month: u8,
    #[case] day: u8,
    #[case] hour: u8,
    #[case] minute: u8,
    #[case] second: f64,
    #[case] expected: f64,
) {
    let jt = julian_time(year, month, day, hour, minute, second);
    assert!((jt - expected).abs() < 1e-8, "{jt} != {expected}");
    let greg = GregorianTime::from_jt(jt);
    assert_eq!((greg.year, greg.month, greg.day), (year, month, day));
}

#[test]
fn gregorian_round_trips() {
    let mut rng = Pcg64Mcg::new(0x7ea1);
    for _ in 0..1000 {
        // 1900 to 2100
        let jt = rng.gen_range(2_415_020.5..2_488_069.5);
        let greg = GregorianTime::from_jt(jt);
        assert!((1..=12).contains(&greg.month));
        assert!((1..=31).contains(&greg.day));
        assert!(greg.hour < 24 && greg.minute < 60);
        assert!((0.0..60.0).contains(&greg.second));
        // Sub-millisecond, the Julian time only carries about 40 microseconds of resolution
        assert!(
            ((greg.to_jt() - jt) * 86_400.0).abs() < 1e-3,
            "{greg} vs JT {jt}"
        );
    }
}

#[test]
fn hifitime_consistency() {
    let epoch = Epoch::from_gregorian_utc_hms(2022, 3, 20, 15, 33, 0);
    let times = JulianTimes::from_epoch(epoch, 0.0);
    assert!((times.ut1 - julian_time(2022, 3, 20, 15, 33, 0.0)).abs() < 1e-8);
    assert!(times.tdb > times.ut1);

    // Going back to an epoch from the TDB Julian time
    let back = epoch_from_jt_tdb(times.tdb);
    assert!((back - epoch).abs().to_seconds() < 1e-3);

    assert!((centuries_since_j2000(J2000_JT + 36_525.0) - 1.0).abs() < 1e-15);
    assert_eq!(julian_day(2022, 1, 1) + 0.5, julian_time(2022, 1, 1, 12, 0, 0.0));
}
