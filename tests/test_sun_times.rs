use chrono::{NaiveDate, Timelike};

use sun_position::angles::{solar_position, solar_position_at};
use sun_position::sun_times::*;
use sun_position::types::SunEvents;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const NEW_YORK: (f64, f64) = (40.7128, -74.0060);
const KHARTOUM: (f64, f64) = (15.5007, 32.5599);
const LONDON: (f64, f64) = (51.5074, -0.1278);
const SYDNEY: (f64, f64) = (-33.8688, 151.2093);
const REYKJAVIK: (f64, f64) = (64.1466, -21.9426);

fn hhmm(lat_lon: (f64, f64), d: NaiveDate) -> (String, String) {
    display_times(sunrise_sunset(lat_lon.0, lat_lon.1, d))
}

// ── Helpers ──

#[test]
fn test_minutes_to_time() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(90), (1, 30));
    assert_eq!(minutes_to_time(1439), (23, 59));
}

#[test]
fn test_intervals_per_day() {
    assert_eq!(intervals_per_day(60), 24);
    assert_eq!(intervals_per_day(15), 96);
    assert_eq!(intervals_per_day(1440), 1);
}

#[test]
fn test_solar_noon_utc_at_greenwich() {
    assert_approx!(solar_noon_utc(0.0, 0.0), 12.0, 1e-12);
    assert_approx!(solar_noon_utc(15.0, 0.0), 11.0, 1e-12);
    assert_approx!(solar_noon_utc(0.0, 6.0), 11.9, 1e-12);
}

#[test]
fn test_utc_hours_to_local_rolls_over() {
    let t = utc_hours_to_local(date(2026, 1, 28), 25.5, 0.0);
    assert_eq!(t.date_naive(), date(2026, 1, 29));
    assert_eq!((t.hour(), t.minute()), (1, 30));
    assert_eq!(t.offset().local_minus_utc(), 0);
}

#[test]
fn test_utc_hours_to_local_negative_hours() {
    // 22:00 UTC the previous day is 08:00 at UTC+10
    let t = utc_hours_to_local(date(2026, 12, 21), -2.0, 151.2093);
    assert_eq!(t.offset().local_minus_utc(), 10 * 3600);
    assert_eq!(t.date_naive(), date(2026, 12, 21));
    assert_eq!((t.hour(), t.minute()), (8, 0));
}

// ── Sunrise / Sunset ──

#[test]
fn test_new_york_winter() {
    let (rise, set) = hhmm(NEW_YORK, date(2026, 1, 28));
    assert_eq!(rise, "07:10");
    assert_eq!(set, "17:06");
}

#[test]
fn test_khartoum_winter() {
    let (rise, set) = hhmm(KHARTOUM, date(2026, 1, 28));
    assert_eq!(rise, "06:19");
    assert_eq!(set, "17:44");
}

#[test]
fn test_london_midsummer() {
    let (rise, set) = hhmm(LONDON, date(2026, 6, 21));
    assert_eq!(rise, "03:42");
    assert_eq!(set, "20:21");
}

#[test]
fn test_sydney_midsummer() {
    let (rise, set) = hhmm(SYDNEY, date(2026, 12, 21));
    assert_eq!(rise, "04:40");
    assert_eq!(set, "19:05");
}

#[test]
fn test_sydney_sunrise_keeps_local_date() {
    // Sunrise falls on the previous UTC day
    let ss = sunrise_sunset(SYDNEY.0, SYDNEY.1, date(2026, 12, 21)).unwrap();
    assert_eq!(ss.sunrise.date_naive(), date(2026, 12, 21));
    assert_eq!(ss.sunrise.naive_utc().date(), date(2026, 12, 20));
}

#[test]
fn test_reykjavik_short_day() {
    let ss = sunrise_sunset(REYKJAVIK.0, REYKJAVIK.1, date(2026, 12, 21)).unwrap();
    assert_eq!(ss.sunrise.offset().local_minus_utc(), -3600);
    assert_eq!(ss.sunrise_hhmm(), "10:21");
    assert_eq!(ss.sunset_hhmm(), "14:29");
}

#[test]
fn test_solar_noon_between_rise_and_set() {
    for (lat, lon) in [NEW_YORK, KHARTOUM, LONDON, SYDNEY, REYKJAVIK] {
        for d in [date(2026, 3, 20), date(2026, 6, 21), date(2026, 12, 21)] {
            if let Some(ss) = sunrise_sunset(lat, lon, d) {
                assert!(ss.sunrise < ss.solar_noon, "({}, {}) {}", lat, lon, d);
                assert!(ss.solar_noon < ss.sunset, "({}, {}) {}", lat, lon, d);
                let before = ss.solar_noon - ss.sunrise;
                let after = ss.sunset - ss.solar_noon;
                assert!((before - after).num_seconds().abs() <= 1);
            }
        }
    }
}

#[test]
fn test_sun_at_threshold_when_rising_and_setting() {
    for (lat, lon, d) in [
        (NEW_YORK.0, NEW_YORK.1, date(2026, 1, 28)),
        (KHARTOUM.0, KHARTOUM.1, date(2026, 1, 28)),
        (LONDON.0, LONDON.1, date(2026, 6, 21)),
        (SYDNEY.0, SYDNEY.1, date(2026, 12, 21)),
    ] {
        let ss = sunrise_sunset(lat, lon, d).unwrap();
        for instant in [ss.sunrise, ss.sunset] {
            let pos = solar_position_at(lat, lon, &instant);
            assert_approx!(pos.geometric_altitude, SUNRISE_ALTITUDE, 1e-3);
            assert!((pos.altitude - SUNRISE_ALTITUDE).abs() < 0.6);
        }
    }
}

#[test]
fn test_sun_highest_at_solar_noon() {
    let ss = sunrise_sunset(NEW_YORK.0, NEW_YORK.1, date(2026, 1, 28)).unwrap();
    let noon = solar_position_at(NEW_YORK.0, NEW_YORK.1, &ss.solar_noon);
    assert_approx!(noon.hour_angle, 0.0, 1e-3);
    assert_approx!(noon.azimuth, 180.0, 1e-2);
}

// ── Polar ──

#[test]
fn test_north_pole_midsummer_is_polar_day() {
    assert_eq!(sun_events(90.0, 0.0, date(2026, 6, 21)), SunEvents::PolarDay);
    assert!(sunrise_sunset(90.0, 0.0, date(2026, 6, 21)).is_none());
}

#[test]
fn test_south_pole_june_is_polar_night() {
    assert_eq!(sun_events(-90.0, 0.0, date(2026, 6, 21)), SunEvents::PolarNight);
}

#[test]
fn test_svalbard_midwinter_is_polar_night() {
    assert_eq!(sun_events(78.2, 15.6, date(2026, 12, 21)), SunEvents::PolarNight);
    assert_eq!(
        hhmm((78.2, 15.6), date(2026, 12, 21)),
        (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
    );
}

#[test]
fn test_display_times_without_events() {
    assert_eq!(display_times(None), ("N/A".to_string(), "N/A".to_string()));
}

#[test]
fn test_horizon_cosine_bounds_at_equator() {
    let c = horizon_hour_angle_cos(0.0, 0.0);
    assert!(c > -1.0 && c < 1.0);
    assert!(c < 0.0);
}

// ── Sun path ──

#[test]
fn test_hourly_path_has_24_samples() {
    let path = sun_path(NEW_YORK.0, NEW_YORK.1, date(2026, 1, 28), 60);
    assert_eq!(path.len(), 24);
    assert_eq!(path[0].minutes, 0);
    assert_eq!(path[23].minutes, 23 * 60);
    assert_approx!(path[23].hour, 23.0, 1e-12);
}

#[test]
fn test_path_noon_matches_position() {
    let d = date(2026, 1, 28);
    let path = sun_path(NEW_YORK.0, NEW_YORK.1, d, 60);
    let noon = &path[12];
    assert_eq!(noon.minutes, 720);
    assert_approx!(noon.altitude, 30.866845294003905, 1e-9);
    assert_approx!(noon.azimuth, 182.32758463230326, 1e-9);

    let direct = solar_position(NEW_YORK.0, NEW_YORK.1, &d.and_hms_opt(12, 0, 0).unwrap());
    assert_eq!(noon.altitude, direct.altitude);
    assert_eq!(noon.azimuth, direct.azimuth);
}

#[test]
fn test_path_quarter_hours() {
    let path = sun_path(KHARTOUM.0, KHARTOUM.1, date(2026, 1, 28), 15);
    assert_eq!(path.len(), 96);
    assert_eq!(path[1].minutes, 15);
    assert_approx!(path[1].hour, 0.25, 1e-12);
    assert!(path.iter().all(|s| (0.0..360.0).contains(&s.azimuth)));
}

#[test]
fn test_path_crosses_horizon_twice() {
    let path = sun_path(NEW_YORK.0, NEW_YORK.1, date(2026, 1, 28), 5);
    let crossings = path
        .windows(2)
        .filter(|w| (w[0].altitude < 0.0) != (w[1].altitude < 0.0))
        .count();
    assert_eq!(crossings, 2);
}

#[test]
fn test_path_zero_interval_is_empty() {
    assert!(sun_path(NEW_YORK.0, NEW_YORK.1, date(2026, 1, 28), 0).is_empty());
    assert!(sun_path(NEW_YORK.0, NEW_YORK.1, date(2026, 1, 28), -5).is_empty());
}

#[test]
fn test_path_twice_daily() {
    let path = sun_path(SYDNEY.0, SYDNEY.1, date(2024, 2, 29), 720);
    assert_eq!(path.len(), 2);
    assert_eq!((path[0].minutes, path[1].minutes), (0, 720));
    assert!(path[0].altitude < 0.0);
    assert!(path[1].altitude > 0.0);
}
