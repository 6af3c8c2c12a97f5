use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime};

use crate::angles;
use crate::types::{PathSample, SunEvents, SunriseSunset};

/// Altitude of the sun's centre at rise and set, allowing for refraction
/// and the solar disk.
pub const SUNRISE_ALTITUDE: f64 = -0.833;
pub const NOT_AVAILABLE: &str = "N/A";

const NANOS_PER_HOUR: f64 = 3.6e12;

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn intervals_per_day(interval_minutes: i32) -> i32 {
    1440 / interval_minutes
}

/// Cosine of the hour angle at which the sun crosses `SUNRISE_ALTITUDE`.
/// Outside [-1, 1] the crossing never happens.
pub fn horizon_hour_angle_cos(lat_rad: f64, decl_rad: f64) -> f64 {
    let h0 = angles::deg_to_rad(SUNRISE_ALTITUDE);
    (h0.sin() - lat_rad.sin() * decl_rad.sin()) / (lat_rad.cos() * decl_rad.cos())
}

pub fn solar_noon_utc(longitude: f64, eot: f64) -> f64 {
    12.0 - longitude / angles::DEGREES_PER_HOUR - eot / 60.0
}

/// Converts hours past the date's UTC midnight to the synthetic local time
/// at `longitude`. Hours may fall outside [0, 24).
pub fn utc_hours_to_local(date: NaiveDate, utc_hours: f64, longitude: f64) -> DateTime<FixedOffset> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let instant = midnight + Duration::nanoseconds((utc_hours * NANOS_PER_HOUR) as i64);
    instant.with_timezone(&angles::local_offset(longitude))
}

pub fn sun_events(latitude: f64, longitude: f64, date: NaiveDate) -> SunEvents {
    let n = angles::day_of_year(date.year(), date.month(), date.day());
    let decl = angles::solar_declination(n);
    let eot = angles::equation_of_time(n);
    let lat_rad = angles::deg_to_rad(latitude);

    let cos_h0 = horizon_hour_angle_cos(lat_rad, decl);
    if cos_h0 < -1.0 {
        return SunEvents::PolarDay;
    }
    if cos_h0 > 1.0 {
        return SunEvents::PolarNight;
    }

    let delta_hours = cos_h0.acos() * 12.0 / std::f64::consts::PI;
    let noon = solar_noon_utc(longitude, eot);

    SunEvents::Regular(SunriseSunset {
        sunrise: utc_hours_to_local(date, noon - delta_hours, longitude),
        solar_noon: utc_hours_to_local(date, noon, longitude),
        sunset: utc_hours_to_local(date, noon + delta_hours, longitude),
    })
}

pub fn sunrise_sunset(latitude: f64, longitude: f64, date: NaiveDate) -> Option<SunriseSunset> {
    sun_events(latitude, longitude, date).rise_and_set()
}

/// `HH:MM` sunrise and sunset, or `N/A` for both when they do not occur.
pub fn display_times(events: Option<SunriseSunset>) -> (String, String) {
    match events {
        Some(ss) => (ss.sunrise_hhmm(), ss.sunset_hhmm()),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    }
}

/// Samples the sun across one local day, starting at local midnight.
pub fn sun_path(latitude: f64, longitude: f64, date: NaiveDate, interval_minutes: i32) -> Vec<PathSample> {
    if interval_minutes <= 0 {
        return Vec::new();
    }
    let midnight = date.and_time(NaiveTime::MIN);
    let n_intervals = intervals_per_day(interval_minutes);
    let mut samples = Vec::with_capacity(n_intervals as usize);

    for interval in 0..n_intervals {
        let mins = interval * interval_minutes;
        let (hour, minute) = minutes_to_time(mins);
        let local = midnight + Duration::minutes(mins as i64);
        let sun = angles::sun_position(latitude, longitude, &local);
        samples.push(PathSample {
            minutes: mins,
            hour: hour as f64 + minute as f64 / 60.0,
            altitude: sun.altitude,
            azimuth: sun.azimuth,
        });
    }
    samples
}
