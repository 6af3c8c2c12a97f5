use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, TimeZone, Timelike, Utc};

use crate::types::{SolarAngles, SolarPosition};

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Folds an angle into [0, 360). Tiny negatives that round up to 360 map to 0.
pub fn normalize_angle(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let completed = (month.clamp(1, 12) - 1) as usize;
    let sum: u32 = dim[..completed].iter().sum();
    (sum + day) as i32
}

/// Fractional year in radians. Always divides by 365, leap years included.
pub fn fractional_year(n: i32) -> f64 {
    2.0 * std::f64::consts::PI * (n - 1) as f64 / 365.0
}

/// Solar declination in radians.
pub fn solar_declination(n: i32) -> f64 {
    let g = fractional_year(n);
    0.006918 - 0.399912 * g.cos() + 0.070257 * g.sin() - 0.006758 * (2.0 * g).cos()
        + 0.000907 * (2.0 * g).sin()
        - 0.002697 * (3.0 * g).cos()
        + 0.00148 * (3.0 * g).sin()
}

/// Equation of time in minutes.
pub fn equation_of_time(n: i32) -> f64 {
    let g = fractional_year(n);
    229.18
        * (0.000075
            + 0.001868 * g.cos()
            - 0.032077 * g.sin()
            - 0.014615 * (2.0 * g).cos()
            - 0.040849 * (2.0 * g).sin())
}

/// Whole-hour UTC offset assumed for a longitude.
pub fn utc_offset_hours(longitude: f64) -> i32 {
    (longitude / DEGREES_PER_HOUR).round() as i32
}

pub fn standard_meridian(longitude: f64) -> f64 {
    (longitude / DEGREES_PER_HOUR).round() * DEGREES_PER_HOUR
}

/// Fixed offset standing in for the local timezone at `longitude`.
pub fn local_offset(longitude: f64) -> FixedOffset {
    let hours = utc_offset_hours(longitude).clamp(-23, 23);
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

pub fn solar_time(clock_hours: f64, longitude: f64, eot: f64) -> f64 {
    let longitude_correction = MINUTES_PER_DEGREE * (longitude - standard_meridian(longitude));
    (clock_hours + (eot + longitude_correction) / 60.0).rem_euclid(24.0)
}

/// Hour angle in radians: zero at solar noon, negative in the morning.
pub fn hour_angle(solar_time: f64) -> f64 {
    deg_to_rad((solar_time - 12.0) * DEGREES_PER_HOUR)
}

/// Geometric altitude in degrees, before refraction.
pub fn solar_altitude(lat_rad: f64, decl_rad: f64, ha_rad: f64) -> f64 {
    let sin_alt = lat_rad.sin() * decl_rad.sin() + lat_rad.cos() * decl_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}

/// Atmospheric refraction in degrees for a geometric altitude in degrees.
pub fn refraction_correction(altitude: f64) -> f64 {
    if altitude > -0.575 {
        let alt_rad = deg_to_rad(altitude);
        0.016667 / (alt_rad + 0.003138 / (alt_rad + 0.089186)).tan()
    } else {
        0.57644 * (-0.00149 * altitude).exp() - 0.07156
    }
}

/// Azimuth clockwise from north in [0, 360), taken at the refracted altitude.
pub fn solar_azimuth(lat_rad: f64, decl_rad: f64, ha_rad: f64, altitude: f64) -> f64 {
    let cos_alt = deg_to_rad(altitude).cos();
    if cos_alt.abs() < 1e-12 {
        // sun at the zenith or nadir, bearing undefined
        return 0.0;
    }
    let cos_az = ((decl_rad.sin() * lat_rad.cos() - decl_rad.cos() * lat_rad.sin() * ha_rad.cos())
        / cos_alt)
        .clamp(-1.0, 1.0);
    let sin_az = ha_rad.sin() * decl_rad.cos() / cos_alt;
    normalize_angle(rad_to_deg(sin_az.atan2(cos_az)))
}

pub fn clock_hours(dt: &NaiveDateTime) -> f64 {
    dt.hour() as f64
        + dt.minute() as f64 / 60.0
        + dt.second() as f64 / 3600.0
        + dt.nanosecond() as f64 / 3.6e12
}

/// Position for a civil time read on the synthetic local clock at `longitude`.
pub fn solar_position(latitude: f64, longitude: f64, local: &NaiveDateTime) -> SolarPosition {
    let n = day_of_year(local.year(), local.month(), local.day());
    let decl = solar_declination(n);
    let eot = equation_of_time(n);
    let st = solar_time(clock_hours(local), longitude, eot);
    let ha = hour_angle(st);
    let lat_rad = deg_to_rad(latitude);

    let geometric = solar_altitude(lat_rad, decl, ha);
    let refraction = refraction_correction(geometric);
    let altitude = geometric + refraction;
    let azimuth = solar_azimuth(lat_rad, decl, ha, altitude);

    SolarPosition {
        day_of_year: n,
        declination: rad_to_deg(decl),
        equation_of_time: eot,
        solar_time: st,
        hour_angle: rad_to_deg(ha),
        geometric_altitude: geometric,
        refraction,
        altitude,
        azimuth,
    }
}

pub fn sun_position(latitude: f64, longitude: f64, local: &NaiveDateTime) -> SolarAngles {
    solar_position(latitude, longitude, local).angles()
}

/// Position at an absolute instant, read on the synthetic local clock.
pub fn solar_position_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    let local = dt.with_timezone(&local_offset(longitude)).naive_local();
    solar_position(latitude, longitude, &local)
}
