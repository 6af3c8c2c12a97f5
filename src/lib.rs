pub mod angles;
pub mod cities;
pub mod config;
pub mod error;
pub mod resolver;
pub mod sun_times;
pub mod types;

#[cfg(feature = "http-server")]
pub mod geolocation;

#[cfg(feature = "http-server")]
pub mod http;

pub use angles::{
    clock_hours, day_of_year, days_in_months, deg_to_rad, equation_of_time, fractional_year,
    hour_angle, leap_year, local_offset, normalize_angle, rad_to_deg, refraction_correction,
    solar_altitude, solar_azimuth, solar_declination, solar_position, solar_position_at,
    solar_time, standard_meridian, sun_position, utc_offset_hours, DEGREES_PER_HOUR,
    MINUTES_PER_DEGREE,
};

pub use sun_times::{
    display_times, horizon_hour_angle_cos, intervals_per_day, minutes_to_time, solar_noon_utc,
    sun_events, sun_path, sunrise_sunset, utc_hours_to_local, NOT_AVAILABLE, SUNRISE_ALTITUDE,
};

pub use error::{Error, Result};

pub use types::{GeoCoordinate, PathSample, SolarAngles, SolarPosition, SunEvents, SunriseSunset};
