use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarAngles {
    pub altitude: f64,
    pub azimuth: f64,
}

/// Full breakdown of a position calculation.
///
/// `declination` and `hour_angle` are in degrees, `equation_of_time` in
/// minutes and `solar_time` in hours. `altitude` is the refracted value,
/// `geometric_altitude + refraction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub solar_time: f64,
    pub hour_angle: f64,
    pub geometric_altitude: f64,
    pub refraction: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

impl SolarPosition {
    pub fn angles(&self) -> SolarAngles {
        SolarAngles {
            altitude: self.altitude,
            azimuth: self.azimuth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunriseSunset {
    pub sunrise: DateTime<FixedOffset>,
    pub solar_noon: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

impl SunriseSunset {
    pub fn sunrise_hhmm(&self) -> String {
        self.sunrise.format("%H:%M").to_string()
    }

    pub fn sunset_hhmm(&self) -> String {
        self.sunset.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunEvents {
    Regular(SunriseSunset),
    /// The sun stays above the horizon all day.
    PolarDay,
    /// The sun stays below the horizon all day.
    PolarNight,
}

impl SunEvents {
    pub fn rise_and_set(&self) -> Option<SunriseSunset> {
        match self {
            SunEvents::Regular(ss) => Some(*ss),
            SunEvents::PolarDay | SunEvents::PolarNight => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathSample {
    pub minutes: i32,
    pub hour: f64,
    pub altitude: f64,
    pub azimuth: f64,
}
