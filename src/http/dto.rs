//! Data Transfer Objects for the HTTP API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::cities::City;
use crate::types::PathSample;

/// Query parameters for the sun position endpoint.
///
/// All fields are kept as strings so malformed numbers surface as the
/// endpoint's own 400 messages instead of a generic query rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SunPositionQuery {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunPositionResponse {
    pub sun_altitude: f64,
    pub sun_azimuth: f64,
    /// Requested local time carrying the longitude-derived offset
    pub timestamp: DateTime<FixedOffset>,
    /// `"lat, lon"` with four decimals
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub date: String,
    pub time: String,
    /// `HH:MM` or `N/A`
    pub sunrise: String,
    /// `HH:MM` or `N/A`
    pub sunset: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SunPathQuery {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub date: Option<String>,
    /// Minutes between samples, must divide a day evenly
    pub interval: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunPathResponse {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub date: String,
    pub interval_minutes: i32,
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    /// `polar_day` or `polar_night` when the sun neither rises nor sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polar: Option<String>,
    pub samples: Vec<PathSampleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSampleDto {
    pub minutes: i32,
    pub hour: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

impl From<PathSample> for PathSampleDto {
    fn from(s: PathSample) -> Self {
        Self {
            minutes: s.minutes,
            hour: s.hour,
            altitude: s.altitude,
            azimuth: s.azimuth,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitiesQuery {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
}

impl From<&City> for CityDto {
    fn from(c: &City) -> Self {
        Self {
            name: c.name.to_string(),
            latitude: c.latitude,
            longitude: c.longitude,
            country: c.country.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityDto>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
