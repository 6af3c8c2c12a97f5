//! HTTP handlers for the REST API.
//!
//! Handlers resolve the location and the local time, then delegate every
//! calculation to the pure solar functions.

use std::net::IpAddr;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use tracing::debug;

use super::dto::{
    CitiesQuery, CitiesResponse, CityDto, CountriesResponse, HealthResponse, PathSampleDto,
    SunPathQuery, SunPathResponse, SunPositionQuery, SunPositionResponse,
};
use super::error::AppError;
use super::extract::ClientIp;
use super::state::AppState;
use crate::angles;
use crate::cities;
use crate::resolver::ResolvedLocation;
use crate::sun_times::{self, NOT_AVAILABLE};
use crate::types::{GeoCoordinate, SunEvents};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const SUN_CHART_JS: &str = include_str!("../../static/js/sun-chart.js");

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DEFAULT_PATH_INTERVAL: i32 = 60;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn format_location(coordinate: &GeoCoordinate) -> String {
    format!("{:.4}, {:.4}", coordinate.latitude, coordinate.longitude)
}

/// Resolves the request location.
///
/// An explicit city wins. Without a city and without coordinates the client
/// address is located, falling back to the default city. Otherwise the
/// coordinates are parsed and labelled with a matching table city if any.
async fn resolve_location(
    state: &AppState,
    city: &Option<String>,
    lat: &Option<String>,
    lon: &Option<String>,
    client_ip: Option<IpAddr>,
) -> Result<ResolvedLocation, AppError> {
    if let Some(name) = non_empty(city) {
        return state
            .resolver
            .resolve(name)
            .ok_or_else(|| AppError::bad_request("City not found"));
    }

    let (lat, lon) = (non_empty(lat), non_empty(lon));
    if lat.is_none() && lon.is_none() {
        if state.config.geolocation_enabled {
            if let Some(ip) = client_ip {
                if let Some(location) = state.resolver.resolve_by_ip(ip).await {
                    debug!(%ip, city = ?location.city, "resolved client address");
                    return Ok(location);
                }
            }
        }
        return Ok(ResolvedLocation::default_location());
    }

    let latitude: f64 = lat
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| AppError::bad_request("Invalid latitude"))?;
    let longitude: f64 = lon
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| AppError::bad_request("Invalid longitude"))?;
    let coordinate = GeoCoordinate::new(latitude, longitude)?;

    Ok(ResolvedLocation {
        coordinate,
        city: cities::city_near(coordinate).map(|c| c.name.to_string()),
    })
}

/// Current wall clock at `longitude`, truncated to the minute.
fn local_now(longitude: f64) -> NaiveDateTime {
    let now = Utc::now()
        .with_timezone(&angles::local_offset(longitude))
        .naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

fn parse_local_datetime(date: &str, time: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M")
        .map_err(|e| crate::Error::InvalidDateTime(format!("{} {}: {}", date, time, e)).into())
}

fn parse_local_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|e| crate::Error::InvalidDateTime(format!("{}: {}", date, e)).into())
}

fn to_instant(local: &NaiveDateTime, longitude: f64) -> Result<DateTime<FixedOffset>, AppError> {
    angles::local_offset(longitude)
        .from_local_datetime(local)
        .single()
        .ok_or_else(|| AppError::Internal(format!("unrepresentable local time {}", local)))
}

fn parse_interval(raw: Option<&str>) -> Result<i32, AppError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PATH_INTERVAL);
    };
    match raw.parse::<i32>() {
        Ok(minutes) if (1..=1440).contains(&minutes) && 1440 % minutes == 0 => Ok(minutes),
        _ => Err(AppError::bad_request("Invalid interval")),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Front End
// =============================================================================

/// GET {base}/
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET {base}
///
/// Redirects to the trailing-slash form so relative asset URLs resolve.
pub async fn redirect_home(State(state): State<AppState>) -> Redirect {
    Redirect::permanent(&format!("{}/", state.config.base_path))
}

/// GET {base}/static/js/sun-chart.js
pub async fn sun_chart_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SUN_CHART_JS,
    )
}

// =============================================================================
// Solar Endpoints
// =============================================================================

/// GET {base}/api/sun-position
///
/// Sun altitude and azimuth at a local date and time, plus that day's
/// sunrise and sunset. Missing date or time means now.
pub async fn sun_position(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Query(query): Query<SunPositionQuery>,
) -> HandlerResult<SunPositionResponse> {
    let location = resolve_location(&state, &query.city, &query.lat, &query.lon, client_ip).await?;
    let GeoCoordinate {
        latitude,
        longitude,
    } = location.coordinate;

    let (date, time) = match (non_empty(&query.date), non_empty(&query.time)) {
        (Some(date), Some(time)) => (date.to_string(), time.to_string()),
        _ => {
            let now = local_now(longitude);
            (now.format(DATE_FORMAT).to_string(), now.format(TIME_FORMAT).to_string())
        }
    };
    let local = parse_local_datetime(&date, &time)?;
    let timestamp = to_instant(&local, longitude)?;

    debug!(
        %date, %time, latitude, longitude, %timestamp,
        "computing sun position"
    );

    let sun = angles::sun_position(latitude, longitude, &local);
    let (sunrise, sunset) =
        sun_times::display_times(sun_times::sunrise_sunset(latitude, longitude, local.date()));

    Ok(Json(SunPositionResponse {
        sun_altitude: sun.altitude,
        sun_azimuth: sun.azimuth,
        timestamp,
        location: format_location(&location.coordinate),
        city: location.city,
        date,
        time,
        sunrise,
        sunset,
    }))
}

/// GET {base}/api/sun-path
///
/// Altitude and azimuth sampled across one local day.
pub async fn sun_path(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    Query(query): Query<SunPathQuery>,
) -> HandlerResult<SunPathResponse> {
    let location = resolve_location(&state, &query.city, &query.lat, &query.lon, client_ip).await?;
    let GeoCoordinate {
        latitude,
        longitude,
    } = location.coordinate;

    let date = match non_empty(&query.date) {
        Some(date) => parse_local_date(date)?,
        None => local_now(longitude).date(),
    };
    let interval_minutes = parse_interval(non_empty(&query.interval))?;

    let events = sun_times::sun_events(latitude, longitude, date);
    let (sunrise, sunset) = sun_times::display_times(events.rise_and_set());
    let solar_noon = events
        .rise_and_set()
        .map(|ss| ss.solar_noon.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let polar = match events {
        SunEvents::Regular(_) => None,
        SunEvents::PolarDay => Some("polar_day".to_string()),
        SunEvents::PolarNight => Some("polar_night".to_string()),
    };

    let samples = sun_times::sun_path(latitude, longitude, date, interval_minutes)
        .into_iter()
        .map(PathSampleDto::from)
        .collect();

    Ok(Json(SunPathResponse {
        location: format_location(&location.coordinate),
        city: location.city,
        date: date.format(DATE_FORMAT).to_string(),
        interval_minutes,
        sunrise,
        sunset,
        solar_noon,
        polar,
        samples,
    }))
}

// =============================================================================
// City Directory
// =============================================================================

/// GET {base}/api/countries
pub async fn list_countries() -> HandlerResult<CountriesResponse> {
    Ok(Json(CountriesResponse {
        countries: cities::countries().into_iter().map(str::to_string).collect(),
    }))
}

/// GET {base}/api/cities
///
/// All table cities, or those of `country`. Unknown countries are a 404.
pub async fn list_cities(Query(query): Query<CitiesQuery>) -> HandlerResult<CitiesResponse> {
    let listed: Vec<CityDto> = match non_empty(&query.country) {
        Some(country) => {
            let found = cities::cities_by_country(country);
            if found.is_empty() {
                return Err(AppError::NotFound(format!("No cities for country {}", country)));
            }
            found.into_iter().map(CityDto::from).collect()
        }
        None => cities::COMMON_CITIES.iter().map(CityDto::from).collect(),
    };
    let total = listed.len();
    Ok(Json(CitiesResponse {
        cities: listed,
        total,
    }))
}
