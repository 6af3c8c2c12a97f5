//! Read-only lookup of coordinates from city names and client addresses.
//!
//! The HTTP layer receives a resolver through its state so the solar
//! calculations never perform I/O themselves.

use std::net::IpAddr;

use async_trait::async_trait;
use serde::Serialize;

use crate::cities;
use crate::types::GeoCoordinate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub coordinate: GeoCoordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl ResolvedLocation {
    pub fn from_city(city: &cities::City) -> Self {
        Self {
            coordinate: city.coordinate(),
            city: Some(city.name.to_string()),
        }
    }

    /// The Khartoum fallback used when nothing else resolves.
    pub fn default_location() -> Self {
        Self {
            coordinate: cities::DEFAULT_COORDINATE,
            city: Some(cities::DEFAULT_CITY.to_string()),
        }
    }
}

#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Looks up a city by name.
    fn resolve(&self, name: &str) -> Option<ResolvedLocation>;

    /// Looks up the location of a client address.
    async fn resolve_by_ip(&self, ip: IpAddr) -> Option<ResolvedLocation>;
}

/// Resolves names from the built-in city table and never locates addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct CityTableResolver;

#[async_trait]
impl LocationResolver for CityTableResolver {
    fn resolve(&self, name: &str) -> Option<ResolvedLocation> {
        cities::find_city(name).map(ResolvedLocation::from_city)
    }

    async fn resolve_by_ip(&self, _ip: IpAddr) -> Option<ResolvedLocation> {
        None
    }
}
