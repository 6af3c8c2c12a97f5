//! IP geolocation against an ip-api.com compatible JSON endpoint.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::cities;
use crate::error::{Error, Result};
use crate::resolver::{LocationResolver, ResolvedLocation};
use crate::types::GeoCoordinate;

/// Body returned by the geolocation service.
#[derive(Debug, Clone, Deserialize)]
pub struct IpLocation {
    /// `success` or `fail`
    pub status: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Failure reason when `status` is `fail`
    #[serde(default)]
    pub message: Option<String>,
}

impl IpLocation {
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        GeoCoordinate::new(self.lat?, self.lon?).ok()
    }
}

/// Whether an address could be located by a public geolocation service.
pub fn is_public(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_loopback()
                || v4.is_private()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast()
                || v4.is_documentation())
        }
        IpAddr::V6(v6) => {
            if let Some(mapped) = v6.to_ipv4_mapped() {
                return is_public(&IpAddr::V4(mapped));
            }
            let first = v6.segments()[0];
            let unique_local = first & 0xfe00 == 0xfc00;
            let link_local = first & 0xffc0 == 0xfe80;
            !(v6.is_loopback() || v6.is_unspecified() || unique_local || link_local)
        }
    }
}

/// HTTP client for the geolocation service.
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: Client,
    base_url: String,
}

impl IpLocator {
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up `ip`. Non-public addresses are rejected without a request.
    pub async fn locate(&self, ip: IpAddr) -> Result<IpLocation> {
        if !is_public(&ip) {
            return Err(Error::NonRoutableAddress(ip));
        }

        let url = format!("{}/{}", self.base_url, ip);
        debug!(%url, "requesting IP geolocation");

        let location: IpLocation = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if location.status != "success" {
            return Err(Error::GeolocationLookup {
                ip,
                message: location
                    .message
                    .unwrap_or_else(|| format!("status {}", location.status)),
            });
        }
        Ok(location)
    }
}

/// Maps a successful lookup to a location.
///
/// The country's capital wins when it is in the city table. Otherwise the
/// reported coordinates are used, labelled with the capital's name when the
/// country has one. A blank country or a reported 0,0 resolves to nothing.
pub fn location_for(found: &IpLocation) -> Option<ResolvedLocation> {
    if found.country.is_empty() {
        return None;
    }

    let capital = cities::capital_for_country(&found.country);
    if let Some(city) = capital.and_then(cities::find_city) {
        return Some(ResolvedLocation::from_city(city));
    }

    let coordinate = found.coordinate()?;
    if coordinate.latitude == 0.0 && coordinate.longitude == 0.0 {
        return None;
    }
    Some(ResolvedLocation {
        coordinate,
        city: capital.map(str::to_string),
    })
}

/// Resolves names from the city table and addresses through [`IpLocator`].
#[derive(Debug, Clone)]
pub struct GeoIpResolver {
    locator: IpLocator,
}

impl GeoIpResolver {
    pub fn new(locator: IpLocator) -> Self {
        Self { locator }
    }
}

#[async_trait]
impl LocationResolver for GeoIpResolver {
    fn resolve(&self, name: &str) -> Option<ResolvedLocation> {
        cities::find_city(name).map(ResolvedLocation::from_city)
    }

    async fn resolve_by_ip(&self, ip: IpAddr) -> Option<ResolvedLocation> {
        match self.locator.locate(ip).await {
            Ok(found) => {
                let resolved = location_for(&found);
                debug!(%ip, country = %found.country, resolved = resolved.is_some(), "located client address");
                resolved
            }
            Err(Error::NonRoutableAddress(_)) => None,
            Err(e) => {
                warn!(%ip, error = %e, "IP geolocation failed");
                None
            }
        }
    }
}
