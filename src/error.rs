//! Error types for the sun position crate.

use std::net::IpAddr;

use thiserror::Error;

/// Errors produced outside the pure solar calculations.
///
/// The calculations themselves never fail; these cover input validation,
/// location resolution and configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid latitude {0}° (must be between -90° and +90°)")]
    InvalidLatitude(f64),

    #[error("invalid longitude {0}° (must be between -180° and +180°)")]
    InvalidLongitude(f64),

    #[error("invalid date or time: {0}")]
    InvalidDateTime(String),

    #[cfg(feature = "http-server")]
    #[error("geolocation request failed: {0}")]
    Geolocation(#[from] reqwest::Error),

    #[error("geolocation lookup for {ip} failed: {message}")]
    GeolocationLookup { ip: IpAddr, message: String },

    #[error("address {0} is not publicly routable")]
    NonRoutableAddress(IpAddr),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
