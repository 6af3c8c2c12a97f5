//! HTTP server module.
//!
//! An axum router exposing the solar calculations as a JSON API next to the
//! embedded front end. Handlers only parse and resolve input; every number
//! they return comes from [`crate::angles`] and [`crate::sun_times`].
//!
//! ```text
//! GET {base}/                       HTML page
//! GET {base}/static/js/sun-chart.js chart script
//! GET {base}/api/sun-position       altitude, azimuth, sunrise, sunset
//! GET {base}/api/sun-path           samples across one local day
//! GET {base}/api/countries          countries in the city table
//! GET {base}/api/cities             cities, optionally by country
//! GET /health                       liveness
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
