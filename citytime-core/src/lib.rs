//! Core library for the city time & weather dashboard.
//!
//! This crate defines:
//! - The static city registry
//! - Weather fetching behind the `WeatherProvider` trait (Open-Meteo)
//! - Local time resolution per IANA timezone
//! - The per-request aggregation that produces the `/api/cities` payload
//! - Configuration for the server binary
//!
//! It is used by `citytime-server` and `citytime-cli`.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod provider;
pub mod registry;
pub mod time;

pub use config::{Config, ProviderConfig, ServerConfig};
pub use dashboard::Dashboard;
pub use error::{DashboardError, FetchError};
pub use model::{
    CitiesEnvelope, City, CityView, Coordinates, ErrorBody, HealthStatus, WeatherSample,
    WeatherView,
};
pub use provider::{OpenMeteoProvider, WeatherProvider};
pub use registry::CITIES;
