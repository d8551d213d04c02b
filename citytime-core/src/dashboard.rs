//! Aggregation behind `GET /api/cities`.

use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;

use crate::{
    City, CitiesEnvelope, CityView, WeatherProvider, WeatherView,
    error::DashboardError,
    time::{current_clock, parse_timezone},
};

/// Builds a fresh [`CitiesEnvelope`] per call. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    provider: Arc<dyn WeatherProvider>,
    cities: &'static [City],
}

impl Dashboard {
    pub fn new(provider: Arc<dyn WeatherProvider>, cities: &'static [City]) -> Self {
        Self { provider, cities }
    }

    /// Fetch weather for every city concurrently and merge it with each
    /// city's local clock. The result lists cities in registry order.
    pub async fn snapshot(&self) -> Result<CitiesEnvelope, DashboardError> {
        let views = join_all(self.cities.iter().map(|city| self.city_view(city))).await;
        let cities = views.into_iter().collect::<Result<Vec<_>, _>>()?;

        Ok(CitiesEnvelope { updated_at_utc: Utc::now(), cities })
    }

    async fn city_view(&self, city: &City) -> Result<CityView, DashboardError> {
        let tz = parse_timezone(city.timezone).ok_or_else(|| DashboardError::UnknownTimezone {
            city: city.id.to_string(),
            timezone: city.timezone.to_string(),
        })?;

        let sample = match self.provider.current_weather(city.coordinates()).await {
            Ok(sample) => Some(sample),
            Err(err) => {
                tracing::warn!(city = city.id, error = %err, "weather unavailable");
                None
            }
        };

        let clock = current_clock(tz);

        Ok(CityView {
            id: city.id.to_string(),
            name: city.name.to_string(),
            country: city.country.to_string(),
            timezone: city.timezone.to_string(),
            local_time: clock.time,
            local_date: clock.date,
            weather: sample.as_ref().map(|s| WeatherView::from_sample(s, tz)),
        })
    }
}
