use std::{convert::Infallible, path::PathBuf, sync::Arc};

use citytime_core::{Dashboard, ErrorBody, HealthStatus};
use warp::{Filter, Rejection, Reply, http::StatusCode, reply::Response};

/// All routes: the JSON API plus static assets for the browser page.
pub fn routes(
    dashboard: Arc<Dashboard>,
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    api(dashboard).or(warp::get().and(warp::fs::dir(static_dir))).with(warp::trace::request())
}

pub fn api(
    dashboard: Arc<Dashboard>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    cities(dashboard).or(health())
}

/// GET /api/cities
fn cities(
    dashboard: Arc<Dashboard>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "cities")
        .and(warp::get())
        .and(warp::any().map(move || dashboard.clone()))
        .and_then(get_cities)
}

/// GET /api/health
fn health() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "health").and(warp::get()).map(|| warp::reply::json(&HealthStatus::ok()))
}

async fn get_cities(dashboard: Arc<Dashboard>) -> Result<Response, Infallible> {
    match dashboard.snapshot().await {
        Ok(envelope) => Ok(warp::reply::json(&envelope).into_response()),
        Err(err) => {
            tracing::error!(error = %err, "failed to assemble city dashboard");
            let body = ErrorBody { error: err.to_string() };
            Ok(warp::reply::with_status(
                warp::reply::json(&body),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use citytime_core::{
        CITIES, City, Coordinates, FetchError, WeatherProvider, WeatherSample,
    };
    use serde_json::Value;

    /// Fails every fetch except the one matching `latitude`.
    #[derive(Debug)]
    struct OnlyOneCity {
        latitude: f64,
    }

    #[async_trait]
    impl WeatherProvider for OnlyOneCity {
        async fn current_weather(
            &self,
            location: Coordinates,
        ) -> Result<WeatherSample, FetchError> {
            if location.latitude != self.latitude {
                return Err(FetchError::MissingCurrent);
            }
            Ok(WeatherSample {
                temperature_c: -1.5,
                windspeed_kmh: 31.0,
                wind_direction_deg: 350.0,
                weather_code: 71,
                observed_at: "2025-01-10T08:30:00".parse().unwrap(),
            })
        }
    }

    fn dashboard(cities: &'static [City]) -> Arc<Dashboard> {
        let provider = OnlyOneCity { latitude: CITIES[0].latitude };
        Arc::new(Dashboard::new(Arc::new(provider), cities))
    }

    fn json_body(body: &[u8]) -> Value {
        serde_json::from_slice(body).expect("response should be JSON")
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/health")
            .reply(&api(dashboard(CITIES)))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res.body()), serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn cities_lists_every_city_with_null_for_failures() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/cities")
            .reply(&api(dashboard(CITIES)))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res.body());

        assert!(body["updatedAtUTC"].as_str().unwrap().ends_with('Z'));
        let cities = body["cities"].as_array().unwrap();
        assert_eq!(cities.len(), 3);
        assert_eq!(cities[0]["id"], "manchester");
        assert_eq!(cities[0]["weather"]["weatherCode"], 71);
        // 08:30 UTC in January is 08:30 GMT.
        assert_eq!(cities[0]["weather"]["observedAtLocal"], "08:30");
        assert!(cities[1]["weather"].is_null());
        assert!(cities[2]["weather"].is_null());
    }

    #[tokio::test]
    async fn orchestration_failure_is_a_500_with_error_body() {
        static BROKEN: &[City] = &[City {
            id: "nowhere",
            name: "Nowhere",
            country: "None",
            latitude: 0.0,
            longitude: 0.0,
            timezone: "Not/AZone",
        }];

        let res = warp::test::request()
            .method("GET")
            .path("/api/cities")
            .reply(&api(dashboard(BROKEN)))
            .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(res.body());
        assert!(body["error"].as_str().unwrap().contains("Not/AZone"));
    }

    #[tokio::test]
    async fn unknown_api_path_is_not_found() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/weather")
            .reply(&api(dashboard(CITIES)))
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_bundled_index_page() {
        let static_dir = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"));

        let res = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&routes(dashboard(CITIES), static_dir))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let html = String::from_utf8_lossy(res.body());
        assert!(html.contains("script.js"));
    }
}
