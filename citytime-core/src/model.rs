use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize, Serializer};

use crate::time;

/// A city shown on the dashboard. Lives in the static registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone identifier, e.g. "Europe/London".
    pub timezone: &'static str,
}

impl City {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates { latitude: self.latitude, longitude: self.longitude }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as reported by the weather provider.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub windspeed_kmh: f64,
    pub wind_direction_deg: f64,
    pub weather_code: i32,
    /// Provider timestamp, UTC without offset.
    pub observed_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherView {
    pub temperature_c: f64,
    pub windspeed_kmh: f64,
    pub wind_direction_deg: f64,
    pub weather_code: i32,
    /// Observation time in the city's timezone, `HH:MM`.
    pub observed_at_local: String,
}

impl WeatherView {
    pub fn from_sample(sample: &WeatherSample, tz: Tz) -> Self {
        Self {
            temperature_c: sample.temperature_c,
            windspeed_kmh: sample.windspeed_kmh,
            wind_direction_deg: sample.wind_direction_deg,
            weather_code: sample.weather_code,
            observed_at_local: time::observed_local(sample.observed_at, tz),
        }
    }
}

/// Per-request view of one city: identity, local clock and optional weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityView {
    pub id: String,
    pub name: String,
    pub country: String,
    pub timezone: String,
    pub local_time: String,
    pub local_date: String,
    pub weather: Option<WeatherView>,
}

/// Body of `GET /api/cities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitiesEnvelope {
    #[serde(rename = "updatedAtUTC", serialize_with = "iso_millis")]
    pub updated_at_utc: DateTime<Utc>,
    pub cities: Vec<CityView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn iso_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn envelope_uses_dashboard_field_names() {
        let envelope = CitiesEnvelope {
            updated_at_utc: Utc.with_ymd_and_hms(2025, 6, 5, 9, 30, 0).unwrap(),
            cities: vec![CityView {
                id: "perth".into(),
                name: "Perth".into(),
                country: "Australia".into(),
                timezone: "Australia/Perth".into(),
                local_time: "17:30:00".into(),
                local_date: "Thursday, 5 June 2025".into(),
                weather: Some(WeatherView {
                    temperature_c: 18.4,
                    windspeed_kmh: 12.0,
                    wind_direction_deg: 225.0,
                    weather_code: 3,
                    observed_at_local: "17:15".into(),
                }),
            }],
        };

        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["updatedAtUTC"], "2025-06-05T09:30:00.000Z");
        let city = &json["cities"][0];
        assert_eq!(city["localTime"], "17:30:00");
        assert_eq!(city["localDate"], "Thursday, 5 June 2025");
        assert_eq!(city["weather"]["temperatureC"], 18.4);
        assert_eq!(city["weather"]["windspeedKmh"], 12.0);
        assert_eq!(city["weather"]["windDirectionDeg"], 225.0);
        assert_eq!(city["weather"]["weatherCode"], 3);
        assert_eq!(city["weather"]["observedAtLocal"], "17:15");
    }

    #[test]
    fn absent_weather_serializes_as_null() {
        let view = CityView {
            id: "adelaide".into(),
            name: "Adelaide".into(),
            country: "Australia".into(),
            timezone: "Australia/Adelaide".into(),
            local_time: "19:00:00".into(),
            local_date: "Thursday, 5 June 2025".into(),
            weather: None,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert!(json["weather"].is_null());
    }

    #[test]
    fn weather_view_converts_observation_to_city_time() {
        let sample = WeatherSample {
            temperature_c: 11.2,
            windspeed_kmh: 20.5,
            wind_direction_deg: 270.0,
            weather_code: 61,
            observed_at: NaiveDate::from_ymd_opt(2025, 6, 5)
                .unwrap()
                .and_hms_opt(9, 45, 0)
                .unwrap(),
        };

        let view = WeatherView::from_sample(&sample, chrono_tz::Europe::London);

        assert_eq!(view.observed_at_local, "10:45");
        assert_eq!(view.weather_code, 61);
    }
}
