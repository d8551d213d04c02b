//! Text rendering of the dashboard.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use citytime_core::{CitiesEnvelope, CityView};

pub const PLACEHOLDER: &str = "—";
pub const LOAD_FAILED: &str = "Failed to load data. Check server logs.";

const COMPASS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Human-readable label for a WMO weather code.
pub fn weather_label(code: Option<i32>) -> Cow<'static, str> {
    let Some(code) = code else {
        return Cow::Borrowed(PLACEHOLDER);
    };

    let label = match code {
        0 => "Clear",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Drizzle",
        55 => "Heavy drizzle",
        56 => "Light freezing drizzle",
        57 => "Freezing drizzle",
        61 => "Light rain",
        63 => "Rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Freezing rain",
        71 => "Light snow",
        73 => "Snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Light rain showers",
        81 => "Rain showers",
        82 => "Heavy rain showers",
        85 => "Snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm w/ light hail",
        99 => "Thunderstorm w/ heavy hail",
        other => return Cow::Owned(format!("Code {other}")),
    };
    Cow::Borrowed(label)
}

/// Nearest of the 16 compass points, 22.5° per sector.
pub fn wind_direction(deg: Option<f64>) -> &'static str {
    let Some(deg) = deg else {
        return PLACEHOLDER;
    };
    let sector = (deg.rem_euclid(360.0) / 22.5).round() as usize;
    COMPASS[sector % COMPASS.len()]
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

pub fn render_card(city: &CityView) -> String {
    let weather = city.weather.as_ref();

    let temperature = weather
        .map(|w| format!("{}°C", whole(w.temperature_c)))
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let wind = weather
        .map(|w| {
            format!("{} km/h {}", whole(w.windspeed_kmh), wind_direction(Some(w.wind_direction_deg)))
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let conditions = weather_label(weather.map(|w| w.weather_code));
    let observed = weather.map(|w| w.observed_at_local.as_str()).unwrap_or(PLACEHOLDER);

    let rows = [
        ("Local time", city.local_time.as_str()),
        ("Local date", city.local_date.as_str()),
        ("Temperature", temperature.as_str()),
        ("Conditions", conditions.as_ref()),
        ("Wind", wind.as_str()),
        ("Weather time (local)", observed),
    ];

    let mut out = format!("{}\n{} • {}\n", city.name, city.country, city.timezone);
    for (label, value) in rows {
        out.push_str(&format!("  {label:<22}{value}\n"));
    }
    out
}

pub fn render_updated(at: DateTime<Utc>) -> String {
    format!("Updated: {} (UTC)", at.format("%Y-%m-%d %H:%M:%S"))
}

/// Remembers the last rendered cards so a failed refresh only replaces the
/// status line.
#[derive(Debug, Default)]
pub struct Screen {
    cards: Option<String>,
}

impl Screen {
    pub fn update(&mut self, result: anyhow::Result<CitiesEnvelope>) -> String {
        let status = match result {
            Ok(envelope) => {
                let cards: Vec<_> = envelope.cities.iter().map(render_card).collect();
                self.cards = Some(cards.join("\n"));
                render_updated(envelope.updated_at_utc)
            }
            Err(err) => {
                tracing::warn!(error = %err, "dashboard refresh failed");
                LOAD_FAILED.to_string()
            }
        };

        match &self.cards {
            Some(cards) => format!("{status}\n\n{cards}"),
            None => status,
        }
    }
}
