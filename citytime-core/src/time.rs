//! Local wall-clock time for a city's timezone.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Formatted local time and date for one timezone at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalClock {
    /// `HH:MM:SS`
    pub time: String,
    /// e.g. "Thursday, 5 June 2025"
    pub date: String,
}

pub fn local_clock(now: DateTime<Utc>, tz: Tz) -> LocalClock {
    let local = now.with_timezone(&tz);
    LocalClock {
        time: local.format("%H:%M:%S").to_string(),
        date: local.format("%A, %-d %B %Y").to_string(),
    }
}

/// Clock for `tz` evaluated at the moment of the call.
pub fn current_clock(tz: Tz) -> LocalClock {
    local_clock(Utc::now(), tz)
}

/// Convert a provider timestamp (UTC, no offset) to `HH:MM` in `tz`.
pub fn observed_local(at: NaiveDateTime, tz: Tz) -> String {
    at.and_utc().with_timezone(&tz).format("%H:%M").to_string()
}

pub fn parse_timezone(id: &str) -> Option<Tz> {
    id.parse::<Tz>().ok()
}
