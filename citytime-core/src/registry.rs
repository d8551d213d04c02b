use crate::model::City;

/// Cities shown on the dashboard, in display order.
pub static CITIES: &[City] = &[
    City {
        id: "manchester",
        name: "Manchester",
        country: "UK",
        latitude: 53.4808,
        longitude: -2.2426,
        timezone: "Europe/London",
    },
    City {
        id: "perth",
        name: "Perth",
        country: "Australia",
        latitude: -31.9523,
        longitude: 115.8613,
        timezone: "Australia/Perth",
    },
    City {
        id: "adelaide",
        name: "Adelaide",
        country: "Australia",
        latitude: -34.9285,
        longitude: 138.6007,
        timezone: "Australia/Adelaide",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_timezone;
    use std::collections::HashSet;

    #[test]
    fn every_timezone_is_a_known_iana_zone() {
        for city in CITIES {
            assert!(parse_timezone(city.timezone).is_some(), "bad timezone for {}", city.id);
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = CITIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CITIES.len());
    }
}
