//! Fixed city registry
//!
//! The monitored cities and their coordinates are a compile-time table,
//! loaded once and never mutated. Iteration order is the declared order,
//! which the HTTP listing endpoint must preserve.

use crate::value_objects::GeoLocation;
use serde::Serialize;

/// A monitored city
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    /// City name (exact-match lookup key)
    pub name: &'static str,
    /// City coordinates
    pub location: GeoLocation,
}

const fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        location: GeoLocation::new_unchecked(latitude, longitude),
    }
}

/// The 20 monitored Indian cities, in declared order
const CITIES: [City; 20] = [
    city("Delhi", 28.6139, 77.2090),
    city("Mumbai", 19.0760, 72.8777),
    city("Hyderabad", 17.3850, 78.4867),
    city("Bhopal", 23.2599, 77.4126),
    city("Indore", 22.7196, 75.8577),
    city("Ahmedabad", 23.0225, 72.5714),
    city("Chennai", 13.0827, 80.2707),
    city("Gwalior", 26.2183, 78.1828),
    city("Jaipur", 26.9124, 75.7873),
    city("Varanasi", 25.3176, 82.9739),
    city("Nagpur", 21.1458, 79.0882),
    city("Pune", 18.5204, 73.8567),
    city("Lucknow", 26.8467, 80.9462),
    city("Kanpur", 26.4499, 80.3319),
    city("Patna", 25.5941, 85.1376),
    city("Raipur", 21.2514, 81.6296),
    city("Ranchi", 23.3441, 85.3096),
    city("Bengaluru", 12.9716, 77.5946),
    city("Kolkata", 22.5726, 88.3639),
    city("Surat", 21.1702, 72.8311),
];

/// Read-only registry over the fixed city table
#[derive(Debug, Clone, Copy, Default)]
pub struct CityRegistry;

impl CityRegistry {
    /// Number of registered cities
    pub const LEN: usize = CITIES.len();

    /// Look up a city by exact, case-sensitive name
    #[must_use]
    pub fn lookup(name: &str) -> Option<&'static City> {
        CITIES.iter().find(|c| c.name == name)
    }

    /// All cities in declared order
    #[must_use]
    pub const fn all() -> &'static [City] {
        &CITIES
    }

    /// City names in declared order
    pub fn names() -> impl Iterator<Item = &'static str> {
        CITIES.iter().map(|c| c.name)
    }
}
