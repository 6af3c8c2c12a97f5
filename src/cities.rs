//! Static directory of well-known cities and country capitals.

use serde::Serialize;

use crate::types::GeoCoordinate;

/// Coordinate used when no location can be resolved.
pub const DEFAULT_CITY: &str = "Khartoum";
pub const DEFAULT_COORDINATE: GeoCoordinate = GeoCoordinate {
    latitude: 15.5007,
    longitude: 32.5599,
};

/// Tolerance in degrees for labelling a coordinate with a city name.
const CITY_MATCH_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub country: &'static str,
}

impl City {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

const fn city(name: &'static str, latitude: f64, longitude: f64, country: &'static str) -> City {
    City {
        name,
        latitude,
        longitude,
        country,
    }
}

pub static COMMON_CITIES: &[City] = &[
    city("Khartoum", 15.5007, 32.5599, "Sudan"),
    city("Riyadh", 24.7136, 46.6753, "Saudi Arabia"),
    city("New York", 40.7128, -74.0060, "USA"),
    city("Los Angeles", 34.0522, -118.2437, "USA"),
    city("Chicago", 41.8781, -87.6298, "USA"),
    city("Miami", 25.7617, -80.1918, "USA"),
    city("London", 51.5074, -0.1278, "UK"),
    city("Tokyo", 35.6762, 139.6503, "Japan"),
    city("Paris", 48.8566, 2.3522, "France"),
    city("Sydney", -33.8688, 151.2093, "Australia"),
    city("Dubai", 25.2048, 55.2708, "UAE"),
    city("Singapore", 1.3521, 103.8198, "Singapore"),
    city("Toronto", 43.6532, -79.3832, "Canada"),
    city("Berlin", 52.5200, 13.4050, "Germany"),
    city("Rome", 41.9028, 12.4964, "Italy"),
    city("Madrid", 40.4168, -3.7038, "Spain"),
    city("Moscow", 55.7558, 37.6173, "Russia"),
    city("Beijing", 39.9042, 116.4074, "China"),
    city("Shanghai", 31.2304, 121.4737, "China"),
    city("Mumbai", 19.0760, 72.8777, "India"),
    city("São Paulo", -23.5505, -46.6333, "Brazil"),
    city("Rio de Janeiro", -22.9068, -43.1729, "Brazil"),
    city("Mexico City", 19.4326, -99.1332, "Mexico"),
    city("Cairo", 30.0444, 31.2357, "Egypt"),
    city("Lagos", 6.5244, 3.3792, "Nigeria"),
    city("Johannesburg", -26.2041, 28.0473, "South Africa"),
    city("Seoul", 37.5665, 126.9780, "South Korea"),
    city("Bangkok", 13.7563, 100.5018, "Thailand"),
    city("Kuala Lumpur", 3.1390, 101.6869, "Malaysia"),
    city("Jakarta", -6.2088, 106.8456, "Indonesia"),
    city("Buenos Aires", -34.6037, -58.3816, "Argentina"),
    city("Amsterdam", 52.3676, 4.9041, "Netherlands"),
    city("Vienna", 48.2082, 16.3738, "Austria"),
    city("Athens", 37.9838, 23.7275, "Greece"),
    city("Stockholm", 59.3293, 18.0686, "Sweden"),
    city("Oslo", 59.9139, 10.7522, "Norway"),
    city("Helsinki", 60.1699, 24.9384, "Finland"),
    city("Dublin", 53.3498, -6.2603, "Ireland"),
    city("Brussels", 50.8503, 4.3517, "Belgium"),
    city("Zurich", 47.3769, 8.5417, "Switzerland"),
    city("Prague", 50.0755, 14.4378, "Czech Republic"),
    city("Warsaw", 52.2297, 21.0122, "Poland"),
    city("Budapest", 47.4979, 19.0402, "Hungary"),
    city("Lisbon", 38.7223, -9.1393, "Portugal"),
    city("Copenhagen", 55.6761, 12.5683, "Denmark"),
    city("Reykjavik", 64.1466, -21.9426, "Iceland"),
    city("Havana", 23.1136, -82.3666, "Cuba"),
    city("Kingston", 18.1096, -77.2975, "Jamaica"),
    city("Panama City", 8.9823, -79.5199, "Panama"),
    city("Santiago", -33.4489, -70.6693, "Chile"),
    city("Lima", -12.0464, -77.0428, "Peru"),
];

/// Country names as reported by IP geolocation, mapped to their capitals.
pub static COUNTRY_CAPITALS: &[(&str, &str)] = &[
    ("Argentina", "Buenos Aires"),
    ("Australia", "Canberra"),
    ("Austria", "Vienna"),
    ("Belgium", "Brussels"),
    ("Brazil", "Brasília"),
    ("Canada", "Ottawa"),
    ("Cape Verde", "Praia"),
    ("Chile", "Santiago"),
    ("China", "Beijing"),
    ("Cuba", "Havana"),
    ("Czech Republic", "Prague"),
    ("Denmark", "Copenhagen"),
    ("Egypt", "Cairo"),
    ("Ethiopia", "Addis Ababa"),
    ("Finland", "Helsinki"),
    ("France", "Paris"),
    ("Germany", "Berlin"),
    ("Greece", "Athens"),
    ("Hungary", "Budapest"),
    ("Iceland", "Reykjavik"),
    ("India", "New Delhi"),
    ("Indonesia", "Jakarta"),
    ("Ireland", "Dublin"),
    ("Italy", "Rome"),
    ("Jamaica", "Kingston"),
    ("Japan", "Tokyo"),
    ("Kenya", "Nairobi"),
    ("Malaysia", "Kuala Lumpur"),
    ("Mexico", "Mexico City"),
    ("Netherlands", "Amsterdam"),
    ("Nigeria", "Abuja"),
    ("Norway", "Oslo"),
    ("Panama", "Panama City"),
    ("Peru", "Lima"),
    ("Poland", "Warsaw"),
    ("Portugal", "Lisbon"),
    ("Russia", "Moscow"),
    ("Saudi Arabia", "Riyadh"),
    ("Singapore", "Singapore"),
    ("South Africa", "Pretoria"),
    ("South Korea", "Seoul"),
    ("Spain", "Madrid"),
    ("Sudan", "Khartoum"),
    ("Sweden", "Stockholm"),
    ("Switzerland", "Bern"),
    ("Thailand", "Bangkok"),
    ("Turkey", "Ankara"),
    ("United Arab Emirates", "Abu Dhabi"),
    ("United Kingdom", "London"),
    ("United States", "Washington, D.C."),
];

pub fn find_city(name: &str) -> Option<&'static City> {
    let name = name.trim();
    COMMON_CITIES
        .iter()
        .find(|c| c.name.to_lowercase() == name.to_lowercase())
}

pub fn city_near(coordinate: GeoCoordinate) -> Option<&'static City> {
    COMMON_CITIES.iter().find(|c| {
        (c.latitude - coordinate.latitude).abs() < CITY_MATCH_TOLERANCE
            && (c.longitude - coordinate.longitude).abs() < CITY_MATCH_TOLERANCE
    })
}

pub fn countries() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for c in COMMON_CITIES {
        if !seen.contains(&c.country) {
            seen.push(c.country);
        }
    }
    seen
}

pub fn cities_by_country(country: &str) -> Vec<&'static City> {
    COMMON_CITIES.iter().filter(|c| c.country == country).collect()
}

pub fn capital_for_country(country: &str) -> Option<&'static str> {
    let normalized = normalize_country_name(country);
    COUNTRY_CAPITALS
        .iter()
        .find(|(name, _)| *name == country || *name == normalized)
        .map(|(_, capital)| *capital)
}

/// Title-cases each whitespace separated word.
pub fn normalize_country_name(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
