//! Fixed value lists the profile generator samples from.

/// A city a generated profile can live in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// City name
    pub name: &'static str,
    /// State abbreviation
    pub state: &'static str,
    /// Latitude of the city centre
    pub latitude: f64,
    /// Longitude of the city centre
    pub longitude: f64,
}

pub const CITIES: [City; 3] = [
    City { name: "São Paulo", state: "SP", latitude: -23.5505, longitude: -46.6333 },
    City { name: "Rio de Janeiro", state: "RJ", latitude: -22.9068, longitude: -43.1729 },
    City { name: "Belo Horizonte", state: "MG", latitude: -19.9191, longitude: -43.9386 },
];

pub const INTERESTS: [&str; 8] = [
    "Travel",
    "Music",
    "Movies",
    "Sports",
    "Reading",
    "Photography",
    "Cooking",
    "Art",
];

pub const PROFESSIONS: [&str; 7] = [
    "Engineer",
    "Designer",
    "Teacher",
    "Doctor",
    "Lawyer",
    "Architect",
    "Journalist",
];

/// Interests drawn per profile.
pub const INTERESTS_PER_PROFILE: usize = 4;

/// Photos attached to every profile.
pub const PHOTOS_PER_PROFILE: usize = 3;

/// Photo ids are drawn from `1..=MAX_PHOTO_ID`.
pub const MAX_PHOTO_ID: u32 = 999;

pub const AGE_RANGE: std::ops::RangeInclusive<u8> = 18..=45;
pub const FEMALE_HEIGHT_CM: std::ops::RangeInclusive<u16> = 150..=175;
pub const MALE_HEIGHT_CM: std::ops::RangeInclusive<u16> = 160..=185;

pub const DEFAULT_BIO: &str = "Interesting bio generated automatically ✨";
pub const DEFAULT_EDUCATION: &str = "Bachelor's Degree";

/// Features listed by the access-level showcase.
pub const FEATURES: [&str; 8] = [
    "Swipe/Discovery",
    "Chat/Messages",
    "Premium Features",
    "AI Counselor",
    "Photo Upload",
    "GPS Location",
    "Notifications",
    "Analytics",
];

/// Builds the placeholder photo URL for `id`.
pub fn photo_url(id: u32) -> String {
    format!("https://picsum.photos/400/400?random={}", id)
}
