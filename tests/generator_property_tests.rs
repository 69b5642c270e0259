use autosignup_demo::demo::catalog::{
    CITIES, INTERESTS, INTERESTS_PER_PROFILE, MAX_PHOTO_ID, PHOTOS_PER_PROFILE, PROFESSIONS,
};
use autosignup_demo::{AccessLevel, Gender, Intention, Orientation, ProfileGenerator};
use std::collections::HashSet;

const PHOTO_PREFIX: &str = "https://picsum.photos/400/400?random=";

#[test]
fn test_every_record_is_complete_and_in_range() {
    let mut generator = ProfileGenerator::seeded(2024);
    for i in 0..500 {
        let email = format!("user{}@example.com", i);
        let user = generator.generate("Generated User", &email);

        assert!(user.is_complete(), "record {} incomplete: {:?}", i, user);
        assert_eq!(user.email, email);
        assert!(user.phone.is_none());
        assert!((18..=45).contains(&user.age), "age {} out of range", user.age);
        match user.gender {
            Gender::Female => assert!((150..=175).contains(&user.height_cm)),
            Gender::Male => assert!((160..=185).contains(&user.height_cm)),
        }
        assert_eq!(user.orientation, Orientation::Straight);
        assert_eq!(user.intention, Intention::Dating);
        assert_eq!(user.access.level, AccessLevel::FullAccess);
        assert!(user.profile_complete);
        assert!(PROFESSIONS.contains(&user.profession.as_str()));
        assert!(CITIES
            .iter()
            .any(|c| c.name == user.city && c.state == user.state && c.latitude == user.latitude));
    }
}

#[test]
fn test_interests_are_distinct_catalog_entries() {
    let mut generator = ProfileGenerator::seeded(7);
    for _ in 0..300 {
        let user = generator.generate("Someone", "someone@example.com");
        assert_eq!(user.interests.len(), INTERESTS_PER_PROFILE);
        let unique: HashSet<&str> = user.interests.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), INTERESTS_PER_PROFILE);
        assert!(unique.iter().all(|i| INTERESTS.contains(i)));
    }
}

#[test]
fn test_photos_follow_template() {
    let mut generator = ProfileGenerator::seeded(99);
    for _ in 0..300 {
        let user = generator.generate("Someone", "someone@example.com");
        assert_eq!(user.photos.len(), PHOTOS_PER_PROFILE);
        for url in &user.photos {
            let id: u32 = url
                .strip_prefix(PHOTO_PREFIX)
                .and_then(|rest| rest.parse().ok())
                .unwrap_or_else(|| panic!("unexpected photo url {}", url));
            assert!((1..=MAX_PHOTO_ID).contains(&id));
        }
    }
}

#[test]
fn test_both_genders_and_all_cities_show_up() {
    let mut generator = ProfileGenerator::seeded(123);
    let mut genders = HashSet::new();
    let mut cities = HashSet::new();
    for _ in 0..200 {
        let user = generator.generate("Someone", "someone@example.com");
        genders.insert(user.gender.to_string());
        cities.insert(user.city);
    }
    assert_eq!(genders.len(), 2);
    assert_eq!(cities.len(), CITIES.len());
}

#[test]
fn test_fixed_seed_reproduces_sequence() {
    let mut a = ProfileGenerator::seeded(31337);
    let mut b = ProfileGenerator::seeded(31337);
    for _ in 0..20 {
        assert_eq!(a.generate("Same", "same@example.com"), b.generate("Same", "same@example.com"));
    }
    assert_eq!(a.random_identity(), b.random_identity());
}

#[test]
fn test_record_serializes_with_screaming_enums() {
    let user = ProfileGenerator::seeded(1).generate("Json User", "json@example.com");
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["access"]["level"], "FULL_ACCESS");
    assert_eq!(value["orientation"], "STRAIGHT");
    assert!(value.get("phone").is_none());
}
