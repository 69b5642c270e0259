use crate::demo::catalog::{
    self, AGE_RANGE, CITIES, DEFAULT_BIO, DEFAULT_EDUCATION, FEMALE_HEIGHT_CM, INTERESTS,
    INTERESTS_PER_PROFILE, MALE_HEIGHT_CM, MAX_PHOTO_ID, PHOTOS_PER_PROFILE, PROFESSIONS,
};
use crate::types::{AccessFlags, Gender, Intention, Orientation, UserRecord};
use fake::{faker::internet::en::SafeEmail, faker::name::en::Name, Fake};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use uuid::Uuid;

const GENDERS: [Gender; 2] = [Gender::Female, Gender::Male];

/// Fabricates complete user profiles from the fixed catalogs.
///
/// All randomness comes from the injected RNG, so a seeded generator yields the
/// same sequence of profiles on every run.
pub struct ProfileGenerator<R: Rng = StdRng> {
    rng: R,
}

impl ProfileGenerator<StdRng> {
    /// Create a generator whose output is reproducible for `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ProfileGenerator<R> {
    /// Wrap an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Produce one fully populated profile for `name` / `email`.
    pub fn generate(&mut self, name: &str, email: &str) -> UserRecord {
        let city = CITIES[self.rng.gen_range(0..CITIES.len())];
        let gender = GENDERS[self.rng.gen_range(0..GENDERS.len())];
        let age = self.rng.gen_range(AGE_RANGE);
        let interests = INTERESTS
            .choose_multiple(&mut self.rng, INTERESTS_PER_PROFILE)
            .map(|interest| interest.to_string())
            .collect();
        let profession = PROFESSIONS[self.rng.gen_range(0..PROFESSIONS.len())];
        let height_cm = match gender {
            Gender::Male => self.rng.gen_range(MALE_HEIGHT_CM),
            Gender::Female => self.rng.gen_range(FEMALE_HEIGHT_CM),
        };
        let photos = self.random_photos();
        let user_id = self.random_uuid();

        log::debug!("Generated {} profile for {} ({})", gender, name, email);

        UserRecord {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
            age,
            bio: DEFAULT_BIO.to_string(),
            city: city.name.to_string(),
            state: city.state.to_string(),
            latitude: city.latitude,
            longitude: city.longitude,
            gender,
            orientation: Orientation::Straight,
            intention: Intention::Dating,
            interests,
            education: DEFAULT_EDUCATION.to_string(),
            profession: profession.to_string(),
            height_cm,
            photos,
            access: AccessFlags::full(),
            profile_complete: true,
        }
    }

    /// Three placeholder photo URLs with distinct ids in `1..=999`.
    pub fn random_photos(&mut self) -> Vec<String> {
        rand::seq::index::sample(&mut self.rng, MAX_PHOTO_ID as usize, PHOTOS_PER_PROFILE)
            .into_iter()
            .map(|index| catalog::photo_url(index as u32 + 1))
            .collect()
    }

    /// A random display name and matching-looking email address.
    pub fn random_identity(&mut self) -> (String, String) {
        let name: String = Name().fake_with_rng(&mut self.rng);
        let email: String = SafeEmail().fake_with_rng(&mut self.rng);
        (name, email)
    }

    fn random_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}
