//! Profile data fabricated by the demo generator.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Gender recorded on a generated profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Female profile
    Female,
    /// Male profile
    Male,
}

/// Sexual orientation shown on the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    /// Straight
    Straight,
}

/// What the user is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intention {
    /// Dating
    Dating,
}

/// Access tier granted to a freshly created account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessLevel {
    /// Every feature unlocked, no waiting list
    FullAccess,
}

/// Per-feature access flags carried by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessFlags {
    /// Overall access tier
    pub level: AccessLevel,
    /// Swipe / discovery screen
    pub can_access_swipe: bool,
    /// Chat and messages
    pub can_access_chat: bool,
    /// Premium features
    pub can_access_premium: bool,
    /// AI counselor
    pub can_access_ai: bool,
}

impl AccessFlags {
    /// Flags for an account with every feature unlocked.
    pub fn full() -> Self {
        Self {
            level: AccessLevel::FullAccess,
            can_access_swipe: true,
            can_access_chat: true,
            can_access_premium: true,
            can_access_ai: true,
        }
    }
}

/// One synthetic user profile.
///
/// Records are produced whole by [`ProfileGenerator`](crate::demo::generator::ProfileGenerator);
/// the only field a flow touches afterwards is `phone`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Profile id, drawn from the generator's RNG
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Phone number, set only by the phone sign-up flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Age in years
    pub age: u8,
    /// Profile bio
    pub bio: String,
    /// City name
    pub city: String,
    /// State abbreviation
    pub state: String,
    /// City latitude
    pub latitude: f64,
    /// City longitude
    pub longitude: f64,
    /// Gender
    pub gender: Gender,
    /// Orientation
    pub orientation: Orientation,
    /// Intention
    pub intention: Intention,
    /// Distinct interests in the order they were drawn
    pub interests: Vec<String>,
    /// Education level
    pub education: String,
    /// Profession
    pub profession: String,
    /// Height in centimetres
    pub height_cm: u16,
    /// Photo URLs
    pub photos: Vec<String>,
    /// Feature access
    pub access: AccessFlags,
    /// Whether onboarding is finished
    pub profile_complete: bool,
}

impl UserRecord {
    /// Returns true when every required field carries a value.
    pub fn is_complete(&self) -> bool {
        !self.user_id.is_nil()
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.age > 0
            && !self.bio.is_empty()
            && !self.city.is_empty()
            && !self.state.is_empty()
            && self.latitude.is_finite()
            && self.longitude.is_finite()
            && !self.interests.is_empty()
            && self.interests.iter().all(|i| !i.is_empty())
            && !self.education.is_empty()
            && !self.profession.is_empty()
            && self.height_cm > 0
            && !self.photos.is_empty()
            && self.photos.iter().all(|p| !p.is_empty())
    }

    /// `"City, ST"` as shown on the profile card.
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
