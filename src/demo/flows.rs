//! The five demo routines.
//!
//! Every routine branches only on whether its identifier is already in the
//! store. Nothing here can fail except writing to the narrator.

use crate::demo::catalog::FEATURES;
use crate::demo::narrator::Narrator;
use crate::demo::pacing::Pacer;
use crate::demo::{DemoContext, FlowOutcome};
use crate::types::UserRecord;
use log::{debug, info};
use rand::Rng;
use std::io::{self, Write};

pub const GOOGLE_NAME: &str = "João Silva";
pub const GOOGLE_EMAIL: &str = "joao.silva@gmail.com";
pub const SIGNUP_NAME: &str = "Maria Santos";
pub const SIGNUP_EMAIL: &str = "maria.santos@email.com";
pub const SIGNUP_PASSWORD: &str = "senha123";
pub const PHONE_NAME: &str = "Carlos Oliveira";
pub const PHONE_EMAIL: &str = "carlos@email.com";
pub const PHONE_NUMBER: &str = "+5511999999999";
pub const SHOWCASE_NAME: &str = "Ana Costa";
pub const SHOWCASE_EMAIL: &str = "ana@teste.com";

/// Google login: looks up the account by email and creates a full profile on
/// the spot when there is none.
pub fn google_login<R, W, P>(ctx: &mut DemoContext<R>, n: &mut Narrator<W, P>) -> io::Result<FlowOutcome>
where
    R: Rng,
    W: Write,
    P: Pacer,
{
    n.header("DEMO: Google Login - Automatic Profile Creation")?;
    n.line(format!("👤 User: {}", GOOGLE_NAME))?;
    n.line(format!("📧 Email: {}", GOOGLE_EMAIL))?;
    n.blank()?;

    n.step("🔍 1. Checking whether a profile exists...")?;
    if ctx.store.contains(GOOGLE_EMAIL) {
        info!("Existing profile found for {}", GOOGLE_EMAIL);
        n.step("✅ 2. Profile found - signed in")?;
        ctx.current_user = Some(GOOGLE_EMAIL.to_string());
        return Ok(FlowOutcome::SignedIn(GOOGLE_EMAIL.to_string()));
    }

    n.step("❌ 2. Profile not found")?;
    n.step("⚡ 3. Creating profile automatically...")?;
    let user = ctx.generator.generate(GOOGLE_NAME, GOOGLE_EMAIL);

    n.step("📸 4. Generating random photos...")?;
    for (i, photo) in user.photos.iter().enumerate() {
        n.line(format!("      {}. {}", i + 1, photo))?;
    }

    n.step("📍 5. Setting default location...")?;
    n.line(format!("      📍 {}", user.location()))?;

    n.step("🎯 6. Granting full access...")?;
    n.line(format!("      🔓 AccessLevel: {}", user.access.level))?;

    n.step("🚀 7. Navigating to Discovery...")?;

    n.line("\n✅ RESULT:")?;
    n.line(format!("   👤 Name: {}", user.name))?;
    n.line(format!("   🎂 Age: {}", user.age))?;
    n.line(format!("   📝 Bio: {}", user.bio))?;
    n.line(format!("   📍 Location: {}", user.city))?;
    n.line(format!("   🎨 Interests: {}", user.interests.join(", ")))?;
    n.line(format!("   💼 Profession: {}", user.profession))?;
    n.line(format!("   📏 Height: {}cm", user.height_cm))?;
    n.line("   🔓 Access: FULL")?;

    ctx.store.insert(GOOGLE_EMAIL, user);
    ctx.current_user = Some(GOOGLE_EMAIL.to_string());
    info!("Created profile for {} via Google login", GOOGLE_EMAIL);
    Ok(FlowOutcome::Created(GOOGLE_EMAIL.to_string()))
}

/// Email login for an unknown address: redirect to sign-up, verify the
/// address, then create the profile.
pub fn email_signup<R, W, P>(ctx: &mut DemoContext<R>, n: &mut Narrator<W, P>) -> io::Result<FlowOutcome>
where
    R: Rng,
    W: Write,
    P: Pacer,
{
    n.header("DEMO: Email Login - Redirect to Sign-Up")?;
    n.line(format!("📧 Email: {}", SIGNUP_EMAIL))?;
    n.line(format!("🔒 Password: {}", SIGNUP_PASSWORD))?;
    n.blank()?;

    n.step("🔍 1. Checking whether the email exists...")?;
    if ctx.store.contains(SIGNUP_EMAIL) {
        info!("Email {} already registered", SIGNUP_EMAIL);
        n.step("✅ 2. Email already registered - signed in")?;
        return Ok(FlowOutcome::SignedIn(SIGNUP_EMAIL.to_string()));
    }

    n.step("❌ 2. Email not found")?;
    n.step("🔄 3. Redirecting to the sign-up screen...")?;
    n.step("📝 4. Showing the sign-up form...")?;
    n.step("✉️ 5. Sending verification email...")?;
    n.step("⏳ 6. Waiting for the user to verify...")?;
    n.step("✅ 7. Email verified!")?;
    n.step("⚡ 8. Creating full profile automatically...")?;

    let user = ctx.generator.generate(SIGNUP_NAME, SIGNUP_EMAIL);
    ctx.store.insert(SIGNUP_EMAIL, user);

    n.step("🚀 9. Navigating to Discovery...")?;
    n.line("\n✅ RESULT:")?;
    n.line("   📧 Email verified and profile created")?;
    n.line("   👤 User active in Discovery")?;
    n.line("   🎯 Full access to every feature")?;

    info!("Created profile for {} via email sign-up", SIGNUP_EMAIL);
    Ok(FlowOutcome::Created(SIGNUP_EMAIL.to_string()))
}

/// Phone login for an unknown number: SMS verification, then a profile stored
/// under the phone number.
pub fn phone_signup<R, W, P>(ctx: &mut DemoContext<R>, n: &mut Narrator<W, P>) -> io::Result<FlowOutcome>
where
    R: Rng,
    W: Write,
    P: Pacer,
{
    n.header("DEMO: Phone Login - Redirect to Sign-Up")?;
    n.line(format!("📱 Phone: {}", PHONE_NUMBER))?;
    n.blank()?;

    n.step("🔍 1. Checking whether the phone exists...")?;
    if ctx.store.contains(PHONE_NUMBER) {
        info!("Phone {} already registered", PHONE_NUMBER);
        n.step("✅ 2. Phone already registered - signed in")?;
        return Ok(FlowOutcome::SignedIn(PHONE_NUMBER.to_string()));
    }

    n.step("❌ 2. Phone not found")?;
    n.step("🔄 3. Redirecting to the sign-up screen...")?;
    n.step("📝 4. Showing the sign-up form...")?;
    n.step("📲 5. Sending SMS code...")?;
    n.step("⏳ 6. Waiting for code verification...")?;
    n.step("✅ 7. Code verified!")?;
    n.step("⚡ 8. Creating full profile automatically...")?;

    let mut user = ctx.generator.generate(PHONE_NAME, PHONE_EMAIL);
    user.phone = Some(PHONE_NUMBER.to_string());
    ctx.store.insert(PHONE_NUMBER, user);

    n.step("🚀 9. Navigating to Discovery...")?;
    n.line("\n✅ RESULT:")?;
    n.line("   📲 Phone verified and profile created")?;
    n.line("   👤 User active in Discovery")?;
    n.line("   🎯 Full access to every feature")?;

    info!("Created profile for {} via phone sign-up", PHONE_NUMBER);
    Ok(FlowOutcome::Created(PHONE_NUMBER.to_string()))
}

/// Generates a throwaway profile and prints every field. The record is not
/// stored.
pub fn fake_data_showcase<R, W, P>(ctx: &mut DemoContext<R>, n: &mut Narrator<W, P>) -> io::Result<FlowOutcome>
where
    R: Rng,
    W: Write,
    P: Pacer,
{
    n.header("DEMO: Realistic Fake Data Generation")?;
    n.line("🎲 Generating data for a test user...")?;
    n.blank()?;

    let user = ctx.generator.generate(SHOWCASE_NAME, SHOWCASE_EMAIL);
    debug!("Showcase profile {} discarded after printing", user.user_id);

    n.line("✅ GENERATED DATA:")?;
    print_profile(n, &user)?;
    Ok(FlowOutcome::Showcased)
}

/// Lists the features unlocked for every new account.
pub fn access_showcase<R, W, P>(_ctx: &mut DemoContext<R>, n: &mut Narrator<W, P>) -> io::Result<FlowOutcome>
where
    R: Rng,
    W: Write,
    P: Pacer,
{
    n.header("DEMO: Full Access Verification")?;
    n.line("🔍 Checking the system's access levels...")?;
    n.blank()?;

    for feature in FEATURES {
        n.line(format!("   {}: ✅ UNLOCKED", feature))?;
    }

    n.blank()?;
    n.line("🎯 SUMMARY:")?;
    n.line("   🚫 Waiting list: REMOVED")?;
    n.line("   ⚡ Immediate access: ACTIVE")?;
    n.line("   🔓 All features: UNLOCKED")?;
    n.line("   🚀 Full experience: GUARANTEED")?;
    Ok(FlowOutcome::Showcased)
}

/// Prints every field of `user`, its photos and its permission flags.
pub fn print_profile<W: Write, P: Pacer>(n: &mut Narrator<W, P>, user: &UserRecord) -> io::Result<()> {
    n.line(format!("   🆔 Id: {}", user.user_id))?;
    n.line(format!("   👤 Name: {}", user.name))?;
    n.line(format!("   📧 Email: {}", user.email))?;
    if let Some(phone) = &user.phone {
        n.line(format!("   📱 Phone: {}", phone))?;
    }
    n.line(format!("   🎂 Age: {}", user.age))?;
    n.line(format!("   📝 Bio: {}", user.bio))?;
    n.line(format!("   📍 Location: {}", user.location()))?;
    n.line(format!("   🌍 Coordinates: {}, {}", user.latitude, user.longitude))?;
    n.line(format!("   ⚧ Gender: {}", user.gender))?;
    n.line(format!("   💕 Orientation: {}", user.orientation))?;
    n.line(format!("   🎯 Intention: {}", user.intention))?;
    n.line(format!("   🎨 Interests: {}", user.interests.join(", ")))?;
    n.line(format!("   🎓 Education: {}", user.education))?;
    n.line(format!("   💼 Profession: {}", user.profession))?;
    n.line(format!("   📏 Height: {}cm", user.height_cm))?;
    n.blank()?;
    n.line("📸 GENERATED PHOTOS:")?;
    for (i, photo) in user.photos.iter().enumerate() {
        n.line(format!("   {}. {}", i + 1, photo))?;
    }
    n.blank()?;
    n.line("🔓 PERMISSIONS:")?;
    n.line(format!("   💕 Swipe: {}", mark(user.access.can_access_swipe)))?;
    n.line(format!("   💬 Chat: {}", mark(user.access.can_access_chat)))?;
    n.line(format!("   ⭐ Premium: {}", mark(user.access.can_access_premium)))?;
    n.line(format!("   🤖 AI: {}", mark(user.access.can_access_ai)))
}

fn mark(granted: bool) -> &'static str {
    if granted {
        "✅"
    } else {
        "❌"
    }
}
