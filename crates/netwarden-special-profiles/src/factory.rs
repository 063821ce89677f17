use netwarden_profile::{Profile, ProfileSource};
use tracing::debug;

use crate::catalog::definition;
use crate::identity::SpecialProfileId;

/// Create a fresh special profile for `profile_id`.
///
/// Returns `None` if the ID is not special; the caller then creates an
/// ordinary profile. Nothing is persisted here.
pub fn create_special_profile(profile_id: &str, linked_path: &str) -> Option<Profile> {
    let Some(special) = SpecialProfileId::from_profile_id(profile_id) else {
        debug!(profile_id, "not a special profile, nothing to create");
        return None;
    };
    Some(new_special_profile(special, linked_path))
}

/// Create a fresh profile for a known special identity.
pub fn new_special_profile(special: SpecialProfileId, linked_path: &str) -> Profile {
    let def = definition(special);

    let mut profile = Profile::new(
        ProfileSource::Local,
        special.as_str(),
        linked_path,
        Some(def.settings()),
    );
    profile.name = def.name.to_string();
    profile.description = def.description.to_string();
    profile.internal = special.is_internal();
    profile
}
