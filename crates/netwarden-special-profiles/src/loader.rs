//! Wires the catalog, factory, synchronizer and upgrade gate to a
//! [`ProfileStore`].
//!
//! For a special ID the loader:
//! 1. creates and saves a fresh profile if none is stored,
//! 2. replaces the stored profile if the upgrade gate says it is obsolete,
//! 3. otherwise patches its metadata, saving only if something changed.

use netwarden_profile::{make_scoped_id, Profile, ProfileSource, ProfileStore};
use tracing::{debug, info};

use crate::config::SpecialProfilesConfig;
use crate::error::ProfileResult;
use crate::factory::new_special_profile;
use crate::identity::SpecialProfileId;
use crate::sync::reconcile;
use crate::upgrade::needs_reset;

/// What the loader did to produce a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadAction {
    /// Nothing was stored; a new profile was created.
    Created,
    /// The stored profile was obsolete and has been replaced.
    Reset,
    /// The stored profile's metadata was patched.
    Updated,
    /// The stored profile was returned as is.
    Unchanged,
}

/// A special profile as returned by [`SpecialProfileLoader::load`].
#[derive(Clone, Debug)]
pub struct LoadedProfile {
    pub profile: Profile,
    pub action: LoadAction,
}

/// Loads special profiles from a store, keeping them current.
///
/// Callers serialize loads of the same profile ID; the loader does not lock.
pub struct SpecialProfileLoader<S> {
    store: S,
    config: SpecialProfilesConfig,
}

impl<S: ProfileStore> SpecialProfileLoader<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SpecialProfilesConfig::default())
    }

    pub fn with_config(store: S, config: SpecialProfilesConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SpecialProfilesConfig {
        &self.config
    }

    /// Load the special profile for `profile_id`.
    ///
    /// Returns `Ok(None)` for ordinary profile IDs.
    pub fn load(&self, profile_id: &str, linked_path: &str) -> ProfileResult<Option<LoadedProfile>> {
        let Some(special) = SpecialProfileId::from_profile_id(profile_id) else {
            debug!(profile_id, "not a special profile");
            return Ok(None);
        };
        self.load_special(special, linked_path).map(Some)
    }

    /// Load the profile for a known special identity.
    pub fn load_special(
        &self,
        special: SpecialProfileId,
        linked_path: &str,
    ) -> ProfileResult<LoadedProfile> {
        let scoped_id = make_scoped_id(ProfileSource::Local, special.as_str());

        let Some(mut profile) = self.store.get_profile(&scoped_id)? else {
            let profile = new_special_profile(special, linked_path);
            self.store.save_profile(&profile)?;
            info!(profile = %scoped_id, "created special profile");
            return Ok(LoadedProfile {
                profile,
                action: LoadAction::Created,
            });
        };

        if self.config.reset_obsolete && needs_reset(Some(&profile)) {
            // Saved under the same scoped ID, replacing the obsolete record.
            let profile = new_special_profile(special, linked_path);
            self.store.save_profile(&profile)?;
            info!(profile = %scoped_id, "reset obsolete special profile");
            return Ok(LoadedProfile {
                profile,
                action: LoadAction::Reset,
            });
        }

        if self.config.sync_metadata && reconcile(&mut profile, linked_path).is_changed() {
            self.store.save_profile(&profile)?;
            return Ok(LoadedProfile {
                profile,
                action: LoadAction::Updated,
            });
        }

        Ok(LoadedProfile {
            profile,
            action: LoadAction::Unchanged,
        })
    }
}
