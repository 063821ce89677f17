//! In-memory reference implementation of [`ProfileStore`].
//!
//! Deterministic and test-friendly. Real deployments back profiles with the
//! application database.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::profile::Profile;
use crate::store::ProfileStore;
use crate::{StoreError, StoreResult};

/// In-memory profile store.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> StoreResult<usize> {
        let guard = self
            .profiles
            .read()
            .map_err(|_| StoreError::Backend("profiles lock poisoned".to_string()))?;
        Ok(guard.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get_profile(&self, scoped_id: &str) -> StoreResult<Option<Profile>> {
        let guard = self
            .profiles
            .read()
            .map_err(|_| StoreError::Backend("profiles lock poisoned".to_string()))?;
        Ok(guard.get(scoped_id).cloned())
    }

    fn save_profile(&self, profile: &Profile) -> StoreResult<()> {
        let mut guard = self
            .profiles
            .write()
            .map_err(|_| StoreError::Backend("profiles lock poisoned".to_string()))?;
        guard.insert(profile.scoped_id(), profile.clone());
        Ok(())
    }

    fn delete_profile(&self, scoped_id: &str) -> StoreResult<()> {
        let mut guard = self
            .profiles
            .write()
            .map_err(|_| StoreError::Backend("profiles lock poisoned".to_string()))?;
        guard
            .remove(scoped_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(scoped_id.to_string()))
    }
}
