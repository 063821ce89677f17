use crate::profile::Profile;
use crate::StoreResult;

/// Storage interface for profile records.
///
/// Records are keyed by their scoped ID (see [`Profile::scoped_id`]).
/// Implementations serialize concurrent access to a single record.
pub trait ProfileStore: Send + Sync {
    /// Get one profile by scoped ID.
    fn get_profile(&self, scoped_id: &str) -> StoreResult<Option<Profile>>;

    /// Insert or replace a profile.
    fn save_profile(&self, profile: &Profile) -> StoreResult<()>;

    /// Remove a profile. Fails with `NotFound` if nothing is stored under the key.
    fn delete_profile(&self, scoped_id: &str) -> StoreResult<()>;
}
