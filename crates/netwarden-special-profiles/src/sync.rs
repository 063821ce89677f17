use netwarden_profile::Profile;
use tracing::debug;

use crate::catalog::definition_for;

/// Result of [`reconcile`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Not a special profile; left untouched.
    NotSpecial,
    /// Special profile, already current.
    Unchanged,
    /// Special profile, metadata was patched and should be saved.
    Updated,
}

impl ReconcileOutcome {
    pub fn is_recognized(&self) -> bool {
        !matches!(self, ReconcileOutcome::NotSpecial)
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, ReconcileOutcome::Updated)
    }
}

/// Bring a special profile's name, description and linked path in line with
/// the catalog and the running binary.
///
/// Settings are never touched, and neither is `last_edited`: display
/// metadata follows the catalog even on profiles the user customized.
pub fn reconcile(profile: &mut Profile, linked_path: &str) -> ReconcileOutcome {
    let Some(def) = definition_for(&profile.id) else {
        return ReconcileOutcome::NotSpecial;
    };

    let mut changed = false;

    if profile.name != def.name {
        debug!(profile = %profile.scoped_id(), old = %profile.name, new = def.name, "updating special profile name");
        profile.name = def.name.to_string();
        changed = true;
    }

    if profile.description != def.description {
        debug!(profile = %profile.scoped_id(), "updating special profile description");
        profile.description = def.description.to_string();
        changed = true;
    }

    if profile.linked_path != linked_path {
        debug!(profile = %profile.scoped_id(), old = %profile.linked_path, new = linked_path, "updating special profile linked path");
        profile.linked_path = linked_path.to_string();
        changed = true;
    }

    if changed {
        ReconcileOutcome::Updated
    } else {
        ReconcileOutcome::Unchanged
    }
}
