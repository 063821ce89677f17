//! Upgrade gate: decides when an untouched special profile predates a
//! definition change and must be rebuilt instead of patched.
//!
//! Cutoffs are creation-date thresholds tied to specific past releases, not
//! a versioning scheme. When a definition changes in a way that patching
//! cannot express (e.g. a new default settings bundle), append an entry to
//! [`UPGRADE_CUTOFFS`].

use chrono::{NaiveDate, NaiveTime};
use netwarden_profile::{Profile, ProfileSource};
use tracing::{info, warn};

use crate::error::{ProfileError, ProfileResult};
use crate::identity::SpecialProfileId;

/// Date format of cutoff constants: day.month.year, no zero padding needed.
pub const CUTOFF_DATE_FORMAT: &str = "%d.%m.%Y";

/// Identities whose existing records are reset if created before the date.
///
/// Append-only.
pub const UPGRADE_CUTOFFS: &[(SpecialProfileId, &str)] = &[
    (SpecialProfileId::NetwardenApp, "8.9.2021"),
    (SpecialProfileId::SystemResolver, "20.11.2021"),
];

/// Whether an existing profile should be discarded and recreated.
///
/// Only local, never-edited special profiles with a registered cutoff are
/// eligible.
pub fn needs_reset(profile: Option<&Profile>) -> bool {
    let Some(profile) = profile else {
        return false;
    };

    // Special profiles live in the local scope only.
    if profile.source != ProfileSource::Local {
        return false;
    }
    // Edited by the user, keep their settings.
    if profile.is_edited() {
        return false;
    }

    let Some(special) = SpecialProfileId::from_profile_id(&profile.id) else {
        return false;
    };

    match cutoff_for(special) {
        Some(cutoff) => can_be_upgraded(profile, cutoff),
        None => false,
    }
}

/// The registered cutoff date for an identity, if any.
pub fn cutoff_for(special: SpecialProfileId) -> Option<&'static str> {
    UPGRADE_CUTOFFS
        .iter()
        .find(|(id, _)| *id == special)
        .map(|(_, date)| *date)
}

/// Whether `profile` was created before `cutoff`.
///
/// A malformed cutoff is logged and treated as "no upgrade".
pub fn can_be_upgraded(profile: &Profile, cutoff: &str) -> bool {
    let cutoff_ts = match parse_cutoff(cutoff) {
        Ok(ts) => ts,
        Err(err) => {
            warn!(error = %err, "failed to parse special profile cutoff");
            return false;
        }
    };

    if profile.created < cutoff_ts {
        info!(profile = %profile.scoped_id(), cutoff, "upgrading special profile");
        return true;
    }

    false
}

/// Parse a cutoff date into Unix seconds at UTC midnight.
pub fn parse_cutoff(date: &str) -> ProfileResult<i64> {
    let day = NaiveDate::parse_from_str(date, CUTOFF_DATE_FORMAT).map_err(|source| {
        ProfileError::InvalidCutoff {
            date: date.to_string(),
            source,
        }
    })?;
    Ok(day.and_time(NaiveTime::MIN).and_utc().timestamp())
}
