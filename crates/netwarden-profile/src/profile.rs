use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::source::ProfileSource;

/// An application profile: the policy record the firewall applies to one
/// identified application (or one pseudo-application).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Identifier, unique within its source scope. Never changes.
    pub id: String,
    pub source: ProfileSource,
    /// Human-readable name
    pub name: String,
    pub description: String,
    /// Executable this profile is associated with
    pub linked_path: String,
    /// Per-app settings of internal profiles are ignored by enforcement.
    pub internal: bool,
    pub settings: Settings,
    /// Creation time, Unix seconds
    pub created: i64,
    /// Last user edit, Unix seconds; 0 if never edited
    pub last_edited: i64,
}

impl Profile {
    /// Allocate a new profile record.
    ///
    /// `settings` of `None` means no overrides. The name defaults to the file
    /// name of `linked_path` until something more specific is assigned.
    pub fn new(
        source: ProfileSource,
        id: impl Into<String>,
        linked_path: impl Into<String>,
        settings: Option<Settings>,
    ) -> Self {
        let linked_path = linked_path.into();
        let name = linked_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            id: id.into(),
            source,
            name,
            description: String::new(),
            linked_path,
            internal: false,
            settings: settings.unwrap_or_default(),
            created: Utc::now().timestamp(),
            last_edited: 0,
        }
    }

    /// Identifier qualified by scope, e.g. `local/_system`.
    pub fn scoped_id(&self) -> String {
        make_scoped_id(self.source, &self.id)
    }

    /// Whether a user has ever edited this profile.
    pub fn is_edited(&self) -> bool {
        self.last_edited > 0
    }

    /// Record a user edit at `at` (Unix seconds).
    pub fn mark_edited(&mut self, at: i64) {
        self.last_edited = at;
    }
}

/// Format a scoped identifier without a profile at hand.
pub fn make_scoped_id(source: ProfileSource, id: &str) -> String {
    format!("{}/{}", source, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{option_keys, SettingValue};

    #[test]
    fn new_profile_is_unedited_and_stamped() {
        let before = Utc::now().timestamp();
        let profile = Profile::new(ProfileSource::Local, "_system", "/usr/lib/systemd/systemd", None);

        assert_eq!(profile.id, "_system");
        assert_eq!(profile.name, "systemd");
        assert!(profile.settings.is_empty());
        assert!(!profile.internal);
        assert!(!profile.is_edited());
        assert!(profile.created >= before);
    }

    #[test]
    fn new_profile_keeps_supplied_settings() {
        let mut settings = Settings::new();
        settings.insert(option_keys::DEFAULT_ACTION.into(), SettingValue::from("block"));

        let profile = Profile::new(ProfileSource::Synced, "app", "C:\\Apps\\app.exe", Some(settings.clone()));
        assert_eq!(profile.settings, settings);
        assert_eq!(profile.name, "app.exe");
    }

    #[test]
    fn scoped_id_includes_source() {
        let local = Profile::new(ProfileSource::Local, "_system", "", None);
        assert_eq!(local.scoped_id(), "local/_system");

        let synced = Profile::new(ProfileSource::Synced, "_system", "", None);
        assert_eq!(synced.scoped_id(), "synced/_system");
    }

    #[test]
    fn mark_edited_sets_sentinel() {
        let mut profile = Profile::new(ProfileSource::Local, "x", "", None);
        profile.mark_edited(1);
        assert!(profile.is_edited());
    }

    #[test]
    fn serializes_camel_case() {
        let profile = Profile::new(ProfileSource::Local, "_system", "", None);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["source"], "local");
        assert!(json.get("linkedPath").is_some());
        assert!(json.get("lastEdited").is_some());
    }
}
