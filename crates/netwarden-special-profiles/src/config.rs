use serde::{Deserialize, Serialize};

use crate::error::ProfileResult;

/// Loader configuration.
///
/// Only gates what [`crate::SpecialProfileLoader`] does with existing
/// records; the catalog and the cutoff table are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialProfilesConfig {
    /// Rebuild untouched records that predate their identity's cutoff.
    pub reset_obsolete: bool,
    /// Keep name, description and linked path in sync with the catalog.
    pub sync_metadata: bool,
}

impl Default for SpecialProfilesConfig {
    fn default() -> Self {
        Self {
            reset_obsolete: true,
            sync_metadata: true,
        }
    }
}

impl SpecialProfilesConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    #[test]
    fn defaults_enable_everything() {
        let config = SpecialProfilesConfig::default();
        assert!(config.reset_obsolete);
        assert!(config.sync_metadata);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SpecialProfilesConfig::from_json(r#"{"reset_obsolete": false}"#).unwrap();
        assert!(!config.reset_obsolete);
        assert!(config.sync_metadata);
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = SpecialProfilesConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ProfileError::InvalidConfig(_)));
    }
}
