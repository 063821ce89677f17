//! Per-profile setting values.
//!
//! Settings are keyed by option keys owned by the configuration registry.
//! This crate treats keys as opaque strings; [`option_keys`] only names the
//! ones built-in profiles seed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Settings bundle of a profile, ordered by option key.
pub type Settings = BTreeMap<String, SettingValue>;

/// Option keys referenced by built-in profile defaults.
pub mod option_keys {
    /// Action taken when no rule matches.
    pub const DEFAULT_ACTION: &str = "filter/defaultAction";
    /// Outgoing endpoint rules.
    pub const ENDPOINTS: &str = "filter/endpoints";
    /// Incoming (service) endpoint rules.
    pub const SERVICE_ENDPOINTS: &str = "filter/serviceEndpoints";
    /// Enabled filter lists.
    pub const FILTER_LISTS: &str = "filter/lists";
}

/// A single setting value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    String(String),
    StringList(Vec<String>),
}

impl SettingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SettingValue::StringList(list) => Some(list.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        SettingValue::StringList(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_json_shapes() {
        let mut settings = Settings::new();
        settings.insert(option_keys::DEFAULT_ACTION.into(), "permit".into());
        settings.insert(option_keys::FILTER_LISTS.into(), Vec::<String>::new().into());

        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(
            json,
            r#"{"filter/defaultAction":"permit","filter/lists":[]}"#
        );

        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn accessors_match_variant() {
        let action = SettingValue::from("block");
        assert_eq!(action.as_str(), Some("block"));
        assert!(action.as_list().is_none());

        let rules = SettingValue::from(vec!["+ Localhost".to_string()]);
        assert_eq!(rules.as_list(), Some(&["+ Localhost".to_string()][..]));
        assert!(rules.as_str().is_none());
    }
}
