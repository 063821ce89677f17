//! Built-in definitions of the special profiles.
//!
//! Definitions are compiled-in `'static` data. A definition change reaches
//! existing records through [`crate::reconcile`] (name and description) or
//! through an upgrade reset (settings), never on its own.

use netwarden_profile::{option_keys, SettingValue, Settings};

use crate::identity::{
    SpecialProfileId, NETWARDEN_APP_PROFILE_NAME, NETWARDEN_NOTIFIER_PROFILE_NAME,
    NETWARDEN_PROFILE_NAME, SYSTEM_PROFILE_NAME, SYSTEM_RESOLVER_PROFILE_NAME,
    UNIDENTIFIED_PROFILE_NAME,
};

/// A default setting value as stored in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultValue {
    Str(&'static str),
    List(&'static [&'static str]),
}

impl DefaultValue {
    fn to_setting(self) -> SettingValue {
        match self {
            DefaultValue::Str(s) => SettingValue::String(s.to_string()),
            DefaultValue::List(items) => {
                SettingValue::StringList(items.iter().map(|item| item.to_string()).collect())
            }
        }
    }
}

/// Catalog entry for one special identity.
#[derive(Debug, PartialEq, Eq)]
pub struct ProfileDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub default_settings: &'static [(&'static str, DefaultValue)],
}

impl ProfileDefinition {
    /// An owned copy of the default settings for a new profile.
    pub fn settings(&self) -> Settings {
        self.default_settings
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.to_setting()))
            .collect()
    }
}

pub const UNIDENTIFIED_PROFILE_DESCRIPTION: &str = "This is not a real application, but a collection of connections that could not be attributed to a process. This could be because Netwarden failed to identify the process, or simply because there is no process waiting for an incoming connection.

Seeing a lot of incoming connections here is normal, as this resembles the network chatter of other devices.
";

pub const SYSTEM_PROFILE_DESCRIPTION: &str = "This is the operating system itself.";

pub const SYSTEM_RESOLVER_PROFILE_DESCRIPTION: &str = "The System DNS Client is a system service that requires special handling. For regular network connections, the configured settings will apply as usual, but DNS requests coming from the System DNS Client are handled in a special way, as they could actually be coming from any other application on the system.

In order to respect the app settings of the actual application, DNS requests from the System DNS Client are only subject to the following settings:

- Outgoing Rules (without global rules)
- Block Bypassing
- Filter Lists

If you think you might have messed up the settings of the System DNS Client, just delete the profile below to reset it to the defaults.
";

pub const NETWARDEN_PROFILE_DESCRIPTION: &str =
    "This is Netwarden itself, which runs in the background as a system service. App specific settings have no effect.";

pub const NETWARDEN_APP_PROFILE_DESCRIPTION: &str = "This is the Netwarden user interface.";

pub const NETWARDEN_NOTIFIER_PROFILE_DESCRIPTION: &str = "This is the Netwarden tray notifier.";

// Resolved domains are checked again once attributed to the real process, so
// permitting here avoids a second prompt for the same domain.
const SYSTEM_RESOLVER_DEFAULTS: &[(&str, DefaultValue)] = &[
    (option_keys::DEFAULT_ACTION, DefaultValue::Str("permit")),
    (
        option_keys::SERVICE_ENDPOINTS,
        DefaultValue::List(&[
            "+ Localhost",
            "+ LAN UDP/5353", // mDNS
            "+ LAN UDP/5355", // LLMNR
            "+ LAN UDP/1900", // SSDP
        ]),
    ),
    // Filter lists are enforced on the attributed connection instead.
    (option_keys::FILTER_LISTS, DefaultValue::List(&[])),
];

const NETWARDEN_APP_DEFAULTS: &[(&str, DefaultValue)] = &[
    (option_keys::DEFAULT_ACTION, DefaultValue::Str("block")),
    (option_keys::ENDPOINTS, DefaultValue::List(&["+ Localhost"])),
];

const NETWARDEN_NOTIFIER_DEFAULTS: &[(&str, DefaultValue)] = &[
    (option_keys::DEFAULT_ACTION, DefaultValue::Str("block")),
    (option_keys::ENDPOINTS, DefaultValue::List(&["+ Localhost"])),
];

static UNIDENTIFIED: ProfileDefinition = ProfileDefinition {
    name: UNIDENTIFIED_PROFILE_NAME,
    description: UNIDENTIFIED_PROFILE_DESCRIPTION,
    default_settings: &[],
};

static SYSTEM: ProfileDefinition = ProfileDefinition {
    name: SYSTEM_PROFILE_NAME,
    description: SYSTEM_PROFILE_DESCRIPTION,
    default_settings: &[],
};

static SYSTEM_RESOLVER: ProfileDefinition = ProfileDefinition {
    name: SYSTEM_RESOLVER_PROFILE_NAME,
    description: SYSTEM_RESOLVER_PROFILE_DESCRIPTION,
    default_settings: SYSTEM_RESOLVER_DEFAULTS,
};

static NETWARDEN: ProfileDefinition = ProfileDefinition {
    name: NETWARDEN_PROFILE_NAME,
    description: NETWARDEN_PROFILE_DESCRIPTION,
    default_settings: &[],
};

static NETWARDEN_APP: ProfileDefinition = ProfileDefinition {
    name: NETWARDEN_APP_PROFILE_NAME,
    description: NETWARDEN_APP_PROFILE_DESCRIPTION,
    default_settings: NETWARDEN_APP_DEFAULTS,
};

static NETWARDEN_NOTIFIER: ProfileDefinition = ProfileDefinition {
    name: NETWARDEN_NOTIFIER_PROFILE_NAME,
    description: NETWARDEN_NOTIFIER_PROFILE_DESCRIPTION,
    default_settings: NETWARDEN_NOTIFIER_DEFAULTS,
};

/// The catalog entry for a special identity.
pub fn definition(special: SpecialProfileId) -> &'static ProfileDefinition {
    match special {
        SpecialProfileId::Unidentified => &UNIDENTIFIED,
        SpecialProfileId::System => &SYSTEM,
        SpecialProfileId::SystemResolver => &SYSTEM_RESOLVER,
        SpecialProfileId::Netwarden => &NETWARDEN,
        SpecialProfileId::NetwardenApp => &NETWARDEN_APP,
        SpecialProfileId::NetwardenNotifier => &NETWARDEN_NOTIFIER,
    }
}

/// Look up the definition for a profile ID.
///
/// `None` is not an error: the profile is an ordinary application.
pub fn definition_for(profile_id: &str) -> Option<&'static ProfileDefinition> {
    SpecialProfileId::from_profile_id(profile_id).map(definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_identity_has_a_named_definition() {
        for special in SpecialProfileId::ALL {
            let def = definition(special);
            assert!(!def.name.is_empty(), "{special} has no name");
            assert!(!def.description.is_empty(), "{special} has no description");
            assert_eq!(definition_for(special.as_str()), Some(def));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = SpecialProfileId::ALL
            .into_iter()
            .map(|special| definition(special).name)
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SpecialProfileId::ALL.len());
    }

    #[test]
    fn unknown_id_has_no_definition() {
        assert!(definition_for("firefox").is_none());
    }

    #[test]
    fn environmental_identities_have_no_overrides() {
        assert!(definition(SpecialProfileId::Unidentified).settings().is_empty());
        assert!(definition(SpecialProfileId::System).settings().is_empty());
        assert!(definition(SpecialProfileId::Netwarden).settings().is_empty());
    }

    #[test]
    fn settings_copies_are_independent() {
        let def = definition(SpecialProfileId::SystemResolver);
        let mut first = def.settings();
        first.insert(option_keys::DEFAULT_ACTION.into(), SettingValue::from("block"));

        let second = def.settings();
        assert_eq!(
            second.get(option_keys::DEFAULT_ACTION),
            Some(&SettingValue::from("permit"))
        );
    }
}
