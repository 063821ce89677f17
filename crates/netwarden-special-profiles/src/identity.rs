use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Profile ID used for connections that could not be attributed to a process.
pub const UNIDENTIFIED_PROFILE_ID: &str = "_unidentified";
/// Profile ID used for the operating system kernel.
pub const SYSTEM_PROFILE_ID: &str = "_system";
/// Profile ID used for the system's DNS client.
pub const SYSTEM_RESOLVER_PROFILE_ID: &str = "_system-resolver";
/// Profile ID used for the Netwarden core service.
pub const NETWARDEN_PROFILE_ID: &str = "_netwarden";
/// Profile ID used for the Netwarden user interface.
pub const NETWARDEN_APP_PROFILE_ID: &str = "_netwarden-app";
/// Profile ID used for the Netwarden tray notifier.
pub const NETWARDEN_NOTIFIER_PROFILE_ID: &str = "_netwarden-notifier";

pub const UNIDENTIFIED_PROFILE_NAME: &str = "Unidentified Processes";
pub const SYSTEM_PROFILE_NAME: &str = "Operating System";
pub const SYSTEM_RESOLVER_PROFILE_NAME: &str = "System DNS Client";
pub const NETWARDEN_PROFILE_NAME: &str = "Netwarden Core Service";
pub const NETWARDEN_APP_PROFILE_NAME: &str = "Netwarden User Interface";
pub const NETWARDEN_NOTIFIER_PROFILE_NAME: &str = "Netwarden Notifier";

/// Well-known pseudo-application identities.
///
/// These are never assigned by users. Any profile ID not listed here belongs
/// to an ordinary, discovered application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialProfileId {
    /// Traffic that could not be attributed to a process
    #[serde(rename = "_unidentified")]
    Unidentified,
    /// The operating system kernel
    #[serde(rename = "_system")]
    System,
    /// The system's DNS client
    #[serde(rename = "_system-resolver")]
    SystemResolver,
    /// The Netwarden core service
    #[serde(rename = "_netwarden")]
    Netwarden,
    /// The Netwarden user interface
    #[serde(rename = "_netwarden-app")]
    NetwardenApp,
    /// The Netwarden tray notifier
    #[serde(rename = "_netwarden-notifier")]
    NetwardenNotifier,
}

impl SpecialProfileId {
    /// Every special identity, in catalog order.
    pub const ALL: [SpecialProfileId; 6] = [
        SpecialProfileId::Unidentified,
        SpecialProfileId::System,
        SpecialProfileId::SystemResolver,
        SpecialProfileId::Netwarden,
        SpecialProfileId::NetwardenApp,
        SpecialProfileId::NetwardenNotifier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialProfileId::Unidentified => UNIDENTIFIED_PROFILE_ID,
            SpecialProfileId::System => SYSTEM_PROFILE_ID,
            SpecialProfileId::SystemResolver => SYSTEM_RESOLVER_PROFILE_ID,
            SpecialProfileId::Netwarden => NETWARDEN_PROFILE_ID,
            SpecialProfileId::NetwardenApp => NETWARDEN_APP_PROFILE_ID,
            SpecialProfileId::NetwardenNotifier => NETWARDEN_NOTIFIER_PROFILE_ID,
        }
    }

    /// Resolve a profile ID. `None` means the profile is an ordinary one.
    pub fn from_profile_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|special| special.as_str() == id)
    }

    /// Whether this identity is one of Netwarden's own processes.
    ///
    /// App settings of internal profiles are ignored by enforcement; only
    /// global rules apply to them.
    pub fn is_internal(&self) -> bool {
        match self {
            SpecialProfileId::Netwarden
            | SpecialProfileId::NetwardenApp
            | SpecialProfileId::NetwardenNotifier => true,
            SpecialProfileId::Unidentified
            | SpecialProfileId::System
            | SpecialProfileId::SystemResolver => false,
        }
    }
}

impl fmt::Display for SpecialProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecialProfileId {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_profile_id(s).ok_or_else(|| ProfileError::UnknownProfileId(s.to_string()))
    }
}

/// Whether `id` names one of the built-in pseudo-applications.
pub fn is_special_profile_id(id: &str) -> bool {
    SpecialProfileId::from_profile_id(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_strings() {
        for special in SpecialProfileId::ALL {
            assert_eq!(SpecialProfileId::from_profile_id(special.as_str()), Some(special));
            assert_eq!(special.to_string().parse::<SpecialProfileId>().unwrap(), special);
        }
    }

    #[test]
    fn serde_uses_profile_ids() {
        for special in SpecialProfileId::ALL {
            let json = serde_json::to_string(&special).unwrap();
            assert_eq!(json, format!("\"{}\"", special.as_str()));
            assert_eq!(serde_json::from_str::<SpecialProfileId>(&json).unwrap(), special);
        }

        let resolver = serde_json::to_string(&SpecialProfileId::SystemResolver).unwrap();
        assert_eq!(resolver, "\"_system-resolver\"");
        assert!(serde_json::from_str::<SpecialProfileId>("\"SystemResolver\"").is_err());
    }

    #[test]
    fn ordinary_ids_are_not_special() {
        assert!(!is_special_profile_id("firefox"));
        assert!(!is_special_profile_id(""));
        assert!(!is_special_profile_id("_System"));
        assert!(matches!(
            "firefox".parse::<SpecialProfileId>(),
            Err(ProfileError::UnknownProfileId(id)) if id == "firefox"
        ));
    }

    #[test]
    fn only_own_processes_are_internal() {
        let internal: Vec<_> = SpecialProfileId::ALL
            .into_iter()
            .filter(SpecialProfileId::is_internal)
            .collect();
        assert_eq!(
            internal,
            vec![
                SpecialProfileId::Netwarden,
                SpecialProfileId::NetwardenApp,
                SpecialProfileId::NetwardenNotifier,
            ]
        );
    }
}
