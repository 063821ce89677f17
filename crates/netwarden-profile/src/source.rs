use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownProfileSource;

/// Scope a profile record lives in.
///
/// Only [`ProfileSource::Local`] records are maintained automatically;
/// records replicated from elsewhere belong to whoever replicated them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSource {
    /// Lives only on this machine.
    Local,
    /// Replicated from another device or an administrator.
    Synced,
}

impl ProfileSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSource::Local => "local",
            ProfileSource::Synced => "synced",
        }
    }
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileSource {
    type Err = UnknownProfileSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(ProfileSource::Local),
            "synced" => Ok(ProfileSource::Synced),
            other => Err(UnknownProfileSource(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_tag() {
        for source in [ProfileSource::Local, ProfileSource::Synced] {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source));
        }
    }

    #[test]
    fn parse_rejects_unknown_scope() {
        assert_eq!("local".parse::<ProfileSource>(), Ok(ProfileSource::Local));
        assert_eq!(
            "community".parse::<ProfileSource>(),
            Err(UnknownProfileSource("community".into()))
        );
    }
}
