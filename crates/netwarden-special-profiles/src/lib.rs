//! # netwarden-special-profiles
//!
//! Built-in pseudo-application profiles: records for traffic that cannot be
//! attributed to a real process, the operating system, the system DNS
//! client, and Netwarden's own components.
//!
//! ## Components
//!
//! - **Catalog** ([`catalog`]) - name, description and default settings per
//!   [`SpecialProfileId`]
//! - **Factory** ([`create_special_profile`]) - fresh records seeded from the
//!   catalog
//! - **Synchronizer** ([`reconcile`]) - keeps name, description and linked
//!   path current without touching settings
//! - **Upgrade gate** ([`needs_reset`]) - flags untouched records created
//!   before their identity's cutoff date for a rebuild
//! - **Loader** ([`SpecialProfileLoader`]) - runs the above against a
//!   [`netwarden_profile::ProfileStore`]
//!
//! ## User edits
//!
//! A record with `last_edited > 0` is never reset. Metadata sync still
//! applies to it: users cannot edit the name or description of a special
//! profile, so those always follow the catalog.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod factory;
pub mod identity;
pub mod loader;
pub mod sync;
pub mod upgrade;

pub use catalog::{definition, definition_for, DefaultValue, ProfileDefinition};
pub use config::SpecialProfilesConfig;
pub use error::{ProfileError, ProfileResult};
pub use factory::{create_special_profile, new_special_profile};
pub use identity::{
    is_special_profile_id, SpecialProfileId, NETWARDEN_APP_PROFILE_ID,
    NETWARDEN_APP_PROFILE_NAME, NETWARDEN_NOTIFIER_PROFILE_ID, NETWARDEN_NOTIFIER_PROFILE_NAME,
    NETWARDEN_PROFILE_ID, NETWARDEN_PROFILE_NAME, SYSTEM_PROFILE_ID, SYSTEM_PROFILE_NAME,
    SYSTEM_RESOLVER_PROFILE_ID, SYSTEM_RESOLVER_PROFILE_NAME, UNIDENTIFIED_PROFILE_ID,
    UNIDENTIFIED_PROFILE_NAME,
};
pub use loader::{LoadAction, LoadedProfile, SpecialProfileLoader};
pub use sync::{reconcile, ReconcileOutcome};
pub use upgrade::{can_be_upgraded, cutoff_for, needs_reset, parse_cutoff, UPGRADE_CUTOFFS};
