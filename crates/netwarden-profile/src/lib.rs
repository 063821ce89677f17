//! Netwarden application profiles.
//!
//! This crate holds the profile record shared by the profile loader, the
//! policy engine, and the UI. No policy logic lives here, only the record,
//! its settings values, and the storage contract:
//! - [`Profile`] and its construction primitive [`Profile::new`]
//! - [`ProfileSource`] scopes and scoped-ID formatting
//! - [`SettingValue`] / [`Settings`] and the well-known [`option_keys`]
//! - [`ProfileStore`] with the in-memory reference [`InMemoryProfileStore`]

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod error;
pub mod memory;
mod profile;
pub mod settings;
mod source;
mod store;

pub use error::{StoreError, StoreResult, UnknownProfileSource};
pub use memory::InMemoryProfileStore;
pub use profile::{make_scoped_id, Profile};
pub use settings::{option_keys, SettingValue, Settings};
pub use source::ProfileSource;
pub use store::ProfileStore;
