//! Strata resolution engine.
//!
//! Resolves the effective value of named settings over an ordered chain of scoped
//! providers (e.g. Default > Tenant > User), aggregates all effective values for a
//! scope, and writes overrides while dropping ones that only restate the inherited
//! value. Also hosts the cache-aside permission grant store.

pub mod builder;
pub mod chain;
pub mod config;
pub mod logging;
pub mod manager;
pub mod permission;
pub mod provider;

pub use builder::{Strata, StrataBuilder};
pub use chain::{ProviderChain, ProviderChainBuilder, ProviderRef, ScopeHierarchy};
pub use config::StrataConfig;
pub use manager::SettingManager;
pub use permission::{LruGrantCache, PermissionStore};

// vim: ts=4
