//! Shared types, adapter traits, and core utilities for Strata.
//!
//! This crate holds the types shared between the resolution engine and the storage
//! adapters, so adapter crates only depend on the trait surface and not on the engine.

pub mod error;
pub mod prelude;
pub mod provider;
pub mod registry;
pub mod setting;
pub mod store_adapter;
pub mod types;

// vim: ts=4
