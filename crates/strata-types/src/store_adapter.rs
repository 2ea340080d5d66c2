//! Adapter traits for durable storage
//!
//! The engine never talks to storage directly. Store-backed providers call a
//! [`SettingStore`], and the permission store reads through a [`GrantCache`] into a
//! [`GrantRepository`]. Timeouts, retries and eviction are the adapter's concern.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::StResult;

/// Durable setting value storage, addressed by `(name, provider_name, provider_key)`
#[async_trait]
pub trait SettingStore: Debug + Send + Sync {
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<Option<String>>;

	/// Insert or overwrite a value (last writer wins)
	async fn set(
		&self,
		name: &str,
		value: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<()>;

	/// Remove a value; removing a missing value is not an error
	async fn delete(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<()>;
}

/// Durable permission grant storage
#[async_trait]
pub trait GrantRepository: Debug + Send + Sync {
	async fn exists(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<bool>;

	async fn insert(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<()>;

	async fn delete(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<()>;
}

/// Cached result of a grant lookup; denied lookups are cached like granted ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantCacheItem {
	pub name: String,
	pub is_granted: bool,
}

impl GrantCacheItem {
	pub fn new(name: impl Into<String>, is_granted: bool) -> Self {
		Self { name: name.into(), is_granted }
	}

	/// Deterministic composite cache key for a grant lookup
	///
	/// Provider name and key are length-prefixed so distinct lookups never share a key.
	pub fn calculate_cache_key(name: &str, provider_name: &str, provider_key: &str) -> String {
		format!(
			"pn:{}:{},pk:{}:{},n:{}",
			provider_name.len(),
			provider_name,
			provider_key.len(),
			provider_key,
			name
		)
	}
}

/// Cache in front of a [`GrantRepository`]
#[async_trait]
pub trait GrantCache: Debug + Send + Sync {
	async fn get(&self, key: &str) -> StResult<Option<GrantCacheItem>>;

	async fn set(&self, key: &str, item: GrantCacheItem) -> StResult<()>;
}


// vim: ts=4
