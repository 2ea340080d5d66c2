//! In-process setting store and grant repository.
//!
//! Nothing survives the process. Useful for tests and for single-node deployments
//! where settings are seeded from configuration at startup.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use tracing::debug;

use strata::error::StResult;
use strata::store_adapter::{GrantRepository, SettingStore};

/// (name, provider_name, provider_key)
type SettingKey = (Box<str>, Box<str>, Option<Box<str>>);

/// (name, provider_name, provider_key)
type GrantKey = (Box<str>, Box<str>, Box<str>);

fn setting_key(name: &str, provider_name: &str, provider_key: Option<&str>) -> SettingKey {
	(name.into(), provider_name.into(), provider_key.map(Into::into))
}

fn grant_key(name: &str, provider_name: &str, provider_key: &str) -> GrantKey {
	(name.into(), provider_name.into(), provider_key.into())
}

#[derive(Debug, Default)]
pub struct SettingStoreMemory {
	values: RwLock<HashMap<SettingKey, Box<str>>>,
}

impl SettingStoreMemory {
	pub fn new() -> Self {
		Self::default()
	}

	pub async fn len(&self) -> usize {
		self.values.read().await.len()
	}

	pub async fn is_empty(&self) -> bool {
		self.values.read().await.is_empty()
	}
}

#[async_trait]
impl SettingStore for SettingStoreMemory {
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<Option<String>> {
		let values = self.values.read().await;
		Ok(values.get(&setting_key(name, provider_name, provider_key)).map(|v| v.to_string()))
	}

	async fn set(
		&self,
		name: &str,
		value: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<()> {
		debug!("set {} @ {}/{:?}", name, provider_name, provider_key);
		let mut values = self.values.write().await;
		values.insert(setting_key(name, provider_name, provider_key), value.into());
		Ok(())
	}

	async fn delete(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<()> {
		debug!("delete {} @ {}/{:?}", name, provider_name, provider_key);
		let mut values = self.values.write().await;
		values.remove(&setting_key(name, provider_name, provider_key));
		Ok(())
	}
}

/// Grant repository that counts lookups, so cache hits can be observed
#[derive(Debug, Default)]
pub struct GrantRepositoryMemory {
	grants: RwLock<HashSet<GrantKey>>,
	lookups: AtomicUsize,
}

impl GrantRepositoryMemory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of `exists` calls served so far
	pub fn lookup_count(&self) -> usize {
		self.lookups.load(Ordering::Relaxed)
	}
}

#[async_trait]
impl GrantRepository for GrantRepositoryMemory {
	async fn exists(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<bool> {
		self.lookups.fetch_add(1, Ordering::Relaxed);
		let grants = self.grants.read().await;
		Ok(grants.contains(&grant_key(name, provider_name, provider_key)))
	}

	async fn insert(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<()> {
		self.grants.write().await.insert(grant_key(name, provider_name, provider_key));
		Ok(())
	}

	async fn delete(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<()> {
		self.grants.write().await.remove(&grant_key(name, provider_name, provider_key));
		Ok(())
	}
}


// vim: ts=4
