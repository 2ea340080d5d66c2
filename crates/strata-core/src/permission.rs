//! Cache-aside permission grant lookups
//!
//! `PermissionStore::is_granted` reads the grant cache first and only queries the
//! repository on a miss. The result is cached whether the grant exists or not, so
//! repeated denied checks do not reach the repository either. There is no
//! invalidation path here; eviction belongs to the cache implementation.

use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

use strata_types::prelude::*;
use strata_types::store_adapter::{GrantCache, GrantCacheItem, GrantRepository};

pub const DEFAULT_GRANT_CACHE_CAPACITY: usize = 1000;

/// Bounded in-process grant cache
#[derive(Debug)]
pub struct LruGrantCache {
	cache: Arc<parking_lot::RwLock<LruCache<String, GrantCacheItem>>>,
}

impl LruGrantCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
		Self { cache: Arc::new(parking_lot::RwLock::new(LruCache::new(capacity))) }
	}

	pub fn len(&self) -> usize {
		self.cache.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.read().is_empty()
	}

	pub fn clear(&self) {
		self.cache.write().clear();
	}
}

impl Default for LruGrantCache {
	fn default() -> Self {
		Self::new(DEFAULT_GRANT_CACHE_CAPACITY)
	}
}

#[async_trait]
impl GrantCache for LruGrantCache {
	async fn get(&self, key: &str) -> StResult<Option<GrantCacheItem>> {
		// LRU lookups update recency, so even reads take the write lock
		let mut cache = self.cache.write();
		Ok(cache.get(key).cloned())
	}

	async fn set(&self, key: &str, item: GrantCacheItem) -> StResult<()> {
		let mut cache = self.cache.write();
		cache.put(key.to_string(), item);
		Ok(())
	}
}

/// Read-through grant lookups over a repository and a cache
#[derive(Debug)]
pub struct PermissionStore {
	repository: Arc<dyn GrantRepository>,
	cache: Arc<dyn GrantCache>,
}

impl PermissionStore {
	pub fn new(repository: Arc<dyn GrantRepository>, cache: Arc<dyn GrantCache>) -> Self {
		Self { repository, cache }
	}

	pub async fn is_granted(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: &str,
	) -> StResult<bool> {
		Error::check_not_empty(name, "permission name")?;
		Error::check_not_empty(provider_name, "provider name")?;

		Ok(self.get_cache_item(name, provider_name, provider_key).await?.is_granted)
	}

	async fn get_cache_item(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: &str,
	) -> StResult<GrantCacheItem> {
		debug!(
			"PermissionStore.get_cache_item: name={}, provider_name={}, provider_key={}",
			name, provider_name, provider_key
		);

		let cache_key = GrantCacheItem::calculate_cache_key(name, provider_name, provider_key);
		if let Some(item) = self.cache.get(&cache_key).await? {
			debug!("Found in the cache");
			return Ok(item);
		}

		debug!("Not found in the cache, querying the repository");
		let is_granted = self.repository.exists(name, provider_name, provider_key).await?;
		let item = GrantCacheItem::new(name, is_granted);

		self.cache.set(&cache_key, item.clone()).await?;
		debug!("Cached grant {} = {}", cache_key, is_granted);

		Ok(item)
	}
}


// vim: ts=4
