//! redb-backed setting store and grant repository.
//!
//! Both live in one database file. Keys are `name \x1f provider_name \x1f key`, where
//! the key part is empty for values without a provider key and `=` followed by the key
//! otherwise, so an absent key never collides with an empty one. Components are escaped,
//! so a `\x1f` inside a name cannot shift the boundaries.
//!
//! redb calls block (commits fsync), so every operation runs on the blocking pool.

#![forbid(unsafe_code)]

mod error;

use async_trait::async_trait;
use redb::{ReadableDatabase, ReadableTable};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use strata::error::StResult;
use strata::store_adapter::{GrantRepository, SettingStore};

pub use error::Error;
use error::from_redb_error;

/// Setting values
const TABLE_SETTINGS: redb::TableDefinition<&str, &str> = redb::TableDefinition::new("settings");

/// Permission grants (value is unused)
const TABLE_GRANTS: redb::TableDefinition<&str, u8> = redb::TableDefinition::new("grants");

const SEP: char = '\x1f';

/// `\` becomes `\\` and the separator becomes `\u`
fn escape(component: &str) -> String {
	let mut out = String::with_capacity(component.len());
	for c in component.chars() {
		match c {
			'\\' => out.push_str("\\\\"),
			SEP => out.push_str("\\u"),
			c => out.push(c),
		}
	}
	out
}

fn make_setting_key(name: &str, provider_name: &str, provider_key: Option<&str>) -> String {
	match provider_key {
		Some(key) => format!("{}{}{}{}={}", escape(name), SEP, escape(provider_name), SEP, escape(key)),
		None => format!("{}{}{}{}", escape(name), SEP, escape(provider_name), SEP),
	}
}

fn make_grant_key(name: &str, provider_name: &str, provider_key: &str) -> String {
	format!("{}{}{}{}{}", escape(name), SEP, escape(provider_name), SEP, escape(provider_key))
}

async fn blocking<T, F>(f: F) -> StResult<T>
where
	F: FnOnce() -> StResult<T> + Send + 'static,
	T: Send + 'static,
{
	tokio::task::spawn_blocking(f).await.map_err(Error::from)?
}

#[derive(Debug, Clone)]
pub struct StoreAdapterRedb {
	db: Arc<redb::Database>,
}

impl StoreAdapterRedb {
	/// Open or create the database at `path`
	pub async fn new(path: impl AsRef<Path>) -> StResult<Self> {
		let path = path.as_ref().to_path_buf();
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(parent).await.map_err(Error::from)?;
		}

		let db_path = path.clone();
		let db = blocking(move || {
			let db = if db_path.exists() {
				redb::Database::open(&db_path).map_err(from_redb_error)?
			} else {
				redb::Database::create(&db_path).map_err(from_redb_error)?
			};

			// Initialize tables
			let tx = db.begin_write().map_err(from_redb_error)?;
			let _ = tx.open_table(TABLE_SETTINGS).map_err(from_redb_error)?;
			let _ = tx.open_table(TABLE_GRANTS).map_err(from_redb_error)?;
			tx.commit().map_err(from_redb_error)?;
			Ok(db)
		})
		.await?;

		info!("Opened setting store at {}", path.display());
		Ok(Self { db: Arc::new(db) })
	}

	/// Number of stored setting values
	pub async fn setting_count(&self) -> StResult<usize> {
		let db = Arc::clone(&self.db);
		blocking(move || {
			let tx = db.begin_read().map_err(from_redb_error)?;
			let table = tx.open_table(TABLE_SETTINGS).map_err(from_redb_error)?;
			Ok(table.iter().map_err(from_redb_error)?.count())
		})
		.await
	}

	async fn put_setting(&self, key: String, value: Option<String>) -> StResult<()> {
		let db = Arc::clone(&self.db);
		blocking(move || {
			let tx = db.begin_write().map_err(from_redb_error)?;
			{
				let mut table = tx.open_table(TABLE_SETTINGS).map_err(from_redb_error)?;
				match value {
					Some(value) => {
						table.insert(key.as_str(), value.as_str()).map_err(from_redb_error)?;
					}
					None => {
						table.remove(key.as_str()).map_err(from_redb_error)?;
					}
				}
			}
			tx.commit().map_err(from_redb_error)
		})
		.await
	}

	async fn put_grant(&self, key: String, granted: bool) -> StResult<()> {
		let db = Arc::clone(&self.db);
		blocking(move || {
			let tx = db.begin_write().map_err(from_redb_error)?;
			{
				let mut table = tx.open_table(TABLE_GRANTS).map_err(from_redb_error)?;
				if granted {
					table.insert(key.as_str(), 1u8).map_err(from_redb_error)?;
				} else {
					table.remove(key.as_str()).map_err(from_redb_error)?;
				}
			}
			tx.commit().map_err(from_redb_error)
		})
		.await
	}
}

#[async_trait]
impl SettingStore for StoreAdapterRedb {
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<Option<String>> {
		let key = make_setting_key(name, provider_name, provider_key);
		let db = Arc::clone(&self.db);
		blocking(move || {
			let tx = db.begin_read().map_err(from_redb_error)?;
			let table = tx.open_table(TABLE_SETTINGS).map_err(from_redb_error)?;
			let value = table.get(key.as_str()).map_err(from_redb_error)?;
			Ok(value.map(|v| v.value().to_string()))
		})
		.await
	}

	async fn set(
		&self,
		name: &str,
		value: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<()> {
		debug!("set {} @ {}/{:?}", name, provider_name, provider_key);
		self.put_setting(make_setting_key(name, provider_name, provider_key), Some(value.to_string()))
			.await
	}

	async fn delete(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: Option<&str>,
	) -> StResult<()> {
		debug!("delete {} @ {}/{:?}", name, provider_name, provider_key);
		self.put_setting(make_setting_key(name, provider_name, provider_key), None).await
	}
}

#[async_trait]
impl GrantRepository for StoreAdapterRedb {
	async fn exists(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<bool> {
		let key = make_grant_key(name, provider_name, provider_key);
		let db = Arc::clone(&self.db);
		blocking(move || {
			let tx = db.begin_read().map_err(from_redb_error)?;
			let table = tx.open_table(TABLE_GRANTS).map_err(from_redb_error)?;
			Ok(table.get(key.as_str()).map_err(from_redb_error)?.is_some())
		})
		.await
	}

	async fn insert(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<()> {
		self.put_grant(make_grant_key(name, provider_name, provider_key), true).await
	}

	async fn delete(&self, name: &str, provider_name: &str, provider_key: &str) -> StResult<()> {
		self.put_grant(make_grant_key(name, provider_name, provider_key), false).await
	}
}


// vim: ts=4
