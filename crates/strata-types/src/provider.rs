//! Setting value provider trait
//!
//! A provider is bound to one scope of the hierarchy and reads or writes the values
//! stored at that scope. Several providers may share a scope id; they are then treated
//! as sibling sources of the same level.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::StResult;
use crate::setting::SettingDefinition;
use crate::types::ScopeId;

#[async_trait]
pub trait SettingValueProvider: Debug + Send + Sync {
	/// Unique provider name, used as the `provider_name` of stored values
	fn name(&self) -> &str;

	/// Scope level this provider serves
	fn scope(&self) -> &ScopeId;

	/// Read the value for `setting`; absence is `Ok(None)`, never an error
	async fn get_or_null(
		&self,
		setting: &SettingDefinition,
		key: Option<&str>,
	) -> StResult<Option<String>>;

	async fn set(&self, setting: &SettingDefinition, value: &str, key: Option<&str>)
	-> StResult<()>;

	async fn clear(&self, setting: &SettingDefinition, key: Option<&str>) -> StResult<()>;
}

// vim: ts=4
