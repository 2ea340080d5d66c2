//! Setting definition registry
//!
//! Definitions are registered into a mutable [`SettingsRegistry`] while the process is
//! being configured, then frozen into a [`FrozenSettingsRegistry`] which is shared
//! read-only for the rest of the process lifetime.

use std::collections::HashMap;

use crate::error::{Error, StResult};
use crate::setting::SettingDefinition;

/// Mutable registry used during initialization
#[derive(Debug, Default)]
pub struct SettingsRegistry {
	definitions: Vec<SettingDefinition>,
	index: HashMap<String, usize>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a new setting definition
	pub fn register(&mut self, def: SettingDefinition) -> StResult<()> {
		if self.index.contains_key(&def.name) {
			return Err(Error::ConfigError(format!("Setting '{}' is already registered", def.name)));
		}

		tracing::debug!("Registering setting: {}", def.name);
		self.index.insert(def.name.clone(), self.definitions.len());
		self.definitions.push(def);
		Ok(())
	}

	/// Register several definitions, stopping at the first duplicate
	pub fn register_all(
		&mut self,
		defs: impl IntoIterator<Item = SettingDefinition>,
	) -> StResult<()> {
		for def in defs {
			self.register(def)?;
		}
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSettingsRegistry {
		tracing::info!("Freezing settings registry with {} definitions", self.definitions.len());
		FrozenSettingsRegistry { definitions: self.definitions, index: self.index }
	}

	pub fn contains(&self, name: &str) -> bool {
		self.index.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Immutable registry shared by the resolution engine
#[derive(Debug)]
pub struct FrozenSettingsRegistry {
	definitions: Vec<SettingDefinition>,
	index: HashMap<String, usize>,
}

impl FrozenSettingsRegistry {
	/// Get a setting definition by name, failing with `NotFound` if it is unknown
	pub fn get(&self, name: &str) -> StResult<&SettingDefinition> {
		self.find(name).ok_or_else(|| Error::NotFound(format!("Undefined setting: {}", name)))
	}

	pub fn find(&self, name: &str) -> Option<&SettingDefinition> {
		self.index.get(name).and_then(|&idx| self.definitions.get(idx))
	}

	/// List all definitions in registration order
	pub fn list(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.definitions.iter()
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
