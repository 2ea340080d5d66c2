//! Basic identifier types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a level in the scope hierarchy (e.g. "D", "T", "U")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub Box<str>);

impl ScopeId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ScopeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for ScopeId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for ScopeId {
	fn from(id: &str) -> Self {
		Self(id.into())
	}
}

impl From<String> for ScopeId {
	fn from(id: String) -> Self {
		Self(id.into_boxed_str())
	}
}

impl PartialEq<str> for ScopeId {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for ScopeId {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}


// vim: ts=4
