use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of a property slot on an object.
///
/// Cheap to clone; iteration snapshots hold clones of every key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey(Arc<str>);

impl PropertyKey {
	/// Creates a key from a property name.
	pub fn new(name: impl Into<Arc<str>>) -> Self {
		Self(name.into())
	}

	/// Returns the property name.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PropertyKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for PropertyKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for PropertyKey {
	fn from(name: &str) -> Self {
		Self(name.into())
	}
}

impl From<String> for PropertyKey {
	fn from(name: String) -> Self {
		Self(name.into())
	}
}

impl PartialEq<str> for PropertyKey {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for PropertyKey {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}

impl Serialize for PropertyKey {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for PropertyKey {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		String::deserialize(deserializer).map(Self::from)
	}
}
