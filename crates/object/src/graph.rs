use std::fmt;

use crate::key::PropertyKey;

/// Read access to an object graph with single delegation.
///
/// Implementations report stale or unknown handles as objects with no keys and no
/// delegate rather than failing.
pub trait PropertyGraph {
	/// Handle naming one object.
	type Handle: Copy + fmt::Debug;

	/// Own keys of `obj` in insertion order, as of this call.
	fn own_keys(&self, obj: Self::Handle) -> Vec<PropertyKey>;

	/// Returns true if `obj` currently owns `key`.
	fn has_own_property(&self, obj: Self::Handle, key: &PropertyKey) -> bool;

	/// Delegate of `obj`, or `None` at the end of the chain.
	fn prototype_of(&self, obj: Self::Handle) -> Option<Self::Handle>;
}
