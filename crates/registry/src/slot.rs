//! Polymorphic slots and the values that may occupy them.

use std::any::{Any, TypeId, type_name};
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A value that can be recovered from behind an erased slot.
///
/// Implemented for every `'static + Send + Sync + Debug` type. Slot traits name it
/// as a supertrait so the concrete type survives being boxed as a trait object.
pub trait Storable: Any + Send + Sync + fmt::Debug {
	/// Returns the concrete value as [`Any`].
	///
	/// Call through the trait object (`Storable::as_any(&*boxed)`), never on the
	/// `Box` holding it, or the box itself is reported.
	fn as_any(&self) -> &dyn Any;

	/// Returns the Rust type name of the concrete value.
	fn type_name(&self) -> &'static str;
}

impl<T: Any + Send + Sync + fmt::Debug> Storable for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn type_name(&self) -> &'static str {
		type_name::<T>()
	}
}

/// An abstract capability set usable as the declared type of a field.
///
/// Implemented by zero-sized markers whose [`Slot::Object`] is a trait-object
/// type, e.g. `type Object = dyn StatementNode`.
pub trait Slot: 'static {
	/// Trait-object type held by fields declared with this slot.
	type Object: ?Sized + Storable;

	/// Slot name used in diagnostics.
	const NAME: &'static str;
}

/// A concrete type that may be stored behind slot `S`.
///
/// Usually generated by [`crate::slot_table!`].
pub trait SlotMember<S: Slot>: Storable + Serialize + DeserializeOwned {
	/// Erases the concrete type into the slot's trait object.
	fn upcast(self: Box<Self>) -> Box<S::Object>;
}

/// Declaration record for a [`Slot`].
///
/// Identity is the trait-object type: two markers naming the same object type
/// declare the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotDecl {
	/// Slot name from the first declaring marker.
	pub name: &'static str,
	/// `TypeId` of the trait-object type.
	pub object: TypeId,
	/// Rust name of the trait-object type.
	pub object_name: &'static str,
}

impl SlotDecl {
	/// Builds the declaration for slot `S`.
	pub fn of<S: Slot>() -> Self {
		Self {
			name: S::NAME,
			object: TypeId::of::<S::Object>(),
			object_name: type_name::<S::Object>(),
		}
	}
}

impl fmt::Display for SlotDecl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.name, self.object_name)
	}
}
