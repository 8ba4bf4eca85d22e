//! Sealed, read-only type registry.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::descriptor::TypeDescriptor;
use crate::error::{CodecError, RegistryError};
use crate::slot::{Slot, SlotDecl, Storable};

/// Immutable mapping from stable identifiers to [`TypeDescriptor`]s.
///
/// Cheap to clone; lookups take no locks.
#[derive(Clone)]
pub struct TypeRegistry {
	inner: Arc<Inner>,
}

struct Inner {
	label: &'static str,
	slots: Vec<SlotDecl>,
	types: Vec<TypeDescriptor>,
	by_id: HashMap<Box<str>, usize>,
	by_type: HashMap<TypeId, usize>,
}

impl TypeRegistry {
	pub(crate) fn from_parts(
		label: &'static str,
		slots: Vec<SlotDecl>,
		types: Vec<TypeDescriptor>,
		by_id: HashMap<Box<str>, usize>,
		by_type: HashMap<TypeId, usize>,
	) -> Self {
		Self {
			inner: Arc::new(Inner {
				label,
				slots,
				types,
				by_id,
				by_type,
			}),
		}
	}

	/// Returns the diagnostic label.
	pub fn label(&self) -> &'static str {
		self.inner.label
	}

	/// Returns the number of registered types.
	pub fn len(&self) -> usize {
		self.inner.types.len()
	}

	/// Returns true if no types are registered.
	pub fn is_empty(&self) -> bool {
		self.inner.types.is_empty()
	}

	/// Resolves a stable identifier to its descriptor.
	pub fn resolve(&self, id: &str) -> Option<&TypeDescriptor> {
		let idx = *self.inner.by_id.get(id)?;
		Some(&self.inner.types[idx])
	}

	/// Finds the descriptor for a dynamic type.
	pub fn describe_type(&self, type_id: TypeId) -> Option<&TypeDescriptor> {
		let idx = *self.inner.by_type.get(&type_id)?;
		Some(&self.inner.types[idx])
	}

	/// Finds the descriptor for the dynamic type of `value`.
	///
	/// Matches the concrete type behind a trait object, not the object type.
	pub fn describe_value<V: ?Sized + Storable>(&self, value: &V) -> Option<&TypeDescriptor> {
		self.describe_type(Any::type_id(Storable::as_any(value)))
	}

	/// Returns the stable identifier registered for `T`.
	pub fn stable_id_of<T: 'static>(&self) -> Option<&str> {
		self.describe_type(TypeId::of::<T>()).map(TypeDescriptor::id)
	}

	/// Fails unless `T` is registered.
	pub fn ensure_registered<T: 'static>(&self) -> Result<(), RegistryError> {
		if self.inner.by_type.contains_key(&TypeId::of::<T>()) {
			Ok(())
		} else {
			Err(RegistryError::Unregistered(type_name::<T>()))
		}
	}

	/// Returns true if `S` was declared.
	pub fn is_declared<S: Slot>(&self) -> bool {
		let object = TypeId::of::<S::Object>();
		self.inner.slots.iter().any(|s| s.object == object)
	}

	/// Declared slots in declaration order.
	pub fn slots(&self) -> &[SlotDecl] {
		&self.inner.slots
	}

	/// Registered types in registration order.
	pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
		self.inner.types.iter()
	}

	/// Types bound to slot `S`.
	pub fn members<S: Slot>(&self) -> impl Iterator<Item = &TypeDescriptor> {
		self.inner.types.iter().filter(|t| t.satisfies::<S>())
	}

	/// Encodes a slot value's payload, returning its stable identifier.
	///
	/// The descriptor is chosen by the value's dynamic type.
	pub fn encode_member<S: Slot>(&self, value: &S::Object) -> Result<(&str, Vec<u8>), CodecError> {
		if !self.is_declared::<S>() {
			return Err(CodecError::UndeclaredSlot(S::NAME));
		}
		let descriptor = self
			.describe_value(value)
			.ok_or_else(|| CodecError::UnregisteredType(Storable::type_name(value)))?;
		if !descriptor.satisfies::<S>() {
			return Err(CodecError::NotASlotMember {
				id: descriptor.id().to_string(),
				slot: S::NAME,
			});
		}
		let payload = descriptor.encode(Storable::as_any(value))?;
		Ok((descriptor.id(), payload))
	}

	/// Rebuilds a slot value from its stable identifier and payload.
	///
	/// Unknown identifiers are an error; no compatible type is guessed.
	pub fn decode_member<S: Slot>(&self, id: &str, payload: &[u8]) -> Result<Box<S::Object>, CodecError> {
		if !self.is_declared::<S>() {
			return Err(CodecError::UndeclaredSlot(S::NAME));
		}
		let descriptor = self
			.resolve(id)
			.ok_or_else(|| CodecError::UnknownTypeIdentifier(id.to_string()))?;
		descriptor.decode::<S>(payload)
	}
}

impl fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("label", &self.inner.label)
			.field("slots", &self.inner.slots)
			.field("types", &self.inner.types)
			.finish()
	}
}

#[cfg(test)]
mod tests;
