use std::any::{TypeId, type_name};

use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::canonical::stable_id;
use crate::descriptor::TypeDescriptor;
use crate::error::RegistryError;
use crate::registry::TypeRegistry;
use crate::slot::{Slot, SlotDecl, SlotMember, Storable};

/// Bootstrap-phase builder for a [`TypeRegistry`].
///
/// All writes happen here, single-threaded; [`RegistryBuilder::seal`] consumes the
/// builder, so nothing can be registered against a sealed registry.
pub struct RegistryBuilder {
	label: &'static str,
	require_members: bool,
	slots: Vec<SlotDecl>,
	types: Vec<TypeDescriptor>,
	by_id: HashMap<Box<str>, usize>,
	by_type: HashMap<TypeId, usize>,
}

impl RegistryBuilder {
	/// Creates an empty builder with the given label for diagnostics.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			require_members: false,
			slots: Vec::new(),
			types: Vec::new(),
			by_id: HashMap::default(),
			by_type: HashMap::default(),
		}
	}

	/// Sets whether sealing fails when a declared slot has no member types.
	///
	/// When off, empty slots are only logged.
	pub fn require_members(mut self, on: bool) -> Self {
		self.require_members = on;
		self
	}

	/// Returns the diagnostic label.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of registered types.
	pub fn len(&self) -> usize {
		self.types.len()
	}

	/// Returns true if no types have been registered.
	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	/// Declares `S` as a valid polymorphic slot.
	///
	/// Idempotent; returns false if the slot was already declared.
	pub fn declare_slot<S: Slot>(&mut self) -> bool {
		let decl = SlotDecl::of::<S>();
		if self.slots.iter().any(|s| s.object == decl.object) {
			return false;
		}
		tracing::trace!(registry = self.label, slot = decl.name, "declared slot");
		self.slots.push(decl);
		true
	}

	/// Returns true if `S` has been declared.
	pub fn is_declared<S: Slot>(&self) -> bool {
		let object = TypeId::of::<S::Object>();
		self.slots.iter().any(|s| s.object == object)
	}

	/// Registers `T` under its canonical stable identifier.
	pub fn register<T>(&mut self) -> Result<(), RegistryError>
	where
		T: Storable + Serialize + DeserializeOwned,
	{
		self.insert::<T>(stable_id::<T>()).map(drop)
	}

	/// Registers the type of `example` under its canonical stable identifier.
	pub fn register_type_of<T>(&mut self, _example: &T) -> Result<(), RegistryError>
	where
		T: Storable + Serialize + DeserializeOwned,
	{
		self.register::<T>()
	}

	/// Registers `T` under an explicit identifier.
	///
	/// Used to keep a renamed type readable from data written under its old name.
	pub fn register_as<T>(&mut self, id: impl Into<String>) -> Result<(), RegistryError>
	where
		T: Storable + Serialize + DeserializeOwned,
	{
		self.insert::<T>(id.into()).map(drop)
	}

	/// Binds `T` as a member of slot `S`, registering `T` first if needed.
	pub fn bind<S, T>(&mut self) -> Result<(), RegistryError>
	where
		S: Slot,
		T: SlotMember<S>,
	{
		if !self.is_declared::<S>() {
			return Err(RegistryError::UndeclaredSlot {
				slot: S::NAME,
				type_name: type_name::<T>(),
			});
		}

		let idx = match self.by_type.get(&TypeId::of::<T>()) {
			Some(&idx) => idx,
			None => self.insert::<T>(stable_id::<T>())?,
		};

		let descriptor = &mut self.types[idx];
		if descriptor.bind::<S, T>() {
			tracing::trace!(registry = self.label, slot = S::NAME, id = descriptor.id(), "bound slot member");
		}
		Ok(())
	}

	/// Freezes the builder into an immutable [`TypeRegistry`].
	pub fn seal(self) -> Result<TypeRegistry, RegistryError> {
		for slot in &self.slots {
			let populated = self.types.iter().any(|t| t.satisfies_object(slot.object));
			if populated {
				continue;
			}
			if self.require_members {
				return Err(RegistryError::EmptySlot(slot.name));
			}
			tracing::warn!(registry = self.label, slot = slot.name, "declared slot has no member types");
		}

		tracing::debug!(
			registry = self.label,
			types = self.types.len(),
			slots = self.slots.len(),
			"type registry sealed"
		);

		Ok(TypeRegistry::from_parts(
			self.label,
			self.slots,
			self.types,
			self.by_id,
			self.by_type,
		))
	}

	fn insert<T>(&mut self, id: String) -> Result<usize, RegistryError>
	where
		T: Storable + Serialize + DeserializeOwned,
	{
		let type_id = TypeId::of::<T>();

		if let Some(&idx) = self.by_type.get(&type_id) {
			let existing = &self.types[idx];
			if existing.id() == id {
				return Ok(idx);
			}
			return Err(RegistryError::ConflictingIdentifier {
				type_name: type_name::<T>(),
				existing: existing.id().to_string(),
				incoming: id,
			});
		}

		if let Some(&idx) = self.by_id.get(id.as_str()) {
			return Err(RegistryError::IdentifierCollision {
				id,
				existing: self.types[idx].type_name(),
				incoming: type_name::<T>(),
			});
		}

		let idx = self.types.len();
		let id = id.into_boxed_str();
		tracing::trace!(registry = self.label, id = &*id, "registered type");
		self.types.push(TypeDescriptor::new::<T>(id.clone()));
		self.by_id.insert(id, idx);
		self.by_type.insert(type_id, idx);
		Ok(idx)
	}
}
