//! Concrete type descriptors.

use std::any::{Any, TypeId, type_name};
use std::fmt;

use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;
use crate::slot::{Slot, SlotMember, Storable};

type EncodeFn = fn(&dyn Any) -> Result<Vec<u8>, CodecError>;
type DecodeFn<S> = fn(&[u8]) -> Result<Box<<S as Slot>::Object>, CodecError>;

/// Describes one concrete, storable type.
pub struct TypeDescriptor {
	id: Box<str>,
	type_name: &'static str,
	type_id: TypeId,
	encode: EncodeFn,
	bindings: HashMap<TypeId, SlotBinding>,
}

/// Erased decoder producing one slot's trait object.
struct SlotBinding {
	slot: &'static str,
	/// Holds a `DecodeFn<S>` for the bound slot.
	decode: Box<dyn Any + Send + Sync>,
}

impl TypeDescriptor {
	pub(crate) fn new<T>(id: Box<str>) -> Self
	where
		T: Storable + Serialize + DeserializeOwned,
	{
		Self {
			id,
			type_name: type_name::<T>(),
			type_id: TypeId::of::<T>(),
			encode: encode_erased::<T>,
			bindings: HashMap::default(),
		}
	}

	/// Stable identifier written alongside payloads.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Rust type name at registration time.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// `TypeId` of the concrete type.
	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	/// Returns true if the type is bound to slot `S`.
	pub fn satisfies<S: Slot>(&self) -> bool {
		self.bindings.contains_key(&TypeId::of::<S::Object>())
	}

	pub(crate) fn satisfies_object(&self, object: TypeId) -> bool {
		self.bindings.contains_key(&object)
	}

	/// Names of the slots this type is bound to, sorted.
	pub fn slots(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.bindings.values().map(|b| b.slot).collect();
		names.sort_unstable();
		names
	}

	/// Records that `T` may appear behind `S`. Returns false if already bound.
	pub(crate) fn bind<S, T>(&mut self) -> bool
	where
		S: Slot,
		T: SlotMember<S>,
	{
		debug_assert_eq!(self.type_id, TypeId::of::<T>());
		let object = TypeId::of::<S::Object>();
		if self.bindings.contains_key(&object) {
			return false;
		}
		let decode: DecodeFn<S> = decode_erased::<S, T>;
		self.bindings.insert(
			object,
			SlotBinding {
				slot: S::NAME,
				decode: Box::new(decode),
			},
		);
		true
	}

	pub(crate) fn encode(&self, value: &dyn Any) -> Result<Vec<u8>, CodecError> {
		(self.encode)(value)
	}

	pub(crate) fn decode<S: Slot>(&self, bytes: &[u8]) -> Result<Box<S::Object>, CodecError> {
		let decode = self
			.bindings
			.get(&TypeId::of::<S::Object>())
			.and_then(|b| b.decode.downcast_ref::<DecodeFn<S>>())
			.ok_or_else(|| CodecError::NotASlotMember {
				id: self.id.to_string(),
				slot: S::NAME,
			})?;
		decode(bytes)
	}
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("id", &self.id)
			.field("type_name", &self.type_name)
			.field("slots", &self.slots())
			.finish()
	}
}

fn encode_erased<T: Storable + Serialize>(value: &dyn Any) -> Result<Vec<u8>, CodecError> {
	match value.downcast_ref::<T>() {
		Some(value) => Ok(postcard::to_stdvec(value)?),
		None => Err(CodecError::DescriptorMismatch(type_name::<T>().to_string())),
	}
}

fn decode_erased<S, T>(bytes: &[u8]) -> Result<Box<S::Object>, CodecError>
where
	S: Slot,
	T: SlotMember<S>,
{
	let value: T = postcard::from_bytes(bytes)?;
	Ok(T::upcast(Box::new(value)))
}
