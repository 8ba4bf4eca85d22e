//! Erased slot values and the serde adapter the storage engine uses.
//!
//! An [`Erased<S>`] field serializes as `(stable id, payload bytes)`. The payload
//! is the concrete value encoded with postcard, so nested erased fields recurse
//! through the same registry.
//!
//! serde only carries string messages through custom errors, so the first typed
//! [`CodecError`] raised inside a nested field is parked per thread and handed
//! back by the outermost [`encode`]/[`decode`] call.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

use crate::error::CodecError;
use crate::registry::TypeRegistry;
use crate::slot::{Slot, SlotMember, Storable};

thread_local! {
	static ACTIVE: RefCell<Vec<TypeRegistry>> = const { RefCell::new(Vec::new()) };
	static FAILURE: RefCell<Option<CodecError>> = const { RefCell::new(None) };
}

/// Encodes `value` with `registry` resolving every erased field.
pub fn encode<T: Serialize + ?Sized>(registry: &TypeRegistry, value: &T) -> Result<Vec<u8>, CodecError> {
	let scope = Scope::enter(registry);
	postcard::to_stdvec(value).map_err(|err| scope.failure(err))
}

/// Decodes a `T` with `registry` resolving every erased field.
pub fn decode<T: DeserializeOwned>(registry: &TypeRegistry, bytes: &[u8]) -> Result<T, CodecError> {
	let scope = Scope::enter(registry);
	postcard::from_bytes(bytes).map_err(|err| scope.failure(err))
}

/// Encodes a bare slot value as `(stable id, payload)`.
pub fn encode_slot<S: Slot>(registry: &TypeRegistry, value: &S::Object) -> Result<Vec<u8>, CodecError> {
	encode(registry, &SlotRef::<S>(value))
}

/// Decodes a bare slot value written by [`encode_slot`].
pub fn decode_slot<S: Slot>(registry: &TypeRegistry, bytes: &[u8]) -> Result<Box<S::Object>, CodecError> {
	decode::<Erased<S>>(registry, bytes).map(Erased::into_inner)
}

/// A field whose declared type is slot `S`.
pub struct Erased<S: Slot>(Box<S::Object>);

impl<S: Slot> Erased<S> {
	/// Wraps an already-erased value.
	pub fn new(value: Box<S::Object>) -> Self {
		Self(value)
	}

	/// Erases a concrete member of `S`.
	pub fn from_member<T: SlotMember<S>>(value: T) -> Self {
		Self(T::upcast(Box::new(value)))
	}

	/// Returns the erased value.
	pub fn get(&self) -> &S::Object {
		&self.0
	}

	/// Unwraps the boxed trait object.
	pub fn into_inner(self) -> Box<S::Object> {
		self.0
	}

	/// Returns the concrete value if it is a `T`.
	pub fn downcast_ref<T: Storable>(&self) -> Option<&T> {
		Storable::as_any(self.get()).downcast_ref::<T>()
	}

	/// Returns true if the concrete value is a `T`.
	pub fn is<T: Storable>(&self) -> bool {
		Storable::as_any(self.get()).is::<T>()
	}
}

impl<S: Slot> Deref for Erased<S> {
	type Target = S::Object;

	fn deref(&self) -> &S::Object {
		&self.0
	}
}

impl<S: Slot> fmt::Debug for Erased<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self.get(), f)
	}
}

impl<S: Slot> Serialize for Erased<S> {
	fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
		SlotRef::<S>(self.get()).serialize(serializer)
	}
}

impl<'de, S: Slot> Deserialize<'de> for Erased<S> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let (id, payload) = <(String, Vec<u8>)>::deserialize(deserializer)?;
		active()
			.decode_member::<S>(&id, &payload)
			.map(Self)
			.map_err(|err| de::Error::custom(park(err)))
	}
}

struct SlotRef<'a, S: Slot>(&'a S::Object);

impl<S: Slot> Serialize for SlotRef<'_, S> {
	fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
		let registry = active();
		match registry.encode_member::<S>(self.0) {
			Ok((id, payload)) => (id, payload.as_slice()).serialize(serializer),
			Err(err) => Err(ser::Error::custom(park(err))),
		}
	}
}

/// Registry used by erased fields on this thread.
///
/// Falls back to the process-wide registry outside [`encode`]/[`decode`].
fn active() -> TypeRegistry {
	ACTIVE
		.with_borrow(|stack| stack.last().cloned())
		.unwrap_or_else(crate::registry)
}

/// Parks the first typed failure of the current call, returning its message.
fn park(err: CodecError) -> String {
	let msg = err.to_string();
	FAILURE.with_borrow_mut(|slot| {
		if slot.is_none() {
			*slot = Some(err);
		}
	});
	msg
}

struct Scope {
	outermost: bool,
}

impl Scope {
	fn enter(registry: &TypeRegistry) -> Self {
		let outermost = ACTIVE.with_borrow_mut(|stack| {
			stack.push(registry.clone());
			stack.len() == 1
		});
		if outermost {
			FAILURE.with_borrow_mut(|slot| *slot = None);
		}
		Self { outermost }
	}

	fn failure(&self, err: postcard::Error) -> CodecError {
		FAILURE
			.with_borrow_mut(Option::take)
			.unwrap_or(CodecError::Payload(err))
	}
}

impl Drop for Scope {
	fn drop(&mut self) {
		ACTIVE.with_borrow_mut(|stack| {
			stack.pop();
		});
		if self.outermost {
			FAILURE.with_borrow_mut(|slot| *slot = None);
		}
	}
}

#[cfg(test)]
mod tests;
