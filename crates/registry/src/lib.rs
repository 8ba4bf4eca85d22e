//! Stable-identifier type registry for erased polymorphic slots.
//!
//! A field declared with an abstract capability set (a [`Slot`]) holds a boxed
//! trait object. Serializing it must record which concrete type is inside so the
//! value comes back as that type and not as whatever type first satisfies the slot.
//! This crate maps concrete types to stable identifiers and back.
//!
//! # Purpose
//!
//! - Ownership: slot declarations, type descriptors, the sealed [`TypeRegistry`].
//! - Encoding: [`Erased<S>`] fields serialize as `(stable id, payload)` pairs.
//! - Bootstrap: [`ProcessRegistry`] collects registrations and seals on first use.
//!
//! # Invariants
//!
//! - Stable identifiers are unique within a registry.
//!   - Enforced in: [`RegistryBuilder`] registration via [`RegistryError::IdentifierCollision`].
//!   - Tested by: `builder::tests::colliding_identifiers_are_fatal`
//!   - Failure symptom: one type's payloads decode as another.
//! - Decoding reconstructs the encoded dynamic type.
//!   - Enforced in: [`TypeRegistry::decode_member`] (lookup by identifier only).
//!   - Tested by: `codec::tests::round_trip_preserves_dynamic_type`
//!   - Failure symptom: values silently change type across a store and load.
//! - A sealed registry never changes.
//!   - Enforced in: [`RegistryBuilder::seal`] (consumes the builder), [`ProcessRegistry`].
//!   - Tested by: `process::tests::registration_after_seal_is_rejected`
//!   - Failure symptom: concurrent readers observe different type sets.

mod builder;
mod canonical;
mod codec;
mod descriptor;
mod error;
#[cfg(test)]
mod fixtures;
mod macros;
mod process;
mod registry;
mod slot;

pub use builder::RegistryBuilder;
pub use canonical::{canonicalize, stable_id};
pub use codec::{Erased, decode, decode_slot, encode, encode_slot};
pub use descriptor::TypeDescriptor;
pub use error::{CodecError, RegistryError};
pub use process::{
	ProcessRegistry, RegisterFn, Registration, RegistryOptions, bind, declare_slot, global,
	register_type_of, registry, seal,
};
pub use registry::TypeRegistry;
pub use slot::{Slot, SlotDecl, SlotMember, Storable};

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}
