/// Bootstrap-time registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two distinct types computed the same stable identifier.
	///
	/// Fatal: continuing would decode one type's payloads as the other.
	#[error("identifier collision: {id:?} is owned by {existing}, cannot register {incoming}")]
	IdentifierCollision {
		id: String,
		existing: &'static str,
		incoming: &'static str,
	},
	/// A type was registered again under a different identifier.
	#[error("type {type_name} is already registered as {existing:?}, not {incoming:?}")]
	ConflictingIdentifier {
		type_name: &'static str,
		existing: String,
		incoming: String,
	},
	/// A type was bound to a slot that was never declared.
	#[error("slot {slot} is not declared (binding {type_name})")]
	UndeclaredSlot {
		slot: &'static str,
		type_name: &'static str,
	},
	/// A declared slot has no member types and the builder requires one.
	#[error("slot {0} has no member types")]
	EmptySlot(&'static str),
	/// A type expected by a self-check is missing.
	#[error("type {0} is not registered")]
	Unregistered(&'static str),
	/// A slot-table self-check found a member missing from its slot.
	#[error("type {type_name} is not bound to slot {slot}")]
	Unbound {
		slot: &'static str,
		type_name: &'static str,
	},
	/// Registration attempted after the registry was sealed.
	#[error("registry {0} is sealed")]
	Sealed(&'static str),
}

impl RegistryError {
	/// Returns true if bootstrap must not complete after this error.
	pub fn is_fatal(&self) -> bool {
		matches!(self, Self::IdentifierCollision { .. })
	}
}

/// Encode and decode errors for erased slot values.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
	/// The payload names an identifier the registry does not know.
	#[error("unknown type identifier {0:?}")]
	UnknownTypeIdentifier(String),
	/// The value's dynamic type was never registered.
	#[error("type {0} is not registered")]
	UnregisteredType(&'static str),
	/// The identifier is registered but not bound to the expected slot.
	#[error("{id:?} is not a member of slot {slot}")]
	NotASlotMember { id: String, slot: &'static str },
	/// The expected slot was never declared.
	#[error("slot {0} is not declared")]
	UndeclaredSlot(&'static str),
	/// A descriptor was handed a value of another type.
	#[error("descriptor {0:?} cannot encode a value of another type")]
	DescriptorMismatch(String),
	/// The underlying payload failed to encode or decode.
	#[error("payload: {0}")]
	Payload(#[from] postcard::Error),
}
