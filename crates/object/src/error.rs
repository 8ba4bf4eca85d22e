use crate::heap::ObjectId;

/// Object heap errors.
///
/// Iteration itself never fails; these only arise from heap mutation and loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObjectError {
	/// The handle does not name an object on this heap.
	#[error("object {0} not found")]
	NotFound(ObjectId),
	/// Linking `object` to `prototype` would close a delegation cycle.
	#[error("setting prototype of {object} to {prototype} would create a cycle")]
	PrototypeCycle { object: ObjectId, prototype: ObjectId },
}
