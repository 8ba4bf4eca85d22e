//! Insertion-ordered object heap.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ObjectError;
use crate::graph::PropertyGraph;
use crate::key::PropertyKey;
use crate::prop_iter::{Keys, PropIter};
use crate::value::Value;

/// Handle of an object on an [`ObjectHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
	/// Position of the object in its heap.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for ObjectId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// One object: own properties in insertion order plus an optional delegate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Object {
	proto: Option<ObjectId>,
	properties: IndexMap<PropertyKey, Value>,
}

impl Object {
	pub fn prototype(&self) -> Option<ObjectId> {
		self.proto
	}

	pub fn get_own(&self, key: &str) -> Option<&Value> {
		self.properties.get(key)
	}

	pub fn has_own(&self, key: &str) -> bool {
		self.properties.contains_key(key)
	}

	/// Own keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &PropertyKey> {
		self.properties.keys()
	}

	pub fn len(&self) -> usize {
		self.properties.len()
	}

	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
}

/// Arena of objects linked by acyclic delegation.
///
/// Objects are never freed; an [`ObjectId`] stays valid for the heap's lifetime.
/// Loading a snapshot re-checks every delegation link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Snapshot")]
pub struct ObjectHeap {
	objects: Vec<Object>,
}

#[derive(Deserialize)]
struct Snapshot {
	objects: Vec<Object>,
}

impl TryFrom<Snapshot> for ObjectHeap {
	type Error = ObjectError;

	fn try_from(snapshot: Snapshot) -> Result<Self, ObjectError> {
		let heap = Self {
			objects: snapshot.objects,
		};
		heap.check_links()?;
		Ok(heap)
	}
}

impl ObjectHeap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	/// Allocates an empty object delegating to `proto`.
	pub fn alloc(&mut self, proto: Option<ObjectId>) -> Result<ObjectId, ObjectError> {
		if let Some(p) = proto {
			self.object(p)?;
		}
		let id = ObjectId(self.objects.len());
		self.objects.push(Object {
			proto,
			properties: IndexMap::new(),
		});
		Ok(id)
	}

	pub fn object(&self, id: ObjectId) -> Result<&Object, ObjectError> {
		self.objects.get(id.0).ok_or(ObjectError::NotFound(id))
	}

	fn object_mut(&mut self, id: ObjectId) -> Result<&mut Object, ObjectError> {
		self.objects.get_mut(id.0).ok_or(ObjectError::NotFound(id))
	}

	/// Sets an own property, returning the previous value.
	///
	/// Overwriting keeps the key's original position.
	pub fn set(
		&mut self,
		id: ObjectId,
		key: impl Into<PropertyKey>,
		value: impl Into<Value>,
	) -> Result<Option<Value>, ObjectError> {
		let obj = self.object_mut(id)?;
		Ok(obj.properties.insert(key.into(), value.into()))
	}

	/// Removes an own property, keeping the order of the remaining keys.
	pub fn delete(&mut self, id: ObjectId, key: &str) -> Result<Option<Value>, ObjectError> {
		let obj = self.object_mut(id)?;
		Ok(obj.properties.shift_remove(key))
	}

	pub fn get_own(&self, id: ObjectId, key: &str) -> Result<Option<&Value>, ObjectError> {
		Ok(self.object(id)?.get_own(key))
	}

	/// Looks `key` up on `id` and then along its delegation chain.
	pub fn get(&self, id: ObjectId, key: &str) -> Result<Option<&Value>, ObjectError> {
		let mut current = Some(id);
		while let Some(h) = current {
			let obj = self.object(h)?;
			if let Some(value) = obj.get_own(key) {
				return Ok(Some(value));
			}
			current = obj.proto;
		}
		Ok(None)
	}

	pub fn prototype(&self, id: ObjectId) -> Result<Option<ObjectId>, ObjectError> {
		Ok(self.object(id)?.proto)
	}

	/// Replaces the delegate of `id`.
	///
	/// Fails with [`ObjectError::PrototypeCycle`] if `id` is reachable from `proto`.
	pub fn set_prototype(&mut self, id: ObjectId, proto: Option<ObjectId>) -> Result<(), ObjectError> {
		self.object(id)?;
		if let Some(p) = proto {
			let mut current = Some(p);
			while let Some(h) = current {
				if h == id {
					tracing::debug!(object = %id, prototype = %p, "rejected prototype cycle");
					return Err(ObjectError::PrototypeCycle {
						object: id,
						prototype: p,
					});
				}
				current = self.object(h)?.proto;
			}
		}
		self.object_mut(id)?.proto = proto;
		Ok(())
	}

	/// Cursor over the keys visible on `id`.
	pub fn prop_iter(&self, id: ObjectId) -> PropIter<Self> {
		PropIter::new(self, id)
	}

	/// Iterator over the keys visible on `id`, borrowing the heap.
	pub fn prop_keys(&self, id: ObjectId) -> Keys<'_, Self> {
		self.prop_iter(id).with_graph(self)
	}

	fn check_links(&self) -> Result<(), ObjectError> {
		for (index, obj) in self.objects.iter().enumerate() {
			let object = ObjectId(index);
			let mut current = obj.proto;
			let mut steps = 0;
			while let Some(h) = current {
				let next = self.object(h)?;
				steps += 1;
				if h == object || steps > self.objects.len() {
					return Err(ObjectError::PrototypeCycle { object, prototype: h });
				}
				current = next.proto;
			}
		}
		Ok(())
	}
}

impl PropertyGraph for ObjectHeap {
	type Handle = ObjectId;

	fn own_keys(&self, obj: ObjectId) -> Vec<PropertyKey> {
		self.objects
			.get(obj.0)
			.map(|o| o.properties.keys().cloned().collect())
			.unwrap_or_default()
	}

	fn has_own_property(&self, obj: ObjectId, key: &PropertyKey) -> bool {
		self.objects
			.get(obj.0)
			.is_some_and(|o| o.properties.contains_key(key))
	}

	fn prototype_of(&self, obj: ObjectId) -> Option<ObjectId> {
		self.objects.get(obj.0).and_then(|o| o.proto)
	}
}
