//! Slot table shared by the unit tests.

use serde::{Deserialize, Serialize};

use crate::{Erased, RegistryBuilder, Slot, Storable, TypeRegistry};

pub(crate) trait Shape: Storable {
	fn area(&self) -> f64;
}

pub(crate) trait Label: Storable {
	fn text(&self) -> String;
}

pub(crate) struct ShapeSlot;

impl Slot for ShapeSlot {
	type Object = dyn Shape;
	const NAME: &'static str = "Shape";
}

pub(crate) struct LabelSlot;

impl Slot for LabelSlot {
	type Object = dyn Label;
	const NAME: &'static str = "Label";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Circle {
	pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Square {
	pub side: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Tag {
	pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Group {
	pub name: String,
	pub members: Vec<Erased<ShapeSlot>>,
	pub caption: Option<Erased<LabelSlot>>,
}

impl Shape for Circle {
	fn area(&self) -> f64 {
		3.0 * self.radius * self.radius
	}
}

impl Shape for Square {
	fn area(&self) -> f64 {
		self.side * self.side
	}
}

impl Shape for Group {
	fn area(&self) -> f64 {
		self.members.iter().map(|m| m.area()).sum()
	}
}

impl Label for Tag {
	fn text(&self) -> String {
		self.text.clone()
	}
}

impl Label for Circle {
	fn text(&self) -> String {
		format!("circle r={}", self.radius)
	}
}

crate::slot_table! {
	pub(crate) fn register_shapes, pub(crate) fn check_shapes;
	ShapeSlot => [Circle, Square, Group],
	LabelSlot => [Tag, Circle],
}

crate::submit_registration!(register_shapes);

pub(crate) fn shapes() -> TypeRegistry {
	let mut builder = RegistryBuilder::new("shapes");
	register_shapes(&mut builder).expect("shape table registers");
	builder.seal().expect("shape table seals")
}

/// Registry knowing only circles and groups.
pub(crate) fn circles_only() -> TypeRegistry {
	let mut builder = RegistryBuilder::new("circles");
	builder.declare_slot::<ShapeSlot>();
	builder.bind::<ShapeSlot, Circle>().expect("circle binds");
	builder.bind::<ShapeSlot, Group>().expect("group binds");
	builder.seal().expect("circles seal")
}
