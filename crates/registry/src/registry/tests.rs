use std::any::{TypeId, type_name};

use pretty_assertions::assert_eq;

use crate::error::{CodecError, RegistryError};
use crate::fixtures::{
	Circle, Group, Label, LabelSlot, Shape, ShapeSlot, Square, Tag, check_shapes, circles_only,
	shapes,
};
use crate::slot::SlotMember;

#[test]
fn resolves_stable_identifiers() {
	let registry = shapes();
	let descriptor = registry.resolve("mortar_registry::Square").unwrap();
	assert_eq!(descriptor.type_name(), type_name::<Square>());
	assert_eq!(descriptor.type_id(), TypeId::of::<Square>());
	assert!(registry.resolve("mortar_registry::Triangle").is_none());
}

/// Verifies that lookup by value matches the concrete type behind a trait object.
#[test]
fn test_describe_value_sees_through_trait_object() {
	let registry = shapes();
	let boxed: Box<dyn Shape> = SlotMember::<ShapeSlot>::upcast(Box::new(Square { side: 2.0 }));

	let descriptor = registry.describe_value(&*boxed).unwrap();
	assert_eq!(descriptor.id(), "mortar_registry::Square");
	assert!(registry.describe_value(&boxed).is_none());
}

#[test]
fn reports_slot_membership() {
	let registry = shapes();
	let circle = registry.describe_type(TypeId::of::<Circle>()).unwrap();
	assert_eq!(circle.slots(), ["Label", "Shape"]);
	assert!(circle.satisfies::<LabelSlot>());

	let square = registry.describe_type(TypeId::of::<Square>()).unwrap();
	assert!(!square.satisfies::<LabelSlot>());

	let labels: Vec<_> = registry.members::<LabelSlot>().map(|t| t.id()).collect();
	assert_eq!(labels, ["mortar_registry::Circle", "mortar_registry::Tag"]);
}

#[test]
fn ensure_registered_names_missing_type() {
	let registry = circles_only();
	assert_eq!(registry.ensure_registered::<Group>(), Ok(()));
	assert_eq!(
		registry.ensure_registered::<Tag>(),
		Err(RegistryError::Unregistered(type_name::<Tag>()))
	);
	assert_eq!(registry.stable_id_of::<Square>(), None);
}

#[test]
fn decode_member_rejects_unknown_identifier() {
	let registry = shapes();
	let err = registry
		.decode_member::<ShapeSlot>("mortar_registry::Triangle", &[])
		.unwrap_err();
	assert!(matches!(err, CodecError::UnknownTypeIdentifier(id) if id == "mortar_registry::Triangle"));
}

#[test]
fn decode_member_rejects_type_outside_slot() {
	let registry = shapes();
	let (id, payload) = registry.encode_member::<ShapeSlot>(&Square { side: 1.5 }).unwrap();
	assert_eq!(id, "mortar_registry::Square");

	let err = registry.decode_member::<LabelSlot>(id, &payload).unwrap_err();
	assert!(matches!(
		err,
		CodecError::NotASlotMember { ref id, slot: "Label" } if id == "mortar_registry::Square"
	));
}

#[test]
fn undeclared_slot_is_rejected() {
	let registry = circles_only();
	let err = registry
		.encode_member::<LabelSlot>(&Tag { text: "x".into() })
		.unwrap_err();
	assert!(matches!(err, CodecError::UndeclaredSlot("Label")));
}

#[test]
fn member_round_trip_keeps_concrete_type() {
	let registry = shapes();
	let (id, payload) = registry.encode_member::<LabelSlot>(&Circle { radius: 4.0 }).unwrap();
	let label = registry.decode_member::<LabelSlot>(id, &payload).unwrap();

	assert_eq!(label.text(), "circle r=4");
	let circle = crate::Storable::as_any(&*label).downcast_ref::<Circle>();
	assert_eq!(circle, Some(&Circle { radius: 4.0 }));
}

#[test]
fn slot_table_self_check_finds_missing_members() {
	assert_eq!(check_shapes(&shapes()), Ok(()));
	assert_eq!(
		check_shapes(&circles_only()),
		Err(RegistryError::Unbound {
			slot: "Shape",
			type_name: type_name::<Square>(),
		})
	);
}

#[test]
fn slot_table_pins_source_identifiers() {
	let registry = shapes();
	let ids: Vec<_> = registry.members::<ShapeSlot>().map(|t| t.id()).collect();
	assert_eq!(ids, ["mortar_registry::Circle", "mortar_registry::Square", "mortar_registry::Group"]);
	assert_eq!(registry.stable_id_of::<Tag>(), Some("mortar_registry::Tag"));
}
