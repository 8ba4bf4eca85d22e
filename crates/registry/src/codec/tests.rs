use std::any::type_name;

use pretty_assertions::assert_eq;

use super::{Erased, decode, decode_slot, encode, encode_slot};
use crate::error::CodecError;
use crate::fixtures::{
	Circle, Group, Label, LabelSlot, Shape, ShapeSlot, Square, Tag, circles_only, shapes,
};

fn sample_group() -> Group {
	Group {
		name: "outer".into(),
		members: vec![
			Erased::from_member(Circle { radius: 1.0 }),
			Erased::from_member(Group {
				name: "inner".into(),
				members: vec![Erased::from_member(Square { side: 3.0 })],
				caption: None,
			}),
		],
		caption: Some(Erased::from_member(Tag { text: "hi".into() })),
	}
}

/// Verifies that two types sharing a slot each come back as themselves.
#[test]
fn round_trip_preserves_dynamic_type() {
	let registry = shapes();
	let shapes: Vec<Erased<ShapeSlot>> = vec![
		Erased::from_member(Square { side: 2.0 }),
		Erased::from_member(Circle { radius: 1.0 }),
	];

	let bytes = encode(&registry, &shapes).unwrap();
	let back: Vec<Erased<ShapeSlot>> = decode(&registry, &bytes).unwrap();

	assert_eq!(back.len(), 2);
	assert_eq!(back[0].downcast_ref::<Square>(), Some(&Square { side: 2.0 }));
	assert_eq!(back[1].downcast_ref::<Circle>(), Some(&Circle { radius: 1.0 }));
	assert!(!back[0].is::<Circle>());
}

#[test]
fn nested_erased_fields_round_trip() {
	let registry = shapes();
	let bytes = encode(&registry, &sample_group()).unwrap();
	let back: Group = decode(&registry, &bytes).unwrap();

	assert_eq!(back.name, "outer");
	assert_eq!(back.area(), 3.0 + 9.0);
	assert_eq!(back.caption.as_ref().map(|c| c.text()), Some("hi".to_string()));

	let inner = back.members[1].downcast_ref::<Group>().unwrap();
	assert_eq!(inner.name, "inner");
	assert!(inner.members[0].is::<Square>());
}

#[test]
fn bare_slot_values_round_trip() {
	let registry = shapes();
	let bytes = encode_slot::<LabelSlot>(&registry, &Circle { radius: 2.0 }).unwrap();
	let label = decode_slot::<LabelSlot>(&registry, &bytes).unwrap();

	assert_eq!(label.text(), "circle r=2");
	assert_eq!(
		crate::Storable::as_any(&*label).downcast_ref::<Circle>(),
		Some(&Circle { radius: 2.0 })
	);
}

/// Verifies that an unknown identifier is an error and never a guess.
#[test]
fn test_unknown_identifier_is_rejected() {
	let bytes = encode_slot::<ShapeSlot>(&shapes(), &Square { side: 1.0 }).unwrap();
	let err = decode_slot::<ShapeSlot>(&circles_only(), &bytes).unwrap_err();
	assert!(matches!(err, CodecError::UnknownTypeIdentifier(id) if id == "mortar_registry::Square"));
}

#[test]
fn nested_failure_keeps_its_type() {
	let group = Group {
		name: "g".into(),
		members: vec![
			Erased::from_member(Circle { radius: 1.0 }),
			Erased::from_member(Square { side: 1.0 }),
		],
		caption: None,
	};
	let bytes = encode(&shapes(), &group).unwrap();

	let err = decode::<Group>(&circles_only(), &bytes).unwrap_err();
	assert!(matches!(err, CodecError::UnknownTypeIdentifier(id) if id == "mortar_registry::Square"));

	let err = encode(&circles_only(), &group).unwrap_err();
	assert!(matches!(err, CodecError::UnregisteredType(name) if name == type_name::<Square>()));
}

#[test]
fn failures_do_not_leak_into_later_calls() {
	let bytes = encode_slot::<ShapeSlot>(&shapes(), &Square { side: 1.0 }).unwrap();
	assert!(decode_slot::<ShapeSlot>(&circles_only(), &bytes).is_err());

	let err = decode::<Vec<Erased<ShapeSlot>>>(&shapes(), &[0xff]).unwrap_err();
	assert!(matches!(err, CodecError::Payload(_)));
}

#[test]
fn debug_shows_concrete_value() {
	let erased: Erased<ShapeSlot> = Erased::from_member(Square { side: 2.5 });
	assert_eq!(format!("{erased:?}"), "Square { side: 2.5 }");
}

#[test]
fn deref_exposes_trait_object() {
	let erased: Erased<LabelSlot> = Erased::from_member(Tag { text: "x".into() });
	let label: &dyn Label = &*erased;
	assert_eq!(label.text(), "x");

	let boxed: Box<dyn Shape> = Erased::<ShapeSlot>::from_member(Circle { radius: 1.0 }).into_inner();
	assert_eq!(boxed.area(), 3.0);
}
