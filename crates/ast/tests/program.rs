//! Whole-program storage through the process-wide registry.

use mortar_ast::*;
use mortar_registry::{CodecError, Erased, RegistryBuilder, decode, decode_slot, encode, encode_slot};
use pretty_assertions::assert_eq;

fn ident(name: &str) -> Identifier {
	Identifier::new(name)
}

fn number(n: f64) -> Literal {
	Literal {
		info: NodeInfo::default(),
		value: LiteralValue::Number(n),
		raw: n.to_string(),
	}
}

/// var x = 1;
/// if (x) { x = x + 1; } else ;
/// for (var k in o) debugger;
fn sample() -> Program {
	let declare_x = VariableDeclaration {
		info: NodeInfo::span(0, 10),
		declarations: vec![VariableDeclarator {
			info: NodeInfo::span(4, 9),
			id: ident("x"),
			init: Some(Erased::from_member(number(1.0))),
		}],
		kind: DeclarationKind::Var,
	};

	let increment = ExpressionStatement {
		info: NodeInfo::default(),
		expression: Erased::from_member(AssignmentExpression {
			info: NodeInfo::default(),
			operator: "=".into(),
			left: Erased::from_member(ident("x")),
			right: Erased::from_member(BinaryExpression {
				info: NodeInfo::default(),
				operator: "+".into(),
				left: Erased::from_member(ident("x")),
				right: Erased::from_member(number(1.0)),
			}),
		}),
	};

	let branch = IfStatement {
		info: NodeInfo::default(),
		test: Erased::from_member(ident("x")),
		consequent: Erased::from_member(BlockStatement {
			info: NodeInfo::default(),
			body: vec![Erased::from_member(increment)],
		}),
		alternate: Some(Erased::from_member(EmptyStatement::default())),
	};

	let walk = ForInStatement {
		info: NodeInfo::default(),
		left: Erased::from_member(VariableDeclaration {
			info: NodeInfo::default(),
			declarations: vec![VariableDeclarator {
				info: NodeInfo::default(),
				id: ident("k"),
				init: None,
			}],
			kind: DeclarationKind::Var,
		}),
		right: Erased::from_member(ident("o")),
		body: Erased::from_member(DebuggerStatement::default()),
	};

	Program {
		info: NodeInfo::span(0, 64),
		body: vec![
			Erased::from_member(declare_x),
			Erased::from_member(branch),
			Erased::from_member(walk),
		],
	}
}

#[test]
fn program_round_trips_with_node_types_intact() {
	let _ = tracing_subscriber::fmt::try_init();
	let registry = mortar_registry::registry();
	self_check(&registry).unwrap();

	let bytes = encode(&registry, &sample()).unwrap();
	let program: Program = decode(&registry, &bytes).unwrap();

	let kinds: Vec<_> = program.body.iter().map(|s| s.node_type()).collect();
	assert_eq!(kinds, ["VariableDeclaration", "IfStatement", "ForInStatement"]);
	assert_eq!(program.info, NodeInfo::span(0, 64));

	let declare_x = program.body[0].downcast_ref::<VariableDeclaration>().unwrap();
	let init = declare_x.declarations[0].init.as_ref().unwrap();
	assert_eq!(init.downcast_ref::<Literal>(), Some(&number(1.0)));

	let branch = program.body[1].downcast_ref::<IfStatement>().unwrap();
	assert!(branch.test.is::<Identifier>());
	assert!(branch.alternate.as_ref().unwrap().is::<EmptyStatement>());
	let block = branch.consequent.downcast_ref::<BlockStatement>().unwrap();
	let stmt = block.body[0].downcast_ref::<ExpressionStatement>().unwrap();
	let assign = stmt.expression.downcast_ref::<AssignmentExpression>().unwrap();
	assert_eq!(assign.left.downcast_ref::<Identifier>(), Some(&ident("x")));
	assert!(assign.right.is::<BinaryExpression>());

	let walk = program.body[2].downcast_ref::<ForInStatement>().unwrap();
	assert!(walk.left.is::<VariableDeclaration>());
	assert_eq!(walk.body.node_type(), "DebuggerStatement");
}

#[test]
fn statement_is_not_an_expression() {
	let registry = mortar_registry::registry();
	let bytes = encode_slot::<StatementSlot>(&registry, &EmptyStatement::default()).unwrap();

	let err = decode_slot::<ExpressionSlot>(&registry, &bytes).unwrap_err();
	assert!(matches!(
		err,
		CodecError::NotASlotMember { ref id, slot: "Expression" } if id == "mortar_ast::EmptyStatement"
	));
}

#[test]
fn node_missing_from_reader_registry_is_reported() {
	let writer = mortar_registry::registry();
	let bytes = encode(&writer, &sample()).unwrap();

	let mut builder = RegistryBuilder::new("old-reader");
	builder.declare_slot::<StatementSlot>();
	builder.declare_slot::<ExpressionSlot>();
	builder.declare_slot::<ForInitSlot>();
	builder.bind::<StatementSlot, VariableDeclaration>().unwrap();
	builder.bind::<ExpressionSlot, Literal>().unwrap();
	let reader = builder.seal().unwrap();

	let err = decode::<Program>(&reader, &bytes).unwrap_err();
	assert!(matches!(err, CodecError::UnknownTypeIdentifier(id) if id == "mortar_ast::IfStatement"));
}
