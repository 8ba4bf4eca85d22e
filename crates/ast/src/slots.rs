//! Slot markers for erased child fields.

use mortar_registry::{Erased, Slot};

use crate::node::{ExpressionNode, ForInitNode, LValueNode, Node, PropertyKeyNode, StatementNode};

macro_rules! slots {
	($($(#[$meta:meta])* $slot:ident => $object:ident, $name:literal;)+) => {
		$(
			$(#[$meta])*
			pub struct $slot;

			impl Slot for $slot {
				type Object = dyn $object;
				const NAME: &'static str = $name;
			}
		)+
	};
}

slots! {
	/// Any node.
	NodeSlot => Node, "Node";
	StatementSlot => StatementNode, "Statement";
	ExpressionSlot => ExpressionNode, "Expression";
	ForInitSlot => ForInitNode, "ForInit";
	PropertyKeySlot => PropertyKeyNode, "PropertyKey";
	LValueSlot => LValueNode, "LValue";
}

pub type Statement = Erased<StatementSlot>;
pub type Statements = Vec<Statement>;
pub type Expression = Erased<ExpressionSlot>;
pub type Expressions = Vec<Expression>;
pub type ForInit = Erased<ForInitSlot>;
pub type PropertyKey = Erased<PropertyKeySlot>;
pub type LValue = Erased<LValueSlot>;
