//! Slot table of every node type.
//!
//! A node type missing here still compiles wherever it is constructed, but fails
//! to store with [`CodecError::UnregisteredType`](mortar_registry::CodecError).
//! [`self_check`] catches that at startup.

use mortar_registry::{RegistryError, TypeRegistry};

use crate::nodes::*;
use crate::slots::{ExpressionSlot, ForInitSlot, LValueSlot, NodeSlot, PropertyKeySlot, StatementSlot};

mortar_registry::slot_table! {
	pub fn register, fn check;

	NodeSlot => [
		Program, Identifier, Literal,
		ExpressionStatement, BlockStatement, EmptyStatement, DebuggerStatement, WithStatement,
		ReturnStatement, LabeledStatement, BreakStatement, ContinueStatement, IfStatement,
		SwitchStatement, SwitchCase, ThrowStatement, TryStatement, CatchClause, WhileStatement,
		DoWhileStatement, ForStatement, ForInStatement, FunctionDeclaration, VariableDeclaration,
		VariableDeclarator,
		ThisExpression, ArrayExpression, ObjectExpression, Property, FunctionExpression,
		UnaryExpression, UpdateExpression, BinaryExpression, AssignmentExpression,
		LogicalExpression, MemberExpression, ConditionalExpression, CallExpression, NewExpression,
		SequenceExpression,
	],
	StatementSlot => [
		ExpressionStatement, BlockStatement, EmptyStatement, DebuggerStatement, WithStatement,
		ReturnStatement, LabeledStatement, BreakStatement, ContinueStatement, IfStatement,
		SwitchStatement, ThrowStatement, TryStatement, WhileStatement, DoWhileStatement,
		ForStatement, ForInStatement, FunctionDeclaration, VariableDeclaration,
	],
	ExpressionSlot => [
		Identifier, Literal, ThisExpression, ArrayExpression, ObjectExpression,
		FunctionExpression, UnaryExpression, UpdateExpression, BinaryExpression,
		AssignmentExpression, LogicalExpression, MemberExpression, ConditionalExpression,
		CallExpression, NewExpression, SequenceExpression,
	],
	ForInitSlot => [
		VariableDeclaration,
		Identifier, Literal, ThisExpression, ArrayExpression, ObjectExpression,
		FunctionExpression, UnaryExpression, UpdateExpression, BinaryExpression,
		AssignmentExpression, LogicalExpression, MemberExpression, ConditionalExpression,
		CallExpression, NewExpression, SequenceExpression,
	],
	PropertyKeySlot => [Identifier, Literal],
	LValueSlot => [Identifier, MemberExpression],
}

mortar_registry::submit_registration!(register);

/// Fails unless `registry` binds every node type to each slot it may occupy.
///
/// Run once at startup against the registry that will store trees.
pub fn self_check(registry: &TypeRegistry) -> Result<(), RegistryError> {
	match check(registry) {
		Ok(()) => {
			tracing::debug!(registry = registry.label(), "syntax tree types registered");
			Ok(())
		}
		Err(e) => {
			tracing::warn!(registry = registry.label(), error = %e, "syntax tree type missing from registry");
			Err(e)
		}
	}
}
