//! Syntax tree node types of the hosted language.
//!
//! Child nodes are held in erased slot fields ([`Statement`], [`Expression`], ...)
//! so a tree can be stored and reloaded through [`mortar_registry`] without the
//! storage layer knowing every node type. Every node type is listed in the slot
//! table in [`table`], which the process-wide registry applies on first use.

mod node;
pub mod nodes;
mod slots;
pub mod table;

pub use node::{
	ExpressionNode, ForInitNode, LValueNode, Node, NodeInfo, Position, PropertyKeyNode,
	SourceLocation, StatementNode,
};
pub use nodes::*;
pub use slots::{
	Expression, ExpressionSlot, Expressions, ForInit, ForInitSlot, LValue, LValueSlot, NodeSlot,
	PropertyKey, PropertyKeySlot, Statement, StatementSlot, Statements,
};
pub use table::self_check;
