use mortar_registry::Storable;
use serde::{Deserialize, Serialize};

/// A line/column position in source text. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
	pub line: u32,
	pub column: u32,
}

/// Source span of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
	pub source: Option<String>,
	pub start: Position,
	pub end: Position,
}

/// Location data shared by every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
	pub loc: Option<SourceLocation>,
	/// Byte offset of the first character.
	pub start: u32,
	/// Byte offset one past the last character.
	pub end: u32,
}

impl NodeInfo {
	pub fn span(start: u32, end: u32) -> Self {
		Self {
			loc: None,
			start,
			end,
		}
	}
}

/// Any syntax tree node.
pub trait Node: Storable {
	/// Grammar name of the node, e.g. `"IfStatement"`.
	fn node_type(&self) -> &'static str;

	fn info(&self) -> &NodeInfo;
}

/// Nodes allowed in statement position.
pub trait StatementNode: Node {}

/// Nodes allowed in expression position.
pub trait ExpressionNode: Node {}

/// Nodes allowed as the initializer of a `for` or the left side of a `for-in`.
pub trait ForInitNode: Node {}

/// Nodes allowed as an object literal key.
pub trait PropertyKeyNode: Node {}

/// Nodes allowed as an assignment target.
pub trait LValueNode: Node {}

/// Implements [`Node`] and the listed position traits for each node type.
macro_rules! impl_node {
	($($ty:ident $(: $($role:ident),+)?;)+) => {
		$(
			impl $crate::node::Node for $ty {
				fn node_type(&self) -> &'static str {
					stringify!($ty)
				}

				fn info(&self) -> &$crate::node::NodeInfo {
					&self.info
				}
			}

			$($(impl $crate::node::$role for $ty {})+)?
		)+
	};
}

pub(crate) use impl_node;
