//! Concrete node types.

mod expressions;
mod statements;

pub use expressions::*;
pub use statements::*;

use serde::{Deserialize, Serialize};

use crate::node::{NodeInfo, impl_node};
use crate::slots::Statements;

/// Root of a parsed script.
#[derive(Debug, Serialize, Deserialize)]
pub struct Program {
	pub info: NodeInfo,
	pub body: Statements,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
	pub info: NodeInfo,
	pub name: String,
}

impl Identifier {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			info: NodeInfo::default(),
			name: name.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
	Null,
	Bool(bool),
	Number(f64),
	String(String),
	RegExp { pattern: String, flags: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
	pub info: NodeInfo,
	pub value: LiteralValue,
	/// Source text of the literal.
	pub raw: String,
}

impl_node! {
	Program;
	Identifier: ExpressionNode, ForInitNode, PropertyKeyNode, LValueNode;
	Literal: ExpressionNode, ForInitNode, PropertyKeyNode;
}
