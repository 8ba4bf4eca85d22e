use serde::{Deserialize, Serialize};

use super::{BlockStatement, Identifier};
use crate::node::{NodeInfo, impl_node};
use crate::slots::{Expression, Expressions, LValue, PropertyKey};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ThisExpression {
	pub info: NodeInfo,
}

/// `[a, , b]`; holes are `None`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArrayExpression {
	pub info: NodeInfo,
	pub elements: Vec<Option<Expression>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ObjectExpression {
	pub info: NodeInfo,
	pub properties: Vec<Property>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
	Init,
	Get,
	Set,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Property {
	pub info: NodeInfo,
	pub key: PropertyKey,
	pub value: Expression,
	pub kind: PropertyKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FunctionExpression {
	pub info: NodeInfo,
	pub id: Option<Identifier>,
	pub params: Vec<Identifier>,
	pub body: BlockStatement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnaryExpression {
	pub info: NodeInfo,
	pub operator: String,
	pub prefix: bool,
	pub argument: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateExpression {
	pub info: NodeInfo,
	pub operator: String,
	pub prefix: bool,
	pub argument: LValue,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BinaryExpression {
	pub info: NodeInfo,
	pub operator: String,
	pub left: Expression,
	pub right: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentExpression {
	pub info: NodeInfo,
	pub operator: String,
	pub left: LValue,
	pub right: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogicalExpression {
	pub info: NodeInfo,
	pub operator: String,
	pub left: Expression,
	pub right: Expression,
}

/// `object.property` or, when `computed`, `object[property]`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberExpression {
	pub info: NodeInfo,
	pub object: Expression,
	pub property: Expression,
	pub computed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConditionalExpression {
	pub info: NodeInfo,
	pub test: Expression,
	pub consequent: Expression,
	pub alternate: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CallExpression {
	pub info: NodeInfo,
	pub callee: Expression,
	pub arguments: Expressions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewExpression {
	pub info: NodeInfo,
	pub callee: Expression,
	pub arguments: Expressions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SequenceExpression {
	pub info: NodeInfo,
	pub expressions: Expressions,
}

impl_node! {
	ThisExpression: ExpressionNode, ForInitNode;
	ArrayExpression: ExpressionNode, ForInitNode;
	ObjectExpression: ExpressionNode, ForInitNode;
	Property;
	FunctionExpression: ExpressionNode, ForInitNode;
	UnaryExpression: ExpressionNode, ForInitNode;
	UpdateExpression: ExpressionNode, ForInitNode;
	BinaryExpression: ExpressionNode, ForInitNode;
	AssignmentExpression: ExpressionNode, ForInitNode;
	LogicalExpression: ExpressionNode, ForInitNode;
	MemberExpression: ExpressionNode, ForInitNode, LValueNode;
	ConditionalExpression: ExpressionNode, ForInitNode;
	CallExpression: ExpressionNode, ForInitNode;
	NewExpression: ExpressionNode, ForInitNode;
	SequenceExpression: ExpressionNode, ForInitNode;
}
