use serde::{Deserialize, Serialize};

use super::Identifier;
use crate::node::{NodeInfo, impl_node};
use crate::slots::{Expression, ForInit, Statement, Statements};

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpressionStatement {
	pub info: NodeInfo,
	pub expression: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlockStatement {
	pub info: NodeInfo,
	pub body: Statements,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EmptyStatement {
	pub info: NodeInfo,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DebuggerStatement {
	pub info: NodeInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WithStatement {
	pub info: NodeInfo,
	pub object: Expression,
	pub body: Statement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReturnStatement {
	pub info: NodeInfo,
	pub argument: Option<Expression>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LabeledStatement {
	pub info: NodeInfo,
	pub label: Identifier,
	pub body: Statement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BreakStatement {
	pub info: NodeInfo,
	pub label: Option<Identifier>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContinueStatement {
	pub info: NodeInfo,
	pub label: Option<Identifier>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IfStatement {
	pub info: NodeInfo,
	pub test: Expression,
	pub consequent: Statement,
	pub alternate: Option<Statement>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SwitchStatement {
	pub info: NodeInfo,
	pub discriminant: Expression,
	pub cases: Vec<SwitchCase>,
}

/// One `case` or `default` arm; `test` is `None` for `default`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SwitchCase {
	pub info: NodeInfo,
	pub test: Option<Expression>,
	pub consequent: Statements,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ThrowStatement {
	pub info: NodeInfo,
	pub argument: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TryStatement {
	pub info: NodeInfo,
	pub block: BlockStatement,
	pub handler: Option<CatchClause>,
	pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatchClause {
	pub info: NodeInfo,
	pub param: Identifier,
	pub body: BlockStatement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WhileStatement {
	pub info: NodeInfo,
	pub test: Expression,
	pub body: Statement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DoWhileStatement {
	pub info: NodeInfo,
	pub body: Statement,
	pub test: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForStatement {
	pub info: NodeInfo,
	pub init: Option<ForInit>,
	pub test: Option<Expression>,
	pub update: Option<Expression>,
	pub body: Statement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ForInStatement {
	pub info: NodeInfo,
	pub left: ForInit,
	pub right: Expression,
	pub body: Statement,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FunctionDeclaration {
	pub info: NodeInfo,
	pub id: Identifier,
	pub params: Vec<Identifier>,
	pub body: BlockStatement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
	Var,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VariableDeclaration {
	pub info: NodeInfo,
	pub declarations: Vec<VariableDeclarator>,
	pub kind: DeclarationKind,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VariableDeclarator {
	pub info: NodeInfo,
	pub id: Identifier,
	pub init: Option<Expression>,
}

impl_node! {
	ExpressionStatement: StatementNode;
	BlockStatement: StatementNode;
	EmptyStatement: StatementNode;
	DebuggerStatement: StatementNode;
	WithStatement: StatementNode;
	ReturnStatement: StatementNode;
	LabeledStatement: StatementNode;
	BreakStatement: StatementNode;
	ContinueStatement: StatementNode;
	IfStatement: StatementNode;
	SwitchStatement: StatementNode;
	SwitchCase;
	ThrowStatement: StatementNode;
	TryStatement: StatementNode;
	CatchClause;
	WhileStatement: StatementNode;
	DoWhileStatement: StatementNode;
	ForStatement: StatementNode;
	ForInStatement: StatementNode;
	FunctionDeclaration: StatementNode;
	VariableDeclaration: StatementNode, ForInitNode;
	VariableDeclarator;
}
