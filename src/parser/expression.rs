//! Expression AST nodes.
//!
//! An `Expression` is a tree representing code like `!A & (B | 1)` as
//! nested nodes. Each node exclusively owns its children; the tree is
//! immutable once built.

use Expression::*;

/// Expression AST nodes
#[derive(Debug)]
pub(crate) enum Expression<'a> {
	/// A binary operation between two sub-expressions.
	Binary { left: Box<Expression<'a>>, op: BinaryOperator, right: Box<Expression<'a>> },
	/// Logical negation, the only unary operator.
	Not(Box<Expression<'a>>),
	/// A boolean literal `0` or `1`.
	Literal(bool),
	/// A variable or rule reference.
	Var(&'a str),
}

/// The binary operators, in no particular order. `^` and `xor` both parse
/// to [`BinaryOperator::Xor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOperator {
	And,
	Or,
	Xor,
	Implies,
}

impl<'a> Expression<'a> {
	pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
		Binary { left: Box::new(left), op, right: Box::new(right) }
	}

	pub fn not(operand: Self) -> Self { Not(Box::new(operand)) }
}

impl std::fmt::Display for Expression<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Binary { left, op, right } => write!(f, "({op} {left} {right})"),
			Not(operand) => write!(f, "(! {operand})"),
			Literal(value) => write!(f, "{}", u8::from(*value)),
			Var(name) => write!(f, "{name}"),
		}
	}
}

impl std::fmt::Display for BinaryOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BinaryOperator::And => write!(f, "&"),
			BinaryOperator::Or => write!(f, "|"),
			BinaryOperator::Xor => write!(f, "xor"),
			BinaryOperator::Implies => write!(f, "->"),
		}
	}
}
