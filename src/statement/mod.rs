//! Statement AST nodes.
//!
//! A `Program` is an ordered sequence of statements; every statement in the
//! source is terminated by `;`. Statements and expressions never mix: the
//! operands of `&` are always expressions, and an expression only appears
//! at statement level wrapped in an `expr` statement or a rule declaration.

use crate::parser::expression::Expression;

/// A parsed program: the ordered statements of one source chunk.
#[derive(Debug)]
pub(crate) struct Program<'a> {
	pub statements: Vec<Statement<'a>>,
}

/// A statement in the logic language.
#[derive(Debug)]
pub(crate) enum Statement<'a> {
	/// `expr [name] <expression>;` — evaluate an expression, optionally
	/// binding the result to a name.
	Expr { expr: Expression<'a>, name: Option<&'a str> },
	/// `set <name> = <0|1>;` — assign a literal to a variable.
	Set { name: &'a str, value: bool },
	/// `table [name];` — print a truth table for a named rule/expression, or
	/// for the last evaluated expression when no name is given.
	Table { target: Option<&'a str> },
	/// `eval;` — re-run the last cached expression and print its value.
	Eval,
	/// `<name>: <expression>;` — bind an expression permanently to a rule
	/// name. Rule names must be unique within a compilation.
	Rule { name: &'a str, expr: Expression<'a> },
	/// `infer <name> (, <name>)*;` — report the current values of the named
	/// rules.
	Infer { rule_names: Vec<&'a str> },
}
