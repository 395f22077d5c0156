//! Semantic analysis: a single top-down pass over the AST.
//!
//! The analyzer tracks the declared rule names and enforces two rules: a
//! rule name may not be declared twice, and `infer` may only name declared
//! rules. Variable references are deliberately never checked — a variable
//! used without a prior `set` is a free variable that evaluates to `0` —
//! and `table` targets are resolved at execution time, not here. The AST
//! is never mutated.
//!
//! One analyzer instance covers one compilation: rule uniqueness holds
//! within a chunk, and a later chunk may redeclare a rule name.

use std::collections::HashSet;

use crate::{error::semantic::SemanticError, parser::expression::Expression, statement::{Program, Statement}};

pub(crate) struct SemanticAnalyzer {
	/// Rule names declared so far in this compilation.
	defined_rules: HashSet<String>,
}

impl SemanticAnalyzer {
	pub fn new() -> Self { Self { defined_rules: HashSet::new() } }

	pub fn check(&mut self, program: &Program) -> Result<(), SemanticError> {
		for statement in &program.statements {
			self.check_statement(statement)?;
		}
		Ok(())
	}

	fn check_statement(&mut self, statement: &Statement) -> Result<(), SemanticError> {
		match statement {
			Statement::Expr { expr, .. } => self.check_expression(expr),
			// `set` both declares and updates; there is nothing to reject.
			Statement::Set { .. } | Statement::Table { .. } | Statement::Eval => Ok(()),
			Statement::Rule { name, expr } => {
				if !self.defined_rules.insert((*name).to_string()) {
					return Err(SemanticError::DuplicateRule((*name).to_string()));
				}
				self.check_expression(expr)
			}
			Statement::Infer { rule_names } => {
				for name in rule_names {
					if !self.defined_rules.contains(*name) {
						return Err(SemanticError::UndefinedRule((*name).to_string()));
					}
				}
				Ok(())
			}
		}
	}

	fn check_expression(&self, expr: &Expression) -> Result<(), SemanticError> {
		match expr {
			Expression::Binary { left, right, .. } => {
				self.check_expression(left)?;
				self.check_expression(right)
			}
			Expression::Not(operand) => self.check_expression(operand),
			// Free variables are legal; literals carry nothing to check.
			Expression::Literal(_) | Expression::Var(_) => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	fn check(input: &str) -> Result<(), SemanticError> {
		let mut scanner = Scanner::new(input);
		let tokens = scanner.scan_tokens().unwrap();
		let mut parser = Parser::new(tokens);
		let program = parser.parse().unwrap();
		SemanticAnalyzer::new().check(&program)
	}

	#[test]
	fn accepts_free_variables() {
		assert!(check("expr A & B;").is_ok());
		assert!(check("R: never_set -> other;").is_ok());
	}

	#[test]
	fn accepts_unvalidated_table_targets() {
		// `table` targets are resolved at runtime, not here.
		assert!(check("table no_such_rule;").is_ok());
	}

	#[test]
	fn rejects_duplicate_rule() {
		let err = check("R: A; R: B;").unwrap_err();
		assert!(matches!(err, SemanticError::DuplicateRule(name) if name == "R"));
	}

	#[test]
	fn rejects_infer_on_undefined_rule() {
		let err = check("infer nope;").unwrap_err();
		assert!(matches!(err, SemanticError::UndefinedRule(name) if name == "nope"));

		// Order matters: the first undefined name is reported.
		let err = check("R: A; infer R, missing;").unwrap_err();
		assert!(matches!(err, SemanticError::UndefinedRule(name) if name == "missing"));
	}

	#[test]
	fn infer_sees_rules_declared_earlier_in_the_chunk() {
		assert!(check("R: A | B; S: !A; infer R, S;").is_ok());
	}
}
