//! Flat three-address code and its generator.
//!
//! Each statement lowers to a short block of instructions. A computational
//! instruction writes one result from at most one operator and two
//! operands; `table`, `eval` and `infer` lower to single command
//! pseudo-instructions carrying their arguments verbatim. Instructions are
//! kept as tagged variants so the interpreter never re-parses text, but
//! their `Display` output is the observable 3AC line format:
//!
//! ```text
//! t1 = AND A B
//! foo = t1
//! X = 1
//! TABLE LAST_EXPR
//! EVAL
//! INFER a b
//! ```
//!
//! Temporaries `t1`, `t2`, ... restart for every statement; a temporary is
//! always produced before it is referenced, and never escapes its block.

use std::fmt;

use crate::{parser::expression::{BinaryOperator, Expression}, statement::Statement};

/// A binary opcode in the IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
	And,
	Or,
	Xor,
	Implies,
}

impl From<BinaryOperator> for OpCode {
	fn from(op: BinaryOperator) -> Self {
		match op {
			BinaryOperator::And => OpCode::And,
			BinaryOperator::Or => OpCode::Or,
			BinaryOperator::Xor => OpCode::Xor,
			BinaryOperator::Implies => OpCode::Implies,
		}
	}
}

impl fmt::Display for OpCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OpCode::And => write!(f, "AND"),
			OpCode::Or => write!(f, "OR"),
			OpCode::Xor => write!(f, "XOR"),
			OpCode::Implies => write!(f, "IMPLIES"),
		}
	}
}

/// A value read by an instruction: a literal, a block-local temporary, or a
/// variable/rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
	Const(bool),
	Temp(u32),
	Name(String),
}

impl fmt::Display for Operand {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Operand::Const(value) => write!(f, "{}", u8::from(*value)),
			Operand::Temp(n) => write!(f, "t{n}"),
			Operand::Name(name) => write!(f, "{name}"),
		}
	}
}

/// The destination an instruction writes to. `Result` is the placeholder
/// target used when a bare, unnamed expression would otherwise lower to an
/// empty block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
	Temp(u32),
	Result,
	Name(String),
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Target::Temp(n) => write!(f, "t{n}"),
			Target::Result => write!(f, "t_res"),
			Target::Name(name) => write!(f, "{name}"),
		}
	}
}

/// One 3AC instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
	/// `<target> = OP <lhs> <rhs>`
	Binary { target: Target, op: OpCode, lhs: Operand, rhs: Operand },
	/// `<target> = NOT <operand>`
	Not { target: Target, operand: Operand },
	/// `<target> = <value>`
	Assign { target: Target, value: Operand },
	/// `TABLE <name>` or `TABLE LAST_EXPR`
	Table(Option<String>),
	/// `EVAL`
	Eval,
	/// `INFER <name> <name> ...`
	Infer(Vec<String>),
}

impl fmt::Display for Instruction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Instruction::Binary { target, op, lhs, rhs } => write!(f, "{target} = {op} {lhs} {rhs}"),
			Instruction::Not { target, operand } => write!(f, "{target} = NOT {operand}"),
			Instruction::Assign { target, value } => write!(f, "{target} = {value}"),
			Instruction::Table(Some(name)) => write!(f, "TABLE {name}"),
			Instruction::Table(None) => write!(f, "TABLE LAST_EXPR"),
			Instruction::Eval => write!(f, "EVAL"),
			Instruction::Infer(names) => write!(f, "INFER {}", names.join(" ")),
		}
	}
}

/// Lowers statements to 3AC blocks, one statement per call.
pub(crate) struct IrGenerator {
	temp_counter: u32,
	code:         Vec<Instruction>,
}

impl IrGenerator {
	pub fn new() -> Self { Self { temp_counter: 0, code: Vec::new() } }

	fn new_temp(&mut self) -> u32 {
		self.temp_counter += 1;
		self.temp_counter
	}

	/// Lower one statement to its instruction block. The temporary counter
	/// restarts per call, so temporaries are unique only within one block —
	/// blocks are executed and discarded independently, so nothing more is
	/// needed.
	pub fn generate(&mut self, statement: &Statement) -> Vec<Instruction> {
		self.temp_counter = 0;
		self.code = Vec::new();

		match statement {
			Statement::Expr { expr, name } => {
				let result = self.lower_expression(expr);
				if let Some(name) = name {
					self.code.push(Instruction::Assign { target: Target::Name((*name).to_string()), value: result.clone() });
				}
				// A bare variable or literal lowers to nothing; bind it to
				// the placeholder so the block is never empty.
				if self.code.is_empty() {
					self.code.push(Instruction::Assign { target: Target::Result, value: result });
				}
			}
			Statement::Set { name, value } => {
				self.code.push(Instruction::Assign {
					target: Target::Name((*name).to_string()),
					value:  Operand::Const(*value),
				});
			}
			Statement::Table { target } => {
				self.code.push(Instruction::Table(target.map(str::to_string)));
			}
			Statement::Eval => {
				self.code.push(Instruction::Eval);
			}
			Statement::Rule { name, expr } => {
				// Rules share the instruction shape of named expressions;
				// only the semantic uniqueness rule tells them apart.
				let result = self.lower_expression(expr);
				self.code.push(Instruction::Assign { target: Target::Name((*name).to_string()), value: result });
			}
			Statement::Infer { rule_names } => {
				self.code.push(Instruction::Infer(rule_names.iter().map(|n| (*n).to_string()).collect()));
			}
		}

		std::mem::take(&mut self.code)
	}

	/// Post-order lowering: operands first, then one instruction per
	/// operator node, returning where the node's value lives.
	fn lower_expression(&mut self, expr: &Expression) -> Operand {
		match expr {
			Expression::Binary { left, op, right } => {
				let lhs = self.lower_expression(left);
				let rhs = self.lower_expression(right);
				let temp = self.new_temp();
				self.code.push(Instruction::Binary { target: Target::Temp(temp), op: OpCode::from(*op), lhs, rhs });
				Operand::Temp(temp)
			}
			Expression::Not(inner) => {
				let operand = self.lower_expression(inner);
				let temp = self.new_temp();
				self.code.push(Instruction::Not { target: Target::Temp(temp), operand });
				Operand::Temp(temp)
			}
			Expression::Literal(value) => Operand::Const(*value),
			Expression::Var(name) => Operand::Name((*name).to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::Parser, scanner::Scanner};

	/// Lower every statement of `input` with one generator and return the
	/// rendered lines of each block.
	fn lower(input: &str) -> Vec<Vec<String>> {
		let mut scanner = Scanner::new(input);
		let tokens = scanner.scan_tokens().unwrap();
		let mut parser = Parser::new(tokens);
		let program = parser.parse().unwrap();
		let mut generator = IrGenerator::new();
		program
			.statements
			.iter()
			.map(|s| generator.generate(s).iter().map(Instruction::to_string).collect())
			.collect()
	}

	#[test]
	fn lower_binary_expression() {
		assert_eq!(lower("expr A & B;"), vec![vec!["t1 = AND A B"]]);
		assert_eq!(lower("expr A -> B;"), vec![vec!["t1 = IMPLIES A B"]]);
	}

	#[test]
	fn lower_nested_expression() {
		assert_eq!(lower("expr foo A & B | !C;"), vec![vec![
			"t1 = AND A B",
			"t2 = NOT C",
			"t3 = OR t1 t2",
			"foo = t3"
		]]);
	}

	#[test]
	fn lower_literals_in_place() {
		assert_eq!(lower("expr A & 1;"), vec![vec!["t1 = AND A 1"]]);
		assert_eq!(lower("expr 0 ^ 1;"), vec![vec!["t1 = XOR 0 1"]]);
	}

	#[test]
	fn lower_bare_expression_gets_placeholder() {
		assert_eq!(lower("expr A;"), vec![vec!["t_res = A"]]);
		assert_eq!(lower("expr 1;"), vec![vec!["t_res = 1"]]);
		// With a binding name there is nothing to pad.
		assert_eq!(lower("expr foo A;"), vec![vec!["foo = A"]]);
	}

	#[test]
	fn lower_set_and_rule() {
		assert_eq!(lower("set X = 1;"), vec![vec!["X = 1"]]);
		assert_eq!(lower("set X = 0;"), vec![vec!["X = 0"]]);
		assert_eq!(lower("R: A -> B;"), vec![vec!["t1 = IMPLIES A B", "R = t1"]]);
	}

	#[test]
	fn lower_commands() {
		assert_eq!(lower("table;"), vec![vec!["TABLE LAST_EXPR"]]);
		assert_eq!(lower("table R;"), vec![vec!["TABLE R"]]);
		assert_eq!(lower("eval;"), vec![vec!["EVAL"]]);
		assert_eq!(lower("infer a, b;"), vec![vec!["INFER a b"]]);
	}

	#[test]
	fn temp_counter_restarts_per_statement() {
		assert_eq!(lower("expr A & B; expr C | D;"), vec![vec!["t1 = AND A B"], vec!["t1 = OR C D"]]);
	}
}
