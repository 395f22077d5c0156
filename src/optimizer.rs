//! Peephole optimization over 3AC blocks.
//!
//! A stateless, single pass: every instruction is rewritten (or not) in
//! isolation. There is no cross-line analysis, no dead-code elimination,
//! and the pass is not iterated to a fixed point — a chain of foldable
//! instructions may come out only partially folded, and that partial result
//! is the contract. Output blocks always have the same length and order as
//! their input; only right-hand sides change.
//!
//! Known scope limits, intentional rather than missing:
//! - `IMPLIES` is never folded, even with two literal operands.
//! - `X XOR 1 -> NOT X` and `X XOR X -> 0` are not rewritten; only the
//!   `XOR` cases with a literal `0` operand or two literals fold.

use crate::ir::{Instruction, OpCode, Operand, Target};

pub(crate) struct Optimizer;

impl Optimizer {
	/// Optimize one block, instruction by instruction. Command lines pass
	/// through untouched.
	pub fn optimize(&self, code: Vec<Instruction>) -> Vec<Instruction> {
		code.into_iter().map(|instruction| self.fold(instruction)).collect()
	}

	fn fold(&self, instruction: Instruction) -> Instruction {
		match instruction {
			Instruction::Not { target, operand: Operand::Const(value) } => {
				Instruction::Assign { target, value: Operand::Const(!value) }
			}
			Instruction::Binary { target, op, lhs, rhs } => self.fold_binary(target, op, lhs, rhs),
			other => other,
		}
	}

	fn fold_binary(&self, target: Target, op: OpCode, lhs: Operand, rhs: Operand) -> Instruction {
		use Operand::Const;

		match op {
			OpCode::And => match (&lhs, &rhs) {
				(Const(false), _) | (_, Const(false)) => Instruction::Assign { target, value: Const(false) },
				(Const(true), Const(true)) => Instruction::Assign { target, value: Const(true) },
				(Const(true), _) => Instruction::Assign { target, value: rhs },
				(_, Const(true)) => Instruction::Assign { target, value: lhs },
				_ => Instruction::Binary { target, op, lhs, rhs },
			},
			OpCode::Or => match (&lhs, &rhs) {
				(Const(true), _) | (_, Const(true)) => Instruction::Assign { target, value: Const(true) },
				(Const(false), Const(false)) => Instruction::Assign { target, value: Const(false) },
				(Const(false), _) => Instruction::Assign { target, value: rhs },
				(_, Const(false)) => Instruction::Assign { target, value: lhs },
				_ => Instruction::Binary { target, op, lhs, rhs },
			},
			OpCode::Xor => match (&lhs, &rhs) {
				(Const(a), Const(b)) => Instruction::Assign { target, value: Const(a != b) },
				(Const(false), _) => Instruction::Assign { target, value: rhs },
				(_, Const(false)) => Instruction::Assign { target, value: lhs },
				// X XOR 1 and X XOR X stay as they are.
				_ => Instruction::Binary { target, op, lhs, rhs },
			},
			// IMPLIES has no folding rules.
			OpCode::Implies => Instruction::Binary { target, op, lhs, rhs },
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn binary(op: OpCode, lhs: Operand, rhs: Operand) -> Instruction {
		Instruction::Binary { target: Target::Temp(1), op, lhs, rhs }
	}

	fn name(n: &str) -> Operand { Operand::Name(n.to_string()) }

	/// Optimize a single instruction and render the result.
	fn opt(instruction: Instruction) -> String {
		Optimizer.optimize(vec![instruction]).remove(0).to_string()
	}

	#[test]
	fn fold_not() {
		assert_eq!(opt(Instruction::Not { target: Target::Temp(1), operand: Operand::Const(false) }), "t1 = 1");
		assert_eq!(opt(Instruction::Not { target: Target::Temp(1), operand: Operand::Const(true) }), "t1 = 0");
		assert_eq!(opt(Instruction::Not { target: Target::Temp(1), operand: name("X") }), "t1 = NOT X");
	}

	#[test]
	fn fold_and() {
		assert_eq!(opt(binary(OpCode::And, Operand::Const(false), name("X"))), "t1 = 0");
		assert_eq!(opt(binary(OpCode::And, name("X"), Operand::Const(false))), "t1 = 0");
		assert_eq!(opt(binary(OpCode::And, Operand::Const(true), Operand::Const(true))), "t1 = 1");
		assert_eq!(opt(binary(OpCode::And, Operand::Const(true), name("X"))), "t1 = X");
		assert_eq!(opt(binary(OpCode::And, name("X"), Operand::Const(true))), "t1 = X");
		assert_eq!(opt(binary(OpCode::And, name("X"), name("Y"))), "t1 = AND X Y");
	}

	#[test]
	fn fold_or() {
		assert_eq!(opt(binary(OpCode::Or, Operand::Const(true), name("X"))), "t1 = 1");
		assert_eq!(opt(binary(OpCode::Or, name("X"), Operand::Const(true))), "t1 = 1");
		assert_eq!(opt(binary(OpCode::Or, Operand::Const(false), Operand::Const(false))), "t1 = 0");
		assert_eq!(opt(binary(OpCode::Or, Operand::Const(false), name("X"))), "t1 = X");
		assert_eq!(opt(binary(OpCode::Or, name("X"), Operand::Const(false))), "t1 = X");
		assert_eq!(opt(binary(OpCode::Or, name("X"), name("Y"))), "t1 = OR X Y");
	}

	#[test]
	fn fold_xor() {
		assert_eq!(opt(binary(OpCode::Xor, Operand::Const(true), Operand::Const(true))), "t1 = 0");
		assert_eq!(opt(binary(OpCode::Xor, Operand::Const(false), Operand::Const(true))), "t1 = 1");
		assert_eq!(opt(binary(OpCode::Xor, Operand::Const(false), name("X"))), "t1 = X");
		assert_eq!(opt(binary(OpCode::Xor, name("X"), Operand::Const(false))), "t1 = X");
		// The inverse and self-inverse identities are out of scope.
		assert_eq!(opt(binary(OpCode::Xor, name("X"), Operand::Const(true))), "t1 = XOR X 1");
		assert_eq!(opt(binary(OpCode::Xor, name("X"), name("X"))), "t1 = XOR X X");
	}

	#[test]
	fn implies_never_folds() {
		assert_eq!(opt(binary(OpCode::Implies, Operand::Const(true), Operand::Const(true))), "t1 = IMPLIES 1 1");
		assert_eq!(opt(binary(OpCode::Implies, Operand::Const(false), name("X"))), "t1 = IMPLIES 0 X");
	}

	#[test]
	fn commands_and_assigns_pass_through() {
		assert_eq!(opt(Instruction::Table(None)), "TABLE LAST_EXPR");
		assert_eq!(opt(Instruction::Eval), "EVAL");
		assert_eq!(opt(Instruction::Infer(vec!["a".into(), "b".into()])), "INFER a b");
		assert_eq!(
			opt(Instruction::Assign { target: Target::Name("X".into()), value: Operand::Const(true) }),
			"X = 1"
		);
	}

	#[test]
	fn preserves_length_and_order() {
		let block = vec![
			binary(OpCode::And, Operand::Const(false), name("X")),
			Instruction::Not { target: Target::Temp(2), operand: Operand::Temp(1) },
			Instruction::Assign { target: Target::Name("r".into()), value: Operand::Temp(2) },
		];
		let optimized = Optimizer.optimize(block);
		assert_eq!(optimized.len(), 3);
		assert_eq!(optimized[0].to_string(), "t1 = 0");
		// Single pass: t2 = NOT t1 is not folded even though t1 just became
		// a constant; that needs data flow the peephole never does.
		assert_eq!(optimized[1].to_string(), "t2 = NOT t1");
		assert_eq!(optimized[2].to_string(), "r = t2");
	}

	#[test]
	fn optimize_is_idempotent_once_folded() {
		let block = vec![
			binary(OpCode::Xor, name("A"), name("B")),
			Instruction::Not { target: Target::Temp(2), operand: Operand::Temp(1) },
			binary(OpCode::Implies, Operand::Const(true), Operand::Const(true)),
		];
		let once = Optimizer.optimize(block);
		let twice = Optimizer.optimize(once.clone());
		assert_eq!(once, twice);
	}
}
