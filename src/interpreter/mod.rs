//! Stateful executor of 3AC instruction blocks.
//!
//! One `Interpreter` lives for a whole session and accumulates state across
//! statements: the variable store, the cached "last meaningful expression",
//! and the saved code of every named expression or rule. A failing
//! statement never rolls back state established by earlier ones.
//!
//! Evaluation semantics: operands resolve literals to themselves, then
//! temporaries, then the variable context; an unresolved name is `0`, never
//! an error. Truth functions are the standard ones, with `IMPLIES a b`
//! meaning `!a | b`.
//!
//! A sharing hazard worth knowing before extending this to run
//! concurrently: truth-table generation reuses the ordinary write-through
//! evaluator under per-row local bindings, so named assignment targets
//! write into the global store on every row and the final row's values
//! stick. That leak is long-standing observable behavior and is kept, not
//! fixed.

use std::collections::{BTreeSet, HashMap};

use crate::{error::interpreter::RuntimeError, ir::{Instruction, OpCode, Operand, Target}};

/// Executes instruction blocks and owns all cross-statement session state.
pub struct Interpreter {
	/// Current value of every variable or rule ever assigned.
	variables:  HashMap<String, bool>,
	/// The most recent block that held real computation, for `eval` and the
	/// id-less `table`.
	last_ir:    Option<Vec<Instruction>>,
	/// Instruction blocks of named expressions and rules, keyed by name.
	/// Reassignment overwrites the entry.
	saved_code: HashMap<String, Vec<Instruction>>,
}

impl Interpreter {
	pub fn new() -> Self { Self { variables: HashMap::new(), last_ir: None, saved_code: HashMap::new() } }

	/// Look up a variable or rule value in the session store.
	pub fn variable(&self, name: &str) -> Option<bool> { self.variables.get(name).copied() }

	/// Execute one statement's instruction block.
	pub fn execute(&mut self, block: Vec<Instruction>) -> Result<(), RuntimeError> {
		// A block is "meaningful" if it computes anything: an operator
		// instruction, a temporary target, or a named assignment whose
		// right-hand side is not a bare literal. The literal exception keeps
		// `set X = 1;` from clobbering the cached last expression.
		let mut meaningful = false;
		let mut output_vars: Vec<String> = Vec::new();
		for instruction in &block {
			match instruction {
				Instruction::Binary { .. } | Instruction::Not { .. } => meaningful = true,
				Instruction::Assign { target, value } => match target {
					Target::Temp(_) | Target::Result => meaningful = true,
					Target::Name(name) => {
						if !matches!(value, Operand::Const(_)) {
							output_vars.push(name.clone());
							meaningful = true;
						}
					}
				},
				Instruction::Table(_) | Instruction::Eval | Instruction::Infer(_) => {}
			}
		}
		if meaningful {
			self.last_ir = Some(block.clone());
			for name in output_vars {
				self.saved_code.insert(name, block.clone());
			}
		}

		// TABLE and EVAL take over the whole block; a block carries at most
		// one command by construction.
		for instruction in &block {
			match instruction {
				Instruction::Table(target) => return self.table(&block, target.as_deref()),
				Instruction::Eval => {
					self.eval();
					return Ok(());
				}
				_ => {}
			}
		}

		self.run(&block, None);

		// INFER reads values, so it runs after execution.
		for instruction in &block {
			if let Instruction::Infer(names) = instruction {
				self.infer(names);
				return Ok(());
			}
		}
		Ok(())
	}

	/// Run a block against a snapshot of the variable store, optionally
	/// overlaid with local bindings, and return the last computed value.
	///
	/// Temporaries stay block-local; named targets write through to the
	/// session store even when locals are in play.
	fn run(&mut self, block: &[Instruction], locals: Option<&HashMap<String, bool>>) -> bool {
		let mut context = self.variables.clone();
		if let Some(locals) = locals {
			for (name, value) in locals {
				context.insert(name.clone(), *value);
			}
		}
		let mut temps: HashMap<u32, bool> = HashMap::new();
		let mut last_result = false;

		for instruction in block {
			let (target, value) = match instruction {
				Instruction::Binary { target, op, lhs, rhs } => {
					let a = resolve(lhs, &context, &temps);
					let b = resolve(rhs, &context, &temps);
					(target, apply(*op, a, b))
				}
				Instruction::Not { target, operand } => (target, !resolve(operand, &context, &temps)),
				Instruction::Assign { target, value } => (target, resolve(value, &context, &temps)),
				Instruction::Table(_) | Instruction::Eval | Instruction::Infer(_) => continue,
			};
			match target {
				Target::Temp(n) => {
					temps.insert(*n, value);
				}
				// The placeholder result is never read back.
				Target::Result => {}
				Target::Name(name) => {
					self.variables.insert(name.clone(), value);
					context.insert(name.clone(), value);
				}
			}
			last_result = value;
		}

		last_result
	}

	/// Re-run the cached last expression and print its value.
	fn eval(&mut self) {
		match self.last_ir.clone() {
			Some(block) => {
				let value = self.run(&block, None);
				println!("{}", u8::from(value));
			}
			None => println!("No expression to evaluate."),
		}
	}

	/// Print a truth table for the target block.
	fn table(&mut self, block: &[Instruction], target: Option<&str>) -> Result<(), RuntimeError> {
		let target_code: Vec<Instruction> = match target {
			Some(id) => match self.saved_code.get(id) {
				Some(code) => code.clone(),
				None => return Err(RuntimeError::UnknownTarget(id.to_string())),
			},
			// The id-less form tables the last expression, unless the
			// current block itself carries assignments.
			None => {
				let has_assignments = block.iter().any(|i| {
					matches!(i, Instruction::Binary { .. } | Instruction::Not { .. } | Instruction::Assign { .. })
				});
				match (&self.last_ir, has_assignments) {
					(Some(last), false) => last.clone(),
					_ => block.to_vec(),
				}
			}
		};

		let input_vars = input_variables(&target_code);
		if input_vars.is_empty() {
			println!("No variables to generate table for.");
			return Ok(());
		}

		for line in self.render_table(&target_code, &input_vars) {
			println!("{line}");
		}
		Ok(())
	}

	/// Build the printable table: header, dash rule, then one row per
	/// assignment of the sorted input variables, counted in ascending binary
	/// order with the first variable most significant.
	fn render_table(&mut self, code: &[Instruction], input_vars: &[String]) -> Vec<String> {
		let header = format!("{} | Result", input_vars.join(" | "));
		let mut lines = vec![header.clone(), "-".repeat(header.len())];

		let n = input_vars.len();
		for row in 0..(1usize << n) {
			let mut locals = HashMap::new();
			let mut cells = Vec::with_capacity(n + 1);
			for (i, name) in input_vars.iter().enumerate() {
				let bit = (row >> (n - 1 - i)) & 1 == 1;
				locals.insert(name.clone(), bit);
				cells.push(u8::from(bit).to_string());
			}
			let result = self.run(code, Some(&locals));
			cells.push(u8::from(result).to_string());
			lines.push(cells.join(" | "));
		}
		lines
	}

	/// Report the current values of the named rules. No logical inference
	/// happens here; it is a lookup over already-computed values.
	fn infer(&self, names: &[String]) {
		println!("Inferring from rules: {}", names.join(", "));
		for name in names {
			match self.variables.get(name) {
				Some(value) => println!("{name}: {}", u8::from(*value)),
				None => println!("{name}: Undefined"),
			}
		}
	}
}

impl Default for Interpreter {
	fn default() -> Self { Self::new() }
}

/// Collect a block's input variables: purely alphabetic names read on the
/// right-hand side of computational lines. This is a syntactic scan, not
/// data flow — a computed-but-unused variable still shows up, and names
/// with digits or underscores never do. Returned sorted for deterministic
/// column order.
fn input_variables(code: &[Instruction]) -> Vec<String> {
	let mut vars = BTreeSet::new();
	let mut visit = |operand: &Operand| {
		if let Operand::Name(name) = operand {
			if name.chars().all(char::is_alphabetic) {
				vars.insert(name.clone());
			}
		}
	};
	for instruction in code {
		match instruction {
			Instruction::Binary { lhs, rhs, .. } => {
				visit(lhs);
				visit(rhs);
			}
			Instruction::Not { operand, .. } => visit(operand),
			Instruction::Assign { value, .. } => visit(value),
			Instruction::Table(_) | Instruction::Eval | Instruction::Infer(_) => {}
		}
	}
	vars.into_iter().collect()
}

fn resolve(operand: &Operand, context: &HashMap<String, bool>, temps: &HashMap<u32, bool>) -> bool {
	match operand {
		Operand::Const(value) => *value,
		Operand::Temp(n) => temps.get(n).copied().unwrap_or(false),
		Operand::Name(name) => context.get(name.as_str()).copied().unwrap_or(false),
	}
}

fn apply(op: OpCode, a: bool, b: bool) -> bool {
	match op {
		OpCode::And => a && b,
		OpCode::Or => a || b,
		OpCode::Xor => a != b,
		OpCode::Implies => !a || b,
	}
}
