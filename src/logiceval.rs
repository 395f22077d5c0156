use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{LogicError, interpreter::Interpreter, ir::{Instruction, IrGenerator}, optimizer::Optimizer, parser::Parser, scanner::Scanner, semantic::SemanticAnalyzer, statement::Program};

/// LogicEval is the session driver for the boolean-logic compiler. It feeds
/// source chunks through the pipeline and hands the resulting instruction
/// blocks, in program order, to one long-lived [`Interpreter`].
pub struct LogicEval;

impl LogicEval {
	/// Compile and run a whole source file as one chunk.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LogicError> {
		let source = read_to_string(path).context("Failed open source file")?;
		let mut interpreter = Interpreter::new();
		self.run(&source, &mut interpreter)
	}

	/// Run the REPL prompt. Lines are buffered until one contains `;`, then
	/// the buffered chunk is processed. An error aborts only that chunk;
	/// the session state survives it.
	pub fn run_prompt(&self) {
		println!("LogicEval v1.0 (REPL mode)");
		println!("End statements with ';'. Type 'exit' to quit.");
		let mut interpreter = Interpreter::new();
		let mut buffer = String::new();
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("{}", if buffer.is_empty() { "> " } else { "... " });
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited logiceval repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if input.trim() == "exit" {
				break;
			}
			buffer.push_str(&input);
			if input.contains(';') {
				if let Err(e) = self.run(&buffer, &mut interpreter) {
					eprintln!("Error: {e}");
				}
				buffer.clear();
			}
		}
	}

	/// Compile one source chunk and execute it statement by statement
	/// against the given session interpreter.
	pub fn run(&self, source: &str, interpreter: &mut Interpreter) -> Result<(), LogicError> {
		let program = front_end(source)?;

		let mut generator = IrGenerator::new();
		let optimizer = Optimizer;
		for statement in &program.statements {
			let code = optimizer.optimize(generator.generate(statement));
			interpreter.execute(code)?;
		}
		Ok(())
	}
}

/// Compile a source chunk to its optimized instruction blocks, concatenated
/// in statement order, without executing anything.
pub fn compile(source: &str) -> Result<Vec<Instruction>, LogicError> {
	let program = front_end(source)?;

	let mut generator = IrGenerator::new();
	let optimizer = Optimizer;
	let mut code = Vec::new();
	for statement in &program.statements {
		code.extend(optimizer.optimize(generator.generate(statement)));
	}
	Ok(code)
}

/// Scan, parse and semantically check one chunk. Each chunk gets a fresh
/// analyzer, so rule uniqueness holds per compilation.
fn front_end(source: &str) -> Result<Program<'_>, LogicError> {
	let mut scanner = Scanner::new(source);
	let tokens = scanner.scan_tokens()?;
	let mut parser = Parser::new(tokens);
	let program = parser.parse()?;
	SemanticAnalyzer::new().check(&program)?;
	Ok(program)
}
