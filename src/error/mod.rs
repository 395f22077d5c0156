pub mod interpreter;
pub mod parser;
pub mod scanner;
pub mod semantic;

use crate::error::{interpreter::RuntimeError, parser::ParseError, scanner::ScanError, semantic::SemanticError};

/// Top-level error for one chunk of source. Every stage failure is terminal
/// for the statement chain that produced it; the session state accumulated
/// by earlier chunks is untouched.
#[derive(thiserror::Error, Debug)]
pub enum LogicError {
	#[error("CompilerInternalError: {0}")]
	Internal(#[from] anyhow::Error),
	#[error("Lexical error at {0}")]
	Scan(#[from] ScanError),
	#[error("Parse error at {0}")]
	Parse(#[from] ParseError),
	#[error("Semantic error: {0}")]
	Semantic(#[from] SemanticError),
	#[error("Runtime error: {0}")]
	Runtime(#[from] RuntimeError),
}
