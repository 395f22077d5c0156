/// A parse error with its source position. Parsing stops at the first one;
/// there is no recovery or resynchronization.
#[derive(thiserror::Error, Debug)]
#[error("{line}:{column}: {type}")]
pub struct ParseError {
	/// The 1-based line of the offending token.
	line:   usize,
	/// The 1-based column of the offending token.
	column: usize,
	/// The type of parse error.
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, column: usize, r#type: ParseErrorType) -> Self { Self { line, column, r#type } }
}

/// Types of parse errors.
#[derive(Debug)]
pub enum ParseErrorType {
	/// A required token was missing or of the wrong kind.
	Expected { expected: &'static str, found: &'static str },
	/// An identifier at statement start not followed by `:`.
	StrayIdentifier,
	/// A token that cannot begin a statement.
	UnexpectedStatementStart(&'static str),
	/// A token that cannot begin a primary expression.
	UnexpectedExpressionToken(&'static str),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			Expected { expected, found } => {
				write!(f, "Expected {expected}, found {found}")
			}
			StrayIdentifier => {
				write!(f, "Unexpected identifier at start of statement. Did you mean 'expr' or 'set'?")
			}
			UnexpectedStatementStart(found) => {
				write!(f, "Unexpected {found} at start of statement")
			}
			UnexpectedExpressionToken(found) => {
				write!(f, "Unexpected {found} in expression")
			}
		}
	}
}
