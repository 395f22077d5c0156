/// Scanner related errors
#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	/// Internal compiler error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during scanning
	#[error(transparent)]
	ScanError(#[from] ScanError),
}

/// A scanning error with its source position.
#[derive(thiserror::Error, Debug)]
#[error("{line}:{column}: {type}")]
pub struct ScanError {
	/// The 1-based line where the error occurred.
	line:   usize,
	/// The 1-based column where the error occurred.
	column: usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, column: usize, r#type: ScanErrorType) -> Self { Self { line, column, r#type } }
}

/// Types of scanning errors.
#[derive(Debug)]
pub enum ScanErrorType {
	/// Error for characters outside the language's alphabet. A lone `-` also
	/// lands here: the only lexeme it can start is `->`.
	UnexpectedCharacter(char),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character '{c}'")
			}
		}
	}
}
