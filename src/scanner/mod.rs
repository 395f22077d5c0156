//! Lexical analysis for the logic language.
//!
//! The scanner walks the raw source text and produces an ordered token
//! sequence terminated by [`TokenType::Eof`]. It tracks 1-based line and
//! column positions so later stages can attach them to diagnostics.
//!
//! The lexical grammar is tiny: identifiers (a letter followed by
//! alphanumerics or underscores, case-sensitive), the boolean literals `0`
//! and `1`, single-character operators and punctuation, and one
//! two-character lookahead case, `->`. A `-` not followed by `>` is a
//! lexical error. There are no comments, strings, or escape sequences.

mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
use anyhow::Context;
pub(crate) use token::*;

use crate::{LogicError, error::scanner::{ScanError, ScanErrorType, ScannerError}};

/// A scanner for logic source code
pub(crate) struct Scanner<'a> {
	/// User input source code
	source:       &'a str,
	/// User input source code iterator
	source_iter:  Peekable<CharIndices<'a>>,
	/// Byte offset of the beginning of the current lexeme
	start:        usize,
	/// Byte offset just past the character currently being considered
	cursor:       usize,
	/// 1-based line of the character currently being considered
	line:         usize,
	/// 1-based column of the next character to be consumed
	column:       usize,
	/// Column where the current lexeme began
	start_column: usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 1, start_column: 1 }
	}

	/// Scan all tokens from the source code. The first lexical error aborts
	/// the scan.
	pub fn scan_tokens(&mut self) -> Result<Vec<Token<'a>>, LogicError> {
		let mut tokens = Vec::new();
		while let Some(&(index, _)) = self.source_iter.peek() {
			// We are at the beginning of the next lexeme.
			self.start = index;
			self.cursor = self.start;
			self.start_column = self.column;
			match self.scan_token(&mut tokens) {
				Err(ScannerError::ScanError(e)) => return Err(LogicError::Scan(e)),
				Err(ScannerError::InternalError(e)) => return Err(LogicError::Internal(e)),
				Ok(_) => {}
			}
		}
		tokens.push(Token::new(Eof, "", self.line, self.column));
		Ok(tokens)
	}

	/// Scan a single token from the source code
	fn scan_token(&mut self, tokens: &mut Vec<Token<'a>>) -> Result<(), ScannerError> {
		let next_char = self.advance().context("Unexpected EOF")?;
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			';' => Semicolon,
			'=' => Equal,
			':' => Colon,
			',' => Comma,
			'&' => And,
			'|' => Or,
			'!' => Not,
			'^' => Xor,
			'-' => {
				if self.match_next('>') {
					Implies
				} else {
					return Err(
						ScanError::new(self.line, self.start_column, ScanErrorType::UnexpectedCharacter('-')).into(),
					);
				}
			}
			'0' => Bool(false),
			'1' => Bool(true),
			' ' | '\r' | '\t' => EmptyChar,
			'\n' => {
				self.line += 1;
				self.column = 1;
				NewLine
			}
			c if c.is_ascii_alphabetic() => self.identifier(),
			c => {
				return Err(ScanError::new(self.line, self.start_column, ScanErrorType::UnexpectedCharacter(c)).into());
			}
		};

		if !r#type.is_ignored() {
			let lexeme = &self.source[self.start..self.cursor];
			tokens.push(Token::new(r#type, lexeme, self.line, self.start_column));
		}

		Ok(())
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		if self.peek() == Some(expected) {
			self.advance();
			true
		} else {
			false
		}
	}

	/// Advance to the next character
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		self.column += 1;
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Scan an identifier or keyword. Scanning is greedy; `xor` and the
	/// statement keywords are recognized only after the full lexeme is read.
	fn identifier(&mut self) -> TokenType<'a> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
			self.advance();
		}
		let text = &self.source[self.start..self.cursor];
		TokenType::keyword_or_identifier(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str, ok: bool) {
		let mut scanner = Scanner::new(input);
		let result = scanner.scan_tokens();
		assert!(result.is_ok() == ok, "{input:?}");
	}

	fn types(input: &str) -> Vec<TokenType<'_>> {
		let mut scanner = Scanner::new(input);
		scanner.scan_tokens().unwrap().into_iter().map(|t| t.r#type).collect()
	}

	#[test]
	fn scan_tokens() {
		scan("", true);
		scan("(", true);
		scan("();:,=", true);
		scan(" ( ) ", true);
		scan("@", false);
		scan("你好", false);
		scan("2", false);
		scan("$", false);
	}

	#[test]
	fn scan_operators() {
		scan("&", true);
		scan("|", true);
		scan("!", true);
		scan("^", true);
		scan("->", true);
		scan("-", false);
		scan("- >", false);
		assert_eq!(types("->"), vec![Implies, Eof]);
	}

	#[test]
	fn scan_booleans() {
		assert_eq!(types("0"), vec![Bool(false), Eof]);
		assert_eq!(types("1"), vec![Bool(true), Eof]);
		assert_eq!(types("10"), vec![Bool(true), Bool(false), Eof]);
	}

	#[test]
	fn scan_keywords() {
		assert_eq!(types("expr"), vec![Expr, Eof]);
		assert_eq!(types("set"), vec![Set, Eof]);
		assert_eq!(types("table"), vec![Table, Eof]);
		assert_eq!(types("eval"), vec![Eval, Eof]);
		assert_eq!(types("infer"), vec![Infer, Eof]);
		assert_eq!(types("xor"), vec![Xor, Eof]);
	}

	#[test]
	fn scan_identifiers() {
		assert_eq!(types("x"), vec![Identifier("x"), Eof]);
		assert_eq!(types("snake_case"), vec![Identifier("snake_case"), Eof]);
		assert_eq!(types("CamelCase9"), vec![Identifier("CamelCase9"), Eof]);
		// Keywords are case-sensitive and never matched as a prefix.
		assert_eq!(types("expression"), vec![Identifier("expression"), Eof]);
		assert_eq!(types("xorx"), vec![Identifier("xorx"), Eof]);
		assert_eq!(types("Set"), vec![Identifier("Set"), Eof]);
		// A leading underscore is not a valid identifier start.
		scan("_x", false);
	}

	#[test]
	fn scan_combined() {
		assert_eq!(types("A & B;"), vec![Identifier("A"), And, Identifier("B"), Semicolon, Eof]);
		assert_eq!(types("R: A -> B;"), vec![
			Identifier("R"),
			Colon,
			Identifier("A"),
			Implies,
			Identifier("B"),
			Semicolon,
			Eof
		]);
		assert_eq!(types("set X = 1;"), vec![Set, Identifier("X"), Equal, Bool(true), Semicolon, Eof]);
	}

	#[test]
	fn scan_positions() {
		let mut scanner = Scanner::new("A &\n  Bc");
		let tokens = scanner.scan_tokens().unwrap();
		assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
		assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
		assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
		assert_eq!(tokens[2].lexeme, "Bc");
	}
}
