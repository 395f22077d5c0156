//! Recursive-descent parser for the logic language.
//!
//! Statement dispatch is keyword-driven, except for rule declarations which
//! are detected by an identifier followed by `:`. The parser keeps one
//! token of lookahead plus an explicit second-token peek, needed both for
//! that rule detection and for the `expr` binding-name heuristic: in
//! `expr foo A & B;` the identifier `foo` is a binding name because it is
//! immediately followed by the start of another expression (an identifier,
//! `(`, `!`, or a boolean literal), while in `expr A;` the identifier `A`
//! is the expression itself.
//!
//! Expression grammar, lowest precedence first:
//!
//! ``` BNF
//! expression  → implication ;
//! implication → or ( "->" implication )? ;
//! or          → xor ( "|" xor )* ;
//! xor         → and ( ( "^" | "xor" ) and )* ;
//! and         → not ( "&" not )* ;
//! not         → "!" not | primary ;
//! primary     → ID | BOOL | "(" expression ")" ;
//! ```
//!
//! `->` is right-associative; the other binary operators associate left.
//! There is no error recovery: the first error aborts the parse.

pub(crate) mod expression;

use std::mem;

use TokenType::*;

use crate::{LogicError, error::parser::{ParseError, ParseErrorType}, parser::expression::{BinaryOperator, Expression}, scanner::{Token, TokenType}, statement::{Program, Statement}};

pub(crate) struct Parser<'a> {
	/// The tokens to parse, always terminated by an `Eof` token.
	tokens: Vec<Token<'a>>,
	pos:    usize,
}

impl<'a> Parser<'a> {
	pub fn new(tokens: Vec<Token<'a>>) -> Self { Self { tokens, pos: 0 } }

	pub fn parse(&mut self) -> Result<Program<'a>, LogicError> {
		let mut statements = Vec::new();
		while !matches!(self.peek().r#type, Eof) {
			statements.push(self.statement()?);
		}
		Ok(Program { statements })
	}

	fn statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let token = *self.peek();
		match token.r#type {
			Expr => self.expr_statement(),
			Set => self.set_statement(),
			Table => self.table_statement(),
			Eval => self.eval_statement(),
			Infer => self.infer_statement(),
			Identifier(_) if matches!(self.peek_second().r#type, Colon) => self.rule_statement(),
			Identifier(_) => Err(ParseError::new(token.line, token.column, ParseErrorType::StrayIdentifier)),
			found => Err(ParseError::new(
				token.line,
				token.column,
				ParseErrorType::UnexpectedStatementStart(found.kind_name()),
			)),
		}
	}

	/// Parse `expr [name] <expression> ;`.
	fn expr_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.eat(Expr)?;
		let mut name = None;
		if let Identifier(id) = self.peek().r#type {
			// The identifier is a binding name only when another expression
			// follows it.
			if matches!(self.peek_second().r#type, Identifier(_) | LeftParen | Not | Bool(_)) {
				name = Some(id);
				self.advance();
			}
		}
		let expr = self.expression()?;
		self.eat(Semicolon)?;
		Ok(Statement::Expr { expr, name })
	}

	/// Parse `set <name> = <0|1> ;`.
	fn set_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.eat(Set)?;
		let name = self.identifier()?;
		self.eat(Equal)?;
		let value = self.bool_literal()?;
		self.eat(Semicolon)?;
		Ok(Statement::Set { name, value })
	}

	/// Parse `table [name] ;`.
	fn table_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.eat(Table)?;
		let mut target = None;
		if let Identifier(id) = self.peek().r#type {
			target = Some(id);
			self.advance();
		}
		self.eat(Semicolon)?;
		Ok(Statement::Table { target })
	}

	/// Parse `eval ;`.
	fn eval_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.eat(Eval)?;
		self.eat(Semicolon)?;
		Ok(Statement::Eval)
	}

	/// Parse `<name> : <expression> ;`.
	fn rule_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		let name = self.identifier()?;
		self.eat(Colon)?;
		let expr = self.expression()?;
		self.eat(Semicolon)?;
		Ok(Statement::Rule { name, expr })
	}

	/// Parse `infer <name> ( , <name> )* ;`.
	fn infer_statement(&mut self) -> Result<Statement<'a>, ParseError> {
		self.eat(Infer)?;
		let mut rule_names = vec![self.identifier()?];
		while matches!(self.peek().r#type, Comma) {
			self.advance();
			rule_names.push(self.identifier()?);
		}
		self.eat(Semicolon)?;
		Ok(Statement::Infer { rule_names })
	}

	fn expression(&mut self) -> Result<Expression<'a>, ParseError> { self.implication() }

	/// Parse implications. `->` is right-associative.
	fn implication(&mut self) -> Result<Expression<'a>, ParseError> {
		let expr = self.or()?;
		if matches!(self.peek().r#type, Implies) {
			self.advance();
			let right = self.implication()?;
			return Ok(Expression::binary(expr, BinaryOperator::Implies, right));
		}
		Ok(expr)
	}

	/// Parse disjunctions.
	fn or(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expr = self.xor()?;
		while matches!(self.peek().r#type, Or) {
			self.advance();
			expr = Expression::binary(expr, BinaryOperator::Or, self.xor()?);
		}
		Ok(expr)
	}

	/// Parse exclusive-or expressions. `^` and `xor` are the same token by
	/// the time they reach the parser.
	fn xor(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expr = self.and()?;
		while matches!(self.peek().r#type, Xor) {
			self.advance();
			expr = Expression::binary(expr, BinaryOperator::Xor, self.and()?);
		}
		Ok(expr)
	}

	/// Parse conjunctions.
	fn and(&mut self) -> Result<Expression<'a>, ParseError> {
		let mut expr = self.not()?;
		while matches!(self.peek().r#type, And) {
			self.advance();
			expr = Expression::binary(expr, BinaryOperator::And, self.not()?);
		}
		Ok(expr)
	}

	/// Parse negations. Right-recursive, so `!!A` works.
	fn not(&mut self) -> Result<Expression<'a>, ParseError> {
		if matches!(self.peek().r#type, Not) {
			self.advance();
			return Ok(Expression::not(self.not()?));
		}
		self.primary()
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Expression<'a>, ParseError> {
		let token = *self.peek();
		match token.r#type {
			Identifier(name) => {
				self.advance();
				Ok(Expression::Var(name))
			}
			Bool(value) => {
				self.advance();
				Ok(Expression::Literal(value))
			}
			LeftParen => {
				self.advance();
				let expr = self.expression()?;
				self.eat(RightParen)?;
				Ok(expr)
			}
			found => Err(ParseError::new(
				token.line,
				token.column,
				ParseErrorType::UnexpectedExpressionToken(found.kind_name()),
			)),
		}
	}

	/// Consume the current token if it has the expected kind, else error
	/// naming the expected and found kinds.
	fn eat(&mut self, expected: TokenType<'a>) -> Result<Token<'a>, ParseError> {
		let token = *self.peek();
		if mem::discriminant(&token.r#type) == mem::discriminant(&expected) {
			self.advance();
			Ok(token)
		} else {
			Err(ParseError::new(token.line, token.column, ParseErrorType::Expected {
				expected: expected.kind_name(),
				found:    token.r#type.kind_name(),
			}))
		}
	}

	/// Consume an identifier and return its text.
	fn identifier(&mut self) -> Result<&'a str, ParseError> {
		let token = self.eat(Identifier(""))?;
		Ok(token.lexeme)
	}

	/// Consume a boolean literal and return its value.
	fn bool_literal(&mut self) -> Result<bool, ParseError> {
		let token = self.eat(Bool(false))?;
		Ok(matches!(token.r#type, Bool(true)))
	}

	/// Advance to the next token, never moving past the trailing `Eof`.
	fn advance(&mut self) {
		if self.pos + 1 < self.tokens.len() {
			self.pos += 1;
		}
	}

	/// Peek at the current token.
	fn peek(&self) -> &Token<'a> { &self.tokens[self.pos] }

	/// Peek one token past the current one.
	fn peek_second(&self) -> &Token<'a> { &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)] }
}
