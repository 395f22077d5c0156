/// A token produced by the scanner
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token<'a> {
	pub r#type: TokenType<'a>,
	pub lexeme: &'a str,
	pub line:   usize,
	pub column: usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType<'a>, lexeme: &'a str, line: usize, column: usize) -> Self {
		Self { r#type, lexeme, line, column }
	}
}

/// The different types of tokens in the logic language. Copying is
/// lightweight: identifier payloads are slices of the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TokenType<'a> {
	/// New line character `\n`.
	NewLine,
	/// Empty character: ` `, `\r`, `\t`.
	EmptyChar,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Semicolon `;`, the statement terminator.
	Semicolon,
	/// Equal `=`.
	Equal,
	/// Colon `:`.
	Colon,
	/// Comma `,`.
	Comma,
	/// Conjunction `&`.
	And,
	/// Disjunction `|`.
	Or,
	/// Negation `!`.
	Not,
	/// Exclusive or, spelled `^` or `xor`. Both spellings normalize to this
	/// one token.
	Xor,
	/// Material implication `->`.
	Implies,
	/// Identifier, e.g. a variable or rule name.
	Identifier(&'a str),
	/// Boolean literal `0` or `1`.
	Bool(bool),
	/// `expr` statement keyword.
	Expr,
	/// `set` statement keyword.
	Set,
	/// `table` statement keyword.
	Table,
	/// `eval` statement keyword.
	Eval,
	/// `infer` statement keyword.
	Infer,
	/// End of input.
	Eof,
}

impl<'a> TokenType<'a> {
	pub fn is_ignored(&self) -> bool { matches!(self, TokenType::EmptyChar | TokenType::NewLine) }

	/// Keyword recognition happens by exact match once the whole identifier
	/// has been scanned, so no identifier prefix is ever mistaken for a
	/// keyword mid-scan.
	pub fn keyword_or_identifier(value: &'a str) -> Self {
		match value {
			"expr" => TokenType::Expr,
			"set" => TokenType::Set,
			"table" => TokenType::Table,
			"eval" => TokenType::Eval,
			"infer" => TokenType::Infer,
			"xor" => TokenType::Xor,
			_ => TokenType::Identifier(value),
		}
	}

	/// Human-readable kind name for diagnostics.
	pub fn kind_name(&self) -> &'static str {
		match self {
			TokenType::NewLine | TokenType::EmptyChar => "whitespace",
			TokenType::LeftParen => "'('",
			TokenType::RightParen => "')'",
			TokenType::Semicolon => "';'",
			TokenType::Equal => "'='",
			TokenType::Colon => "':'",
			TokenType::Comma => "','",
			TokenType::And => "'&'",
			TokenType::Or => "'|'",
			TokenType::Not => "'!'",
			TokenType::Xor => "'^'",
			TokenType::Implies => "'->'",
			TokenType::Identifier(_) => "identifier",
			TokenType::Bool(_) => "boolean literal",
			TokenType::Expr => "'expr'",
			TokenType::Set => "'set'",
			TokenType::Table => "'table'",
			TokenType::Eval => "'eval'",
			TokenType::Infer => "'infer'",
			TokenType::Eof => "end of input",
		}
	}
}
