//! # logiceval
//!
//! A compiler and interpreter for a small boolean-logic language:
//! expressions over variables and the literals `0`/`1` built from `&`, `|`,
//! `^`/`xor`, `->` and `!`, plus statements for evaluating expressions,
//! setting variables, declaring named rules, printing truth tables,
//! re-evaluating the last expression, and looking up rule values.
//!
//! ## Pipeline
//!
//! Source text flows through the classic stages:
//!
//! 1. The scanner turns characters into tokens, tracking line and column
//!    for diagnostics.
//! 2. The parser is a recursive-descent, precedence-climbing parser
//!    producing a `Program` of statements.
//! 3. The semantic analyzer rejects rule redefinition and inference over
//!    undefined rules. Free variables are allowed; they default to `0` when
//!    evaluated.
//! 4. The IR generator lowers each statement to flat three-address code,
//!    one instruction per operator, with temporaries `t1`, `t2`, ... scoped
//!    to the statement.
//! 5. The optimizer runs a single peephole pass over the instructions:
//!    constant folding and algebraic identities, line by line, never
//!    changing instruction count or order.
//! 6. The interpreter executes instruction blocks and carries the session
//!    state: the variable store, the cached last expression, and the saved
//!    code of every named expression or rule.
//!
//! The whole pipeline is driven per source chunk by [`LogicEval`], which
//! owns one long-lived [`Interpreter`] per session.

pub mod cli;
mod error;
mod interpreter;
mod ir;
mod logiceval;
mod optimizer;
mod parser;
mod scanner;
mod semantic;
mod statement;

pub use error::{
	LogicError, interpreter::RuntimeError, parser::ParseError, scanner::ScanError, semantic::SemanticError,
};
pub use interpreter::Interpreter;
pub use ir::{Instruction, OpCode, Operand, Target};
pub use logiceval::{LogicEval, compile};
