/// Errors raised by the semantic analyzer. Both rules concern names, not
/// values: variables referenced without a prior `set` are deliberately legal
/// and evaluate to `0`.
#[derive(thiserror::Error, Debug)]
pub enum SemanticError {
	/// A rule name was declared twice.
	#[error("Rule '{0}' already defined")]
	DuplicateRule(String),
	/// `infer` named a rule that was never declared.
	#[error("Inference on undefined rule '{0}'")]
	UndefinedRule(String),
}
