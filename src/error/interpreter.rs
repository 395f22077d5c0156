/// Errors that can occur while executing an instruction block.
#[derive(thiserror::Error, Debug)]
pub enum RuntimeError {
	/// `table` named something that is neither a saved expression nor a rule.
	#[error("Unknown rule or expression '{0}'")]
	UnknownTarget(String),
}
