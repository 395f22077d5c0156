use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "logiceval", after_long_help = "A compiler and REPL for a small boolean-logic language.")]
pub struct Cli {
	#[command(subcommand)]
	pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Run a source file
	File { path: PathBuf },
	/// Start the interactive prompt
	Repl,
}
