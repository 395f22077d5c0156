use logiceval::cli::*;
use palc::Parser;

fn main() {
	let logiceval = logiceval::LogicEval;

	match Cli::parse().mode {
		Mode::File { path } => {
			if let Err(e) = logiceval.run_file(&path) {
				eprintln!("Error: {e}");
			}
		}
		Mode::Repl => logiceval.run_prompt(),
	}
}
