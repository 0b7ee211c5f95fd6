//! phenobert-annotate - run PhenoBERT's annotate.py over a folder of notes.

use clap::Parser;
use neg2pheno_cli::commands::execute_annotate;
use neg2pheno_cli::logging::init_logging;
use neg2pheno_cli::{AnnotateArgs, Formatter};

fn main() {
    init_logging();

    let args = AnnotateArgs::parse();
    let formatter = Formatter::new(!args.no_color);

    if let Err(e) = execute_annotate(args) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(e.exit_code());
    }
}
