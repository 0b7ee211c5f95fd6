//! neg2pheno - NegEx extraction followed by PhenoBERT annotation.

use clap::Parser;
use neg2pheno_cli::commands::execute_pipeline;
use neg2pheno_cli::logging::init_logging;
use neg2pheno_cli::{Formatter, PipelineArgs};

fn main() {
    init_logging();

    let args = PipelineArgs::parse();
    let formatter = Formatter::new(!args.no_color);

    if let Err(e) = execute_pipeline(args, &formatter) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(e.exit_code());
    }
}
