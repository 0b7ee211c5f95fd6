//! neg2pheno-extract - affirmed HPO mentions per clinical note.

use clap::Parser;
use neg2pheno_cli::commands::execute_extract;
use neg2pheno_cli::logging::init_logging;
use neg2pheno_cli::{ExtractArgs, Formatter};

fn main() {
    init_logging();

    let args = ExtractArgs::parse();
    let formatter = Formatter::new(!args.no_color);

    if let Err(e) = execute_extract(args, &formatter) {
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(e.exit_code());
    }
}
