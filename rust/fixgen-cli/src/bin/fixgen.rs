//! fixgen: generate input/expected fixture pairs for hash-map and sort exercises.

use clap::error::ErrorKind;
use clap::Parser as ClapParser;
use fixgen_cli::cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Help and version are successful exits; every parse failure,
            // including a missing required argument, exits with 1.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };
    std::process::exit(fixgen_cli::run(cli));
}
