//! fixgen CLI library.
//!
//! Argument types, config loading, logging setup and the command
//! implementations behind the `fixgen` binary.

pub mod cli;
pub mod colors;
pub mod commands;
pub mod config;
pub mod error_chain;
pub mod logging;

use clap::CommandFactory;
use cli::{Cli, Commands};
use colors::red;
use commands::{MapArgs, SortArgs};
use config::FixgenConfig;
use error_chain::{chain_from_error, CliError};

/// Load config, set up logging, dispatch. Returns the process exit code.
pub fn run(cli: Cli) -> i32 {
    let config = match FixgenConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            logging::init(&logging::resolve_level(cli.verbose, cli.quiet, None));
            return report(&e);
        }
    };
    logging::init(&logging::resolve_level(
        cli.verbose,
        cli.quiet,
        config.log_level.as_deref(),
    ));

    match dispatch(&config, cli.command) {
        Ok(()) => 0,
        Err(e) => report(&e),
    }
}

fn dispatch(config: &FixgenConfig, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Map {
            output_dir,
            size,
            seed,
            recipe,
            on_remove_underflow,
            on_get_underflow,
        } => commands::cmd_map(
            config,
            MapArgs {
                output_dir,
                size,
                seed,
                recipe,
                on_remove_underflow,
                on_get_underflow,
            },
        )
        .map(|_| ()),
        Commands::MapSuite { output_root, seed } => {
            commands::cmd_map_suite(config, &output_root, seed).map(|_| ())
        }
        Commands::Sort {
            output_root,
            large_size,
            seed,
            categories,
            include_large_floats,
        } => commands::cmd_sort(
            config,
            SortArgs {
                output_root,
                large_size,
                seed,
                categories,
                include_large_floats,
            },
        )
        .map(|_| ()),
        Commands::Verify { case_dirs } => commands::cmd_verify(&case_dirs),
        Commands::Init => {
            let cwd = std::env::current_dir().map_err(|e| fixgen_core::FixtureError::io(".", e))?;
            commands::cmd_init(&cwd).map(|_| ())
        }
    }
}

fn report(err: &CliError) -> i32 {
    eprintln!("{}", chain_from_error(err).format_with_prefix(&red("error:")));
    if err.is_usage() {
        eprintln!("{}", Cli::command().render_usage());
    }
    1
}
