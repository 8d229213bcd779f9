//! Log setup. Events go to stderr so stdout stays clean for status lines.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "info";

/// Pick the log level: `--verbose` / `--quiet` win over the config value.
pub fn resolve_level(verbose: bool, quiet: bool, configured: Option<&str>) -> String {
    if verbose {
        "debug".to_string()
    } else if quiet {
        "warn".to_string()
    } else {
        configured.unwrap_or(DEFAULT_LEVEL).to_string()
    }
}

/// Filter directive covering both fixgen crates at `level`.
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("fixgen_core={0},fixgen_cli={0}", level))
        .unwrap_or_else(|_| EnvFilter::new(format!("fixgen_core={0},fixgen_cli={0}", DEFAULT_LEVEL)))
}

pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
