use std::env;
use std::io;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fasta_diff::cli::{help_text, PROG, USAGE};
use fasta_diff::{resolve, Defaults, ResolveError};

fn main() {
    let defaults = Defaults::default();

    let config = match resolve(env::args().skip(1), defaults) {
        Ok(config) => config,
        Err(ResolveError::Help) => {
            eprint!("{USAGE}\n{}", help_text(&defaults));
            process::exit(1);
        }
        Err(err) => {
            eprint!("{USAGE}");
            eprintln!("{PROG}: error: {err}");
            process::exit(1);
        }
    };

    init_logging(config.quiet());

    info!("master collection: {}", config.master());
    info!("additional collection: {}", config.additional());
    info!("output: {}", config.output());
    info!(
        "operation: {} (matching on {})",
        config.operation(),
        config.match_mode()
    );

    // Engine hand-off point: the reconciliation engine consumes the
    // configuration through Config::into_parts. Files the resolver opened
    // are closed when the configuration goes out of scope.
}

/// Route diagnostics to stderr, keeping stdout free for the reconciled FASTA.
/// The quiet flag suppresses non-fatal output.
fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("fasta_diff=warn")
    } else {
        EnvFilter::new("fasta_diff=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
