use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::setup::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = cli::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so rendered output on stdout stays clean. `RUST_LOG`
/// overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "gradebook=debug"
    } else {
        "gradebook=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
