//! Petrel CLI - run Codex in Apple containers

use clap::Parser;
use tracing_subscriber::EnvFilter;

use petrel_cli::cli::Cli;
use petrel_cli::output::OutputContext;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let output = OutputContext::new(cli.no_color, cli.quiet);
    if let Err(e) = cli.run().await {
        output.error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
