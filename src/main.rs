use std::path::PathBuf;

use clap::Parser;
use gh_org_audit::config::Config;
use gh_org_audit::github::GithubDirectory;
use gh_org_audit::{AuditError, Result, export};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;
    let config = Config::from_env()?;
    let directory = GithubDirectory::new(&config)?;
    export::export_org(&directory, &config.organization, &cli.output)
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| AuditError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export a GitHub organization's member and team roster to CSV."
)]
struct Cli {
    /// Destination CSV file path.
    output: PathBuf,
}
