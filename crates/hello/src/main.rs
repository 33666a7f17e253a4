mod cli;

use std::io::Write;

use clap::Parser;
use cli::Cli;
use hello_core::{greeting, Config};

fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::embedded();
    writeln!(out, "{}", greeting(&config))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the greeting
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    if !cli.args.is_empty() {
        tracing::debug!(count = cli.args.len(), "ignoring arguments");
    }

    run(&mut std::io::stdout().lock())
}
