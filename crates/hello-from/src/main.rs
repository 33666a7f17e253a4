mod cli;

use std::io::Write;

use cli::Cli;
use hello_core::{greeting_from, runtime_version, Config};

fn run(message: Option<&str>, out: &mut impl Write) -> anyhow::Result<()> {
    let config = Config::embedded();
    let from = message.unwrap_or(runtime_version());
    writeln!(out, "{}", greeting_from(&config, from))?;
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

    let cli = Cli::parse_args(std::env::args_os());
    if cli.args.len() > 1 {
        tracing::debug!(count = cli.args.len() - 1, "ignoring extra arguments");
    }

    run(cli.message().as_deref(), &mut std::io::stdout().lock())
}
