use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use theatre_data::cli::{run, Cli};
use tracing::Level;

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let success = run(cli).context("theatre-data failed")?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
