use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tempfile::NamedTempFile;
use tracing::{Level, debug, error, warn};
use woot_sniper::api::WootClient;
use woot_sniper::app::{self, RunOutcome};
use woot_sniper::config::{DEFAULT_CONFIG_PATH, load_config};
use woot_sniper::notifier::{EmailNotifier, Notifier};

/// Polls Woot events and reports offers matching your keywords.
#[derive(Parser, Debug)]
#[command(name = "woot-sniper", version)]
struct Cli {
    /// Alternate config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Print diagnostics
    #[arg(short, long)]
    debug: bool,

    /// Write the HTML report here instead of a discarded temp file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = load_config(&cli.config);
    let debug = cli.debug || config.as_ref().map(|c| c.debug).unwrap_or(false);
    tracing_subscriber::fmt()
        .with_max_level(if debug { Level::DEBUG } else { Level::ERROR })
        .with_target(false)
        .init();

    // Fatal configuration errors abort before any network activity.
    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", cli.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let keywords = match config.search_keywords() {
        Ok(k) => k,
        Err(e) => {
            error!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let client = match config.api_key().map(|key| WootClient::new(&config.api, key)) {
        Ok(Ok(client)) => client,
        Ok(Err(e)) => {
            error!("Failed to create HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let notifier = config.email().and_then(|email| match EmailNotifier::new(email) {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Email disabled: {}", e);
            None
        }
    });

    let mut out: Box<dyn Write> = match open_output(cli.output.as_ref()) {
        Ok(out) => out,
        Err(e) => {
            error!("Cannot open output file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = app::run(
        &keywords,
        &client,
        notifier.as_ref().map(|n| n as &dyn Notifier),
        &mut out,
    )
    .await;

    match result {
        Ok(RunOutcome::NothingToReport) => ExitCode::SUCCESS,
        Ok(RunOutcome::Reported { offers, events }) => {
            debug!("Reported {} offers from {} events", offers, events);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn open_output(path: Option<&PathBuf>) -> std::io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => {
            let temp = NamedTempFile::new()?;
            debug!("Writing report to temporary file {}", temp.path().display());
            Ok(Box::new(temp))
        }
    }
}
