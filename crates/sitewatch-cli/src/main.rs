//! sitewatch: loads a live-reload server configuration the way the host
//! tool would and reports the result.

mod cli;

use cli::{Args, Command};
use sitewatch_common::SitewatchError;
use sitewatch_config::{Configuration, LOCAL_CONFIG_FILE};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "sitewatch=info";

fn init_logging(log_level: Option<&str>) {
    let directive = log_level.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("ignoring invalid log level {directive:?}: {e}");
            filter
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(args: &Args) -> Result<Configuration, SitewatchError> {
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {}", path.display());
            sitewatch_config::load_from_path(path)?
        }
        None => sitewatch_config::load()?,
    };
    Ok(config)
}

/// One-line description of what the host tool would do with `config`.
fn summary(config: &Configuration) -> String {
    format!(
        "serving {} over {}, watching {} pattern(s) in {}, reload delay {} ms",
        config.server_root().display(),
        config.scheme(),
        config.watch_patterns().len(),
        config.working_directory().display(),
        config.reload_delay_ms(),
    )
}

fn run(args: Args) -> sitewatch_common::Result<()> {
    let mut out = std::io::stdout().lock();

    match args.command {
        Command::Check => {
            let config = load(&args)?;
            if config.debug_enabled() {
                tracing::debug!(?config, "Resolved configuration");
            }
            writeln!(out, "ok: {}", summary(&config))?;
        }
        Command::Show => {
            let config = load(&args)?;
            writeln!(out, "{}", sitewatch_config::config_to_json(&config))?;
        }
        Command::Init { ref path, force } => {
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE));
            sitewatch_config::create_default_config(&path, force)?;
            writeln!(out, "wrote {}", path.display())?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
