//! Command-line entry point.

use std::io::{
    self,
    Write,
};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use js_i18n_fixup::config::ConfigManager;
use js_i18n_fixup::{
    Fixup,
    FixupOutcome,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "js-i18n-fixup",
    version,
    about = "Reconcile translation keys used in JavaScript/TypeScript sources with JSON catalogs"
)]
struct Cli {
    /// Workspace root to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Log every added, removed and updated key
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Locale whose catalog mirrors the source keys (overrides referenceLocale)
    #[arg(short = 'r', long = "reference-locale")]
    reference_locale: Option<String>,
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<FixupOutcome> {
    let mut config_manager = ConfigManager::new(cli.root);
    config_manager.load_settings().context("failed to load settings")?;

    if let Some(reference_locale) = cli.reference_locale {
        let mut settings = config_manager.get_settings().clone();
        settings.reference_locale = reference_locale;
        config_manager.update_settings(settings).context("invalid --reference-locale")?;
    }

    let fixup = Fixup::from_config(&config_manager);
    let outcome = fixup.run(io::stdin().lock(), io::stdout())?;
    Ok(outcome)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(FixupOutcome::Completed(summary)) => {
            tracing::debug!(files = summary.files.len(), "Fixup completed");
            if writeln!(io::stdout(), "OK").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Ok(FixupOutcome::Aborted) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(io::stderr(), "error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
