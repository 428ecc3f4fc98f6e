//! `somebar-keys` – check and inspect somebar dconf key paths.
//!
//! # Usage
//!
//! ```text
//! somebar-keys [OPTIONS] <COMMAND>
//!
//! Commands:
//!   check   Recognize key paths, one per line, from files or stdin
//!   list    Print every known key with its kind id, type and default
//!   notify  Resolve a dconf Notify payload into the keys it touches
//!
//! Options:
//!   --config <PATH>   Config file [default: platform config dir]
//!   --format <FMT>    text | json [default: text]
//!
//! check options:
//!   --allow-unknown   Exit successfully even if some lines are unknown
//! ```
//!
//! Results go to stdout.  Logs and warnings go to stderr; their level comes
//! from `RUST_LOG`, or the config's `log_level` when `RUST_LOG` is unset.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use somebar_keys::{Grammar, NotifyEvent};
use somebar_keys_cli::check::{
    check_reader, deny_unknown, enforce, render_json, CheckOptions, CheckReport,
};
use somebar_keys_cli::config::{self, CliConfig, ConfigError};
use somebar_keys_cli::output::{key_rows, render_notify_text, render_rows_text, OutputFormat};

// ── CLI argument definitions ──────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "somebar-keys",
    about = "Recognize and inspect somebar dconf configuration keys",
    version
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, env = "SOMEBAR_KEYS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recognize key paths, one per line.  Reads stdin when no file is given.
    Check {
        files: Vec<PathBuf>,

        /// Exit successfully even if some lines are not known keys.
        #[arg(long)]
        allow_unknown: bool,
    },

    /// Print every known key with its kind id, GVariant type and default.
    List,

    /// Resolve a dconf Notify payload (prefix plus relative changes).
    Notify {
        prefix: String,
        changes: Vec<String>,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CliConfig> {
    let result = match path {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    match result {
        Ok(cfg) => Ok(cfg),
        // No HOME or XDG dir: run with defaults rather than refuse to start.
        Err(ConfigError::NoPlatformConfigDir) => Ok(CliConfig::default()),
        Err(e) => Err(e).context("failed to load configuration"),
    }
}

fn run_check(files: &[PathBuf], options: CheckOptions) -> anyhow::Result<Vec<CheckReport>> {
    if files.is_empty() {
        return Ok(vec![check_reader("-", io::stdin().lock(), options)?]);
    }

    files
        .iter()
        .map(|path| -> anyhow::Result<CheckReport> {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Ok(check_reader(
                &path.display().to_string(),
                BufReader::new(file),
                options,
            )?)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    debug!(?config, "configuration loaded");
    Grammar::builtin()
        .validate()
        .context("builtin grammar is inconsistent")?;

    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Check {
            files,
            allow_unknown,
        } => {
            let options = CheckOptions {
                trim: config.check.trim,
            };
            let reports = run_check(&files, options)?;

            match cli.format {
                OutputFormat::Text => {
                    for report in &reports {
                        stdout.write_all(report.render_text().as_bytes())?;
                    }
                }
                OutputFormat::Json => writeln!(stdout, "{}", render_json(&reports)?)?,
            }

            let recognized: usize = reports.iter().map(CheckReport::recognized).sum();
            let unrecognized: usize = reports.iter().map(CheckReport::unrecognized).sum();
            info!(recognized, unrecognized, "check finished");

            enforce(&reports, deny_unknown(&config.check, allow_unknown))?;
        }

        Command::List => {
            let rows = key_rows();
            match cli.format {
                OutputFormat::Text => stdout.write_all(render_rows_text(&rows).as_bytes())?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut stdout, &rows)?;
                    writeln!(stdout)?;
                }
            }
        }

        Command::Notify { prefix, changes } => {
            let event = NotifyEvent::new(prefix, changes);
            match cli.format {
                OutputFormat::Text => stdout.write_all(render_notify_text(&event).as_bytes())?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut stdout, &event.resolve())?;
                    writeln!(stdout)?;
                }
            }
        }
    }

    Ok(())
}
