// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use forecourt_model::{CatalogEnvelope, SettingsDocument, CATALOG_FILE, SETTINGS_FILE};
use forecourt_sync::{run_sync_with_events, SyncConfig, SyncOptions};
use serde_json::json;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode as ProcessExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitCode {
    Success = 0,
    Config = 2,
    Validation = 3,
    DependencyFailure = 4,
    Internal = 10,
}

impl ExitCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Config => "config",
            Self::Validation => "validation",
            Self::DependencyFailure => "dependency_failure",
            Self::Internal => "internal",
        }
    }
}

#[derive(Parser)]
#[command(name = "forecourt")]
#[command(about = "Forecourt catalog operations CLI")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pull both spreadsheet ranges and publish cars.json and settings.json.
    Sync {
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
        /// Override the sheets endpoint, e.g. to point at a mirror.
        #[arg(long)]
        sheets_base_url: Option<String>,
        #[arg(long)]
        fleet_range: Option<String>,
        #[arg(long)]
        settings_range: Option<String>,
    },
    /// Parse and validate previously published artifacts.
    Validate {
        #[arg(long, default_value = "data")]
        dir: PathBuf,
    },
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("FORECOURT_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> ProcessExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err((code, message)) => {
            if cli.json {
                println!(
                    "{}",
                    json!({ "error": { "code": code.as_str(), "message": message } })
                );
            } else {
                eprintln!("error: {message}");
            }
            ProcessExitCode::from(code as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), (ExitCode, String)> {
    match &cli.command {
        Commands::Sync {
            out_dir,
            sheets_base_url,
            fleet_range,
            settings_range,
        } => run_sync_command(
            cli,
            out_dir,
            sheets_base_url.as_deref(),
            fleet_range.as_deref(),
            settings_range.as_deref(),
        ),
        Commands::Validate { dir } => run_validate_command(cli, dir),
    }
}

fn run_sync_command(
    cli: &Cli,
    out_dir: &Path,
    sheets_base_url: Option<&str>,
    fleet_range: Option<&str>,
    settings_range: Option<&str>,
) -> Result<(), (ExitCode, String)> {
    let config = SyncConfig::from_env().map_err(|err| (ExitCode::Config, err.0))?;
    let mut opts = SyncOptions {
        out_dir: out_dir.to_path_buf(),
        ..SyncOptions::default()
    };
    if let Some(base) = sheets_base_url {
        opts.sheets_base_url = base.to_string();
    }
    if let Some(range) = fleet_range {
        opts.fleet_range = range.to_string();
    }
    if let Some(range) = settings_range {
        opts.settings_range = range.to_string();
    }

    let (report, events) = run_sync_with_events(&config, &opts)
        .map_err(|err| (ExitCode::DependencyFailure, err.0))?;

    if cli.json {
        let payload = json!({ "report": report, "events": events });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload)
                .map_err(|err| (ExitCode::Internal, err.to_string()))?
        );
    } else if !cli.quiet {
        println!(
            "published {} items ({} rows skipped) and {} settings to {}",
            report.item_count,
            report.skipped_row_count,
            report.setting_count,
            out_dir.display()
        );
        println!("version {} at {}", report.version, report.updated_at);
    }
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct ValidationSummary {
    version: String,
    item_count: usize,
    active_count: usize,
    setting_count: usize,
}

fn run_validate_command(cli: &Cli, dir: &Path) -> Result<(), (ExitCode, String)> {
    let summary = validate_artifacts(dir).map_err(|message| (ExitCode::Validation, message))?;
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary)
                .map_err(|err| (ExitCode::Internal, err.to_string()))?
        );
    } else if !cli.quiet {
        println!(
            "{} valid: version {}, {} items ({} active), {} settings",
            dir.display(),
            summary.version,
            summary.item_count,
            summary.active_count,
            summary.setting_count
        );
    }
    Ok(())
}

fn validate_artifacts(dir: &Path) -> Result<ValidationSummary, String> {
    let catalog_path = dir.join(CATALOG_FILE);
    let bytes = fs::read(&catalog_path)
        .map_err(|err| format!("read {} failed: {err}", catalog_path.display()))?;
    let envelope: CatalogEnvelope = serde_json::from_slice(&bytes)
        .map_err(|err| format!("{} does not parse: {err}", catalog_path.display()))?;
    envelope
        .validate_strict()
        .map_err(|err| format!("{} is invalid: {err}", catalog_path.display()))?;

    let settings_path = dir.join(SETTINGS_FILE);
    let bytes = fs::read(&settings_path)
        .map_err(|err| format!("read {} failed: {err}", settings_path.display()))?;
    let settings: SettingsDocument = serde_json::from_slice(&bytes)
        .map_err(|err| format!("{} does not parse: {err}", settings_path.display()))?;
    if settings.updated_at.trim().is_empty() {
        return Err(format!(
            "{} is invalid: updatedAt must not be empty",
            settings_path.display()
        ));
    }

    Ok(ValidationSummary {
        version: envelope.version.clone(),
        item_count: envelope.cars.len(),
        active_count: envelope.active_items().len(),
        setting_count: settings.entries.len(),
    })
}
