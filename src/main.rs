use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use timecard_audit::classification::classify;
use timecard_audit::config::{AuditConfig, ConfigOverrides, OutputFormat};
use timecard_audit::ingest::load_file;
use timecard_audit::report::{render_json, render_text};

#[derive(Parser, Debug)]
#[command(
    name = "timecard-audit",
    version,
    about = "Flag long spans, short gaps and long shifts in employee timecards"
)]
struct Cli {
    /// Timecard CSV file to audit (header row first, nine columns per row)
    #[arg(short, long, env = "TIMECARD_AUDIT_INPUT")]
    input: Option<PathBuf>,

    /// Report format [default: text]
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// YAML file providing `input` and `format`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins
/// over the verbosity flag when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => AuditConfig::load(path)?,
        None => AuditConfig::default(),
    };
    let settings = file_config.resolve(ConfigOverrides {
        input: cli.input,
        format: cli.format,
    })?;

    info!(input = %settings.input.display(), "Auditing timecards");

    let records = load_file(&settings.input)?;
    let report = classify(&records)?;

    let output = match settings.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => {
            let mut json = render_json(&report, &settings.input)
                .context("Failed to serialize JSON report")?;
            json.push('\n');
            json
        }
    };
    print!("{}", output);

    Ok(())
}
