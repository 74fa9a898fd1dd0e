//! # Pipeline Run
//!
//! Loads the brief, validates, prints the report, distributes artifacts.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ngen_core::Timestamp;
use ngen_distribute::{distribute, BuildOptions};
use ngen_validate::{validate, ValidationReport, Warning};

use crate::sink::FileSink;

/// Narrative Genesis pipeline — validate a brand narrative brief and
/// generate the AI scriptwriter agent configurations.
#[derive(Parser, Debug)]
#[command(name = "ngen", version, about)]
pub struct Cli {
    /// Path to the narrative brief JSON document.
    #[arg(short, long, default_value = "input_master.json")]
    pub input: PathBuf,

    /// Directory the agent configuration artifacts are written into.
    #[arg(short, long, default_value = "output/agent_configs")]
    pub output: PathBuf,

    /// Validate the brief and stop; write nothing.
    #[arg(short, long)]
    pub validate_only: bool,

    /// Suppress the validation report and summary output.
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the pipeline. `Ok(true)` means the brief was valid and (unless
/// `--validate-only`) all artifacts were written.
pub fn run(cli: &Cli) -> anyhow::Result<bool> {
    let raw = load_document(cli)?;

    let report = validate(&raw);
    if !cli.quiet {
        print!("{report}");
    }
    if !report.is_valid() {
        return Ok(false);
    }

    if let Some(stats) = report.stats() {
        tracing::info!(
            product = %stats.product_name,
            character = %stats.character_name,
            persona = %stats.target_persona,
            "brief validated"
        );
    }

    if cli.validate_only {
        return Ok(true);
    }

    let input = report
        .normalized()
        .context("passing report must carry the normalized brief")?;
    let warnings = render_warnings(&report);

    let mut sink = FileSink::new(&cli.output)
        .with_context(|| format!("cannot create output directory {}", cli.output.display()))?;
    let summary = distribute(
        input,
        &BuildOptions::default(),
        &warnings,
        Timestamp::now(),
        &mut sink,
    )
    .context("distribution failed")?;

    if !cli.quiet {
        println!("Generated {} artifact(s) in {}:", summary.artifacts.len() + 1, sink.dir().display());
        for artifact in &summary.artifacts {
            println!("  {} ({} bytes)", artifact.file_name, artifact.size_bytes);
        }
        println!("  {}", ngen_distribute::REPORT_FILE_NAME);
    }

    Ok(true)
}

fn load_document(cli: &Cli) -> anyhow::Result<serde_json::Value> {
    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("cannot read input file {}", cli.input.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", cli.input.display()))
}

fn render_warnings(report: &ValidationReport) -> Vec<String> {
    report
        .warnings()
        .iter()
        .map(|Warning { path, message }| format!("{path}: {message}"))
        .collect()
}
