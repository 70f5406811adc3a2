//! Swarm Digest CLI
//!
//! Command-line front end over `swarm_digest_core`: prints summaries,
//! dumps extracted content as JSON, and writes cleaned swarm output.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use swarm_digest_core::models::CONTENT_KEY;
use swarm_digest_core::state::{read_input, save_cleaned_output, OutputFormat};
use swarm_digest_core::swarm::{analyze_swarm_result, display_swarm_analysis, resolve_payload};
use swarm_digest_core::{extracted_content_schema, DigestConfig};

/// Path that means "read standard input"
const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(
    author,
    version,
    about = "swarm-digest - Clean and summarize multi-agent swarm output"
)]
struct Args {
    /// More log output on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Print a readable summary of a swarm result
    Summarize {
        /// Swarm result file, or `-` for stdin
        input: PathBuf,
        /// Cut responses longer than this many characters
        #[arg(short, long)]
        max_response_length: Option<usize>,
    },
    /// Print cleaned fragments and extracted content as JSON
    Extract {
        /// Swarm result file, or `-` for stdin
        input: PathBuf,
        /// Only print the extracted content
        #[arg(long)]
        content_only: bool,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Write the cleaned fragments to a JSON file
    Clean {
        /// Swarm result file, or `-` for stdin
        input: PathBuf,
        /// Destination file (default: cleaned_swarm_output.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the JSON Schema of the extracted content
    Schema,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let mut config = DigestConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    match args.command {
        CliCommand::Summarize {
            input,
            max_response_length,
        } => {
            if let Some(max) = max_response_length {
                config.summary.max_response_length = max;
            }
            let result = load_swarm_result(&input)?;
            let analysis = display_swarm_analysis(&result, true, &config.summary);
            if analysis.extracted_content.is_empty() {
                tracing::warn!(input = %input.display(), "No swarm sections found");
            }
        }
        CliCommand::Extract {
            input,
            content_only,
            compact,
        } => {
            let result = load_swarm_result(&input)?;
            let analysis = analyze_swarm_result(&result);
            let value = if content_only {
                serde_json::to_value(&analysis.extracted_content)?
            } else {
                serde_json::to_value(&analysis)?
            };
            println!("{}", render_json(&value, compact)?);
        }
        CliCommand::Clean {
            input,
            output,
            compact,
        } => {
            if let Some(path) = output {
                config.output.path = path;
            }
            let format = if compact {
                OutputFormat::Compact
            } else {
                config.output.format()
            };

            clean_to_file(&input, &config.output.path, format)?;
        }
        CliCommand::Schema => {
            println!("{}", render_json(&extracted_content_schema(), false)?);
        }
    }

    Ok(())
}

/// Log to stderr so reports and JSON on stdout stay clean
fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Read an input file (or stdin) and shape it as a raw swarm result
fn load_swarm_result(input: &Path) -> Result<Value> {
    let text = if input == Path::new(STDIN_PATH) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        text
    } else {
        read_input(input).with_context(|| format!("Failed to read input {:?}", input))?
    };
    Ok(raw_result_from_text(text))
}

/// Write the cleaned fragments of `input` to `output`; logs instead of
/// printing so stdout stays free. Returns the fragment count.
fn clean_to_file(input: &Path, output: &Path, format: OutputFormat) -> Result<usize> {
    let result = load_swarm_result(input)?;
    let fragments = resolve_payload(&result);
    save_cleaned_output(&fragments, output, format)
        .with_context(|| format!("Failed to save cleaned output to {:?}", output))?;
    tracing::info!(
        fragments = fragments.len(),
        output = %output.display(),
        "Cleaned swarm output"
    );
    Ok(fragments.len())
}

/// A JSON object is taken as the raw result itself; anything else becomes
/// its `content`, so the pipeline decides between fragment array and plain
/// text.
fn raw_result_from_text(text: String) -> Value {
    match serde_json::from_str::<Value>(&text) {
        Ok(object @ Value::Object(_)) => object,
        _ => serde_json::json!({ CONTENT_KEY: text }),
    }
}

fn render_json(value: &Value, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}
