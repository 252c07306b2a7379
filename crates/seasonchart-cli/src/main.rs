//! seasonchart CLI - Seasonal Timeline Charts
//!
//! Loads a CSV dataset, applies form edits one change at a time, and writes
//! the resulting chart.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seasonchart_core::load_dataset;
use seasonchart_render::{Chart, ChartConfig, ChartRenderer, SvgExporter, TextRenderer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "seasonchart")]
#[command(author, version, about = "Seasonal timeline chart renderer", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the chart to an SVG file
    Render {
        /// Dataset CSV file
        #[arg(value_name = "FILE")]
        data: PathBuf,

        /// Output SVG path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the ordered, normalized record set
    Inspect {
        /// Dataset CSV file
        #[arg(value_name = "FILE")]
        data: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(clap::Args)]
struct InputArgs {
    /// Form edit as ID=VALUE, e.g. 0-start-one=2012-06-15 (repeatable)
    #[arg(long = "field", value_name = "ID=VALUE", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Chart layout overrides (TOML)
    #[arg(long, value_name = "FILE", env = "SEASONCHART_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_field(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected ID=VALUE, got '{}'", arg))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Some(Commands::Render {
            data,
            output,
            input,
        }) => {
            let chart = build_chart(&data, &input)?;
            SvgExporter::new()
                .export(chart.state(), &output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("Wrote {} ({} rows)", output.display(), chart.state().records().len());
        }
        Some(Commands::Inspect {
            data,
            format,
            input,
        }) => {
            let chart = build_chart(&data, &input)?;
            match format {
                Format::Text => print!("{}", TextRenderer.render(chart.state())?),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(chart.state().records())?
                ),
            }
        }
        None => {
            println!("seasonchart - Seasonal Timeline Charts");
            println!("Run with --help for usage information");
        }
    }

    Ok(())
}

/// Load the dataset, then replay each form edit as its own change event.
fn build_chart(data: &Path, input: &InputArgs) -> Result<Chart> {
    let config = match &input.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    let dataset =
        load_dataset(data).with_context(|| format!("failed to read dataset {}", data.display()))?;

    let mut chart = Chart::new(config);
    let report = chart.load(dataset);
    tracing::info!(rows = report.entered.len(), "initial load");

    for (id, value) in &input.fields {
        let report = chart.on_field_changed(id, value);
        tracing::info!(
            field = %id,
            entered = report.entered.len(),
            updated = report.updated.len(),
            exited = report.exited.len(),
            "applied form edit"
        );
    }

    Ok(chart)
}
