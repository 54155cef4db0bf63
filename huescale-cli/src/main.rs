//! huescale CLI: Evaluate preset color scales from the command line.
//!
//! Values are given as arguments or as a JSON array file, normalized with the
//! scale's native mode unless overridden, and printed as `rgb(...)` strings.
#![allow(clippy::uninlined_format_args)]

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use huescale_core::{
    normalize, LegendEntry, NormalizeMode, NormalizedScalar, RenderConfig, RgbFormat, ScalarInput,
    ScaleId,
};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Core error: {0}")]
    Core(#[from] huescale_core::Error),

    #[error("expected a JSON array of values in {0}")]
    NotAnArray(PathBuf),

    #[error("no values given; pass values or --input <file>")]
    NoValues,
}

/// Preset scale selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scale {
    /// Dark blue, purple, bright orange (11 steps)
    Heatmap,
    /// Seven-stop blue to orange gradient (11 steps)
    SteppedHeatmap,
    /// Red, yellow at 59 %, green
    RedYellowGreen,
    /// Purple, pink, orange, yellow
    Sunset,
    /// Peacock blue to bright mint
    PeacockMint,
    /// Chambray, sky blue, white ice
    Chambray,
    /// Curved deep blue to light teal
    DeepSea,
}

impl From<Scale> for ScaleId {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Heatmap => ScaleId::Heatmap,
            Scale::SteppedHeatmap => ScaleId::SteppedHeatmap,
            Scale::RedYellowGreen => ScaleId::RedYellowGreen,
            Scale::Sunset => ScaleId::Sunset,
            Scale::PeacockMint => ScaleId::PeacockMint,
            Scale::Chambray => ScaleId::Chambray,
            Scale::DeepSea => ScaleId::DeepSea,
        }
    }
}

/// Normalization mode override.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Round to a 0-10 step
    Step,
    /// Clamp to 0-100 without rounding
    Percentage,
}

/// Output format override.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// rgb(r, g, b)
    Spaced,
    /// rgb(r,g,b)
    Compact,
}

/// Map percentages to colors using preset color scales.
#[derive(Parser)]
#[command(name = "huescale")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the color of each value on a scale
    Color {
        /// Scale to sample
        #[arg(short, long, value_enum, default_value = "red-yellow-green")]
        scale: Scale,

        /// Values such as 42, 42.5 or "42%"
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// JSON file holding an array of values
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Override the scale's normalization mode
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Override the scale's output format
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the legend of a scale
    Legend {
        /// Scale to describe
        #[arg(short, long, value_enum)]
        scale: Scale,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List the available scales
    List,
}

/// One evaluated value.
#[derive(Debug, Serialize)]
struct ColorRow {
    input: Value,
    scalar: NormalizedScalar,
    rgb: String,
}

/// Maps a JSON value onto a scalar input; anything but numbers and strings is missing.
fn scalar_input(value: &Value) -> ScalarInput<'_> {
    match value {
        Value::Number(n) => n.as_f64().into(),
        Value::String(s) => ScalarInput::Text(s),
        _ => ScalarInput::Missing,
    }
}

/// Reads a JSON array of values.
fn read_inputs(path: &Path) -> Result<Vec<Value>> {
    let reader = BufReader::new(File::open(path)?);
    match serde_json::from_reader(reader)? {
        Value::Array(values) => Ok(values),
        _ => Err(CliError::NotAnArray(path.to_path_buf())),
    }
}

/// Normalizes and renders every value through `id`.
fn evaluate(id: ScaleId, values: Vec<Value>, config: &RenderConfig) -> Vec<ColorRow> {
    let scale = id.scale();
    let mode = config.mode.unwrap_or(scale.mode());
    let format = config.format.unwrap_or(scale.format());

    values
        .into_iter()
        .map(|input| {
            let scalar = normalize(scalar_input(&input), mode);
            let rgb = scale.sample(scalar).css(format);
            log::debug!("{} {} -> {} -> {}", id, input, scalar, rgb);
            ColorRow { input, scalar, rgb }
        })
        .collect()
}

/// Prints each entry with a true-color swatch.
fn print_legend(id: ScaleId, entries: &[LegendEntry]) -> Result<()> {
    println!("{}", id);
    for entry in entries {
        let swatch = entry.swatch()?;
        println!(
            "  \x1b[48;2;{};{};{}m    \x1b[0m {:<14} {:<20} {}",
            swatch.r,
            swatch.g,
            swatch.b,
            entry.name,
            entry.rgb,
            entry.color.unwrap_or("-")
        );
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Color {
            scale,
            values,
            input,
            mode,
            format,
            json,
        } => {
            let id = ScaleId::from(scale);

            let mut all: Vec<Value> = values.into_iter().map(Value::String).collect();
            if let Some(path) = input {
                log::info!("Reading values from {}", path.display());
                all.extend(read_inputs(&path)?);
            }
            if all.is_empty() {
                return Err(CliError::NoValues);
            }

            let mut config = RenderConfig::new();
            if let Some(mode) = mode {
                config = config.with_mode(match mode {
                    Mode::Step => NormalizeMode::Step,
                    Mode::Percentage => NormalizeMode::Percentage,
                });
            }
            if let Some(format) = format {
                config = config.with_format(match format {
                    Format::Spaced => RgbFormat::Spaced,
                    Format::Compact => RgbFormat::Compact,
                });
            }

            let rows = evaluate(id, all, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    println!("{}", row.rgb);
                }
            }
        }

        Commands::Legend { scale, json } => {
            let id = ScaleId::from(scale);
            let entries = id.legend();
            if json {
                println!("{}", serde_json::to_string_pretty(entries)?);
            } else {
                print_legend(id, entries)?;
            }
        }

        Commands::List => {
            for id in ScaleId::ALL {
                let scale = id.scale();
                let stops: Vec<String> = scale
                    .stops()
                    .iter()
                    .map(|stop| stop.color.css(scale.format()))
                    .collect();
                println!(
                    "{:<18} {:<10} {}",
                    id.to_string(),
                    format!("{:?}", scale.mode()).to_lowercase(),
                    stops.join(" ")
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_scalar_input_from_json() {
        assert_eq!(scalar_input(&json!(42)), ScalarInput::Number(42.0));
        assert_eq!(scalar_input(&json!("42%")), ScalarInput::Text("42%"));
        assert_eq!(scalar_input(&json!(null)), ScalarInput::Missing);
        assert_eq!(scalar_input(&json!(true)), ScalarInput::Missing);
        assert_eq!(scalar_input(&json!({"value": 42})), ScalarInput::Missing);
    }

    #[test]
    fn test_evaluate_mixed_inputs() {
        let values = vec![json!(59), json!("59%"), json!(null), json!(-10)];
        let rows = evaluate(ScaleId::RedYellowGreen, values, &RenderConfig::new());
        let colors: Vec<_> = rows.iter().map(|row| row.rgb.as_str()).collect();
        assert_eq!(
            colors,
            [
                "rgb(255, 255, 0)",
                "rgb(255, 255, 0)",
                "rgb(255, 0, 0)",
                "rgb(255, 0, 0)"
            ]
        );
        assert_eq!(rows[0].scalar, NormalizedScalar::Percentage(59.0));
    }

    #[test]
    fn test_evaluate_with_overrides() {
        let config = RenderConfig::new()
            .with_mode(NormalizeMode::Step)
            .with_format(RgbFormat::Compact);
        let rows = evaluate(ScaleId::RedYellowGreen, vec![json!(56)], &config);
        assert_eq!(rows[0].scalar, NormalizedScalar::Step(6));
        assert_eq!(rows[0].rgb, "rgb(249,255,0)");
    }

    #[test]
    fn test_read_inputs() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[10, "20%", null]"#).unwrap();
        let values = read_inputs(file.path()).unwrap();
        assert_eq!(values, vec![json!(10), json!("20%"), json!(null)]);
    }

    #[test]
    fn test_read_inputs_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"values": [1, 2]}}"#).unwrap();
        assert!(matches!(
            read_inputs(file.path()),
            Err(CliError::NotAnArray(_))
        ));
    }

    #[test]
    fn test_json_row_shape() {
        let rows = evaluate(ScaleId::Chambray, vec![json!("50%")], &RenderConfig::new());
        let value = serde_json::to_value(&rows).unwrap();
        assert_eq!(
            value,
            json!([{
                "input": "50%",
                "scalar": {"mode": "percentage", "value": 50.0},
                "rgb": "rgb(0,102,255)"
            }])
        );
    }
}
