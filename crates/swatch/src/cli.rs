use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::format::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "swatch",
    author,
    version,
    about = "Parse, convert, and blend UI colors",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Palette configuration file; can also be supplied via the `SWATCH_CONFIG` env var.
    #[arg(long, global = true, env = "SWATCH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format: `hex`, `hex-alpha`, `argb`, `hsv`, or `json`.
    #[arg(long, global = true, value_name = "FORMAT", value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print each color given as `#RRGGBB`, `#AARRGGBB`, or a palette/named color.
    Parse {
        #[arg(value_name = "COLOR", required = true)]
        colors: Vec<String>,
    },
    /// Build a color from hue, saturation, and value (each 0.0-1.0).
    Hsv {
        #[arg(value_name = "HUE")]
        hue: f32,
        #[arg(value_name = "SATURATION")]
        saturation: f32,
        #[arg(value_name = "VALUE")]
        value: f32,
        /// Alpha channel (0.0-1.0).
        #[arg(long, value_name = "ALPHA", default_value_t = 1.0)]
        alpha: f32,
    },
    /// Print a gradient from one color to another, endpoints included.
    Mix {
        #[arg(value_name = "FROM")]
        from: String,
        #[arg(value_name = "TO")]
        to: String,
        /// Number of colors to print (at least 2).
        #[arg(long, value_name = "N", default_value_t = 5, value_parser = clap::value_parser!(u32).range(2..))]
        steps: u32,
    },
    /// Print random opaque colors.
    Random {
        #[arg(long, value_name = "N", default_value_t = 1)]
        count: u32,
        /// Seed for a reproducible sequence.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,
    },
    /// List the named text colors and any configured palette entries.
    Names,
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_output_format(value: &str) -> Result<OutputFormat, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("output format must not be empty".to_string());
    }

    let normalized = trimmed.to_ascii_lowercase();
    match normalized.as_str() {
        "hex" | "rgb" => Ok(OutputFormat::Hex),
        "hex-alpha" | "hexa" | "argb-hex" => Ok(OutputFormat::HexAlpha),
        "argb" | "int" | "packed" => Ok(OutputFormat::Argb),
        "hsv" => Ok(OutputFormat::Hsv),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!(
            "unknown output format '{other}'; expected hex, hex-alpha, argb, hsv, or json"
        )),
    }
}
