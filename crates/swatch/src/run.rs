use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use uicolor::{named_colors, Color};

use crate::cli::{Cli, Command};
use crate::config::SwatchConfig;
use crate::format::OutputFormat;

pub fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => SwatchConfig::default(),
    };
    let format = cli
        .format
        .or_else(|| config.default_format())
        .unwrap_or_default();
    tracing::debug!(?format, palette = config.palette.len(), "resolved swatch settings");

    let colors = match cli.command {
        Command::Parse { colors } => colors
            .iter()
            .map(|text| resolve(&config, text))
            .collect::<Result<Vec<_>>>()?,
        Command::Hsv {
            hue,
            saturation,
            value,
            alpha,
        } => vec![Color::from_hsva(hue, saturation, value, alpha)],
        Command::Mix { from, to, steps } => {
            gradient(&resolve(&config, &from)?, &resolve(&config, &to)?, steps)
        }
        Command::Random { count, seed } => random_colors(count, seed),
        Command::Names => return print_names(&config, format),
    };

    let mut out = io::stdout().lock();
    for color in &colors {
        writeln!(out, "{}", format.render(color))?;
    }
    Ok(())
}

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<SwatchConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = SwatchConfig::from_toml_str(&contents)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded swatch config");
    Ok(config)
}

fn resolve(config: &SwatchConfig, text: &str) -> Result<Color> {
    config
        .resolve(text)
        .with_context(|| format!("could not resolve color '{}'", text.trim()))
}

/// `steps` evenly spaced colors from `from` to `to`, both ends included.
pub fn gradient(from: &Color, to: &Color, steps: u32) -> Vec<Color> {
    let last = steps.saturating_sub(1).max(1) as f32;
    (0..steps)
        .map(|step| from.interpolate(to, step as f32 / last))
        .collect()
}

fn random_colors(count: u32, seed: Option<u64>) -> Vec<Color> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| Color::random_with(&mut rng)).collect()
        }
        None => (0..count).map(|_| Color::random()).collect(),
    }
}

fn print_names(config: &SwatchConfig, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    for (name, color) in named_colors() {
        writeln!(out, "{name:<16} {}", format.render(color))?;
    }
    for (name, color) in &config.palette {
        writeln!(out, "{name:<16} {} (palette)", format.render(color))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_includes_both_ends() {
        let colors = gradient(&Color::BLACK, &Color::WHITE, 3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], Color::BLACK);
        assert_eq!(colors[1].rgb(), 0x7F7F7F);
        assert_eq!(colors[2], Color::WHITE);
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let first = random_colors(4, Some(7));
        let second = random_colors(4, Some(7));
        assert_eq!(first, second);
        assert!(first.iter().all(|color| color.alpha() == 1.0));
    }

    #[test]
    fn unresolvable_colors_name_the_input() {
        let err = resolve(&SwatchConfig::default(), " #12345 ").unwrap_err();
        assert!(err.to_string().contains("#12345"));
    }
}
