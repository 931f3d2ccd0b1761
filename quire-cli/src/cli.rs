//! Command line arguments.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use quire::{LayoutConfig, StrategyConfig};

#[derive(Debug, Parser)]
#[command(name = "quire", version, about = "Break text into justified lines")]
pub struct Args {
    /// Text to lay out. Reads stdin when omitted. Blank lines separate paragraphs.
    pub text: Option<String>,

    /// TOML layout config; flags override its values.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Line breaking strategy.
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Words per line for the fixed strategy.
    #[arg(long)]
    pub count: Option<usize>,

    /// Maximum natural line width for the paragraph and optimal strategies.
    /// Defaults to the target width.
    #[arg(long)]
    pub max_width: Option<f64>,

    /// Target width every line is justified to.
    #[arg(short, long)]
    pub width: Option<f64>,

    /// How far inter-word space may stretch, as a multiplier.
    #[arg(long, default_value_t = 3.0)]
    pub stretch: f64,

    /// How far inter-word space may shrink, as a multiplier.
    #[arg(long, default_value_t = 0.5)]
    pub shrink: f64,

    /// Print lines as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Simple,
    Fixed,
    Paragraph,
    Optimal,
}

impl Args {
    /// Layer flags over the config file over built-in defaults.
    pub fn layout_config(&self) -> Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => LayoutConfig::default(),
        };

        if let Some(width) = self.width {
            config.target_width = width;
        }

        if let Some(kind) = self.strategy {
            let max_line_width = self.max_width.unwrap_or(config.target_width);
            config.strategy = match kind {
                StrategyKind::Simple => StrategyConfig::Simple,
                StrategyKind::Fixed => match self.count {
                    Some(count) => StrategyConfig::FixedCount { count },
                    None => bail!("--count is required with --strategy fixed"),
                },
                StrategyKind::Paragraph => StrategyConfig::Paragraph {
                    max_line_width,
                    paragraph_breaks: Vec::new(),
                },
                StrategyKind::Optimal => StrategyConfig::Optimal {
                    max_line_width,
                    paragraph_breaks: Vec::new(),
                },
            };
        } else if let Some(max) = self.max_width {
            match &mut config.strategy {
                StrategyConfig::Paragraph { max_line_width, .. }
                | StrategyConfig::Optimal { max_line_width, .. } => *max_line_width = max,
                _ => bail!("--max-width only applies to the paragraph and optimal strategies"),
            }
        }

        config.validate().context("Invalid layout configuration")?;
        Ok(config)
    }
}
