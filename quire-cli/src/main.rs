//! Quire - break and justify plain text from the command line.
//!
//! Builds a component tree from the input words, arranges it with the
//! configured strategy and prints the justified lines.

mod cli;
mod document;
mod logging;
mod render;

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use quire::{Composition, Elasticity, LayoutConfig};

use crate::cli::Args;
use crate::logging::setup_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.layout_config()?;
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    let glue = Elasticity::new(args.shrink, args.stretch).context("Invalid glue elasticity")?;
    let document = document::build(&text, glue)?;

    let config = LayoutConfig {
        strategy: config
            .strategy
            .with_paragraph_breaks(document.paragraph_breaks.iter().copied()),
        ..config
    };
    let mut composition = Composition::from_config(&config)?;
    composition.set_components(document.tree, document.words)?;
    composition.arrange();

    tracing::debug!(
        lines = composition.lines().len(),
        overfull = composition.overfull_lines().count(),
        underfull = composition.underfull_lines().count(),
        "layout finished"
    );

    let output = if args.json {
        render::to_json(&composition)?
    } else {
        render::to_text(&composition)
    };
    println!("{output}");
    Ok(())
}
