//! Layout configuration.
//!
//! A [`LayoutConfig`] bundles the target width, comparison tolerance and the
//! break strategy of a composition. It can be written by hand or loaded from
//! TOML:
//!
//! ```toml
//! target_width = 60.0
//!
//! [strategy]
//! kind = "paragraph"
//! max_line_width = 60.0
//! paragraph_breaks = [12, 40]
//! ```
//!
//! Missing fields fall back to [`LayoutConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::breaking::{BreakStrategy, FixedCount, OptimalBreak, ParagraphAware, SimpleBreak};
use crate::error::{Result, invalid};
use crate::justify::Justifier;
use crate::primitives::DEFAULT_TOLERANCE;

/// Default target and maximum line width.
pub const DEFAULT_WIDTH: f64 = 72.0;

/// Serializable choice of break strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    Simple,
    FixedCount {
        count: usize,
    },
    Paragraph {
        max_line_width: f64,
        #[serde(default)]
        paragraph_breaks: Vec<usize>,
    },
    Optimal {
        max_line_width: f64,
        #[serde(default)]
        paragraph_breaks: Vec<usize>,
    },
}

impl StrategyConfig {
    /// Construct the configured strategy, validating its parameters.
    pub fn build(&self) -> Result<Box<dyn BreakStrategy>> {
        let strategy: Box<dyn BreakStrategy> = match self {
            StrategyConfig::Simple => Box::new(SimpleBreak),
            StrategyConfig::FixedCount { count } => Box::new(FixedCount::new(*count)?),
            StrategyConfig::Paragraph {
                max_line_width,
                paragraph_breaks,
            } => Box::new(ParagraphAware::new(
                *max_line_width,
                paragraph_breaks.iter().copied(),
            )?),
            StrategyConfig::Optimal {
                max_line_width,
                paragraph_breaks,
            } => Box::new(OptimalBreak::new(
                *max_line_width,
                paragraph_breaks.iter().copied(),
            )?),
        };
        Ok(strategy)
    }

    /// Add paragraph starts to the width-driven strategies; no-op for the others.
    pub fn with_paragraph_breaks(mut self, breaks: impl IntoIterator<Item = usize>) -> Self {
        if let StrategyConfig::Paragraph {
            paragraph_breaks, ..
        }
        | StrategyConfig::Optimal {
            paragraph_breaks, ..
        } = &mut self
        {
            paragraph_breaks.extend(breaks);
            paragraph_breaks.sort_unstable();
            paragraph_breaks.dedup();
        }
        self
    }

    pub fn name(&self) -> &'static str {
        match self {
            StrategyConfig::Simple => "simple",
            StrategyConfig::FixedCount { .. } => "fixed_count",
            StrategyConfig::Paragraph { .. } => "paragraph",
            StrategyConfig::Optimal { .. } => "optimal",
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Paragraph {
            max_line_width: DEFAULT_WIDTH,
            paragraph_breaks: Vec::new(),
        }
    }
}

/// Everything a composition needs besides its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width every line is justified to.
    pub target_width: f64,
    /// Width comparisons closer than this count as equal.
    pub tolerance: f64,
    pub strategy: StrategyConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_WIDTH,
            tolerance: DEFAULT_TOLERANCE,
            strategy: StrategyConfig::default(),
        }
    }
}

impl LayoutConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LayoutConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), strategy = config.strategy.name(), "loaded layout config");
        Ok(config)
    }

    /// Check every value, including the strategy parameters.
    pub fn validate(&self) -> Result<()> {
        validate_target_width(self.target_width)?;
        self.justifier()?;
        self.strategy.build()?;
        Ok(())
    }

    pub fn justifier(&self) -> Result<Justifier> {
        Justifier::new(self.tolerance)
    }
}

pub(crate) fn validate_target_width(width: f64) -> Result<f64> {
    if width > 0.0 && width.is_finite() {
        Ok(width)
    } else {
        Err(invalid(format!(
            "target width must be a positive finite value, got {width}"
        )))
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn test_default_is_valid() {
        LayoutConfig::default().validate().unwrap();
    }

    #[test]
    fn test_parse_fixed_count() {
        let config = LayoutConfig::from_toml_str(
            r#"
            target_width = 150.0

            [strategy]
            kind = "fixed_count"
            count = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.target_width, 150.0);
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.strategy, StrategyConfig::FixedCount { count: 3 });
        assert_eq!(config.strategy.build().unwrap().name(), "fixed_count");
    }

    #[test]
    fn test_parse_paragraph_defaults_breaks() {
        let config = LayoutConfig::from_toml_str(
            r#"
            [strategy]
            kind = "paragraph"
            max_line_width = 40.0
            "#,
        )
        .unwrap();

        assert_eq!(config.target_width, DEFAULT_WIDTH);
        assert_eq!(
            config.strategy,
            StrategyConfig::Paragraph {
                max_line_width: 40.0,
                paragraph_breaks: vec![]
            }
        );
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(LayoutConfig::from_toml_str("").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = LayoutConfig::from_toml_str("[strategy]\nkind = \"fixed_count\"\ncount = 0\n")
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));

        let err = LayoutConfig::from_toml_str("target_width = -3.0").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));

        let err = LayoutConfig::from_toml_str("tolerance = -1.0").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));

        let err = LayoutConfig::from_toml_str(
            "[strategy]\nkind = \"optimal\"\nmax_line_width = 0.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_malformed_document() {
        let err = LayoutConfig::from_toml_str("[strategy]\nkind = \"zigzag\"\n").unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_with_paragraph_breaks_merges() {
        let strategy = StrategyConfig::Optimal {
            max_line_width: 10.0,
            paragraph_breaks: vec![5, 2],
        }
        .with_paragraph_breaks([2, 9]);

        assert_eq!(
            strategy,
            StrategyConfig::Optimal {
                max_line_width: 10.0,
                paragraph_breaks: vec![2, 5, 9]
            }
        );
        assert_eq!(
            StrategyConfig::Simple.with_paragraph_breaks([1]),
            StrategyConfig::Simple
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, "target_width = 30.0\n[strategy]\nkind = \"simple\"\n").unwrap();

        let config = LayoutConfig::load(&path).unwrap();
        assert_eq!(config.target_width, 30.0);
        assert_eq!(config.strategy, StrategyConfig::Simple);

        let missing = LayoutConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, LayoutError::Io(_)));
    }
}
