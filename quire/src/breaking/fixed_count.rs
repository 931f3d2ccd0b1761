//! A fixed number of nodes per line.

use std::num::NonZeroUsize;

use super::BreakStrategy;
use crate::error::{Result, invalid};
use crate::line::{Line, Measure};

/// Puts exactly `count` nodes on each line; the last line takes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCount {
    count: NonZeroUsize,
}

impl FixedCount {
    /// Fails with `InvalidConfiguration` when `count` is zero.
    pub fn new(count: usize) -> Result<Self> {
        NonZeroUsize::new(count)
            .map(|count| Self { count })
            .ok_or_else(|| invalid("fixed count must be at least 1"))
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl BreakStrategy for FixedCount {
    fn name(&self) -> &'static str {
        "fixed_count"
    }

    fn arrange(&self, items: &[Measure]) -> Vec<Line> {
        items.chunks(self.count.get()).map(Line::from_measures).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breaking::test_support::measures;

    fn lens(lines: &[Line]) -> Vec<usize> {
        lines.iter().map(Line::len).collect()
    }

    #[test]
    fn test_zero_is_rejected() {
        assert!(FixedCount::new(0).is_err());
        assert_eq!(FixedCount::new(3).unwrap().count(), 3);
    }

    #[test]
    fn test_remainder_goes_on_last_line() {
        let lines = FixedCount::new(3).unwrap().arrange(&measures(&[1.0; 7]));
        assert_eq!(lens(&lines), vec![3, 3, 1]);
    }

    #[test]
    fn test_exact_multiple() {
        let lines = FixedCount::new(2).unwrap().arrange(&measures(&[1.0; 6]));
        assert_eq!(lens(&lines), vec![2, 2, 2]);
    }

    #[test]
    fn test_count_larger_than_input() {
        let lines = FixedCount::new(10).unwrap().arrange(&measures(&[1.0; 4]));
        assert_eq!(lens(&lines), vec![4]);
    }

    #[test]
    fn test_line_count_matches_ceiling() {
        for n in 1..=5 {
            for m in 0..=12 {
                let lines = FixedCount::new(n).unwrap().arrange(&measures(&vec![1.0; m]));
                assert_eq!(lines.len(), m.div_ceil(n), "n={n} m={m}");
                if let Some(last) = lines.last() {
                    let expected = if m % n == 0 { n } else { m % n };
                    assert_eq!(last.len(), expected, "n={n} m={m}");
                }
            }
        }
    }
}
