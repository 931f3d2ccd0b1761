//! Plain text to component tree.
//!
//! Every word becomes a rigid leaf whose width is its display width in
//! terminal cells. Words followed by another word in the same paragraph are
//! grouped with one cell of elastic glue, so the glue is what stretches or
//! shrinks when a line is justified. Blank lines start a new paragraph.

use anyhow::Result;
use quire::{Component, ComponentTree, Elasticity, NodeId};
use unicode_width::UnicodeWidthStr;

/// Height of a text line in cells.
const LINE_HEIGHT: f64 = 1.0;
/// Natural width of inter-word glue in cells.
const GLUE_WIDTH: f64 = 1.0;

pub struct Document {
    pub tree: ComponentTree,
    /// Top-level nodes, one per word.
    pub words: Vec<NodeId>,
    /// Index into `words` of each paragraph's first word, except the first.
    pub paragraph_breaks: Vec<usize>,
}

/// Display width in cells, never below one.
pub fn display_width(word: &str) -> f64 {
    UnicodeWidthStr::width(word).max(1) as f64
}

pub fn build(text: &str, glue: Elasticity) -> Result<Document> {
    let mut tree = ComponentTree::new();
    let mut words = Vec::new();
    let mut paragraph_breaks = Vec::new();

    for paragraph in split_paragraphs(text) {
        if !words.is_empty() {
            paragraph_breaks.push(words.len());
        }

        let count = paragraph.len();
        for (i, word) in paragraph.into_iter().enumerate() {
            let leaf = tree.leaf(Component::rigid(display_width(word), LINE_HEIGHT)?.with_text(word));
            if i + 1 == count {
                words.push(leaf);
            } else {
                let space = tree.leaf(Component::new(GLUE_WIDTH, LINE_HEIGHT, glue)?);
                words.push(tree.group_of([leaf, space])?);
            }
        }
    }

    tracing::debug!(
        words = words.len(),
        paragraphs = paragraph_breaks.len() + usize::from(!words.is_empty()),
        "built document"
    );

    Ok(Document {
        tree,
        words,
        paragraph_breaks,
    })
}

/// Words per paragraph; empty paragraphs are dropped.
fn split_paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.extend(line.split_whitespace());
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}
