//! Terminal and JSON output for arranged lines.
//!
//! Glue is printed as spaces, including the glue that ends a line, so a
//! justified line always spans the full target width. Cell positions are
//! rounded from the running effective width, so rounding error never
//! accumulates along a line.

use quire::{Composition, ComponentTree, Line, LineFit, NodeId};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Serialize)]
pub struct RenderedLine {
    pub index: usize,
    pub fit: LineFit,
    pub target_width: f64,
    pub effective_width: f64,
    pub text: String,
    pub members: Vec<RenderedMember>,
}

#[derive(Debug, Serialize)]
pub struct RenderedMember {
    pub node: NodeId,
    pub text: String,
    pub scale: f64,
    pub effective_width: f64,
}

pub fn rendered_lines(composition: &Composition) -> Vec<RenderedLine> {
    let tree = composition.tree();
    composition
        .lines()
        .iter()
        .enumerate()
        .map(|(index, line)| RenderedLine {
            index,
            fit: line.fit(),
            target_width: line.target_width(),
            effective_width: line.effective_width(),
            text: line_text(tree, line),
            members: line
                .members()
                .iter()
                .map(|m| RenderedMember {
                    node: m.node,
                    text: words_of(tree, m.node),
                    scale: m.scale,
                    effective_width: m.effective_width(),
                })
                .collect(),
        })
        .collect()
}

pub fn to_text(composition: &Composition) -> String {
    rendered_lines(composition)
        .into_iter()
        .map(|line| match line.fit {
            LineFit::Exact => line.text,
            LineFit::Underfull => format!("{}  [underfull]", line.text),
            LineFit::Overfull => format!("{}  [overfull]", line.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn to_json(composition: &Composition) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&rendered_lines(composition))
}

fn line_text(tree: &ComponentTree, line: &Line) -> String {
    let mut out = String::new();
    let mut position = 0.0;
    let mut cells = 0usize;

    for leaf in line.nodes().flat_map(|node| tree.leaves(node)) {
        let Some(component) = tree.component(leaf) else {
            continue;
        };
        position += component.effective_width();
        match component.text() {
            Some(text) => {
                out.push_str(text);
                cells += UnicodeWidthStr::width(text);
            }
            None => {
                let end = position.round().max(0.0) as usize;
                let gap = end.saturating_sub(cells);
                out.extend(std::iter::repeat_n(' ', gap));
                cells += gap;
            }
        }
    }
    out
}

/// Text of every leaf under `node`, glue excluded.
fn words_of(tree: &ComponentTree, node: NodeId) -> String {
    tree.leaves(node)
        .into_iter()
        .filter_map(|leaf| tree.component(leaf).and_then(|c| c.text()))
        .collect::<Vec<_>>()
        .join(" ")
}
