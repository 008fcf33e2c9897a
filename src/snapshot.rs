//! Deterministic textual snapshots of rendered subtrees
//!
//! This is the crate's inspection surface: a stable, human-readable outline
//! of a shadow subtree plus its serialized HTML. Both forms are
//! deterministic for a given render, which makes them suitable for golden
//! tests and quick CLI inspection.

use crate::dom::{Node, ShadowRoot};

/// A textual snapshot of a rendered shadow subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSnapshot {
    /// Indented tree outline: one line per element or text run
    pub outline: String,
    /// Serialized HTML of the subtree, entity-escaped
    pub html: String,
}

/// Snapshot the contents of a shadow root
pub fn snapshot(root: &ShadowRoot) -> TextSnapshot {
    let mut outline = String::new();
    for node in root.children() {
        write_outline(node, 0, &mut outline);
    }
    TextSnapshot {
        outline,
        html: root.inner_html(),
    }
}

fn write_outline(node: &Node, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push_str(&indent);
                out.push_str(&format!("{:?}\n", trimmed));
            }
        }
        Node::Element(el) => {
            out.push_str(&indent);
            out.push_str(el.tag());
            if let Some(class) = el.attr("class") {
                out.push('.');
                out.push_str(class);
            }
            for (name, value) in el.attrs() {
                if name != "class" {
                    out.push_str(&format!(" {}={:?}", name, value));
                }
            }
            out.push('\n');

            // Stylesheet text is elided from the outline; the `html` field
            // keeps it verbatim.
            if el.tag() == "style" {
                return;
            }
            for child in el.children() {
                write_outline(child, depth + 1, out);
            }
        }
    }
}
